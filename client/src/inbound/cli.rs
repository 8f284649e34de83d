//! Command model and execution for the `skill-swap-admin` binary.
//!
//! The binary only parses arguments and wires adapters; command execution
//! lives here so it can be exercised against a mocked port without spawning
//! a process.

use std::error::Error as StdError;
use std::io::{self, Write};
use std::iter;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::domain::ports::{AdminUsersSource, AdminUsersSourceError};
use crate::domain::{ListParamsInput, StatusFilter, UserStatus, build_list_params};

/// `skill-swap-admin` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "skill-swap-admin",
    about = "Inspect and moderate Skill Swap users through the admin API",
    version
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List one page of users as JSON.
    List(ListArgs),
    /// Change a user's moderation status and print the updated user.
    SetStatus {
        /// Identifier of the user to update.
        #[arg(value_name = "user-id")]
        user_id: String,
        /// New status: ACTIVE, SUSPENDED or BANNED.
        status: UserStatus,
    },
}

/// Filters for the `list` subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// One-based page number (default 1).
    #[arg(long, value_name = "n")]
    pub page: Option<u64>,
    /// Page size (default 12).
    #[arg(long, value_name = "n")]
    pub limit: Option<u64>,
    /// Sort key (default `newest`).
    #[arg(long, value_name = "key")]
    pub sort: Option<String>,
    /// Free-text search term.
    #[arg(long, value_name = "text")]
    pub search: Option<String>,
    /// Status filter: ACTIVE, SUSPENDED, BANNED or ALL.
    #[arg(long, value_name = "status")]
    pub status: Option<StatusFilter>,
}

impl From<ListArgs> for ListParamsInput {
    fn from(value: ListArgs) -> Self {
        Self {
            page: value.page,
            limit: value.limit,
            sort: value.sort,
            search: value.search,
            status: value.status,
        }
    }
}

/// Failures surfaced while executing a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The admin API call failed.
    #[error(transparent)]
    Source(#[from] AdminUsersSourceError),
    /// The result could not be encoded as JSON.
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
    /// The result could not be written.
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

/// Run `command` against `source`, writing pretty JSON to `out`.
///
/// # Errors
///
/// Returns [`CliError`] when the API call fails or output cannot be written.
pub async fn execute<W>(
    command: Command,
    source: &dyn AdminUsersSource,
    out: &mut W,
) -> Result<(), CliError>
where
    W: Write,
{
    match command {
        Command::List(args) => {
            let params = build_list_params(args.into());
            let page = source.list_users(&params).await?;
            info!(
                count = page.len(),
                page = page.pagination.page,
                total = page.pagination.total,
                "listed users"
            );
            write_json(out, &page)
        }
        Command::SetStatus { user_id, status } => {
            let user = source.update_status(&user_id, status).await?;
            info!(user_id = %user.id, status = %user.status, "updated user status");
            write_json(out, &user)
        }
    }
}

/// Render `error` followed by each cause its message does not already
/// include, one `caused by:` line per cause.
#[must_use]
pub fn error_report(error: &dyn StdError) -> String {
    iter::successors(error.source(), |cause| (*cause).source()).fold(
        error.to_string(),
        |mut report, cause| {
            let text = cause.to_string();
            if !report.contains(&text) {
                report.push_str("\n  caused by: ");
                report.push_str(&text);
            }
            report
        },
    )
}

fn write_json<W, T>(out: &mut W, value: &T) -> Result<(), CliError>
where
    W: Write,
    T: Serialize,
{
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    //! Command execution against a mocked admin users port.

    use super::*;
    use crate::domain::NormalizedUser;
    use crate::domain::ports::MockAdminUsersSource;
    use mockall::predicate::eq;
    use pagination::{Paginated, Pagination, PaginationParts};
    use serde_json::{Value, json};

    fn user(id: &str, status: UserStatus) -> NormalizedUser {
        NormalizedUser {
            id: id.to_owned(),
            name: "Ann".to_owned(),
            status,
            ..NormalizedUser::default()
        }
    }

    fn output_json(buffer: &[u8]) -> Value {
        serde_json::from_slice(buffer).expect("output should be JSON")
    }

    #[derive(Debug, Error)]
    #[error("could not load users")]
    struct LoadFailed {
        #[source]
        cause: io::Error,
    }

    #[test]
    fn error_report_lists_causes_not_already_shown() {
        let nested = LoadFailed {
            cause: io::Error::other("connection refused"),
        };
        assert_eq!(
            error_report(&nested),
            "could not load users\n  caused by: connection refused"
        );

        let embedded = CliError::Write(io::Error::other("disk full"));
        assert_eq!(error_report(&embedded), "failed to write output: disk full");
    }

    #[test]
    fn parses_list_flags() {
        let cli = Cli::try_parse_from([
            "skill-swap-admin",
            "list",
            "--page",
            "2",
            "--search",
            "piano",
            "--status",
            "all",
        ])
        .expect("arguments should parse");
        let Command::List(args) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(args.page, Some(2));
        assert_eq!(args.search.as_deref(), Some("piano"));
        assert_eq!(args.status, Some(StatusFilter::All));
    }

    #[test]
    fn rejects_unknown_status_argument() {
        let result = Cli::try_parse_from(["skill-swap-admin", "set-status", "u1", "deleted"]);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn list_sends_defaulted_params_and_prints_page() {
        let mut source = MockAdminUsersSource::new();
        let expected = build_list_params(ListParamsInput {
            search: Some("guitar".to_owned()),
            ..ListParamsInput::default()
        });
        source
            .expect_list_users()
            .with(eq(expected))
            .times(1)
            .returning(|_| {
                Ok(Paginated::new(
                    vec![user("u1", UserStatus::Active)],
                    Pagination::from_parts(PaginationParts {
                        total: Some(1),
                        ..PaginationParts::default()
                    }),
                ))
            });

        let command = Command::List(ListArgs {
            search: Some("  guitar ".to_owned()),
            status: Some(StatusFilter::All),
            ..ListArgs::default()
        });
        let mut buffer = Vec::new();
        execute(command, &source, &mut buffer)
            .await
            .expect("list should succeed");

        let output = output_json(&buffer);
        assert_eq!(output["data"][0]["id"], json!("u1"));
        assert_eq!(output["pagination"]["total"], json!(1));
        assert_eq!(output["pagination"]["totalPages"], json!(1));
    }

    #[tokio::test]
    async fn set_status_prints_updated_user() {
        let mut source = MockAdminUsersSource::new();
        source
            .expect_update_status()
            .withf(|user_id, status| user_id == "u9" && *status == UserStatus::Suspended)
            .times(1)
            .returning(|user_id, status| Ok(user(user_id, status)));

        let command = Command::SetStatus {
            user_id: "u9".to_owned(),
            status: UserStatus::Suspended,
        };
        let mut buffer = Vec::new();
        execute(command, &source, &mut buffer)
            .await
            .expect("set-status should succeed");

        let output = output_json(&buffer);
        assert_eq!(output["id"], json!("u9"));
        assert_eq!(output["status"], json!("SUSPENDED"));
    }

    #[tokio::test]
    async fn source_errors_are_propagated() {
        let mut source = MockAdminUsersSource::new();
        source
            .expect_list_users()
            .returning(|_| Err(AdminUsersSourceError::unauthorised("status 401")));

        let mut buffer = Vec::new();
        let error = execute(Command::List(ListArgs::default()), &source, &mut buffer)
            .await
            .expect_err("unauthorised should fail");
        assert!(matches!(
            error,
            CliError::Source(AdminUsersSourceError::Unauthorised { .. })
        ));
        assert!(buffer.is_empty());
    }
}
