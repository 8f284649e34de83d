//! Admin CLI for the Skill Swap API: wires configuration, logging and the
//! HTTP adapter, then delegates to `skill_swap_client::inbound::cli`.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use skill_swap_client::config::ClientSettings;
use skill_swap_client::inbound::cli::{Cli, error_report, execute};
use skill_swap_client::outbound::http::HttpAdminUsersSource;

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{}", error_report(&*err)) {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = ClientSettings::load_from_iter([OsString::from("skill-swap-admin")])?;
    let source = HttpAdminUsersSource::new(
        settings.api_base_url()?,
        settings.timeout(),
        settings.auth_context()?,
    )?;

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    let mut stdout = io::stdout().lock();
    runtime.block_on(execute(cli.command, &source, &mut stdout))?;
    Ok(())
}
