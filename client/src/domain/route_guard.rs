//! Route guard evaluation against an explicit [`AuthContext`].

use super::auth::AuthContext;

/// Access rule attached to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Anyone may visit.
    Public,
    /// Only visitors without a session (login, sign-up).
    GuestOnly,
    /// Any signed-in user.
    Authenticated,
    /// Signed-in administrators only.
    Admin,
}

/// Redirect targets used when a guard refuses entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardRedirects {
    /// Where anonymous visitors are sent.
    pub login: String,
    /// Where signed-in users are sent from guest-only pages.
    pub home: String,
    /// Where non-administrators are sent from admin pages.
    pub forbidden: String,
}

impl Default for GuardRedirects {
    fn default() -> Self {
        Self {
            login: "/login".to_owned(),
            home: "/dashboard".to_owned(),
            forbidden: "/".to_owned(),
        }
    }
}

/// Result of evaluating a route guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the route.
    Allow,
    /// Navigate elsewhere instead.
    Redirect {
        /// Target path.
        to: String,
    },
}

/// Decide whether `ctx` may enter a route guarded by `access`.
///
/// # Examples
/// ```
/// use skill_swap_client::domain::{
///     AuthContext, GuardOutcome, GuardRedirects, RouteAccess, evaluate_route,
/// };
///
/// let outcome = evaluate_route(
///     RouteAccess::Authenticated,
///     &AuthContext::anonymous(),
///     &GuardRedirects::default(),
/// );
/// assert_eq!(outcome, GuardOutcome::Redirect { to: "/login".to_owned() });
/// ```
#[must_use]
pub fn evaluate_route(
    access: RouteAccess,
    ctx: &AuthContext,
    redirects: &GuardRedirects,
) -> GuardOutcome {
    let redirect = |to: &str| GuardOutcome::Redirect { to: to.to_owned() };
    match access {
        RouteAccess::Public => GuardOutcome::Allow,
        RouteAccess::GuestOnly if ctx.is_authenticated() => redirect(&redirects.home),
        RouteAccess::GuestOnly => GuardOutcome::Allow,
        RouteAccess::Authenticated | RouteAccess::Admin if !ctx.is_authenticated() => {
            redirect(&redirects.login)
        }
        RouteAccess::Admin if !ctx.is_admin() => redirect(&redirects.forbidden),
        RouteAccess::Authenticated | RouteAccess::Admin => GuardOutcome::Allow,
    }
}

#[cfg(test)]
mod tests {
    //! Guard decisions for every access level and session shape.

    use super::*;
    use crate::domain::auth::{AccessToken, Role};
    use rstest::{fixture, rstest};

    #[fixture]
    fn redirects() -> GuardRedirects {
        GuardRedirects::default()
    }

    fn session(role: Role) -> AuthContext {
        AuthContext::signed_in(AccessToken::new("token").expect("non-blank token"), role)
    }

    fn redirect(to: &str) -> GuardOutcome {
        GuardOutcome::Redirect { to: to.to_owned() }
    }

    #[rstest]
    #[case::public_anonymous(RouteAccess::Public, None, GuardOutcome::Allow)]
    #[case::guest_anonymous(RouteAccess::GuestOnly, None, GuardOutcome::Allow)]
    #[case::guest_signed_in(RouteAccess::GuestOnly, Some(Role::User), redirect("/dashboard"))]
    #[case::auth_anonymous(RouteAccess::Authenticated, None, redirect("/login"))]
    #[case::auth_signed_in(RouteAccess::Authenticated, Some(Role::User), GuardOutcome::Allow)]
    #[case::admin_anonymous(RouteAccess::Admin, None, redirect("/login"))]
    #[case::admin_as_user(RouteAccess::Admin, Some(Role::User), redirect("/"))]
    #[case::admin_as_admin(RouteAccess::Admin, Some(Role::Admin), GuardOutcome::Allow)]
    fn evaluates_guards(
        redirects: GuardRedirects,
        #[case] access: RouteAccess,
        #[case] role: Option<Role>,
        #[case] expected: GuardOutcome,
    ) {
        let ctx = role.map_or_else(AuthContext::anonymous, session);
        assert_eq!(evaluate_route(access, &ctx, &redirects), expected);
    }

    #[rstest]
    fn custom_redirects_are_honoured() {
        let redirects = GuardRedirects {
            login: "/sign-in".to_owned(),
            ..GuardRedirects::default()
        };
        let outcome = evaluate_route(RouteAccess::Admin, &AuthContext::anonymous(), &redirects);
        assert_eq!(outcome, redirect("/sign-in"));
    }
}
