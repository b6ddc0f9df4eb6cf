// ============================================================================
// ROUTE GUARDS - Render-or-redirect decisions from a session snapshot
// ============================================================================
// UX only: the backend still enforces authentication and admin rights.
// ============================================================================

use serde::{Deserialize, Serialize};
use yew_router::Routable;

use super::routes::Route;
use crate::state::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGuard {
    /// Any signed-in user
    Authenticated,
    /// Signed-in administrators only
    Privileged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Initial session check still running
    Pending,
    Allow,
    Redirect { to: Route, return_to: Option<String> },
}

impl RouteGuard {
    pub fn evaluate(self, session: &Session, requested: &str) -> GuardDecision {
        if session.loading {
            return GuardDecision::Pending;
        }
        let Some(user) = session.user.as_ref() else {
            return GuardDecision::Redirect { to: Route::Login, return_to: Some(requested.to_string()) };
        };
        match self {
            RouteGuard::Privileged if !user.is_admin => {
                GuardDecision::Redirect { to: Route::Dashboard, return_to: None }
            }
            _ => GuardDecision::Allow,
        }
    }

    pub fn waiting_message(self) -> &'static str {
        match self {
            RouteGuard::Authenticated => "Checking authentication...",
            RouteGuard::Privileged => "Checking admin access...",
        }
    }
}

/// Query string of `/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LoginQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

/// Where to go after signing in: the preserved page when it is a known
/// protected route, otherwise the dashboard.
pub fn post_login_route(from: Option<&str>) -> Route {
    from.filter(|path| path.starts_with('/') && !path.starts_with("//"))
        .and_then(Route::recognize)
        .filter(|route| route.guard().is_some() && *route != Route::Home)
        .unwrap_or(Route::Dashboard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Identity;

    fn signed_in(is_admin: bool) -> Session {
        Session {
            user: Some(Identity { email: "a@b.com".into(), is_admin, ..Default::default() }),
            loading: false,
        }
    }

    fn signed_out() -> Session {
        Session { user: None, loading: false }
    }

    #[test]
    fn both_guards_wait_while_loading() {
        let loading = Session::default();
        assert_eq!(RouteGuard::Authenticated.evaluate(&loading, "/damage"), GuardDecision::Pending);
        assert_eq!(RouteGuard::Privileged.evaluate(&loading, "/users"), GuardDecision::Pending);
    }

    #[test]
    fn authenticated_guard_preserves_requested_location() {
        assert_eq!(
            RouteGuard::Authenticated.evaluate(&signed_out(), "/inventory"),
            GuardDecision::Redirect { to: Route::Login, return_to: Some("/inventory".into()) }
        );
        assert_eq!(RouteGuard::Authenticated.evaluate(&signed_in(false), "/inventory"), GuardDecision::Allow);
    }

    #[test]
    fn privileged_guard_sends_non_admin_to_dashboard() {
        assert_eq!(
            RouteGuard::Privileged.evaluate(&signed_in(false), "/users"),
            GuardDecision::Redirect { to: Route::Dashboard, return_to: None }
        );
        assert_eq!(RouteGuard::Privileged.evaluate(&signed_in(true), "/users"), GuardDecision::Allow);
    }

    #[test]
    fn privileged_guard_sends_anonymous_to_login_keeping_location() {
        let decision = RouteGuard::Privileged.evaluate(&signed_out(), "/users");
        assert_eq!(
            decision,
            GuardDecision::Redirect { to: Route::Login, return_to: Some("/users".into()) }
        );
        // After signing in, an administrator lands back on the page they asked for
        let GuardDecision::Redirect { return_to, .. } = decision else { unreachable!() };
        assert_eq!(post_login_route(return_to.as_deref()), Route::Users);
    }

    #[test]
    fn post_login_route_only_trusts_known_protected_paths() {
        assert_eq!(post_login_route(Some("/damage")), Route::Damage);
        assert_eq!(post_login_route(Some("/users")), Route::Users);
        assert_eq!(post_login_route(None), Route::Dashboard);
        assert_eq!(post_login_route(Some("/login")), Route::Dashboard);
        assert_eq!(post_login_route(Some("//evil.example.com")), Route::Dashboard);
        assert_eq!(post_login_route(Some("https://evil.example.com")), Route::Dashboard);
        assert_eq!(post_login_route(Some("/nowhere")), Route::Dashboard);
    }
}
