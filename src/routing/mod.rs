pub mod guard;
pub mod routes;

pub use guard::{post_login_route, GuardDecision, LoginQuery, RouteGuard};
pub use routes::{NavItem, Route, NAV_ITEMS};
