use yew_router::prelude::*;

use super::guard::RouteGuard;

#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/reset-password")]
    ResetPassword,
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/profile")]
    Profile,
    #[at("/users")]
    Users,
    #[at("/evaluate")]
    Evaluate,
    #[at("/evaluate-list")]
    EvaluateList,
    #[at("/damage")]
    Damage,
    #[at("/purchase-request")]
    PurchaseRequest,
    #[at("/purchase-request-list")]
    PurchaseRequestList,
    #[at("/inventory")]
    Inventory,
    #[at("/maintenance")]
    Maintenance,
    #[at("/product-supplier")]
    ProductSupplier,
    #[at("/products")]
    Products,
    #[at("/suppliers")]
    Suppliers,
    #[at("/departments")]
    Departments,
    #[at("/department-request")]
    DepartmentRequest,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Policy protecting the route; `None` for public pages
    pub fn guard(&self) -> Option<RouteGuard> {
        match self {
            Route::Login | Route::ForgotPassword | Route::ResetPassword | Route::NotFound => None,
            Route::Users => Some(RouteGuard::Privileged),
            _ => Some(RouteGuard::Authenticated),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Sign in",
            Route::ForgotPassword => "Forgot password",
            Route::ResetPassword => "Reset password",
            Route::Home | Route::Dashboard => "Dashboard",
            Route::Profile => "Profile",
            Route::Users => "User Management",
            Route::Evaluate => "Evaluate",
            Route::EvaluateList => "Evaluation List",
            Route::Damage => "Damages",
            Route::PurchaseRequest => "Purchase Request",
            Route::PurchaseRequestList => "Purchase Request List",
            Route::Inventory => "Inventory",
            Route::Maintenance => "Maintenance",
            Route::ProductSupplier => "Product Supplier",
            Route::Products => "Products",
            Route::Suppliers => "Suppliers",
            Route::Departments => "Departments",
            Route::DepartmentRequest => "Department Request",
            Route::NotFound => "Not found",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
    pub admin_only: bool,
}

const fn nav(route: Route, label: &'static str) -> NavItem {
    NavItem { route, label, admin_only: false }
}

/// Sidebar entries, in display order
pub const NAV_ITEMS: &[NavItem] = &[
    nav(Route::Dashboard, "Dashboard"),
    nav(Route::Products, "Products"),
    nav(Route::Suppliers, "Suppliers"),
    nav(Route::ProductSupplier, "Product Supplier"),
    nav(Route::Departments, "Departments"),
    nav(Route::DepartmentRequest, "Department Request"),
    nav(Route::PurchaseRequest, "Purchase Request"),
    nav(Route::PurchaseRequestList, "Purchase Request List"),
    nav(Route::Evaluate, "Evaluate"),
    nav(Route::EvaluateList, "Evaluation List"),
    nav(Route::Inventory, "Inventory"),
    nav(Route::Damage, "Damages"),
    nav(Route::Maintenance, "Maintenance"),
    NavItem { route: Route::Users, label: "User Management", admin_only: true },
    nav(Route::Profile, "Profile"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_paths_are_recognized() {
        assert_eq!(Route::recognize("/damage"), Some(Route::Damage));
        assert_eq!(Route::recognize("/purchase-request-list"), Some(Route::PurchaseRequestList));
        assert_eq!(Route::Users.to_path(), "/users");
        assert_eq!(Route::Home.to_path(), "/");
    }

    #[test]
    fn unknown_paths_fall_to_not_found() {
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
        assert_eq!(Route::NotFound.guard(), None);
    }

    #[test]
    fn only_user_management_is_privileged() {
        let privileged: Vec<&Route> = NAV_ITEMS
            .iter()
            .map(|item| &item.route)
            .filter(|route| route.guard() == Some(RouteGuard::Privileged))
            .collect();
        assert_eq!(privileged, vec![&Route::Users]);
        assert!(NAV_ITEMS.iter().filter(|i| i.admin_only).all(|i| i.route == Route::Users));
    }

    #[test]
    fn auth_pages_are_public() {
        assert_eq!(Route::Login.guard(), None);
        assert_eq!(Route::ForgotPassword.guard(), None);
        assert_eq!(Route::ResetPassword.guard(), None);
        assert_eq!(Route::Inventory.guard(), Some(RouteGuard::Authenticated));
    }
}
