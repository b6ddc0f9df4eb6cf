use serde::{Deserialize, Serialize};

use super::Identity;

/// A row of the user management table
pub type ManagedUser = Identity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Pagination {
    pub page: u32,
    pub pages: u32,
    pub per_page: u32,
    pub total: u32,
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub has_prev: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsersPage {
    pub success: bool,
    #[serde(default)]
    pub users: Vec<ManagedUser>,
    #[serde(default)]
    pub pagination: Pagination,
    #[serde(default)]
    pub message: Option<String>,
}

/// Partial update; absent fields are left untouched by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DashboardStats {
    pub total_users: u32,
    pub active_users: u32,
    pub inactive_users: u32,
    pub admin_users: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_only_serializes_present_fields() {
        let update = UserUpdate { is_active: Some(false), ..Default::default() };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"is_active":false}"#);
    }
}
