// ============================================================================
// ADMIN SERVICE - User management endpoints (privileged)
// ============================================================================

use serde::Deserialize;

use super::api_client::{ensure_success, ApiClient};
use super::http::ApiRequest;
use crate::error::ApiError;
use crate::models::{AckResponse, DashboardStats, ManagedUser, NewUser, UserUpdate, UsersPage};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserQuery {
    pub page: u32,
    pub per_page: u32,
    pub search: String,
}

impl UserQuery {
    pub fn to_path(&self) -> String {
        let mut path = format!(
            "/api/admin/users?page={}&per_page={}",
            self.page.max(1),
            self.per_page.max(1)
        );
        let search = self.search.trim();
        if !search.is_empty() {
            path.push_str("&search=");
            path.push_str(&urlencoding::encode(search));
        }
        path
    }
}

#[derive(Deserialize)]
struct UserEnvelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    user: Option<ManagedUser>,
}

#[derive(Deserialize)]
struct StatsEnvelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    stats: DashboardStats,
}

impl ApiClient {
    pub async fn list_users(&self, query: &UserQuery) -> Result<UsersPage, ApiError> {
        let page: UsersPage = self.call(ApiRequest::get(query.to_path())).await?;
        ensure_success(page.success, page.message.clone())?;
        log::info!("👥 {} users loaded (page {}/{})", page.users.len(), page.pagination.page, page.pagination.pages);
        Ok(page)
    }

    pub async fn update_managed_user(&self, id: i64, update: &UserUpdate) -> Result<ManagedUser, ApiError> {
        let envelope: UserEnvelope = self
            .call(ApiRequest::put(format!("/api/admin/users/{}", id), update)?)
            .await?;
        ensure_success(envelope.success, envelope.message)?;
        envelope
            .user
            .ok_or_else(|| ApiError::Parse("update response without user".to_string()))
    }

    /// Returns the backend confirmation message
    pub async fn delete_managed_user(&self, id: i64) -> Result<Option<String>, ApiError> {
        let ack: AckResponse = self.call(ApiRequest::delete(format!("/api/admin/users/{}", id))).await?;
        ensure_success(ack.success, ack.message.clone())?;
        Ok(ack.message)
    }

    pub async fn register_user(&self, new_user: &NewUser) -> Result<ManagedUser, ApiError> {
        let envelope: UserEnvelope = self.call(ApiRequest::post("/api/auth/register", new_user)?).await?;
        ensure_success(envelope.success, envelope.message)?;
        envelope
            .user
            .ok_or_else(|| ApiError::Parse("register response without user".to_string()))
    }

    pub async fn send_user_password_reset(&self, email: &str) -> Result<Option<String>, ApiError> {
        let body = serde_json::json!({ "email": email.trim() });
        let ack: AckResponse = self
            .call(ApiRequest::post("/api/auth/admin/reset-user-password", &body)?)
            .await?;
        ensure_success(ack.success, ack.message.clone())?;
        Ok(ack.message)
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let envelope: StatsEnvelope = self.call(ApiRequest::get("/api/admin/dashboard-stats")).await?;
        ensure_success(envelope.success, envelope.message)?;
        Ok(envelope.stats)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::services::mock::MockBackend;
    use crate::services::HttpMethod;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn query_path_encodes_search_and_clamps_paging() {
        let query = UserQuery { page: 0, per_page: 10, search: " ana reyes ".into() };
        assert_eq!(query.to_path(), "/api/admin/users?page=1&per_page=10&search=ana%20reyes");
        let plain = UserQuery { page: 2, per_page: 25, search: String::new() };
        assert_eq!(plain.to_path(), "/api/admin/users?page=2&per_page=25");
    }

    #[test]
    fn list_users_parses_page() {
        let mock = Rc::new(MockBackend::new());
        mock.respond(
            HttpMethod::Get,
            "/api/admin/users?page=1&per_page=10",
            200,
            json!({
                "success": true,
                "users": [{"id": 1, "email": "admin@b.com", "is_admin": true}],
                "pagination": {"page": 1, "pages": 1, "per_page": 10, "total": 1, "has_next": false, "has_prev": false}
            }),
        );
        let client = ApiClient::new(mock.clone());
        let page = block_on(client.list_users(&UserQuery { page: 1, per_page: 10, search: String::new() })).unwrap();
        assert_eq!(page.users.len(), 1);
        assert_eq!(page.pagination.total, 1);
    }

    #[test]
    fn self_deactivation_is_rejected_with_backend_message() {
        let mock = Rc::new(MockBackend::new());
        mock.respond(
            HttpMethod::Put,
            "/api/admin/users/1",
            400,
            json!({"success": false, "message": "Cannot deactivate yourself"}),
        );
        let client = ApiClient::new(mock.clone());
        let update = UserUpdate { is_active: Some(false), ..Default::default() };
        let err = block_on(client.update_managed_user(1, &update)).unwrap_err();
        assert_eq!(err.user_message(), "Cannot deactivate yourself");
        assert_eq!(mock.calls()[0].body, Some(json!({"is_active": false})));
    }

    #[test]
    fn stats_are_unwrapped() {
        let mock = Rc::new(MockBackend::new());
        mock.respond(
            HttpMethod::Get,
            "/api/admin/dashboard-stats",
            200,
            json!({"success": true, "stats": {"total_users": 5, "active_users": 4, "inactive_users": 1, "admin_users": 2}}),
        );
        let client = ApiClient::new(mock.clone());
        let stats = block_on(client.dashboard_stats()).unwrap();
        assert_eq!(stats.inactive_users, 1);
        assert_eq!(stats.admin_users, 2);
    }
}
