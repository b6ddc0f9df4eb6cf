// ============================================================================
// USERS VIEWMODEL - Administration page logic
// ============================================================================

use super::Feedback;
use crate::models::{DashboardStats, ManagedUser, NewUser, UserUpdate, UsersPage};
use crate::services::admin_service::UserQuery;
use crate::services::ApiClient;
use crate::utils::{is_valid_email, password_requirements, ValidationError, USERS_PER_PAGE};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewUserForm {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
}

impl NewUserForm {
    pub fn validate(&self) -> Result<NewUser, ValidationError> {
        let user = NewUser {
            email: self.email.trim().to_lowercase(),
            password: self.password.clone(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            is_admin: self.is_admin,
        };
        if user.email.is_empty() || user.password.is_empty() || user.first_name.is_empty() || user.last_name.is_empty() {
            return Err(ValidationError::Required("All fields are"));
        }
        if !is_valid_email(&user.email) {
            return Err(ValidationError::InvalidEmail);
        }
        let missing = password_requirements(&user.password);
        if !missing.is_empty() {
            return Err(ValidationError::WeakPassword(missing));
        }
        Ok(user)
    }
}

#[derive(Clone)]
pub struct UsersViewModel {
    api_client: ApiClient,
}

impl UsersViewModel {
    pub fn new(api_client: ApiClient) -> Self {
        Self { api_client }
    }

    pub fn query(page: u32, search: &str) -> UserQuery {
        UserQuery { page: page.max(1), per_page: USERS_PER_PAGE, search: search.to_string() }
    }

    pub async fn load(&self, page: u32, search: &str) -> Result<UsersPage, String> {
        self.api_client
            .list_users(&Self::query(page, search))
            .await
            .map_err(|e| e.message_or("Failed to fetch users"))
    }

    pub async fn stats(&self) -> Option<DashboardStats> {
        match self.api_client.dashboard_stats().await {
            Ok(stats) => Some(stats),
            Err(e) => {
                log::warn!("⚠️ Could not load user stats: {}", e);
                None
            }
        }
    }

    pub async fn set_admin(&self, user: &ManagedUser, is_admin: bool) -> Feedback {
        self.apply(user, UserUpdate { is_admin: Some(is_admin), ..Default::default() }).await
    }

    pub async fn set_active(&self, user: &ManagedUser, is_active: bool) -> Feedback {
        self.apply(user, UserUpdate { is_active: Some(is_active), ..Default::default() }).await
    }

    async fn apply(&self, user: &ManagedUser, update: UserUpdate) -> Feedback {
        let Some(id) = user.id else {
            return Feedback::Error("User has no id".to_string());
        };
        match self.api_client.update_managed_user(id, &update).await {
            Ok(updated) => Feedback::Success(format!("{} updated", updated.display_name())),
            Err(e) => Feedback::Error(e.message_or("Failed to update user")),
        }
    }

    pub async fn delete(&self, user: &ManagedUser) -> Feedback {
        let Some(id) = user.id else {
            return Feedback::Error("User has no id".to_string());
        };
        match self.api_client.delete_managed_user(id).await {
            Ok(message) => Feedback::Success(
                message.unwrap_or_else(|| format!("User {} deleted successfully", user.display_name())),
            ),
            Err(e) => Feedback::Error(e.message_or("Failed to delete user")),
        }
    }

    pub async fn create(&self, form: &NewUserForm) -> Feedback {
        let new_user = match form.validate() {
            Ok(new_user) => new_user,
            Err(e) => return Feedback::Error(e.to_string()),
        };
        match self.api_client.register_user(&new_user).await {
            Ok(created) => Feedback::Success(format!("User {} created successfully", created.email)),
            Err(e) => Feedback::Error(e.message_or("Registration failed")),
        }
    }

    pub async fn send_reset_link(&self, user: &ManagedUser) -> Feedback {
        match self.api_client.send_user_password_reset(&user.email).await {
            Ok(message) => Feedback::Success(
                message.unwrap_or_else(|| format!("Password reset link has been sent to {}", user.email)),
            ),
            Err(e) => Feedback::Error(e.message_or("Failed to send reset email")),
        }
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

    fn user(id: Option<i64>) -> ManagedUser {
        ManagedUser { id, email: "clerk@b.com".into(), first_name: "Lee".into(), last_name: "Park".into(), ..Default::default() }
    }

    #[test]
    fn new_user_form_validation() {
        let mut form = NewUserForm { email: "Clerk@B.com ".into(), first_name: "Lee".into(), last_name: "Park".into(), ..Default::default() };
        assert_eq!(form.validate(), Err(ValidationError::Required("All fields are")));

        form.password = "password".into();
        assert!(matches!(form.validate(), Err(ValidationError::WeakPassword(missing)) if missing.len() == 2));

        form.password = "Passw0rd".into();
        assert_eq!(form.validate().unwrap().email, "clerk@b.com");
    }

    #[test]
    fn duplicate_email_is_surfaced() {
        let mock = Rc::new(MockBackend::new());
        mock.respond(HttpMethod::Post, "/api/auth/register", 400, json!({"success": false, "message": "Email already exists"}));
        let vm = UsersViewModel::new(ApiClient::new(mock.clone()));
        let form = NewUserForm {
            email: "clerk@b.com".into(),
            password: "Passw0rd".into(),
            first_name: "Lee".into(),
            last_name: "Park".into(),
            is_admin: false,
        };
        assert_eq!(block_on(vm.create(&form)), Feedback::Error("Email already exists".into()));
    }

    #[test]
    fn delete_uses_backend_message() {
        let mock = Rc::new(MockBackend::new());
        mock.respond(HttpMethod::Delete, "/api/admin/users/4", 200, json!({"success": true, "message": "User Lee Park deleted successfully"}));
        let vm = UsersViewModel::new(ApiClient::new(mock.clone()));
        assert_eq!(
            block_on(vm.delete(&user(Some(4)))),
            Feedback::Success("User Lee Park deleted successfully".into())
        );
    }

    #[test]
    fn users_without_id_are_not_sent() {
        let mock = Rc::new(MockBackend::new());
        let vm = UsersViewModel::new(ApiClient::new(mock.clone()));
        assert!(block_on(vm.set_active(&user(None), false)).is_error());
        assert!(mock.calls().is_empty());
    }

    #[test]
    fn query_uses_fixed_page_size() {
        let query = UsersViewModel::query(0, "lee");
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, USERS_PER_PAGE);
    }
}
