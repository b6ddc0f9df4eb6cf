// ============================================================================
// API CLIENT - Auth endpoints (stateless)
// ============================================================================
// No session state lives here; callers decide what to do with each outcome.
// ============================================================================

use std::fmt;
use std::rc::Rc;

use serde::de::DeserializeOwned;

use super::http::{ApiRequest, GlooBackend, HttpBackend};
use crate::error::ApiError;
use crate::models::{
    AckResponse, ChangePasswordRequest, CheckSessionResponse, ForgotPasswordRequest,
    ForgotPasswordResponse, Identity, LoginRequest, LoginResponse, ProfileResponse, ProfileUpdate,
    ResetPasswordRequest,
};

#[derive(Clone)]
pub struct ApiClient {
    backend: Rc<dyn HttpBackend>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.backend, &other.backend)
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(backend: Rc<dyn HttpBackend>) -> Self {
        Self { backend }
    }

    /// Client bound to the configured backend URL
    pub fn browser() -> Self {
        Self::new(Rc::new(GlooBackend::from_config()))
    }

    pub(crate) async fn call<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        self.backend.send(request).await?.into_result()
    }

    /// `Ok(None)` when the backend answered but the session is not authenticated
    pub async fn check_session(&self) -> Result<Option<Identity>, ApiError> {
        let response: CheckSessionResponse = self.call(ApiRequest::get("/api/auth/check")).await?;
        if response.success && response.authenticated {
            Ok(response.user)
        } else {
            Ok(None)
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Option<Identity>, ApiError> {
        let request = ApiRequest::post(
            "/api/auth/login",
            &LoginRequest { email: email.trim().to_string(), password: password.to_string() },
        )?;
        let response: LoginResponse = self.call(request).await?;
        ensure_success(response.success, response.message)?;
        Ok(response.user)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let response = self.backend.send(ApiRequest::post_empty("/api/auth/logout")).await?;
        if response.ok() {
            Ok(())
        } else {
            Err(response.error())
        }
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Identity, ApiError> {
        let response: ProfileResponse = self.call(ApiRequest::put("/api/auth/profile", update)?).await?;
        ensure_success(response.success, response.message)?;
        response
            .user
            .ok_or_else(|| ApiError::Parse("profile response without user".to_string()))
    }

    /// Returns the backend confirmation message
    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<Option<String>, ApiError> {
        let response: AckResponse = self
            .call(ApiRequest::post("/api/auth/change-password", request)?)
            .await?;
        ensure_success(response.success, response.message.clone())?;
        Ok(response.message)
    }

    pub async fn forgot_password(&self, email: &str) -> Result<ForgotPasswordResponse, ApiError> {
        let request = ForgotPasswordRequest { email: email.trim().to_string() };
        let response: ForgotPasswordResponse = self
            .call(ApiRequest::post("/api/auth/forgot-password", &request)?)
            .await?;
        ensure_success(response.success, response.message.clone())?;
        Ok(response)
    }

    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<Option<String>, ApiError> {
        let response: AckResponse = self
            .call(ApiRequest::post("/api/auth/reset-password", request)?)
            .await?;
        ensure_success(response.success, response.message.clone())?;
        Ok(response.message)
    }
}

/// `success: false` inside an OK response
pub(crate) fn ensure_success(success: bool, message: Option<String>) -> Result<(), ApiError> {
    if success {
        Ok(())
    } else {
        Err(ApiError::Rejected { status: 200, message: message.unwrap_or_default() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock::MockBackend;
    use crate::services::HttpMethod;
    use futures::executor::block_on;
    use serde_json::json;

    fn client_with(mock: MockBackend) -> (ApiClient, Rc<MockBackend>) {
        let mock = Rc::new(mock);
        (ApiClient::new(mock.clone()), mock)
    }

    #[test]
    fn check_session_returns_identity_when_authenticated() {
        let mock = MockBackend::new();
        mock.respond(
            HttpMethod::Get,
            "/api/auth/check",
            200,
            json!({"success": true, "authenticated": true, "user": {"email": "a@b.com", "is_admin": false}}),
        );
        let (client, _) = client_with(mock);
        let user = block_on(client.check_session()).unwrap().unwrap();
        assert_eq!(user.email, "a@b.com");
        assert!(!user.is_admin);
    }

    #[test]
    fn check_session_unauthenticated_flag_is_none() {
        let mock = MockBackend::new();
        mock.respond(HttpMethod::Get, "/api/auth/check", 200, json!({"success": true, "authenticated": false}));
        let (client, _) = client_with(mock);
        assert_eq!(block_on(client.check_session()), Ok(None));
    }

    #[test]
    fn check_session_401_is_an_error() {
        let mock = MockBackend::new();
        mock.respond(
            HttpMethod::Get,
            "/api/auth/check",
            401,
            json!({"success": false, "authenticated": false, "message": "Not authenticated"}),
        );
        let (client, _) = client_with(mock);
        assert_eq!(
            block_on(client.check_session()),
            Err(ApiError::Rejected { status: 401, message: "Not authenticated".into() })
        );
    }

    #[test]
    fn login_sends_credentials_and_surfaces_rejection() {
        let mock = MockBackend::new();
        mock.respond(
            HttpMethod::Post,
            "/api/auth/login",
            401,
            json!({"success": false, "message": "Invalid email or password"}),
        );
        let (client, mock) = client_with(mock);
        let err = block_on(client.login(" a@b.com ", "Secret123")).unwrap_err();
        assert_eq!(err.user_message(), "Invalid email or password");
        let call = &mock.calls()[0];
        assert_eq!(call.body, Some(json!({"email": "a@b.com", "password": "Secret123"})));
    }

    #[test]
    fn profile_rejection_in_ok_response() {
        let mock = MockBackend::new();
        mock.respond(HttpMethod::Put, "/api/auth/profile", 200, json!({"success": false, "message": "Email taken"}));
        let (client, _) = client_with(mock);
        let err = block_on(client.update_profile(&ProfileUpdate::default())).unwrap_err();
        assert_eq!(err, ApiError::Rejected { status: 200, message: "Email taken".into() });
    }

    #[test]
    fn forgot_password_keeps_status_for_not_found() {
        let mock = MockBackend::new();
        mock.respond(
            HttpMethod::Post,
            "/api/auth/forgot-password",
            404,
            json!({"success": false, "message": "Email not found"}),
        );
        let (client, _) = client_with(mock);
        let err = block_on(client.forgot_password("ghost@b.com")).unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn logout_reports_transport_failure() {
        let mock = MockBackend::new();
        mock.fail(HttpMethod::Post, "/api/auth/logout", ApiError::Network("offline".into()));
        let (client, _) = client_with(mock);
        assert!(matches!(block_on(client.logout()), Err(ApiError::Network(_))));
    }
}
