// ============================================================================
// RECOVERY VIEWMODEL - Forgot password / reset password
// ============================================================================

use super::Feedback;
use crate::error::ApiError;
use crate::models::{ForgotPasswordResponse, ResetPasswordRequest};
use crate::services::ApiClient;
use crate::utils::{is_valid_email, validate_new_password, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForgotPasswordOutcome {
    Sent {
        email: String,
        admin_name: Option<String>,
        admin_confirmed: bool,
    },
    NotFound,
    Deactivated,
    NotAdmin,
    Failed(String),
}

impl ForgotPasswordOutcome {
    /// 404 and 403 carry meaning of their own; everything else is a plain failure
    pub fn from_result(email: &str, result: Result<ForgotPasswordResponse, ApiError>) -> Self {
        match result {
            Ok(response) => Self::Sent {
                email: email.trim().to_string(),
                admin_name: response.admin_name,
                admin_confirmed: response.admin_confirmed,
            },
            Err(ApiError::Rejected { status: 404, .. }) => Self::NotFound,
            Err(ApiError::Rejected { status: 403, message }) => {
                let lowered = message.to_lowercase();
                if lowered.contains("deactivated") {
                    Self::Deactivated
                } else if lowered.contains("administrator") {
                    Self::NotAdmin
                } else {
                    Self::Failed(message)
                }
            }
            Err(e) => Self::Failed(e.message_or("Failed to send reset email")),
        }
    }

    pub fn feedback(&self) -> Feedback {
        match self {
            Self::Sent { email, admin_confirmed: true, .. } => {
                Feedback::Success(format!("Admin account confirmed! Reset link sent to {}", email))
            }
            Self::Sent { .. } => Feedback::Success("Password reset link sent to your email!".to_string()),
            Self::NotFound => Feedback::Error(
                "Email not found. Please enter the email from your admin account profile.".to_string(),
            ),
            Self::Deactivated => Feedback::Error("Account is deactivated. Please contact support.".to_string()),
            Self::NotAdmin => Feedback::Error(
                "This email exists but is not an admin account. Please use your administrator email."
                    .to_string(),
            ),
            Self::Failed(message) => Feedback::Error(message.clone()),
        }
    }

    /// Inline error shown under the email field
    pub fn field_error(&self) -> Option<&'static str> {
        match self {
            Self::NotFound => Some("Email not found in system"),
            Self::Deactivated => Some("Account is deactivated"),
            Self::NotAdmin => Some("Not an administrator account"),
            Self::Sent { .. } | Self::Failed(_) => None,
        }
    }
}

pub fn validate_recovery_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::Required("Email is"));
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Values arriving through `/reset-password?token=..&email=..` plus the new password
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResetPasswordForm {
    pub email: String,
    pub token: String,
    pub password: String,
    pub confirm_password: String,
}

impl ResetPasswordForm {
    pub fn validate(&self) -> Result<ResetPasswordRequest, ValidationError> {
        if self.email.trim().is_empty() || self.token.trim().is_empty() {
            return Err(ValidationError::Required("A valid reset link is"));
        }
        if self.password.is_empty() || self.confirm_password.is_empty() {
            return Err(ValidationError::Required("Both password fields are"));
        }
        validate_new_password(&self.password, &self.confirm_password)?;
        Ok(ResetPasswordRequest {
            email: self.email.trim().to_lowercase(),
            token: self.token.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Clone)]
pub struct RecoveryViewModel {
    api_client: ApiClient,
}

impl RecoveryViewModel {
    pub fn new(api_client: ApiClient) -> Self {
        Self { api_client }
    }

    pub async fn request_reset(&self, email: &str) -> Result<ForgotPasswordOutcome, ValidationError> {
        validate_recovery_email(email)?;
        log::info!("📧 Requesting password reset for {}", email.trim());
        let result = self.api_client.forgot_password(email).await;
        Ok(ForgotPasswordOutcome::from_result(email, result))
    }

    pub async fn reset_password(&self, form: &ResetPasswordForm) -> Feedback {
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => return Feedback::Error(e.to_string()),
        };
        match self.api_client.reset_password(&request).await {
            Ok(message) => Feedback::Success(
                message.unwrap_or_else(|| "Password has been reset successfully".to_string()),
            ),
            Err(e) => Feedback::Error(e.message_or("Password reset failed")),
        }
    }
}
