// ============================================================================
// PROFILE VIEWMODEL - Profile edit and password change
// ============================================================================

use super::Feedback;
use crate::models::{ChangePasswordRequest, Identity, ProfileUpdate};
use crate::services::ApiClient;
use crate::utils::{is_valid_email, validate_new_password, ValidationError};

pub const PROFILE_SAVED: &str = "Profile updated successfully!";
pub const PROFILE_FAILED: &str = "Failed to update profile";
pub const PASSWORD_CHANGED: &str = "Password changed successfully!";
pub const PASSWORD_FAILED: &str = "Failed to change password";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileForm {
    pub editing: bool,
    pub draft: ProfileUpdate,
    pub saving: bool,
}

impl ProfileForm {
    pub fn start_editing(&mut self, identity: Option<&Identity>) {
        self.draft = identity.map(ProfileUpdate::from_identity).unwrap_or_default();
        self.editing = true;
    }

    /// Leaves edit mode and discards the draft
    pub fn cancel(&mut self, identity: Option<&Identity>) {
        self.draft = identity.map(ProfileUpdate::from_identity).unwrap_or_default();
        self.editing = false;
    }

    pub fn validate(&self) -> Result<ProfileUpdate, ValidationError> {
        let draft = ProfileUpdate {
            first_name: self.draft.first_name.trim().to_string(),
            last_name: self.draft.last_name.trim().to_string(),
            email: self.draft.email.trim().to_string(),
        };
        if draft.first_name.is_empty() || draft.last_name.is_empty() || draft.email.is_empty() {
            return Err(ValidationError::Required("First name, last name, and email are"));
        }
        if !is_valid_email(&draft.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(draft)
    }

    /// Applies the save result. The form stays in edit mode on failure so
    /// nothing the user typed is lost.
    pub fn finish_save(&mut self, result: &Result<Identity, String>) -> Feedback {
        self.saving = false;
        match result {
            Ok(identity) => {
                self.editing = false;
                self.draft = ProfileUpdate::from_identity(identity);
                Feedback::Success(PROFILE_SAVED.to_string())
            }
            Err(message) => Feedback::Error(message.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordForm {
    pub fn validate(&self) -> Result<ChangePasswordRequest, ValidationError> {
        if self.current_password.is_empty() || self.new_password.is_empty() || self.confirm_password.is_empty() {
            return Err(ValidationError::Required("All password fields are"));
        }
        validate_new_password(&self.new_password, &self.confirm_password)?;
        Ok(ChangePasswordRequest {
            current_password: self.current_password.clone(),
            new_password: self.new_password.clone(),
        })
    }
}

#[derive(Clone)]
pub struct ProfileViewModel {
    api_client: ApiClient,
}

impl ProfileViewModel {
    pub fn new(api_client: ApiClient) -> Self {
        Self { api_client }
    }

    /// Validates, then persists. The `Err` text is what the user sees.
    pub async fn save_profile(&self, form: &ProfileForm) -> Result<Identity, String> {
        let update = form.validate().map_err(|e| e.to_string())?;
        log::info!("📝 Saving profile for {}", update.email);
        self.api_client
            .update_profile(&update)
            .await
            .map_err(|e| e.message_or(PROFILE_FAILED))
    }

    pub async fn change_password(&self, form: &PasswordForm) -> Feedback {
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => return Feedback::Error(e.to_string()),
        };
        match self.api_client.change_password(&request).await {
            Ok(_) => Feedback::Success(PASSWORD_CHANGED.to_string()),
            Err(e) => Feedback::Error(e.message_or(PASSWORD_FAILED)),
        }
    }
}
