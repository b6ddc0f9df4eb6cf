// ViewModels: form logic that returns values; components apply them to state

pub mod profile_viewmodel;
pub mod recovery_viewmodel;
pub mod users_viewmodel;

pub use profile_viewmodel::{PasswordForm, ProfileForm, ProfileViewModel};
pub use recovery_viewmodel::{ForgotPasswordOutcome, RecoveryViewModel, ResetPasswordForm};
pub use users_viewmodel::{NewUserForm, UsersViewModel};

/// Message for the toaster after a form action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Success(String),
    Error(String),
}

impl Feedback {
    pub fn message(&self) -> &str {
        match self {
            Feedback::Success(m) | Feedback::Error(m) => m,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Feedback::Error(_))
    }
}
