pub mod admin;
pub mod auth;
pub mod inventory;

pub use admin::{DashboardStats, ManagedUser, NewUser, Pagination, UserUpdate, UsersPage};
pub use auth::{
    AckResponse, ChangePasswordRequest, CheckSessionResponse, ForgotPasswordRequest,
    ForgotPasswordResponse, Identity, LoginRequest, LoginResponse, ProfileResponse,
    ProfileUpdate, ResetPasswordRequest,
};
pub use inventory::{DamageRecord, DamagesSnapshot, Notification};
