// ============================================================================
// LOGISTICS INVENTORY UI - Yew client
// ============================================================================
// Layers:
// - Services: HTTP only, normalized into ApiError
// - State: SessionStore, ToastStore, Poller (no Yew types, testable natively)
// - ViewModels: form rules and action results
// - Routing: routes and guard decisions
// - Hooks / Components: Yew glue and rendering
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod routing;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

pub use components::App;
pub use config::CONFIG;
pub use error::ApiError;
