pub mod admin_service;
pub mod api_client;
pub mod http;
pub mod inventory_service;

#[cfg(test)]
pub mod mock;

pub use api_client::ApiClient;
pub use http::{ApiRequest, ApiResponse, GlooBackend, HttpBackend, HttpMethod};
