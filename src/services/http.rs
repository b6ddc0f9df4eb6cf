// ============================================================================
// HTTP - Transport seam between the client and the backend
// ============================================================================
// Every call is credentialed (session cookie) and speaks JSON.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Serialize};
use web_sys::RequestCredentials;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::AckResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path relative to the API base URL, starting with `/`
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: HttpMethod::Get, path: path.into(), body: None }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: HttpMethod::Delete, path: path.into(), body: None }
    }

    pub fn post_empty(path: impl Into<String>) -> Self {
        Self { method: HttpMethod::Post, path: path.into(), body: None }
    }

    pub fn post<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        Self::with_body(HttpMethod::Post, path, body)
    }

    pub fn put<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        Self::with_body(HttpMethod::Put, path, body)
    }

    fn with_body<B: Serialize>(
        method: HttpMethod,
        path: impl Into<String>,
        body: &B,
    ) -> Result<Self, ApiError> {
        let body = serde_json::to_value(body)
            .map_err(|e| ApiError::Parse(format!("Serialization error: {}", e)))?;
        Ok(Self { method, path: path.into(), body: Some(body) })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Decodes OK bodies; turns everything else into the matching `ApiError`
    pub fn into_result<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        if self.ok() {
            self.json()
        } else {
            Err(self.error())
        }
    }

    /// The backend answers most failures with `{ success: false, message }`,
    /// even on 4xx/5xx; keep that message when it is there.
    pub fn error(&self) -> ApiError {
        match serde_json::from_str::<AckResponse>(&self.body) {
            Ok(AckResponse { success: false, message: Some(message) }) => {
                ApiError::Rejected { status: self.status, message }
            }
            _ => ApiError::Status {
                status: self.status,
                message: if self.body.trim().is_empty() {
                    "Request failed".to_string()
                } else {
                    self.body.chars().take(200).collect()
                },
            },
        }
    }
}

#[async_trait(?Send)]
pub trait HttpBackend {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Browser transport built on `fetch`
#[derive(Debug, Clone, PartialEq)]
pub struct GlooBackend {
    base_url: String,
}

impl GlooBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn from_config() -> Self {
        Self::new(CONFIG.api_base_url.clone())
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl HttpBackend for GlooBackend {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = self.url(&request.path);
        log::debug!("🌐 {:?} {}", request.method, url);

        let builder = match request.method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Delete => Request::delete(&url),
        }
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json");

        let response = match request.body {
            Some(body) => {
                builder
                    .json(&body)
                    .map_err(|e| ApiError::Parse(format!("Request build error: {}", e)))?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse { status, body: body.to_string() }
    }

    #[test]
    fn failure_envelope_keeps_backend_message() {
        let err = response(401, r#"{"success": false, "message": "Invalid email or password"}"#).error();
        assert_eq!(
            err,
            ApiError::Rejected { status: 401, message: "Invalid email or password".into() }
        );
    }

    #[test]
    fn non_json_error_becomes_status() {
        let err = response(502, "<html>Bad Gateway</html>").error();
        assert!(matches!(err, ApiError::Status { status: 502, .. }));
        assert!(matches!(response(500, "").error(), ApiError::Status { status: 500, .. }));
    }

    #[test]
    fn ok_body_that_is_not_json_is_a_parse_error() {
        let result: Result<AckResponse, _> = response(200, "not json").into_result();
        assert!(matches!(result, Err(ApiError::Parse(_))));
    }

    #[test]
    fn request_bodies_are_serialized_up_front() {
        let request = ApiRequest::post("/api/auth/forgot-password", &serde_json::json!({"email": "a@b.com"})).unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body, Some(serde_json::json!({"email": "a@b.com"})));
        assert_eq!(GlooBackend::new("http://localhost:5000").url(&request.path), "http://localhost:5000/api/auth/forgot-password");
    }
}
