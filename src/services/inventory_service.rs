// ============================================================================
// INVENTORY SERVICE - Polled resource collections
// ============================================================================

use super::api_client::ApiClient;
use super::http::ApiRequest;
use crate::error::ApiError;
use crate::models::{DamagesSnapshot, Notification};

impl ApiClient {
    pub async fn fetch_damages(&self) -> Result<DamagesSnapshot, ApiError> {
        let snapshot: DamagesSnapshot = self.call(ApiRequest::get("/api/damages/")).await?;
        log::debug!(
            "🔍 Damages: {} items, {} pending",
            snapshot.damaged_items.len(),
            snapshot.total_pending_damages
        );
        Ok(snapshot)
    }

    pub async fn fetch_notifications(&self) -> Result<Vec<Notification>, ApiError> {
        // The endpoint answers `null` when there is nothing to report
        let notifications: Option<Vec<Notification>> =
            self.call(ApiRequest::get("/api/inventory/notifications")).await?;
        Ok(notifications.unwrap_or_default())
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
    fn damages_snapshot_is_decoded() {
        let mock = Rc::new(MockBackend::new());
        mock.respond(
            HttpMethod::Get,
            "/api/damages/",
            200,
            json!({
                "damaged_items": [{"id": 3, "product_name": "Pallet jack", "quantity": 1, "status": "pending"}],
                "total_damages": 4,
                "total_pending_damages": 1
            }),
        );
        let client = ApiClient::new(mock.clone());
        let snapshot = block_on(client.fetch_damages()).unwrap();
        assert_eq!(snapshot.total_damages, 4);
        assert!(snapshot.damaged_items[0].is_pending());
    }

    #[test]
    fn damages_http_error_is_reported() {
        let mock = Rc::new(MockBackend::new());
        mock.respond(HttpMethod::Get, "/api/damages/", 500, json!(null));
        let client = ApiClient::new(mock.clone());
        assert!(matches!(
            block_on(client.fetch_damages()),
            Err(ApiError::Status { status: 500, .. })
        ));
    }

    #[test]
    fn null_notifications_are_empty() {
        let mock = Rc::new(MockBackend::new());
        mock.respond(HttpMethod::Get, "/api/inventory/notifications", 200, json!(null));
        let client = ApiClient::new(mock.clone());
        assert!(block_on(client.fetch_notifications()).unwrap().is_empty());
    }
}
