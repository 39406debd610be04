//! Common test utilities for Paddle client integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use serde_json::{json, Value};
use wiremock::MockServer;

use paddle_client::{PaddleClient, PaddleConfig};

/// API key used by every test client.
pub const FAKE_API_KEY: &str = "fake_123";

/// Mock server plus a client pointed at it.
pub struct TestHarness {
    /// The mock Paddle API.
    pub server: MockServer,
    /// Client configured against `server`.
    pub client: PaddleClient,
}

impl TestHarness {
    /// Start a fresh mock server and build a client for it.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let config = PaddleConfig::new(FAKE_API_KEY).with_base_url(server.uri());
        let client = PaddleClient::with_config(config).expect("Failed to build client");

        Self { server, client }
    }

    /// Query pairs of every request the server received, in order.
    pub async fn received_queries(&self) -> Vec<Vec<(String, String)>> {
        self.server
            .received_requests()
            .await
            .expect("request recording enabled")
            .iter()
            .map(|req| req.url.query_pairs().into_owned().collect())
            .collect()
    }

    /// Raw (still percent-encoded) paths of every request received, in order.
    pub async fn received_paths(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .expect("request recording enabled")
            .iter()
            .map(|req| req.url.path().to_string())
            .collect()
    }

    /// Number of requests the server received.
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .expect("request recording enabled")
            .len()
    }
}

/// A product as the API returns it.
pub fn product_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Pro plan",
        "tax_category": "saas",
        "description": "Everything in Basic, and more",
        "image_url": null,
        "status": "active",
        "created_at": "2024-03-01T10:15:00.000Z"
    })
}

/// A price as the API returns it.
pub fn price_json(id: &str) -> Value {
    json!({
        "id": id,
        "product_id": "pro_1",
        "description": "Monthly",
        "unit_price": {"amount": "1000", "currency_code": "USD"},
        "billing_cycle": {"interval": "month", "frequency": 1},
        "trial_period": null,
        "tax_mode": "account_setting",
        "unit_price_overrides": [],
        "quantity": {"minimum": 1, "maximum": 100},
        "status": "active"
    })
}

/// Wrap a single resource the way the API does.
pub fn envelope(data: Value) -> Value {
    json!({"data": data, "meta": {"request_id": "req_single"}})
}

/// A listing page of `{"id": ...}` items.
pub fn page_json(ids: &[&str], has_more: bool, per_page: u32) -> Value {
    json!({
        "data": ids.iter().map(|id| json!({"id": id})).collect::<Vec<_>>(),
        "meta": {
            "request_id": "req_123",
            "pagination": {
                "next": null,
                "has_more": has_more,
                "per_page": per_page,
                "estimated_total": 6
            }
        }
    })
}
