//! Create, retrieve, update and list against a mock API.

mod common;

use common::{envelope, price_json, product_json, TestHarness, FAKE_API_KEY};
use paddle_client::{
    CurrencyCode, ListParams, Money, PaddleClient, PaddleConfig, PaddleError, PriceUpdate,
    ProductCreate, ProductUpdate, Status, TaxCategory,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn retrieve_requests_id_path_with_headers() {
    let h = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/products/pro_1"))
        .and(header("authorization", format!("Bearer {FAKE_API_KEY}").as_str()))
        .and(header("paddle-version", "3"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(product_json("pro_1"))))
        .expect(1)
        .mount(&h.server)
        .await;

    let product = h.client.products().retrieve("pro_1").await.unwrap();

    assert_eq!(product.id.as_str(), "pro_1");
    assert_eq!(product.tax_category, TaxCategory::Saas);
    assert_eq!(product.status, Status::Active);
}

#[tokio::test]
async fn retrieve_missing_resource_is_not_found() {
    let h = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/products/pro_missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"type": "request_error", "code": "entity_not_found", "detail": "Entity not found"}
        })))
        .mount(&h.server)
        .await;

    let err = h.client.products().retrieve("pro_missing").await.unwrap_err();
    assert!(matches!(err, PaddleError::NotFound { ref path } if path == "/products/pro_missing"));
}

#[tokio::test]
async fn retrieve_malformed_json_is_decode_error() {
    let h = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/products/pro_1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&h.server)
        .await;

    let err = h.client.products().retrieve("pro_1").await.unwrap_err();
    assert!(matches!(err, PaddleError::Decode(_)));
}

#[tokio::test]
async fn retrieve_rejects_out_of_set_enum_values() {
    let h = TestHarness::new().await;
    let mut product = product_json("pro_1");
    product["tax_category"] = json!("groceries");

    Mock::given(method("GET"))
        .and(path("/products/pro_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(product)))
        .mount(&h.server)
        .await;

    let err = h.client.products().retrieve("pro_1").await.unwrap_err();
    assert!(matches!(err, PaddleError::Decode(ref msg) if msg.contains("groceries")));
}

#[tokio::test]
async fn retrieve_with_empty_id_sends_nothing() {
    let h = TestHarness::new().await;

    let err = h.client.prices().retrieve("").await.unwrap_err();

    assert!(matches!(err, PaddleError::InvalidRequest(_)));
    assert_eq!(h.request_count().await, 0);
}

#[tokio::test]
async fn retrieve_keeps_reserved_characters_inside_the_id() {
    let h = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/products/pro_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(product_json("pro_1"))))
        .expect(0)
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/prices/pri_9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(price_json("pri_9"))))
        .expect(0)
        .mount(&h.server)
        .await;

    let err = h.client.products().retrieve("pro_1?x=1").await.unwrap_err();
    assert!(matches!(err, PaddleError::NotFound { .. }));

    let err = h
        .client
        .products()
        .retrieve("../prices/pri_9")
        .await
        .unwrap_err();
    assert!(matches!(err, PaddleError::NotFound { .. }));

    assert_eq!(
        h.received_paths().await,
        ["/products/pro_1%3Fx%3D1", "/products/..%2Fprices%2Fpri_9"]
    );
    assert!(h.received_queries().await.iter().all(Vec::is_empty));
}

#[tokio::test]
async fn retrieve_with_dot_segment_id_sends_nothing() {
    let h = TestHarness::new().await;

    let err = h.client.products().retrieve("..").await.unwrap_err();

    assert!(matches!(err, PaddleError::InvalidRequest(_)));
    assert_eq!(h.request_count().await, 0);
}

#[tokio::test]
async fn update_escapes_the_payload_id() {
    let h = TestHarness::new().await;

    Mock::given(method("PATCH"))
        .and(path("/prices/pri_1%2Fpri_2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(price_json("pri_1"))))
        .expect(1)
        .mount(&h.server)
        .await;

    let payload = PriceUpdate::new("pri_1/pri_2").with_description("Monthly");
    h.client.prices().update(&payload).await.unwrap();

    assert_eq!(h.received_paths().await, ["/prices/pri_1%2Fpri_2"]);
}

#[tokio::test]
async fn create_posts_payload_and_decodes_data() {
    let h = TestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/products"))
        .and(body_json(json!({
            "name": "Pro plan",
            "tax_category": "saas",
            "description": "Everything in Basic, and more"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(envelope(product_json("pro_new"))))
        .expect(1)
        .mount(&h.server)
        .await;

    let payload = ProductCreate::new("Pro plan", TaxCategory::Saas)
        .with_description("Everything in Basic, and more");
    let product = h.client.products().create(&payload).await.unwrap();

    assert_eq!(product.id.as_str(), "pro_new");
    assert_eq!(product.name, "Pro plan");
    assert_eq!(
        product.description.as_deref(),
        Some("Everything in Basic, and more")
    );
    assert_eq!(product.created_at.to_rfc3339(), "2024-03-01T10:15:00+00:00");
}

#[tokio::test]
async fn create_bad_request_carries_code_and_detail() {
    let h = TestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/products"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"error": {"code": "X", "detail": "Y"}})),
        )
        .mount(&h.server)
        .await;

    let payload = ProductCreate::new("Pro plan", TaxCategory::Saas);
    let err = h.client.products().create(&payload).await.unwrap_err();

    match err {
        PaddleError::BadRequest { code, detail } => {
            assert_eq!(code, "X");
            assert_eq!(detail, "Y");
        }
        other => panic!("Expected BadRequest, got {other:?}"),
    }
}

#[tokio::test]
async fn create_server_error_is_generic_http_error() {
    let h = TestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&h.server)
        .await;

    let payload = ProductCreate::new("Pro plan", TaxCategory::Saas);
    let err = h.client.products().create(&payload).await.unwrap_err();
    assert!(matches!(err, PaddleError::Http { status: 503 }));
}

#[tokio::test]
async fn update_patches_payload_id_path() {
    let h = TestHarness::new().await;
    let mut updated = price_json("pri_1");
    updated["description"] = json!("Monthly (2024)");
    updated["unit_price"] = json!({"amount": "1200", "currency_code": "USD"});

    Mock::given(method("PATCH"))
        .and(path("/prices/pri_1"))
        .and(body_json(json!({
            "description": "Monthly (2024)",
            "unit_price": {"amount": "1200", "currency_code": "USD"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(updated)))
        .expect(1)
        .mount(&h.server)
        .await;

    let payload = PriceUpdate::new("pri_1")
        .with_description("Monthly (2024)")
        .with_unit_price(Money::new("1200", CurrencyCode::Usd));
    let price = h.client.prices().update(&payload).await.unwrap();

    assert_eq!(price.id.as_str(), "pri_1");
    assert_eq!(price.description, "Monthly (2024)");
    assert_eq!(price.unit_price.amount, "1200");
}

#[tokio::test]
async fn update_bad_request_returns_no_instance() {
    let h = TestHarness::new().await;

    Mock::given(method("PATCH"))
        .and(path("/products/pro_1"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"type": "request_error", "code": "invalid_field", "detail": "name is too long"}
        })))
        .mount(&h.server)
        .await;

    let payload = ProductUpdate::new("pro_1").with_name("x".repeat(300));
    let result = h.client.products().update(&payload).await;

    assert!(matches!(
        result,
        Err(PaddleError::BadRequest { ref code, .. }) if code == "invalid_field"
    ));
}

#[tokio::test]
async fn list_sends_explicit_params() {
    let h = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/prices"))
        .and(query_param("per_page", "2"))
        .and(query_param("after", "pri_0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [price_json("pri_1"), price_json("pri_2")],
            "meta": {
                "request_id": "req_list",
                "pagination": {"per_page": 2, "has_more": true, "estimated_total": 10, "next": null}
            }
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    let page = h
        .client
        .prices()
        .list(&ListParams::after(2, "pri_0"))
        .await
        .unwrap();

    assert_eq!(page.data.len(), 2);
    assert!(page.has_more());
    assert_eq!(page.meta.request_id, "req_list");
}

#[tokio::test]
async fn event_types_return_data_array() {
    let h = TestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/event-types"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {
                    "name": "product.created",
                    "description": "Occurs when a product is created.",
                    "group": "Product",
                    "available_versions": [1]
                },
                {
                    "name": "price.updated",
                    "description": "Occurs when a price is updated.",
                    "group": "Price",
                    "available_versions": [1]
                }
            ],
            "meta": {"request_id": "req_events"}
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    let events = h.client.event_types().await.unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].name, "product.created");
    assert_eq!(events[1].group, "Price");
}

#[tokio::test]
async fn connection_failure_is_transport_error() {
    // Nothing listens on port 1.
    let config = PaddleConfig::new(FAKE_API_KEY).with_base_url("http://127.0.0.1:1");
    let client = PaddleClient::with_config(config).unwrap();

    let err = client.products().retrieve("pro_1").await.unwrap_err();
    assert!(matches!(err, PaddleError::Transport(_)));
    assert!(!err.is_api_error());
}

#[tokio::test]
async fn clients_with_different_keys_are_independent() {
    let h = TestHarness::new().await;
    let other = PaddleClient::with_config(
        PaddleConfig::new("other_key").with_base_url(h.server.uri()),
    )
    .unwrap();

    Mock::given(method("GET"))
        .and(path("/event-types"))
        .and(header("authorization", "Bearer other_key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": [], "meta": {"request_id": "r"}})),
        )
        .expect(1)
        .mount(&h.server)
        .await;

    assert!(other.event_types().await.unwrap().is_empty());
    assert!(matches!(
        h.client.event_types().await,
        Err(PaddleError::NotFound { .. })
    ));
}
