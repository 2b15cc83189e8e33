//! HTTP flow over PostgreSQL.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_customer_order_persists_row() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/orders",
            Some(json!({ "customerEmail": "checkout@enouveau.io", "amount": 42.90 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["customerEmail"], "checkout@enouveau.io");
    assert_eq!(response.body["amount"], json!(42.90));
    assert_eq!(response.body["status"], "CREATED");
    assert_eq!(app.db.order_count().await, 1);
}

#[tokio::test]
async fn test_blank_sku_leaves_table_empty() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/orders", Some(json!({ "sku": "", "quantity": 1 })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.db.order_count().await, 0);
}

#[tokio::test]
async fn test_amount_beyond_column_scale_is_rejected_before_insert() {
    let app = TestApp::new().await;

    for amount in [json!(0.001), json!("42.905")] {
        let response = app
            .request(
                "POST",
                "/api/orders",
                Some(json!({ "customerEmail": "a@b.io", "amount": amount })),
            )
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{:?}", response.body);
        assert_eq!(response.body["details"]["fields"][0]["field"], "amount");
    }

    assert_eq!(app.db.order_count().await, 0);
}

#[tokio::test]
async fn test_list_pay_and_conflict() {
    let app = TestApp::new().await;

    let a = app
        .request("POST", "/api/orders", Some(json!({ "sku": "A", "quantity": 1 })))
        .await;
    let b = app
        .request("POST", "/api/orders", Some(json!({ "sku": "B", "quantity": 5 })))
        .await;

    let listed = app.request("GET", "/api/orders", None).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body, json!([a.body, b.body]));

    let id = a.body["id"].as_str().expect("id");
    let paid = app
        .request("POST", &format!("/api/orders/{id}/pay"), None)
        .await;
    assert_eq!(paid.status, StatusCode::OK);
    assert_eq!(paid.body["status"], "PAID");

    let again = app
        .request("POST", &format!("/api/orders/{id}/pay"), None)
        .await;
    assert_eq!(again.status, StatusCode::CONFLICT);

    let detailed = app.request("GET", "/api/health/detailed", None).await;
    assert_eq!(detailed.body["data"]["database"], "connected");
    assert_eq!(detailed.body["data"]["orders"], 2);
}
