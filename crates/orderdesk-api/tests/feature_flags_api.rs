//! HTTP tests for the feature flag endpoints.

mod common;

use http::StatusCode;
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn test_defaults_without_configuration() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/feature-flags", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "expressCheckout": false, "currency": "EUR" }));
}

#[tokio::test]
async fn test_flags_reflect_configuration() {
    let app =
        TestApp::with_config("[features.checkout]\nexpress = true\ncurrency = \"USD\"\n").await;

    let response = app.request("GET", "/feature-flags", None).await;

    assert_eq!(response.body, json!({ "expressCheckout": true, "currency": "USD" }));
}

#[tokio::test]
async fn test_refresh_applies_new_configuration() {
    let app = TestApp::with_config("[features.checkout]\nexpress = false\n").await;
    app.rewrite_config("[features.checkout]\nexpress = true\ncurrency = \"GBP\"\n");

    let refreshed = app.request("POST", "/feature-flags/refresh", None).await;
    assert_eq!(refreshed.status, StatusCode::OK);
    assert_eq!(refreshed.body, json!({ "expressCheckout": true, "currency": "GBP" }));

    let current = app.request("GET", "/feature-flags", None).await;
    assert_eq!(current.body, refreshed.body);
}

#[tokio::test]
async fn test_failed_refresh_keeps_serving_old_flags() {
    let app = TestApp::with_config("[features.checkout]\nexpress = true\n").await;
    app.rewrite_config("[features.checkout]\nexpress = \"perhaps\"\n");

    let refreshed = app.request("POST", "/feature-flags/refresh", None).await;
    assert_eq!(refreshed.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(refreshed.body["error"], "CONFIGURATION_ERROR");

    let current = app.request("GET", "/feature-flags", None).await;
    assert_eq!(current.body["expressCheckout"], true);
}
