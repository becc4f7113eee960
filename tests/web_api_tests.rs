//! Integration tests for the Resistor Values Web API.
//!
//! These tests require the `web` feature to be enabled:
//! ```bash
//! cargo test --features web web_api
//! ```

#![cfg(feature = "web")]

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use resistor_bands::web::{create_router, AppState};

fn app() -> axum::Router {
    create_router(AppState::new())
}

/// Helper to make a GET request and get the response body as JSON.
async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

/// Helper to make a POST request with JSON body.
async fn post_json(app: &axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

fn assert_value(json: &Value, resistance: f64, tolerance: f64) {
    assert_eq!(json["resistorValue"].as_f64(), Some(resistance), "{json}");
    assert_eq!(json["tolerance"].as_f64(), Some(tolerance), "{json}");
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let (status, json) = get_json(&app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

// ============================================================================
// Colors
// ============================================================================

#[tokio::test]
async fn test_list_colors_in_table_order() {
    let (status, json) = get_json(&app(), "/colors").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!([
            "Black", "Brown", "Red", "Orange", "Yellow", "Green", "Blue", "Violet", "Grey",
            "White", "Gold", "Silver"
        ])
    );
}

#[tokio::test]
async fn test_get_color() {
    let (status, json) = get_json(&app(), "/colors/Gold").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Gold");
    assert_eq!(json["value"], 0);
    assert_eq!(json["multiplier"].as_f64(), Some(0.1));
    assert_eq!(json["tolerance"].as_f64(), Some(5.0));
}

#[tokio::test]
async fn test_get_color_case_insensitive() {
    let app = app();
    let (_, canonical) = get_json(&app, "/colors/Gold").await;
    let (_, lower) = get_json(&app, "/colors/gold").await;
    let (_, upper) = get_json(&app, "/colors/GOLD").await;

    assert_eq!(lower, canonical);
    assert_eq!(upper, canonical);
    assert_eq!(lower["name"], "Gold");
}

#[tokio::test]
async fn test_get_unknown_color_is_zeroed_not_404() {
    let (status, json) = get_json(&app(), "/colors/Purple").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Purple");
    assert_eq!(json["value"], 0);
    assert_eq!(json["multiplier"].as_f64(), Some(0.0));
    assert_eq!(json["tolerance"].as_f64(), Some(0.0));
}

// ============================================================================
// Resistor value from bands
// ============================================================================

#[tokio::test]
async fn test_post_four_band() {
    let (status, json) = post_json(
        &app(),
        "/resistors/value-from-bands",
        json!({
            "FirstBand": "Brown",
            "SecondBand": "Black",
            "Multiplier": "Red",
            "Tolerance": "Gold"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_value(&json, 10_000.0, 5.0);
}

#[tokio::test]
async fn test_post_five_band() {
    let (status, json) = post_json(
        &app(),
        "/resistors/value-from-bands",
        json!({
            "FirstBand": "Red",
            "SecondBand": "Violet",
            "ThirdBand": "Green",
            "Multiplier": "Blue",
            "Tolerance": "Brown"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_value(&json, 275_000_000.0, 1.0);
}

#[tokio::test]
async fn test_post_null_or_empty_third_band_is_four_band() {
    let app = app();
    for third in [Value::Null, json!("")] {
        let (status, json) = post_json(
            &app,
            "/resistors/value-from-bands",
            json!({
                "FirstBand": "Brown",
                "SecondBand": "Black",
                "ThirdBand": third,
                "Multiplier": "Red",
                "Tolerance": "Gold"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_value(&json, 10_000.0, 5.0);
    }
}

#[tokio::test]
async fn test_post_camel_case_fields() {
    let (status, json) = post_json(
        &app(),
        "/resistors/value-from-bands",
        json!({
            "firstBand": "yellow",
            "secondBand": "violet",
            "multiplier": "orange",
            "tolerance": "silver"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_value(&json, 470_000.0, 10.0);
}

#[tokio::test]
async fn test_post_lowercase_fields() {
    let (status, json) = post_json(
        &app(),
        "/resistors/value-from-bands",
        json!({
            "firstband": "Brown",
            "secondband": "Black",
            "thirdband": "Black",
            "multiplier": "Red",
            "tolerance": "Gold"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_value(&json, 10_000.0, 5.0);
}

#[tokio::test]
async fn test_post_unknown_band_degrades() {
    let (status, json) = post_json(
        &app(),
        "/resistors/value-from-bands",
        json!({
            "FirstBand": "Purple",
            "SecondBand": "Black",
            "Multiplier": "Red",
            "Tolerance": "Gold"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_value(&json, 0.0, 5.0);
}

#[tokio::test]
async fn test_post_missing_field_is_bad_request() {
    let (status, json) = post_json(
        &app(),
        "/resistors/value-from-bands",
        json!({
            "FirstBand": "Brown",
            "SecondBand": "Black",
            "Tolerance": "Gold"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid request body");
    assert!(json["details"].as_str().unwrap().contains("Multiplier"));
}

#[tokio::test]
async fn test_post_without_json_content_type_is_bad_request() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/resistors/value-from-bands")
                .body(Body::from("FirstBand=Brown"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_query_four_band() {
    let (status, json) = get_json(
        &app(),
        "/resistors/value-from-bands?FirstBand=Brown&SecondBand=Black&Multiplier=Red&Tolerance=Gold",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_value(&json, 10_000.0, 5.0);
}

#[tokio::test]
async fn test_get_query_lowercase_keys() {
    let (status, json) = get_json(
        &app(),
        "/resistors/value-from-bands?firstband=Brown&secondband=Black&multiplier=Red&tolerance=Gold",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_value(&json, 10_000.0, 5.0);
}

#[tokio::test]
async fn test_get_query_empty_third_band() {
    let (status, json) = get_json(
        &app(),
        "/resistors/value-from-bands?FirstBand=Brown&SecondBand=Black&ThirdBand=&Multiplier=Red&Tolerance=Gold",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_value(&json, 10_000.0, 5.0);
}

#[tokio::test]
async fn test_get_query_five_band() {
    let (status, json) = get_json(
        &app(),
        "/resistors/value-from-bands?FirstBand=red&SecondBand=violet&ThirdBand=green&Multiplier=blue&Tolerance=brown",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_value(&json, 275_000_000.0, 1.0);
}

#[tokio::test]
async fn test_get_query_fractional_multiplier() {
    let (status, json) = get_json(
        &app(),
        "/resistors/value-from-bands?FirstBand=Red&SecondBand=Violet&ThirdBand=Black&Multiplier=Gold&Tolerance=Green",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_value(&json, 27.0, 0.5);
}

#[tokio::test]
async fn test_get_query_missing_field_is_bad_request() {
    let (status, json) = get_json(
        &app(),
        "/resistors/value-from-bands?FirstBand=Brown&SecondBand=Black",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid query parameters");
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let app = app();
    let uri = "/resistors/value-from-bands?FirstBand=Orange&SecondBand=Orange&Multiplier=Brown&Tolerance=Gold";

    let (_, first) = get_json(&app, uri).await;
    for _ in 0..5 {
        let (status, json) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, first);
    }
    assert_value(&first, 3_300.0, 5.0);
}

// ============================================================================
// Documentation
// ============================================================================

#[tokio::test]
async fn test_openapi_document() {
    let (status, json) = get_json(&app(), "/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["openapi"].as_str().unwrap().starts_with("3."));
    assert!(json["paths"]["/colors/{color}"]["get"].is_object());
    assert!(json["components"]["schemas"]["ResistorBandsRequest"].is_object());
}

#[tokio::test]
async fn test_swagger_ui_page() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/docs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("swagger-ui"));
}
