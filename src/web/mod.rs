//! Web API module for Resistor Values.
//!
//! This module provides a REST API for looking up resistor band colors and
//! decoding a set of bands into a resistance and tolerance.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /colors` - List band color names in table order
//! - `GET /colors/{color}` - Get the values encoded by a color
//! - `POST /resistors/value-from-bands` - Decode bands from a JSON body
//! - `GET /resistors/value-from-bands` - Decode bands from query parameters
//! - `GET /openapi.json` - OpenAPI document
//! - `GET /docs` - Swagger UI

pub mod openapi;

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use crate::constants::APP_NAME;
use crate::models::{BandSelection, ColorDetails, ColorTable, ResistorValue};
use crate::services::BandDecoder;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Color table (immutable after construction)
    colors: Arc<ColorTable>,
}

impl AppState {
    /// Creates a new application state with the standard color table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            colors: Arc::new(ColorTable::standard()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Band colors supplied by the caller, in body or query form.
///
/// Field names are matched without regard to case, so `FirstBand`,
/// `firstBand` and `firstband` all bind to the first band.
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[serde(try_from = "BandFields", rename_all = "PascalCase")]
#[into_params(parameter_in = Query)]
pub struct ResistorBandsRequest {
    /// First significant digit band.
    pub first_band: String,
    /// Second significant digit band.
    pub second_band: String,
    /// Third significant digit band; omitted or empty for 4-band resistors.
    pub third_band: Option<String>,
    /// Multiplier band.
    pub multiplier: String,
    /// Tolerance band.
    pub tolerance: String,
}

/// Raw request fields as sent, before names are normalized.
type BandFields = HashMap<String, Option<String>>;

impl TryFrom<BandFields> for ResistorBandsRequest {
    type Error = String;

    fn try_from(fields: BandFields) -> Result<Self, Self::Error> {
        let mut fields: BandFields = fields
            .into_iter()
            .map(|(name, value)| (name.to_lowercase(), value))
            .collect();

        Ok(Self {
            first_band: require_field(&mut fields, "FirstBand")?,
            second_band: require_field(&mut fields, "SecondBand")?,
            third_band: take_field(&mut fields, "ThirdBand"),
            multiplier: require_field(&mut fields, "Multiplier")?,
            tolerance: require_field(&mut fields, "Tolerance")?,
        })
    }
}

fn take_field(fields: &mut BandFields, name: &str) -> Option<String> {
    fields.remove(&name.to_lowercase()).flatten()
}

fn require_field(fields: &mut BandFields, name: &str) -> Result<String, String> {
    take_field(fields, name).ok_or_else(|| format!("missing field `{name}`"))
}

impl From<ResistorBandsRequest> for BandSelection {
    fn from(req: ResistorBandsRequest) -> Self {
        Self {
            first_band: req.first_band,
            second_band: req.second_band,
            third_band: req.third_band.filter(|band| !band.is_empty()),
            multiplier_band: req.multiplier,
            tolerance_band: req.tolerance,
        }
    }
}

/// Decoded resistor value response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResistorValueResponse {
    /// Resistance in ohms.
    pub resistor_value: f64,
    /// Tolerance in percent.
    pub tolerance: f64,
}

impl From<ResistorValue> for ResistorValueResponse {
    fn from(value: ResistorValue) -> Self {
        Self {
            resistor_value: value.resistance,
            tolerance: value.tolerance_percent,
        }
    }
}

/// API error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /colors - List all color names in table order.
#[utoipa::path(
    get,
    path = "/colors",
    tag = "colors",
    responses((status = 200, description = "Color names in table order", body = Vec<String>))
)]
async fn list_colors(State(state): State<AppState>) -> Json<Vec<String>> {
    let names = state
        .colors
        .names()
        .into_iter()
        .map(str::to_string)
        .collect();

    Json(names)
}

/// GET /colors/{color} - Get the values encoded by a color.
///
/// Unknown colors yield a zeroed entry carrying the requested name.
#[utoipa::path(
    get,
    path = "/colors/{color}",
    tag = "colors",
    params(("color" = String, Path, description = "Color name, case-insensitive")),
    responses((
        status = 200,
        description = "Color details; unknown colors have all numeric fields zero",
        body = ColorDetails
    ))
)]
async fn get_color(
    State(state): State<AppState>,
    Path(color): Path<String>,
) -> Json<ColorDetails> {
    Json(state.colors.details(&color))
}

/// POST /resistors/value-from-bands - Decode bands from a JSON body.
#[utoipa::path(
    post,
    path = "/resistors/value-from-bands",
    tag = "resistors",
    request_body = ResistorBandsRequest,
    responses(
        (status = 200, description = "Calculated value of the given resistor", body = ResistorValueResponse),
        (status = 400, description = "Missing or malformed band fields", body = ApiError)
    )
)]
async fn value_from_bands_body(
    State(state): State<AppState>,
    payload: Result<Json<ResistorBandsRequest>, JsonRejection>,
) -> ApiResult<ResistorValueResponse> {
    let Json(request) = payload.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::with_details(
                "Invalid request body",
                rejection.body_text(),
            )),
        )
    })?;

    Ok(Json(decode_request(&state, request)))
}

/// GET /resistors/value-from-bands - Decode bands from query parameters.
#[utoipa::path(
    get,
    path = "/resistors/value-from-bands",
    tag = "resistors",
    params(ResistorBandsRequest),
    responses(
        (status = 200, description = "Calculated value of the given resistor", body = ResistorValueResponse),
        (status = 400, description = "Missing band parameters", body = ApiError)
    )
)]
async fn value_from_bands_query(
    State(state): State<AppState>,
    query: Result<Query<ResistorBandsRequest>, QueryRejection>,
) -> ApiResult<ResistorValueResponse> {
    let Query(request) = query.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::with_details(
                "Invalid query parameters",
                rejection.body_text(),
            )),
        )
    })?;

    Ok(Json(decode_request(&state, request)))
}

fn decode_request(state: &AppState, request: ResistorBandsRequest) -> ResistorValueResponse {
    let bands = BandSelection::from(request);
    BandDecoder::new(&state.colors).decode(&bands).into()
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // The API is public and read-only, so any origin may call it.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Color endpoints
        .route("/colors", get(list_colors))
        .route("/colors/{color}", get(get_color))
        // Resistor endpoints
        .route(
            "/resistors/value-from-bands",
            get(value_from_bands_query).post(value_from_bands_body),
        )
        // API documentation
        .route("/openapi.json", get(openapi::openapi_json))
        .route("/docs", get(openapi::swagger_ui))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `addr` - Socket address to bind to
///
/// # Errors
///
/// Returns an error if the server fails to bind or serve.
pub async fn run_server(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    let app = create_router(state);

    info!("Starting {} web server on {}", APP_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
