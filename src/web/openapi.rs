//! API documentation endpoints.
//!
//! The OpenAPI document is generated from the handler and DTO annotations.
//! The Swagger UI assets are loaded from a CDN so nothing is embedded in the
//! binary.

use axum::{response::Html, Json};
use utoipa::OpenApi;

use super::{ApiError, HealthResponse, ResistorBandsRequest, ResistorValueResponse};
use crate::models::ColorDetails;

/// OpenAPI description of every route served by [`super::create_router`].
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Resistor Values",
        description = "Resistor color-band lookup and value calculation"
    ),
    paths(
        super::health_check,
        super::list_colors,
        super::get_color,
        super::value_from_bands_query,
        super::value_from_bands_body,
    ),
    components(schemas(
        HealthResponse,
        ColorDetails,
        ResistorBandsRequest,
        ResistorValueResponse,
        ApiError,
    )),
    tags(
        (name = "colors", description = "Band color table"),
        (name = "resistors", description = "Resistor value calculation"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Swagger UI page pointing at `/openapi.json`.
const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Resistor Values - API docs</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/openapi.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

/// GET /openapi.json - OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /docs - Swagger UI.
pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}
