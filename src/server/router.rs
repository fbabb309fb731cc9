//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. Swagger UI is served at `/api/docs`.

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{config::Config, controller, model::app::AppState, startup::build_cors};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/health` - Liveness check
/// - `GET /api/leaderboard` - Ranked pilots
/// - `GET /api/profile` - One pilot's profile
/// - `POST /api/metafields/update` - Set metafields on one customer
/// - `POST /api/metafields/bulk-initialize` - Initialize progression for a batch of customers
///
/// The OpenAPI document is served at `/api/docs/openapi.json`.
///
/// # Returns
/// An Axum `Router<AppState>` with CORS and request tracing applied; call `with_state` to
/// make it servable.
pub fn routes(config: &Config) -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Pitwall", description = "Pilot progression API"), tags(
        (name = controller::health::HEALTH_TAG, description = "Service health"),
        (name = controller::leaderboard::LEADERBOARD_TAG, description = "Pilot rankings"),
        (name = controller::profile::PROFILE_TAG, description = "Pilot profiles"),
        (name = controller::metafield::METAFIELD_TAG, description = "Metafield writes, secret required"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::health::health))
        .routes(routes!(controller::leaderboard::get_leaderboard))
        .routes(routes!(controller::profile::get_profile))
        .routes(routes!(controller::metafield::update_metafields))
        .routes(routes!(controller::metafield::bulk_initialize))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(build_cors(config))
        .layer(TraceLayer::new_for_http())
}
