use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::openapi;
use crate::state::ServerState;

pub mod clubs;
pub mod players;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the application router: health, OpenAPI document, club and player resources.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi::openapi_json));

    let club_routes = Router::new()
        .route("/clubs", get(clubs::list).post(clubs::create))
        .route(
            "/clubs/:id",
            get(clubs::get).put(clubs::full_update).patch(clubs::partial_update).delete(clubs::delete),
        );

    let player_routes = Router::new()
        .route("/players", get(players::list).post(players::create))
        .route(
            "/players/:id",
            get(players::get)
                .put(players::full_update)
                .patch(players::partial_update)
                .delete(players::delete),
        );

    public
        .merge(club_routes)
        .merge(player_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one span per request with method and path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
