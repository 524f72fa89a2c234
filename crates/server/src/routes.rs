use axum::{routing::get, Json, Router};
use common::types::Health;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod animal_types;
pub mod animals;
pub mod medical_records;

#[utoipa::path(get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router over the given state.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let animal_types = Router::new()
        .route("/animal-types", get(animal_types::list).post(animal_types::create))
        .route(
            "/animal-types/:id",
            get(animal_types::get).put(animal_types::update).delete(animal_types::delete),
        );

    let animals = Router::new()
        .route("/animals", get(animals::list).post(animals::create))
        .route("/animals/:id", get(animals::get).put(animals::update).delete(animals::delete));

    let medical_records = Router::new()
        .route("/medical-records", get(medical_records::list).post(medical_records::create))
        .route(
            "/medical-records/:id",
            get(medical_records::get).put(medical_records::update).delete(medical_records::delete),
        )
        .route("/medical-records/by-animal/:animal_id", get(medical_records::by_animal));

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(animal_types)
        .merge(animals)
        .merge(medical_records)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
