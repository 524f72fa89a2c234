use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service::domain::AnimalType;
use tracing::info;

use crate::errors::ApiError;
use crate::payloads::AnimalTypePayload;
use crate::state::AppState;
use crate::validation::ValidJson;

#[utoipa::path(get, path = "/animal-types", tag = "animal-types",
    responses((status = 200, body = [crate::openapi::AnimalTypeDoc])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<AnimalType>>, ApiError> {
    let all = state.animal_types.find_all().await?;
    info!(count = all.len(), "list animal types");
    Ok(Json(all))
}

#[utoipa::path(get, path = "/animal-types/{id}", tag = "animal-types",
    params(("id" = i32, Path, description = "Animal type id")),
    responses((status = 200, body = crate::openapi::AnimalTypeDoc), (status = 404, description = "Unknown id")))]
pub async fn get(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<AnimalType>, ApiError> {
    Ok(Json(state.animal_types.find_by_id(id).await?))
}

#[utoipa::path(post, path = "/animal-types", tag = "animal-types",
    request_body = crate::openapi::AnimalTypeRequestDoc,
    responses((status = 200, body = crate::openapi::AnimalTypeDoc), (status = 400, description = "Invalid body")))]
pub async fn create(
    State(state): State<AppState>,
    ValidJson(draft): ValidJson<AnimalTypePayload>,
) -> Result<Json<AnimalType>, ApiError> {
    Ok(Json(state.animal_types.save(None, draft).await?))
}

#[utoipa::path(put, path = "/animal-types/{id}", tag = "animal-types",
    params(("id" = i32, Path, description = "Animal type id")),
    request_body = crate::openapi::AnimalTypeRequestDoc,
    responses((status = 200, body = crate::openapi::AnimalTypeDoc), (status = 400, description = "Invalid body"),
        (status = 404, description = "Unknown id")))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidJson(draft): ValidJson<AnimalTypePayload>,
) -> Result<Json<AnimalType>, ApiError> {
    Ok(Json(state.animal_types.update(id, draft).await?))
}

#[utoipa::path(delete, path = "/animal-types/{id}", tag = "animal-types",
    params(("id" = i32, Path, description = "Animal type id")),
    responses((status = 204, description = "Deleted or absent"),
        (status = 409, description = "Still referenced by animals")))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    state.animal_types.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
