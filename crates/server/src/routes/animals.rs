use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service::domain::Animal;
use tracing::info;

use crate::errors::ApiError;
use crate::payloads::AnimalPayload;
use crate::state::AppState;
use crate::validation::ValidJson;

#[utoipa::path(get, path = "/animals", tag = "animals", responses((status = 200, body = [crate::openapi::AnimalDoc])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Animal>>, ApiError> {
    let all = state.animals.find_all().await?;
    info!(count = all.len(), "list animals");
    Ok(Json(all))
}

#[utoipa::path(get, path = "/animals/{id}", tag = "animals",
    params(("id" = i32, Path, description = "Animal id")),
    responses((status = 200, body = crate::openapi::AnimalDoc), (status = 404, description = "Unknown id")))]
pub async fn get(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Animal>, ApiError> {
    Ok(Json(state.animals.find_by_id(id).await?))
}

/// The animal type is loaded by id; embedded type fields are ignored.
#[utoipa::path(post, path = "/animals", tag = "animals",
    request_body = crate::openapi::AnimalRequestDoc,
    responses((status = 200, body = crate::openapi::AnimalDoc), (status = 400, description = "Invalid body"),
        (status = 404, description = "Unknown animal type")))]
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<AnimalPayload>,
) -> Result<Json<Animal>, ApiError> {
    let animal_type = state.animal_types.find_by_id(input.animal_type_id).await?;
    Ok(Json(state.animals.save(None, input.into_draft(animal_type)).await?))
}

#[utoipa::path(put, path = "/animals/{id}", tag = "animals",
    params(("id" = i32, Path, description = "Animal id")),
    request_body = crate::openapi::AnimalRequestDoc,
    responses((status = 200, body = crate::openapi::AnimalDoc), (status = 400, description = "Invalid body"),
        (status = 404, description = "Unknown animal or animal type")))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidJson(input): ValidJson<AnimalPayload>,
) -> Result<Json<Animal>, ApiError> {
    state.animals.find_by_id(id).await?;
    let animal_type = state.animal_types.find_by_id(input.animal_type_id).await?;
    Ok(Json(state.animals.save(Some(id), input.into_draft(animal_type)).await?))
}

#[utoipa::path(delete, path = "/animals/{id}", tag = "animals",
    params(("id" = i32, Path, description = "Animal id")),
    responses((status = 204, description = "Deleted or absent"),
        (status = 409, description = "Medical records still reference it")))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    state.animals.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
