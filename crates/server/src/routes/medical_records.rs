use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service::domain::MedicalRecord;
use tracing::info;

use crate::errors::ApiError;
use crate::payloads::MedicalRecordPayload;
use crate::state::AppState;
use crate::validation::ValidJson;

#[utoipa::path(get, path = "/medical-records", tag = "medical-records",
    responses((status = 200, body = [crate::openapi::MedicalRecordDoc])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<MedicalRecord>>, ApiError> {
    let all = state.medical_records.find_all().await?;
    info!(count = all.len(), "list medical records");
    Ok(Json(all))
}

#[utoipa::path(get, path = "/medical-records/{id}", tag = "medical-records",
    params(("id" = i32, Path, description = "Medical record id")),
    responses((status = 200, body = crate::openapi::MedicalRecordDoc), (status = 404, description = "Unknown id")))]
pub async fn get(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<MedicalRecord>, ApiError> {
    Ok(Json(state.medical_records.find_by_id(id).await?))
}

#[utoipa::path(get, path = "/medical-records/by-animal/{animal_id}", tag = "medical-records",
    params(("animal_id" = i32, Path, description = "Animal id")),
    responses((status = 200, body = [crate::openapi::MedicalRecordDoc])))]
pub async fn by_animal(
    State(state): State<AppState>,
    Path(animal_id): Path<i32>,
) -> Result<Json<Vec<MedicalRecord>>, ApiError> {
    let records = state.medical_records.find_by_animal_id(animal_id).await?;
    info!(animal_id, count = records.len(), "list medical records of animal");
    Ok(Json(records))
}

#[utoipa::path(post, path = "/medical-records", tag = "medical-records",
    request_body = crate::openapi::MedicalRecordRequestDoc,
    responses((status = 200, body = crate::openapi::MedicalRecordDoc), (status = 400, description = "Invalid body"),
        (status = 404, description = "Unknown animal")))]
pub async fn create(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<MedicalRecordPayload>,
) -> Result<Json<MedicalRecord>, ApiError> {
    let animal_id = payload
        .animal_id()
        .ok_or_else(|| ApiError::BadRequest("Animal ID is required".into()))?;
    let animal = state.animals.find_by_id(animal_id).await?;
    Ok(Json(state.medical_records.save(None, payload.into_draft(Some(animal))).await?))
}

/// Same field checks as create; any `animal` in the body is ignored.
#[utoipa::path(put, path = "/medical-records/{id}", tag = "medical-records",
    params(("id" = i32, Path, description = "Medical record id")),
    request_body = crate::openapi::MedicalRecordRequestDoc,
    responses((status = 200, body = crate::openapi::MedicalRecordDoc), (status = 400, description = "Invalid body"),
        (status = 404, description = "Unknown id")))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidJson(payload): ValidJson<MedicalRecordPayload>,
) -> Result<Json<MedicalRecord>, ApiError> {
    Ok(Json(state.medical_records.update(id, payload.into_draft(None)).await?))
}

#[utoipa::path(delete, path = "/medical-records/{id}", tag = "medical-records",
    params(("id" = i32, Path, description = "Medical record id")),
    responses((status = 204, description = "Deleted or absent")))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    state.medical_records.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
