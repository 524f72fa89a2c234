use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize, ToSchema)]
pub struct IdRefDoc {
    pub id: i32,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnimalTypeDoc {
    pub id: i32,
    pub name: String,
    pub average_lifespan: Option<i32>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnimalTypeRequestDoc {
    pub name: String,
    pub average_lifespan: Option<i32>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnimalDoc {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub breed: String,
    /// `мужской` or `женский`
    pub gender: String,
    pub weight: f64,
    pub color: String,
    pub animal_type: AnimalTypeDoc,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnimalRequestDoc {
    pub name: String,
    pub age: i32,
    pub breed: String,
    pub gender: String,
    pub weight: f64,
    pub color: String,
    pub animal_type: IdRefDoc,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecordDoc {
    pub id: i32,
    /// ISO date, `YYYY-MM-DD`
    pub visit_date: String,
    pub procedure_type: String,
    pub diagnosis: String,
    pub animal: AnimalDoc,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecordRequestDoc {
    pub visit_date: String,
    pub procedure_type: String,
    pub diagnosis: String,
    /// Required on create, ignored on update
    pub animal: Option<IdRefDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::animal_types::list,
        crate::routes::animal_types::get,
        crate::routes::animal_types::create,
        crate::routes::animal_types::update,
        crate::routes::animal_types::delete,
        crate::routes::animals::list,
        crate::routes::animals::get,
        crate::routes::animals::create,
        crate::routes::animals::update,
        crate::routes::animals::delete,
        crate::routes::medical_records::list,
        crate::routes::medical_records::get,
        crate::routes::medical_records::by_animal,
        crate::routes::medical_records::create,
        crate::routes::medical_records::update,
        crate::routes::medical_records::delete,
    ),
    components(
        schemas(
            HealthResponse,
            IdRefDoc,
            AnimalTypeDoc,
            AnimalTypeRequestDoc,
            AnimalDoc,
            AnimalRequestDoc,
            MedicalRecordDoc,
            MedicalRecordRequestDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "animal-types"),
        (name = "animals"),
        (name = "medical-records")
    )
)]
pub struct ApiDoc;
