//! Business views of the clinic entities.
//!
//! Stored rows only carry foreign-key ids; the types here hold the referenced
//! entity fully resolved, which is what the HTTP surface returns.

use chrono::NaiveDate;
use models::{animal, animal_type, medical_record, Gender};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalType {
    pub id: i32,
    pub name: String,
    pub average_lifespan: Option<i32>,
}

impl From<animal_type::Model> for AnimalType {
    fn from(m: animal_type::Model) -> Self {
        Self { id: m.id, name: m.name, average_lifespan: m.average_lifespan }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub breed: String,
    pub gender: Gender,
    pub weight: Decimal,
    pub color: String,
    pub animal_type: AnimalType,
}

impl Animal {
    pub fn from_model(m: animal::Model, animal_type: AnimalType) -> Self {
        Self {
            id: m.id,
            name: m.name,
            age: m.age,
            breed: m.breed,
            gender: m.gender,
            weight: m.weight,
            color: m.color,
            animal_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: i32,
    pub visit_date: NaiveDate,
    pub procedure_type: String,
    pub diagnosis: String,
    pub animal: Animal,
}

impl MedicalRecord {
    pub fn from_model(m: medical_record::Model, animal: Animal) -> Self {
        Self {
            id: m.id,
            visit_date: m.visit_date,
            procedure_type: m.procedure_type,
            diagnosis: m.diagnosis,
            animal,
        }
    }
}

/// Values for creating or overwriting an animal type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalTypeDraft {
    pub name: String,
    pub average_lifespan: Option<i32>,
}

/// Values for creating or overwriting an animal. `animal_type` must already be
/// loaded from the store, never taken from a client payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalDraft {
    pub name: String,
    pub age: i32,
    pub breed: String,
    pub gender: Gender,
    pub weight: Decimal,
    pub color: String,
    pub animal_type: AnimalType,
}

/// Unchecked medical record input; `MedicalRecordService::save` decides what is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedicalRecordDraft {
    pub visit_date: Option<NaiveDate>,
    pub procedure_type: Option<String>,
    pub diagnosis: Option<String>,
    pub animal: Option<Animal>,
}

/// Checked and normalized medical record values as handed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicalRecordValues {
    pub visit_date: NaiveDate,
    pub procedure_type: String,
    pub diagnosis: String,
    pub animal: Animal,
}
