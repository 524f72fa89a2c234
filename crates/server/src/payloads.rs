//! Request bodies as clients send them. Every field is optional so that
//! missing values surface as field errors instead of a parse failure.

use chrono::{Local, NaiveDate};
use models::Gender;
use rust_decimal::Decimal;
use serde::Deserialize;
use service::domain::{Animal, AnimalDraft, AnimalType, AnimalTypeDraft, MedicalRecordDraft};

use crate::validation::{FieldErrors, Validate};

/// Reference to another entity; only `id` is read.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdRef {
    pub id: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalTypePayload {
    pub name: Option<String>,
    pub average_lifespan: Option<i32>,
}

impl Validate for AnimalTypePayload {
    type Valid = AnimalTypeDraft;

    fn validate(self) -> Result<AnimalTypeDraft, FieldErrors> {
        let mut errors = FieldErrors::default();
        let name = errors.text("name", self.name, 100);
        if matches!(self.average_lifespan, Some(n) if n < 0) {
            errors.push("averageLifespan", "average lifespan must be zero or positive");
        }
        match name {
            Some(name) if errors.is_empty() => Ok(AnimalTypeDraft { name, average_lifespan: self.average_lifespan }),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalPayload {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub breed: Option<String>,
    pub gender: Option<String>,
    pub weight: Option<Decimal>,
    pub color: Option<String>,
    pub animal_type: Option<IdRef>,
}

/// A checked animal body; the type is still only an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalInput {
    pub name: String,
    pub age: i32,
    pub breed: String,
    pub gender: Gender,
    pub weight: Decimal,
    pub color: String,
    pub animal_type_id: i32,
}

impl AnimalInput {
    pub fn into_draft(self, animal_type: AnimalType) -> AnimalDraft {
        AnimalDraft {
            name: self.name,
            age: self.age,
            breed: self.breed,
            gender: self.gender,
            weight: self.weight,
            color: self.color,
            animal_type,
        }
    }
}

const MIN_WEIGHT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);
const MAX_WEIGHT: Decimal = Decimal::from_parts(100_000, 0, 0, false, 2);

fn check_weight(errors: &mut FieldErrors, weight: Option<Decimal>) -> Option<Decimal> {
    let weight = errors.required("weight", weight)?;
    if weight < MIN_WEIGHT || weight > MAX_WEIGHT {
        errors.push("weight", "weight must be between 0.01 and 1000.00");
        return None;
    }
    if weight.normalize().scale() > 2 {
        errors.push("weight", "weight must have at most 2 decimal places");
        return None;
    }
    Some(weight)
}

impl Validate for AnimalPayload {
    type Valid = AnimalInput;

    fn validate(self) -> Result<AnimalInput, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = errors.text("name", self.name, 50);
        let name = name.filter(|n| {
            let ok = n.chars().count() >= 2;
            if !ok {
                errors.push("name", "name must be between 2 and 50 characters");
            }
            ok
        });

        let age = errors.required("age", self.age).filter(|a| {
            let ok = (0..=100).contains(a);
            if !ok {
                errors.push("age", "age must be between 0 and 100");
            }
            ok
        });

        let breed = errors.text("breed", self.breed, 100);

        let gender = errors.required("gender", self.gender).and_then(|g| match g.parse::<Gender>() {
            Ok(g) => Some(g),
            Err(_) => {
                errors.push("gender", format!("gender must be '{}' or '{}'", Gender::MALE, Gender::FEMALE));
                None
            }
        });

        let weight = check_weight(&mut errors, self.weight);
        let color = errors.text("color", self.color, 50);

        let animal_type_id = self.animal_type.and_then(|r| r.id);
        if animal_type_id.is_none() {
            errors.push("animalType", "animal type is required");
        }

        match (name, age, breed, gender, weight, color, animal_type_id) {
            (Some(name), Some(age), Some(breed), Some(gender), Some(weight), Some(color), Some(animal_type_id))
                if errors.is_empty() =>
            {
                Ok(AnimalInput { name, age, breed, gender, weight, color, animal_type_id })
            }
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecordPayload {
    pub visit_date: Option<NaiveDate>,
    pub procedure_type: Option<String>,
    pub diagnosis: Option<String>,
    pub animal: Option<IdRef>,
}

impl MedicalRecordPayload {
    pub fn animal_id(&self) -> Option<i32> {
        self.animal.as_ref().and_then(|r| r.id)
    }

    /// Hands the body to the service, which applies its own rules.
    pub fn into_draft(self, animal: Option<Animal>) -> MedicalRecordDraft {
        MedicalRecordDraft {
            visit_date: self.visit_date,
            procedure_type: self.procedure_type,
            diagnosis: self.diagnosis,
            animal,
        }
    }

    fn check(self, today: NaiveDate) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::default();
        if let Some(date) = errors.required("visitDate", self.visit_date) {
            if date > today {
                errors.push("visitDate", "visit date cannot be in the future");
            }
        }
        errors.text("procedureType", self.procedure_type.clone(), 100);
        errors.text("diagnosis", self.diagnosis.clone(), 500);
        // the animal reference is checked by the create handler
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(errors)
        }
    }
}

impl Validate for MedicalRecordPayload {
    type Valid = MedicalRecordPayload;

    fn validate(self) -> Result<Self, FieldErrors> {
        self.check(Local::now().date_naive())
    }
}
