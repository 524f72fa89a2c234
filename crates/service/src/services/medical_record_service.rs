use std::sync::Arc;

use chrono::Datelike;
use tracing::{info, instrument};

use crate::domain::{MedicalRecord, MedicalRecordDraft, MedicalRecordValues};
use crate::errors::ServiceError;
use crate::repository::MedicalRecordRepository;
use crate::text::capitalize;

pub const MIN_VISIT_YEAR: i32 = 2000;
pub const MAX_VISIT_YEAR: i32 = 2100;

pub struct MedicalRecordService {
    repo: Arc<dyn MedicalRecordRepository>,
}

fn required_text(value: Option<String>, msg: &str) -> Result<String, ServiceError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ServiceError::validation(msg)),
    }
}

impl MedicalRecordService {
    pub fn new(repo: Arc<dyn MedicalRecordRepository>) -> Self {
        Self { repo }
    }

    pub async fn find_all(&self) -> Result<Vec<MedicalRecord>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<MedicalRecord, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("MedicalRecord", id))
    }

    /// Records of one animal; an unknown animal simply has none.
    pub async fn find_by_animal_id(&self, animal_id: i32) -> Result<Vec<MedicalRecord>, ServiceError> {
        self.repo.find_by_animal_id(animal_id).await
    }

    /// Checks run in a fixed order and the first failure wins.
    #[instrument(skip(self, draft))]
    pub async fn save(&self, id: Option<i32>, draft: MedicalRecordDraft) -> Result<MedicalRecord, ServiceError> {
        let values = Self::check(draft)?;
        let saved = self.repo.save(id, &values).await?;
        info!(id = saved.id, animal_id = saved.animal.id, "saved medical record");
        Ok(saved)
    }

    fn check(draft: MedicalRecordDraft) -> Result<MedicalRecordValues, ServiceError> {
        let visit_date = draft
            .visit_date
            .ok_or_else(|| ServiceError::validation("visit date is required"))?;
        if !(MIN_VISIT_YEAR..=MAX_VISIT_YEAR).contains(&visit_date.year()) {
            return Err(ServiceError::validation(format!(
                "visit year must be between {} and {}",
                MIN_VISIT_YEAR, MAX_VISIT_YEAR
            )));
        }
        let diagnosis = required_text(draft.diagnosis, "diagnosis is required")?;
        let procedure_type = required_text(draft.procedure_type, "procedure type is required")?;
        let animal = draft
            .animal
            .ok_or_else(|| ServiceError::validation("Animal ID is required"))?;
        Ok(MedicalRecordValues {
            visit_date,
            procedure_type: capitalize(&procedure_type),
            diagnosis: capitalize(&diagnosis),
            animal,
        })
    }

    /// Overwrites date, procedure and diagnosis. The owning animal never changes.
    pub async fn update(&self, id: i32, mut draft: MedicalRecordDraft) -> Result<MedicalRecord, ServiceError> {
        let existing = self.find_by_id(id).await?;
        draft.animal = Some(existing.animal);
        self.save(Some(existing.id), draft).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await?;
        info!(id, "deleted medical record");
        Ok(())
    }
}
