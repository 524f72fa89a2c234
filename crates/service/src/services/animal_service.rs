use std::sync::Arc;

use tracing::{info, instrument};

use crate::domain::{Animal, AnimalDraft};
use crate::errors::ServiceError;
use crate::repository::{AnimalRepository, MedicalRecordRepository};
use crate::text::capitalize;

pub struct AnimalService {
    repo: Arc<dyn AnimalRepository>,
    records: Arc<dyn MedicalRecordRepository>,
}

impl AnimalService {
    pub fn new(repo: Arc<dyn AnimalRepository>, records: Arc<dyn MedicalRecordRepository>) -> Self {
        Self { repo, records }
    }

    pub async fn find_all(&self) -> Result<Vec<Animal>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Animal, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Animal", id))
    }

    /// Normalizes name, breed and color, then persists. Field constraints are
    /// checked before this point; `draft.animal_type` must come from the store.
    #[instrument(skip(self, draft), fields(animal_type_id = draft.animal_type.id))]
    pub async fn save(&self, id: Option<i32>, mut draft: AnimalDraft) -> Result<Animal, ServiceError> {
        draft.name = capitalize(&draft.name);
        draft.breed = capitalize(&draft.breed);
        draft.color = capitalize(&draft.color);
        let saved = self.repo.save(id, &draft).await?;
        info!(id = saved.id, name = %saved.name, "saved animal");
        Ok(saved)
    }

    /// Removing an absent id is a no-op; an animal with medical records is a conflict.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if self.records.exists_by_animal_id(id).await? {
            return Err(ServiceError::Conflict(format!("Animal {} still has medical records", id)));
        }
        self.repo.delete_by_id(id).await?;
        info!(id, "deleted animal");
        Ok(())
    }
}
