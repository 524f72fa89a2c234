use std::sync::Arc;

use tracing::{info, instrument};

use crate::domain::{AnimalType, AnimalTypeDraft};
use crate::errors::ServiceError;
use crate::repository::{AnimalRepository, AnimalTypeRepository};
use crate::text::capitalize;

/// Business rules for animal types: required name, normalized on every save.
pub struct AnimalTypeService {
    repo: Arc<dyn AnimalTypeRepository>,
    animals: Arc<dyn AnimalRepository>,
}

impl AnimalTypeService {
    pub fn new(repo: Arc<dyn AnimalTypeRepository>, animals: Arc<dyn AnimalRepository>) -> Self {
        Self { repo, animals }
    }

    pub async fn find_all(&self) -> Result<Vec<AnimalType>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<AnimalType, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("AnimalType", id))
    }

    /// Insert (`id == None`) or overwrite. Blank names never reach the store.
    #[instrument(skip(self, draft))]
    pub async fn save(&self, id: Option<i32>, mut draft: AnimalTypeDraft) -> Result<AnimalType, ServiceError> {
        if draft.name.trim().is_empty() {
            return Err(ServiceError::validation("animal type name is required"));
        }
        draft.name = capitalize(&draft.name);
        let saved = self.repo.save(id, &draft).await?;
        info!(id = saved.id, name = %saved.name, "saved animal type");
        Ok(saved)
    }

    pub async fn update(&self, id: i32, draft: AnimalTypeDraft) -> Result<AnimalType, ServiceError> {
        let existing = self.find_by_id(id).await?;
        // both name and lifespan are replaced, so the draft is the merged row
        self.save(Some(existing.id), draft).await
    }

    /// Removing an absent id is a no-op; a type still used by animals is a conflict.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if self.animals.exists_by_animal_type_id(id).await? {
            return Err(ServiceError::Conflict(format!("AnimalType {} is still referenced by animals", id)));
        }
        self.repo.delete_by_id(id).await?;
        info!(id, "deleted animal type");
        Ok(())
    }
}
