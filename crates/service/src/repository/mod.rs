//! Record stores for the three clinic entities.
//!
//! `seaorm` is the production backend; `memory` keeps rows in process and is
//! used by tests and by servers started without a database.

use async_trait::async_trait;

use crate::domain::{Animal, AnimalDraft, AnimalType, AnimalTypeDraft, MedicalRecord, MedicalRecordValues};
use crate::errors::ServiceError;

pub mod memory;
pub mod seaorm;

#[async_trait]
pub trait AnimalTypeRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<AnimalType>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<AnimalType>, ServiceError>;
    /// Insert when `id` is `None`, otherwise overwrite the row with that id.
    async fn save(&self, id: Option<i32>, draft: &AnimalTypeDraft) -> Result<AnimalType, ServiceError>;
    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError>;
}

#[async_trait]
pub trait AnimalRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Animal>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Animal>, ServiceError>;
    async fn save(&self, id: Option<i32>, draft: &AnimalDraft) -> Result<Animal, ServiceError>;
    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError>;
    async fn exists_by_animal_type_id(&self, animal_type_id: i32) -> Result<bool, ServiceError>;
}

#[async_trait]
pub trait MedicalRecordRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<MedicalRecord>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<MedicalRecord>, ServiceError>;
    async fn find_by_animal_id(&self, animal_id: i32) -> Result<Vec<MedicalRecord>, ServiceError>;
    async fn save(&self, id: Option<i32>, values: &MedicalRecordValues) -> Result<MedicalRecord, ServiceError>;
    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError>;
    async fn exists_by_animal_id(&self, animal_id: i32) -> Result<bool, ServiceError>;
}
