use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::repository::memory::MemoryStore;
use service::repository::seaorm::{SeaOrmAnimalRepository, SeaOrmAnimalTypeRepository, SeaOrmMedicalRecordRepository};
use service::repository::{AnimalRepository, AnimalTypeRepository, MedicalRecordRepository};
use service::services::{AnimalService, AnimalTypeService, MedicalRecordService};

/// Shared by all handlers; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub animal_types: Arc<AnimalTypeService>,
    pub animals: Arc<AnimalService>,
    pub medical_records: Arc<MedicalRecordService>,
}

impl AppState {
    pub fn with_db(db: DatabaseConnection) -> Self {
        Self::from_repositories(
            Arc::new(SeaOrmAnimalTypeRepository { db: db.clone() }),
            Arc::new(SeaOrmAnimalRepository { db: db.clone() }),
            Arc::new(SeaOrmMedicalRecordRepository { db }),
        )
    }

    /// Everything lives in process memory and is lost on exit.
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::from_repositories(store.clone(), store.clone(), store)
    }

    pub fn from_repositories(
        animal_types: Arc<dyn AnimalTypeRepository>,
        animals: Arc<dyn AnimalRepository>,
        medical_records: Arc<dyn MedicalRecordRepository>,
    ) -> Self {
        Self {
            animal_types: Arc::new(AnimalTypeService::new(animal_types, animals.clone())),
            animals: Arc::new(AnimalService::new(animals, medical_records.clone())),
            medical_records: Arc::new(MedicalRecordService::new(medical_records)),
        }
    }
}
