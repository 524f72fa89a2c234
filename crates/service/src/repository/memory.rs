use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use models::{animal, animal_type, medical_record};

use crate::domain::{Animal, AnimalDraft, AnimalType, AnimalTypeDraft, MedicalRecord, MedicalRecordValues};
use crate::errors::ServiceError;
use crate::repository::{AnimalRepository, AnimalTypeRepository, MedicalRecordRepository};

/// In-process store implementing all three repositories over shared tables.
///
/// Rows are kept as the same `models` rows the database holds, with foreign
/// keys as ids, and resolved on read. Deletes refuse to orphan dependents the
/// way the schema's `ON DELETE RESTRICT` does.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    animal_types: BTreeMap<i32, animal_type::Model>,
    animals: BTreeMap<i32, animal::Model>,
    medical_records: BTreeMap<i32, medical_record::Model>,
    last_id: i32,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }

    /// `None` allocates a fresh id; `Some` must name an existing row.
    fn target_id(&mut self, id: Option<i32>, exists: impl Fn(&Tables, i32) -> bool) -> Result<i32, ServiceError> {
        match id {
            Some(id) if exists(self, id) => Ok(id),
            Some(_) => Err(ServiceError::NotFound("record not found".into())),
            None => Ok(self.next_id()),
        }
    }

    fn animal_type(&self, id: i32) -> Option<AnimalType> {
        self.animal_types.get(&id).cloned().map(AnimalType::from)
    }

    fn animal(&self, row: &animal::Model) -> Result<Animal, ServiceError> {
        let ty = self
            .animal_type(row.animal_type_id)
            .ok_or_else(|| ServiceError::dangling("animal", row.id, "animal type", row.animal_type_id))?;
        Ok(Animal::from_model(row.clone(), ty))
    }

    fn medical_record(&self, row: &medical_record::Model) -> Result<MedicalRecord, ServiceError> {
        let animal = self
            .animals
            .get(&row.animal_id)
            .ok_or_else(|| ServiceError::dangling("medical record", row.id, "animal", row.animal_id))?;
        Ok(MedicalRecord::from_model(row.clone(), self.animal(animal)?))
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>, ServiceError> {
        self.tables.lock().map_err(|_| ServiceError::Db("memory store lock poisoned".into()))
    }
}

#[async_trait]
impl AnimalTypeRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<AnimalType>, ServiceError> {
        let t = self.tables()?;
        Ok(t.animal_types.values().cloned().map(AnimalType::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<AnimalType>, ServiceError> {
        Ok(self.tables()?.animal_type(id))
    }

    async fn save(&self, id: Option<i32>, draft: &AnimalTypeDraft) -> Result<AnimalType, ServiceError> {
        let mut t = self.tables()?;
        let id = t.target_id(id, |t, id| t.animal_types.contains_key(&id))?;
        let row = animal_type::Model { id, name: draft.name.clone(), average_lifespan: draft.average_lifespan };
        t.animal_types.insert(id, row.clone());
        Ok(row.into())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        let mut t = self.tables()?;
        if t.animals.values().any(|a| a.animal_type_id == id) {
            return Err(ServiceError::Conflict(format!("animal type {} is referenced by animals", id)));
        }
        t.animal_types.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl AnimalRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Animal>, ServiceError> {
        let t = self.tables()?;
        t.animals.values().map(|row| t.animal(row)).collect()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Animal>, ServiceError> {
        let t = self.tables()?;
        t.animals.get(&id).map(|row| t.animal(row)).transpose()
    }

    async fn save(&self, id: Option<i32>, draft: &AnimalDraft) -> Result<Animal, ServiceError> {
        let mut t = self.tables()?;
        if !t.animal_types.contains_key(&draft.animal_type.id) {
            return Err(ServiceError::Conflict(format!("animal type {} does not exist", draft.animal_type.id)));
        }
        let id = t.target_id(id, |t, id| t.animals.contains_key(&id))?;
        let row = animal::Model {
            id,
            name: draft.name.clone(),
            age: draft.age,
            breed: draft.breed.clone(),
            gender: draft.gender,
            weight: draft.weight,
            color: draft.color.clone(),
            animal_type_id: draft.animal_type.id,
        };
        t.animals.insert(id, row.clone());
        t.animal(&row)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        let mut t = self.tables()?;
        if t.medical_records.values().any(|r| r.animal_id == id) {
            return Err(ServiceError::Conflict(format!("animal {} is referenced by medical records", id)));
        }
        t.animals.remove(&id);
        Ok(())
    }

    async fn exists_by_animal_type_id(&self, animal_type_id: i32) -> Result<bool, ServiceError> {
        Ok(self.tables()?.animals.values().any(|a| a.animal_type_id == animal_type_id))
    }
}

#[async_trait]
impl MedicalRecordRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<MedicalRecord>, ServiceError> {
        let t = self.tables()?;
        t.medical_records.values().map(|row| t.medical_record(row)).collect()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<MedicalRecord>, ServiceError> {
        let t = self.tables()?;
        t.medical_records.get(&id).map(|row| t.medical_record(row)).transpose()
    }

    async fn find_by_animal_id(&self, animal_id: i32) -> Result<Vec<MedicalRecord>, ServiceError> {
        let t = self.tables()?;
        t.medical_records
            .values()
            .filter(|r| r.animal_id == animal_id)
            .map(|row| t.medical_record(row))
            .collect()
    }

    async fn save(&self, id: Option<i32>, values: &MedicalRecordValues) -> Result<MedicalRecord, ServiceError> {
        let mut t = self.tables()?;
        if !t.animals.contains_key(&values.animal.id) {
            return Err(ServiceError::Conflict(format!("animal {} does not exist", values.animal.id)));
        }
        let id = t.target_id(id, |t, id| t.medical_records.contains_key(&id))?;
        let row = medical_record::Model {
            id,
            visit_date: values.visit_date,
            procedure_type: values.procedure_type.clone(),
            diagnosis: values.diagnosis.clone(),
            animal_id: values.animal.id,
        };
        t.medical_records.insert(id, row.clone());
        t.medical_record(&row)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        self.tables()?.medical_records.remove(&id);
        Ok(())
    }

    async fn exists_by_animal_id(&self, animal_id: i32) -> Result<bool, ServiceError> {
        Ok(self.tables()?.medical_records.values().any(|r| r.animal_id == animal_id))
    }
}
