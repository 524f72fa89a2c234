use std::collections::HashMap;

use async_trait::async_trait;
use models::{animal, animal_type, medical_record};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::domain::{Animal, AnimalDraft, AnimalType, AnimalTypeDraft, MedicalRecord, MedicalRecordValues};
use crate::errors::ServiceError;
use crate::repository::{AnimalRepository, AnimalTypeRepository, MedicalRecordRepository};

/// SeaORM-backed animal type store.
#[derive(Clone)]
pub struct SeaOrmAnimalTypeRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl AnimalTypeRepository for SeaOrmAnimalTypeRepository {
    async fn find_all(&self) -> Result<Vec<AnimalType>, ServiceError> {
        let rows = animal_type::Entity::find()
            .order_by_asc(animal_type::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::from_db)?;
        Ok(rows.into_iter().map(AnimalType::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<AnimalType>, ServiceError> {
        let row = animal_type::Entity::find_by_id(id).one(&self.db).await.map_err(ServiceError::from_db)?;
        Ok(row.map(AnimalType::from))
    }

    async fn save(&self, id: Option<i32>, draft: &AnimalTypeDraft) -> Result<AnimalType, ServiceError> {
        let am = animal_type::ActiveModel {
            id: id.map_or(NotSet, Set),
            name: Set(draft.name.clone()),
            average_lifespan: Set(draft.average_lifespan),
        };
        let saved = match id {
            Some(_) => am.update(&self.db).await,
            None => am.insert(&self.db).await,
        }
        .map_err(ServiceError::from_db)?;
        Ok(saved.into())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        animal_type::Entity::delete_by_id(id).exec(&self.db).await.map_err(ServiceError::from_db)?;
        Ok(())
    }
}

/// SeaORM-backed animal store; reads join the animal type eagerly.
#[derive(Clone)]
pub struct SeaOrmAnimalRepository {
    pub db: DatabaseConnection,
}

fn resolve_animal((row, ty): (animal::Model, Option<animal_type::Model>)) -> Result<Animal, ServiceError> {
    let ty = ty.ok_or_else(|| ServiceError::dangling("animal", row.id, "animal type", row.animal_type_id))?;
    Ok(Animal::from_model(row, ty.into()))
}

#[async_trait]
impl AnimalRepository for SeaOrmAnimalRepository {
    async fn find_all(&self) -> Result<Vec<Animal>, ServiceError> {
        let rows = animal::Entity::find()
            .find_also_related(animal_type::Entity)
            .order_by_asc(animal::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::from_db)?;
        rows.into_iter().map(resolve_animal).collect()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Animal>, ServiceError> {
        let row = animal::Entity::find_by_id(id)
            .find_also_related(animal_type::Entity)
            .one(&self.db)
            .await
            .map_err(ServiceError::from_db)?;
        row.map(resolve_animal).transpose()
    }

    async fn save(&self, id: Option<i32>, draft: &AnimalDraft) -> Result<Animal, ServiceError> {
        let am = animal::ActiveModel {
            id: id.map_or(NotSet, Set),
            name: Set(draft.name.clone()),
            age: Set(draft.age),
            breed: Set(draft.breed.clone()),
            gender: Set(draft.gender),
            weight: Set(draft.weight),
            color: Set(draft.color.clone()),
            animal_type_id: Set(draft.animal_type.id),
        };
        let saved = match id {
            Some(_) => am.update(&self.db).await,
            None => am.insert(&self.db).await,
        }
        .map_err(ServiceError::from_db)?;
        Ok(Animal::from_model(saved, draft.animal_type.clone()))
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        animal::Entity::delete_by_id(id).exec(&self.db).await.map_err(ServiceError::from_db)?;
        Ok(())
    }

    async fn exists_by_animal_type_id(&self, animal_type_id: i32) -> Result<bool, ServiceError> {
        let n = animal::Entity::find()
            .filter(animal::Column::AnimalTypeId.eq(animal_type_id))
            .count(&self.db)
            .await
            .map_err(ServiceError::from_db)?;
        Ok(n > 0)
    }
}

/// SeaORM-backed medical record store; reads resolve animal and animal type.
#[derive(Clone)]
pub struct SeaOrmMedicalRecordRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmMedicalRecordRepository {
    async fn resolve(
        &self,
        rows: Vec<(medical_record::Model, Option<animal::Model>)>,
    ) -> Result<Vec<MedicalRecord>, ServiceError> {
        let type_ids: Vec<i32> = rows
            .iter()
            .filter_map(|(_, a)| a.as_ref().map(|a| a.animal_type_id))
            .collect();
        let types: HashMap<i32, AnimalType> = if type_ids.is_empty() {
            HashMap::new()
        } else {
            animal_type::Entity::find()
                .filter(animal_type::Column::Id.is_in(type_ids))
                .all(&self.db)
                .await
                .map_err(ServiceError::from_db)?
                .into_iter()
                .map(|t| (t.id, AnimalType::from(t)))
                .collect()
        };

        rows.into_iter()
            .map(|(record, animal)| {
                let animal = animal.ok_or_else(|| {
                    ServiceError::dangling("medical record", record.id, "animal", record.animal_id)
                })?;
                let ty = types.get(&animal.animal_type_id).cloned().ok_or_else(|| {
                    ServiceError::dangling("animal", animal.id, "animal type", animal.animal_type_id)
                })?;
                Ok(MedicalRecord::from_model(record, Animal::from_model(animal, ty)))
            })
            .collect()
    }
}

#[async_trait]
impl MedicalRecordRepository for SeaOrmMedicalRecordRepository {
    async fn find_all(&self) -> Result<Vec<MedicalRecord>, ServiceError> {
        let rows = medical_record::Entity::find()
            .find_also_related(animal::Entity)
            .order_by_asc(medical_record::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::from_db)?;
        self.resolve(rows).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<MedicalRecord>, ServiceError> {
        let row = medical_record::Entity::find_by_id(id)
            .find_also_related(animal::Entity)
            .one(&self.db)
            .await
            .map_err(ServiceError::from_db)?;
        match row {
            Some(row) => Ok(self.resolve(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn find_by_animal_id(&self, animal_id: i32) -> Result<Vec<MedicalRecord>, ServiceError> {
        let rows = medical_record::Entity::find()
            .filter(medical_record::Column::AnimalId.eq(animal_id))
            .find_also_related(animal::Entity)
            .order_by_asc(medical_record::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::from_db)?;
        self.resolve(rows).await
    }

    async fn save(&self, id: Option<i32>, values: &MedicalRecordValues) -> Result<MedicalRecord, ServiceError> {
        let am = medical_record::ActiveModel {
            id: id.map_or(NotSet, Set),
            visit_date: Set(values.visit_date),
            procedure_type: Set(values.procedure_type.clone()),
            diagnosis: Set(values.diagnosis.clone()),
            animal_id: Set(values.animal.id),
        };
        let saved = match id {
            Some(_) => am.update(&self.db).await,
            None => am.insert(&self.db).await,
        }
        .map_err(ServiceError::from_db)?;
        Ok(MedicalRecord::from_model(saved, values.animal.clone()))
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        medical_record::Entity::delete_by_id(id).exec(&self.db).await.map_err(ServiceError::from_db)?;
        Ok(())
    }

    async fn exists_by_animal_id(&self, animal_id: i32) -> Result<bool, ServiceError> {
        let n = medical_record::Entity::find()
            .filter(medical_record::Column::AnimalId.eq(animal_id))
            .count(&self.db)
            .await
            .map_err(ServiceError::from_db)?;
        Ok(n > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use chrono::NaiveDate;
    use models::Gender;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn seaorm_round_trip_with_eager_resolution() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()); };
        let types = SeaOrmAnimalTypeRepository { db: db.clone() };
        let animals = SeaOrmAnimalRepository { db: db.clone() };
        let records = SeaOrmMedicalRecordRepository { db: db.clone() };

        let ty = types.save(None, &AnimalTypeDraft { name: "Dbtestcat".into(), average_lifespan: Some(15) }).await?;
        let animal = animals
            .save(None, &AnimalDraft {
                name: "Murka".into(),
                age: 3,
                breed: "Siamese".into(),
                gender: Gender::Female,
                weight: Decimal::new(450, 2),
                color: "Cream".into(),
                animal_type: ty.clone(),
            })
            .await?;
        let found = animals.find_by_id(animal.id).await?.expect("animal stored");
        assert_eq!(found.animal_type, ty);
        assert_eq!(found.weight, Decimal::new(450, 2));
        assert!(animals.exists_by_animal_type_id(ty.id).await?);

        let values = MedicalRecordValues {
            visit_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            procedure_type: "Checkup".into(),
            diagnosis: "Healthy".into(),
            animal: found.clone(),
        };
        let record = records.save(None, &values).await?;
        let by_animal = records.find_by_animal_id(animal.id).await?;
        assert_eq!(by_animal.len(), 1);
        assert_eq!(by_animal[0].animal.animal_type, ty);

        // dependent rows block the delete at the schema level
        let blocked = types.delete_by_id(ty.id).await;
        assert!(matches!(blocked, Err(ServiceError::Conflict(_))));

        records.delete_by_id(record.id).await?;
        animals.delete_by_id(animal.id).await?;
        types.delete_by_id(ty.id).await?;
        assert!(types.find_by_id(ty.id).await?.is_none());
        Ok(())
    }
}
