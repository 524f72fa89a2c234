use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{animal_type, medical_record, Gender};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "animals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub breed: String,
    pub gender: Gender,
    #[sea_orm(column_type = "Decimal(Some((6, 2)))")]
    pub weight: Decimal,
    pub color: String,
    pub animal_type_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { AnimalType, MedicalRecord }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::AnimalType => Entity::belongs_to(animal_type::Entity)
                .from(Column::AnimalTypeId)
                .to(animal_type::Column::Id)
                .into(),
            Relation::MedicalRecord => Entity::has_many(medical_record::Entity).into(),
        }
    }
}

impl Related<animal_type::Entity> for Entity {
    fn to() -> RelationDef { Relation::AnimalType.def() }
}

impl Related<medical_record::Entity> for Entity {
    fn to() -> RelationDef { Relation::MedicalRecord.def() }
}

impl ActiveModelBehavior for ActiveModel {}
