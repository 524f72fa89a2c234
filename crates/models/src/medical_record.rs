use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::animal;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "medical_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub visit_date: Date,
    pub procedure_type: String,
    pub diagnosis: String,
    pub animal_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Animal }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Animal => Entity::belongs_to(animal::Entity)
                .from(Column::AnimalId)
                .to(animal::Column::Id)
                .into(),
        }
    }
}

impl Related<animal::Entity> for Entity {
    fn to() -> RelationDef { Relation::Animal.def() }
}

impl ActiveModelBehavior for ActiveModel {}
