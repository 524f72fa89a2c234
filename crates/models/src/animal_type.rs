use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::animal;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "animal_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub average_lifespan: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Animal }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Animal => Entity::has_many(animal::Entity).into() }
    }
}

impl Related<animal::Entity> for Entity {
    fn to() -> RelationDef { Relation::Animal.def() }
}

impl ActiveModelBehavior for ActiveModel {}
