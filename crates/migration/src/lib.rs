//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_animal_type;
mod m20240301_000002_create_animal;
mod m20240301_000003_create_medical_record;
mod m20240301_000004_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_animal_type::Migration),
            Box::new(m20240301_000002_create_animal::Migration),
            Box::new(m20240301_000003_create_medical_record::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000004_add_indexes::Migration),
        ]
    }
}
