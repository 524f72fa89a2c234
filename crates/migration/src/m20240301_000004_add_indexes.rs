use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Animals: lookups by type when checking dependents
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_animals_animal_type_id")
                    .table(Animals::Table)
                    .col(Animals::AnimalTypeId)
                    .to_owned(),
            )
            .await?;

        // MedicalRecords: /medical-records/by-animal/{id}
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_medical_records_animal_id")
                    .table(MedicalRecords::Table)
                    .col(MedicalRecords::AnimalId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_medical_records_animal_id").table(MedicalRecords::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_animals_animal_type_id").table(Animals::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Animals { Table, AnimalTypeId }

#[derive(DeriveIden)]
enum MedicalRecords { Table, AnimalId }
