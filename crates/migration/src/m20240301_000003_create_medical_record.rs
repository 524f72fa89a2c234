//! Create `medical_records` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MedicalRecords::Table)
                    .if_not_exists()
                    .col(pk_auto(MedicalRecords::Id))
                    .col(date(MedicalRecords::VisitDate).not_null())
                    .col(string_len(MedicalRecords::ProcedureType, 100).not_null())
                    .col(string_len(MedicalRecords::Diagnosis, 500).not_null())
                    .col(integer(MedicalRecords::AnimalId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_medical_record_animal")
                            .from(MedicalRecords::Table, MedicalRecords::AnimalId)
                            .to(Animals::Table, Animals::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MedicalRecords::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum MedicalRecords {
    Table,
    Id,
    VisitDate,
    ProcedureType,
    Diagnosis,
    AnimalId,
}

#[derive(DeriveIden)]
enum Animals { Table, Id }
