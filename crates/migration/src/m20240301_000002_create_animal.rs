//! Create `animals` table.
//! Each animal belongs to exactly one animal type; deleting a referenced type is refused.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Animals::Table)
                    .if_not_exists()
                    .col(pk_auto(Animals::Id))
                    .col(string_len(Animals::Name, 50).not_null())
                    .col(integer(Animals::Age).not_null())
                    .col(string_len(Animals::Breed, 100).not_null())
                    .col(string_len(Animals::Gender, 10).not_null())
                    // precision 6 so the inclusive 1000.00 upper bound fits
                    .col(decimal_len(Animals::Weight, 6, 2).not_null())
                    .col(string_len(Animals::Color, 50).not_null())
                    .col(integer(Animals::AnimalTypeId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_animal_animal_type")
                            .from(Animals::Table, Animals::AnimalTypeId)
                            .to(AnimalTypes::Table, AnimalTypes::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Animals::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Animals {
    Table,
    Id,
    Name,
    Age,
    Breed,
    Gender,
    Weight,
    Color,
    AnimalTypeId,
}

#[derive(DeriveIden)]
enum AnimalTypes { Table, Id }
