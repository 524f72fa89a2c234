//! Create `animal_types` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AnimalTypes::Table)
                    .if_not_exists()
                    .col(pk_auto(AnimalTypes::Id))
                    .col(string_len(AnimalTypes::Name, 100).not_null())
                    .col(integer_null(AnimalTypes::AverageLifespan))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AnimalTypes::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AnimalTypes {
    Table,
    Id,
    Name,
    AverageLifespan,
}
