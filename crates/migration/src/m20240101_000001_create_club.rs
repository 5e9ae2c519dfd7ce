//! Create `club` table.
//!
//! Root entity; players optionally reference it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Club::Table)
                    .if_not_exists()
                    .col(big_integer(Club::Id).auto_increment().primary_key().take())
                    .col(string_len(Club::Name, 128))
                    .col(string_len(Club::ShortName, 16))
                    .col(date(Club::FoundingDate))
                    .col(big_integer(Club::TotalTrophies))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Club::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Club { Table, Id, Name, ShortName, FoundingDate, TotalTrophies }
