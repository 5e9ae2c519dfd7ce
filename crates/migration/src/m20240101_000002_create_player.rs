//! Create `player` table.
//! `club_id` is nullable; deleting a club detaches its players instead of removing them.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(big_integer(Player::Id).auto_increment().primary_key().take())
                    .col(string_len(Player::FirstName, 128))
                    .col(string_len(Player::LastName, 128))
                    .col(date(Player::BirthDate))
                    .col(string_len(Player::Position, 16))
                    .col(big_integer_null(Player::ClubId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_club")
                            .from(Player::Table, Player::ClubId)
                            .to(Club::Table, Club::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_player_club_id")
                    .table(Player::Table)
                    .col(Player::ClubId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Player::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Player {
    Table,
    Id,
    FirstName,
    LastName,
    BirthDate,
    Position,
    ClubId,
}

#[derive(DeriveIden)]
enum Club { Table, Id }
