//! Migrator registering entity-specific migrations in dependency order.
//! `player` references `club`, so clubs are created first.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_club;
mod m20240101_000002_create_player;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_club::Migration),
            Box::new(m20240101_000002_create_player::Migration),
        ]
    }
}
