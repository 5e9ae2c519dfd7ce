//! Entity Store: persistence abstraction shared by clubs and players.

use async_trait::async_trait;

use crate::errors::ServiceError;

pub mod records;
pub mod seaorm;

pub use records::{ClubRecord, PlayerRecord};
pub use seaorm::{SeaOrmClubStore, SeaOrmPlayerStore};

/// CRUD access to one record type, keyed by a server-assigned numeric id.
#[async_trait]
pub trait EntityStore<R: Send + 'static>: Send + Sync {
    async fn exists(&self, id: i64) -> Result<bool, ServiceError>;

    /// `Ok(None)` for a missing id.
    async fn get_by_id(&self, id: i64) -> Result<Option<R>, ServiceError>;

    async fn get_all(&self) -> Result<Vec<R>, ServiceError>;

    /// Insert when the record has no id (or its id is unknown), replace otherwise.
    /// The returned record always carries its id.
    async fn save(&self, record: R) -> Result<R, ServiceError>;

    /// Overwrite the row `id` with `record`. `NotFound` when no such row exists;
    /// unlike `save`, this never inserts.
    async fn replace(&self, id: i64, record: R) -> Result<R, ServiceError>;

    /// No-op for a missing id.
    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;
}
