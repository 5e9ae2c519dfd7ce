use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{ClubDto, ClubPatch};
use crate::errors::ServiceError;
use crate::store::{ClubRecord, EntityStore};

/// Application service for clubs. Converts between wire DTOs and store records.
pub struct ClubService<S: EntityStore<ClubRecord>> {
    store: Arc<S>,
}

impl<S: EntityStore<ClubRecord>> ClubService<S> {
    pub fn new(store: Arc<S>) -> Self { Self { store } }

    /// Persist `input` as a club. A supplied id that already exists makes this a full replace.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_club(&self, input: ClubDto) -> Result<ClubDto, ServiceError> {
        let saved = self.store.save(input.into()).await?;
        info!(club_id = ?saved.id, "club_saved");
        Ok(saved.into())
    }

    /// Full replace of an existing club, keeping `id`. `NotFound` when it is missing.
    #[instrument(skip(self, input))]
    pub async fn replace_club(&self, input: ClubDto, id: i64) -> Result<ClubDto, ServiceError> {
        let saved = self.store.replace(id, input.into()).await?;
        info!(club_id = id, "club_replaced");
        Ok(saved.into())
    }

    pub async fn club_exists(&self, id: i64) -> Result<bool, ServiceError> {
        self.store.exists(id).await
    }

    pub async fn get_club_by_id(&self, id: i64) -> Result<Option<ClubDto>, ServiceError> {
        Ok(self.store.get_by_id(id).await?.map(ClubDto::from))
    }

    pub async fn get_all_clubs(&self) -> Result<Vec<ClubDto>, ServiceError> {
        let rows = self.store.get_all().await?;
        Ok(rows.into_iter().map(ClubDto::from).collect())
    }

    /// Merge the supplied fields of `patch` into club `id`.
    #[instrument(skip(self, patch))]
    pub async fn partial_update_club(&self, patch: ClubPatch, id: i64) -> Result<ClubDto, ServiceError> {
        let mut existing = self.store.get_by_id(id).await?.ok_or_else(|| ServiceError::not_found("club"))?;
        patch.apply(&mut existing);
        let saved = self.store.replace(id, existing).await?;
        info!(club_id = id, "club_patched");
        Ok(saved.into())
    }

    #[instrument(skip(self))]
    pub async fn delete_club_by_id(&self, id: i64) -> Result<(), ServiceError> {
        self.store.delete_by_id(id).await
    }
}
