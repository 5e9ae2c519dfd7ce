use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{PlayerDto, PlayerPatch};
use crate::errors::ServiceError;
use crate::store::{EntityStore, PlayerRecord};

/// Application service for players.
/// The nested club travels with the player record; the store persists it on save.
pub struct PlayerService<S: EntityStore<PlayerRecord>> {
    store: Arc<S>,
}

impl<S: EntityStore<PlayerRecord>> PlayerService<S> {
    pub fn new(store: Arc<S>) -> Self { Self { store } }

    #[instrument(skip(self, input), fields(last_name = %input.last_name, with_club = input.club.is_some()))]
    pub async fn create_player(&self, input: PlayerDto) -> Result<PlayerDto, ServiceError> {
        let saved = self.store.save(input.into()).await?;
        info!(player_id = ?saved.id, club_id = ?saved.club.as_ref().and_then(|c| c.id), "player_saved");
        Ok(saved.into())
    }

    #[instrument(skip(self, input))]
    pub async fn replace_player(&self, input: PlayerDto, id: i64) -> Result<PlayerDto, ServiceError> {
        let saved = self.store.replace(id, input.into()).await?;
        info!(player_id = id, club_id = ?saved.club.as_ref().and_then(|c| c.id), "player_replaced");
        Ok(saved.into())
    }

    pub async fn player_exists(&self, id: i64) -> Result<bool, ServiceError> {
        self.store.exists(id).await
    }

    pub async fn get_player_by_id(&self, id: i64) -> Result<Option<PlayerDto>, ServiceError> {
        Ok(self.store.get_by_id(id).await?.map(PlayerDto::from))
    }

    pub async fn get_all_players(&self) -> Result<Vec<PlayerDto>, ServiceError> {
        let rows = self.store.get_all().await?;
        Ok(rows.into_iter().map(PlayerDto::from).collect())
    }

    #[instrument(skip(self, patch))]
    pub async fn partial_update_player(&self, patch: PlayerPatch, id: i64) -> Result<PlayerDto, ServiceError> {
        let mut existing = self.store.get_by_id(id).await?.ok_or_else(|| ServiceError::not_found("player"))?;
        patch.apply(&mut existing);
        let saved = self.store.replace(id, existing).await?;
        info!(player_id = id, "player_patched");
        Ok(saved.into())
    }

    #[instrument(skip(self))]
    pub async fn delete_player_by_id(&self, id: i64) -> Result<(), ServiceError> {
        self.store.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::ClubDto;
    use crate::patch::Patch;
    use crate::store::{EntityStore, SeaOrmClubStore, SeaOrmPlayerStore};
    use crate::test_support::get_db;
    use chrono::NaiveDate;
    use models::Position;

    struct Fixture {
        svc: PlayerService<SeaOrmPlayerStore>,
        clubs: SeaOrmClubStore,
    }

    async fn fixture() -> Result<Fixture, anyhow::Error> {
        let db = get_db().await?;
        Ok(Fixture {
            svc: PlayerService::new(Arc::new(SeaOrmPlayerStore { db: db.clone() })),
            clubs: SeaOrmClubStore { db },
        })
    }

    fn barca() -> ClubDto {
        ClubDto {
            id: None,
            name: "FC Barcelona".into(),
            short_name: "BAR".into(),
            founding_date: NaiveDate::from_ymd_opt(1899, 11, 29).unwrap(),
            total_trophies: 100,
        }
    }

    fn messi() -> PlayerDto {
        PlayerDto {
            id: None,
            first_name: "Lionel".into(),
            last_name: "Messi".into(),
            birth_date: NaiveDate::from_ymd_opt(1987, 6, 24).unwrap(),
            position: Position::Midfielder,
            club: Some(barca()),
        }
    }

    fn ronaldo() -> PlayerDto {
        PlayerDto {
            id: None,
            first_name: "Cristiano".into(),
            last_name: "Ronaldo".into(),
            birth_date: NaiveDate::from_ymd_opt(1985, 2, 5).unwrap(),
            position: Position::Striker,
            club: Some(ClubDto {
                id: None,
                name: "Real Madrid".into(),
                short_name: "RM".into(),
                founding_date: NaiveDate::from_ymd_opt(1902, 3, 6).unwrap(),
                total_trophies: 99,
            }),
        }
    }

    #[tokio::test]
    async fn player_with_nested_club_persists_both() -> Result<(), anyhow::Error> {
        let f = fixture().await?;
        let created = f.svc.create_player(messi()).await?;
        let id = created.id.expect("player id");

        let found = f.svc.get_player_by_id(id).await?.expect("player");
        assert_eq!(found.first_name, "Lionel");
        assert_eq!(found.last_name, "Messi");
        assert_eq!(found.birth_date, messi().birth_date);
        assert_eq!(found.position, Position::Midfielder);

        let club = found.club.expect("club link");
        let club_id = club.id.expect("club id");
        assert_eq!(club, ClubDto { id: Some(club_id), ..barca() });
        assert!(f.clubs.exists(club_id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn missing_player_is_none() -> Result<(), anyhow::Error> {
        let f = fixture().await?;
        f.svc.create_player(messi()).await?;
        assert!(f.svc.get_player_by_id(99).await?.is_none());
        assert!(!f.svc.player_exists(99).await?);
        Ok(())
    }

    #[tokio::test]
    async fn list_returns_every_created_player() -> Result<(), anyhow::Error> {
        let f = fixture().await?;
        f.svc.create_player(messi()).await?;
        f.svc.create_player(ronaldo()).await?;

        let mut names: Vec<String> = f.svc.get_all_players().await?.into_iter().map(|p| p.first_name).collect();
        names.sort();
        assert_eq!(names, vec!["Cristiano".to_string(), "Lionel".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn partial_update_merges_fields_and_keeps_club() -> Result<(), anyhow::Error> {
        let f = fixture().await?;
        let created = f.svc.create_player(messi()).await?;
        let id = created.id.unwrap();

        let patch = PlayerPatch { first_name: Patch::Value("Updated".into()), ..Default::default() };
        let updated = f.svc.partial_update_player(patch, id).await?;

        assert_eq!(updated.first_name, "Updated");
        assert_eq!(updated.last_name, "Messi");
        assert_eq!(updated.club, created.club);
        Ok(())
    }

    #[tokio::test]
    async fn partial_update_replaces_or_detaches_club() -> Result<(), anyhow::Error> {
        let f = fixture().await?;
        let id = f.svc.create_player(messi()).await?.id.unwrap();

        let moved = f
            .svc
            .partial_update_player(PlayerPatch { club: Patch::Value(ronaldo().club.unwrap()), ..Default::default() }, id)
            .await?;
        assert_eq!(moved.club.as_ref().map(|c| c.short_name.as_str()), Some("RM"));
        assert_eq!(f.clubs.get_all().await?.len(), 2);

        let free = f.svc.partial_update_player(PlayerPatch { club: Patch::Null, ..Default::default() }, id).await?;
        assert!(free.club.is_none());
        assert!(f.svc.get_player_by_id(id).await?.unwrap().club.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn partial_update_of_missing_player_is_not_found() -> Result<(), anyhow::Error> {
        let f = fixture().await?;
        let err = f.svc.partial_update_player(PlayerPatch::default(), 99).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }

    #[tokio::test]
    async fn full_replace_keeps_id() -> Result<(), anyhow::Error> {
        let f = fixture().await?;
        let id = f.svc.create_player(messi()).await?.id.unwrap();

        let replaced = f.svc.create_player(PlayerDto { id: Some(id), ..ronaldo() }).await?;
        assert_eq!(replaced.id, Some(id));
        assert_eq!(replaced.first_name, "Cristiano");
        assert_eq!(f.svc.get_all_players().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn replace_of_missing_player_writes_nothing() -> Result<(), anyhow::Error> {
        let f = fixture().await?;
        let id = f.svc.create_player(messi()).await?.id.unwrap();
        let replaced = f.svc.replace_player(ronaldo(), id).await?;
        assert_eq!(replaced.id, Some(id));
        assert_eq!(replaced.last_name, "Ronaldo");

        let err = f.svc.replace_player(messi(), id + 1).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(f.svc.get_all_players().await?.len(), 1);
        // the cascaded club is rolled back with the player
        assert_eq!(f.clubs.get_all().await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn deleted_player_is_gone_but_club_remains() -> Result<(), anyhow::Error> {
        let f = fixture().await?;
        let created = f.svc.create_player(messi()).await?;
        let club_id = created.club.as_ref().and_then(|c| c.id).unwrap();

        f.svc.delete_player_by_id(created.id.unwrap()).await?;
        assert!(f.svc.get_all_players().await?.is_empty());
        assert!(f.clubs.exists(club_id).await?);
        f.svc.delete_player_by_id(99).await?;
        Ok(())
    }
}
