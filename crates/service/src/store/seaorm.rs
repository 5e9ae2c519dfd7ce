use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryOrder, Set, TransactionTrait,
};
use tracing::debug;

use models::{club, player};

use super::{ClubRecord, EntityStore, PlayerRecord};
use crate::errors::ServiceError;

/// SeaORM-backed club store.
#[derive(Clone)]
pub struct SeaOrmClubStore {
    pub db: DatabaseConnection,
}

/// SeaORM-backed player store. Saving a player also saves its inline club.
#[derive(Clone)]
pub struct SeaOrmPlayerStore {
    pub db: DatabaseConnection,
}

fn club_record(m: club::Model) -> Result<ClubRecord, ServiceError> {
    let total_trophies = u32::try_from(m.total_trophies).map_err(|_| {
        ServiceError::Db(format!("club {} has out-of-range total_trophies {}", m.id, m.total_trophies))
    })?;
    Ok(ClubRecord {
        id: Some(m.id),
        name: m.name,
        short_name: m.short_name,
        founding_date: m.founding_date,
        total_trophies,
    })
}

fn player_record(p: player::Model, c: Option<club::Model>) -> Result<PlayerRecord, ServiceError> {
    Ok(PlayerRecord {
        id: Some(p.id),
        first_name: p.first_name,
        last_name: p.last_name,
        birth_date: p.birth_date,
        position: p.position,
        club: c.map(club_record).transpose()?,
    })
}

fn club_active(rec: ClubRecord) -> club::ActiveModel {
    club::ActiveModel {
        name: Set(rec.name),
        short_name: Set(rec.short_name),
        founding_date: Set(rec.founding_date),
        total_trophies: Set(i64::from(rec.total_trophies)),
        ..Default::default()
    }
}

/// `RecordNotUpdated` means the row vanished; surface it as `NotFound`.
fn update_err(entity: &str) -> impl Fn(DbErr) -> ServiceError + '_ {
    move |e| match e {
        DbErr::RecordNotUpdated => ServiceError::not_found(entity),
        e => ServiceError::db(e),
    }
}

/// Overwrite club `id`. Fails with `NotFound` when the row does not exist.
async fn update_club<C: ConnectionTrait>(conn: &C, id: i64, rec: ClubRecord) -> Result<club::Model, ServiceError> {
    let mut am = club_active(rec);
    am.id = ActiveValue::Unchanged(id);
    am.update(conn).await.map_err(update_err("club"))
}

/// Upsert a club on any connection or transaction.
/// An id that is not in the table is treated as a new club and gets a fresh id.
async fn save_club<C: ConnectionTrait>(conn: &C, rec: ClubRecord) -> Result<club::Model, ServiceError> {
    let existing = match rec.id {
        Some(id) => club::Entity::find_by_id(id).one(conn).await.map_err(ServiceError::db)?.map(|m| m.id),
        None => None,
    };
    match existing {
        Some(id) => update_club(conn, id, rec).await,
        None => club_active(rec).insert(conn).await.map_err(ServiceError::db),
    }
}

#[async_trait]
impl EntityStore<ClubRecord> for SeaOrmClubStore {
    async fn exists(&self, id: i64) -> Result<bool, ServiceError> {
        let n = club::Entity::find_by_id(id).count(&self.db).await.map_err(ServiceError::db)?;
        Ok(n > 0)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<ClubRecord>, ServiceError> {
        club::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ServiceError::db)?
            .map(club_record)
            .transpose()
    }

    async fn get_all(&self) -> Result<Vec<ClubRecord>, ServiceError> {
        let rows = club::Entity::find()
            .order_by_asc(club::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?;
        rows.into_iter().map(club_record).collect()
    }

    async fn save(&self, record: ClubRecord) -> Result<ClubRecord, ServiceError> {
        let saved = save_club(&self.db, record).await?;
        debug!(club_id = saved.id, "club row written");
        club_record(saved)
    }

    async fn replace(&self, id: i64, record: ClubRecord) -> Result<ClubRecord, ServiceError> {
        let saved = update_club(&self.db, id, record).await?;
        debug!(club_id = saved.id, "club row replaced");
        club_record(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        let res = club::Entity::delete_by_id(id).exec(&self.db).await.map_err(ServiceError::db)?;
        debug!(club_id = id, rows = res.rows_affected, "club delete");
        Ok(())
    }
}

impl SeaOrmPlayerStore {
    /// Save the player and its inline club in one transaction.
    /// `replace` pins the target row: a missing row fails with `NotFound` and nothing is written.
    async fn write(&self, record: PlayerRecord, replace: Option<i64>) -> Result<PlayerRecord, ServiceError> {
        // Dropping `txn` on error rolls back, including the club cascade.
        let txn = self.db.begin().await.map_err(ServiceError::db)?;

        let club = match record.club {
            Some(c) => Some(save_club(&txn, c).await?),
            None => None,
        };

        let target = match (replace, record.id) {
            (Some(id), _) => Some(id),
            (None, Some(id)) => player::Entity::find_by_id(id).one(&txn).await.map_err(ServiceError::db)?.map(|m| m.id),
            (None, None) => None,
        };

        let mut am = player::ActiveModel {
            first_name: Set(record.first_name),
            last_name: Set(record.last_name),
            birth_date: Set(record.birth_date),
            position: Set(record.position),
            club_id: Set(club.as_ref().map(|c| c.id)),
            ..Default::default()
        };
        let saved = match target {
            Some(id) => {
                am.id = ActiveValue::Unchanged(id);
                am.update(&txn).await.map_err(update_err("player"))?
            }
            None => am.insert(&txn).await.map_err(ServiceError::db)?,
        };

        txn.commit().await.map_err(ServiceError::db)?;
        debug!(player_id = saved.id, club_id = ?saved.club_id, "player row written");
        player_record(saved, club)
    }
}

#[async_trait]
impl EntityStore<PlayerRecord> for SeaOrmPlayerStore {
    async fn exists(&self, id: i64) -> Result<bool, ServiceError> {
        let n = player::Entity::find_by_id(id).count(&self.db).await.map_err(ServiceError::db)?;
        Ok(n > 0)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<PlayerRecord>, ServiceError> {
        let found = player::Entity::find_by_id(id)
            .find_also_related(club::Entity)
            .one(&self.db)
            .await
            .map_err(ServiceError::db)?;
        found.map(|(p, c)| player_record(p, c)).transpose()
    }

    async fn get_all(&self) -> Result<Vec<PlayerRecord>, ServiceError> {
        let rows = player::Entity::find()
            .find_also_related(club::Entity)
            .order_by_asc(player::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?;
        rows.into_iter().map(|(p, c)| player_record(p, c)).collect()
    }

    async fn save(&self, record: PlayerRecord) -> Result<PlayerRecord, ServiceError> {
        self.write(record, None).await
    }

    async fn replace(&self, id: i64, record: PlayerRecord) -> Result<PlayerRecord, ServiceError> {
        self.write(record, Some(id)).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        let res = player::Entity::delete_by_id(id).exec(&self.db).await.map_err(ServiceError::db)?;
        debug!(player_id = id, rows = res.rows_affected, "player delete");
        Ok(())
    }
}
