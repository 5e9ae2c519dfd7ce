use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::store::{SeaOrmClubStore, SeaOrmPlayerStore};
use service::{ClubService, PlayerService};

pub type ClubSvc = ClubService<SeaOrmClubStore>;
pub type PlayerSvc = PlayerService<SeaOrmPlayerStore>;

/// Shared handler state: one service per entity, both on the same connection pool.
#[derive(Clone)]
pub struct ServerState {
    pub club_svc: Arc<ClubSvc>,
    pub player_svc: Arc<PlayerSvc>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let club_svc = Arc::new(ClubService::new(Arc::new(SeaOrmClubStore { db: db.clone() })));
        let player_svc = Arc::new(PlayerService::new(Arc::new(SeaOrmPlayerStore { db })));
        Self { club_svc, player_svc }
    }
}
