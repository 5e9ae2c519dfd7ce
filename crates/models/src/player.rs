use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{club, position::Position};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Date,
    pub position: Position,
    pub club_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Club }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Club => Entity::belongs_to(club::Entity)
                .from(Column::ClubId)
                .to(club::Column::Id)
                .into(),
        }
    }
}

impl Related<club::Entity> for Entity {
    fn to() -> RelationDef { Relation::Club.def() }
}

impl ActiveModelBehavior for ActiveModel {}
