use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::player;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "club")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub short_name: String,
    pub founding_date: Date,
    pub total_trophies: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Player }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Player => Entity::has_many(player::Entity).into(),
        }
    }
}

impl Related<player::Entity> for Entity {
    fn to() -> RelationDef { Relation::Player.def() }
}

impl ActiveModelBehavior for ActiveModel {}
