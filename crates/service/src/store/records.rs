use chrono::NaiveDate;
use models::Position;

/// Stored club. `id` is `None` until the record has been saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubRecord {
    pub id: Option<i64>,
    pub name: String,
    pub short_name: String,
    pub founding_date: NaiveDate,
    pub total_trophies: u32,
}

/// Stored player with its resolved club, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub position: Position,
    pub club: Option<ClubRecord>,
}
