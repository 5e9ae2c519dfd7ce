use chrono::NaiveDate;
use models::Position;
use serde::{Deserialize, Serialize};

use crate::club::ClubDto;
use crate::patch::Patch;
use crate::store::{ClubRecord, PlayerRecord};

/// Player as sent and received over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub position: Position,
    #[serde(default)]
    pub club: Option<ClubDto>,
}

/// Partial-update payload. `club` replaces the whole link, it is not merged field by field:
/// an object sets a new club, `null` detaches it, a missing key keeps it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPatch {
    #[serde(default)]
    pub first_name: Patch<String>,
    #[serde(default)]
    pub last_name: Patch<String>,
    #[serde(default)]
    pub birth_date: Patch<NaiveDate>,
    #[serde(default)]
    pub position: Patch<Position>,
    #[serde(default)]
    pub club: Patch<ClubDto>,
}

impl PlayerPatch {
    pub fn apply(self, player: &mut PlayerRecord) {
        self.first_name.merge_into(&mut player.first_name);
        self.last_name.merge_into(&mut player.last_name);
        self.birth_date.merge_into(&mut player.birth_date);
        self.position.merge_into(&mut player.position);
        self.club.map(ClubRecord::from).merge_into_option(&mut player.club);
    }
}

impl From<PlayerDto> for PlayerRecord {
    fn from(d: PlayerDto) -> Self {
        PlayerRecord {
            id: d.id,
            first_name: d.first_name,
            last_name: d.last_name,
            birth_date: d.birth_date,
            position: d.position,
            club: d.club.map(ClubRecord::from),
        }
    }
}

impl From<PlayerRecord> for PlayerDto {
    fn from(r: PlayerRecord) -> Self {
        PlayerDto {
            id: r.id,
            first_name: r.first_name,
            last_name: r.last_name,
            birth_date: r.birth_date,
            position: r.position,
            club: r.club.map(ClubDto::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PlayerRecord {
        PlayerRecord {
            id: Some(7),
            first_name: "Lionel".into(),
            last_name: "Messi".into(),
            birth_date: NaiveDate::from_ymd_opt(1987, 6, 24).unwrap(),
            position: Position::Midfielder,
            club: Some(ClubRecord {
                id: Some(1),
                name: "FC Barcelona".into(),
                short_name: "BAR".into(),
                founding_date: NaiveDate::from_ymd_opt(1899, 11, 29).unwrap(),
                total_trophies: 100,
            }),
        }
    }

    #[test]
    fn position_and_dates_on_the_wire() {
        let v = serde_json::to_value(PlayerDto::from(record())).unwrap();
        assert_eq!(v["position"], "MIDFIELDER");
        assert_eq!(v["birthDate"], "1987-06-24");
        assert_eq!(v["club"]["shortName"], "BAR");
    }

    #[test]
    fn absent_club_keeps_link() {
        let mut rec = record();
        let patch: PlayerPatch = serde_json::from_str(r#"{"position":"STRIKER"}"#).unwrap();
        patch.apply(&mut rec);
        assert_eq!(rec.position, Position::Striker);
        assert_eq!(rec.club.and_then(|c| c.id), Some(1));
    }

    #[test]
    fn null_club_detaches() {
        let mut rec = record();
        let patch: PlayerPatch = serde_json::from_str(r#"{"club":null}"#).unwrap();
        patch.apply(&mut rec);
        assert!(rec.club.is_none());
        assert_eq!(rec.first_name, "Lionel");
    }

    #[test]
    fn club_object_replaces_link() {
        let mut rec = record();
        let patch: PlayerPatch = serde_json::from_str(
            r#"{"club":{"name":"Inter Miami","shortName":"MIA","foundingDate":"2018-01-29","totalTrophies":2}}"#,
        )
        .unwrap();
        patch.apply(&mut rec);
        let club = rec.club.expect("club");
        assert_eq!(club.id, None);
        assert_eq!(club.short_name, "MIA");
    }
}
