use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::patch::Patch;
use crate::store::ClubRecord;

/// Club as sent and received over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub short_name: String,
    pub founding_date: NaiveDate,
    pub total_trophies: u32,
}

/// Partial-update payload; only supplied fields are merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubPatch {
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub short_name: Patch<String>,
    #[serde(default)]
    pub founding_date: Patch<NaiveDate>,
    #[serde(default)]
    pub total_trophies: Patch<u32>,
}

impl ClubPatch {
    pub fn apply(self, club: &mut ClubRecord) {
        self.name.merge_into(&mut club.name);
        self.short_name.merge_into(&mut club.short_name);
        self.founding_date.merge_into(&mut club.founding_date);
        self.total_trophies.merge_into(&mut club.total_trophies);
    }
}

impl From<ClubDto> for ClubRecord {
    fn from(d: ClubDto) -> Self {
        ClubRecord {
            id: d.id,
            name: d.name,
            short_name: d.short_name,
            founding_date: d.founding_date,
            total_trophies: d.total_trophies,
        }
    }
}

impl From<ClubRecord> for ClubDto {
    fn from(r: ClubRecord) -> Self {
        ClubDto {
            id: r.id,
            name: r.name,
            short_name: r.short_name,
            founding_date: r.founding_date,
            total_trophies: r.total_trophies,
        }
    }
}
