use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Playing position, stored and serialized by its symbolic name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    #[sea_orm(string_value = "GOALKEEPER")]
    Goalkeeper,
    #[sea_orm(string_value = "DEFENDER")]
    Defender,
    #[sea_orm(string_value = "MIDFIELDER")]
    Midfielder,
    #[sea_orm(string_value = "STRIKER")]
    Striker,
}

#[cfg(test)]
mod tests {
    use super::Position;

    #[test]
    fn serializes_as_symbolic_name() {
        assert_eq!(serde_json::to_string(&Position::Midfielder).unwrap(), "\"MIDFIELDER\"");
        let p: Position = serde_json::from_str("\"GOALKEEPER\"").unwrap();
        assert_eq!(p, Position::Goalkeeper);
    }

    #[test]
    fn rejects_unknown_position() {
        assert!(serde_json::from_str::<Position>("\"WINGBACK\"").is_err());
    }
}
