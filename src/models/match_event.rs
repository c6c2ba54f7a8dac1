use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A discrete in-match occurrence. Immutable once created; owned by its
/// match and deleted with it.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct MatchEvent {
    pub id: Uuid,
    pub match_id: Uuid,
    pub event_type: MatchEventType,
    pub minute: Option<i32>,
    pub quarter: Option<i32>,
    pub value: Option<i32>,
    pub player_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Event vocabulary shared by all sports. Wire and storage both use the
/// uppercase tokens the mobile clients already send.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar")]
pub enum MatchEventType {
    #[serde(rename = "GOL")]
    #[sqlx(rename = "GOL")]
    Gol,
    #[serde(rename = "AMARILLA")]
    #[sqlx(rename = "AMARILLA")]
    Amarilla,
    #[serde(rename = "ROJA")]
    #[sqlx(rename = "ROJA")]
    Roja,
    #[serde(rename = "SANCION_2M")]
    #[sqlx(rename = "SANCION_2M")]
    Sancion2m,
    #[serde(rename = "PUNTO_1")]
    #[sqlx(rename = "PUNTO_1")]
    Punto1,
    #[serde(rename = "PUNTO_2")]
    #[sqlx(rename = "PUNTO_2")]
    Punto2,
    #[serde(rename = "PUNTO_3")]
    #[sqlx(rename = "PUNTO_3")]
    Punto3,
}

impl MatchEventType {
    /// Points the event adds to the scoring side. Cards and suspensions
    /// never move the score.
    pub fn score_delta(&self) -> i32 {
        match self {
            MatchEventType::Gol | MatchEventType::Punto1 => 1,
            MatchEventType::Punto2 => 2,
            MatchEventType::Punto3 => 3,
            MatchEventType::Amarilla | MatchEventType::Roja | MatchEventType::Sancion2m => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_delta_maps_scoring_types() {
        assert_eq!(MatchEventType::Gol.score_delta(), 1);
        assert_eq!(MatchEventType::Punto1.score_delta(), 1);
        assert_eq!(MatchEventType::Punto2.score_delta(), 2);
        assert_eq!(MatchEventType::Punto3.score_delta(), 3);
    }

    #[test]
    fn score_delta_is_zero_for_disciplinary_types() {
        assert_eq!(MatchEventType::Amarilla.score_delta(), 0);
        assert_eq!(MatchEventType::Roja.score_delta(), 0);
        assert_eq!(MatchEventType::Sancion2m.score_delta(), 0);
    }

    #[test]
    fn event_type_uses_uppercase_wire_tokens() {
        assert_eq!(serde_json::to_string(&MatchEventType::Sancion2m).unwrap(), r#""SANCION_2M""#);
        assert_eq!(
            serde_json::from_str::<MatchEventType>(r#""PUNTO_3""#).unwrap(),
            MatchEventType::Punto3
        );
        assert!(serde_json::from_str::<MatchEventType>(r#""PENALTI""#).is_err());
    }
}
