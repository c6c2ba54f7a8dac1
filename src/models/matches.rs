use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::common::Sport;
use crate::models::match_event::MatchEvent;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Match {
    pub id: Uuid,
    pub league_id: Option<Uuid>,
    pub sport: Sport,
    pub scheduled_at: DateTime<Utc>,
    pub location: Option<String>,
    pub home_club_id: Uuid,
    pub away_club_id: Uuid,
    pub status: MatchStatus,
    pub score_home: i32,
    pub score_away: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Match lifecycle. The engine only ever moves status forward, except for
/// the force-to-live rule on scoring events (see the live match service).
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Finished,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::Live => "live",
            MatchStatus::Finished => "finished",
        }
    }
}

impl From<String> for MatchStatus {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "live" => MatchStatus::Live,
            "finished" => MatchStatus::Finished,
            _ => MatchStatus::Scheduled,
        }
    }
}

/// Full match snapshot broadcast to viewers: the match row plus its
/// event log, flattened into one object on the wire.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MatchWithEvents {
    #[serde(flatten)]
    pub info: Match,
    pub events: Vec<MatchEvent>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateMatchRequest {
    pub league_id: Option<Uuid>,
    pub sport: Sport,
    pub scheduled_at: DateTime<Utc>,
    pub location: Option<String>,
    pub home_club_id: Uuid,
    pub away_club_id: Uuid,
}

/// Patch-style update: absent fields keep their current value.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UpdateMatchRequest {
    pub league_id: Option<Uuid>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub status: Option<MatchStatus>,
    pub score_home: Option<i32>,
    pub score_away: Option<i32>,
}

impl UpdateMatchRequest {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(score_home) = self.score_home {
            if score_home < 0 {
                return Err(format!("score_home cannot be negative: {}", score_home));
            }
        }
        if let Some(score_away) = self.score_away {
            if score_away < 0 {
                return Err(format!("score_away cannot be negative: {}", score_away));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct MatchListQuery {
    pub league_id: Option<Uuid>,
    pub status: Option<MatchStatus>,
}
