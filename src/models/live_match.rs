use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::match_event::{MatchEvent, MatchEventType};
use crate::models::matches::{MatchStatus, MatchWithEvents};

/// Inbound commands on the live match channel, as `{"type": ..,
/// "payload": ..}` envelopes. Payload keys use the camelCase wire
/// contract the viewer clients already speak; the event kind keeps its
/// own `type` key inside the payload.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum LiveCommand {
    #[serde(rename = "subscribe")]
    Subscribe(SubscribeRequest),
    #[serde(rename = "score-update")]
    ScoreUpdate(ScoreUpdate),
    #[serde(rename = "event-add")]
    EventAdd(EventInput),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeRequest {
    pub match_id: String,
}

/// Full score overwrite for a match, optionally moving its status.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreUpdate {
    pub match_id: String,
    pub score_home: i32,
    pub score_away: i32,
    #[serde(default)]
    pub status: Option<MatchStatus>,
}

impl ScoreUpdate {
    /// Shape validation; returns the parsed match id on success.
    pub fn validate(&self) -> Result<Uuid, String> {
        let match_id = parse_match_id(&self.match_id)?;
        if self.score_home < 0 {
            return Err(format!("scoreHome cannot be negative: {}", self.score_home));
        }
        if self.score_away < 0 {
            return Err(format!("scoreAway cannot be negative: {}", self.score_away));
        }
        Ok(match_id)
    }
}

/// A new match event submitted from the sideline. `isHome` decides which
/// side a scoring event credits; without it the event is recorded but the
/// score stays untouched.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInput {
    pub match_id: String,
    #[serde(rename = "type")]
    pub event_type: MatchEventType,
    #[serde(default)]
    pub minute: Option<i32>,
    #[serde(default)]
    pub quarter: Option<i32>,
    #[serde(default)]
    pub value: Option<i32>,
    #[serde(default)]
    pub player_id: Option<Uuid>,
    #[serde(default)]
    pub is_home: Option<bool>,
}

impl EventInput {
    /// Shape validation; returns the parsed match id on success.
    pub fn validate(&self) -> Result<Uuid, String> {
        let match_id = parse_match_id(&self.match_id)?;
        if let Some(minute) = self.minute {
            if minute < 0 {
                return Err(format!("minute cannot be negative: {}", minute));
            }
        }
        if let Some(quarter) = self.quarter {
            if !(1..=4).contains(&quarter) {
                return Err(format!("quarter must be between 1 and 4: {}", quarter));
            }
        }
        Ok(match_id)
    }
}

fn parse_match_id(raw: &str) -> Result<Uuid, String> {
    if raw.trim().is_empty() {
        return Err("matchId cannot be empty".to_string());
    }
    Uuid::parse_str(raw).map_err(|_| format!("matchId is not a valid id: {}", raw))
}

/// Outbound events pushed to every member of a match room.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(tag = "event_type")]
pub enum LiveMatchEvent {
    #[serde(rename = "match-update")]
    MatchUpdate {
        #[serde(rename = "match")]
        snapshot: MatchWithEvents,
    },
    #[serde(rename = "event-new")]
    EventNew { event: MatchEvent },
}

impl LiveMatchEvent {
    pub fn name(&self) -> &'static str {
        match self {
            LiveMatchEvent::MatchUpdate { .. } => "match-update",
            LiveMatchEvent::EventNew { .. } => "event-new",
        }
    }
}
