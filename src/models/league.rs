use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::common::Sport;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct League {
    pub id: Uuid,
    pub name: String,
    pub sport: Sport,
    pub season: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateLeagueRequest {
    pub name: String,
    pub sport: Sport,
    pub season: Option<String>,
}

/// Patch-style update: absent fields keep their current value.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UpdateLeagueRequest {
    pub name: Option<String>,
    pub sport: Option<Sport>,
    pub season: Option<String>,
}
