use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::common::Sport;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Club {
    pub id: Uuid,
    pub name: String,
    pub sport: Sport,
    pub league_id: Option<Uuid>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateClubRequest {
    pub name: String,
    pub sport: Sport,
    pub league_id: Option<Uuid>,
    pub location: Option<String>,
}

/// Patch-style update: absent fields keep their current value.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct UpdateClubRequest {
    pub name: Option<String>,
    pub sport: Option<Sport>,
    pub league_id: Option<Uuid>,
    pub location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ClubListQuery {
    pub league_id: Option<Uuid>,
}
