use sqlx::PgPool;
use uuid::Uuid;

use crate::models::live_match::EventInput;
use crate::models::match_event::MatchEvent;
use crate::models::matches::{
    CreateMatchRequest, Match, MatchStatus, MatchWithEvents, UpdateMatchRequest,
};

/// Store operations for matches and their events. The live ingestion path
/// relies on `apply_score_delta` being a single in-database increment so
/// that concurrent scoring events for the same match never lose updates.
#[derive(Debug, Clone)]
pub struct MatchQueries {
    pool: PgPool,
}

impl MatchQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_match(&self, request: &CreateMatchRequest) -> Result<Match, sqlx::Error> {
        sqlx::query_as::<_, Match>(
            r#"
            INSERT INTO matches (
                id, league_id, sport, scheduled_at, location,
                home_club_id, away_club_id, status, score_home, score_away,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, 'scheduled', 0, 0, NOW(), NOW())
            RETURNING
                id, league_id, sport, scheduled_at, location,
                home_club_id, away_club_id, status, score_home, score_away,
                created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.league_id)
        .bind(request.sport)
        .bind(request.scheduled_at)
        .bind(request.location.as_deref())
        .bind(request.home_club_id)
        .bind(request.away_club_id)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn find_match_by_id(&self, match_id: Uuid) -> Result<Option<Match>, sqlx::Error> {
        sqlx::query_as::<_, Match>(
            r#"
            SELECT
                id, league_id, sport, scheduled_at, location,
                home_club_id, away_club_id, status, score_home, score_away,
                created_at, updated_at
            FROM matches
            WHERE id = $1
            "#,
        )
        .bind(match_id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn list_matches(
        &self,
        league_id: Option<Uuid>,
        status: Option<MatchStatus>,
    ) -> Result<Vec<Match>, sqlx::Error> {
        sqlx::query_as::<_, Match>(
            r#"
            SELECT
                id, league_id, sport, scheduled_at, location,
                home_club_id, away_club_id, status, score_home, score_away,
                created_at, updated_at
            FROM matches
            WHERE ($1::uuid IS NULL OR league_id = $1)
            AND ($2::varchar IS NULL OR status = $2)
            ORDER BY scheduled_at
            "#,
        )
        .bind(league_id)
        .bind(status)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn update_match(
        &self,
        match_id: Uuid,
        request: &UpdateMatchRequest,
    ) -> Result<Option<Match>, sqlx::Error> {
        sqlx::query_as::<_, Match>(
            r#"
            UPDATE matches
            SET league_id = COALESCE($2, league_id),
                scheduled_at = COALESCE($3, scheduled_at),
                location = COALESCE($4, location),
                status = COALESCE($5, status),
                score_home = COALESCE($6, score_home),
                score_away = COALESCE($7, score_away),
                updated_at = NOW()
            WHERE id = $1
            RETURNING
                id, league_id, sport, scheduled_at, location,
                home_club_id, away_club_id, status, score_home, score_away,
                created_at, updated_at
            "#,
        )
        .bind(match_id)
        .bind(request.league_id)
        .bind(request.scheduled_at)
        .bind(request.location.as_deref())
        .bind(request.status)
        .bind(request.score_home)
        .bind(request.score_away)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn delete_match(&self, match_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM matches WHERE id = $1")
            .bind(match_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Overwrite both scores (and optionally the status) of a match.
    /// Returns the number of rows touched; zero means the match is gone.
    pub async fn update_score(
        &self,
        match_id: Uuid,
        score_home: i32,
        score_away: i32,
        status: Option<MatchStatus>,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE matches
            SET score_home = $2,
                score_away = $3,
                status = COALESCE($4, status),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(match_id)
        .bind(score_home)
        .bind(score_away)
        .bind(status)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Atomically add `delta` to one side's score and force the match
    /// live. The increment happens in the database, so interleaved
    /// submissions for the same match always sum their deltas.
    pub async fn apply_score_delta(
        &self,
        match_id: Uuid,
        is_home: bool,
        delta: i32,
    ) -> Result<u64, sqlx::Error> {
        let sql = if is_home {
            r#"
            UPDATE matches
            SET score_home = score_home + $2, status = 'live', updated_at = NOW()
            WHERE id = $1
            "#
        } else {
            r#"
            UPDATE matches
            SET score_away = score_away + $2, status = 'live', updated_at = NOW()
            WHERE id = $1
            "#
        };
        let result = sqlx::query(sql)
            .bind(match_id)
            .bind(delta)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn create_event(
        &self,
        match_id: Uuid,
        input: &EventInput,
    ) -> Result<MatchEvent, sqlx::Error> {
        sqlx::query_as::<_, MatchEvent>(
            r#"
            INSERT INTO match_events (id, match_id, event_type, minute, quarter, value, player_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
            RETURNING id, match_id, event_type, minute, quarter, value, player_id, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(match_id)
        .bind(input.event_type)
        .bind(input.minute)
        .bind(input.quarter)
        .bind(input.value)
        .bind(input.player_id)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn events_for_match(&self, match_id: Uuid) -> Result<Vec<MatchEvent>, sqlx::Error> {
        sqlx::query_as::<_, MatchEvent>(
            r#"
            SELECT id, match_id, event_type, minute, quarter, value, player_id, created_at
            FROM match_events
            WHERE match_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(match_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_match_with_events(
        &self,
        match_id: Uuid,
    ) -> Result<Option<MatchWithEvents>, sqlx::Error> {
        let info = match self.find_match_by_id(match_id).await? {
            Some(info) => info,
            None => return Ok(None),
        };
        let events = self.events_for_match(match_id).await?;
        Ok(Some(MatchWithEvents { info, events }))
    }
}
