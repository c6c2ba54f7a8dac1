use sqlx::PgPool;
use uuid::Uuid;

use crate::models::league::{CreateLeagueRequest, League, UpdateLeagueRequest};

pub async fn create_league(
    pool: &PgPool,
    request: &CreateLeagueRequest,
) -> Result<League, sqlx::Error> {
    sqlx::query_as::<_, League>(
        r#"
        INSERT INTO leagues (id, name, sport, season, created_at, updated_at)
        VALUES ($1, $2, $3, $4, NOW(), NOW())
        RETURNING id, name, sport, season, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(request.name.trim())
    .bind(request.sport)
    .bind(request.season.as_deref())
    .fetch_one(pool)
    .await
}

pub async fn get_league_by_id(
    pool: &PgPool,
    league_id: Uuid,
) -> Result<Option<League>, sqlx::Error> {
    sqlx::query_as::<_, League>(
        r#"
        SELECT id, name, sport, season, created_at, updated_at
        FROM leagues
        WHERE id = $1
        "#,
    )
    .bind(league_id)
    .fetch_optional(pool)
    .await
}

pub async fn list_leagues(pool: &PgPool) -> Result<Vec<League>, sqlx::Error> {
    sqlx::query_as::<_, League>(
        r#"
        SELECT id, name, sport, season, created_at, updated_at
        FROM leagues
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn update_league(
    pool: &PgPool,
    league_id: Uuid,
    request: &UpdateLeagueRequest,
) -> Result<Option<League>, sqlx::Error> {
    sqlx::query_as::<_, League>(
        r#"
        UPDATE leagues
        SET name = COALESCE($2, name),
            sport = COALESCE($3, sport),
            season = COALESCE($4, season),
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, name, sport, season, created_at, updated_at
        "#,
    )
    .bind(league_id)
    .bind(request.name.as_deref())
    .bind(request.sport)
    .bind(request.season.as_deref())
    .fetch_optional(pool)
    .await
}

pub async fn delete_league(pool: &PgPool, league_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM leagues WHERE id = $1")
        .bind(league_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
