use sqlx::PgPool;
use uuid::Uuid;

use crate::models::club::{Club, CreateClubRequest, UpdateClubRequest};

pub async fn create_club(
    pool: &PgPool,
    request: &CreateClubRequest,
) -> Result<Club, sqlx::Error> {
    sqlx::query_as::<_, Club>(
        r#"
        INSERT INTO clubs (id, name, sport, league_id, location, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
        RETURNING id, name, sport, league_id, location, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(request.name.trim())
    .bind(request.sport)
    .bind(request.league_id)
    .bind(request.location.as_deref())
    .fetch_one(pool)
    .await
}

pub async fn get_club_by_id(pool: &PgPool, club_id: Uuid) -> Result<Option<Club>, sqlx::Error> {
    sqlx::query_as::<_, Club>(
        r#"
        SELECT id, name, sport, league_id, location, created_at, updated_at
        FROM clubs
        WHERE id = $1
        "#,
    )
    .bind(club_id)
    .fetch_optional(pool)
    .await
}

pub async fn list_clubs(
    pool: &PgPool,
    league_id: Option<Uuid>,
) -> Result<Vec<Club>, sqlx::Error> {
    sqlx::query_as::<_, Club>(
        r#"
        SELECT id, name, sport, league_id, location, created_at, updated_at
        FROM clubs
        WHERE ($1::uuid IS NULL OR league_id = $1)
        ORDER BY name
        "#,
    )
    .bind(league_id)
    .fetch_all(pool)
    .await
}

pub async fn update_club(
    pool: &PgPool,
    club_id: Uuid,
    request: &UpdateClubRequest,
) -> Result<Option<Club>, sqlx::Error> {
    sqlx::query_as::<_, Club>(
        r#"
        UPDATE clubs
        SET name = COALESCE($2, name),
            sport = COALESCE($3, sport),
            league_id = COALESCE($4, league_id),
            location = COALESCE($5, location),
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, name, sport, league_id, location, created_at, updated_at
        "#,
    )
    .bind(club_id)
    .bind(request.name.as_deref())
    .bind(request.sport)
    .bind(request.league_id)
    .bind(request.location.as_deref())
    .fetch_optional(pool)
    .await
}

pub async fn delete_club(pool: &PgPool, club_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM clubs WHERE id = $1")
        .bind(club_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
