use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::match_queries::MatchQueries;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::match_event::MatchEvent;
use crate::models::matches::{
    CreateMatchRequest, Match, MatchListQuery, MatchWithEvents, UpdateMatchRequest,
};

#[tracing::instrument(
    name = "Create match",
    skip(request, pool, claims),
    fields(
        sport = %request.sport.as_str(),
        created_by = %claims.username
    )
)]
pub async fn create_match(
    request: web::Json<CreateMatchRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    if request.home_club_id == request.away_club_id {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::<Match>::error("A club cannot play against itself")));
    }

    let queries = MatchQueries::new(pool.get_ref().clone());
    match queries.create_match(&request).await {
        Ok(match_row) => {
            Ok(HttpResponse::Created().json(ApiResponse::success("Match created", match_row)))
        }
        Err(e) => match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::<Match>::error("Referenced club or league does not exist")))
            }
            _ => {
                tracing::error!("Failed to create match: {}", e);
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::<Match>::error("Failed to create match")))
            }
        },
    }
}

pub async fn list_matches(
    query: web::Query<MatchListQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let queries = MatchQueries::new(pool.get_ref().clone());
    match queries.list_matches(query.league_id, query.status).await {
        Ok(matches) => Ok(HttpResponse::Ok().json(ApiResponse::success("Matches", matches))),
        Err(e) => {
            tracing::error!("Failed to list matches: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<Vec<Match>>::error("Failed to list matches")))
        }
    }
}

/// Full match snapshot including its event log, the same shape the live
/// channel broadcasts.
pub async fn get_match(match_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let queries = MatchQueries::new(pool.get_ref().clone());
    match queries.find_match_with_events(match_id).await {
        Ok(Some(snapshot)) => Ok(HttpResponse::Ok().json(ApiResponse::success("Match", snapshot))),
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::<MatchWithEvents>::error("Match not found")))
        }
        Err(e) => {
            tracing::error!("Failed to fetch match {}: {}", match_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<MatchWithEvents>::error("Failed to fetch match")))
        }
    }
}

pub async fn update_match(
    match_id: Uuid,
    request: web::Json<UpdateMatchRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    if let Err(e) = request.validate() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::<Match>::error(e)));
    }

    let queries = MatchQueries::new(pool.get_ref().clone());
    match queries.update_match(match_id, &request).await {
        Ok(Some(match_row)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success("Match updated", match_row)))
        }
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::<Match>::error("Match not found")))
        }
        Err(e) => match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::<Match>::error("Referenced league does not exist")))
            }
            _ => {
                tracing::error!("Failed to update match {}: {}", match_id, e);
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::<Match>::error("Failed to update match")))
            }
        },
    }
}

pub async fn delete_match(match_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let queries = MatchQueries::new(pool.get_ref().clone());
    match queries.delete_match(match_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::<Match>::success_message("Match deleted")))
        }
        Ok(false) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::<Match>::error("Match not found")))
        }
        Err(e) => {
            tracing::error!("Failed to delete match {}: {}", match_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<Match>::error("Failed to delete match")))
        }
    }
}

pub async fn get_match_events(match_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let queries = MatchQueries::new(pool.get_ref().clone());

    match queries.find_match_by_id(match_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound()
                .json(ApiResponse::<Vec<MatchEvent>>::error("Match not found")))
        }
        Err(e) => {
            tracing::error!("Failed to fetch match {}: {}", match_id, e);
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<Vec<MatchEvent>>::error("Failed to fetch match")));
        }
    }

    match queries.events_for_match(match_id).await {
        Ok(events) => Ok(HttpResponse::Ok().json(ApiResponse::success("Match events", events))),
        Err(e) => {
            tracing::error!("Failed to fetch events for match {}: {}", match_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<Vec<MatchEvent>>::error("Failed to fetch match events")))
        }
    }
}
