use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::league_queries;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::league::{CreateLeagueRequest, League, UpdateLeagueRequest};

#[tracing::instrument(
    name = "Create league",
    skip(request, pool, claims),
    fields(
        league_name = %request.name,
        created_by = %claims.username
    )
)]
pub async fn create_league(
    request: web::Json<CreateLeagueRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    if request.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::<League>::error("League name cannot be empty")));
    }

    match league_queries::create_league(pool.get_ref(), &request).await {
        Ok(league) => Ok(HttpResponse::Created().json(ApiResponse::success("League created", league))),
        Err(e) => {
            tracing::error!("Failed to create league: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<League>::error("Failed to create league")))
        }
    }
}

pub async fn list_leagues(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match league_queries::list_leagues(pool.get_ref()).await {
        Ok(leagues) => Ok(HttpResponse::Ok().json(ApiResponse::success("Leagues", leagues))),
        Err(e) => {
            tracing::error!("Failed to list leagues: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<Vec<League>>::error("Failed to list leagues")))
        }
    }
}

pub async fn get_league(league_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match league_queries::get_league_by_id(pool.get_ref(), league_id).await {
        Ok(Some(league)) => Ok(HttpResponse::Ok().json(ApiResponse::success("League", league))),
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::<League>::error("League not found")))
        }
        Err(e) => {
            tracing::error!("Failed to fetch league {}: {}", league_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<League>::error("Failed to fetch league")))
        }
    }
}

pub async fn update_league(
    league_id: Uuid,
    request: web::Json<UpdateLeagueRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    if let Some(name) = &request.name {
        if name.trim().is_empty() {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::<League>::error("League name cannot be empty")));
        }
    }

    match league_queries::update_league(pool.get_ref(), league_id, &request).await {
        Ok(Some(league)) => Ok(HttpResponse::Ok().json(ApiResponse::success("League updated", league))),
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::<League>::error("League not found")))
        }
        Err(e) => {
            tracing::error!("Failed to update league {}: {}", league_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<League>::error("Failed to update league")))
        }
    }
}

pub async fn delete_league(league_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match league_queries::delete_league(pool.get_ref(), league_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::<League>::success_message("League deleted"))),
        Ok(false) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::<League>::error("League not found")))
        }
        Err(e) => {
            tracing::error!("Failed to delete league {}: {}", league_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<League>::error("Failed to delete league")))
        }
    }
}
