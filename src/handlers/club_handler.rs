use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::club_queries;
use crate::middleware::auth::Claims;
use crate::models::club::{Club, ClubListQuery, CreateClubRequest, UpdateClubRequest};
use crate::models::common::ApiResponse;

#[tracing::instrument(
    name = "Create club",
    skip(request, pool, claims),
    fields(
        club_name = %request.name,
        created_by = %claims.username
    )
)]
pub async fn create_club(
    request: web::Json<CreateClubRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    if request.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::<Club>::error("Club name cannot be empty")));
    }

    match club_queries::create_club(pool.get_ref(), &request).await {
        Ok(club) => Ok(HttpResponse::Created().json(ApiResponse::success("Club created", club))),
        Err(e) => match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::<Club>::error("Referenced league does not exist")))
            }
            _ => {
                tracing::error!("Failed to create club: {}", e);
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::<Club>::error("Failed to create club")))
            }
        },
    }
}

pub async fn list_clubs(
    query: web::Query<ClubListQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    match club_queries::list_clubs(pool.get_ref(), query.league_id).await {
        Ok(clubs) => Ok(HttpResponse::Ok().json(ApiResponse::success("Clubs", clubs))),
        Err(e) => {
            tracing::error!("Failed to list clubs: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<Vec<Club>>::error("Failed to list clubs")))
        }
    }
}

pub async fn get_club(club_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match club_queries::get_club_by_id(pool.get_ref(), club_id).await {
        Ok(Some(club)) => Ok(HttpResponse::Ok().json(ApiResponse::success("Club", club))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::<Club>::error("Club not found"))),
        Err(e) => {
            tracing::error!("Failed to fetch club {}: {}", club_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<Club>::error("Failed to fetch club")))
        }
    }
}

pub async fn update_club(
    club_id: Uuid,
    request: web::Json<UpdateClubRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    if let Some(name) = &request.name {
        if name.trim().is_empty() {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::<Club>::error("Club name cannot be empty")));
        }
    }

    match club_queries::update_club(pool.get_ref(), club_id, &request).await {
        Ok(Some(club)) => Ok(HttpResponse::Ok().json(ApiResponse::success("Club updated", club))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::<Club>::error("Club not found"))),
        Err(e) => match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::<Club>::error("Referenced league does not exist")))
            }
            _ => {
                tracing::error!("Failed to update club {}: {}", club_id, e);
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::<Club>::error("Failed to update club")))
            }
        },
    }
}

pub async fn delete_club(club_id: Uuid, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match club_queries::delete_club(pool.get_ref(), club_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::<Club>::success_message("Club deleted"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::<Club>::error("Club not found"))),
        Err(e) => match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                Ok(HttpResponse::Conflict()
                    .json(ApiResponse::<Club>::error("Club is referenced by existing matches")))
            }
            _ => {
                tracing::error!("Failed to delete club {}: {}", club_id, e);
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::<Club>::error("Failed to delete club")))
            }
        },
    }
}
