use actix_web::{delete, get, post, put, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::league_handler;
use crate::middleware::auth::Claims;
use crate::models::league::{CreateLeagueRequest, UpdateLeagueRequest};

#[post("")]
async fn create_league(
    request: web::Json<CreateLeagueRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    league_handler::create_league(request, pool, claims).await
}

#[get("")]
async fn list_leagues(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    league_handler::list_leagues(pool).await
}

#[get("/{league_id}")]
async fn get_league(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    league_handler::get_league(path.into_inner(), pool).await
}

#[put("/{league_id}")]
async fn update_league(
    path: web::Path<Uuid>,
    request: web::Json<UpdateLeagueRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    league_handler::update_league(path.into_inner(), request, pool).await
}

#[delete("/{league_id}")]
async fn delete_league(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    league_handler::delete_league(path.into_inner(), pool).await
}
