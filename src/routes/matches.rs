use actix_web::{delete, get, post, put, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::match_handler;
use crate::middleware::auth::Claims;
use crate::models::matches::{CreateMatchRequest, MatchListQuery, UpdateMatchRequest};

#[post("")]
async fn create_match(
    request: web::Json<CreateMatchRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    match_handler::create_match(request, pool, claims).await
}

#[get("")]
async fn list_matches(
    query: web::Query<MatchListQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    match_handler::list_matches(query, pool).await
}

#[get("/{match_id}")]
async fn get_match(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match_handler::get_match(path.into_inner(), pool).await
}

#[put("/{match_id}")]
async fn update_match(
    path: web::Path<Uuid>,
    request: web::Json<UpdateMatchRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    match_handler::update_match(path.into_inner(), request, pool).await
}

#[delete("/{match_id}")]
async fn delete_match(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match_handler::delete_match(path.into_inner(), pool).await
}

#[get("/{match_id}/events")]
async fn get_match_events(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match_handler::get_match_events(path.into_inner(), pool).await
}
