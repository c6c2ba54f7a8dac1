use actix_web::{delete, get, post, put, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::club_handler;
use crate::middleware::auth::Claims;
use crate::models::club::{ClubListQuery, CreateClubRequest, UpdateClubRequest};

#[post("")]
async fn create_club(
    request: web::Json<CreateClubRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    club_handler::create_club(request, pool, claims).await
}

#[get("")]
async fn list_clubs(
    query: web::Query<ClubListQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    club_handler::list_clubs(query, pool).await
}

#[get("/{club_id}")]
async fn get_club(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    club_handler::get_club(path.into_inner(), pool).await
}

#[put("/{club_id}")]
async fn update_club(
    path: web::Path<Uuid>,
    request: web::Json<UpdateClubRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    club_handler::update_club(path.into_inner(), request, pool).await
}

#[delete("/{club_id}")]
async fn delete_club(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    club_handler::delete_club(path.into_inner(), pool).await
}
