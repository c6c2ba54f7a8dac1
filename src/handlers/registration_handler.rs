use actix_web::{web, HttpResponse};
use secrecy::ExposeSecret;
use sqlx::PgPool;

use crate::db::user_queries;
use crate::models::common::ApiResponse;
use crate::models::user::RegistrationRequest;
use crate::utils::password::hash_password;

#[tracing::instrument(
    name = "Adding a new user",
    // Don't show arguments
    skip(user_form, pool),
    fields(
        username = %user_form.username,
        email = %user_form
    )
)]
pub async fn register_user(
    user_form: web::Json<RegistrationRequest>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    if user_form.username.trim().is_empty() || user_form.email.trim().is_empty() {
        return HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("Username and email are required"));
    }

    let password_hash = hash_password(user_form.password.expose_secret());
    match user_queries::create_user(
        pool.get_ref(),
        &user_form.username,
        &user_form.email,
        &password_hash,
    )
    .await
    {
        Ok(_) => HttpResponse::Ok().finish(),
        Err(e) => match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                HttpResponse::BadRequest()
                    .json(ApiResponse::<()>::error("Username or email already taken"))
            }
            _ => {
                tracing::error!("Failed to insert user: {:?}", e);
                HttpResponse::InternalServerError().finish()
            }
        },
    }
}
