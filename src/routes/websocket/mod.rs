mod auth;
mod connection;
mod messages;
mod rooms;

use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::jwt::JwtSettings;
use crate::middleware::auth::Claims;
use crate::services::MatchBroadcaster;

pub use auth::decode_token;
pub use connection::{LiveMatchConnection, Viewer};
pub use messages::TokenQuery;

/// Live match WebSocket route. Credentials are soft-verified: a missing
/// or invalid token downgrades the connection to anonymous instead of
/// rejecting it (hardening deferred).
pub async fn live_ws_route(
    req: HttpRequest,
    stream: web::Payload,
    query: Option<web::Query<TokenQuery>>,
    claims: Option<web::ReqData<Claims>>,
    pool: web::Data<PgPool>,
    redis: web::Data<Arc<redis::Client>>,
    broadcaster: web::Data<MatchBroadcaster>,
    jwt_settings: web::Data<JwtSettings>,
) -> Result<HttpResponse, Error> {
    tracing::info!("New live match WebSocket connection request");

    let viewer = if let Some(claims) = claims {
        viewer_from_claims(&claims.sub, &claims.username)
    } else if let Some(query) = query {
        match decode_token(&query.token, &jwt_settings) {
            Ok(token_claims) => viewer_from_claims(&token_claims.sub, &token_claims.username),
            Err(e) => {
                tracing::warn!(
                    "Invalid token on live WebSocket handshake, continuing anonymously: {}",
                    e
                );
                None
            }
        }
    } else {
        tracing::warn!("Unauthenticated live WebSocket connection accepted");
        None
    };

    let resp = ws::start(
        LiveMatchConnection::new(viewer, pool, redis, broadcaster),
        &req,
        stream,
    )?;

    Ok(resp)
}

fn viewer_from_claims(sub: &str, username: &str) -> Option<Viewer> {
    match Uuid::parse_str(sub) {
        Ok(user_id) => Some(Viewer {
            user_id,
            username: username.to_string(),
        }),
        Err(e) => {
            tracing::warn!("Invalid user id in token claims, continuing anonymously: {}", e);
            None
        }
    }
}
