use actix_web::web;

pub mod auth;
pub mod backend_health;
pub mod clubs;
pub mod leagues;
pub mod matches;
pub mod registration;
pub mod websocket;

use crate::middleware::auth::AuthMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(registration::register)
        .service(backend_health::backend_health)
        .service(auth::login);

    // League routes (require authentication)
    cfg.service(
        web::scope("/leagues")
            .wrap(AuthMiddleware)
            .service(leagues::create_league)
            .service(leagues::list_leagues)
            .service(leagues::get_league)
            .service(leagues::update_league)
            .service(leagues::delete_league)
    );
    // Club routes (require authentication)
    cfg.service(
        web::scope("/clubs")
            .wrap(AuthMiddleware)
            .service(clubs::create_club)
            .service(clubs::list_clubs)
            .service(clubs::get_club)
            .service(clubs::update_club)
            .service(clubs::delete_club)
    );
    // Match routes (require authentication)
    cfg.service(
        web::scope("/matches")
            .wrap(AuthMiddleware)
            .service(matches::create_match)
            .service(matches::list_matches)
            .service(matches::get_match)
            .service(matches::update_match)
            .service(matches::delete_match)
            .service(matches::get_match_events)
    );
    // WebSocket route (soft authentication handled in route)
    cfg.service(
        web::resource("/live-ws")
            .route(web::get().to(websocket::live_ws_route))
    );
}
