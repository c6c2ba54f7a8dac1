use actix::{Actor, ActorContext, AsyncContext, Handler, StreamHandler};
use actix_web::web;
use actix_web_actors::ws;
use futures_util::StreamExt;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::models::live_match::LiveCommand;
use crate::routes::websocket::messages::RoomMessage;
use crate::routes::websocket::rooms::RoomSubscriptions;
use crate::services::{LiveMatchService, MatchBroadcaster};

// How often heartbeat pings are sent
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(30);
// How long before lack of client response causes a timeout
const CLIENT_TIMEOUT: Duration = Duration::from_secs(120);

/// Viewer identity attached to a connection when a valid token was
/// presented on the handshake.
#[derive(Debug, Clone)]
pub struct Viewer {
    pub user_id: Uuid,
    pub username: String,
}

/// WebSocket connection actor for the live match channel. Each connection
/// tracks its own room set; room membership dies with the connection.
pub struct LiveMatchConnection {
    heartbeat: Instant,
    viewer: Option<Viewer>,
    session_id: Uuid,
    rooms: RoomSubscriptions,
    db_pool: web::Data<PgPool>,
    redis: web::Data<Arc<redis::Client>>,
    broadcaster: web::Data<MatchBroadcaster>,
}

impl Actor for LiveMatchConnection {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        tracing::info!(
            "LiveMatchConnection started for {} - session: {}",
            self.viewer_label(),
            self.session_id
        );
        self.heartbeat(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        tracing::info!(
            "LiveMatchConnection stopped for {} - session: {} ({} rooms)",
            self.viewer_label(),
            self.session_id,
            self.rooms.len()
        );
    }
}

impl LiveMatchConnection {
    pub fn new(
        viewer: Option<Viewer>,
        db_pool: web::Data<PgPool>,
        redis: web::Data<Arc<redis::Client>>,
        broadcaster: web::Data<MatchBroadcaster>,
    ) -> Self {
        Self {
            heartbeat: Instant::now(),
            viewer,
            session_id: Uuid::new_v4(),
            rooms: RoomSubscriptions::new(),
            db_pool,
            redis,
            broadcaster,
        }
    }

    fn viewer_label(&self) -> String {
        match &self.viewer {
            Some(viewer) => format!("{} ({})", viewer.username, viewer.user_id),
            None => "anonymous viewer".to_string(),
        }
    }

    fn heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |act, ctx| {
            if Instant::now().duration_since(act.heartbeat) > CLIENT_TIMEOUT {
                tracing::warn!(
                    "Live client heartbeat missed, disconnecting session: {}",
                    act.session_id
                );
                ctx.stop();
                return;
            }
            ctx.ping(b"ping");
        });
    }

    fn handle_command(&mut self, text: &str, ctx: &mut ws::WebsocketContext<Self>) {
        let command = match serde_json::from_str::<LiveCommand>(text) {
            Ok(command) => command,
            Err(e) => {
                // Malformed or unknown commands get no response on the
                // live channel.
                tracing::debug!(
                    "Dropping unparseable live command from session {}: {}",
                    self.session_id,
                    e
                );
                return;
            }
        };

        match command {
            LiveCommand::Subscribe(request) => self.join_room(&request.match_id, ctx),
            LiveCommand::ScoreUpdate(update) => {
                let service = LiveMatchService::new(
                    self.db_pool.get_ref().clone(),
                    self.broadcaster.get_ref().clone(),
                );
                let session_id = self.session_id;
                tokio::spawn(async move {
                    // Drop-on-error keeps the channel fire-and-forget: the
                    // submitting peer gets no failure response.
                    if let Err(e) = service.update_score(update).await {
                        tracing::debug!(
                            "Dropping score-update from session {}: {}",
                            session_id,
                            e
                        );
                    }
                });
            }
            LiveCommand::EventAdd(input) => {
                let service = LiveMatchService::new(
                    self.db_pool.get_ref().clone(),
                    self.broadcaster.get_ref().clone(),
                );
                let session_id = self.session_id;
                tokio::spawn(async move {
                    if let Err(e) = service.add_event(input).await {
                        tracing::debug!(
                            "Dropping event-add from session {}: {}",
                            session_id,
                            e
                        );
                    }
                });
            }
        }
    }

    fn join_room(&mut self, match_id: &str, ctx: &mut ws::WebsocketContext<Self>) {
        if !self.rooms.join(match_id) {
            // Empty id, or already subscribed
            return;
        }
        self.spawn_room_subscription(match_id.to_string(), ctx);
    }

    /// One listener task per joined room: subscribes to the room's Redis
    /// channel and forwards every payload to this actor until the
    /// connection goes away.
    fn spawn_room_subscription(&self, match_id: String, ctx: &mut ws::WebsocketContext<Self>) {
        let addr = ctx.address();
        let session_id = self.session_id;
        let redis_client = self.redis.get_ref().clone();

        tokio::spawn(async move {
            let channel = format!("match:{}", match_id);
            match redis_client.get_async_connection().await {
                Ok(conn) => {
                    let mut pubsub = conn.into_pubsub();
                    if let Err(e) = pubsub.subscribe(&channel).await {
                        tracing::error!(
                            "Failed to subscribe session {} to {}: {}",
                            session_id,
                            channel,
                            e
                        );
                        return;
                    }
                    tracing::info!("Session {} joined room {}", session_id, channel);

                    let mut stream = pubsub.on_message();
                    while let Some(msg) = stream.next().await {
                        if !addr.connected() {
                            break;
                        }
                        match msg.get_payload::<String>() {
                            Ok(payload) => addr.do_send(RoomMessage(payload)),
                            Err(e) => {
                                tracing::error!(
                                    "Failed to read room payload on {} for session {}: {}",
                                    channel,
                                    session_id,
                                    e
                                );
                            }
                        }
                    }
                    tracing::debug!(
                        "Room stream ended for session {} on {}",
                        session_id,
                        channel
                    );
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to open Redis connection for session {} room {}: {}",
                        session_id,
                        channel,
                        e
                    );
                }
            }
        });
    }
}

impl Handler<RoomMessage> for LiveMatchConnection {
    type Result = ();

    fn handle(&mut self, msg: RoomMessage, ctx: &mut Self::Context) {
        ctx.text(msg.0);
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for LiveMatchConnection {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(msg)) => {
                self.heartbeat = Instant::now();
                ctx.pong(&msg);
            }
            Ok(ws::Message::Pong(_)) => {
                self.heartbeat = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                self.heartbeat = Instant::now();
                self.handle_command(&text, ctx);
            }
            Ok(ws::Message::Binary(_)) => {
                tracing::warn!(
                    "Received unexpected binary message from session: {}",
                    self.session_id
                );
            }
            Ok(ws::Message::Close(reason)) => {
                tracing::info!(
                    "Live WebSocket closing for session {}: {:?}",
                    self.session_id,
                    reason
                );
                ctx.close(reason);
                ctx.stop();
            }
            _ => ctx.stop(),
        }
    }
}
