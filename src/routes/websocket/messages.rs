use actix;
use serde::Deserialize;

/// Message relayed from a Redis room subscription to the WebSocket.
#[derive(actix::Message)]
#[rtype(result = "()")]
pub struct RoomMessage(pub String);

// Query parameter struct for token
#[derive(Deserialize)]
pub struct TokenQuery {
    pub token: String,
}
