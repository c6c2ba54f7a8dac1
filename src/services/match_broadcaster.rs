use std::sync::Arc;

use redis::AsyncCommands;
use uuid::Uuid;

use crate::models::live_match::LiveMatchEvent;

#[derive(Debug, thiserror::Error)]
pub enum BroadcastError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),
    #[error("failed to encode event payload: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Pushes live match events to every connection currently subscribed to a
/// match room. A room is the Redis pub/sub channel `match:<id>`; delivery
/// is fire-and-forget with no acknowledgment, retry, or replay, so a
/// connection that joins after a broadcast never sees it.
///
/// Constructed once at process start and handed out by handle to every
/// component that emits.
#[derive(Clone)]
pub struct MatchBroadcaster {
    redis_client: Arc<redis::Client>,
}

impl MatchBroadcaster {
    pub fn new(redis_client: Arc<redis::Client>) -> Self {
        Self { redis_client }
    }

    /// Channel name backing the room for a match.
    pub fn room_channel(match_id: Uuid) -> String {
        format!("match:{}", match_id)
    }

    pub async fn broadcast(
        &self,
        match_id: Uuid,
        event: &LiveMatchEvent,
    ) -> Result<(), BroadcastError> {
        let payload = serde_json::to_string(event)?;
        let mut conn = self.redis_client.get_async_connection().await?;

        let channel = Self::room_channel(match_id);
        let receivers: i32 = conn.publish(&channel, payload).await?;
        tracing::debug!(
            "Broadcast {} to {} subscribers on {}",
            event.name(),
            receivers,
            channel
        );

        Ok(())
    }
}
