use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::db::match_queries::MatchQueries;
use crate::models::live_match::{EventInput, LiveMatchEvent, ScoreUpdate};
use crate::models::match_event::MatchEvent;
use crate::models::matches::MatchWithEvents;
use crate::services::match_broadcaster::{BroadcastError, MatchBroadcaster};

/// Errors surfaced by the live ingestion path. The WebSocket gateway
/// drops all of them without responding to the submitting peer; REST
/// callers map them to status codes instead.
#[derive(Debug, thiserror::Error)]
pub enum LiveMatchError {
    #[error("invalid live command: {0}")]
    Validation(String),
    #[error("match {0} not found")]
    MatchNotFound(Uuid),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Broadcast(#[from] BroadcastError),
}

/// Validates incoming score and event submissions, persists them, derives
/// score deltas from event types, and fans the resulting state out to the
/// match room.
///
/// The score is maintained incrementally via the store's atomic increment
/// rather than recomputed from the event log, so concurrent submissions
/// for the same match cannot lose updates. No transaction spans the
/// persist-refetch-broadcast sequence; a failure after the increment
/// leaves the score mutated with that broadcast skipped, and the next
/// successful operation ships fresh state.
pub struct LiveMatchService {
    queries: MatchQueries,
    broadcaster: MatchBroadcaster,
}

impl LiveMatchService {
    pub fn new(pool: PgPool, broadcaster: MatchBroadcaster) -> Self {
        Self {
            queries: MatchQueries::new(pool),
            broadcaster,
        }
    }

    /// Overwrite a match's score (and optionally its status), then push
    /// the fresh snapshot to the match room.
    pub async fn update_score(
        &self,
        update: ScoreUpdate,
    ) -> Result<MatchWithEvents, LiveMatchError> {
        let match_id = update.validate().map_err(LiveMatchError::Validation)?;

        let affected = self
            .queries
            .update_score(match_id, update.score_home, update.score_away, update.status)
            .await?;
        if affected == 0 {
            return Err(LiveMatchError::MatchNotFound(match_id));
        }

        let snapshot = self.refetch(match_id).await?;
        self.broadcaster
            .broadcast(
                match_id,
                &LiveMatchEvent::MatchUpdate {
                    snapshot: snapshot.clone(),
                },
            )
            .await?;

        info!(
            "Score updated for match {}: {} - {}",
            match_id, snapshot.info.score_home, snapshot.info.score_away
        );
        Ok(snapshot)
    }

    /// Record a match event, apply its score delta, and push the updated
    /// snapshot followed by the new event to the match room.
    pub async fn add_event(&self, input: EventInput) -> Result<MatchEvent, LiveMatchError> {
        let match_id = input.validate().map_err(LiveMatchError::Validation)?;

        let event = self
            .queries
            .create_event(match_id, &input)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                    LiveMatchError::MatchNotFound(match_id)
                }
                _ => LiveMatchError::Database(e),
            })?;

        let delta = input.event_type.score_delta();
        if delta > 0 {
            // A scoring event with no side recorded leaves the score
            // untouched; the event row alone is kept.
            if let Some(is_home) = input.is_home {
                // Forces status to live even on a finished match: a late
                // event reopens the match rather than being rejected.
                let affected = self
                    .queries
                    .apply_score_delta(match_id, is_home, delta)
                    .await?;
                if affected == 0 {
                    return Err(LiveMatchError::MatchNotFound(match_id));
                }
            }
        }

        let snapshot = self.refetch(match_id).await?;
        self.broadcaster
            .broadcast(match_id, &LiveMatchEvent::MatchUpdate { snapshot })
            .await?;
        self.broadcaster
            .broadcast(
                match_id,
                &LiveMatchEvent::EventNew {
                    event: event.clone(),
                },
            )
            .await?;

        debug!("Recorded {:?} event for match {}", input.event_type, match_id);
        Ok(event)
    }

    async fn refetch(&self, match_id: Uuid) -> Result<MatchWithEvents, LiveMatchError> {
        match self.queries.find_match_with_events(match_id).await? {
            Some(snapshot) => Ok(snapshot),
            None => Err(LiveMatchError::MatchNotFound(match_id)),
        }
    }
}
