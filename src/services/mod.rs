pub mod live_match_service;
pub mod match_broadcaster;

pub use live_match_service::{LiveMatchError, LiveMatchService};
pub use match_broadcaster::{BroadcastError, MatchBroadcaster};
