pub mod club;
pub mod common;
pub mod league;
pub mod live_match;
pub mod match_event;
pub mod matches;
pub mod user;
