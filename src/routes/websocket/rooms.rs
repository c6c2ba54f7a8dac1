use std::collections::HashSet;

/// Per-connection half of the room registry. The match-to-sessions
/// mapping itself lives in Redis channel subscriptions, which are keyed
/// by connection lifetime; this set makes `join` idempotent and rejects
/// empty match ids so a connection never spawns duplicate listeners.
#[derive(Debug, Default)]
pub struct RoomSubscriptions {
    joined: HashSet<String>,
}

impl RoomSubscriptions {
    pub fn new() -> Self {
        Self {
            joined: HashSet::new(),
        }
    }

    /// Returns true when the connection newly joined the room. Joining a
    /// room twice, or passing an empty id, is a no-op.
    pub fn join(&mut self, match_id: &str) -> bool {
        if match_id.trim().is_empty() {
            return false;
        }
        self.joined.insert(match_id.to_string())
    }

    pub fn contains(&self, match_id: &str) -> bool {
        self.joined.contains(match_id)
    }

    pub fn len(&self) -> usize {
        self.joined.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joined.is_empty()
    }
}
