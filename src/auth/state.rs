//! Short-lived OAuth `state` values.
//!
//! A state is issued when the browser starts a login and must come back,
//! once, with the authorization code. Entries expire after [`STATE_TTL`].

use std::time::{Duration, Instant};

use dashmap::DashMap;
use uuid::Uuid;

pub const STATE_TTL: Duration = Duration::from_secs(10 * 60);

/// Most states held at once; the oldest is evicted past this.
pub const MAX_PENDING_STATES: usize = 10_000;

#[derive(Debug)]
pub struct OAuthStateStore {
    issued: DashMap<String, Instant>,
    ttl: Duration,
    capacity: usize,
}

impl OAuthStateStore {
    pub fn new() -> Self {
        Self::with_limits(STATE_TTL, MAX_PENDING_STATES)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self::with_limits(ttl, MAX_PENDING_STATES)
    }

    pub fn with_limits(ttl: Duration, capacity: usize) -> Self {
        Self {
            issued: DashMap::new(),
            ttl,
            capacity: capacity.max(1),
        }
    }

    /// Issue a fresh random state, forgetting expired ones and, when full,
    /// the oldest pending one.
    pub fn issue(&self) -> String {
        let now = Instant::now();
        self.issued.retain(|_, issued_at| now.duration_since(*issued_at) < self.ttl);

        while self.issued.len() >= self.capacity {
            let oldest = self
                .issued
                .iter()
                .min_by_key(|entry| *entry.value())
                .map(|entry| entry.key().clone());
            match oldest {
                Some(key) => {
                    self.issued.remove(&key);
                }
                None => break,
            }
        }

        let state = Uuid::new_v4().simple().to_string();
        self.issued.insert(state.clone(), now);
        state
    }

    /// Consume `state`; true only for a known, unexpired, unused value.
    pub fn consume(&self, state: &str) -> bool {
        match self.issued.remove(state) {
            Some((_, issued_at)) => issued_at.elapsed() < self.ttl,
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }
}

impl Default for OAuthStateStore {
    fn default() -> Self {
        Self::new()
    }
}
