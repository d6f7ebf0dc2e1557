//! Registry of live game sessions
//!
//! The map itself is a sharded concurrent map, so inserts, lookups and
//! evictions are safe from any thread. Each entry carries its own mutex; the
//! map guard is always released before that mutex is taken, so a slow
//! operation on one session never blocks another.

use super::session::{GameSession, SessionId};
use crate::error::GameError;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

struct SessionEntry {
    session: Mutex<GameSession>,
    created_at: Instant,
    last_access: Mutex<Instant>,
}

impl SessionEntry {
    fn new(session: GameSession) -> Self {
        let now = Instant::now();
        Self {
            session: Mutex::new(session),
            created_at: now,
            last_access: Mutex::new(now),
        }
    }

    fn touch(&self) {
        *self.last_access.lock() = Instant::now();
    }

    fn idle_for(&self, now: Instant) -> Duration {
        now.saturating_duration_since(*self.last_access.lock())
    }
}

/// Keyed registry of sessions with per-session serialization and idle expiry
pub struct SessionStore {
    sessions: DashMap<SessionId, Arc<SessionEntry>>,
    idle_timeout: Duration,
}

impl SessionStore {
    #[must_use]
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            idle_timeout,
        }
    }

    #[must_use]
    pub const fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    /// Generate a fresh random id, build the session for it and store it
    pub fn create(&self, init: impl FnOnce(SessionId) -> GameSession) -> SessionId {
        let id = loop {
            let candidate = SessionId::generate();
            if !self.sessions.contains_key(&candidate) {
                break candidate;
            }
        };
        self.sessions
            .insert(id, Arc::new(SessionEntry::new(init(id))));
        debug!(session_id = %id, live = self.sessions.len(), "session created");
        id
    }

    fn entry(&self, id: SessionId) -> Result<Arc<SessionEntry>, GameError> {
        // Clone the Arc so the shard guard drops at the end of this statement
        self.sessions
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(GameError::UnknownSession)
    }

    /// Snapshot of a session
    ///
    /// Waits for any in-flight mutation of the same session to finish.
    ///
    /// # Errors
    /// `GameError::UnknownSession` if the id is not live.
    pub fn get(&self, id: SessionId) -> Result<GameSession, GameError> {
        let entry = self.entry(id)?;
        entry.touch();
        let session = entry.session.lock().clone();
        Ok(session)
    }

    /// Run `f` with exclusive access to one session
    ///
    /// At most one closure runs per session id at a time; closures for
    /// different ids run in parallel.
    ///
    /// # Errors
    /// `GameError::UnknownSession` if the id is not live, otherwise whatever
    /// `f` returns.
    pub fn with_lock<R>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut GameSession) -> Result<R, GameError>,
    ) -> Result<R, GameError> {
        let entry = self.entry(id)?;
        entry.touch();
        let mut session = entry.session.lock();
        f(&mut session)
    }

    /// Remove a session; returns whether it was live
    pub fn evict(&self, id: SessionId) -> bool {
        match self.sessions.remove(&id) {
            Some((_, entry)) => {
                debug!(
                    session_id = %id,
                    age_secs = entry.created_at.elapsed().as_secs(),
                    "session evicted"
                );
                true
            }
            None => false,
        }
    }

    /// Evict every session idle for at least the idle timeout
    pub fn sweep_expired(&self) -> usize {
        self.sweep_expired_at(Instant::now())
    }

    /// [`SessionStore::sweep_expired`] against an explicit clock reading
    pub fn sweep_expired_at(&self, now: Instant) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, entry| entry.idle_for(now) < self.idle_timeout);
        let evicted = before.saturating_sub(self.sessions.len());
        if evicted > 0 {
            info!(evicted, live = self.sessions.len(), "expired idle sessions");
        }
        evicted
    }

    #[must_use]
    pub fn contains(&self, id: SessionId) -> bool {
        self.sessions.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
