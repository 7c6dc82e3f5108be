//! Keyed session store: opaque cookie key → [`GameSession`].
//!
//! Sessions are created transparently on first contact and dropped by an
//! expiry sweep once idle past the TTL. The map lives behind a `Mutex`;
//! handlers never hold the guard across an await point, so a plain
//! `std::sync::Mutex` is sufficient under the async runtime.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use uuid::Uuid;

use crate::constants::SESSION_TTL_SECS;
use crate::types::GameSession;

pub struct SessionStore {
    ttl: Duration,
    inner: Mutex<HashMap<String, GameSession>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_ttl(Duration::from_secs(SESSION_TTL_SECS))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        SessionStore {
            ttl,
            inner: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve a presented session key to a live one.
    ///
    /// A valid, unexpired key is returned as-is. A missing, unknown, or
    /// expired key yields a fresh default session under a new random key
    /// (`created = true`, so the caller can issue the cookie). Creation also
    /// sweeps out every expired entry.
    pub fn resolve(&self, presented: Option<&str>) -> (String, bool) {
        let mut map = self.inner.lock().unwrap();

        if let Some(key) = presented {
            if let Some(session) = map.get(key) {
                if session.last_seen.elapsed() < self.ttl {
                    return (key.to_string(), false);
                }
            }
        }

        let ttl = self.ttl;
        map.retain(|_, session| session.last_seen.elapsed() < ttl);

        let key = Uuid::new_v4().to_string();
        let mut rng = SmallRng::from_entropy();
        map.insert(key.clone(), GameSession::new(&mut rng));
        (key, true)
    }

    /// Run `f` against the session for `key`, touching its last-seen time.
    ///
    /// If the entry vanished between resolve and update (expiry race), a
    /// fresh default session is inserted first rather than faulting.
    pub fn update<R>(&self, key: &str, f: impl FnOnce(&mut GameSession) -> R) -> R {
        let mut map = self.inner.lock().unwrap();
        let session = map.entry(key.to_string()).or_insert_with(|| {
            let mut rng = SmallRng::from_entropy();
            GameSession::new(&mut rng)
        });
        session.last_seen = Instant::now();
        f(session)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
