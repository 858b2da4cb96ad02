// src/session/store.rs

use crate::session::state::QuerySession;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

pub const SESSION_COOKIE: &str = "session";

const TOKEN_BYTES: usize = 32;
// Browser sessions are ephemeral; an hour of inactivity ends one.
const IDLE_TTL_SECS: i64 = 60 * 60;

struct Entry {
    session: QuerySession,
    last_seen: DateTime<Utc>,
}

/// In-memory registry of browser sessions, keyed by the SHA-256 hash of the
/// raw cookie token (the raw token never sits in the map). All access goes
/// through `with_session`, so each session's state is mutated by one request
/// at a time.
pub struct SessionStore {
    inner: Mutex<HashMap<[u8; 32], Entry>>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore {
            inner: Mutex::new(HashMap::new()),
        }
    }

    /// Creates a fresh session and returns the raw token for the cookie.
    pub fn create(&self, now: DateTime<Utc>) -> String {
        let token = generate_token();

        let mut map = self.lock();
        prune(&mut map, now);
        map.insert(
            hash_token(&token),
            Entry {
                session: QuerySession::default(),
                last_seen: now,
            },
        );

        token
    }

    /// Whether a raw token refers to a live (non-expired) session.
    pub fn contains(&self, raw_token: &str, now: DateTime<Utc>) -> bool {
        let mut map = self.lock();
        prune(&mut map, now);
        map.contains_key(&hash_token(raw_token))
    }

    /// Runs `f` against the session for `raw_token`, refreshing its idle
    /// timer. Returns `None` for unknown or expired tokens.
    pub fn with_session<F, T>(&self, raw_token: &str, now: DateTime<Utc>, f: F) -> Option<T>
    where
        F: FnOnce(&mut QuerySession) -> T,
    {
        let mut map = self.lock();
        prune(&mut map, now);

        let entry = map.get_mut(&hash_token(raw_token))?;
        entry.last_seen = now;
        Some(f(&mut entry.session))
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<[u8; 32], Entry>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn prune(map: &mut HashMap<[u8; 32], Entry>, now: DateTime<Utc>) {
    map.retain(|_, entry| now - entry.last_seen <= Duration::seconds(IDLE_TTL_SECS));
}

/// Generate a secure random URL-safe token using the OS RNG.
/// 32 bytes -> ~43 chars, safe for cookies without further encoding.
pub fn generate_token() -> String {
    let mut buf = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf)
}

/// Hash a token with SHA-256; the hash is the map key.
pub fn hash_token(token: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    let out = hasher.finalize();
    let mut arr = [0u8; 32];
    arr.copy_from_slice(&out);
    arr
}
