//! Per-browser results: the last generated ideas and the last report.
//!
//! A session is keyed by a random id carried in a cookie without an expiry,
//! so the browser drops it when it closes. The store keeps at most
//! [`MAX_SESSIONS`] entries and evicts the least recently used one.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use venture_core::{StartupIdea, ValidationReport};

pub const COOKIE_NAME: &str = "venture_session";

const MAX_SESSIONS: usize = 256;
const ID_BYTES: usize = 16;

/// What one browser has produced so far. Each slot is replaced only by a
/// successful request of its own kind.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub ideas: Vec<StartupIdea>,
    pub report: Option<ValidationReport>,
}

struct Entry {
    session: Session,
    last_seen: u64,
}

#[derive(Default)]
struct Entries {
    by_id: HashMap<String, Entry>,
    clock: u64,
}

impl Entries {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }
}

#[derive(Default)]
pub struct SessionStore {
    entries: Mutex<Entries>,
}

impl SessionStore {
    /// Snapshot of the session behind `id`; empty for an unknown id.
    pub fn get(&self, id: &str) -> Session {
        let mut entries = self.lock();
        let now = entries.tick();
        entries.by_id.get_mut(id).map_or_else(Session::default, |entry| {
            entry.last_seen = now;
            entry.session.clone()
        })
    }

    /// Apply `change` to the session behind `id`, creating it if needed.
    pub fn update(&self, id: &str, change: impl FnOnce(&mut Session)) {
        let mut entries = self.lock();
        let now = entries.tick();
        if !entries.by_id.contains_key(id) && entries.by_id.len() >= MAX_SESSIONS {
            let oldest = entries
                .by_id
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(key, _)| key.clone());
            if let Some(oldest) = oldest {
                tracing::debug!("evicting least recently used session");
                entries.by_id.remove(&oldest);
            }
        }
        let entry = entries.by_id.entry(id.to_string()).or_insert_with(|| Entry {
            session: Session::default(),
            last_seen: now,
        });
        entry.last_seen = now;
        change(&mut entry.session);
    }

    fn lock(&self) -> MutexGuard<'_, Entries> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A fresh random session id, hex encoded.
///
/// # Errors
///
/// Returns the `getrandom` error if the OS random source is unavailable.
pub fn new_id() -> Result<String, getrandom::Error> {
    let mut bytes = [0u8; ID_BYTES];
    getrandom::fill(&mut bytes)?;
    Ok(bytes.iter().map(|b| format!("{b:02x}")).collect())
}

/// Whether `id` has the shape [`new_id`] produces.
pub fn is_valid_id(id: &str) -> bool {
    id.len() == ID_BYTES * 2 && id.bytes().all(|b| b.is_ascii_hexdigit())
}

/// The session id from a `Cookie` request header, if present and well formed.
pub fn id_from_cookie(header: &str) -> Option<&str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == COOKIE_NAME)
        .map(|(_, value)| value)
        .filter(|value| is_valid_id(value))
}

/// `Set-Cookie` value handing `id` to the browser.
pub fn set_cookie(id: &str) -> String {
    format!("{COOKIE_NAME}={id}; Path=/; HttpOnly; SameSite=Lax")
}
