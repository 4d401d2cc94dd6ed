//! Per-session flags and the orbit epoch.
//!
//! The browser's `sessionStorage` sits behind [`SessionStore`] so the welcome
//! and orbit logic can run on the host against [`MemoryStore`].

use crate::constants::{FLAG_SET, KEY_ORBIT_EPOCH, KEY_SEEN_HOME_REVEAL, KEY_SEEN_WELCOME};
use crate::error::{Error, Result};
use fnv::FnvHashMap;

pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store, used on the host and as a fallback when the browser
/// refuses access to `sessionStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FnvHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionFlags {
    pub seen_welcome: bool,
    pub seen_home_reveal: bool,
}

impl SessionFlags {
    pub fn load(store: &impl SessionStore) -> Self {
        let is_set = |key: &str| store.get(key).as_deref() == Some(FLAG_SET);
        Self {
            seen_welcome: is_set(KEY_SEEN_WELCOME),
            seen_home_reveal: is_set(KEY_SEEN_HOME_REVEAL),
        }
    }
}

pub fn mark_welcome_seen(store: &mut impl SessionStore) -> Result<()> {
    store.set(KEY_SEEN_WELCOME, FLAG_SET)
}

pub fn mark_home_reveal_seen(store: &mut impl SessionStore) -> Result<()> {
    store.set(KEY_SEEN_HOME_REVEAL, FLAG_SET)
}

/// Parse a stored epoch. Zero counts as unset.
pub fn parse_epoch(raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(ms) if ms.is_finite() && ms != 0.0 => Ok(ms),
        _ => Err(Error::InvalidEpoch(raw.to_string())),
    }
}

/// Session-wide start time of the orbit rotation in Unix milliseconds.
///
/// Reuses a valid stored epoch, otherwise records `now_ms`. A failed write
/// still yields `now_ms`; the orbit then restarts on the next load.
pub fn orbit_epoch(store: &mut impl SessionStore, now_ms: f64) -> f64 {
    if let Some(raw) = store.get(KEY_ORBIT_EPOCH) {
        match parse_epoch(&raw) {
            Ok(ms) => return ms,
            Err(e) => log::debug!("[orbit] {}", e),
        }
    }
    if let Err(e) = store.set(KEY_ORBIT_EPOCH, &format!("{}", now_ms.floor())) {
        log::warn!("[orbit] could not persist epoch: {}", e);
    }
    now_ms
}
