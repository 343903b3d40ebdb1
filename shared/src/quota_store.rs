use std::collections::HashMap;

use serde::Deserialize;

use crate::constants::QUOTA_STORAGE_KEY;
use crate::error::StorageError;
use crate::prize::{PrizeId, QuotaState};

/// Synchronous string key-value storage, shaped after the browser's `Storage`.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage. Used in tests and when the browser refuses localStorage.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose writes always fail, like a full or disabled localStorage.
    pub fn read_only() -> Self {
        Self {
            items: HashMap::new(),
            read_only: true,
        }
    }

    pub fn with_item(mut self, key: &str, value: &str) -> Self {
        self.items.insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Write(format!("{} is read-only", key)));
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// Stored payloads may predate a prize or be hand-edited; absent keys fall back to defaults.
#[derive(Debug, Deserialize)]
struct StoredQuotas {
    p1: Option<u32>,
    p2: Option<u32>,
    p3: Option<u32>,
}

/// Best-effort persistence for the prize counters.
pub struct QuotaStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    defaults: QuotaState,
}

impl<S: KeyValueStorage> QuotaStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_defaults(storage, QUOTA_STORAGE_KEY, QuotaState::default())
    }

    pub fn with_defaults(storage: S, key: &str, defaults: QuotaState) -> Self {
        Self {
            storage,
            key: key.to_string(),
            defaults,
        }
    }

    pub fn defaults(&self) -> QuotaState {
        self.defaults
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Reads the persisted counters. Missing, unreadable or malformed data
    /// yields the defaults; this never fails.
    pub fn load(&self) -> QuotaState {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("No stored quotas under {}, using defaults", self.key);
                return self.defaults;
            }
            Err(e) => {
                log::warn!("Failed to read stored quotas: {}", e);
                return self.defaults;
            }
        };

        let stored = match serde_json::from_str::<StoredQuotas>(&raw) {
            Ok(stored) => stored,
            Err(e) => {
                log::warn!("Discarding corrupt quota payload {:?}: {}", raw, e);
                return self.defaults;
            }
        };

        let merged = QuotaState {
            first: stored.p1.unwrap_or(self.defaults.first),
            second: stored.p2.unwrap_or(self.defaults.second),
            third: stored.p3.unwrap_or(self.defaults.third),
        };
        let clamped = merged.clamped_to(&self.defaults);
        if clamped != merged {
            log::warn!("Stored quotas {:?} exceed configured limits, clamped to {:?}", merged, clamped);
        }
        clamped
    }

    /// Persists the full state, overwriting whatever was stored. Write failures
    /// are logged and dropped; the caller's in-memory state stays authoritative.
    pub fn save(&mut self, state: &QuotaState) {
        let payload = match serde_json::to_string(state) {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("Failed to encode quotas: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set_item(&self.key, &payload) {
            log::warn!("Failed to persist quotas: {}", e);
        }
    }

    pub fn award(&self, state: QuotaState, prize: PrizeId) -> (QuotaState, bool) {
        state.award(prize)
    }

    pub fn reset(&self) -> QuotaState {
        self.defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(raw: &str) -> QuotaStore<MemoryStorage> {
        QuotaStore::new(MemoryStorage::new().with_item(QUOTA_STORAGE_KEY, raw))
    }

    #[test]
    fn test_load_absent_uses_defaults() {
        let store = QuotaStore::new(MemoryStorage::new());
        assert_eq!(store.load(), QuotaState::uniform(1));
    }

    #[test]
    fn test_load_corrupt_uses_defaults() {
        for raw in ["", "not json", "true", "42", r#"{"p1":-1}"#, r#"{"p1":"x"}"#, r#"{"p1":0.5}"#, "null"] {
            assert_eq!(store_with(raw).load(), QuotaState::uniform(1), "payload {:?}", raw);
        }
    }

    #[test]
    fn test_load_merges_partial_payload() {
        let store = store_with(r#"{"p1":0}"#);
        assert_eq!(store.load(), QuotaState { first: 0, second: 1, third: 1 });
    }

    #[test]
    fn test_load_clamps_to_defaults() {
        let store = store_with(r#"{"p1":9,"p2":0,"p3":1}"#);
        assert_eq!(store.load(), QuotaState { first: 1, second: 0, third: 1 });
    }

    #[test]
    fn test_save_then_load() {
        let mut store = QuotaStore::new(MemoryStorage::new());
        let state = QuotaState { first: 0, second: 1, third: 0 };
        store.save(&state);
        assert_eq!(store.storage().raw(QUOTA_STORAGE_KEY), Some(r#"{"p1":0,"p2":1,"p3":0}"#));
        assert_eq!(store.load(), state);
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let mut store = QuotaStore::new(MemoryStorage::read_only());
        store.save(&QuotaState::uniform(0));
        assert_eq!(store.load(), QuotaState::uniform(1));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let store = QuotaStore::with_defaults(MemoryStorage::new(), "k", QuotaState::uniform(2));
        assert_eq!(store.reset(), store.reset());
        assert_eq!(store.reset(), QuotaState::uniform(2));
    }

    #[test]
    fn test_award_through_store() {
        let store = QuotaStore::new(MemoryStorage::new());
        let (state, granted) = store.award(QuotaState::default(), PrizeId::First);
        assert!(granted);
        let (again, granted) = store.award(state, PrizeId::First);
        assert!(!granted);
        assert_eq!(again, state);
    }
}
