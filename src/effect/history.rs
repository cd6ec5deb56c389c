//! src/effect/history.rs
//!
//! Bounded, newest-first log of past configurations, persisted as a JSON
//! array under a single storage key.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::config::EffectConfig;
use crate::store::KvStore;

/// Storage key for the history log.
pub const HISTORY_KEY: &str = "hovercraft-history";

/// Maximum number of retained entries; insertion evicts beyond this.
pub const MAX_ENTRIES: usize = 10;

/// A timestamped snapshot of a past configuration.
///
/// Serializes flat (`{timestamp, speed, scale, type, timing}`), newest
/// entry first in the stored array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: String,
    #[serde(flatten)]
    pub config: EffectConfig,
}

/// Read the stored history. Missing or unparsable data reads as empty.
pub fn load(store: &dyn KvStore) -> Vec<HistoryEntry> {
    let Some(raw) = store.get(HISTORY_KEY) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("discarding unparsable history: {e}");
            Vec::new()
        }
    }
}

/// Prepend a new entry, truncate to capacity, persist, and return the
/// updated sequence.
pub fn record(
    store: &mut dyn KvStore,
    config: &EffectConfig,
    timestamp: String,
) -> Vec<HistoryEntry> {
    let mut entries = load(store);
    entries.insert(
        0,
        HistoryEntry {
            timestamp,
            config: config.clone(),
        },
    );
    entries.truncate(MAX_ENTRIES);

    match serde_json::to_string(&entries) {
        Ok(json) => {
            if let Err(e) = store.set(HISTORY_KEY, &json) {
                warn!("failed to persist history: {e}");
            }
        }
        Err(e) => warn!("failed to serialize history: {e}"),
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemStore;

    fn config(kind: &str, speed: &str) -> EffectConfig {
        EffectConfig {
            speed: speed.into(),
            scale: "1.2".into(),
            kind: kind.into(),
            timing: "ease".into(),
        }
    }

    #[test]
    fn load_from_empty_store_is_empty() {
        let store = MemStore::new();
        assert!(load(&store).is_empty());
    }

    #[test]
    fn load_from_garbage_is_empty() {
        let mut store = MemStore::new();
        store.set(HISTORY_KEY, "{not json").unwrap();
        assert!(load(&store).is_empty());
    }

    #[test]
    fn record_prepends_newest_first() {
        let mut store = MemStore::new();
        record(&mut store, &config("scale", "0.3"), "t1".into());
        let entries = record(&mut store, &config("glow", "0.5"), "t2".into());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].timestamp, "t2");
        assert_eq!(entries[0].config.kind, "glow");
        assert_eq!(entries[1].timestamp, "t1");
    }

    #[test]
    fn record_persists_and_reloads() {
        let mut store = MemStore::new();
        record(&mut store, &config("blur", "1.0"), "t1".into());
        let entries = load(&store);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].config.kind, "blur");
        assert_eq!(entries[0].config.timing, "ease");
    }

    #[test]
    fn eleventh_entry_evicts_the_oldest() {
        let mut store = MemStore::new();
        for i in 0..10 {
            record(&mut store, &config("scale", "0.3"), format!("t{i}"));
        }
        let entries = record(&mut store, &config("scale", "0.3"), "t10".into());
        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries[0].timestamp, "t10");
        // the very first entry (t0) is gone
        assert_eq!(entries[MAX_ENTRIES - 1].timestamp, "t1");
        assert!(entries.iter().all(|e| e.timestamp != "t0"));
    }

    #[test]
    fn entries_serialize_flat() {
        let entry = HistoryEntry {
            timestamp: "2026-01-01T00:00:00Z".into(),
            config: config("skew", "0.4"),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"timestamp\":\"2026-01-01T00:00:00Z\""));
        assert!(json.contains("\"type\":\"skew\""));
        assert!(json.contains("\"timing\":\"ease\""));
        assert!(!json.contains("config"));
    }
}
