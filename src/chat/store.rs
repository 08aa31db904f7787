// ABOUTME: History persistence — saves and loads the full message log to one named storage slot.
// ABOUTME: Storage backends are pluggable: atomic JSON files on disk, or an in-memory map.

use std::collections::HashMap;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::chat::message::{Message, id_in_range};

/// Name of the slot holding the serialized conversation history.
pub const HISTORY_SLOT: &str = "chat_conversation_history";

/// A key-value store of string slots, local to this client.
pub trait SlotStorage: Send {
    /// Read a slot. `Ok(None)` means the slot has never been written.
    fn read(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Overwrite a slot with a new value.
    fn write(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Slot storage backed by one JSON file per slot inside a directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing the given slot.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SlotStorage for FileStorage {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(path)?))
    }

    /// Atomic write via tmp + rename.
    fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let path = self.slot_path(key);
        write_atomic(&path, value)
    }
}

fn write_atomic(path: &Path, value: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, value)?;
    std::fs::rename(&tmp_path, path)?;
    Ok(())
}

/// In-memory slot storage. Clones share the same slots, so a test can keep a
/// handle and inspect what the session persisted.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage with one slot pre-populated.
    pub fn with_slot(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .slots
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl SlotStorage for MemoryStorage {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| anyhow::anyhow!("memory storage lock poisoned"))?;
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| anyhow::anyhow!("memory storage lock poisoned"))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Loads and saves the conversation history snapshot.
pub struct HistoryStore {
    storage: Box<dyn SlotStorage>,
    slot: String,
}

impl HistoryStore {
    /// Create a store over the default history slot.
    pub fn new(storage: impl SlotStorage + 'static) -> Self {
        Self::with_slot(storage, HISTORY_SLOT)
    }

    /// Create a store over a custom slot name.
    pub fn with_slot(storage: impl SlotStorage + 'static, slot: &str) -> Self {
        Self {
            storage: Box::new(storage),
            slot: slot.to_string(),
        }
    }

    /// Load the persisted history.
    ///
    /// Returns an empty vec when the slot is absent, unreadable, or holds
    /// anything other than a well-formed message sequence. Failures are
    /// logged and never propagated.
    pub fn load(&self) -> Vec<Message> {
        let raw = match self.storage.read(&self.slot) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(slot = %self.slot, "no saved history");
                return Vec::new();
            }
            Err(e) => {
                warn!(slot = %self.slot, error = %e, "failed to read saved history");
                return Vec::new();
            }
        };

        match parse_history(&raw) {
            Ok(messages) => {
                debug!(slot = %self.slot, count = messages.len(), "restored history");
                messages
            }
            Err(e) => {
                warn!(slot = %self.slot, error = %e, "discarding malformed saved history");
                Vec::new()
            }
        }
    }

    /// Serialize the full sequence and overwrite the slot.
    pub fn save(&self, messages: &[Message]) -> anyhow::Result<()> {
        let content = serde_json::to_string(messages)?;
        self.storage.write(&self.slot, &content)
    }
}

/// Parse and validate a persisted snapshot. Every message must have
/// non-blank text and a unique id that leaves room for new ids after it.
pub fn parse_history(raw: &str) -> anyhow::Result<Vec<Message>> {
    let messages: Vec<Message> = serde_json::from_str(raw)?;

    let mut seen = HashSet::new();
    for msg in &messages {
        if msg.text.trim().is_empty() {
            anyhow::bail!("message '{}' has empty text", msg.id);
        }
        if !id_in_range(&msg.id) {
            anyhow::bail!("message id '{}' is out of range", msg.id);
        }
        if !seen.insert(msg.id.as_str()) {
            anyhow::bail!("duplicate message id '{}'", msg.id);
        }
    }

    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::message::Sender;
    use chrono::{TimeZone, Utc};

    fn sample_messages() -> Vec<Message> {
        vec![
            Message {
                id: "1".to_string(),
                text: "Hello! How can I help?".to_string(),
                sender: Sender::Assistant,
                timestamp: Utc.timestamp_millis_opt(1_700_000_000_123).unwrap(),
            },
            Message {
                id: "2".to_string(),
                text: "I need shelter".to_string(),
                sender: Sender::User,
                timestamp: Utc.timestamp_millis_opt(1_700_000_005_456).unwrap(),
            },
        ]
    }

    #[test]
    fn roundtrip_preserves_content_order_and_instants() {
        let store = HistoryStore::new(MemoryStorage::new());
        let original = sample_messages();
        store.save(&original).unwrap();

        let loaded = store.load();
        assert_eq!(loaded, original);
        assert_eq!(loaded[0].timestamp, original[0].timestamp);
    }

    #[test]
    fn load_absent_slot_returns_empty() {
        let store = HistoryStore::new(MemoryStorage::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn load_garbage_returns_empty() {
        let store = HistoryStore::new(MemoryStorage::with_slot(HISTORY_SLOT, "{not json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn load_wrong_shape_returns_empty() {
        let storage = MemoryStorage::with_slot(HISTORY_SLOT, r#"{"messages": []}"#);
        assert!(HistoryStore::new(storage).load().is_empty());

        let storage = MemoryStorage::with_slot(
            HISTORY_SLOT,
            r#"[{"id":"1","text":"hi","sender":"robot","timestamp":"2025-01-01T00:00:00Z"}]"#,
        );
        assert!(HistoryStore::new(storage).load().is_empty());
    }

    #[test]
    fn load_rejects_unparseable_timestamp() {
        let storage = MemoryStorage::with_slot(
            HISTORY_SLOT,
            r#"[{"id":"1","text":"hi","sender":"user","timestamp":"yesterday"}]"#,
        );
        assert!(HistoryStore::new(storage).load().is_empty());
    }

    #[test]
    fn parse_rejects_blank_text_and_duplicate_ids() {
        let blank = r#"[{"id":"1","text":"  ","sender":"user","timestamp":"2025-01-01T00:00:00Z"}]"#;
        assert!(parse_history(blank).is_err());

        let dupes = r#"[
            {"id":"1","text":"a","sender":"user","timestamp":"2025-01-01T00:00:00Z"},
            {"id":"1","text":"b","sender":"assistant","timestamp":"2025-01-01T00:00:01Z"}
        ]"#;
        assert!(parse_history(dupes).is_err());
    }

    #[test]
    fn parse_rejects_ids_past_the_generator_range() {
        let raw = r#"[{"id":"18446744073709551615","text":"hi","sender":"user","timestamp":"2025-01-01T00:00:00Z"}]"#;
        assert!(parse_history(raw).is_err());
    }

    #[test]
    fn parse_accepts_offset_timestamps() {
        let raw = r#"[{"id":"1","text":"hi","sender":"user","timestamp":"2025-01-01T02:00:00.000+02:00"}]"#;
        let messages = parse_history(raw).unwrap();
        assert_eq!(
            messages[0].timestamp,
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn save_overwrites_previous_snapshot() {
        let storage = MemoryStorage::new();
        let store = HistoryStore::new(storage.clone());
        let messages = sample_messages();
        store.save(&messages[..1]).unwrap();
        store.save(&messages).unwrap();

        let raw = storage.read(HISTORY_SLOT).unwrap().unwrap();
        let parsed: Vec<Message> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, messages);
    }

    #[test]
    fn file_storage_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(FileStorage::new(tmp.path().join("data")));
        let original = sample_messages();
        store.save(&original).unwrap();
        assert_eq!(store.load(), original);
    }

    #[test]
    fn file_storage_write_is_atomic() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(tmp.path());
        storage.write(HISTORY_SLOT, "[]").unwrap();

        let path = storage.slot_path(HISTORY_SLOT);
        assert!(path.exists(), "slot file should exist after write");
        assert!(
            !path.with_extension("json.tmp").exists(),
            "tmp file should not exist after a successful write"
        );
    }

    #[test]
    fn file_storage_missing_slot_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(tmp.path().join("nope"));
        assert!(storage.read(HISTORY_SLOT).unwrap().is_none());
    }
}
