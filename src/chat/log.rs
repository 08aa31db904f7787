// ABOUTME: Append-only in-memory message log, persisted in full after every append.
// ABOUTME: Restores from the history store at startup or seeds a single greeting.

use chrono::Utc;
use tracing::error;

use crate::chat::message::{IdGenerator, Message, Sender};
use crate::chat::store::HistoryStore;

/// Text of the assistant message a fresh conversation starts with.
pub const GREETING: &str =
    "Hello! I'm here to help you find resources and support. What do you need assistance with today?";

/// Ordered, append-only sequence of chat messages.
pub struct MessageLog {
    messages: Vec<Message>,
    store: HistoryStore,
    ids: IdGenerator,
}

impl MessageLog {
    /// Build the log from the saved snapshot, or seed it with the greeting
    /// (which is persisted immediately) when there is nothing to restore.
    pub fn seed_or_restore(store: HistoryStore) -> Self {
        let restored = store.load();
        let mut log = Self::empty(store);

        if restored.is_empty() {
            log.append(GREETING, Sender::Assistant);
        } else {
            for msg in &restored {
                log.ids.observe(&msg.id);
            }
            log.messages = restored;
        }

        log
    }

    /// Start a new conversation from the greeting, ignoring any saved
    /// history. The previous snapshot is overwritten.
    pub fn seed(store: HistoryStore) -> Self {
        let mut log = Self::empty(store);
        log.append(GREETING, Sender::Assistant);
        log
    }

    fn empty(store: HistoryStore) -> Self {
        Self {
            messages: Vec::new(),
            store,
            ids: IdGenerator::default(),
        }
    }

    /// Append a new message at the tail and persist the full log.
    ///
    /// A failed save is logged; the message stays in the in-memory log.
    pub fn append(&mut self, text: &str, sender: Sender) -> Message {
        let now = Utc::now();
        let msg = Message {
            id: self.ids.next_id(now),
            text: text.to_string(),
            sender,
            timestamp: now,
        };
        self.messages.push(msg.clone());

        if let Err(e) = self.store.save(&self.messages) {
            error!(error = %e, count = self.messages.len(), "failed to save chat history");
        }

        msg
    }

    /// All messages, in display order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The trailing `n` messages (fewer if the log is shorter).
    pub fn recent(&self, n: usize) -> &[Message] {
        let start = self.messages.len().saturating_sub(n);
        &self.messages[start..]
    }

}
