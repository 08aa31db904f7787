// ABOUTME: Chat message model — the unit stored in the message log and the history slot.
// ABOUTME: Also issues session-unique, monotonically increasing message ids.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Local wall-clock time of the message, formatted as `HH:MM`.
    pub fn display_time(&self) -> String {
        self.timestamp.with_timezone(&Local).format("%H:%M").to_string()
    }
}

/// Largest numeric id accepted from storage. Issued ids are creation times
/// in milliseconds and stay far below it.
pub const MAX_ID: u64 = i64::MAX as u64;

/// Whether an id can coexist with generated ones. All-digit ids must not
/// exceed [`MAX_ID`]; any other id never collides with a generated one.
pub fn id_in_range(id: &str) -> bool {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return true;
    }
    id.parse::<u64>().is_ok_and(|value| value <= MAX_ID)
}

/// Issues message ids derived from the creation time in milliseconds.
///
/// Two messages created within the same millisecond (or a clock that steps
/// backwards) still get distinct ids: every id is strictly greater than the
/// last one issued or observed.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Record an id that already exists (e.g. restored from storage) so new
    /// ids sort after it. Non-numeric and out-of-range ids are ignored.
    pub fn observe(&mut self, id: &str) {
        if let Some(value) = id.parse::<u64>().ok().filter(|v| *v <= MAX_ID) {
            self.last = self.last.max(value);
        }
    }

    /// Produce the next id for a message created at `now`.
    pub fn next_id(&mut self, now: DateTime<Utc>) -> String {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = if millis > self.last {
            millis
        } else {
            self.last.saturating_add(1)
        };
        self.last = id;
        id.to_string()
    }
}
