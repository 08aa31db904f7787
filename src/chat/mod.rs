// ABOUTME: Chat module — message model, history persistence, message log, and backend exchange.
// ABOUTME: ChatSession composes them into the Idle/Sending submission state machine.

pub mod exchange;
pub mod log;
pub mod message;
pub mod session;
pub mod store;

pub use exchange::{ChatRequest, ExchangeClient, ExchangeError, HistoryEntry, HttpExchangeClient};
pub use log::{GREETING, MessageLog};
pub use message::{Message, Sender};
pub use session::{
    ChatSession, EMPTY_RESPONSE_FALLBACK, ERROR_FALLBACK, ExchangeOutcome, ExchangeState,
    PendingExchange, QuickAction,
};
pub use store::{FileStorage, HISTORY_SLOT, HistoryStore, MemoryStorage, SlotStorage};
