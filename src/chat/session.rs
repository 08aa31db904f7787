// ABOUTME: Chat session — the Idle/Sending state machine over the message log and exchange client.
// ABOUTME: Guards against empty or overlapping submissions and turns every outcome into a reply.

use tracing::{error, info, warn};

use crate::chat::exchange::{ChatRequest, ExchangeClient, ExchangeError, HISTORY_WINDOW, HistoryEntry};
use crate::chat::log::MessageLog;
use crate::chat::message::{Message, Sender};

/// Assistant reply when the server answered without a usable `response`.
pub const EMPTY_RESPONSE_FALLBACK: &str = "Sorry, empty response from server.";

/// Assistant reply when the exchange failed.
pub const ERROR_FALLBACK: &str = "Sorry, there was an error processing your request.";

/// Result of running a pending exchange.
pub type ExchangeOutcome = Result<Option<String>, ExchangeError>;

/// Whether a request to the assistant is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeState {
    Idle,
    Sending,
}

/// Canned shortcuts that submit a fixed phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    Shelter,
    Food,
    Healthcare,
    Map,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::Shelter,
        QuickAction::Food,
        QuickAction::Healthcare,
        QuickAction::Map,
    ];

    /// Button label shown in the quick-action bar.
    pub fn label(self) -> &'static str {
        match self {
            QuickAction::Shelter => "Find Shelter",
            QuickAction::Food => "Food Resources",
            QuickAction::Healthcare => "Healthcare",
            QuickAction::Map => "Services Near Me",
        }
    }

    /// The user message this action submits.
    pub fn phrase(self) -> &'static str {
        match self {
            QuickAction::Shelter => "I need help finding emergency shelter",
            QuickAction::Food => "Where can I find food assistance?",
            QuickAction::Healthcare => "I need healthcare services",
            QuickAction::Map => "Show me services near my location",
        }
    }
}

/// A request that has been committed to the log but not yet sent.
#[derive(Debug, Clone)]
pub struct PendingExchange {
    request: ChatRequest,
}

impl PendingExchange {
    pub fn request(&self) -> &ChatRequest {
        &self.request
    }

    /// Send the request. This is the only suspension point of an exchange;
    /// there is no retry and no cancellation.
    pub async fn resolve(self, client: &dyn ExchangeClient) -> ExchangeOutcome {
        client.send(&self.request).await
    }
}

/// One running chat conversation.
pub struct ChatSession {
    log: MessageLog,
    state: ExchangeState,
    history_window: usize,
}

impl ChatSession {
    pub fn new(log: MessageLog) -> Self {
        Self {
            log,
            state: ExchangeState::Idle,
            history_window: HISTORY_WINDOW,
        }
    }

    pub fn with_history_window(mut self, history_window: usize) -> Self {
        self.history_window = history_window;
        self
    }

    pub fn state(&self) -> ExchangeState {
        self.state
    }

    pub fn is_sending(&self) -> bool {
        self.state == ExchangeState::Sending
    }

    pub fn messages(&self) -> &[Message] {
        self.log.messages()
    }

    /// Submit user text.
    ///
    /// Returns `None` (and changes nothing) when the text is blank or an
    /// exchange is already outstanding. Otherwise the user message is
    /// appended immediately, the session enters `Sending`, and the returned
    /// exchange must be resolved and passed back to [`ChatSession::settle`].
    pub fn submit(&mut self, text: &str) -> Option<PendingExchange> {
        if text.trim().is_empty() {
            return None;
        }
        if self.is_sending() {
            warn!("ignoring submission while a request is outstanding");
            return None;
        }

        let conversation_history: Vec<HistoryEntry> = self
            .log
            .recent(self.history_window)
            .iter()
            .map(HistoryEntry::from)
            .collect();

        self.log.append(text, Sender::User);
        self.state = ExchangeState::Sending;
        info!(history = conversation_history.len(), "sending chat message");

        Some(PendingExchange {
            request: ChatRequest {
                message: text.to_string(),
                conversation_history,
            },
        })
    }

    /// Submit the canned phrase for a quick action.
    pub fn quick_action(&mut self, action: QuickAction) -> Option<PendingExchange> {
        self.submit(action.phrase())
    }

    /// Record the outcome of the outstanding exchange as an assistant message
    /// and return to `Idle`. Ignored when nothing is outstanding.
    pub fn settle(&mut self, outcome: ExchangeOutcome) -> Option<Message> {
        if !self.is_sending() {
            warn!("ignoring exchange outcome with no request outstanding");
            return None;
        }

        let reply = match outcome {
            Ok(Some(text)) if !text.trim().is_empty() => text,
            Ok(_) => {
                warn!("chat endpoint returned an empty response");
                EMPTY_RESPONSE_FALLBACK.to_string()
            }
            Err(e) => {
                error!(error = %e, "chat exchange failed");
                ERROR_FALLBACK.to_string()
            }
        };

        self.state = ExchangeState::Idle;
        Some(self.log.append(&reply, Sender::Assistant))
    }

    /// Submit, resolve, and settle in one call. Returns the assistant reply,
    /// or `None` if the submission was rejected.
    pub async fn exchange(&mut self, text: &str, client: &dyn ExchangeClient) -> Option<Message> {
        let pending = self.submit(text)?;
        let outcome = pending.resolve(client).await;
        self.settle(outcome)
    }
}
