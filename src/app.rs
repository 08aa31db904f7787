// ABOUTME: App orchestrator — wires together history storage, chat session, HTTP client, and TUI.
// ABOUTME: Runs the terminal event loop; each exchange runs on a spawned task and reports back.

use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::chat::{
    ChatSession, ExchangeClient, ExchangeOutcome, FileStorage, HistoryStore, HttpExchangeClient,
    MemoryStorage, MessageLog, PendingExchange,
};
use crate::config::Config;
use crate::tui::input::{InputResult, handle_key};
use crate::tui::state::{ChatView, TuiState};
use crate::tui::ui;

/// Top-level application that orchestrates all subsystems.
pub struct App {
    config: Config,
    fresh: bool,
    ephemeral: bool,
}

impl App {
    /// Create a new app with the given configuration.
    ///
    /// `fresh` starts from the greeting instead of saved history; `ephemeral`
    /// keeps history in memory only.
    pub fn new(config: Config, fresh: bool, ephemeral: bool) -> Self {
        Self {
            config,
            fresh,
            ephemeral,
        }
    }

    /// Build the chat session over the configured storage.
    pub fn build_session(&self) -> ChatSession {
        let store = if self.ephemeral {
            HistoryStore::new(MemoryStorage::new())
        } else {
            HistoryStore::new(FileStorage::new(self.config.data_dir()))
        };

        let log = if self.fresh {
            MessageLog::seed(store)
        } else {
            MessageLog::seed_or_restore(store)
        };

        ChatSession::new(log).with_history_window(self.config.chat.history_window)
    }

    /// Run the application: set up the session and client, then drive the TUI until quit.
    pub async fn run(self) -> anyhow::Result<()> {
        let endpoint = self.config.chat.endpoint();
        let mut session = self.build_session();
        let client: Arc<dyn ExchangeClient> = Arc::new(HttpExchangeClient::new(endpoint.clone()));

        info!(
            %endpoint,
            restored = session.messages().len(),
            ephemeral = self.ephemeral,
            "starting chat session"
        );

        let mut state = TuiState::new(endpoint);
        let mut terminal = ratatui::init();
        let result = run_event_loop(&mut terminal, &mut state, &mut session, client).await;
        ratatui::restore();

        print_exit_screen(&state, &session);
        result
    }
}

/// Drive the terminal until the user quits. Key events and exchange outcomes
/// are handled one at a time on this task, so the session has a single writer.
async fn run_event_loop(
    terminal: &mut DefaultTerminal,
    state: &mut TuiState,
    session: &mut ChatSession,
    client: Arc<dyn ExchangeClient>,
) -> anyhow::Result<()> {
    let (outcome_tx, mut outcome_rx) = mpsc::channel::<ExchangeOutcome>(1);
    let mut events = EventStream::new();

    loop {
        terminal.draw(|frame| ui::render(frame, state, &ChatView::of(session)))?;

        tokio::select! {
            event = events.next() => {
                let key = match event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => key,
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                };

                let pending = match handle_key(state, key, session.is_sending()) {
                    InputResult::None => None,
                    InputResult::Send(text) => session.submit(&text),
                    InputResult::QuickAction(action) => session.quick_action(action),
                    InputResult::Quit => return Ok(()),
                };

                if let Some(pending) = pending {
                    spawn_exchange(pending, client.clone(), outcome_tx.clone());
                }
            }
            Some(outcome) = outcome_rx.recv() => {
                session.settle(outcome);
                state.scroll_offset = 0;
            }
        }
    }
}

/// Resolve an exchange in the background and deliver its outcome to the event loop.
fn spawn_exchange(
    pending: PendingExchange,
    client: Arc<dyn ExchangeClient>,
    outcome_tx: mpsc::Sender<ExchangeOutcome>,
) {
    tokio::spawn(async move {
        let outcome = pending.resolve(client.as_ref()).await;
        if outcome_tx.send(outcome).await.is_err() {
            debug!("event loop exited before the exchange settled");
        }
    });
}

/// Print a farewell screen after the TUI exits.
fn print_exit_screen(state: &TuiState, session: &ChatSession) {
    let elapsed =
        crate::tui::widgets::status::format_elapsed(state.session_start.elapsed().as_secs());
    let msg_count = session.messages().len();

    println!();
    println!("  \x1b[1mSafeConnect\x1b[0m — session lasted {elapsed}, {msg_count} messages in history.");
    println!("  If you're in immediate danger, call 911. Crisis Lifeline: 988.");
    println!();
}
