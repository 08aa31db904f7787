// ABOUTME: TUI state types — active tab, input buffer, scroll positions, and the chat view.
// ABOUTME: The chat messages themselves are owned by ChatSession and borrowed for rendering.

use std::time::Instant;

use crate::chat::{ChatSession, Message};

/// Top-level views, in tab-bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Chat,
    Resources,
    Emergency,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Chat, Tab::Resources, Tab::Emergency];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Chat => "Chat Help",
            Tab::Resources => "Find Services",
            Tab::Emergency => "Emergency",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Chat => 0,
            Tab::Resources => 1,
            Tab::Emergency => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Read-only snapshot of the chat session for one frame.
pub struct ChatView<'a> {
    pub messages: &'a [Message],
    pub sending: bool,
}

impl<'a> ChatView<'a> {
    pub fn of(session: &'a ChatSession) -> Self {
        Self {
            messages: session.messages(),
            sending: session.is_sending(),
        }
    }
}

/// Full TUI application state, apart from the chat history.
pub struct TuiState {
    pub tab: Tab,
    pub input: String,
    pub cursor_pos: usize,
    /// Chat lines scrolled up from the bottom (0 = pinned to newest).
    pub scroll_offset: u16,
    /// Lines scrolled down from the top on the directory tabs.
    pub directory_scroll: u16,
    pub endpoint: String,
    pub session_start: Instant,
}

impl TuiState {
    /// Create a new empty TUI state for the given endpoint.
    pub fn new(endpoint: String) -> Self {
        Self {
            tab: Tab::Chat,
            input: String::new(),
            cursor_pos: 0,
            scroll_offset: 0,
            directory_scroll: 0,
            endpoint,
            session_start: Instant::now(),
        }
    }

    /// Switch tabs, resetting the directory scroll position.
    pub fn select_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            self.tab = tab;
            self.directory_scroll = 0;
        }
    }

    /// Scroll the current view towards older / earlier content.
    pub fn scroll_up(&mut self, lines: u16) {
        match self.tab {
            Tab::Chat => self.scroll_offset = self.scroll_offset.saturating_add(lines),
            _ => self.directory_scroll = self.directory_scroll.saturating_sub(lines),
        }
    }

    /// Scroll the current view towards newer / later content.
    pub fn scroll_down(&mut self, lines: u16) {
        match self.tab {
            Tab::Chat => self.scroll_offset = self.scroll_offset.saturating_sub(lines),
            _ => self.directory_scroll = self.directory_scroll.saturating_add(lines),
        }
    }

    /// Take the input buffer for submission, unless it is blank. The text is
    /// passed on exactly as typed.
    pub fn submit_input(&mut self) -> Option<String> {
        if self.input.trim().is_empty() {
            return None;
        }
        self.cursor_pos = 0;
        self.scroll_offset = 0;
        Some(std::mem::take(&mut self.input))
    }

    /// Clamp the cursor position to the valid character range of the input buffer.
    pub fn clamp_cursor(&mut self) {
        self.cursor_pos = self.cursor_pos.min(self.input_char_len());
    }

    /// Return the current cursor byte index in the UTF-8 input buffer.
    pub fn cursor_byte_index(&self) -> usize {
        char_index_to_byte_index(&self.input, self.cursor_pos)
    }

    /// Return the total number of characters in the input buffer.
    pub fn input_char_len(&self) -> usize {
        self.input.chars().count()
    }

    /// Insert a character at the cursor and advance by one character.
    pub fn insert_char_at_cursor(&mut self, c: char) {
        self.clamp_cursor();
        let byte_index = self.cursor_byte_index();
        self.input.insert(byte_index, c);
        self.cursor_pos += 1;
    }

    /// Delete the character before the cursor (backspace behavior).
    pub fn backspace_char(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos == 0 {
            return;
        }

        let end = self.cursor_byte_index();
        let start = char_index_to_byte_index(&self.input, self.cursor_pos - 1);
        self.input.replace_range(start..end, "");
        self.cursor_pos -= 1;
    }

    /// Delete the character at the cursor (delete behavior).
    pub fn delete_char_at_cursor(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos >= self.input_char_len() {
            return;
        }

        let start = self.cursor_byte_index();
        let end = char_index_to_byte_index(&self.input, self.cursor_pos + 1);
        self.input.replace_range(start..end, "");
    }

    pub fn move_cursor_left(&mut self) {
        self.clamp_cursor();
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos < self.input_char_len() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.input_char_len();
    }
}

fn char_index_to_byte_index(s: &str, char_index: usize) -> usize {
    if char_index == 0 {
        return 0;
    }

    match s.char_indices().nth(char_index) {
        Some((idx, _)) => idx,
        None => s.len(),
    }
}
