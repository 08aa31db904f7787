// ABOUTME: TUI module — ratatui full-screen interface for safeconnect.
// ABOUTME: Tab bar, chat view with quick actions and input, directory views, and status bar.

pub mod input;
pub mod state;
pub mod ui;
pub mod widgets;

pub use state::*;
