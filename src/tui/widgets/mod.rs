// ABOUTME: TUI widget sub-modules for chat, quick actions, directory cards, and status bar.
// ABOUTME: Each widget is a pure rendering function producing ratatui Lines.

pub mod chat;
pub mod directory;
pub mod quick_actions;
pub mod status;
