// ABOUTME: Library root for safeconnect — re-exports all modules for integration testing.
// ABOUTME: The binary entry point is in main.rs, which uses this crate as a library.

pub mod app;
pub mod chat;
pub mod config;
pub mod directory;
pub mod logging;
pub mod tui;
