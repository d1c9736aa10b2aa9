//! TUI Frontend (ratatui-based)
//!
//! This module implements the Frontend trait using ratatui for terminal
//! rendering. It wraps crossterm for event handling and terminal
//! management. Each screen of the flow has its own renderer; chrome
//! (title bar, status line) is shared.

pub mod app;
pub mod checkout;
pub mod chrome;
pub mod menu_screen;
pub mod start;

pub use app::TuiFrontend;
