//! Frontend abstraction layer
//!
//! This module defines the `Frontend` trait the terminal frontend
//! implements. It provides a unified interface for event polling,
//! rendering, and cleanup.

pub mod events;
pub mod tui;

use crate::core::AppCore;
use anyhow::Result;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

/// Frontend trait - separates rendering concerns from flow logic
///
/// A frontend translates its native event stream into `FrontendEvent`s
/// and draws the current screen from core state. It never mutates the
/// flow itself.
pub trait Frontend {
    /// Poll for user input events
    ///
    /// Returns all pending events (keyboard, mouse, resize) converted to
    /// the frontend-agnostic `FrontendEvent` enum, empty if none arrived
    /// within the poll timeout.
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Render the current application state
    ///
    /// Called once per frame, after the core marks itself dirty.
    fn render(&mut self, core: &AppCore) -> Result<()>;

    /// Cleanup and shutdown the frontend
    ///
    /// Restores the terminal to its pre-launch state. Safe to call more
    /// than once.
    fn cleanup(&mut self) -> Result<()>;

    /// Get current terminal size in character cells
    fn size(&self) -> (u16, u16);
}
