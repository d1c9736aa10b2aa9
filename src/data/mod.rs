//! Data layer - pure interaction state without UI coupling
//!
//! No imports from frontend/ or any rendering code; the frontend reads
//! these structures to render.

pub mod ui_state;

pub use ui_state::UiState;
