//! Core business logic layer
//!
//! This module contains the screen flow, order math, and action routing.
//! NO imports from frontend/ or rendering code.
//! Core updates data structures in the data layer, frontends read and render.

pub mod actions;
pub mod app_core;
pub mod navigator;
pub mod order;

pub use actions::{route_key, FlowAction};
pub use app_core::AppCore;
pub use navigator::{Navigator, ScreenRoute};
pub use order::{OrderState, TAX_RATE};
