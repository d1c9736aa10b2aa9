//! Semantic action vocabulary for the ordering flow
//!
//! Translates raw key events into `FlowAction`s based on which screen is
//! current, so the state layer never matches on key codes itself.

use crate::core::navigator::ScreenRoute;
use crossterm::event::{KeyCode, KeyModifiers};

/// Everything a user gesture can mean in this flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowAction {
    /// Move the list highlight up one row
    CursorUp,
    /// Move the list highlight down one row
    CursorDown,
    /// Choose the highlighted menu item for the current category
    Select,
    /// Leave the start screen and begin an order
    StartOrder,
    /// Advance to the next screen in the flow
    Next,
    /// Step back one screen
    Back,
    /// Abandon the order: reset it and return to start
    Cancel,
    /// Place the order from the checkout screen
    Submit,
    /// Exit the application
    Quit,
    /// Key not bound on this screen
    None,
}

/// Map a key event to a FlowAction for the current screen
pub fn route_key(code: KeyCode, modifiers: KeyModifiers, route: ScreenRoute) -> FlowAction {
    // Quit works everywhere
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return FlowAction::Quit;
    }
    if code == KeyCode::Char('q') {
        return FlowAction::Quit;
    }

    match route {
        ScreenRoute::Start => match code {
            KeyCode::Enter | KeyCode::Char(' ') => FlowAction::StartOrder,
            KeyCode::Esc => FlowAction::Quit,
            _ => FlowAction::None,
        },
        ScreenRoute::Entree | ScreenRoute::SideDish | ScreenRoute::Accompaniment => match code {
            KeyCode::Up | KeyCode::Char('k') => FlowAction::CursorUp,
            KeyCode::Down | KeyCode::Char('j') => FlowAction::CursorDown,
            KeyCode::Enter | KeyCode::Char(' ') => FlowAction::Select,
            KeyCode::Right | KeyCode::Char('n') | KeyCode::Tab => FlowAction::Next,
            KeyCode::Left | KeyCode::Backspace => FlowAction::Back,
            KeyCode::Esc | KeyCode::Char('c') => FlowAction::Cancel,
            _ => FlowAction::None,
        },
        ScreenRoute::Checkout => match code {
            KeyCode::Enter | KeyCode::Char('s') => FlowAction::Submit,
            KeyCode::Esc | KeyCode::Char('c') => FlowAction::Cancel,
            KeyCode::Left | KeyCode::Backspace => FlowAction::Back,
            _ => FlowAction::None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_screen_routing() {
        assert_eq!(
            route_key(KeyCode::Enter, KeyModifiers::NONE, ScreenRoute::Start),
            FlowAction::StartOrder
        );
        assert_eq!(
            route_key(KeyCode::Esc, KeyModifiers::NONE, ScreenRoute::Start),
            FlowAction::Quit
        );
        assert_eq!(
            route_key(KeyCode::Up, KeyModifiers::NONE, ScreenRoute::Start),
            FlowAction::None
        );
    }

    #[test]
    fn test_menu_screen_routing() {
        for route in [
            ScreenRoute::Entree,
            ScreenRoute::SideDish,
            ScreenRoute::Accompaniment,
        ] {
            assert_eq!(
                route_key(KeyCode::Up, KeyModifiers::NONE, route),
                FlowAction::CursorUp
            );
            assert_eq!(
                route_key(KeyCode::Char('j'), KeyModifiers::NONE, route),
                FlowAction::CursorDown
            );
            assert_eq!(
                route_key(KeyCode::Enter, KeyModifiers::NONE, route),
                FlowAction::Select
            );
            assert_eq!(
                route_key(KeyCode::Char('n'), KeyModifiers::NONE, route),
                FlowAction::Next
            );
            assert_eq!(
                route_key(KeyCode::Backspace, KeyModifiers::NONE, route),
                FlowAction::Back
            );
            assert_eq!(
                route_key(KeyCode::Esc, KeyModifiers::NONE, route),
                FlowAction::Cancel
            );
        }
    }

    #[test]
    fn test_checkout_routing() {
        assert_eq!(
            route_key(KeyCode::Enter, KeyModifiers::NONE, ScreenRoute::Checkout),
            FlowAction::Submit
        );
        assert_eq!(
            route_key(KeyCode::Char('c'), KeyModifiers::NONE, ScreenRoute::Checkout),
            FlowAction::Cancel
        );
        assert_eq!(
            route_key(KeyCode::Left, KeyModifiers::NONE, ScreenRoute::Checkout),
            FlowAction::Back
        );
        // No list to move through at checkout
        assert_eq!(
            route_key(KeyCode::Down, KeyModifiers::NONE, ScreenRoute::Checkout),
            FlowAction::None
        );
    }

    #[test]
    fn test_quit_is_global() {
        for route in [
            ScreenRoute::Start,
            ScreenRoute::Entree,
            ScreenRoute::SideDish,
            ScreenRoute::Accompaniment,
            ScreenRoute::Checkout,
        ] {
            assert_eq!(
                route_key(KeyCode::Char('q'), KeyModifiers::NONE, route),
                FlowAction::Quit
            );
            assert_eq!(
                route_key(KeyCode::Char('c'), KeyModifiers::CONTROL, route),
                FlowAction::Quit
            );
        }
    }
}
