//! Core application state (frontend-agnostic)
//!
//! AppCore owns everything the flow needs: config, catalog, navigator,
//! order state, and interaction state, and applies `FlowAction`s to it.
//! The frontend only reads from AppCore and reports events; it never
//! mutates the flow directly.

use crate::config::Config;
use crate::core::actions::{route_key, FlowAction};
use crate::core::navigator::{Navigator, ScreenRoute};
use crate::core::order::OrderState;
use crate::data::UiState;
use crate::menu::{format_usd, Menu, MenuItem};
use crate::theme::AppTheme;
use crossterm::event::{KeyCode, KeyModifiers};

/// Central state holder for one ordering session
pub struct AppCore {
    /// Application configuration
    pub config: Config,

    /// Active color theme (resolved from config at startup)
    pub theme: AppTheme,

    /// Read-only lunch catalog
    pub menu: Menu,

    /// Which screen is current, plus back history
    pub navigator: Navigator,

    /// The in-progress order
    pub order: OrderState,

    /// Cursor and status line state
    pub ui_state: UiState,

    /// Application running flag
    pub running: bool,

    /// Set when state changed and the frontend should redraw
    pub needs_render: bool,
}

impl AppCore {
    pub fn new(config: Config, menu: Menu) -> Self {
        let theme = AppTheme::by_name(&config.ui.theme);
        let mut ui_state = UiState::new();
        ui_state.set_status("Press Enter to start your order");

        Self {
            config,
            theme,
            menu,
            navigator: Navigator::new(),
            order: OrderState::new(),
            ui_state,
            running: true,
            needs_render: true,
        }
    }

    /// Items offered by the current screen (empty away from menu screens)
    pub fn current_items(&self) -> &[MenuItem] {
        match self.navigator.current().category() {
            Some(category) => self.menu.items(category),
            None => &[],
        }
    }

    /// Route a key event through the action table and apply it
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let action = route_key(code, modifiers, self.navigator.current());
        self.apply_action(action);
    }

    /// Execute one semantic action against the flow state
    pub fn apply_action(&mut self, action: FlowAction) {
        match action {
            FlowAction::CursorUp => {
                let count = self.current_items().len();
                self.ui_state.cursor_up(count);
            }
            FlowAction::CursorDown => {
                let count = self.current_items().len();
                self.ui_state.cursor_down(count);
            }
            FlowAction::Select => self.select_highlighted(),
            FlowAction::StartOrder => self.enter(ScreenRoute::Entree),
            FlowAction::Next => self.next(),
            FlowAction::Back => self.back(),
            FlowAction::Cancel => self.cancel(),
            FlowAction::Submit => self.submit(),
            FlowAction::Quit => {
                tracing::info!("Exiting");
                self.running = false;
            }
            FlowAction::None => return,
        }
        self.needs_render = true;
    }

    /// Select the list row under the cursor for the current category
    fn select_highlighted(&mut self) {
        let Some(category) = self.navigator.current().category() else {
            return;
        };
        let picked = self.menu.items(category).get(self.ui_state.cursor).cloned();
        if let Some(item) = picked {
            tracing::debug!(
                "Selected {} '{}' at {}",
                category.display_name(),
                item.name,
                item.formatted_price()
            );
            self.ui_state.set_status(format!(
                "{} added ({}). Press n to continue",
                item.name,
                item.formatted_price()
            ));
            self.order.select(item);
        }
    }

    /// Select a specific list row (mouse tap path). Out-of-range rows are
    /// ignored.
    pub fn select_row(&mut self, index: usize) {
        if index < self.current_items().len() {
            self.ui_state.seed_cursor(index);
            self.select_highlighted();
            self.needs_render = true;
        }
    }

    /// Advance to the next screen, refusing until this screen's category
    /// has a selection
    fn next(&mut self) {
        let route = self.navigator.current();
        if let Some(category) = route.category() {
            if !self.order.has_selection(category) {
                self.ui_state.set_status(format!(
                    "Select {} before continuing",
                    category.with_article()
                ));
                return;
            }
        }
        if let Some(next) = route.next_in_flow() {
            self.enter(next);
        }
    }

    /// Step back one screen when history allows it
    fn back(&mut self) {
        if self.navigator.go_back() {
            self.arrive(self.navigator.current());
        }
    }

    /// Abandon the order from any screen: clear it and return to start
    fn cancel(&mut self) {
        tracing::info!("Order cancelled from {:?}", self.navigator.current());
        self.order.reset();
        self.navigator.reset_to_start();
        self.ui_state.seed_cursor(0);
        self.ui_state.set_status("Order cancelled");
    }

    /// Place the order: log it, then reset everything back to the start
    fn submit(&mut self) {
        let total = self.order.total();
        for item in self.order.selections() {
            tracing::info!(
                "Order line: {} '{}' {}",
                item.category.display_name(),
                item.name,
                item.formatted_price()
            );
        }
        tracing::info!(
            "Order placed: subtotal {} tax {} total {}",
            format_usd(self.order.subtotal()),
            format_usd(self.order.tax()),
            format_usd(total)
        );

        self.order.reset();
        self.navigator.reset_to_start();
        self.ui_state.seed_cursor(0);
        self.ui_state
            .set_status(format!("Order placed. Total {}. Thank you!", format_usd(total)));
    }

    /// Navigate forward to a screen and set it up
    fn enter(&mut self, route: ScreenRoute) {
        self.navigator.go_to(route);
        self.arrive(route);
    }

    /// Seed cursor and status for a screen we just landed on, whether we
    /// came forward or back
    fn arrive(&mut self, route: ScreenRoute) {
        match route.category() {
            Some(category) => {
                let seed = self
                    .order
                    .selection(category)
                    .and_then(|selected| {
                        self.menu
                            .items(category)
                            .iter()
                            .position(|item| item == selected)
                    })
                    .unwrap_or(0);
                self.ui_state.seed_cursor(seed);
                self.ui_state.set_status(format!(
                    "Pick {} (Enter selects, n continues)",
                    category.with_article()
                ));
            }
            None => match route {
                ScreenRoute::Checkout => {
                    self.ui_state
                        .set_status("Review your tray (Enter submits, Esc cancels)");
                }
                ScreenRoute::Start => {
                    self.ui_state.seed_cursor(0);
                    self.ui_state.set_status("Press Enter to start your order");
                }
                _ => {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Category;
    use rust_decimal_macros::dec;

    fn core() -> AppCore {
        let menu = Menu::from_toml(include_str!("../../defaults/menu.toml"))
            .expect("default menu parses");
        AppCore::new(Config::default(), menu)
    }

    #[test]
    fn test_start_order_enters_entree_screen() {
        let mut core = core();
        core.apply_action(FlowAction::StartOrder);
        assert_eq!(core.navigator.current(), ScreenRoute::Entree);
        assert!(core.navigator.can_go_back());
        assert_eq!(core.current_items().len(), 4);
    }

    #[test]
    fn test_select_updates_order() {
        let mut core = core();
        core.apply_action(FlowAction::StartOrder);
        core.apply_action(FlowAction::CursorDown);
        core.apply_action(FlowAction::Select);

        let entree = core.order.selection(Category::Entree).expect("selected");
        assert_eq!(entree.name, "Three Bean Chili");
        assert_eq!(core.order.subtotal(), dec!(4.00));
    }

    #[test]
    fn test_next_refused_without_selection() {
        let mut core = core();
        core.apply_action(FlowAction::StartOrder);
        core.apply_action(FlowAction::Next);

        assert_eq!(core.navigator.current(), ScreenRoute::Entree);
        assert!(core.ui_state.status_text.contains("Select a"));
    }

    #[test]
    fn test_full_flow_to_checkout() {
        let mut core = core();
        core.apply_action(FlowAction::StartOrder);
        core.apply_action(FlowAction::Select); // Cauliflower 7.00
        core.apply_action(FlowAction::Next);
        core.apply_action(FlowAction::Select); // Summer Salad 2.50
        core.apply_action(FlowAction::Next);
        core.apply_action(FlowAction::Select); // Lunch Roll 0.50
        core.apply_action(FlowAction::Next);

        assert_eq!(core.navigator.current(), ScreenRoute::Checkout);
        assert_eq!(core.order.subtotal(), dec!(10.00));
        assert_eq!(core.order.tax(), dec!(0.80));
        assert_eq!(core.order.total(), dec!(10.80));
    }

    #[test]
    fn test_cancel_from_side_dish_screen_resets_everything() {
        let mut core = core();
        core.apply_action(FlowAction::StartOrder);
        core.apply_action(FlowAction::Select);
        core.apply_action(FlowAction::Next);
        assert_eq!(core.navigator.current(), ScreenRoute::SideDish);

        core.apply_action(FlowAction::Cancel);
        assert_eq!(core.navigator.current(), ScreenRoute::Start);
        assert!(!core.navigator.can_go_back());
        assert!(core.order.is_empty());
    }

    #[test]
    fn test_submit_resets_and_thanks() {
        let mut core = core();
        core.apply_action(FlowAction::StartOrder);
        core.apply_action(FlowAction::Select);
        core.apply_action(FlowAction::Next);
        core.apply_action(FlowAction::Select);
        core.apply_action(FlowAction::Next);
        core.apply_action(FlowAction::Select);
        core.apply_action(FlowAction::Next);
        core.apply_action(FlowAction::Submit);

        assert_eq!(core.navigator.current(), ScreenRoute::Start);
        assert!(!core.navigator.can_go_back());
        assert!(core.order.is_empty());
        assert!(core.ui_state.status_text.contains("Order placed"));
        assert!(core.ui_state.status_text.contains("$10.80"));
    }

    #[test]
    fn test_back_returns_to_previous_screen() {
        let mut core = core();
        core.apply_action(FlowAction::StartOrder);
        core.apply_action(FlowAction::Select);
        core.apply_action(FlowAction::Next);
        core.apply_action(FlowAction::Back);
        assert_eq!(core.navigator.current(), ScreenRoute::Entree);

        core.apply_action(FlowAction::Back);
        assert_eq!(core.navigator.current(), ScreenRoute::Start);

        // No history left; a further back is ignored
        core.apply_action(FlowAction::Back);
        assert_eq!(core.navigator.current(), ScreenRoute::Start);
    }

    #[test]
    fn test_returning_to_screen_seeds_cursor_on_selection() {
        let mut core = core();
        core.apply_action(FlowAction::StartOrder);
        core.apply_action(FlowAction::CursorDown);
        core.apply_action(FlowAction::CursorDown);
        core.apply_action(FlowAction::Select); // third entree
        core.apply_action(FlowAction::Next);
        assert_eq!(core.ui_state.cursor, 0);

        core.apply_action(FlowAction::Back);
        assert_eq!(core.ui_state.cursor, 2);
    }

    #[test]
    fn test_select_row_ignores_out_of_range() {
        let mut core = core();
        core.apply_action(FlowAction::StartOrder);
        core.select_row(99);
        assert!(core.order.is_empty());

        core.select_row(3);
        assert_eq!(
            core.order.selection(Category::Entree).unwrap().name,
            "Spicy Black Bean Skillet"
        );
    }

    #[test]
    fn test_replacing_selection_keeps_single_slot() {
        let mut core = core();
        core.apply_action(FlowAction::StartOrder);
        core.select_row(0); // Cauliflower 7.00
        core.select_row(1); // Three Bean Chili 4.00

        assert_eq!(core.order.subtotal(), dec!(4.00));
    }

    #[test]
    fn test_quit_stops_running() {
        let mut core = core();
        assert!(core.running);
        core.apply_action(FlowAction::Quit);
        assert!(!core.running);
    }

    #[test]
    fn test_handle_key_routes_by_screen() {
        let mut core = core();
        core.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(core.navigator.current(), ScreenRoute::Entree);

        core.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert!(core.order.has_selection(Category::Entree));

        core.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(core.navigator.current(), ScreenRoute::Start);
        assert!(core.order.is_empty());
    }
}
