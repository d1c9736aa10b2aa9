//! Screen navigation state machine
//!
//! Tracks which screen is current and keeps the visited-screen history as an
//! explicit stack, so "back" walks one step and "reset to start" clears the
//! whole stack in one move.

use crate::menu::Category;

/// Identifier for one step in the ordering flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenRoute {
    Start,
    Entree,
    SideDish,
    Accompaniment,
    Checkout,
}

impl ScreenRoute {
    /// Display title shown in the title bar
    pub fn title(&self) -> &'static str {
        match self {
            ScreenRoute::Start => "Lunch Tray",
            ScreenRoute::Entree => "Choose Entree",
            ScreenRoute::SideDish => "Choose Side Dish",
            ScreenRoute::Accompaniment => "Choose Accompaniment",
            ScreenRoute::Checkout => "Order Checkout",
        }
    }

    /// The category a menu screen selects from (None for start/checkout)
    pub fn category(&self) -> Option<Category> {
        match self {
            ScreenRoute::Entree => Some(Category::Entree),
            ScreenRoute::SideDish => Some(Category::SideDish),
            ScreenRoute::Accompaniment => Some(Category::Accompaniment),
            ScreenRoute::Start | ScreenRoute::Checkout => None,
        }
    }

    /// Where "next" leads in the linear flow (None from the last screen)
    pub fn next_in_flow(&self) -> Option<ScreenRoute> {
        match self {
            ScreenRoute::Start => Some(ScreenRoute::Entree),
            ScreenRoute::Entree => Some(ScreenRoute::SideDish),
            ScreenRoute::SideDish => Some(ScreenRoute::Accompaniment),
            ScreenRoute::Accompaniment => Some(ScreenRoute::Checkout),
            ScreenRoute::Checkout => None,
        }
    }

    /// True for the three selection screens
    pub fn is_menu_screen(&self) -> bool {
        self.category().is_some()
    }
}

/// Navigation state: current screen plus the history stack behind it
#[derive(Debug, Clone)]
pub struct Navigator {
    current: ScreenRoute,
    history: Vec<ScreenRoute>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: ScreenRoute::Start,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> ScreenRoute {
        self.current
    }

    /// Back is available whenever there is history to pop
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Advance to a screen, remembering the one we left.
    ///
    /// Callers only navigate forward along the flow; revisiting a screen
    /// that is already on the stack is a contract violation, not a checked
    /// error.
    pub fn go_to(&mut self, route: ScreenRoute) {
        self.history.push(self.current);
        self.current = route;
    }

    /// Step back to the previous screen. Returns false (and stays put)
    /// when there is no history.
    pub fn go_back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    /// Jump straight back to the start screen, dropping all history in one
    /// step rather than replaying single backs.
    pub fn reset_to_start(&mut self) {
        self.history.clear();
        self.current = ScreenRoute::Start;
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_start_without_history() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), ScreenRoute::Start);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_go_to_pushes_history() {
        let mut nav = Navigator::new();
        nav.go_to(ScreenRoute::Entree);
        nav.go_to(ScreenRoute::SideDish);

        assert_eq!(nav.current(), ScreenRoute::SideDish);
        assert!(nav.can_go_back());
    }

    #[test]
    fn test_go_back_walks_one_step() {
        let mut nav = Navigator::new();
        nav.go_to(ScreenRoute::Entree);
        nav.go_to(ScreenRoute::SideDish);

        assert!(nav.go_back());
        assert_eq!(nav.current(), ScreenRoute::Entree);
        assert!(nav.go_back());
        assert_eq!(nav.current(), ScreenRoute::Start);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_go_back_without_history_is_refused() {
        let mut nav = Navigator::new();
        assert!(!nav.go_back());
        assert_eq!(nav.current(), ScreenRoute::Start);
    }

    #[test]
    fn test_reset_to_start_clears_everything() {
        let mut nav = Navigator::new();
        nav.go_to(ScreenRoute::Entree);
        nav.go_to(ScreenRoute::SideDish);
        nav.go_to(ScreenRoute::Accompaniment);
        nav.go_to(ScreenRoute::Checkout);

        nav.reset_to_start();
        assert_eq!(nav.current(), ScreenRoute::Start);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_flow_order() {
        let mut route = ScreenRoute::Start;
        let mut visited = vec![route];
        while let Some(next) = route.next_in_flow() {
            route = next;
            visited.push(route);
        }
        assert_eq!(
            visited,
            vec![
                ScreenRoute::Start,
                ScreenRoute::Entree,
                ScreenRoute::SideDish,
                ScreenRoute::Accompaniment,
                ScreenRoute::Checkout,
            ]
        );
    }

    #[test]
    fn test_titles() {
        assert_eq!(ScreenRoute::Start.title(), "Lunch Tray");
        assert_eq!(ScreenRoute::Entree.title(), "Choose Entree");
        assert_eq!(ScreenRoute::SideDish.title(), "Choose Side Dish");
        assert_eq!(ScreenRoute::Accompaniment.title(), "Choose Accompaniment");
        assert_eq!(ScreenRoute::Checkout.title(), "Order Checkout");
    }

    #[test]
    fn test_menu_screen_categories() {
        assert_eq!(ScreenRoute::Entree.category(), Some(Category::Entree));
        assert_eq!(ScreenRoute::SideDish.category(), Some(Category::SideDish));
        assert_eq!(
            ScreenRoute::Accompaniment.category(),
            Some(Category::Accompaniment)
        );
        assert_eq!(ScreenRoute::Start.category(), None);
        assert_eq!(ScreenRoute::Checkout.category(), None);
        assert!(!ScreenRoute::Checkout.is_menu_screen());
    }
}
