//! Order state aggregation
//!
//! Holds the current selection for each category and derives every monetary
//! figure on demand. There is deliberately no cached subtotal/tax/total:
//! the three selections are the only stored state, so the numbers cannot
//! drift out of sync with them.

use crate::menu::{Category, MenuItem};
use rust_decimal::{Decimal, RoundingStrategy};

/// Fixed sales tax rate applied to the subtotal (8%)
pub const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// The in-progress order: at most one selection per category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderState {
    entree: Option<MenuItem>,
    side_dish: Option<MenuItem>,
    accompaniment: Option<MenuItem>,
}

impl OrderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entree selection. Selecting the same item again is a
    /// no-op in effect; selecting a different one drops the previous pick.
    pub fn update_entree(&mut self, item: MenuItem) {
        self.entree = Some(item);
    }

    /// Replace the side dish selection
    pub fn update_side_dish(&mut self, item: MenuItem) {
        self.side_dish = Some(item);
    }

    /// Replace the accompaniment selection
    pub fn update_accompaniment(&mut self, item: MenuItem) {
        self.accompaniment = Some(item);
    }

    /// Slot an item by its own category
    pub fn select(&mut self, item: MenuItem) {
        match item.category {
            Category::Entree => self.update_entree(item),
            Category::SideDish => self.update_side_dish(item),
            Category::Accompaniment => self.update_accompaniment(item),
        }
    }

    /// Current selection for a category, if any
    pub fn selection(&self, category: Category) -> Option<&MenuItem> {
        match category {
            Category::Entree => self.entree.as_ref(),
            Category::SideDish => self.side_dish.as_ref(),
            Category::Accompaniment => self.accompaniment.as_ref(),
        }
    }

    pub fn has_selection(&self, category: Category) -> bool {
        self.selection(category).is_some()
    }

    /// All current selections in flow order (entree, side, accompaniment)
    pub fn selections(&self) -> impl Iterator<Item = &MenuItem> {
        self.entree
            .iter()
            .chain(self.side_dish.iter())
            .chain(self.accompaniment.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.selections().next().is_none()
    }

    /// Sum of the selected items' prices; missing categories contribute zero
    pub fn subtotal(&self) -> Decimal {
        self.selections().map(|item| item.price).sum()
    }

    /// Subtotal times the fixed tax rate, rounded to cents (half-up)
    pub fn tax(&self) -> Decimal {
        (self.subtotal() * TAX_RATE)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Subtotal plus tax
    pub fn total(&self) -> Decimal {
        self.subtotal() + self.tax()
    }

    /// Clear all three selections
    pub fn reset(&mut self) {
        self.entree = None;
        self.side_dish = None;
        self.accompaniment = None;
    }
}
