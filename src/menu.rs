//! Menu catalog: categories, items, and the TOML data source.
//!
//! The catalog is read-only at runtime. Items are loaded once from
//! `menu.toml` (or the embedded default) and handed to the core as
//! immutable per-category lists.

use anyhow::{bail, Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Selection slot in an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Entree,
    SideDish,
    Accompaniment,
}

impl Category {
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Entree => "Entree",
            Category::SideDish => "Side Dish",
            Category::Accompaniment => "Accompaniment",
        }
    }

    /// Lowercase name with its article, for prompts
    pub fn with_article(&self) -> &'static str {
        match self {
            Category::Entree => "an entree",
            Category::SideDish => "a side dish",
            Category::Accompaniment => "an accompaniment",
        }
    }

    /// All categories in the order the flow visits them
    pub fn all() -> [Category; 3] {
        [Category::Entree, Category::SideDish, Category::Accompaniment]
    }
}

/// A single selectable catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: Category,
}

impl MenuItem {
    /// Price rendered for display, e.g. "$7.00"
    pub fn formatted_price(&self) -> String {
        format_usd(self.price)
    }
}

/// Format a decimal amount as US dollars with two places
pub fn format_usd(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

/// Raw catalog entry as written in menu.toml (category comes from the
/// section the entry sits in, not from the entry itself)
#[derive(Debug, Clone, Deserialize)]
struct MenuEntry {
    name: String,
    #[serde(default)]
    description: String,
    price: Decimal,
}

impl MenuEntry {
    fn into_item(self, category: Category) -> MenuItem {
        MenuItem {
            name: self.name,
            description: self.description,
            price: self.price,
            category,
        }
    }
}

/// On-disk catalog shape
#[derive(Debug, Clone, Deserialize)]
struct MenuFile {
    #[serde(default)]
    entrees: Vec<MenuEntry>,
    #[serde(default)]
    side_dishes: Vec<MenuEntry>,
    #[serde(default)]
    accompaniments: Vec<MenuEntry>,
}

/// The full lunch catalog, one list per category
#[derive(Debug, Clone)]
pub struct Menu {
    entrees: Vec<MenuItem>,
    side_dishes: Vec<MenuItem>,
    accompaniments: Vec<MenuItem>,
}

impl Menu {
    /// Parse a catalog from TOML text and validate it
    pub fn from_toml(contents: &str) -> Result<Self> {
        let file: MenuFile = toml::from_str(contents).context("Failed to parse menu TOML")?;

        let menu = Self {
            entrees: file
                .entrees
                .into_iter()
                .map(|e| e.into_item(Category::Entree))
                .collect(),
            side_dishes: file
                .side_dishes
                .into_iter()
                .map(|e| e.into_item(Category::SideDish))
                .collect(),
            accompaniments: file
                .accompaniments
                .into_iter()
                .map(|e| e.into_item(Category::Accompaniment))
                .collect(),
        };

        menu.validate()?;
        Ok(menu)
    }

    /// Load a catalog from an explicit file path
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .context(format!("Failed to read menu file: {:?}", path))?;
        Self::from_toml(&contents).context(format!("Invalid menu file: {:?}", path))
    }

    /// The items for one category
    pub fn items(&self, category: Category) -> &[MenuItem] {
        match category {
            Category::Entree => &self.entrees,
            Category::SideDish => &self.side_dishes,
            Category::Accompaniment => &self.accompaniments,
        }
    }

    /// Total number of catalog entries across all categories
    pub fn len(&self) -> usize {
        self.entrees.len() + self.side_dishes.len() + self.accompaniments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reject catalogs the flow cannot run against: every category must
    /// offer at least one item, and prices cannot be negative.
    fn validate(&self) -> Result<()> {
        for category in Category::all() {
            let items = self.items(category);
            if items.is_empty() {
                bail!("Menu has no {} items", category.display_name());
            }
            for item in items {
                if item.name.trim().is_empty() {
                    bail!("{} item with empty name", category.display_name());
                }
                if item.price.is_sign_negative() {
                    bail!(
                        "{} item '{}' has negative price {}",
                        category.display_name(),
                        item.name,
                        item.price
                    );
                }
            }
        }
        Ok(())
    }

    /// Non-fatal findings for `validate-menu`: duplicate names within a
    /// category and free items are legal but usually mistakes.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for category in Category::all() {
            let items = self.items(category);
            for (idx, item) in items.iter().enumerate() {
                if items[..idx].iter().any(|other| other.name == item.name) {
                    warnings.push(format!(
                        "Duplicate {} name '{}'",
                        category.display_name(),
                        item.name
                    ));
                }
                if item.price.is_zero() {
                    warnings.push(format!(
                        "{} '{}' is priced at $0.00",
                        category.display_name(),
                        item.name
                    ));
                }
            }
        }
        warnings
    }
}
