//! Menu items and the category grouping shown in the item selector.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

use crate::model::money::format_price;

/// A dish or drink offered on the menu.
///
/// Identity is the `(name, category)` pair, see [`ItemKey`]. The same name may
/// appear under two categories and those are two different items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub category: String,
    pub price: Decimal,
}

impl MenuItem {
    /// Creates a new MenuItem.
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `category` - Category the item is grouped under
    /// * `price` - Unit price, non-negative
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price,
        }
    }

    pub fn key(&self) -> ItemKey {
        ItemKey::new(&self.name, &self.category)
    }

    /// Selector label, e.g. `Beer - $2.00`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, format_price(self.price))
    }
}

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemKey {
    pub name: String,
    pub category: String,
}

impl ItemKey {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }
}

impl Display for ItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}

/// The fixed list of items on offer, in the order they were declared.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by identity.
    pub fn find(&self, key: &ItemKey) -> Option<&MenuItem> {
        self.items
            .iter()
            .find(|item| item.name == key.name && item.category == key.category)
    }

    /// Groups the catalog by category.
    pub fn index(&self) -> CategoryIndex {
        CategoryIndex::build(&self.items)
    }
}

/// Catalog grouped by category.
///
/// Categories iterate in plain ascending byte order (`"Zebra"` sorts before
/// `"apple"`). Within a category, items keep their catalog order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryIndex {
    groups: BTreeMap<String, Vec<MenuItem>>,
}

impl CategoryIndex {
    pub fn build(items: &[MenuItem]) -> Self {
        let mut groups: BTreeMap<String, Vec<MenuItem>> = BTreeMap::new();
        for item in items {
            groups
                .entry(item.category.clone())
                .or_default()
                .push(item.clone());
        }
        Self { groups }
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn items_in(&self, category: &str) -> &[MenuItem] {
        self.groups.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn groups(&self) -> impl Iterator<Item = (&str, &[MenuItem])> {
        self.groups.iter().map(|(c, items)| (c.as_str(), items.as_slice()))
    }
}
