//! Order lines and the running order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use crate::model::{MenuItem, Quantity};

/// Type-safe identifier for order lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineId(pub u64);

impl From<u64> for LineId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line_{}", self.0)
    }
}

impl FromStr for LineId {
    type Err = std::num::ParseIntError;

    /// Accepts both `line_7` and `7`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("line_").unwrap_or(s);
        digits.parse::<u64>().map(LineId)
    }
}

/// Represents one line of the running order.
///
/// Name, category and price are copied from the [`MenuItem`] when the line is
/// added. The line never looks back at the catalog afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: LineId,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub quantity: Quantity,
}

impl OrderLine {
    pub fn new(id: LineId, item: &MenuItem, quantity: Quantity) -> Self {
        Self {
            id,
            name: item.name.clone(),
            category: item.category.clone(),
            price: item.price,
            quantity,
        }
    }

    /// `price × quantity`, unrounded. Saturates at `Decimal::MAX`.
    pub fn subtotal(&self) -> Decimal {
        self.price
            .checked_mul(Decimal::from(self.quantity.get()))
            .unwrap_or(Decimal::MAX)
    }
}

/// The running order: lines in the order they were added.
///
/// Ids come from a counter owned by the order and are never handed out twice,
/// even after the line that held one is removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    lines: Vec<OrderLine>,
    next_id: u64,
}

impl Order {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends a snapshot of `item` and returns the new line's id.
    pub fn add(&mut self, item: &MenuItem, quantity: Quantity) -> LineId {
        let id = LineId::from(self.next_id);
        self.next_id += 1;
        self.lines.push(OrderLine::new(id, item, quantity));
        id
    }

    /// Removes the line with `id`. Unknown ids leave the order untouched.
    pub fn remove(&mut self, id: LineId) -> Option<OrderLine> {
        let position = self.lines.iter().position(|line| line.id == id)?;
        Some(self.lines.remove(position))
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Folds the current lines. Nothing is cached, so the total cannot drift
    /// from the lines it is computed from. Saturates at `Decimal::MAX`.
    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .map(OrderLine::subtotal)
            .fold(Decimal::ZERO, |sum, subtotal| {
                sum.checked_add(subtotal).unwrap_or(Decimal::MAX)
            })
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beer() -> MenuItem {
        MenuItem::new("Beer", "Beer", Decimal::new(200, 2))
    }

    fn cola() -> MenuItem {
        MenuItem::new("Cola", "Refreshments", Decimal::new(175, 2))
    }

    #[test]
    fn total_is_sum_of_subtotals() {
        let mut order = Order::new();
        assert_eq!(order.total(), Decimal::ZERO);

        order.add(&beer(), Quantity::clamped(3));
        order.add(&cola(), Quantity::ONE);

        let subtotals: Vec<Decimal> = order.lines().iter().map(OrderLine::subtotal).collect();
        assert_eq!(subtotals, vec![Decimal::new(600, 2), Decimal::new(175, 2)]);
        assert_eq!(order.total(), Decimal::new(775, 2));
    }

    #[test]
    fn rapid_adds_of_same_item_get_distinct_ids() {
        let mut order = Order::new();
        let ids: Vec<LineId> = (0..50).map(|_| order.add(&beer(), Quantity::ONE)).collect();

        let mut unique = ids.clone();
        unique.sort_by_key(|id| id.0);
        unique.dedup();
        assert_eq!(unique.len(), 50);
        assert_eq!(order.len(), 50);
    }

    #[test]
    fn remove_is_idempotent_and_keeps_order() {
        let mut order = Order::new();
        let first = order.add(&beer(), Quantity::ONE);
        let second = order.add(&cola(), Quantity::ONE);
        let third = order.add(&beer(), Quantity::clamped(2));

        assert!(order.remove(second).is_some());
        let after_once = order.clone();
        assert!(order.remove(second).is_none());
        assert_eq!(order, after_once);

        let ids: Vec<LineId> = order.lines().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![first, third]);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut order = Order::new();
        let first = order.add(&beer(), Quantity::ONE);
        order.remove(first);
        let next = order.add(&beer(), Quantity::ONE);
        assert_ne!(first, next);
    }

    #[test]
    fn arithmetic_saturates_instead_of_overflowing() {
        let gold = MenuItem::new("Gold", "Bar", Decimal::MAX);
        let mut order = Order::new();
        order.add(&gold, Quantity::MAX);
        order.add(&gold, Quantity::ONE);

        assert_eq!(order.lines()[0].subtotal(), Decimal::MAX);
        assert_eq!(order.total(), Decimal::MAX);
    }

    #[test]
    fn ids_continue_past_u32_range() {
        let mut order = Order::new();
        order.next_id = u64::from(u32::MAX);
        let last_u32 = order.add(&beer(), Quantity::ONE);
        let next = order.add(&beer(), Quantity::ONE);
        assert_eq!(next, LineId(u64::from(u32::MAX) + 1));
        assert_ne!(last_u32, next);
    }

    #[test]
    fn line_snapshots_menu_item() {
        let mut item = beer();
        let mut order = Order::new();
        order.add(&item, Quantity::ONE);

        item.price = Decimal::new(999, 2);
        assert_eq!(order.lines()[0].price, Decimal::new(200, 2));
    }

    #[test]
    fn line_id_parses_with_or_without_prefix() {
        assert_eq!("line_4".parse::<LineId>().unwrap(), LineId(4));
        assert_eq!("4".parse::<LineId>().unwrap(), LineId(4));
        assert!("line_x".parse::<LineId>().is_err());
        assert_eq!(LineId(9).to_string(), "line_9");
    }
}
