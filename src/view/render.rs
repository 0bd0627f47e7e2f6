//! Snapshot of the order desk, ready to draw.
//!
//! A [`DeskView`] is built from the current state every time it is requested.
//! All money is already formatted; the total is folded from the lines at
//! build time, never carried over from a previous view.

use serde::Serialize;
use std::fmt::{self, Display};

use crate::desk_actor::OrderDesk;
use crate::model::{format_price, ItemKey, LineId, MenuItem, OrderLine};

pub const TITLE: &str = "Order Management";
pub const PLACEHOLDER: &str = "Choose an item...";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeskView {
    pub title: String,
    pub name_draft: String,
    /// Shown only once a name has been committed.
    pub customer: Option<String>,
    pub selector: Vec<OptionGroup>,
    pub selected: Option<ItemKey>,
    pub quantity: u32,
    pub add_enabled: bool,
    /// `None` while the order is empty: the whole section is hidden.
    pub order: Option<OrderSection>,
}

/// One category heading in the item selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionGroup {
    pub label: String,
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub key: ItemKey,
    /// `name - $price`
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSection {
    pub lines: Vec<LineView>,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineView {
    pub id: LineId,
    pub name: String,
    /// `qty x $unit`
    pub detail: String,
    pub subtotal: String,
}

impl LineView {
    fn from_line(line: &OrderLine) -> Self {
        Self {
            id: line.id,
            name: line.name.clone(),
            detail: format!("{} x {}", line.quantity, format_price(line.price)),
            subtotal: format_price(line.subtotal()),
        }
    }
}

impl DeskView {
    pub fn build(desk: &OrderDesk) -> Self {
        let selector = desk
            .index()
            .groups()
            .map(|(category, items)| OptionGroup {
                label: category.to_string(),
                options: items
                    .iter()
                    .map(|item| SelectOption {
                        key: item.key(),
                        label: item.label(),
                    })
                    .collect(),
            })
            .collect();

        let order = (!desk.order().is_empty()).then(|| OrderSection {
            lines: desk.order().lines().iter().map(LineView::from_line).collect(),
            total: format_price(desk.total()),
        });

        Self {
            title: TITLE.to_string(),
            name_draft: desk.name_draft().to_string(),
            customer: desk.customer().map(str::to_string),
            selector,
            selected: desk.selection().item().map(MenuItem::key),
            quantity: desk.selection().quantity().get(),
            add_enabled: desk.can_add(),
            order,
        }
    }

    /// Selector options in display order, numbered from 1.
    pub fn numbered_options(&self) -> impl Iterator<Item = (usize, &SelectOption)> {
        self.selector
            .iter()
            .flat_map(|group| group.options.iter())
            .enumerate()
            .map(|(i, option)| (i + 1, option))
    }

    /// The `n`-th selector option (1-based).
    pub fn option_key(&self, n: usize) -> Option<&ItemKey> {
        self.numbered_options()
            .find(|(i, _)| *i == n)
            .map(|(_, option)| &option.key)
    }

    /// The id behind the `n`-th displayed order line (1-based).
    pub fn line_id(&self, n: usize) -> Option<LineId> {
        let section = self.order.as_ref()?;
        n.checked_sub(1)
            .and_then(|i| section.lines.get(i))
            .map(|line| line.id)
    }

    fn selected_label(&self) -> Option<&str> {
        let selected = self.selected.as_ref()?;
        self.numbered_options()
            .find(|(_, option)| &option.key == selected)
            .map(|(_, option)| option.label.as_str())
    }
}

impl Display for DeskView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.len()))?;
        writeln!(f)?;

        writeln!(f, "Customer Name")?;
        writeln!(f, "  > {:<30} [Set]", self.name_draft)?;
        if let Some(customer) = &self.customer {
            writeln!(f, "  Customer: {}", customer)?;
        }
        writeln!(f)?;

        writeln!(f, "Add Items")?;
        writeln!(f, "  Select Item: {}", self.selected_label().unwrap_or(PLACEHOLDER))?;
        let mut number = 0;
        for group in &self.selector {
            writeln!(f, "    {}", group.label)?;
            for option in &group.options {
                number += 1;
                let marker = if self.selected.as_ref() == Some(&option.key) { " *" } else { "" };
                writeln!(f, "      {:>2}) {}{}", number, option.label, marker)?;
            }
        }
        writeln!(f, "  Quantity: {}", self.quantity)?;
        if self.add_enabled {
            writeln!(f, "  [Add to Order]")?;
        } else {
            writeln!(f, "  [Add to Order] (disabled)")?;
        }

        if let Some(section) = &self.order {
            writeln!(f)?;
            writeln!(f, "Order Items")?;
            for (i, line) in section.lines.iter().enumerate() {
                writeln!(
                    f,
                    "  {:>2}) {:<18} {:<14} {:>10}  [remove]",
                    i + 1,
                    line.name,
                    line.detail,
                    line.subtotal
                )?;
            }
            writeln!(f, "  {}", "-".repeat(56))?;
            writeln!(f, "  {:<36} {:>10}", "Total", section.total)?;
        }

        Ok(())
    }
}
