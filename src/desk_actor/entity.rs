//! The order desk state container and its [`ActorEntity`] implementation.
//!
//! [`OrderDesk`] owns everything the widget shows: the catalog and its
//! category index, the customer name and its draft, the pending selection, and
//! the order. Each `DeskEvent` maps to exactly one method here; the actor only
//! routes events and renders.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::convert::Infallible;
use tracing::{debug, info};

use super::events::{DeskEvent, DeskOutcome, IgnoreReason, KeyPress};
use crate::framework::ActorEntity;
use crate::model::{Catalog, CategoryIndex, ItemKey, LineId, Order, Quantity, Selection};
use crate::view::DeskView;

#[derive(Debug, Clone)]
pub struct OrderDesk {
    catalog: Catalog,
    // Built once: the catalog never changes after construction.
    index: CategoryIndex,
    name_draft: String,
    customer: Option<String>,
    selection: Selection,
    order: Order,
}

impl OrderDesk {
    pub fn new(catalog: Catalog) -> Self {
        let index = catalog.index();
        Self {
            catalog,
            index,
            name_draft: String::new(),
            customer: None,
            selection: Selection::default(),
            order: Order::new(),
        }
    }

    // --- Customer name ---

    pub fn update_name_draft(&mut self, text: impl Into<String>) -> DeskOutcome {
        self.name_draft = text.into();
        DeskOutcome::NameDraftUpdated
    }

    /// Commits the trimmed draft as the customer name and clears the draft.
    /// A blank draft changes nothing, not even the draft itself.
    pub fn confirm_name(&mut self) -> DeskOutcome {
        let trimmed = self.name_draft.trim();
        if trimmed.is_empty() {
            debug!("Blank name ignored");
            return DeskOutcome::Ignored(IgnoreReason::BlankName);
        }
        let name = trimmed.to_string();
        self.customer = Some(name.clone());
        self.name_draft.clear();
        DeskOutcome::NameCommitted(name)
    }

    /// Enter in the name field goes through [`OrderDesk::confirm_name`].
    pub fn name_key(&mut self, key: KeyPress) -> DeskOutcome {
        match key {
            KeyPress::Enter => self.confirm_name(),
            other => DeskOutcome::Ignored(IgnoreReason::UnboundKey(other)),
        }
    }

    // --- Selection ---

    /// Points the selector at `key`. `None`, or a key that is not on the menu,
    /// returns to idle and resets the quantity.
    pub fn select_item(&mut self, key: Option<&ItemKey>) -> DeskOutcome {
        match key.and_then(|k| self.catalog.find(k)) {
            Some(item) => {
                let key = item.key();
                self.selection.choose(item.clone());
                DeskOutcome::SelectionChanged(Some(key))
            }
            None => {
                self.selection.clear();
                DeskOutcome::SelectionChanged(None)
            }
        }
    }

    /// Stages a quantity from raw field text. Bad input becomes 1. Works with
    /// or without an item chosen.
    pub fn set_quantity(&mut self, input: &str) -> DeskOutcome {
        let quantity = Quantity::parse_lenient(input);
        self.selection.set_quantity(quantity);
        DeskOutcome::QuantityStaged(quantity)
    }

    /// Whether "Add to Order" is available.
    pub fn can_add(&self) -> bool {
        !self.selection.is_idle()
    }

    /// Moves the selection into the order as a new line and returns to idle.
    pub fn confirm_add(&mut self) -> DeskOutcome {
        match self.selection.take() {
            Some((item, quantity)) => {
                let id = self.order.add(&item, quantity);
                DeskOutcome::LineAdded(id)
            }
            None => DeskOutcome::Ignored(IgnoreReason::NoSelection),
        }
    }

    // --- Order ---

    pub fn remove_line(&mut self, id: LineId) -> DeskOutcome {
        match self.order.remove(id) {
            Some(_) => DeskOutcome::LineRemoved(id),
            None => DeskOutcome::Ignored(IgnoreReason::UnknownLine(id)),
        }
    }

    pub fn total(&self) -> Decimal {
        self.order.total()
    }

    /// Routes one event to its handler.
    pub fn apply(&mut self, event: DeskEvent) -> DeskOutcome {
        match event {
            DeskEvent::EditName(text) => self.update_name_draft(text),
            DeskEvent::ConfirmName => self.confirm_name(),
            DeskEvent::NameFieldKey(key) => self.name_key(key),
            DeskEvent::SelectItem(key) => self.select_item(key.as_ref()),
            DeskEvent::SetQuantity(input) => self.set_quantity(&input),
            DeskEvent::AddToOrder => self.confirm_add(),
            DeskEvent::RemoveLine(id) => self.remove_line(id),
        }
    }

    // --- Read access for rendering ---

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn index(&self) -> &CategoryIndex {
        &self.index
    }

    pub fn name_draft(&self) -> &str {
        &self.name_draft
    }

    pub fn customer(&self) -> Option<&str> {
        self.customer.as_deref()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn order(&self) -> &Order {
        &self.order
    }
}

#[async_trait]
impl ActorEntity for OrderDesk {
    type Event = DeskEvent;
    type Outcome = DeskOutcome;
    type View = DeskView;
    type Context = ();
    type Error = Infallible;

    async fn on_start(&mut self, _ctx: &()) -> Result<(), Infallible> {
        info!(
            items = self.catalog.len(),
            categories = self.index.categories().count(),
            "Menu loaded"
        );
        Ok(())
    }

    async fn handle_event(&mut self, event: DeskEvent, _ctx: &()) -> Result<DeskOutcome, Infallible> {
        Ok(self.apply(event))
    }

    fn render(&self) -> DeskView {
        DeskView::build(self)
    }
}
