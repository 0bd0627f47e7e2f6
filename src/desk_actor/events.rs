//! Events for the order desk.
//!
//! Every user gesture on the widget (typing in the name field, picking an item,
//! pressing a button) arrives as one [`DeskEvent`] and is answered with one
//! [`DeskOutcome`]. Events are handled by
//! [`ActorEntity::handle_event`](crate::framework::ActorEntity::handle_event).

use crate::model::{ItemKey, LineId, Quantity};

/// User input to the order desk.
#[derive(Debug, Clone, PartialEq)]
pub enum DeskEvent {
    /// Replaces the uncommitted customer name text.
    EditName(String),
    /// The explicit "Set" control next to the name field.
    ConfirmName,
    /// A key pressed while the name field has focus.
    NameFieldKey(KeyPress),
    /// Picks an item from the selector, or `None` for the placeholder.
    SelectItem(Option<ItemKey>),
    /// Raw text from the quantity field.
    SetQuantity(String),
    /// The "Add to Order" control.
    AddToOrder,
    /// The remove control on one order line.
    RemoveLine(LineId),
}

/// Keys the name field reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    /// Commits the draft, same as the "Set" control.
    Enter,
    Char(char),
}

/// What an event did to the desk.
#[derive(Debug, Clone, PartialEq)]
pub enum DeskOutcome {
    NameDraftUpdated,
    /// The trimmed name now shown as the customer.
    NameCommitted(String),
    /// The selector now points at this item, or at nothing.
    SelectionChanged(Option<ItemKey>),
    QuantityStaged(Quantity),
    LineAdded(LineId),
    LineRemoved(LineId),
    /// The event was valid input but had nothing to act on.
    Ignored(IgnoreReason),
}

/// Why an event left the desk unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum IgnoreReason {
    /// The name draft was empty after trimming.
    BlankName,
    /// No item is selected.
    NoSelection,
    /// No line has this id (already removed, or never existed).
    UnknownLine(LineId),
    /// The name field does not bind this key.
    UnboundKey(KeyPress),
}
