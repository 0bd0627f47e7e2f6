//! The item being prepared for the order and its staged quantity.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::num::NonZeroU32;

use crate::model::MenuItem;

/// How many of an item to add. Always between one and [`Quantity::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    pub const ONE: Quantity = Quantity(NonZeroU32::MIN);

    /// Largest quantity a single line can carry.
    pub const MAX: Quantity = match NonZeroU32::new(9999) {
        Some(n) => Quantity(n),
        None => Quantity::ONE,
    };

    /// Clamps any integer into `1..=Quantity::MAX`.
    pub fn clamped(n: i64) -> Self {
        let n = n.clamp(1, i64::from(Self::MAX.get()));
        u32::try_from(n)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .unwrap_or(Self::ONE)
    }

    /// Reads a quantity field the way a forgiving number input does.
    ///
    /// Leading whitespace and one optional sign are skipped, then the leading
    /// run of ASCII digits is taken. Trailing text is ignored (`"3 beers"` is 3).
    /// No digits at all, or a result `<= 0`, gives 1.
    pub fn parse_lenient(input: &str) -> Self {
        let trimmed = input.trim_start();
        let (negative, rest) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if negative || digits_len == 0 {
            return Self::ONE;
        }
        // A digit run too long for u64 is still a large positive number
        let value = rest[..digits_len].parse::<u64>().unwrap_or(u64::MAX);
        Self::clamped(i64::try_from(value).unwrap_or(i64::MAX))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The pending selection: nothing chosen, or one item.
///
/// The quantity field exists in both states. A value typed while `Idle` is
/// carried into the next item chosen.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Idle { quantity: Quantity },
    Selecting { item: MenuItem, quantity: Quantity },
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Idle {
            quantity: Quantity::ONE,
        }
    }
}

impl Selection {
    /// Chooses `item`, keeping whatever quantity is staged.
    pub fn choose(&mut self, item: MenuItem) {
        let quantity = self.quantity();
        *self = Selection::Selecting { item, quantity };
    }

    /// Back to `Idle` with the default quantity.
    pub fn clear(&mut self) {
        *self = Selection::default();
    }

    pub fn set_quantity(&mut self, new_quantity: Quantity) {
        match self {
            Selection::Idle { quantity } | Selection::Selecting { quantity, .. } => {
                *quantity = new_quantity;
            }
        }
    }

    /// Takes the chosen item and its quantity, resetting to the default.
    /// While `Idle` nothing is taken and the staged quantity stays.
    pub fn take(&mut self) -> Option<(MenuItem, Quantity)> {
        if self.is_idle() {
            return None;
        }
        match std::mem::take(self) {
            Selection::Idle { .. } => None,
            Selection::Selecting { item, quantity } => Some((item, quantity)),
        }
    }

    pub fn item(&self) -> Option<&MenuItem> {
        match self {
            Selection::Idle { .. } => None,
            Selection::Selecting { item, .. } => Some(item),
        }
    }

    /// The quantity shown in the field.
    pub fn quantity(&self) -> Quantity {
        match self {
            Selection::Idle { quantity } | Selection::Selecting { quantity, .. } => *quantity,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle { .. })
    }
}
