//! Plain data for the order desk: menu, pending selection, and order lines.

pub mod menu;
pub mod money;
pub mod order;
pub mod selection;

pub use menu::*;
pub use money::*;
pub use order::*;
pub use selection::*;
