//! Line-oriented terminal front end for the order desk.

pub mod command;
pub mod session;

pub use command::*;
pub use session::*;
