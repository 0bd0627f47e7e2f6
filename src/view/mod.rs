//! What the order desk looks like from the outside.

pub mod render;

pub use render::*;
