//! Generic actor framework for a single stateful component.
//!
//! This module provides the building blocks for driving one piece of state
//! through typed events from any number of async callers.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait the component implements
//! - [`StateActor`] - Generic actor that owns the component
//! - [`StateClient`] - Type-safe client for sending requests
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning a real actor.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
