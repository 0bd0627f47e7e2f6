//! # System Lifecycle
//!
//! Starting, configuring, and stopping the order desk.
//!
//! - [`DeskConfig`] - the configuration layer (menu and channel size)
//! - [`DeskSystem`] - spawns the desk actor and shuts it down
//! - [`setup_tracing`] - installs the log subscriber
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - `DeskSystem::shutdown` joins the task

pub mod config;
pub mod desk_system;
pub mod tracing;

pub use config::*;
pub use desk_system::*;
pub use self::tracing::*;
