//! Type-safe wrappers around [`StateClient`](crate::framework::StateClient).

pub mod actor_client;
pub mod desk_client;

pub use actor_client::*;
pub use desk_client::*;
