//! Order desk state, its events, and the actor factory.

pub mod entity;
pub mod error;
pub mod events;

pub use entity::*;
pub use error::*;
pub use events::*;

use crate::clients::DeskClient;
use crate::framework::StateActor;
use crate::model::Catalog;

/// Creates a new Desk actor and its client.
pub fn new(buffer_size: usize, catalog: Catalog) -> (StateActor<OrderDesk>, DeskClient) {
    let (actor, generic_client) = StateActor::new(buffer_size, OrderDesk::new(catalog));
    let client = DeskClient::new(generic_client);

    (actor, client)
}
