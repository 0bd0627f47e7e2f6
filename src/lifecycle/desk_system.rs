use tracing::{error, info};

use crate::clients::DeskClient;
use crate::lifecycle::DeskConfig;

/// The runtime orchestrator for the order desk.
///
/// `DeskSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the desk actor
/// - **Wiring**: Building the catalog from config and handing out the client
///
/// # Example
///
/// ```ignore
/// let system = DeskSystem::new(&DeskConfig::default());
///
/// system.desk_client.select_item(Some(ItemKey::new("Beer", "Beer"))).await?;
/// system.desk_client.add_to_order().await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct DeskSystem {
    /// Client for interacting with the Desk actor
    pub desk_client: DeskClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl DeskSystem {
    /// Creates the desk actor from `config` and spawns it.
    ///
    /// Must be called from inside a Tokio runtime.
    pub fn new(config: &DeskConfig) -> Self {
        let (desk_actor, desk_client) = crate::desk_actor::new(config.buffer_size, config.catalog());

        // The desk has no dependencies (Context = ())
        let desk_handle = tokio::spawn(desk_actor.run(()));

        Self {
            desk_client,
            handles: vec![desk_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the client, which closes the actor's channel, then waits for the
    /// actor task to finish. Clones of the client held elsewhere keep the actor
    /// alive until they are dropped too.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.desk_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
