use crate::framework::{ActorEntity, FrameworkError, StateClient};
use async_trait::async_trait;

/// Trait for component-specific clients to inherit the standard operations.
///
/// This trait reduces boilerplate by providing default implementations for
/// `dispatch` and `render` on top of the generic [`StateClient`].
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The component-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic StateClient.
    fn inner(&self) -> &StateClient<T>;

    /// Map framework errors to the specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Send one event and wait for its outcome.
    #[tracing::instrument(skip(self))]
    async fn dispatch(&self, event: T::Event) -> Result<T::Outcome, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().dispatch(event).await.map_err(Self::map_error)
    }

    /// Fetch a fresh view of the component.
    #[tracing::instrument(skip(self))]
    async fn render(&self) -> Result<T::View, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().render().await.map_err(Self::map_error)
    }
}
