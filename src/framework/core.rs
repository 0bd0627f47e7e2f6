//! # Core Actor Framework
//!
//! This module defines the generic building blocks for the single-state actor.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait that a stateful component must implement.
//! - [`StateActor`]: The generic actor that owns one component and applies events to it.
//! - [`StateClient`]: The generic client for communicating with the actor.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, ActorDropped).

use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};
use async_trait::async_trait;

// =============================================================================
// 1. THE ABSTRACTION (Trait with Hooks, Events, and Views)
// =============================================================================

/// Trait that a stateful component must implement to be driven by a [`StateActor`].
///
/// # Architecture Note
/// The actor loop is written *once* against this contract. A component only says
/// which events it accepts, what each event reports back, and how its current
/// state is rendered. Associated types keep every message typed: the compiler
/// refuses a `DeskEvent` sent to an actor that owns something else.
///
/// # Provided Methods (Hooks)
/// - [`ActorEntity::on_start`] runs once before the first event is handled.
///
/// The default implementation does nothing (`Ok(())`).
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks may await other clients. The `Context`
/// type is injected into every hook at `run()` time ("Late Binding").
#[async_trait]
pub trait ActorEntity: Send + 'static {
    /// Input produced by the user (a keystroke, a button press, a field edit).
    type Event: Send + Debug + 'static;

    /// What applying an event did. Returned to the caller of `dispatch`.
    type Outcome: Send + Debug + 'static;

    /// Immutable snapshot of the state, built fresh on each render request.
    type View: Send + Debug + 'static;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// Error raised by hooks. Use [`std::convert::Infallible`] when events cannot fail.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called once when the actor loop starts.
    async fn on_start(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply one event to completion.
    async fn handle_event(
        &mut self,
        event: Self::Event,
        ctx: &Self::Context,
    ) -> Result<Self::Outcome, Self::Error>;

    /// Build a view of the current state.
    fn render(&self) -> Self::View;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor.
///
/// There are only two things a caller can ask of a single-state component:
///
/// - **Dispatch**: apply an [`ActorEntity::Event`] and report the outcome.
/// - **Render**: read the current [`ActorEntity::View`] without changing anything.
#[derive(Debug)]
pub enum StateRequest<T: ActorEntity> {
    Dispatch {
        event: T::Event,
        respond_to: Response<T::Outcome>,
    },
    Render {
        respond_to: Response<T::View>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns exactly one component.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state and the
/// receiver end of the channel.
///
/// **Concurrency Model**:
/// Requests are processed *sequentially*: each event runs to completion before
/// the next one is received, so the state needs no `Mutex` or `RwLock`.
pub struct StateActor<T: ActorEntity> {
    receiver: mpsc::Receiver<StateRequest<T>>,
    state: T,
}

impl<T: ActorEntity> StateActor<T> {
    /// Creates the actor around `state` and returns it with its client.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. When it is full,
    /// client calls wait for space.
    pub fn new(buffer_size: usize, state: T) -> (Self, StateClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, state };
        let client = StateClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every hook. This allows the
    /// component to reach dependencies created *after* the actor was built but
    /// *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "OrderDesk" instead of the full path)
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        if let Err(e) = self.state.on_start(&context).await {
            warn!(entity_type, error = %e, "on_start failed");
        }

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StateRequest::Dispatch { event, respond_to } => {
                    debug!(entity_type, ?event, "Dispatch");
                    let result = self
                        .state
                        .handle_event(event, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(outcome) => info!(entity_type, ?outcome, "Event applied"),
                        Err(e) => warn!(entity_type, error = %e, "Event failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StateRequest::Render { respond_to } => {
                    debug!(entity_type, "Render");
                    let _ = respond_to.send(Ok(self.state.render()));
                }
            }
        }

        info!(entity_type, "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a [`StateActor`].
pub struct StateClient<T: ActorEntity> {
    sender: mpsc::Sender<StateRequest<T>>,
}

// Manual impl: `T` itself does not need to be `Clone`.
impl<T: ActorEntity> Clone for StateClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> StateClient<T> {
    pub fn new(sender: mpsc::Sender<StateRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn dispatch(&self, event: T::Event) -> Result<T::Outcome, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Dispatch { event, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn render(&self) -> Result<T::View, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Render { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    // --- Component Definition ---

    #[derive(Debug, Default)]
    struct Tally {
        count: i64,
        started: bool,
    }

    #[derive(Debug)]
    enum TallyEvent {
        Add(i64),
        Reset,
    }

    #[async_trait]
    impl ActorEntity for Tally {
        type Event = TallyEvent;
        type Outcome = i64;
        type View = (i64, bool);
        type Context = ();
        type Error = Infallible;

        async fn on_start(&mut self, _ctx: &()) -> Result<(), Infallible> {
            self.started = true;
            Ok(())
        }

        async fn handle_event(&mut self, event: TallyEvent, _ctx: &()) -> Result<i64, Infallible> {
            match event {
                TallyEvent::Add(n) => self.count += n,
                TallyEvent::Reset => self.count = 0,
            }
            Ok(self.count)
        }

        fn render(&self) -> (i64, bool) {
            (self.count, self.started)
        }
    }

    // --- Test ---

    #[tokio::test]
    async fn test_state_actor_applies_events_in_order() {
        let (actor, client) = StateActor::new(10, Tally::default());
        let handle = tokio::spawn(actor.run(()));

        assert_eq!(client.dispatch(TallyEvent::Add(2)).await.unwrap(), 2);
        assert_eq!(client.dispatch(TallyEvent::Add(5)).await.unwrap(), 7);

        let (count, started) = client.render().await.unwrap();
        assert_eq!(count, 7);
        assert!(started, "on_start should run before the first event");

        assert_eq!(client.dispatch(TallyEvent::Reset).await.unwrap(), 0);

        // Dropping the last client closes the channel and ends the loop
        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_dispatch_after_shutdown_reports_actor_closed() {
        let (actor, client) = StateActor::new(1, Tally::default());
        drop(actor);

        let result = client.dispatch(TallyEvent::Add(1)).await;
        assert!(matches!(result, Err(FrameworkError::ActorClosed)));
    }
}
