//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`MockClient`] to queue the responses a fake actor should give, hand its
//! client to the code under test, then call [`MockClient::verify`].
//! [`create_mock_client`] is the low-level variant that exposes the raw receiver.

use crate::framework::{ActorEntity, FrameworkError, StateClient, StateRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response to send back.
enum Expectation<T: ActorEntity> {
    Dispatch {
        response: Result<T::Outcome, FrameworkError>,
    },
    Render {
        response: Result<T::View, FrameworkError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<OrderDesk>::new();
/// mock.expect_dispatch().return_ok(DeskOutcome::NameDraftUpdated);
/// mock.expect_render().return_ok(view);
///
/// let client = DeskClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorEntity> {
    client: StateClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    // Requests seen by the fake actor, for assertions on what was sent.
    received: Arc<Mutex<Vec<T::Event>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StateRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let received = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let received_clone = received.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                // Guard is a temporary: released before the next await
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (StateRequest::Dispatch { event, respond_to }, Some(Expectation::Dispatch { response })) => {
                        received_clone.lock().unwrap().push(event);
                        let _ = respond_to.send(response);
                    }
                    (StateRequest::Render { respond_to }, Some(Expectation::Render { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StateClient::new(sender),
            expectations,
            received,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StateClient<T> {
        self.client.clone()
    }

    /// Expects a `dispatch` operation.
    pub fn expect_dispatch(&mut self) -> DispatchExpectationBuilder<T> {
        DispatchExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `render` operation.
    pub fn expect_render(&mut self) -> RenderExpectationBuilder<T> {
        RenderExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Takes the events dispatched so far, oldest first.
    pub fn take_received(&self) -> Vec<T::Event> {
        std::mem::take(&mut *self.received.lock().unwrap())
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `dispatch` expectations.
pub struct DispatchExpectationBuilder<T: ActorEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> DispatchExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, outcome: T::Outcome) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Dispatch {
            response: Ok(outcome),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Dispatch {
            response: Err(error),
        });
    }
}

/// Builder for `render` expectations.
pub struct RenderExpectationBuilder<T: ActorEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> RenderExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, view: T::View) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Render { response: Ok(view) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Render {
            response: Err(error),
        });
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// Instead of spinning up a real [`StateActor`](crate::framework::StateActor), the
/// client sends into a channel the test controls. The test reads each request,
/// asserts on it, and answers through the embedded `respond_to` sender.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (StateClient<T>, mpsc::Receiver<StateRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StateClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Dispatch request
pub async fn expect_dispatch<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<StateRequest<T>>,
) -> Option<(T::Event, tokio::sync::oneshot::Sender<Result<T::Outcome, FrameworkError>>)> {
    match receiver.recv().await {
        Some(StateRequest::Dispatch { event, respond_to }) => Some((event, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::convert::Infallible;

    #[derive(Debug)]
    struct Echo;

    #[async_trait]
    impl ActorEntity for Echo {
        type Event = String;
        type Outcome = usize;
        type View = &'static str;
        type Context = ();
        type Error = Infallible;

        async fn handle_event(&mut self, event: String, _ctx: &()) -> Result<usize, Infallible> {
            Ok(event.len())
        }

        fn render(&self) -> &'static str {
            "echo"
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Echo>(10);

        let dispatch_task = tokio::spawn(async move { client.dispatch("hello".to_string()).await });

        let (event, responder) = expect_dispatch(&mut receiver)
            .await
            .expect("Expected Dispatch request");
        assert_eq!(event, "hello");
        responder.send(Ok(42)).unwrap();

        let result = dispatch_task.await.unwrap();
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Echo>::new();

        mock.expect_dispatch().return_ok(3);
        mock.expect_render().return_ok("mocked");
        mock.expect_dispatch().return_err(FrameworkError::ActorDropped);

        let client = mock.client();

        assert_eq!(client.dispatch("abc".to_string()).await.unwrap(), 3);
        assert_eq!(client.render().await.unwrap(), "mocked");
        assert!(matches!(
            client.dispatch("x".to_string()).await,
            Err(FrameworkError::ActorDropped)
        ));

        assert_eq!(mock.take_received(), vec!["abc".to_string(), "x".to_string()]);
        mock.verify();
    }
}
