//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a
//! queue of expectations instead of a running store. It lets you test the logic *around* a
//! client (error mapping, payload conversion, HTTP rendering) without spawning any actors.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | No real state (expectations) | Real ordered store |
//! | **Use Case** | Unit testing logic *around* the client | Testing the store itself or full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Testing Failure Scenarios
//!
//! ```rust
//! use workforce_actor::mock::MockClient;
//! use workforce_actor::{ActorEntity, FrameworkError};
//!
//! #[derive(Clone, Debug)] struct Tag { id: u32 }
//!
//! impl ActorEntity for Tag {
//!     type Id = u32; type Create = (); type Update = ();
//!     type Filter = std::convert::Infallible;
//!     fn from_create_params(id: u32, _: ()) -> Self { Self { id } }
//!     fn id(&self) -> &u32 { &self.id }
//!     fn on_update(&mut self, _: ()) {}
//!     fn matches(&self, filter: &Self::Filter) -> bool { match *filter {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Tag>::new();
//!     let client = mock.client();
//!
//!     // Simulate a stopped store
//!     mock.expect_get(1).return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.get(1).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and a receiver and answer requests by hand,
//! or use the fluent [`MockClient`] API.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::query::ListQuery;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

type QueryCheck<F> = Box<dyn Fn(&ListQuery<F>) -> bool + Send>;

/// An expected request to the mock client and the response it gets.
enum Expectation<T: ActorEntity> {
    Create {
        response: Result<T, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    List {
        check: Option<QueryCheck<T::Filter>>,
        response: Result<Vec<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Clear {
        response: Result<(), FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next
/// expectation (wrong kind, wrong ID, or a list query rejected by its check) panics the
/// mock task, which surfaces in the test as an `ActorDropped` error on the client side.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::List { query, respond_to },
                        Some(Expectation::List { check, response }),
                    ) if check.as_ref().map_or(true, |check| check(&query)) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Clear { respond_to }, Some(Expectation::Clear { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Create {
            response,
        })
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Get {
            id,
            response,
        })
    }

    /// Expects a `list` operation with any query.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::List {
            check: None,
            response,
        })
    }

    /// Expects a `list` operation whose query satisfies `check`.
    pub fn expect_list_where(
        &mut self,
        check: impl Fn(&ListQuery<T::Filter>) -> bool + Send + 'static,
    ) -> ExpectationBuilder<T, Vec<T>> {
        let check: QueryCheck<T::Filter> = Box::new(check);
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::List {
            check: Some(check),
            response,
        })
    }

    /// Expects an `update` operation for `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Update {
            id,
            response,
        })
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(&self.expectations, move |response| Expectation::Delete {
            id,
            response,
        })
    }

    /// Expects a `clear` operation.
    pub fn expect_clear(&mut self) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Clear { response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder that records the response for one expectation.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Expectations<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: &Expectations<T>,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations: expectations.clone(),
            build: Box::new(build),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.build)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// The client sends messages to a channel the test controls (`receiver`), so the test can
/// inspect each request and answer it with either a success or a failure.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    ListQuery<T::Filter>,
    oneshot::Sender<Result<Vec<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<(), FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Page;

    #[derive(Clone, Debug, PartialEq)]
    struct Team {
        id: u32,
        name: String,
    }

    impl ActorEntity for Team {
        type Id = u32;
        type Create = String;
        type Update = String;
        type Filter = std::convert::Infallible;

        fn from_create_params(id: u32, name: String) -> Self {
            Self { id, name }
        }
        fn id(&self) -> &u32 {
            &self.id
        }
        fn on_update(&mut self, name: String) {
            self.name = name;
        }
        fn matches(&self, filter: &Self::Filter) -> bool {
            match *filter {}
        }
    }

    fn team(id: u32, name: &str) -> Team {
        Team::from_create_params(id, name.to_string())
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Team>(10);

        let create_task = tokio::spawn(async move { client.create("Core".to_string()).await });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload, "Core");
        responder.send(Ok(team(0, "Core"))).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result.unwrap(), team(0, "Core"));
    }

    #[tokio::test]
    async fn test_list_request_carries_query() {
        let (client, mut receiver) = create_mock_client::<Team>(10);

        let list_task =
            tokio::spawn(async move { client.list(ListQuery::paged(Page::new(2, 3))).await });

        let (query, responder) = expect_list(&mut receiver)
            .await
            .expect("Expected List request");
        assert_eq!(query.page, Some(Page::new(2, 3)));
        assert!(query.filter.is_none());
        responder.send(Ok(vec![team(3, "Ops")])).unwrap();

        assert_eq!(list_task.await.unwrap().unwrap(), vec![team(3, "Ops")]);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Team>::new();

        mock.expect_create().return_ok(team(0, "Core"));
        mock.expect_get(0).return_ok(team(0, "Core"));
        mock.expect_update(0).return_ok(team(0, "Platform"));
        mock.expect_delete(0).return_ok(());
        mock.expect_get(0)
            .return_err(FrameworkError::NotFound("0".to_string()));

        let client = mock.client();

        let created = client.create("Core".to_string()).await.unwrap();
        assert_eq!(created.id, 0);

        let fetched = client.get(0).await.unwrap();
        assert_eq!(fetched.name, "Core");

        let updated = client.update(0, "Platform".to_string()).await.unwrap();
        assert_eq!(updated.name, "Platform");

        client.delete(0).await.unwrap();
        assert_eq!(
            client.get(0).await,
            Err(FrameworkError::NotFound("0".to_string()))
        );

        mock.verify();
    }

    #[tokio::test]
    async fn test_list_and_clear_expectations() {
        let mut mock = MockClient::<Team>::new();
        mock.expect_list_where(|query| query.page == Some(Page::new(2, 3)))
            .return_ok(vec![team(3, "Ops")]);
        mock.expect_list().return_ok(vec![]);
        mock.expect_clear().return_ok(());

        let client = mock.client();
        let page = client.list(ListQuery::paged(Page::new(2, 3))).await.unwrap();
        assert_eq!(page, vec![team(3, "Ops")]);
        assert!(client.list(ListQuery::all()).await.unwrap().is_empty());
        client.clear().await.unwrap();

        mock.verify();
    }

    #[tokio::test]
    async fn test_list_with_unexpected_query_drops_response() {
        let mut mock = MockClient::<Team>::new();
        mock.expect_list_where(|query| query.page.is_some())
            .return_ok(vec![]);

        let result = mock.client().list(ListQuery::all()).await;
        assert_eq!(result, Err(FrameworkError::ActorDropped));
    }

    #[tokio::test]
    async fn test_mismatched_request_drops_response() {
        let mut mock = MockClient::<Team>::new();
        mock.expect_get(1).return_ok(team(1, "Core"));

        let result = mock.client().get(2).await;
        assert_eq!(result, Err(FrameworkError::ActorDropped));
    }
}
