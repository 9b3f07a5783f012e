//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_delete_where`] to assert behavior.

use tokio::sync::mpsc;

use crate::actor_framework::{Entity, Filter, FrameworkError, ResourceClient, ResourceRequest, Response};

/// Creates a mock client and a receiver for asserting requests.
///
/// The client sends to a channel the test owns instead of a running
/// `ResourceActor`, so the test decides every response.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreatePayload, Response<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Response<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a DeleteWhere request
pub async fn expect_delete_where<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Filter<T>, Response<Vec<T::Id>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::DeleteWhere { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

/// Answers the next Get with `row`, asserting the requested id.
pub async fn respond_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>, id: T::Id, row: Option<T>) {
    let (requested, responder) = expect_get(receiver).await.expect("Expected Get request");
    assert_eq!(requested, id);
    let _ = responder.send(Ok(row));
}

/// Fails the next request of any kind with `err`.
pub async fn fail_next<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>, err: FrameworkError) {
    match receiver.recv().await {
        Some(ResourceRequest::Create { respond_to, .. }) => drop(respond_to.send(Err(err))),
        Some(ResourceRequest::Get { respond_to, .. }) => drop(respond_to.send(Err(err))),
        Some(ResourceRequest::List { respond_to, .. }) => drop(respond_to.send(Err(err))),
        Some(ResourceRequest::Update { respond_to, .. }) => drop(respond_to.send(Err(err))),
        Some(ResourceRequest::Delete { respond_to, .. }) => drop(respond_to.send(Err(err))),
        Some(ResourceRequest::DeleteWhere { respond_to, .. }) => drop(respond_to.send(Err(err))),
        None => panic!("Expected a request"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Product, ProductId};
    use crate::product_actor::ProductCreate;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Product>(10);

        let create_task = tokio::spawn(async move { client.create(ProductCreate::new("Mug", dec!(9.99), 10)).await });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.name, "Mug");
        responder.send(Ok(ProductId(1))).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(ProductId(1)));
    }

    #[tokio::test]
    async fn test_dropped_responder_reports_actor_dropped() {
        let (client, mut receiver) = create_mock_client::<Product>(10);

        let get_task = tokio::spawn(async move { client.get(ProductId(1)).await });
        let (_, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        drop(responder);

        assert_eq!(get_task.await.unwrap(), Err(FrameworkError::ActorDropped));
    }
}
