use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

use crate::error::ValidationError;

// =============================================================================
// 1. THE ABSTRACTION (Entity trait with lifecycle hooks)
// =============================================================================

/// Trait that any table row must implement to be managed by [`ResourceActor`].
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Copy + Eq + Ord + Hash + Send + Sync + Display + Debug;
    type CreatePayload: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;

    /// Table name, used in logs and errors.
    const TABLE: &'static str;

    fn id(&self) -> Self::Id;

    /// Validate the payload and build the full row under the given id.
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, ValidationError>;

    // --- Lifecycle Hooks ---

    /// Apply a patch in place. Runs against a copy of the stored row, so an
    /// error leaves the stored row untouched.
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), ValidationError>;

    fn on_delete(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

/// Errors produced by the record store itself.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("{table} {id} not found")]
    NotFound { table: &'static str, id: String },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Row predicate evaluated inside the actor.
pub type Filter<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: Option<Filter<T>>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    DeleteWhere {
        filter: Filter<T>,
        respond_to: Response<Vec<T::Id>>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    #[instrument(name = "resource_actor", skip(self), fields(table = T::TABLE))]
    pub async fn run(mut self) {
        info!("ResourceActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let _ = respond_to.send(self.handle_create(payload));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.get(&id).cloned()));
                }
                ResourceRequest::List { filter, respond_to } => {
                    let _ = respond_to.send(Ok(self.handle_list(filter)));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(id, patch));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(id));
                }
                ResourceRequest::DeleteWhere { filter, respond_to } => {
                    let _ = respond_to.send(Ok(self.handle_delete_where(filter)));
                }
            }
        }
        info!(rows = self.store.len(), "ResourceActor stopped");
    }

    fn handle_create(&mut self, payload: T::CreatePayload) -> Result<T::Id, FrameworkError> {
        let id = (self.next_id_fn)();
        let item = T::from_create(id, payload).inspect_err(|e| warn!(error = %e, "Create rejected"))?;
        self.store.insert(id, item);
        debug!(%id, "Row created");
        Ok(id)
    }

    fn handle_list(&self, filter: Option<Filter<T>>) -> Vec<T> {
        let mut rows: Vec<T> = self
            .store
            .values()
            .filter(|item| filter.as_ref().map_or(true, |f| f(item)))
            .cloned()
            .collect();
        rows.sort_by_key(|item| item.id());
        rows
    }

    fn handle_update(&mut self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        let item = self.store.get_mut(&id).ok_or_else(|| not_found::<T>(id))?;
        let mut draft = item.clone();
        draft.on_update(patch).inspect_err(|e| warn!(%id, error = %e, "Update rejected"))?;
        *item = draft;
        debug!(%id, "Row updated");
        Ok(item.clone())
    }

    fn handle_delete(&mut self, id: T::Id) -> Result<(), FrameworkError> {
        let item = self.store.get(&id).ok_or_else(|| not_found::<T>(id))?;
        item.on_delete()?;
        self.store.remove(&id);
        debug!(%id, "Row deleted");
        Ok(())
    }

    fn handle_delete_where(&mut self, filter: Filter<T>) -> Vec<T::Id> {
        let mut removed: Vec<T::Id> = self
            .store
            .values()
            .filter(|item| filter(item))
            .filter(|item| match item.on_delete() {
                Ok(()) => true,
                Err(e) => {
                    warn!(id = %item.id(), error = %e, "Row kept: delete vetoed");
                    false
                }
            })
            .map(Entity::id)
            .collect();
        removed.sort();
        for id in &removed {
            self.store.remove(id);
        }
        debug!(count = removed.len(), "Rows deleted");
        removed
    }
}

fn not_found<T: Entity>(id: T::Id) -> FrameworkError {
    FrameworkError::NotFound {
        table: T::TABLE,
        id: id.to_string(),
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { payload, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    /// Every row, ordered by id.
    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { filter: None, respond_to })
            .await
    }

    /// Rows matching `filter`, ordered by id.
    pub async fn list_where(
        &self,
        filter: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List {
            filter: Some(Box::new(filter)),
            respond_to,
        })
        .await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to })
            .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    /// Removes every row matching `filter` and returns their ids.
    pub async fn delete_where(
        &self,
        filter: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Result<Vec<T::Id>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::DeleteWhere {
            filter: Box::new(filter),
            respond_to,
        })
        .await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Tag {
        id: u64,
        label: String,
        locked: bool,
    }

    #[derive(Debug)]
    struct TagCreate {
        label: String,
    }

    #[derive(Debug)]
    struct TagPatch {
        label: Option<String>,
        locked: Option<bool>,
    }

    impl Entity for Tag {
        type Id = u64;
        type CreatePayload = TagCreate;
        type Patch = TagPatch;

        const TABLE: &'static str = "tag";

        fn id(&self) -> u64 {
            self.id
        }

        fn from_create(id: u64, payload: TagCreate) -> Result<Self, ValidationError> {
            if payload.label.is_empty() {
                return Err(ValidationError::Required { field: "label" });
            }
            Ok(Self {
                id,
                label: payload.label,
                locked: false,
            })
        }

        fn on_update(&mut self, patch: TagPatch) -> Result<(), ValidationError> {
            if let Some(locked) = patch.locked {
                self.locked = locked;
            }
            if let Some(label) = patch.label {
                if label.is_empty() {
                    return Err(ValidationError::Required { field: "label" });
                }
                self.label = label;
            }
            Ok(())
        }

        fn on_delete(&self) -> Result<(), ValidationError> {
            if self.locked {
                return Err(ValidationError::Required { field: "unlocked" });
            }
            Ok(())
        }
    }

    fn start() -> ResourceClient<Tag> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || counter.fetch_add(1, Ordering::SeqCst);
        let (actor, client) = ResourceActor::new(10, next_id);
        tokio::spawn(actor.run());
        client
    }

    fn tag(label: &str) -> TagCreate {
        TagCreate { label: label.into() }
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_create_get_list() {
        let client = start();

        let a = client.create(tag("a")).await.unwrap();
        let b = client.create(tag("b")).await.unwrap();
        assert_eq!((a, b), (1, 2));

        let err = client.create(tag("")).await.unwrap_err();
        assert_eq!(err, FrameworkError::Validation(ValidationError::Required { field: "label" }));

        assert_eq!(client.get(a).await.unwrap().unwrap().label, "a");
        assert_eq!(client.get(99).await.unwrap(), None);

        let labels: Vec<String> = client.list().await.unwrap().into_iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_failed_update_leaves_row_unchanged() {
        let client = start();
        let id = client.create(tag("a")).await.unwrap();

        // `locked` would be applied before the label check fails.
        let patch = TagPatch {
            label: Some(String::new()),
            locked: Some(true),
        };
        assert!(client.update(id, patch).await.is_err());

        let stored = client.get(id).await.unwrap().unwrap();
        assert_eq!(stored, Tag { id, label: "a".into(), locked: false });

        let err = client.update(42, TagPatch { label: None, locked: None }).await.unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound { table: "tag", .. }));
    }

    #[tokio::test]
    async fn test_delete_respects_hook() {
        let client = start();
        let id = client.create(tag("a")).await.unwrap();
        client
            .update(id, TagPatch { label: None, locked: Some(true) })
            .await
            .unwrap();

        assert!(client.delete(id).await.is_err());
        assert!(client.get(id).await.unwrap().is_some());

        client
            .update(id, TagPatch { label: None, locked: Some(false) })
            .await
            .unwrap();
        client.delete(id).await.unwrap();
        assert!(client.get(id).await.unwrap().is_none());
        assert!(matches!(client.delete(id).await, Err(FrameworkError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_where_and_list_where() {
        let client = start();
        for label in ["keep", "drop", "drop", "keep"] {
            client.create(tag(label)).await.unwrap();
        }

        let dropped = client.list_where(|t: &Tag| t.label == "drop").await.unwrap();
        assert_eq!(dropped.len(), 2);

        let removed = client.delete_where(|t: &Tag| t.label == "drop").await.unwrap();
        assert_eq!(removed, vec![2, 3]);

        let remaining: Vec<u64> = client.list().await.unwrap().iter().map(Tag::id).collect();
        assert_eq!(remaining, vec![1, 4]);
    }

    #[tokio::test]
    async fn test_delete_where_keeps_vetoed_rows() {
        let client = start();
        let open = client.create(tag("drop")).await.unwrap();
        let locked = client.create(tag("drop")).await.unwrap();
        client
            .update(locked, TagPatch { label: None, locked: Some(true) })
            .await
            .unwrap();

        let removed = client.delete_where(|t: &Tag| t.label == "drop").await.unwrap();
        assert_eq!(removed, vec![open]);
        assert!(client.get(locked).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_closed_actor_reports_error() {
        let (actor, client) = ResourceActor::<Tag>::new(1, || 1);
        drop(actor);
        assert_eq!(client.get(1).await, Err(FrameworkError::ActorClosed));
    }
}
