use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, Params, and Actions)
// =============================================================================

/// Trait that any domain record must implement to be managed by [`ResourceActor`].
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Ord + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;

    // --- Custom Actions ---
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    type Error: std::error::Error + Clone + Send + Sync + 'static;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from the allocated ID and creation params
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, Self::Error>;

    /// Fields whose values must be unique across the store, as `(field, value)` pairs.
    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// How the id appears in logs. `None` keeps it out of the logs entirely.
    fn log_id(&self) -> Option<String> {
        Some(self.id().to_string())
    }

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), Self::Error>;
    fn on_delete(&self) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler ---

    /// Handle a custom domain-specific action. A failing action must leave `self` untouched.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}

// =============================================================================
// 2. ERRORS
// =============================================================================

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError<E> {
    #[error("item not found: {0}")]
    NotFound(String),
    #[error("{field} already taken: {value}")]
    Conflict { field: &'static str, value: String },
    #[error("{0}")]
    Entity(E),
    #[error("batch rejected: {} item(s) failed", .0.len())]
    BatchRejected(Vec<BatchFailure<E>>),
    #[error("actor closed")]
    ActorClosed,
    #[error("actor dropped")]
    ActorDropped,
}

/// One failed step of a rejected batch.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchFailure<E> {
    /// Position of the action in the submitted batch.
    pub position: usize,
    /// Display form of the targeted entity id.
    pub key: String,
    pub error: FrameworkError<E>,
}

// =============================================================================
// 3. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T, E> = oneshot::Sender<Result<T, FrameworkError<E>>>;

/// Whether a batch that passes every check is written back to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchMode {
    Commit,
    DryRun,
}

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>, T::Error>,
    },
    List {
        respond_to: Response<Vec<T>, T::Error>,
    },
    FindUnique {
        field: &'static str,
        value: String,
        respond_to: Response<Option<T>, T::Error>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T, T::Error>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T, T::Error>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult, T::Error>,
    },
    Batch {
        actions: Vec<(T::Id, T::Action)>,
        mode: BatchMode,
        respond_to: Response<Vec<T::ActionResult>, T::Error>,
    },
}

// =============================================================================
// 4. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    name: &'static str,
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        name: &'static str,
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            name,
            receiver,
            store: BTreeMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs until every client handle has been dropped.
    pub async fn run(mut self) {
        info!(actor = self.name, "Actor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.handle_create(params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.get(&id).cloned()));
                }
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::FindUnique { field, value, respond_to } => {
                    let found = self
                        .store
                        .values()
                        .find(|item| item.unique_keys().iter().any(|(f, v)| *f == field && *v == value))
                        .cloned();
                    let _ = respond_to.send(Ok(found));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(id, patch));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(id));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let result = match self.store.get_mut(&id) {
                        Some(item) => item.handle_action(action).map_err(FrameworkError::Entity),
                        None => Err(FrameworkError::NotFound(id.to_string())),
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Batch { actions, mode, respond_to } => {
                    let _ = respond_to.send(self.handle_batch(actions, mode));
                }
            }
        }

        info!(actor = self.name, "Actor stopped");
    }

    fn handle_create(&mut self, params: T::CreateParams) -> Result<T, FrameworkError<T::Error>> {
        let id = (self.next_id_fn)();
        let mut item = T::from_create_params(id.clone(), params).map_err(FrameworkError::Entity)?;
        item.on_create().map_err(FrameworkError::Entity)?;
        self.check_unique(&item)?;
        match item.log_id() {
            Some(log_id) => debug!(actor = self.name, id = %log_id, "Item created"),
            None => debug!(actor = self.name, "Item created"),
        }
        self.store.insert(id, item.clone());
        Ok(item)
    }

    fn handle_update(&mut self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError<T::Error>> {
        let mut updated = self
            .store
            .get(&id)
            .cloned()
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        updated.on_update(patch).map_err(FrameworkError::Entity)?;
        self.check_unique(&updated)?;
        self.store.insert(id, updated.clone());
        Ok(updated)
    }

    fn handle_delete(&mut self, id: T::Id) -> Result<T, FrameworkError<T::Error>> {
        let item = self
            .store
            .get(&id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_delete().map_err(FrameworkError::Entity)?;
        self.store
            .remove(&id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))
    }

    /// Applies every action against staged copies; the store only changes when all succeed.
    fn handle_batch(
        &mut self,
        actions: Vec<(T::Id, T::Action)>,
        mode: BatchMode,
    ) -> Result<Vec<T::ActionResult>, FrameworkError<T::Error>> {
        let mut staged: BTreeMap<T::Id, T> = BTreeMap::new();
        let mut results = Vec::with_capacity(actions.len());
        let mut failures = Vec::new();

        for (position, (id, action)) in actions.into_iter().enumerate() {
            let item = match staged.entry(id.clone()) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => match self.store.get(&id) {
                    Some(current) => entry.insert(current.clone()),
                    None => {
                        failures.push(BatchFailure {
                            position,
                            key: id.to_string(),
                            error: FrameworkError::NotFound(id.to_string()),
                        });
                        continue;
                    }
                },
            };
            match item.handle_action(action) {
                Ok(result) => results.push(result),
                Err(e) => failures.push(BatchFailure {
                    position,
                    key: id.to_string(),
                    error: FrameworkError::Entity(e),
                }),
            }
        }

        if !failures.is_empty() {
            warn!(actor = self.name, failed = failures.len(), "Batch rejected");
            return Err(FrameworkError::BatchRejected(failures));
        }
        if mode == BatchMode::Commit {
            debug!(actor = self.name, touched = staged.len(), "Batch committed");
            self.store.extend(staged);
        }
        Ok(results)
    }

    fn check_unique(&self, candidate: &T) -> Result<(), FrameworkError<T::Error>> {
        for (field, value) in candidate.unique_keys() {
            let taken = self.store.values().any(|other| {
                other.id() != candidate.id()
                    && other.unique_keys().iter().any(|(f, v)| *f == field && *v == value)
            });
            if taken {
                return Err(FrameworkError::Conflict { field, value });
            }
        }
        Ok(())
    }
}

// =============================================================================
// 5. THE GENERIC CLIENT
// =============================================================================

pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self { sender: self.sender.clone() }
    }
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R, T::Error>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::List { respond_to }).await
    }

    pub async fn find_unique(
        &self,
        field: &'static str,
        value: impl Into<String>,
    ) -> Result<Option<T>, FrameworkError<T::Error>> {
        let value = value.into();
        self.request(|respond_to| ResourceRequest::FindUnique { field, value, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<T, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }

    pub async fn perform_batch(
        &self,
        actions: Vec<(T::Id, T::Action)>,
        mode: BatchMode,
    ) -> Result<Vec<T::ActionResult>, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Batch { actions, mode, respond_to })
            .await
    }
}

/// Counter-backed id generator shared by every numeric-id actor.
pub fn sequential_ids() -> impl Fn() -> u64 + Send + Sync + 'static {
    let counter = std::sync::atomic::AtomicU64::new(1);
    move || counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Implements `From<FrameworkError<E>> for E` for an entity error that has `NotFound(String)`,
/// `Validation(FieldErrors)` and `ActorCommunicationError(String)` variants.
#[macro_export]
macro_rules! impl_from_framework_error {
    ($error:ident) => {
        impl From<$crate::actor_framework::FrameworkError<$error>> for $error {
            fn from(err: $crate::actor_framework::FrameworkError<$error>) -> Self {
                use $crate::actor_framework::FrameworkError;
                match err {
                    FrameworkError::NotFound(id) => $error::NotFound(id),
                    FrameworkError::Conflict { field, value } => $error::Validation(
                        $crate::domain::FieldErrors::single(field, format!("{value} is already taken")),
                    ),
                    FrameworkError::Entity(e) => e,
                    other => $error::ActorCommunicationError(other.to_string()),
                }
            }
        }
    };
}

// =============================================================================
// 6. EXAMPLE USAGE (Test)
// =============================================================================
