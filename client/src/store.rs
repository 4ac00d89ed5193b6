//! In-memory store mediating every mutation through the API client.
//!
//! # Design
//! `TodoStore` owns the only copy of the collection the presentation layer
//! ever reads. Every mutation is a synchronous round-trip: the store calls
//! the backend, waits for the confirmed record, and only then touches the
//! snapshot. No optimistic insertion — a record is never visible before the
//! server has assigned its identity, so there is nothing to roll back.
//!
//! Mutations take `&mut self`, so a reader can never observe a
//! partially-applied snapshot. The store does not deduplicate in-flight
//! requests for the same id; when callers interleave, the later response
//! wins.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::client::TodoClient;
use crate::error::{RequestFailed, StoreError};
use crate::http::Transport;
use crate::types::{NewTodo, Todo, TodoPatch};

/// Lifecycle of the store's snapshot with respect to the backend.
///
/// `Error` carries the last refresh failure so the UI can show a reason next
/// to its retry affordance. Mutation failures never enter this state — they
/// are returned to the caller instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// No refresh attempted yet.
    Uninitialized,
    /// A refresh is in flight.
    Loading,
    /// The snapshot reflects the last successful refresh plus confirmed
    /// mutations.
    Ready,
    /// The last refresh failed; any previously-held snapshot is kept.
    Error(RequestFailed),
}

/// Single source of truth for the todo collection on the client side.
///
/// Construct one per application session and thread it through the
/// presentation layer explicitly; projections in [`crate::view`] read its
/// snapshot.
#[derive(Debug)]
pub struct TodoStore<T> {
    client: TodoClient<T>,
    todos: Vec<Todo>,
    state: LoadState,
}

impl<T: Transport> TodoStore<T> {
    pub fn new(client: TodoClient<T>) -> Self {
        Self {
            client,
            todos: Vec::new(),
            state: LoadState::Uninitialized,
        }
    }

    /// Replace the snapshot with the backend's current collection, server
    /// order trusted.
    ///
    /// On failure the previous snapshot is kept — blanking the list on a
    /// transient failure would lose more than it protects — and the store
    /// enters `Error` with the reason. Calling again retries.
    pub fn refresh(&mut self) {
        self.state = LoadState::Loading;
        match self.client.list_all() {
            Ok(todos) => {
                self.todos = todos;
                self.state = LoadState::Ready;
            }
            Err(failure) => {
                warn!("refresh failed: {failure}");
                self.state = LoadState::Error(failure);
            }
        }
    }

    /// Create a todo and prepend the server-confirmed record.
    ///
    /// Text is trimmed first; a draft that is empty after trimming is
    /// rejected locally without issuing a request. A backend failure leaves
    /// the snapshot and [`LoadState`] untouched.
    pub fn add(&mut self, draft: NewTodo) -> Result<(), StoreError> {
        let text = draft.text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }
        let draft = NewTodo {
            text: text.to_string(),
            deadline: draft.deadline,
        };
        let created = self.client.create(&draft)?;
        self.todos.insert(0, created);
        Ok(())
    }

    /// Apply a partial update and replace the matching entry with the
    /// server-confirmed record, position preserved.
    ///
    /// A result for an id no longer known locally is discarded silently:
    /// the entry was removed while the request was in flight, and
    /// resurrecting it would contradict the user's last action.
    pub fn update(&mut self, id: Uuid, patch: TodoPatch) -> Result<(), StoreError> {
        let patch = normalize_patch(patch)?;
        let updated = self.client.update(id, &patch)?;
        match self.todos.iter_mut().find(|todo| todo.id == id) {
            Some(slot) => *slot = updated,
            None => debug!(%id, "discarding update result for unknown todo"),
        }
        Ok(())
    }

    /// Delete a todo and drop it from the snapshot, order of the remaining
    /// entries preserved.
    pub fn remove(&mut self, id: Uuid) -> Result<(), StoreError> {
        self.client.delete(id)?;
        self.todos.retain(|todo| todo.id != id);
        Ok(())
    }

    /// The current snapshot. Insertion-ordered, newest first.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }
}

/// Trim patch text and reject an empty result, mirroring the non-empty rule
/// on create.
fn normalize_patch(mut patch: TodoPatch) -> Result<TodoPatch, StoreError> {
    if let Some(text) = &patch.text {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(StoreError::EmptyText);
        }
        patch.text = Some(trimmed.to_string());
    }
    Ok(patch)
}
