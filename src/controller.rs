//! Todo Controller
//!
//! The state container: owns the todo snapshot and runs the optimistic
//! load/add/delete operations against a [`TodoApi`].

use futures::future::join_all;

use crate::api::TodoApi;
use crate::error::TodoError;
use crate::models::{ErrorKind, Filter, Todo};
use crate::state::TodoState;

/// Somewhere the current snapshot lives
///
/// Implementations must swap whole snapshots; `replace` on a handle whose
/// owner is gone is a no-op.
pub trait StateHandle {
    fn snapshot(&self) -> TodoState;

    fn replace(&self, next: TodoState);

    /// Swap in the snapshot computed from the current one
    fn transition(&self, f: impl FnOnce(&TodoState) -> TodoState) {
        let next = f(&self.snapshot());
        self.replace(next);
    }
}

/// Runs the todo operations for one user
#[derive(Clone, Copy)]
pub struct TodoController<A, S> {
    api: A,
    state: S,
    user_id: u32,
}

impl<A: TodoApi, S: StateHandle> TodoController<A, S> {
    pub fn new(api: A, state: S, user_id: u32) -> Self {
        Self { api, state, user_id }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Unsaved todo for the current user
    pub fn draft(&self, title: &str) -> Todo {
        Todo::draft(self.user_id, title.trim())
    }

    /// Fetch the user's todos, replacing the list
    pub async fn load(&self) -> Result<(), TodoError> {
        self.state.transition(TodoState::without_notice);

        match self.api.get_todos(self.user_id).await {
            Ok(todos) => {
                log::info!("Loaded {} todos for user {}", todos.len(), self.user_id);
                self.state.transition(|state| state.loaded(todos));
                Ok(())
            }
            Err(err) => {
                log::warn!("Failed to load todos: {}", err);
                self.state.transition(TodoState::load_failed);
                Err(TodoError::Load(err))
            }
        }
    }

    /// Create `todo`, showing it as a placeholder until the server answers
    ///
    /// On failure the placeholder is gone again and the error is returned, so
    /// the caller can keep its input.
    pub async fn add(&self, todo: Todo) -> Result<Todo, TodoError> {
        let title = todo.title.trim();
        if title.is_empty() {
            self.report(ErrorKind::EmptyTitle);
            return Err(TodoError::EmptyTitle);
        }
        let draft = Todo {
            title: title.to_string(),
            ..todo
        };

        let (next, key) = self.state.snapshot().create_started(draft.clone());
        self.state.replace(next);

        match self.api.create_todo(&draft).await {
            Ok(saved) => {
                log::info!("Created todo {}", saved.id);
                self.state.transition(|state| state.create_succeeded(key, saved.clone()));
                Ok(saved)
            }
            Err(err) => {
                log::warn!("Failed to create todo {:?}: {}", draft.title, err);
                self.state.transition(|state| state.create_failed(key));
                Err(TodoError::Add(err))
            }
        }
    }

    /// Delete the saved todo `id`; it stays in the list if the server refuses
    pub async fn delete(&self, id: u32) -> Result<(), TodoError> {
        self.state.transition(|state| state.delete_started(id));

        match self.api.delete_todo(id).await {
            Ok(()) => {
                log::info!("Deleted todo {}", id);
                self.state.transition(|state| state.delete_succeeded(id));
                Ok(())
            }
            Err(err) => {
                log::warn!("Failed to delete todo {}: {}", id, err);
                self.state.transition(|state| state.delete_failed(id));
                Err(TodoError::Delete(err))
            }
        }
    }

    /// Delete every completed todo; each delete succeeds or fails on its own
    pub async fn clear_completed(&self) -> Vec<Result<(), TodoError>> {
        let ids = self.state.snapshot().completed_ids();
        log::debug!("Clearing {} completed todos", ids.len());
        join_all(ids.into_iter().map(|id| self.delete(id))).await
    }

    pub fn report(&self, kind: ErrorKind) {
        self.state.transition(|state| state.with_error(kind));
    }

    pub fn dismiss(&self) {
        self.state.transition(TodoState::without_notice);
    }

    /// Clear the notice if it is still notice number `seq`
    pub fn dismiss_if_current(&self, seq: u64) {
        self.state.transition(|state| state.dismissed(seq));
    }

    pub fn set_filter(&self, filter: Filter) {
        self.state.transition(|state| state.filtered_by(filter));
    }
}
