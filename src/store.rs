//! Todo State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the
//! [`TodoState`] snapshot.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::controller::StateHandle;
use crate::state::TodoState;

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

impl StateHandle for TodoStore {
    fn snapshot(&self) -> TodoState {
        self.try_get_untracked().unwrap_or_default()
    }

    fn replace(&self, next: TodoState) {
        // Disposed when the view was torn down before a request settled
        if self.try_update(|state| *state = next).is_none() {
            log::debug!("Todo store disposed, dropping state update");
        }
    }
}
