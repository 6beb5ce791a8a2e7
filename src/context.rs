//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpTodoApi;
use crate::controller::TodoController;
use crate::store::TodoStore;

/// Controller wired to the HTTP API and the reactive store
pub type AppController = TodoController<HttpTodoApi, TodoStore>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Todo state - read fields for fine-grained updates
    pub store: TodoStore,
    /// Runs every operation that changes the store
    pub controller: AppController,
}

impl AppContext {
    pub fn new(store: TodoStore, controller: AppController) -> Self {
        Self { store, controller }
    }

    /// Fetch todos in the background
    pub fn load(&self) {
        let controller = self.controller;
        spawn_local(async move {
            let _ = controller.load().await;
        });
    }

    /// Delete one todo in the background
    pub fn delete(&self, id: u32) {
        let controller = self.controller;
        spawn_local(async move {
            let _ = controller.delete(id).await;
        });
    }

    /// Delete all completed todos in the background
    pub fn clear_completed(&self) {
        let controller = self.controller;
        spawn_local(async move {
            let results = controller.clear_completed().await;
            let failed = results.iter().filter(|result| result.is_err()).count();
            if failed > 0 {
                log::warn!("{} of {} completed todos could not be cleared", failed, results.len());
            }
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
