//! Todo Item Component
//!
//! A single row of the todo list.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::state::{TodoEntry, TodoStateStoreFields};

/// One todo row with its delete control
#[component]
pub fn TodoItem(entry: TodoEntry) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let id = entry.todo.id;
    let completed = entry.todo.completed;
    let pending = entry.is_pending();
    let title = entry.todo.title;

    // Placeholders stay busy until the server confirms them
    let busy = move || pending || store.processing().get().is_deleting(id);

    view! {
        <div class=if completed { "todo completed" } else { "todo" }>
            <label class="todo__status-label">
                <input type="checkbox" class="todo__status" prop:checked=completed />
            </label>

            <span class="todo__title">{title}</span>

            <button
                type="button"
                class="todo__remove"
                prop:disabled=busy
                on:click=move |_| ctx.delete(id)
            >
                "×"
            </button>

            <div class=move || if busy() { "modal overlay is-active" } else { "modal overlay" }>
                <div class="modal-background has-background-white-ter"></div>
                <div class="loader"></div>
            </div>
        </div>
    }
}
