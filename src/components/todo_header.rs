//! Todo Header Component
//!
//! Toggle-all button and the form for creating new todos.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::{ErrorKind, Processing};
use crate::state::{TodoState, TodoStateStoreFields};

/// Header with the new-todo input
#[component]
pub fn TodoHeader() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (title, set_title) = signal(String::new());
    let input_ref = NodeRef::<html::Input>::new();

    let processing = Memo::new(move |_| store.processing().get());
    let has_todos = move || store.with(|state| !state.is_empty());
    let all_completed = move || store.with(TodoState::all_completed);

    // Refocus the input whenever nothing is in flight
    Effect::new(move |_| {
        if processing.get().is_idle() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get_untracked();
        let text = text.trim();
        if text.is_empty() {
            ctx.controller.report(ErrorKind::EmptyTitle);
            return;
        }

        let todo = ctx.controller.draft(text);
        spawn_local(async move {
            // Keep the draft when the create fails
            if ctx.controller.add(todo).await.is_ok() {
                set_title.set(String::new());
            }
        });
    };

    view! {
        <header class="todoapp__header">
            <Show when=has_todos>
                <button
                    type="button"
                    class=move || if all_completed() { "todoapp__toggle-all active" } else { "todoapp__toggle-all" }
                />
            </Show>

            <form on:submit=on_submit>
                <input
                    type="text"
                    class="todoapp__new-todo"
                    placeholder="What needs to be done?"
                    node_ref=input_ref
                    prop:value=move || title.get()
                    prop:disabled=move || processing.get() == Processing::Creating
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
            </form>
        </header>
    }
}
