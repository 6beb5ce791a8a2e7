//! Todo App
//!
//! Root component: the todo screen, or a warning when no user is configured.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpTodoApi;
use crate::components::{ErrorNotification, TodoFooter, TodoHeader, TodoItem, UserWarning};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller::TodoController;
use crate::models::Filter;
use crate::state::TodoState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let api_url = config.api_url;
    match config.user_id {
        Some(user_id) => view! { <TodoApp user_id=user_id api_url=api_url /> }.into_any(),
        None => view! { <UserWarning /> }.into_any(),
    }
}

/// Filter selected by the page's location hash, if any
fn initial_filter() -> Filter {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .map(|hash| Filter::from_hash(&hash))
        .unwrap_or_default()
}

#[component]
fn TodoApp(user_id: u32, api_url: &'static str) -> impl IntoView {
    // State
    let store = Store::new(TodoState::new(initial_filter()));
    let controller = TodoController::new(HttpTodoApi::new(api_url), store, user_id);
    let ctx = AppContext::new(store, controller);

    // Provide context to all children
    provide_context(ctx);

    // Load todos on mount
    Effect::new(move |_| {
        log::debug!("Loading todos for user {}", user_id);
        ctx.load();
    });

    let visible = move || store.with(TodoState::visible_entries);
    let has_todos = move || store.with(|state| !state.is_empty());

    view! {
        <div class="todoapp">
            <h1 class="todoapp__title">"todos"</h1>

            <div class="todoapp__content">
                <TodoHeader />

                <section class="todoapp__main">
                    <For
                        each=visible
                        key=|entry| entry.key
                        children=move |entry| view! { <TodoItem entry=entry /> }
                    />
                </section>

                <Show when=has_todos>
                    <TodoFooter />
                </Show>
            </div>

            <ErrorNotification />
        </div>
    }
}
