//! Todo Footer Component
//!
//! Remaining count, filter links and the clear-completed button.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Filter;
use crate::state::{TodoState, TodoStateStoreFields};

#[component]
pub fn TodoFooter() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let has_completed = move || store.with(TodoState::has_completed);

    view! {
        <footer class="todoapp__footer">
            <span class="todo-count">
                {move || format!("{} items left", store.active_count().get())}
            </span>

            <nav class="filter">
                {Filter::ALL.into_iter().map(|filter| {
                    let is_selected = move || store.filter().get() == filter;
                    view! {
                        <a
                            href=filter.hash()
                            class=move || if is_selected() { "filter__link selected" } else { "filter__link" }
                            on:click=move |_| ctx.controller.set_filter(filter)
                        >
                            {filter.label()}
                        </a>
                    }
                }).collect_view()}
            </nav>

            <button
                type="button"
                class="todoapp__clear-completed"
                prop:disabled=move || !has_completed()
                on:click=move |_| ctx.clear_completed()
            >
                "Clear completed"
            </button>
        </footer>
    }
}
