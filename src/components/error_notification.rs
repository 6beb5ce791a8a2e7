//! Error Notification Component
//!
//! Banner showing the latest error; hides itself after a delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::ERROR_DISMISS_DELAY_MS;
use crate::context::use_app_context;
use crate::state::TodoStateStoreFields;

#[component]
pub fn ErrorNotification() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let notice = Memo::new(move |_| store.notice().get());

    // Each notice gets its own timer; a timer only clears the notice it was started for
    Effect::new(move |_| {
        if let Some(current) = notice.get() {
            let controller = ctx.controller;
            spawn_local(async move {
                TimeoutFuture::new(ERROR_DISMISS_DELAY_MS).await;
                controller.dismiss_if_current(current.seq);
            });
        }
    });

    view! {
        <div class=move || {
            if notice.get().is_some() {
                "notification is-danger is-light has-text-weight-normal"
            } else {
                "notification is-danger is-light has-text-weight-normal hidden"
            }
        }>
            <button type="button" class="delete" on:click=move |_| ctx.controller.dismiss() />
            {move || notice.get().map(|n| n.kind.to_string()).unwrap_or_default()}
        </div>
    }
}
