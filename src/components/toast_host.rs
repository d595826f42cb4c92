//! Toast Host Component
//!
//! Non-blocking notification stack. The only user-visible error surface:
//! backend failures land here with the backend's raw message string.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;

use crate::store::{use_dashboard_store, store_dismiss_toast, DashboardStateStoreFields};

const TOAST_LIFETIME_MS: u32 = 4_500;

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_dashboard_store();

    view! {
        <div class="toast-stack">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id.clone()
                children=move |toast| {
                    let timer_id = toast.id.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(TOAST_LIFETIME_MS).await;
                        store_dismiss_toast(&store, &timer_id);
                    });

                    let dismiss_id = toast.id.clone();
                    view! {
                        <div class="toast">
                            <strong class="toast-title">{toast.title.clone()}</strong>
                            <span class="toast-message">{toast.message.clone()}</span>
                            <button
                                class="toast-close"
                                on:click=move |_| store_dismiss_toast(&store, &dismiss_id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
