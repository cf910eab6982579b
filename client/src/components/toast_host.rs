//! Fixed-position stack rendering the shared toast queue.

use leptos::prelude::*;

use crate::state::toast::{ToastHub, ToastItem};

/// Access the app-wide toast hub.
///
/// # Panics
///
/// Panics when called outside the `App` context tree.
pub fn use_toasts() -> ToastHub {
    expect_context::<ToastHub>()
}

/// Toast stack subscribed to the hub for the lifetime of the component.
///
/// Toasts stay until dismissed with their close button.
#[component]
pub fn ToastHost() -> impl IntoView {
    let hub = use_toasts();
    let toasts = RwSignal::new(hub.toasts().to_vec());

    let subscription = hub.subscribe(move |items| toasts.set(items.to_vec()));
    on_cleanup(move || subscription.unsubscribe());

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast: ToastItem| {
                    let hub = hub.clone();
                    let id = toast.id;
                    view! {
                        <div class=format!("toast toast--{}", toast.kind.as_str())>
                            <span class="toast__message">{toast.message}</span>
                            <button class="toast__close" title="Dismiss" on:click=move |_| hub.remove(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
