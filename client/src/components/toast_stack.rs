//! Toast rendering and the `notify` helper used by pages.
//!
//! DESIGN
//! ======
//! Toasts live in an app-level `RwSignal<ToastState>` context so they survive
//! route changes (e.g. a failed fetch right before a redirect).

use leptos::prelude::*;

use crate::state::toast::{Notification, ToastState};

#[cfg(feature = "hydrate")]
const TOAST_LIFETIME_MS: u64 = 4_000;

/// Queue a notification and, in the browser, schedule its removal.
pub fn notify(toasts: RwSignal<ToastState>, notification: Notification) {
    let id = toasts.try_update(|t| t.push(notification));
    #[cfg(feature = "hydrate")]
    {
        if let Some(id) = id {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_LIFETIME_MS)).await;
                toasts.try_update(|t| t.dismiss(id));
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Fixed stack of visible toasts; clicking one dismisses it.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|(id, notification)| {
                        let class = if notification.is_error() { "toast toast--error" } else { "toast toast--success" };
                        view! {
                            <div class=class role="status" on:click=move |_| toasts.update(|t| t.dismiss(id))>
                                <p class="toast__title">{notification.title}</p>
                                <p class="toast__description">{notification.description}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
