//! Renders queued toasts and expires them after a short delay.

use leptos::prelude::*;

use crate::notify::{Toast, ToastKind, Toasts};

/// How long a toast stays on screen.
#[cfg(feature = "hydrate")]
const TOAST_LIFETIME: std::time::Duration = std::time::Duration::from_millis(3000);

/// Fixed overlay listing active toasts.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="toasts">
            {move || {
                toasts
                    .items()
                    .get()
                    .into_iter()
                    .map(|toast| view! { <ToastView toast/> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn ToastView(toast: Toast) -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let kind_class = match toast.kind {
        ToastKind::Error => "toast toast--error",
        ToastKind::Success => "toast toast--success",
    };

    #[cfg(feature = "hydrate")]
    {
        let id = toast.id;
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(TOAST_LIFETIME).await;
            toasts.dismiss(id);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = &toasts;

    view! { <div class=kind_class>{toast.message}</div> }
}
