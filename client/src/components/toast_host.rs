//! Transient notification stack rendered above every route.

use leptos::prelude::*;

use crate::state::AppContext;

/// Renders the visible toasts; clicking one dismisses it early.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = AppContext::expect();
    let toasts = ctx.toasts();

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() role="status" on:click=move |_| ctx.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
