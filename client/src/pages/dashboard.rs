//! Authenticated dashboard shell and its index redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every `/dashboard/**` request has already passed the host's cookie guard.
//! The layout asks `current_role` for the role that picks the sidebar, and
//! once hydrated it keeps watching the session so a cleared token sends the
//! user back to `/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::state::AppContext;
use crate::util::auth::{current_role, install_unauth_redirect};

#[component]
pub fn DashboardLayout() -> impl IntoView {
    let ctx = AppContext::expect();
    let navigate = use_navigate();
    install_unauth_redirect(ctx.session(), navigate);

    let role = Resource::new(|| (), |()| current_role());

    view! {
        <div class="dashboard">
            <Transition fallback=|| view! { <nav class="sidebar sidebar--loading"></nav> }>
                {move || {
                    role.get()
                        .map(|resolved| match resolved {
                            Ok(role) => view! { <Sidebar role=role/> }.into_any(),
                            Err(e) => {
                                log::warn!("dashboard role unavailable: {e}");
                                view! { <nav class="sidebar"></nav> }.into_any()
                            }
                        })
                }}
            </Transition>
            <div class="dashboard__main">
                <Navbar/>
                <main class="dashboard__content">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}

/// `/dashboard`: forward to the signed-in role's landing page.
#[component]
pub fn DashboardIndex() -> impl IntoView {
    let ctx = AppContext::expect();
    let session = ctx.session();
    let navigate = use_navigate();

    Effect::new(move || {
        let landing = session.with(|s| s.identity().map(|identity| identity.role.landing_path()));
        if let Some(landing) = landing {
            navigate(landing, NavigateOptions { replace: true, ..Default::default() });
        }
    });

    view! { <p class="dashboard__loading">"Loading..."</p> }
}
