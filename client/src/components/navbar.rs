//! Dashboard top bar: doctor search plus the profile/logout menu.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::search_input::SearchInput;
use crate::net::types::Role;
use crate::state::AppContext;
use crate::util::auth::LOGIN_PATH;

pub const DEFAULT_AVATAR: &str = "/avatar.png";

/// Profile route for the signed-in role.
pub fn profile_path(role: Role) -> &'static str {
    match role {
        Role::Doctor => "/dashboard/doctor/profile",
        Role::Patient => "/dashboard/patient/profile",
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = AppContext::expect();
    let session = ctx.session();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    let avatar = move || {
        session
            .get()
            .identity()
            .and_then(|i| i.photo_url.clone())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_AVATAR.to_owned())
    };
    let profile_href = move || profile_path(session.with(|s| s.token_role().unwrap_or_else(|| s.role())));

    let on_logout = move |_| {
        menu_open.set(false);
        ctx.sign_out();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <header class="navbar">
            <span class="navbar__mark">"Dashboard"</span>
            <SearchInput/>
            <button
                class="navbar__profile"
                type="button"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                <img class="navbar__avatar" src=avatar alt="profile" width="32" height="32"/>
            </button>
            <Show when=move || menu_open.get()>
                <div class="navbar__menu">
                    <a class="navbar__menu-item" href=profile_href on:click=move |_| menu_open.set(false)>
                        "Profile"
                    </a>
                    <button class="navbar__menu-item navbar__menu-item--logout" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </div>
            </Show>
        </header>
    }
}
