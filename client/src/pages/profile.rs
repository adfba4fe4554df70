//! Profile page built from the identity decoded out of the stored token.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::DEFAULT_AVATAR;
use crate::state::AppContext;
use crate::state::session::Identity;
use crate::util::auth::LOGIN_PATH;

/// Rows shown under the avatar, in display order. Absent optional claims
/// are skipped.
pub fn profile_rows(identity: &Identity) -> Vec<(&'static str, String)> {
    let mut rows = vec![("Email", identity.email.clone())];
    if let Some(specialization) = identity.specialization.as_ref().filter(|s| !s.trim().is_empty()) {
        rows.push(("Specialization", specialization.clone()));
    }
    rows
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = AppContext::expect();
    let session = ctx.session();
    let navigate = use_navigate();

    let on_logout = move |_| {
        ctx.sign_out();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="profile">
            {move || match session.with(|s| s.identity().cloned()) {
                None => view! { <p class="profile__loading">"Loading profile..."</p> }.into_any(),
                Some(identity) => {
                    let photo = identity
                        .photo_url
                        .clone()
                        .filter(|u| !u.is_empty())
                        .unwrap_or_else(|| DEFAULT_AVATAR.to_owned());
                    view! {
                        <div class="profile__header">
                            <img class="profile__photo" src=photo alt="profile" width="100" height="100"/>
                            <h2 class="profile__name">{identity.display_name().to_owned()}</h2>
                            <p class="profile__role">{identity.role.as_claim()}</p>
                        </div>
                        <dl class="profile__details">
                            {profile_rows(&identity)
                                .into_iter()
                                .map(|(label, value)| view! { <dt>{label}</dt> <dd>{value}</dd> })
                                .collect_view()}
                        </dl>
                    }
                        .into_any()
                }
            }}
            <button class="profile__logout" on:click=on_logout>
                "Logout"
            </button>
        </div>
    }
}
