//! Role-specific navigation sidebar.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::net::types::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

const DOCTOR_LINKS: &[NavLink] = &[
    NavLink { label: "Appointments", href: "/dashboard/doctor/appointments" },
    NavLink { label: "Profile", href: "/dashboard/doctor/profile" },
];

const PATIENT_LINKS: &[NavLink] = &[
    NavLink { label: "Doctor List", href: "/dashboard/patient/doctorslist" },
    NavLink { label: "My Appointments", href: "/dashboard/patient/appointments" },
    NavLink { label: "Profile", href: "/dashboard/patient/profile" },
];

pub fn sidebar_links(role: Role) -> &'static [NavLink] {
    match role {
        Role::Doctor => DOCTOR_LINKS,
        Role::Patient => PATIENT_LINKS,
    }
}

/// Sidebar for `role`; the link matching the current path is highlighted.
#[component]
pub fn Sidebar(role: Role) -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">
                <img class="sidebar__logo" src="/logo.svg" alt="logo" width="36" height="36"/>
                <h1 class="sidebar__title">"Medicare"</h1>
            </div>
            <div class="sidebar__links">
                {sidebar_links(role)
                    .iter()
                    .map(|link| {
                        let href = link.href;
                        view! {
                            <a
                                class="sidebar__link"
                                class:sidebar__link--active=move || location.pathname.get() == href
                                href=href
                            >
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
