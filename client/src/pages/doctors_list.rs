//! Patient landing page: paginated, searchable doctor grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page size follows the viewport (`limit_for_width`) and stays unknown
//! until the browser reports a width, which keeps the listing query inert
//! during SSR. The query key combines page, limit, and the shared search
//! state; any change refetches and replaces the grid.

use leptos::prelude::*;

use crate::components::doctor_card::DoctorCard;
use crate::components::pagination::Pagination;
use crate::net::types::Doctor;
use crate::pages::load_page;
use crate::state::AppContext;
use crate::state::listing::{DoctorQuery, ListingState};
use crate::state::search::SearchState;

#[component]
pub fn DoctorsListPage() -> impl IntoView {
    let ctx = AppContext::expect();
    let search = ctx.search();
    let listing = RwSignal::new(ListingState::<Doctor>::default());
    let limit = RwSignal::new(None::<u32>);

    #[cfg(feature = "hydrate")]
    {
        use crate::state::listing::limit_for_width;
        use crate::util::browser::viewport_width;

        let apply_width = move || {
            if let Some(width) = viewport_width() {
                let next = Some(limit_for_width(width));
                if limit.get_untracked() != next {
                    limit.set(next);
                }
            }
        };
        apply_width();
        let handle = window_event_listener(leptos::ev::resize, move |_| apply_width());
        on_cleanup(move || handle.remove());
    }

    // Search changes start over from page 1.
    Effect::new(move |previous: Option<SearchState>| {
        let current = search.get();
        if previous.is_some_and(|p| p != current) {
            listing.update(ListingState::reset_page);
        }
        current
    });

    let query = Memo::new(move |_| DoctorQuery::key(listing.with(|l| l.page), limit.get(), &search.get()));

    Effect::new(move || {
        let Some(q) = query.get() else {
            return;
        };
        let (page, page_limit) = (q.page, q.limit);
        load_page(listing, page, page_limit, async move { crate::net::api::fetch_doctors(&q).await });
    });

    let page = Signal::derive(move || listing.with(|l| l.page));
    let total_pages = Signal::derive(move || listing.with(|l| l.total_pages));
    let can_prev = Signal::derive(move || listing.with(ListingState::can_prev));
    let can_next = Signal::derive(move || listing.with(ListingState::can_next));
    let on_page = Callback::new(move |p: u32| {
        listing.update(|l| {
            l.go_to(p);
        });
    });

    view! {
        <div class="doctors">
            <Show
                when=move || limit.get().is_some()
                fallback=|| view! { <p class="listing__status">"Loading..."</p> }
            >
                <Show when=move || listing.with(|l| l.error.is_some())>
                    <p class="listing__error">
                        "Failed to load doctors: " {move || listing.with(|l| l.error.clone().unwrap_or_default())}
                    </p>
                </Show>
                <div class="doctors__grid">
                    <For
                        each=move || listing.with(|l| l.items.clone())
                        key=|doctor| doctor.id.clone()
                        children=|doctor| view! { <DoctorCard doctor=doctor/> }
                    />
                </div>
                <Show when=move || listing.with(|l| l.loading)>
                    <p class="listing__status">"Loading..."</p>
                </Show>
                <Pagination
                    page=page
                    total_pages=total_pages
                    can_prev=can_prev
                    can_next=can_next
                    on_page=on_page
                    numbered=true
                />
            </Show>
        </div>
    }
}
