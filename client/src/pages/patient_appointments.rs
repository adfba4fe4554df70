//! Patient's own appointments, filterable by status.

use leptos::prelude::*;

use crate::components::appointment_card::PatientAppointmentCard;
use crate::components::pagination::Pagination;
use crate::net::error::ApiError;
use crate::net::types::PatientAppointment;
use crate::pages::load_page;
use crate::state::AppContext;
use crate::state::appointments::{PatientAppointmentQuery, PatientStatusFilter};
use crate::state::listing::ListingState;

#[component]
pub fn PatientAppointmentsPage() -> impl IntoView {
    let ctx = AppContext::expect();
    let session = ctx.session();
    let listing = RwSignal::new(ListingState::<PatientAppointment>::default());
    let status = RwSignal::new(PatientStatusFilter::All);

    let query = Memo::new(move |_| PatientAppointmentQuery {
        page: listing.with(|l| l.page),
        status: status.get(),
        ..Default::default()
    });

    Effect::new(move || {
        let q = query.get();
        let (hydrated, token) = session.with(|s| (s.is_hydrated(), s.token().map(str::to_owned)));
        if !hydrated {
            return;
        }
        let Some(token) = token else {
            ctx.error(ApiError::Unauthenticated.to_string());
            return;
        };
        load_page(listing, q.page, q.limit, async move {
            crate::net::api::fetch_patient_appointments(&token, &q).await
        });
    });

    let on_status = move |ev: leptos::ev::Event| {
        status.set(PatientStatusFilter::from_value(&event_target_value(&ev)));
        listing.update(ListingState::reset_page);
    };

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
        <div class="appointments">
            <h1 class="appointments__title">"My Appointments"</h1>
            <select
                class="appointments__filter"
                prop:value=move || status.get().value()
                on:change=on_status
            >
                {PatientStatusFilter::OPTIONS
                    .iter()
                    .map(|opt| view! { <option value=opt.value()>{opt.label()}</option> })
                    .collect_view()}
            </select>
            {move || {
                listing.with(|l| {
                    if l.loading {
                        view! { <p class="listing__status">"Loading..."</p> }.into_any()
                    } else if let Some(error) = &l.error {
                        view! { <p class="listing__error">{error.clone()}</p> }.into_any()
                    } else if l.items.is_empty() {
                        view! { <p class="listing__status">"No appointments found."</p> }.into_any()
                    } else {
                        view! {
                            <ul class="appointments__grid">
                                {l.items
                                    .iter()
                                    .cloned()
                                    .map(|appointment| view! { <PatientAppointmentCard appointment=appointment/> })
                                    .collect_view()}
                            </ul>
                        }
                            .into_any()
                    }
                })
            }}
            <Pagination
                page=page
                total_pages=total_pages
                can_prev=can_prev
                can_next=can_next
                on_page=on_page
            />
        </div>
    }
}
