//! Doctor landing page: appointment list with status/date filters and
//! complete/cancel actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! A transition asks for confirmation, waits for the server to acknowledge
//! it, and only then patches the row in place. Rows that are no longer
//! PENDING lose their action buttons, so the change cannot be undone here.

use leptos::prelude::*;

use crate::components::appointment_card::DoctorAppointmentCard;
use crate::components::pagination::Pagination;
use crate::net::error::ApiError;
use crate::net::types::{DoctorAppointment, StatusTransition};
use crate::pages::load_page;
use crate::state::AppContext;
use crate::state::appointments::{DoctorAppointmentQuery, DoctorStatusFilter};
use crate::state::listing::ListingState;
use crate::util::browser;

#[component]
pub fn DoctorAppointmentsPage() -> impl IntoView {
    let ctx = AppContext::expect();
    let session = ctx.session();
    let listing = RwSignal::new(ListingState::<DoctorAppointment>::default());
    let status = RwSignal::new(DoctorStatusFilter::All);
    let date = RwSignal::new(String::new());
    let updating_id = RwSignal::new(None::<String>);

    let query = Memo::new(move |_| DoctorAppointmentQuery {
        page: listing.with(|l| l.page),
        status: status.get(),
        date: date.get(),
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
            crate::net::api::fetch_doctor_appointments(&token, &q).await
        });
    });

    let on_transition = Callback::new(move |(appointment_id, transition): (String, StatusTransition)| {
        if !browser::confirm(&transition.confirm_message()) {
            return;
        }
        let Some(token) = ctx.token() else {
            ctx.error(ApiError::Unauthenticated.to_string());
            return;
        };
        updating_id.set(Some(appointment_id.clone()));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let target = transition.target();
            let request = crate::net::types::StatusUpdateRequest {
                appointment_id: appointment_id.clone(),
                status: target.clone(),
            };
            match crate::net::api::update_status(&token, &request).await {
                Ok(()) => {
                    listing.update(|l| {
                        l.apply_status(&appointment_id, target.clone());
                    });
                    ctx.success(format!("Appointment marked as {}", target.as_str()));
                }
                Err(e) => {
                    log::warn!("status update for {appointment_id} failed: {e}");
                    ctx.api_error(&e);
                }
            }
            updating_id.set(None);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            updating_id.set(None);
        }
    });

    let on_status = move |ev: leptos::ev::Event| {
        status.set(DoctorStatusFilter::from_value(&event_target_value(&ev)));
        listing.update(ListingState::reset_page);
    };
    let on_date = move |ev: leptos::ev::Event| {
        date.set(event_target_value(&ev));
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
            <div class="appointments__filters">
                <select
                    class="appointments__filter"
                    prop:value=move || status.get().value()
                    on:change=on_status
                >
                    {DoctorStatusFilter::OPTIONS
                        .iter()
                        .map(|opt| view! { <option value=opt.value()>{opt.label()}</option> })
                        .collect_view()}
                </select>
                <input
                    class="appointments__filter"
                    type="date"
                    prop:value=move || date.get()
                    on:change=on_date
                />
            </div>
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
                                    .map(|appointment| {
                                        let id = appointment.id.clone();
                                        let updating = Signal::derive(move || {
                                            updating_id.with(|u| u.as_deref() == Some(id.as_str()))
                                        });
                                        view! {
                                            <DoctorAppointmentCard
                                                appointment=appointment
                                                updating=updating
                                                on_transition=on_transition
                                            />
                                        }
                                    })
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
