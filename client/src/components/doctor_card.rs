//! Doctor listing card with inline appointment booking.

use leptos::prelude::*;

use crate::forms::validate_booking;
use crate::net::types::Doctor;
use crate::state::AppContext;

pub const DOCTOR_AVATAR: &str = "/avatar2.png";

pub const BOOKED_MESSAGE: &str = "Appointment booked successfully!";

/// Card showing one doctor. "Book Appointment" reveals a date picker; the
/// booking is checked locally before anything is sent.
#[component]
pub fn DoctorCard(doctor: Doctor) -> impl IntoView {
    let ctx = AppContext::expect();
    let date = RwSignal::new(String::new());
    let picking = RwSignal::new(false);
    let booking = RwSignal::new(false);

    let doctor_id = doctor.id.clone();
    let on_book = move |_| {
        if booking.get_untracked() {
            return;
        }
        let (token, request) = match validate_booking(&doctor_id, &date.get_untracked(), ctx.token().as_deref()) {
            Ok(ok) => ok,
            Err(e) => {
                ctx.error(e.to_string());
                return;
            }
        };
        booking.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::book_appointment(&token, &request).await {
                Ok(()) => {
                    ctx.success(BOOKED_MESSAGE);
                    date.set(String::new());
                    picking.set(false);
                }
                Err(e) => {
                    log::warn!("booking failed: {e}");
                    ctx.api_error(&e);
                }
            }
            booking.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, request);
            booking.set(false);
        }
    };

    let photo = doctor.photo_url.clone().filter(|u| !u.is_empty()).unwrap_or_else(|| DOCTOR_AVATAR.to_owned());

    view! {
        <div class="doctor-card">
            <img class="doctor-card__photo" src=photo alt=doctor.name.clone()/>
            <h2 class="doctor-card__name">{doctor.name}</h2>
            <p class="doctor-card__specialization">{doctor.specialization}</p>
            <Show
                when=move || picking.get()
                fallback=move || {
                    view! {
                        <button class="doctor-card__book" on:click=move |_| picking.set(true)>
                            "Book Appointment"
                        </button>
                    }
                }
            >
                <input
                    class="doctor-card__date"
                    type="date"
                    prop:value=move || date.get()
                    on:input=move |ev| date.set(event_target_value(&ev))
                />
                <button class="doctor-card__confirm" disabled=move || booking.get() on:click=on_book.clone()>
                    {move || if booking.get() { "Booking..." } else { "Confirm Booking" }}
                </button>
                <button class="doctor-card__cancel" on:click=move |_| picking.set(false)>
                    "Cancel"
                </button>
            </Show>
        </div>
    }
}
