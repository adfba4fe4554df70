//! Appointment cards for the doctor and patient views.

use leptos::prelude::*;

use crate::components::doctor_card::DOCTOR_AVATAR;
use crate::net::types::{AppointmentStatus, DoctorAppointment, PatientAppointment, StatusTransition};
use crate::util::browser::display_date;

#[component]
pub fn StatusBadge(status: AppointmentStatus) -> impl IntoView {
    view! { <span class=status.badge_class()>{status.as_str()}</span> }
}

/// Card in the doctor's list. Pending appointments get Complete/Cancel
/// buttons, disabled while `updating` is set.
#[component]
pub fn DoctorAppointmentCard(
    appointment: DoctorAppointment,
    #[prop(into)] updating: Signal<bool>,
    on_transition: Callback<(String, StatusTransition)>,
) -> impl IntoView {
    let patient = appointment.patient;
    let photo = patient.photo_url.filter(|u| !u.is_empty()).unwrap_or_else(|| DOCTOR_AVATAR.to_owned());
    let pending = appointment.status.is_pending();
    let id = appointment.id;
    let transition = move |t: StatusTransition| {
        let id = id.clone();
        move |_: leptos::ev::MouseEvent| on_transition.run((id.clone(), t))
    };
    let busy_label = move |idle: &'static str| move || if updating.get() { "Updating..." } else { idle };

    view! {
        <li class="appointment-card">
            <div class="appointment-card__header">
                <img class="appointment-card__photo" src=photo alt=patient.name.clone() width="50" height="50"/>
                <div class="appointment-card__details">
                    <h2 class="appointment-card__name">{patient.name}</h2>
                    <p class="appointment-card__email">{patient.email}</p>
                    <p class="appointment-card__date">{display_date(&appointment.date)}</p>
                    <StatusBadge status=appointment.status/>
                </div>
            </div>
            <Show when=move || pending>
                <div class="appointment-card__actions">
                    <button
                        class="appointment-card__complete"
                        disabled=move || updating.get()
                        on:click=transition(StatusTransition::Complete)
                    >
                        {busy_label("Mark Complete")}
                    </button>
                    <button
                        class="appointment-card__cancel"
                        disabled=move || updating.get()
                        on:click=transition(StatusTransition::Cancel)
                    >
                        {busy_label("Cancel")}
                    </button>
                </div>
            </Show>
        </li>
    }
}

/// Read-only card in the patient's list.
#[component]
pub fn PatientAppointmentCard(appointment: PatientAppointment) -> impl IntoView {
    let doctor = appointment.doctor;
    let photo = doctor.photo_url.filter(|u| !u.is_empty()).unwrap_or_else(|| DOCTOR_AVATAR.to_owned());

    view! {
        <li class="appointment-card appointment-card--patient">
            <img class="appointment-card__photo" src=photo alt=doctor.name.clone()/>
            <h2 class="appointment-card__name">{doctor.name}</h2>
            <p class="appointment-card__specialization">{doctor.specialization}</p>
            <p class="appointment-card__date">"Date: " {display_date(&appointment.date)}</p>
            <StatusBadge status=appointment.status/>
        </li>
    }
}
