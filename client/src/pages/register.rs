//! Registration page with patient/doctor tabs.
//!
//! DESIGN
//! ======
//! The tabs write the session's selected role. On submit the draft is bound
//! to that role with a single read, so the validated fields and the
//! endpoint always belong to the same variant.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::forms::{Field, FieldErrors, RegistrationDraft};
use crate::net::types::Role;
use crate::state::AppContext;
use crate::util::auth::LOGIN_PATH;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = AppContext::expect();
    let session = ctx.session();
    let navigate = use_navigate();
    let draft = RwSignal::new(RegistrationDraft::default());
    let errors = RwSignal::new(FieldErrors::new());
    let specializations = RwSignal::new(Vec::<String>::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_specializations().await {
            Ok(list) => specializations.set(list),
            Err(e) => log::error!("failed to fetch specializations: {e}"),
        }
    });

    let is_doctor = move || session.get().role() == Role::Doctor;
    let select_role = move |role: Role| {
        move |_: leptos::ev::MouseEvent| {
            ctx.set_role(role);
            errors.set(FieldErrors::new());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = draft.with_untracked(|d| d.for_role(session.get_untracked().role()));
        let request = match form.validate() {
            Ok(request) => request,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(form.role(), &request).await {
                    Ok(envelope) => {
                        ctx.success(envelope.message);
                        navigate(LOGIN_PATH, NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("registration at {} failed: {e}", form.endpoint());
                        ctx.error(e.user_message());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, form, request);
            busy.set(false);
        }
    };

    let field_error = move |field: Field| move || errors.with(|e| e.get(&field).copied());

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">"Create Your Account"</h2>
                <div class="auth-tabs">
                    <button
                        class="auth-tabs__tab"
                        class:auth-tabs__tab--active=move || !is_doctor()
                        type="button"
                        on:click=select_role(Role::Patient)
                    >
                        "Patient"
                    </button>
                    <button
                        class="auth-tabs__tab"
                        class:auth-tabs__tab--active=is_doctor
                        type="button"
                        on:click=select_role(Role::Doctor)
                    >
                        "Doctor"
                    </button>
                </div>
                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-form__field">
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="John Doe"
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                        />
                        <p class="auth-form__error">{field_error(Field::Name)}</p>
                    </div>
                    <div class="auth-form__field">
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="john@example.com"
                            prop:value=move || draft.with(|d| d.email.clone())
                            on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                        />
                        <p class="auth-form__error">{field_error(Field::Email)}</p>
                    </div>
                    <div class="auth-form__field">
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="********"
                            prop:value=move || draft.with(|d| d.password.clone())
                            on:input=move |ev| draft.update(|d| d.password = event_target_value(&ev))
                        />
                        <p class="auth-form__error">{field_error(Field::Password)}</p>
                    </div>
                    <Show when=is_doctor>
                        <div class="auth-form__field">
                            <label class="auth-form__label">"Specialization"</label>
                            <select
                                class="auth-input"
                                prop:value=move || draft.with(|d| d.specialization.clone())
                                on:change=move |ev| draft.update(|d| d.specialization = event_target_value(&ev))
                            >
                                <option value="" disabled=true>"Select Specialization"</option>
                                <For
                                    each=move || specializations.get()
                                    key=|spec| spec.clone()
                                    children=|spec| {
                                        let value = spec.clone();
                                        view! { <option value=value>{spec}</option> }
                                    }
                                />
                            </select>
                            <p class="auth-form__error">{field_error(Field::Specialization)}</p>
                        </div>
                    </Show>
                    <div class="auth-form__field">
                        <label class="auth-form__label">"Photo URL (optional)"</label>
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="https://example.com/photo.jpg"
                            prop:value=move || draft.with(|d| d.photo_url.clone())
                            on:input=move |ev| draft.update(|d| d.photo_url = event_target_value(&ev))
                        />
                        <p class="auth-form__error">{field_error(Field::PhotoUrl)}</p>
                    </div>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                    <p class="auth-card__switch">
                        "Already have an account? " <a href=LOGIN_PATH>"Sign in"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}
