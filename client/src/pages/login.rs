//! Login page: email, password, and role.
//!
//! SYSTEM CONTEXT
//! ==============
//! The selected role is written to the session before the request goes out.
//! A successful login persists the token through the transport layer,
//! hydrates the session from it, and lands on the role's home page. Server
//! errors are rendered inline under the form.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::forms::{Field, FieldErrors, LoginDraft};
use crate::state::AppContext;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = AppContext::expect();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let server_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = LoginDraft {
            email: email.get_untracked(),
            password: password.get_untracked(),
            role: role.get_untracked(),
        };
        let (selected, request) = match draft.validate() {
            Ok(ok) => ok,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());
        server_error.set(String::new());
        ctx.set_role(selected);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&request).await {
                    Ok(envelope) => {
                        if ctx.sign_in(envelope.data.token) {
                            let role = ctx.session().with_untracked(|s| s.token_role().unwrap_or_else(|| s.role()));
                            navigate(role.landing_path(), NavigateOptions::default());
                        } else {
                            server_error.set(crate::net::error::FALLBACK_MESSAGE.to_owned());
                        }
                    }
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        server_error.set(e.user_message());
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, request);
            busy.set(false);
        }
    };

    let field_error = move |field: Field| move || errors.with(|e| e.get(&field).copied());

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">"Sign in to Your Account"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-form__field">
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="john@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <p class="auth-form__error">{field_error(Field::Email)}</p>
                    </div>
                    <div class="auth-form__field">
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="********"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <p class="auth-form__error">{field_error(Field::Password)}</p>
                    </div>
                    <div class="auth-form__field">
                        <select
                            class="auth-input"
                            prop:value=move || role.get()
                            on:change=move |ev| role.set(event_target_value(&ev))
                        >
                            <option value="" disabled=true>"Select role"</option>
                            <option value="patient">"Patient"</option>
                            <option value="doctor">"Doctor"</option>
                        </select>
                        <p class="auth-form__error">{field_error(Field::Role)}</p>
                    </div>
                    <Show when=move || !server_error.get().is_empty()>
                        <p class="auth-form__error auth-form__error--server">{move || server_error.get()}</p>
                    </Show>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                    <p class="auth-card__switch">
                        "Don't have an account? " <a href="/register">"Register"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}
