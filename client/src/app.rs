//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    components::{ParentRoute, Redirect, Route, Router, Routes},
    path,
};

use crate::components::toast_host::ToastHost;
use crate::pages::{
    dashboard::{DashboardIndex, DashboardLayout},
    doctor_appointments::DoctorAppointmentsPage,
    doctors_list::DoctorsListPage,
    login::LoginPage,
    patient_appointments::PatientAppointmentsPage,
    profile::ProfilePage,
    register::RegisterPage,
};
use crate::state::AppContext;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the `AppContext`, hydrates the session from the stored token once
/// the browser takes over, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ctx = AppContext::new();
    ctx.provide();

    // Effects only run after hydration, so this reads the browser's token.
    Effect::new(move || {
        ctx.hydrate_session(None);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/medicare.css"/>
        <Title text="Medicare"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=|| view! { <Redirect path="/dashboard"/> }/>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/register") view=RegisterPage/>
                <ParentRoute path=path!("/dashboard") view=DashboardLayout>
                    <Route path=path!("") view=DashboardIndex/>
                    <Route path=path!("patient/doctorslist") view=DoctorsListPage/>
                    <Route path=path!("patient/appointments") view=PatientAppointmentsPage/>
                    <Route path=path!("patient/profile") view=ProfilePage/>
                    <Route path=path!("doctor/appointments") view=DoctorAppointmentsPage/>
                    <Route path=path!("doctor/profile") view=ProfilePage/>
                </ParentRoute>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
