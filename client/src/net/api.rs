//! REST calls against the clinic API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable`, since every
//! call needs the browser-held token.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError::Server` carrying the body's
//! `message`; pages decide whether to toast it or render it inline. Nothing
//! is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    BookingRequest, Doctor, DoctorAppointment, Envelope, LoginData, LoginRequest, PagedResponse,
    PatientAppointment, RegisterRequest, RegisteredUser, Role, StatusUpdateRequest,
};
use crate::state::appointments::{DoctorAppointmentQuery, PatientAppointmentQuery};
use crate::state::listing::DoctorQuery;

/// Deployed API origin and version prefix.
pub const API_BASE: &str = "https://appointment-manager-node.onrender.com/api/v1";

pub const LOGIN_PATH: &str = "/auth/login";
pub const DOCTORS_PATH: &str = "/doctors";
pub const SPECIALIZATIONS_PATH: &str = "/specializations";
pub const APPOINTMENTS_PATH: &str = "/appointments";
pub const DOCTOR_APPOINTMENTS_PATH: &str = "/appointments/doctor";
pub const PATIENT_APPOINTMENTS_PATH: &str = "/appointments/patient";
pub const UPDATE_STATUS_PATH: &str = "/appointments/update-status";

type Params = Vec<(&'static str, String)>;

/// `POST` path for registering as `role`.
pub fn register_path(role: Role) -> String {
    format!("/auth/register/{}", role.as_path())
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// `page` and `limit` always; `search` and `specialization` only when set.
pub fn doctor_query_params(query: &DoctorQuery) -> Params {
    let mut params = vec![("page", query.page.to_string()), ("limit", query.limit.to_string())];
    if !query.query.is_empty() {
        params.push(("search", query.query.clone()));
    }
    if !query.specialization.is_empty() {
        params.push(("specialization", query.specialization.clone()));
    }
    params
}

pub fn doctor_appointment_params(query: &DoctorAppointmentQuery) -> Params {
    let mut params = vec![("page", query.page.to_string()), ("limit", query.limit.to_string())];
    if let Some(status) = query.status.query_value() {
        params.push(("status", status.to_owned()));
    }
    if !query.date.is_empty() {
        params.push(("date", query.date.clone()));
    }
    params
}

pub fn patient_appointment_params(query: &PatientAppointmentQuery) -> Params {
    let mut params = vec![("page", query.page.to_string()), ("limit", query.limit.to_string())];
    if let Some(status) = query.status.query_value() {
        params.push(("status", status.to_owned()));
    }
    params
}

/// `POST /auth/login`.
///
/// # Errors
///
/// Transport failures, non-2xx statuses, or an unexpected body.
pub async fn login(request: &LoginRequest) -> Result<Envelope<LoginData>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::post(&endpoint_url(LOGIN_PATH))
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        http::read_json(http::send(req).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// `POST /auth/register/{role}`.
///
/// # Errors
///
/// Transport failures, non-2xx statuses, or an unexpected body.
pub async fn register(role: Role, request: &RegisterRequest) -> Result<Envelope<RegisteredUser>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::post(&endpoint_url(&register_path(role)))
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        http::read_json(http::send(req).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (role, request);
        Err(ApiError::Unavailable)
    }
}

/// `GET /doctors` for one page of the listing.
///
/// # Errors
///
/// Transport failures, non-2xx statuses, or an unexpected body.
pub async fn fetch_doctors(query: &DoctorQuery) -> Result<PagedResponse<Doctor>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::get(&endpoint_url(DOCTORS_PATH))
            .query(doctor_query_params(query))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        http::read_json(http::send(req).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(ApiError::Unavailable)
    }
}

/// `GET /specializations`. A body without a `data` array yields an empty
/// list.
///
/// # Errors
///
/// Transport failures or non-2xx statuses.
pub async fn fetch_specializations() -> Result<Vec<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::get(&endpoint_url(SPECIALIZATIONS_PATH))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let body: serde_json::Value = http::read_json(http::send(req).await?).await?;
        Ok(specializations_from_body(body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Extract the `data` string array, skipping non-string entries.
pub fn specializations_from_body(body: serde_json::Value) -> Vec<String> {
    match body.get("data") {
        Some(serde_json::Value::Array(items)) => {
            items.iter().filter_map(|v| v.as_str().map(str::to_owned)).collect()
        }
        _ => Vec::new(),
    }
}

/// `POST /appointments`.
///
/// # Errors
///
/// Transport failures or non-2xx statuses.
pub async fn book_appointment(token: &str, request: &BookingRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::post(&endpoint_url(APPOINTMENTS_PATH))
            .header("Authorization", &bearer(token))
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        http::expect_ok(http::send(req).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request);
        Err(ApiError::Unavailable)
    }
}

/// `GET /appointments/doctor`.
///
/// # Errors
///
/// Transport failures, non-2xx statuses, or an unexpected body.
pub async fn fetch_doctor_appointments(
    token: &str,
    query: &DoctorAppointmentQuery,
) -> Result<PagedResponse<DoctorAppointment>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::get(&endpoint_url(DOCTOR_APPOINTMENTS_PATH))
            .header("Authorization", &bearer(token))
            .query(doctor_appointment_params(query))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        http::read_json(http::send(req).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, query);
        Err(ApiError::Unavailable)
    }
}

/// `GET /appointments/patient`.
///
/// # Errors
///
/// Transport failures, non-2xx statuses, or an unexpected body.
pub async fn fetch_patient_appointments(
    token: &str,
    query: &PatientAppointmentQuery,
) -> Result<PagedResponse<PatientAppointment>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::get(&endpoint_url(PATIENT_APPOINTMENTS_PATH))
            .header("Authorization", &bearer(token))
            .query(patient_appointment_params(query))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        http::read_json(http::send(req).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, query);
        Err(ApiError::Unavailable)
    }
}

/// `PATCH /appointments/update-status`.
///
/// # Errors
///
/// Transport failures or non-2xx statuses.
pub async fn update_status(token: &str, request: &StatusUpdateRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = gloo_net::http::Request::patch(&endpoint_url(UPDATE_STATUS_PATH))
            .header("Authorization", &bearer(token))
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        http::expect_ok(http::send(req).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{Request, Response};
    use serde::de::DeserializeOwned;

    use super::ApiError;

    pub(super) async fn send(req: Request) -> Result<Response, ApiError> {
        req.send().await.map_err(|e| ApiError::Transport(e.to_string()))
    }

    pub(super) async fn expect_ok(resp: Response) -> Result<(), ApiError> {
        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::from_response(status, &body))
    }

    pub(super) async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status, &body));
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}
