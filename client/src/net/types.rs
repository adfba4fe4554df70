//! Wire DTOs for the clinic REST API.
//!
//! DESIGN
//! ======
//! These types mirror the external API's JSON bodies (camelCase envelopes,
//! snake_case user fields) so serde stays the only translation layer between
//! the network and the page state.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Account role. Gates which forms, endpoints, and pages are active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    #[serde(alias = "patient")]
    Patient,
    #[serde(alias = "doctor")]
    Doctor,
}

impl Role {
    /// Lowercase form used in endpoint paths and the login payload.
    pub fn as_path(self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Doctor => "doctor",
        }
    }

    /// Uppercase form used in token claims and registration bodies.
    pub fn as_claim(self) -> &'static str {
        match self {
            Self::Patient => "PATIENT",
            Self::Doctor => "DOCTOR",
        }
    }

    /// Parse a `<select>` value; accepts either case.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "patient" => Some(Self::Patient),
            "doctor" => Some(Self::Doctor),
            _ => None,
        }
    }

    /// First dashboard page for this role.
    pub fn landing_path(self) -> &'static str {
        match self {
            Self::Patient => "/dashboard/patient/doctorslist",
            Self::Doctor => "/dashboard/doctor/appointments",
        }
    }
}

/// User as returned inside the login envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
}

/// `data` payload of a successful `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginData {
    pub user: User,
    pub token: String,
}

/// Standard `{success, statusCode, message, data}` envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub message: String,
    pub data: T,
}

/// Account created by `POST /auth/register/{role}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// A bookable doctor. Read-only from the client's perspective.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialization: String,
    #[serde(default, alias = "photoUrl")]
    pub photo_url: Option<String>,
}

/// Patient summary attached to appointments in the doctor view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Appointment status as reported by the API.
///
/// `Complete` and `Completed` are both kept: the doctor endpoint reports
/// `COMPLETE` while the patient endpoint reports `COMPLETED`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AppointmentStatus {
    #[serde(alias = "pending")]
    Pending,
    #[serde(alias = "complete")]
    Complete,
    #[serde(alias = "completed")]
    Completed,
    #[serde(alias = "cancelled")]
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Complete => "COMPLETE",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Only pending appointments can be transitioned from the UI.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Badge modifier class for the status chip.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Self::Pending => "status-badge status-badge--pending",
            Self::Complete | Self::Completed => "status-badge status-badge--complete",
            Self::Cancelled => "status-badge status-badge--cancelled",
            Self::Unknown => "status-badge",
        }
    }
}

/// Forward transitions a doctor may request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTransition {
    Complete,
    Cancel,
}

impl StatusTransition {
    /// Status written locally once the server acknowledges the transition.
    pub fn target(self) -> AppointmentStatus {
        match self {
            Self::Complete => AppointmentStatus::Complete,
            Self::Cancel => AppointmentStatus::Cancelled,
        }
    }

    pub fn confirm_message(self) -> String {
        format!("Are you sure you want to mark this appointment as {}?", self.target().as_str())
    }
}

/// Appointment row in `GET /appointments/doctor`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorAppointment {
    pub id: String,
    pub patient: PatientSummary,
    pub date: String,
    pub status: AppointmentStatus,
}

/// Appointment row in `GET /appointments/patient`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientAppointment {
    pub id: String,
    pub doctor: Doctor,
    pub date: String,
    pub status: AppointmentStatus,
}

/// Common view over both appointment shapes for list patching.
pub trait Appointment {
    fn id(&self) -> &str;
    fn status(&self) -> &AppointmentStatus;
    fn set_status(&mut self, status: AppointmentStatus);
}

impl Appointment for DoctorAppointment {
    fn id(&self) -> &str {
        &self.id
    }
    fn status(&self) -> &AppointmentStatus {
        &self.status
    }
    fn set_status(&mut self, status: AppointmentStatus) {
        self.status = status;
    }
}

impl Appointment for PatientAppointment {
    fn id(&self) -> &str {
        &self.id
    }
    fn status(&self) -> &AppointmentStatus {
        &self.status
    }
    fn set_status(&mut self, status: AppointmentStatus) {
        self.status = status;
    }
}

/// Paginated list body. Doctors report `total`; appointments report
/// `totalPages`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default, deserialize_with = "deserialize_opt_u64")]
    pub total: Option<u64>,
    #[serde(rename = "totalPages", default, deserialize_with = "deserialize_opt_u64")]
    pub total_pages: Option<u64>,
}

/// `GET /specializations` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecializationList {
    #[serde(default)]
    pub data: Vec<String>,
}

/// Error body returned by the API on non-2xx responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// Lowercased role, as the login endpoint expects.
    pub role: String,
}

/// Body of `POST /auth/register/{role}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    /// Uppercased role claim.
    pub role: String,
}

/// Body of `POST /appointments`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    #[serde(rename = "doctorId")]
    pub doctor_id: String,
    pub date: String,
}

/// Body of `PATCH /appointments/update-status`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusUpdateRequest {
    pub appointment_id: String,
    pub status: AppointmentStatus,
}

fn deserialize_opt_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(number)) => {
            if let Some(int) = number.as_u64() {
                return Ok(Some(int));
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= u64::MAX as f64
            {
                return Ok(Some(float as u64));
            }
            Err(D::Error::custom("expected non-negative integer"))
        }
        Some(serde_json::Value::String(raw)) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected integer string, got {raw:?}"))),
        Some(_) => Err(D::Error::custom("expected number")),
    }
}
