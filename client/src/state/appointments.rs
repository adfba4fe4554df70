//! Appointment list filters and in-place status patching.
//!
//! The two list endpoints disagree on the completed label (`COMPLETE` for
//! doctors, `COMPLETED` for patients), so each view carries its own filter
//! enum with the label its endpoint uses.

#[cfg(test)]
#[path = "appointments_test.rs"]
mod appointments_test;

use crate::net::types::{Appointment, AppointmentStatus};
use crate::state::listing::{APPOINTMENT_PAGE_SIZE, ListingState};

/// Status filter on the doctor's appointment view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DoctorStatusFilter {
    #[default]
    All,
    Pending,
    Complete,
    Cancelled,
}

impl DoctorStatusFilter {
    pub const OPTIONS: [Self; 4] = [Self::All, Self::Pending, Self::Complete, Self::Cancelled];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Status",
            Self::Pending => "Pending",
            Self::Complete => "Complete",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            Self::All => "",
            Self::Pending => "PENDING",
            Self::Complete => "COMPLETE",
            Self::Cancelled => "CANCELLED",
        }
    }

    pub fn from_value(raw: &str) -> Self {
        Self::OPTIONS.into_iter().find(|f| f.value() == raw).unwrap_or_default()
    }

    /// Value sent as `status`. The doctor endpoint only accepts `PENDING` and
    /// `CANCELLED`; other selections are left off the request.
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            Self::Pending | Self::Cancelled => Some(self.value()),
            Self::All | Self::Complete => None,
        }
    }
}

/// Status filter on the patient's appointment view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PatientStatusFilter {
    #[default]
    All,
    Pending,
    Completed,
    Cancelled,
}

impl PatientStatusFilter {
    pub const OPTIONS: [Self; 4] = [Self::All, Self::Pending, Self::Completed, Self::Cancelled];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            Self::All => "",
            Self::Pending => "PENDING",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    pub fn from_value(raw: &str) -> Self {
        Self::OPTIONS.into_iter().find(|f| f.value() == raw).unwrap_or_default()
    }

    pub fn query_value(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            _ => Some(self.value()),
        }
    }
}

/// Cache key for `GET /appointments/doctor`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DoctorAppointmentQuery {
    pub page: u32,
    pub limit: u32,
    pub status: DoctorStatusFilter,
    /// `YYYY-MM-DD` from the date input, or empty.
    pub date: String,
}

impl Default for DoctorAppointmentQuery {
    fn default() -> Self {
        Self { page: 1, limit: APPOINTMENT_PAGE_SIZE, status: DoctorStatusFilter::All, date: String::new() }
    }
}

/// Cache key for `GET /appointments/patient`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatientAppointmentQuery {
    pub page: u32,
    pub limit: u32,
    pub status: PatientStatusFilter,
}

impl Default for PatientAppointmentQuery {
    fn default() -> Self {
        Self { page: 1, limit: APPOINTMENT_PAGE_SIZE, status: PatientStatusFilter::All }
    }
}

impl<T: Appointment> ListingState<T> {
    /// Patch one appointment's status after the server acknowledged it.
    ///
    /// Only a `PENDING` appointment moves; terminal rows are left alone, so
    /// a transition cannot be undone or repeated from the UI. Returns whether
    /// a row changed.
    pub fn apply_status(&mut self, appointment_id: &str, status: AppointmentStatus) -> bool {
        let Some(row) = self.items.iter_mut().find(|a| a.id() == appointment_id) else {
            return false;
        };
        if !row.status().is_pending() {
            return false;
        }
        row.set_status(status);
        true
    }
}
