//! Form drafts and their validation.
//!
//! DESIGN
//! ======
//! Registration is a tagged union over the two roles. The page turns its
//! draft into a `RegistrationForm` with one read of the selected role at
//! submit time, so the validated fields and the endpoint always come from
//! the same role.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::collections::BTreeMap;

use crate::net::api;
use crate::net::types::{BookingRequest, LoginRequest, RegisterRequest, Role};

const MIN_NAME_LEN: usize = 2;
const MIN_PASSWORD_LEN: usize = 6;
const MIN_SPECIALIZATION_LEN: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Password,
    Specialization,
    PhotoUrl,
    Role,
}

/// Per-field validation messages, rendered inline under each input.
pub type FieldErrors = BTreeMap<Field, &'static str>;

// =============================================================================
// REGISTRATION
// =============================================================================

/// Raw registration inputs, shared by both role tabs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub photo_url: String,
    pub specialization: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatientRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub photo_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DoctorRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub photo_url: String,
    pub specialization: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistrationForm {
    Patient(PatientRegistration),
    Doctor(DoctorRegistration),
}

impl RegistrationDraft {
    /// Bind the draft to `role`. The specialization input is dropped for
    /// patients.
    pub fn for_role(&self, role: Role) -> RegistrationForm {
        let name = self.name.trim().to_owned();
        let email = self.email.trim().to_owned();
        let password = self.password.clone();
        let photo_url = self.photo_url.trim().to_owned();
        match role {
            Role::Patient => RegistrationForm::Patient(PatientRegistration { name, email, password, photo_url }),
            Role::Doctor => RegistrationForm::Doctor(DoctorRegistration {
                name,
                email,
                password,
                photo_url,
                specialization: self.specialization.trim().to_owned(),
            }),
        }
    }
}

impl RegistrationForm {
    pub fn role(&self) -> Role {
        match self {
            Self::Patient(_) => Role::Patient,
            Self::Doctor(_) => Role::Doctor,
        }
    }

    /// `POST` target for this variant.
    pub fn endpoint(&self) -> String {
        api::register_path(self.role())
    }

    /// Validate against the variant's rules and build the request body.
    ///
    /// # Errors
    ///
    /// Returns every failing field with its message.
    pub fn validate(&self) -> Result<RegisterRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        let (name, email, password, photo_url, specialization) = match self {
            Self::Patient(p) => (&p.name, &p.email, &p.password, &p.photo_url, None),
            Self::Doctor(d) => {
                if d.specialization.chars().count() < MIN_SPECIALIZATION_LEN {
                    errors.insert(Field::Specialization, "Specialization is required");
                }
                (&d.name, &d.email, &d.password, &d.photo_url, Some(d.specialization.clone()))
            }
        };
        check_common(name, email, password, photo_url, &mut errors);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(RegisterRequest {
            name: name.clone(),
            email: email.clone(),
            password: password.clone(),
            photo_url: Some(photo_url.clone()).filter(|u| !u.is_empty()),
            specialization,
            role: self.role().as_claim().to_owned(),
        })
    }
}

fn check_common(name: &str, email: &str, password: &str, photo_url: &str, errors: &mut FieldErrors) {
    if name.chars().count() < MIN_NAME_LEN {
        errors.insert(Field::Name, "Name is required");
    }
    if !is_valid_email(email) {
        errors.insert(Field::Email, "Invalid email");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(Field::Password, "Password must be at least 6 characters");
    }
    if !photo_url.is_empty() && !is_valid_url(photo_url) {
        errors.insert(Field::PhotoUrl, "Invalid url");
    }
}

// =============================================================================
// LOGIN
// =============================================================================

/// Raw login inputs. `role` is the `<select>` value; empty until chosen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
    pub role: String,
}

impl LoginDraft {
    /// # Errors
    ///
    /// Returns every failing field with its message.
    pub fn validate(&self) -> Result<(Role, LoginRequest), FieldErrors> {
        let mut errors = FieldErrors::new();
        let email = self.email.trim();
        if !is_valid_email(email) {
            errors.insert(Field::Email, "Enter a valid email");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.insert(Field::Password, "Password must be at least 6 characters");
        }
        let role = Role::parse(&self.role);
        if role.is_none() {
            errors.insert(Field::Role, "Please select a role");
        }
        match role {
            Some(role) if errors.is_empty() => Ok((
                role,
                LoginRequest {
                    email: email.to_owned(),
                    password: self.password.clone(),
                    role: role.as_path().to_owned(),
                },
            )),
            _ => Err(errors),
        }
    }
}

// =============================================================================
// BOOKING
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("Please select a date")]
    MissingDate,
    #[error("You are not logged in!")]
    NotLoggedIn,
}

/// Check the booking preconditions before any network call. Returns the
/// bearer token and the request body.
///
/// # Errors
///
/// [`BookingError::MissingDate`] for an empty date, then
/// [`BookingError::NotLoggedIn`] when no token is held.
pub fn validate_booking(
    doctor_id: &str,
    date: &str,
    token: Option<&str>,
) -> Result<(String, BookingRequest), BookingError> {
    let date = date.trim();
    if date.is_empty() {
        return Err(BookingError::MissingDate);
    }
    let token = token.filter(|t| !t.is_empty()).ok_or(BookingError::NotLoggedIn)?;
    Ok((token.to_owned(), BookingRequest { doctor_id: doctor_id.to_owned(), date: date.to_owned() }))
}

// =============================================================================
// FIELD RULES
// =============================================================================

/// `local@label.tld`: dot-separated local part without empty segments,
/// hyphen-inner domain labels, and an alphabetic TLD of two or more letters.
pub fn is_valid_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    let allowed = |c: char| c.is_ascii_alphanumeric() || "_'+-".contains(c);
    !local.is_empty()
        && local.split('.').all(|segment| !segment.is_empty() && segment.chars().all(allowed))
        && !local.ends_with('\'')
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, hosts)) = labels.split_last() else {
        return false;
    };
    let valid_label = |label: &&str| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    };
    !hosts.is_empty() && hosts.iter().all(valid_label) && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Absolute `http(s)` URL with a host.
pub fn is_valid_url(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let rest = raw.strip_prefix("https://").or_else(|| raw.strip_prefix("http://"));
    rest.and_then(|r| r.split(['/', '?', '#']).next()).is_some_and(|host| !host.is_empty())
}
