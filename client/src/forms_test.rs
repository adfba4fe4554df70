use super::*;

fn draft() -> RegistrationDraft {
    RegistrationDraft {
        name: "Jane Doe".to_owned(),
        email: "jane@example.com".to_owned(),
        password: "secret1".to_owned(),
        photo_url: String::new(),
        specialization: "Cardiology".to_owned(),
    }
}

// =============================================================
// Registration: role binding
// =============================================================

#[test]
fn each_role_posts_to_its_own_endpoint() {
    for role in [Role::Patient, Role::Doctor] {
        let form = draft().for_role(role);
        assert_eq!(form.role(), role);
        assert_eq!(form.endpoint(), format!("/auth/register/{}", role.as_path()));
    }
}

#[test]
fn doctor_request_includes_specialization() {
    let req = draft().for_role(Role::Doctor).validate().unwrap();
    assert_eq!(req.specialization.as_deref(), Some("Cardiology"));
    assert_eq!(req.role, "DOCTOR");
}

#[test]
fn patient_request_drops_specialization() {
    let req = draft().for_role(Role::Patient).validate().unwrap();
    assert_eq!(req.specialization, None);
    assert_eq!(req.role, "PATIENT");
}

#[test]
fn doctor_requires_specialization() {
    let mut d = draft();
    d.specialization = " ".to_owned();
    let errors = d.for_role(Role::Doctor).validate().unwrap_err();
    assert_eq!(errors.get(&Field::Specialization), Some(&"Specialization is required"));
    assert!(d.for_role(Role::Patient).validate().is_ok());
}

// =============================================================
// Registration: field rules
// =============================================================

#[test]
fn collects_every_failing_field() {
    let d = RegistrationDraft {
        name: "J".to_owned(),
        email: "not-an-email".to_owned(),
        password: "12345".to_owned(),
        photo_url: "ftp:/x".to_owned(),
        specialization: String::new(),
    };
    let errors = d.for_role(Role::Doctor).validate().unwrap_err();
    assert_eq!(errors.get(&Field::Name), Some(&"Name is required"));
    assert_eq!(errors.get(&Field::Email), Some(&"Invalid email"));
    assert_eq!(errors.get(&Field::Password), Some(&"Password must be at least 6 characters"));
    assert_eq!(errors.get(&Field::PhotoUrl), Some(&"Invalid url"));
    assert_eq!(errors.get(&Field::Specialization), Some(&"Specialization is required"));
}

#[test]
fn photo_url_is_optional_but_checked_when_present() {
    let mut d = draft();
    d.photo_url = "https://randomuser.me/api/portraits/women/1.jpg".to_owned();
    let req = d.for_role(Role::Patient).validate().unwrap();
    assert_eq!(req.photo_url.as_deref(), Some("https://randomuser.me/api/portraits/women/1.jpg"));
    d.photo_url = "  ".to_owned();
    assert_eq!(d.for_role(Role::Patient).validate().unwrap().photo_url, None);
}

#[test]
fn inputs_are_trimmed_but_password_is_not() {
    let mut d = draft();
    d.name = "  Jane  ".to_owned();
    d.email = " jane@example.com ".to_owned();
    d.password = " pass1 ".to_owned();
    let req = d.for_role(Role::Patient).validate().unwrap();
    assert_eq!(req.name, "Jane");
    assert_eq!(req.email, "jane@example.com");
    assert_eq!(req.password, " pass1 ");
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_scenario_builds_lowercase_role_payload() {
    let login = LoginDraft {
        email: "a@x.com".to_owned(),
        password: "secret1".to_owned(),
        role: "doctor".to_owned(),
    };
    let (role, req) = login.validate().unwrap();
    assert_eq!(role, Role::Doctor);
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "email": "a@x.com", "password": "secret1", "role": "doctor" })
    );
}

#[test]
fn login_requires_role_selection() {
    let login = LoginDraft { email: "a@x.com".to_owned(), password: "secret1".to_owned(), role: String::new() };
    let errors = login.validate().unwrap_err();
    assert_eq!(errors.get(&Field::Role), Some(&"Please select a role"));
    assert_eq!(errors.len(), 1);
}

#[test]
fn login_reports_email_and_password() {
    let login = LoginDraft { email: "bad".to_owned(), password: "123".to_owned(), role: "patient".to_owned() };
    let errors = login.validate().unwrap_err();
    assert_eq!(errors.get(&Field::Email), Some(&"Enter a valid email"));
    assert!(errors.contains_key(&Field::Password));
    assert!(!errors.contains_key(&Field::Role));
}

// =============================================================
// Booking
// =============================================================

#[test]
fn booking_requires_date_first() {
    assert_eq!(validate_booking("d-1", "", None), Err(BookingError::MissingDate));
    assert_eq!(validate_booking("d-1", "  ", Some("tok")), Err(BookingError::MissingDate));
}

#[test]
fn booking_requires_token() {
    assert_eq!(validate_booking("d-1", "2025-05-01", None), Err(BookingError::NotLoggedIn));
    assert_eq!(validate_booking("d-1", "2025-05-01", Some("")), Err(BookingError::NotLoggedIn));
}

#[test]
fn booking_builds_request() {
    let (token, req) = validate_booking("d-1", "2025-05-01", Some("tok")).unwrap();
    assert_eq!(token, "tok");
    assert_eq!(req, BookingRequest { doctor_id: "d-1".to_owned(), date: "2025-05-01".to_owned() });
}

#[test]
fn booking_error_messages() {
    assert_eq!(BookingError::MissingDate.to_string(), "Please select a date");
    assert_eq!(BookingError::NotLoggedIn.to_string(), "You are not logged in!");
}

// =============================================================
// Field rules
// =============================================================

#[test]
fn email_rules() {
    assert!(is_valid_email("a@x.com"));
    assert!(is_valid_email("first.last@sub.example.org"));
    assert!(!is_valid_email("a@x"));
    assert!(!is_valid_email("@x.com"));
    assert!(!is_valid_email("a@@x.com"));
    assert!(!is_valid_email("a b@x.com"));
    assert!(!is_valid_email("a@.com"));
}

#[test]
fn email_rejects_empty_labels_and_edge_punctuation() {
    for bad in ["a@b..com", ".a@b.com", "a.@b.com", "a..b@x.com", "a@-b.com", "a@b-.com", "a@x.c0m", "a@x.c"] {
        assert!(!is_valid_email(bad), "{bad}");
    }
    for good in ["o'neil@x.com", "a+tag@mail-host.example.io", "A_B-c@X.COM"] {
        assert!(is_valid_email(good), "{good}");
    }
}

#[test]
fn url_rules() {
    assert!(is_valid_url("https://example.com/photo.jpg"));
    assert!(is_valid_url("http://localhost:3000"));
    assert!(!is_valid_url("example.com/photo.jpg"));
    assert!(!is_valid_url("https://"));
    assert!(!is_valid_url("https://exa mple.com"));
}
