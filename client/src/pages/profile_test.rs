use super::*;
use crate::net::types::Role;

fn identity() -> Identity {
    Identity {
        id: "u-1".to_owned(),
        email: "doc@clinic.test".to_owned(),
        role: Role::Doctor,
        name: Some("Dr. Rao".to_owned()),
        photo_url: None,
        specialization: Some("Cardiology".to_owned()),
    }
}

#[test]
fn doctor_profile_lists_email_then_specialization() {
    assert_eq!(
        profile_rows(&identity()),
        vec![("Email", "doc@clinic.test".to_owned()), ("Specialization", "Cardiology".to_owned())]
    );
}

#[test]
fn blank_specialization_is_skipped() {
    let mut id = identity();
    id.role = Role::Patient;
    id.specialization = Some("  ".to_owned());
    assert_eq!(profile_rows(&id), vec![("Email", "doc@clinic.test".to_owned())]);
    id.specialization = None;
    assert_eq!(profile_rows(&id).len(), 1);
}
