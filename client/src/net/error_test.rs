use super::*;

#[test]
fn from_response_extracts_server_message() {
    let err = ApiError::from_response(409, r#"{"message":"Slot already booked"}"#);
    assert_eq!(err, ApiError::Server { status: 409, message: Some("Slot already booked".to_owned()) });
    assert_eq!(err.user_message(), "Slot already booked");
}

#[test]
fn from_response_without_message_uses_fallback() {
    let err = ApiError::from_response(500, "<html>Bad Gateway</html>");
    assert_eq!(err, ApiError::Server { status: 500, message: None });
    assert_eq!(err.user_message(), FALLBACK_MESSAGE);
}

#[test]
fn from_response_blank_message_uses_fallback() {
    let err = ApiError::from_response(400, r#"{"message":"   "}"#);
    assert_eq!(err.user_message(), FALLBACK_MESSAGE);
}

#[test]
fn decode_error_uses_fallback() {
    assert_eq!(ApiError::Decode("missing field".to_owned()).user_message(), FALLBACK_MESSAGE);
}

#[test]
fn unauthenticated_message_matches_notification_text() {
    assert_eq!(ApiError::Unauthenticated.user_message(), "You are not logged in!");
}

#[test]
fn auth_rejection_detects_401_and_403() {
    assert!(ApiError::Server { status: 401, message: None }.is_auth_rejection());
    assert!(ApiError::Server { status: 403, message: None }.is_auth_rejection());
    assert!(!ApiError::Server { status: 404, message: None }.is_auth_rejection());
    assert!(!ApiError::Transport("offline".to_owned()).is_auth_rejection());
}
