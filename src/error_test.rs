use super::*;

// =============================================================================
// from_status
// =============================================================================

#[test]
fn from_status_maps_client_reaction_statuses() {
    assert!(matches!(
        ApiError::from_status(StatusCode::UNAUTHORIZED, "/api/spaces/user", String::new()),
        ApiError::Unauthorized
    ));
    assert!(matches!(
        ApiError::from_status(StatusCode::FORBIDDEN, "/api/spaces/x", String::new()),
        ApiError::Forbidden { path } if path == "/api/spaces/x"
    ));
    assert!(matches!(
        ApiError::from_status(StatusCode::NOT_FOUND, "/api/spaces/x", String::new()),
        ApiError::NotFound { .. }
    ));
}

#[test]
fn from_status_keeps_body_for_other_statuses() {
    let err = ApiError::from_status(StatusCode::CONFLICT, "/p", "duplicate name".into());
    assert_eq!(err.to_string(), "HTTP 409: duplicate name");
    assert_eq!(err.status(), Some(409));
}

// =============================================================================
// codes and outcomes
// =============================================================================

#[test]
fn error_codes_are_stable() {
    assert_eq!(ApiError::Unauthorized.error_code(), "E_UNAUTHORIZED");
    assert_eq!(ApiError::MissingAccessToken.error_code(), "E_MISSING_TOKEN");
    assert_eq!(ApiError::Forbidden { path: "p".into() }.error_code(), "E_FORBIDDEN");
}

#[test]
fn server_errors_are_retryable() {
    assert!(ApiError::Status { status: 503, message: String::new() }.retryable());
    assert!(!ApiError::Status { status: 400, message: String::new() }.retryable());
    assert!(!ApiError::Unauthorized.retryable());
}

#[test]
fn access_outcome_follows_status() {
    assert_eq!(ApiError::Forbidden { path: "p".into() }.access_outcome(), AccessOutcome::ReadOnly);
    assert_eq!(ApiError::NotFound { path: "p".into() }.access_outcome(), AccessOutcome::NotFound);
    assert_eq!(ApiError::Unauthorized.access_outcome(), AccessOutcome::LoginRequired);
    assert_eq!(ApiError::MissingAccessToken.access_outcome(), AccessOutcome::LoginRequired);
    assert_eq!(
        ApiError::Status { status: 500, message: String::new() }.access_outcome(),
        AccessOutcome::LoginRequired
    );
}

#[test]
fn store_error_codes() {
    let err = StoreError::Io {
        path: "/tmp/x".into(),
        source: std::io::Error::other("boom"),
    };
    assert_eq!(err.error_code(), "E_STORE_IO");
    assert!(err.to_string().contains("/tmp/x"));
}
