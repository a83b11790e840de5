use argon2::PasswordVerifier;
use courtbook_api::middleware::auth;
use courtbook_core::errors::CourtError;

#[tokio::test]
async fn test_error_handling_not_found() {
    let error = CourtError::NotFound("Slot not found".to_string());

    let response = courtbook_api::middleware::error_handling::map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_validation() {
    let error = CourtError::Validation("Invalid input".to_string());

    let response = courtbook_api::middleware::error_handling::map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_authentication() {
    let error = CourtError::Authentication("Invalid password".to_string());

    let response = courtbook_api::middleware::error_handling::map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_error_handling_authorization() {
    let error = CourtError::Authorization("Access denied".to_string());

    let response = courtbook_api::middleware::error_handling::map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_error_handling_conflict_is_bad_request() {
    // "Slot already booked" ships as 400, the status booking clients
    // already consume
    let error = CourtError::Conflict("Slot already booked".to_string());

    let response = courtbook_api::middleware::error_handling::map_error(error);

    assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_database() {
    let error = CourtError::Database(eyre::eyre!("Database error"));

    let response = courtbook_api::middleware::error_handling::map_error(error);

    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_error_handling_internal() {
    let error = CourtError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    let response = courtbook_api::middleware::error_handling::map_error(error);

    assert_eq!(
        response.status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_hash_password() {
    let password = "test_password";
    let hashed = auth::hash_password(password).unwrap();

    // The hash is salted PHC output, never the raw password
    assert_ne!(hashed, password);
    assert!(hashed.starts_with("$argon2"));
}

#[tokio::test]
async fn test_verify_password_round_trip() {
    let password = "test_password";
    let hashed = auth::hash_password(password).unwrap();

    assert!(auth::verify_password(password, &hashed).unwrap());
    assert!(!auth::verify_password("wrong_password", &hashed).unwrap());

    // Cross-check against argon2 directly
    let argon2 = argon2::Argon2::default();
    let parsed_hash = argon2::PasswordHash::new(&hashed).unwrap();
    assert!(
        argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    );
}

#[tokio::test]
async fn test_token_round_trip() {
    // Sign and verify against the secret carried in the shared state
    let state = crate::test_utils::TestContext::new().build_state();

    let token = auth::issue_token(7, true, &state.jwt_secret).unwrap();

    let claims = auth::decode_token(&token, &state.jwt_secret).unwrap();
    assert_eq!(claims.id, 7);
    assert!(claims.is_admin);
}

#[tokio::test]
async fn test_token_rejects_wrong_secret() {
    let token = auth::issue_token(7, false, "test-secret").unwrap();

    let error = auth::decode_token(&token, "other-secret").unwrap_err();
    match error {
        CourtError::Authorization(message) => assert_eq!(message, "Invalid token"),
        other => panic!("expected Authorization, got {:?}", other),
    }
}

#[tokio::test]
async fn test_token_rejects_garbage() {
    let error = auth::decode_token("not-a-token", "test-secret").unwrap_err();
    assert!(matches!(error, CourtError::Authorization(_)));
}

#[tokio::test]
async fn test_ensure_admin() {
    let admin = auth::AuthUser {
        id: 1,
        is_admin: true,
    };
    let member = auth::AuthUser {
        id: 2,
        is_admin: false,
    };

    assert!(auth::ensure_admin(&admin).is_ok());
    assert!(matches!(
        auth::ensure_admin(&member),
        Err(CourtError::Authorization(_))
    ));
}
