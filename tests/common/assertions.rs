//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response is OK with the exact plaintext body
pub fn assert_text(response: &TestResponse, expected: &str) {
    assert_ok(response);
    assert_eq!(response.text(), expected);
}

/// Assert response is a 500 carrying the given error message
pub fn assert_error(response: &TestResponse, message: &str) {
    assert_status(response, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), message);
}

/// Assert response is OK and carries a `#RRGGBB` color
pub fn assert_hex_color(response: &TestResponse) -> String {
    assert_ok(response);
    let body = response.text();
    assert!(
        shade_family::is_hex_color(&body) && body.len() == 7,
        "Expected #RRGGBB color, got {body:?}"
    );
    body
}
