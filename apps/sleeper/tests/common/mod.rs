#![allow(dead_code)]

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;

// Logging is auto-installed for every test binary that includes `mod common;`
#[ctor::ctor]
fn init_logging() {
    sleeper_test_support::logging::init();
}

/// Assert an error response: expected status, empty body, trace header present.
pub async fn assert_status_only_error(resp: ServiceResponse<BoxBody>, expected_status: u16) {
    assert_eq!(resp.status().as_u16(), expected_status);
    assert!(
        resp.headers().contains_key("x-trace-id"),
        "error responses carry x-trace-id"
    );
    assert!(
        resp.headers().contains_key("x-request-id"),
        "every response carries x-request-id"
    );

    let body = test::read_body(resp).await;
    assert!(body.is_empty(), "error body must be empty, got {body:?}");
}
