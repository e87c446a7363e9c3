#![allow(dead_code)]

// tests/common/mod.rs
use std::sync::Arc;
use std::time::SystemTime;

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::{HeaderName, CONTENT_TYPE};
use backend::{
    mint_access_token, AppState, AuditTrail, MemoryAuditSink, SecurityConfig, UserRole,
};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";

/// App state with a recording audit sink.
pub fn test_state() -> (AppState, Arc<MemoryAuditSink>) {
    let sink = Arc::new(MemoryAuditSink::default());
    let state = AppState::with_audit(
        SecurityConfig::new(TEST_SECRET),
        AuditTrail::new(sink.clone()),
    );
    (state, sink)
}

/// Mint a token the way the signin flow would, without going through HTTP.
pub fn token_for(state: &AppState, user_id: i64, email: &str, role: UserRole) -> String {
    mint_access_token(user_id, email, role, SystemTime::now(), &state.security).unwrap()
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

/// Validate that a response follows the ProblemDetails structure, carries
/// the expected status/code/detail, and obeys the header rules
/// (x-trace-id always; WWW-Authenticate exactly on 401).
pub async fn assert_problem_details<B>(
    resp: ServiceResponse<B>,
    expected_status: u16,
    expected_code: &str,
    expected_detail: &str,
) where
    B: MessageBody,
{
    assert_eq!(resp.status().as_u16(), expected_status);

    let headers = resp.headers().clone();

    let trace_hdr = HeaderName::from_static("x-trace-id");
    let trace_id = headers
        .get(&trace_hdr)
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present and valid UTF-8")
        .to_string();
    assert!(!trace_id.is_empty(), "x-trace-id header should not be empty");

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        content_type.starts_with("application/problem+json"),
        "Content-Type must be application/problem+json (got {content_type})"
    );

    let www_auth = headers.get("WWW-Authenticate");
    if expected_status == 401 {
        assert_eq!(
            www_auth.expect("401 responses carry WWW-Authenticate").to_str().unwrap(),
            "Bearer"
        );
    } else {
        assert!(
            www_auth.is_none(),
            "{expected_status} responses must not have WWW-Authenticate"
        );
    }

    let body: Value = actix_web::test::read_body_json(resp).await;
    assert_eq!(body["status"], expected_status);
    assert_eq!(body["code"], expected_code);
    assert_eq!(body["detail"], expected_detail);
    assert_eq!(
        body["trace_id"].as_str().expect("trace_id field should be a string"),
        trace_id,
        "trace_id in body should match x-trace-id header"
    );
    assert!(body["type"]
        .as_str()
        .unwrap()
        .ends_with(&format!("/errors/{expected_code}")));
}
