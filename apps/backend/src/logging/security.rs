use tracing::warn;

use crate::logging::pii::Redacted;
use crate::middleware::request_trace;

/// Log a security-relevant login failure event.
pub fn login_failed(reason: &str, email: Option<&str>) {
    let trace_id = request_trace::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        email = %email.map(Redacted).unwrap_or(Redacted("")),
        reason,
        "Authentication failure"
    );
}

/// Log a request the access gate short-circuited.
pub fn gate_rejected(code: &str, path: &str) {
    let trace_id = request_trace::trace_id();

    warn!(
        event = "SECURITY_GATE_REJECTED",
        %trace_id,
        code,
        path,
        "Request rejected by access gate"
    );
}
