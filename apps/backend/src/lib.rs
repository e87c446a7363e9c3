#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod audit;
pub mod auth;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use audit::{audited, AuditRecord, AuditSink, AuditTrail, MemoryAuditSink, TracingAuditSink};
pub use auth::claims::{AccessClaims, UserRole};
pub use auth::jwt::{mint_access_token, verify_access_token};
pub use error::AppError;
pub use errors::ErrorCode;
pub use extractors::current_user::{AuthContext, CurrentUser};
pub use middleware::access_gate::AccessGate;
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::route_policy::{AccessPolicy, RoutePolicy};
pub use middleware::structured_logger::StructuredLogger;
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
