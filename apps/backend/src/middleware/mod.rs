pub mod access_gate;
pub mod cors;
pub mod request_trace;
pub mod route_policy;
pub mod structured_logger;

pub use access_gate::AccessGate;
pub use cors::cors_middleware;
pub use request_trace::RequestTrace;
pub use route_policy::{AccessPolicy, RoutePolicy};
pub use structured_logger::StructuredLogger;
