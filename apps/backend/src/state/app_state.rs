use std::sync::Arc;

use super::security_config::SecurityConfig;
use crate::audit::AuditTrail;
use crate::store::Store;

/// Application state containing shared resources.
#[derive(Debug, Clone)]
pub struct AppState {
    /// In-memory data store
    pub store: Arc<Store>,
    /// Token-signing configuration
    pub security: SecurityConfig,
    /// Sink handle for admin-operation audit records
    pub audit: AuditTrail,
}

impl AppState {
    /// Create an AppState with the default (tracing-backed) audit sink.
    pub fn new(security: SecurityConfig) -> Self {
        Self::with_audit(security, AuditTrail::default())
    }

    /// Create an AppState with an explicit audit trail. Tests use this to
    /// install a recording sink.
    pub fn with_audit(security: SecurityConfig, audit: AuditTrail) -> Self {
        Self {
            store: Arc::new(Store::default()),
            security,
            audit,
        }
    }
}
