//! Audit trail for sensitive admin operations.
//!
//! Every guarded operation is wrapped in [`audited`] at its call site, so
//! the wrap point is visible in the call graph and no early return inside
//! the operation can skip the record: the record is emitted after the
//! wrapped future finishes on every exit path, success or error, and the
//! original result is returned unchanged.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use actix_web::{HttpMessage, HttpRequest};
use parking_lot::Mutex;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::info;

use crate::error::AppError;
use crate::extractors::current_user::AuthContext;

/// One line per guarded call: who, when (captured before the operation
/// ran), and which endpoint. Emitted, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditRecord {
    pub actor_id: i64,
    pub occurred_at: OffsetDateTime,
    pub path: String,
}

/// Line-oriented audit output. Where the line goes (log stream, file,
/// collector) is the sink's business.
pub trait AuditSink: Send + Sync {
    fn emit(&self, record: &AuditRecord);
}

/// Production sink: one structured log event per record.
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn emit(&self, record: &AuditRecord) {
        let occurred_at = record
            .occurred_at
            .format(&Rfc3339)
            .unwrap_or_else(|_| record.occurred_at.to_string());

        info!(
            event = "ADMIN_AUDIT",
            actor_id = record.actor_id,
            occurred_at = %occurred_at,
            path = %record.path,
            "Sensitive operation invoked"
        );
    }
}

/// Recording sink for tests.
#[derive(Default)]
pub struct MemoryAuditSink {
    records: Mutex<Vec<AuditRecord>>,
}

impl MemoryAuditSink {
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records.lock().clone()
    }
}

impl AuditSink for MemoryAuditSink {
    fn emit(&self, record: &AuditRecord) {
        self.records.lock().push(record.clone());
    }
}

/// Cheap-clone handle to the configured sink; lives in `AppState`.
#[derive(Clone)]
pub struct AuditTrail {
    sink: Arc<dyn AuditSink>,
}

impl AuditTrail {
    pub fn new(sink: Arc<dyn AuditSink>) -> Self {
        Self { sink }
    }

    pub fn record(&self, record: AuditRecord) {
        self.sink.emit(&record);
    }
}

impl Default for AuditTrail {
    fn default() -> Self {
        Self::new(Arc::new(TracingAuditSink))
    }
}

impl fmt::Debug for AuditTrail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuditTrail").finish_non_exhaustive()
    }
}

/// Run a guarded operation, emitting exactly one audit record around it.
///
/// The actor and path are re-derived from the same request-scoped
/// [`AuthContext`] the access gate stored (the token is not re-verified);
/// the timestamp is captured before the operation starts. A request that
/// gets here without an auth context is a wiring defect and fails before
/// the operation runs.
pub async fn audited<T, F>(trail: &AuditTrail, req: &HttpRequest, op: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    let actor_id = match req.extensions().get::<AuthContext>() {
        Some(ctx) => ctx.claims.sub,
        None => {
            tracing::error!(
                path = %req.path(),
                "audited operation reached without an auth context; \
                 the route is missing the access gate"
            );
            return Err(AppError::wiring(
                "no authentication context for audited operation",
            ));
        }
    };
    let path = req.path().to_string();
    let occurred_at = OffsetDateTime::now_utc();

    let result = op.await;

    trail.record(AuditRecord {
        actor_id,
        occurred_at,
        path,
    });

    result
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use actix_web::test::TestRequest;
    use actix_web::HttpMessage;

    use super::{audited, AuditTrail, MemoryAuditSink};
    use crate::auth::claims::{AccessClaims, UserRole};
    use crate::error::AppError;
    use crate::errors::ErrorCode;
    use crate::extractors::current_user::AuthContext;

    fn audited_request(path: &str) -> actix_web::HttpRequest {
        let req = TestRequest::default().uri(path).to_http_request();
        req.extensions_mut().insert(AuthContext {
            claims: AccessClaims {
                sub: 1,
                email: "a@b.com".to_string(),
                role: UserRole::Admin,
                iat: 0,
                exp: i64::MAX,
            },
            token: "raw-token".to_string(),
        });
        req
    }

    #[actix_web::test]
    async fn emits_exactly_one_record_on_success() {
        let sink = Arc::new(MemoryAuditSink::default());
        let trail = AuditTrail::new(sink.clone());
        let req = audited_request("/api/admin/comments/9");
        let calls = AtomicUsize::new(0);

        let out = audited(&trail, &req, async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<_, AppError>("done")
        })
        .await
        .unwrap();

        assert_eq!(out, "done");
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].actor_id, 1);
        assert_eq!(records[0].path, "/api/admin/comments/9");
    }

    #[actix_web::test]
    async fn emits_record_and_reraises_on_failure() {
        let sink = Arc::new(MemoryAuditSink::default());
        let trail = AuditTrail::new(sink.clone());
        let req = audited_request("/api/admin/users/5/role");

        let result: Result<(), _> = audited(&trail, &req, async {
            Err(AppError::not_found(ErrorCode::UserNotFound, "User not found"))
        })
        .await;

        match result {
            Err(AppError::NotFound { code, .. }) => assert_eq!(code, ErrorCode::UserNotFound),
            other => panic!("expected the original error back, got {other:?}"),
        }
        assert_eq!(sink.records().len(), 1);
    }

    #[actix_web::test]
    async fn missing_auth_context_fails_before_the_operation() {
        let sink = Arc::new(MemoryAuditSink::default());
        let trail = AuditTrail::new(sink.clone());
        let req = TestRequest::default().to_http_request();
        let calls = AtomicUsize::new(0);

        let result: Result<(), _> = audited(&trail, &req, async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
        .await;

        assert!(matches!(result, Err(AppError::Wiring { .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(sink.records().is_empty());
    }
}
