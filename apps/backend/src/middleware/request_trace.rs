//! Per-request trace id.
//!
//! `RequestTrace` assigns every inbound request a fresh trace id, stores it
//! in request extensions, scopes a task-local around the rest of the
//! pipeline so error rendering and security logging can reach it, and
//! echoes it back in an `x-trace-id` response header.

use std::cell::RefCell;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::HttpMessage;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tokio::task_local;
use uuid::Uuid;

/// Trace id stored in request extensions.
#[derive(Debug, Clone)]
pub struct TraceId(pub String);

task_local! {
    static TRACE_ID: RefCell<Option<String>>;
}

/// The current request's trace id, or "unknown" outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|cell| {
            cell.borrow()
                .as_ref()
                .cloned()
                .unwrap_or_else(|| "unknown".to_string())
        })
        .unwrap_or_else(|_| "unknown".to_string())
}

pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware { service }))
    }
}

pub struct RequestTraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = Uuid::new_v4().to_string();
        req.extensions_mut().insert(TraceId(trace_id.clone()));

        let fut = self.service.call(req);

        Box::pin(TRACE_ID.scope(RefCell::new(Some(trace_id.clone())), async move {
            let mut res = fut.await?;

            res.headers_mut().insert(
                HeaderName::from_static("x-trace-id"),
                HeaderValue::from_str(&trace_id)
                    .unwrap_or_else(|_| HeaderValue::from_static("invalid-trace-id")),
            );

            Ok(res)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::trace_id;

    #[tokio::test]
    async fn trace_id_outside_request_scope_is_unknown() {
        assert_eq!(trace_id(), "unknown");
    }
}
