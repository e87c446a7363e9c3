//! The access gate.
//!
//! Sits in front of every route and gives each request exactly one
//! terminal outcome: forward (public routes, or verified and authorized
//! requests, with the verified identity stashed in request extensions) or
//! short-circuit with a structured 401/403. Authentication never reaches
//! business logic in a partial state.

use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::ResponseError;
use actix_web::{web, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::bearer::bearer_token;
use crate::auth::claims::UserRole;
use crate::auth::jwt::verify_access_token;
use crate::error::AppError;
use crate::extractors::current_user::AuthContext;
use crate::logging::security;
use crate::middleware::route_policy::{AccessPolicy, RoutePolicy};
use crate::state::app_state::AppState;

pub struct AccessGate {
    policy: Arc<RoutePolicy>,
}

impl AccessGate {
    pub fn new(policy: RoutePolicy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AccessGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AccessGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessGateMiddleware {
            service,
            policy: Arc::clone(&self.policy),
        }))
    }
}

pub struct AccessGateMiddleware<S> {
    service: S,
    policy: Arc<RoutePolicy>,
}

impl<S, B> Service<ServiceRequest> for AccessGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let required = self.policy.classify(req.path());

        if required == AccessPolicy::Public {
            let fut = self.service.call(req);
            return Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) });
        }

        match authenticate(&req, required) {
            Ok(ctx) => {
                // Stash the verified identity before the handler runs.
                req.extensions_mut().insert(ctx);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(err) => Box::pin(async move {
                security::gate_rejected(err.code().as_str(), req.path());
                let res = err.error_response().map_into_right_body();
                Ok(req.into_response(res))
            }),
        }
    }
}

/// Authenticate (and, for admin routes, authorize) a non-public request.
/// Header parsing, verification, and the role check each short-circuit
/// with their own error so callers can tell the outcomes apart.
fn authenticate(req: &ServiceRequest, required: AccessPolicy) -> Result<AuthContext, AppError> {
    let token = bearer_token(req.request())?.ok_or_else(AppError::unauthorized_missing_bearer)?;

    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::wiring("AppState is not registered on the app"))?;

    let claims = verify_access_token(&token, &state.security)?;

    if required == AccessPolicy::AdminOnly && claims.role != UserRole::Admin {
        return Err(AppError::insufficient_role());
    }

    Ok(AuthContext { claims, token })
}
