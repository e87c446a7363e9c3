use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::Serialize;
use tracing::error;

use crate::auth::claims::{AccessClaims, UserRole};
use crate::error::AppError;

/// Request-scoped authentication state.
///
/// Written into request extensions by the access gate, read by
/// `CurrentUser` and the audit wrapper, and dropped with the request. The
/// raw token is kept alongside the claims so downstream code never has to
/// touch the Authorization header again.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub claims: AccessClaims,
    pub token: String,
}

/// The verified identity a handler works with.
///
/// Extracting this on a route the access gate never saw is a wiring
/// defect (a misconfigured route table), not a caller error: it fails
/// loudly with a 500-class WIRING error instead of a 401.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    pub role: UserRole,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let out = req
            .extensions()
            .get::<AuthContext>()
            .map(|ctx| CurrentUser {
                id: ctx.claims.sub,
                email: ctx.claims.email.clone(),
                role: ctx.claims.role,
            })
            .ok_or_else(|| {
                error!(
                    path = %req.path(),
                    "handler requires an identity but no auth context was stored; \
                     the route is missing the access gate"
                );
                AppError::wiring("no authentication context for this request")
            });

        ready(out)
    }
}

#[cfg(test)]
mod tests {
    use actix_web::dev::Payload;
    use actix_web::test::TestRequest;
    use actix_web::{FromRequest, HttpMessage};

    use super::{AuthContext, CurrentUser};
    use crate::auth::claims::{AccessClaims, UserRole};
    use crate::error::AppError;

    fn claims() -> AccessClaims {
        AccessClaims {
            sub: 42,
            email: "a@b.com".to_string(),
            role: UserRole::Admin,
            iat: 0,
            exp: i64::MAX,
        }
    }

    #[actix_web::test]
    async fn binds_identity_from_auth_context() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(AuthContext {
            claims: claims(),
            token: "raw-token".to_string(),
        });

        let user = CurrentUser::from_request(&req, &mut Payload::None)
            .await
            .unwrap();
        assert_eq!(user.id, 42);
        assert_eq!(user.email, "a@b.com");
        assert!(user.is_admin());
    }

    #[actix_web::test]
    async fn missing_context_is_a_wiring_error() {
        let req = TestRequest::default().to_http_request();

        match CurrentUser::from_request(&req, &mut Payload::None).await {
            Err(AppError::Wiring { .. }) => {}
            other => panic!("expected wiring error, got {other:?}"),
        }
    }
}
