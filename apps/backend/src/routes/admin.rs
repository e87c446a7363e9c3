//! Admin-only operations. These are the audit-guarded endpoints: every
//! call — successful or not — leaves exactly one audit record, emitted by
//! the `audited` wrapper visible right here at the call site.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::audit::audited;
use crate::auth::claims::UserRole;
use crate::error::AppError;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::services::admin;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct RoleChangeRequest {
    pub role: UserRole,
}

#[derive(Debug, Serialize)]
pub struct RoleChangeResponse {
    pub id: i64,
    pub email: String,
    pub role: UserRole,
}

async fn delete_comment(
    req: HttpRequest,
    _admin: CurrentUser,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let comment_id = path.into_inner();

    audited(&app_state.audit, &req, async {
        admin::delete_comment(&app_state, comment_id)
    })
    .await?;

    Ok(HttpResponse::NoContent().finish())
}

async fn change_user_role(
    req: HttpRequest,
    _admin: CurrentUser,
    path: web::Path<i64>,
    body: ValidatedJson<RoleChangeRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = path.into_inner();
    let role = body.role;

    let user = audited(&app_state.audit, &req, async {
        admin::change_user_role(&app_state, user_id, role)
    })
    .await?;

    Ok(HttpResponse::Ok().json(RoleChangeResponse {
        id: user.id,
        email: user.email,
        role: user.role,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/comments/{comment_id}").route(web::delete().to(delete_comment)));
    cfg.service(web::resource("/users/{user_id}/role").route(web::patch().to(change_user_role)));
}
