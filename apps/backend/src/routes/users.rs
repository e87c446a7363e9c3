use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::auth::claims::UserRole;
use crate::error::AppError;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::services::users;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub role: UserRole,
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

/// The caller's own identity, exactly as bound from the verified token.
async fn me(user: CurrentUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(UserResponse {
        id: user.id,
        email: user.email,
        role: user.role,
    }))
}

async fn get_user(
    _user: CurrentUser,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user = users::get_user(&app_state, path.into_inner())?;
    Ok(HttpResponse::Ok().json(UserResponse {
        id: user.id,
        email: user.email,
        role: user.role,
    }))
}

async fn change_password(
    user: CurrentUser,
    body: ValidatedJson<ChangePasswordRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    users::change_password(&app_state, user.id, &req.old_password, &req.new_password)?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/me").route(web::get().to(me)));
    cfg.service(web::resource("/password").route(web::put().to(change_password)));
    cfg.service(web::resource("/{user_id}").route(web::get().to(get_user)));
}
