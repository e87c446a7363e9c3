use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::auth::claims::UserRole;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::auth;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

#[derive(Debug, Deserialize)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

async fn signup(
    body: ValidatedJson<SignupRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let (_, token) = auth::signup(&app_state, &req.email, &req.password, req.role)?;
    Ok(HttpResponse::Created().json(TokenResponse { token }))
}

async fn signin(
    body: ValidatedJson<SigninRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let (_, token) = auth::signin(&app_state, &req.email, &req.password)?;
    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/signup").route(web::post().to(signup)));
    cfg.service(web::resource("/signin").route(web::post().to(signin)));
}
