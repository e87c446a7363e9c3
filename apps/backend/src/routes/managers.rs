use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::services::managers;
use crate::state::app_state::AppState;
use crate::store::Manager;

#[derive(Debug, Deserialize)]
pub struct RegisterManagerRequest {
    pub user_id: i64,
}

#[derive(Debug, Serialize)]
pub struct ManagerResponse {
    pub id: i64,
    pub todo_id: i64,
    pub user_id: i64,
}

impl From<Manager> for ManagerResponse {
    fn from(manager: Manager) -> Self {
        Self {
            id: manager.id,
            todo_id: manager.todo_id,
            user_id: manager.user_id,
        }
    }
}

async fn register_manager(
    user: CurrentUser,
    path: web::Path<i64>,
    body: ValidatedJson<RegisterManagerRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let todo_id = path.into_inner();
    let manager = managers::register_manager(&app_state, user.id, todo_id, body.user_id)?;
    Ok(HttpResponse::Created().json(ManagerResponse::from(manager)))
}

async fn list_managers(
    _user: CurrentUser,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let managers: Vec<ManagerResponse> = managers::list_managers(&app_state, path.into_inner())?
        .into_iter()
        .map(ManagerResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(managers))
}

async fn remove_manager(
    user: CurrentUser,
    path: web::Path<(i64, i64)>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let (todo_id, manager_id) = path.into_inner();
    managers::remove_manager(&app_state, user.id, todo_id, manager_id)?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{todo_id}/managers")
            .route(web::post().to(register_manager))
            .route(web::get().to(list_managers)),
    );
    cfg.service(
        web::resource("/{todo_id}/managers/{manager_id}").route(web::delete().to(remove_manager)),
    );
}
