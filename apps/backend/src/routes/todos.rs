use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;

use crate::error::AppError;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::services::todos;
use crate::state::app_state::AppState;
use crate::store::Todo;

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
    #[serde(default)]
    pub contents: String,
}

#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub id: i64,
    pub title: String,
    pub contents: String,
    pub owner_id: i64,
    pub created_at: String,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            contents: todo.contents,
            owner_id: todo.owner_id,
            created_at: todo
                .created_at
                .format(&Rfc3339)
                .unwrap_or_else(|_| todo.created_at.to_string()),
        }
    }
}

async fn create_todo(
    user: CurrentUser,
    body: ValidatedJson<CreateTodoRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let todo = todos::create_todo(&app_state, user.id, &req.title, &req.contents)?;
    Ok(HttpResponse::Created().json(TodoResponse::from(todo)))
}

async fn list_todos(
    _user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let todos: Vec<TodoResponse> = todos::list_todos(&app_state)
        .into_iter()
        .map(TodoResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(todos))
}

async fn get_todo(
    _user: CurrentUser,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let todo = todos::get_todo(&app_state, path.into_inner())?;
    Ok(HttpResponse::Ok().json(TodoResponse::from(todo)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_todo))
            .route(web::get().to(list_todos)),
    );
    cfg.service(web::resource("/{todo_id}").route(web::get().to(get_todo)));
}
