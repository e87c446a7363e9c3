use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;

use crate::error::AppError;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::services::comments;
use crate::state::app_state::AppState;
use crate::store::Comment;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub contents: String,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub todo_id: i64,
    pub author_id: i64,
    pub contents: String,
    pub created_at: String,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            todo_id: comment.todo_id,
            author_id: comment.author_id,
            contents: comment.contents,
            created_at: comment
                .created_at
                .format(&Rfc3339)
                .unwrap_or_else(|_| comment.created_at.to_string()),
        }
    }
}

async fn create_comment(
    user: CurrentUser,
    path: web::Path<i64>,
    body: ValidatedJson<CreateCommentRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let todo_id = path.into_inner();
    let req = body.into_inner();
    let comment = comments::create_comment(&app_state, user.id, todo_id, &req.contents)?;
    Ok(HttpResponse::Created().json(CommentResponse::from(comment)))
}

async fn list_comments(
    _user: CurrentUser,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let comments: Vec<CommentResponse> = comments::list_comments(&app_state, path.into_inner())?
        .into_iter()
        .map(CommentResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(comments))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{todo_id}/comments")
            .route(web::post().to(create_comment))
            .route(web::get().to(list_comments)),
    );
}
