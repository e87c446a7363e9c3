use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::services::todos;
use crate::state::app_state::AppState;
use crate::store::Comment;

pub fn create_comment(
    state: &AppState,
    author_id: i64,
    todo_id: i64,
    contents: &str,
) -> Result<Comment, AppError> {
    todos::get_todo(state, todo_id)?;

    if contents.trim().is_empty() {
        return Err(AppError::validation(
            ErrorCode::ValidationError,
            "Comment cannot be empty",
        ));
    }
    Ok(state.store.comments.insert(todo_id, author_id, contents))
}

pub fn list_comments(state: &AppState, todo_id: i64) -> Result<Vec<Comment>, AppError> {
    todos::get_todo(state, todo_id)?;
    Ok(state.store.comments.list_for_todo(todo_id))
}
