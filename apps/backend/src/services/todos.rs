use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;
use crate::store::Todo;

pub fn create_todo(
    state: &AppState,
    owner_id: i64,
    title: &str,
    contents: &str,
) -> Result<Todo, AppError> {
    if title.trim().is_empty() {
        return Err(AppError::validation(
            ErrorCode::ValidationError,
            "Title cannot be empty",
        ));
    }
    Ok(state.store.todos.insert(owner_id, title, contents))
}

pub fn list_todos(state: &AppState) -> Vec<Todo> {
    state.store.todos.list()
}

pub fn get_todo(state: &AppState, todo_id: i64) -> Result<Todo, AppError> {
    state
        .store
        .todos
        .get(todo_id)
        .ok_or_else(|| AppError::not_found(ErrorCode::TodoNotFound, "Todo not found"))
}
