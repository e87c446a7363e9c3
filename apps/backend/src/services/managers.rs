use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::services::{todos, users};
use crate::state::app_state::AppState;
use crate::store::Manager;

/// Assign another user as a manager of a todo. Only the todo's owner may
/// do this, and the owner cannot assign themselves.
pub fn register_manager(
    state: &AppState,
    caller_id: i64,
    todo_id: i64,
    user_id: i64,
) -> Result<Manager, AppError> {
    let todo = todos::get_todo(state, todo_id)?;

    if todo.owner_id != caller_id {
        return Err(AppError::validation(
            ErrorCode::ValidationError,
            "Only the todo owner can register managers",
        ));
    }
    if user_id == todo.owner_id {
        return Err(AppError::validation(
            ErrorCode::ValidationError,
            "The todo owner cannot be registered as a manager",
        ));
    }
    users::get_user(state, user_id)?;

    if state.store.managers.exists(todo_id, user_id) {
        return Err(AppError::validation(
            ErrorCode::ValidationError,
            "User is already a manager of this todo",
        ));
    }

    Ok(state.store.managers.insert(todo_id, user_id))
}

pub fn list_managers(state: &AppState, todo_id: i64) -> Result<Vec<Manager>, AppError> {
    todos::get_todo(state, todo_id)?;
    Ok(state.store.managers.list_for_todo(todo_id))
}

/// Remove a manager assignment. Only the todo's owner may do this.
pub fn remove_manager(
    state: &AppState,
    caller_id: i64,
    todo_id: i64,
    manager_id: i64,
) -> Result<(), AppError> {
    let todo = todos::get_todo(state, todo_id)?;

    if todo.owner_id != caller_id {
        return Err(AppError::validation(
            ErrorCode::ValidationError,
            "Only the todo owner can remove managers",
        ));
    }

    let manager = state
        .store
        .managers
        .get(manager_id)
        .filter(|m| m.todo_id == todo_id)
        .ok_or_else(|| AppError::not_found(ErrorCode::ManagerNotFound, "Manager not found"))?;

    state.store.managers.remove(manager.id);
    Ok(())
}
