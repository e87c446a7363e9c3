//! The two sensitive admin operations. Their handlers wrap every call in
//! the audit interceptor; the operations themselves stay oblivious to it.

use crate::auth::claims::UserRole;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;
use crate::store::User;

pub fn delete_comment(state: &AppState, comment_id: i64) -> Result<(), AppError> {
    state
        .store
        .comments
        .remove(comment_id)
        .map(|_| ())
        .ok_or_else(|| AppError::not_found(ErrorCode::CommentNotFound, "Comment not found"))
}

pub fn change_user_role(state: &AppState, user_id: i64, role: UserRole) -> Result<User, AppError> {
    state
        .store
        .users
        .update(user_id, |u| u.role = role)
        .ok_or_else(|| AppError::not_found(ErrorCode::UserNotFound, "User not found"))
}
