use crate::auth::password;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;
use crate::store::User;

pub fn get_user(state: &AppState, user_id: i64) -> Result<User, AppError> {
    state
        .store
        .users
        .get(user_id)
        .ok_or_else(|| AppError::not_found(ErrorCode::UserNotFound, "User not found"))
}

/// Change the caller's own password. The old password must match, and the
/// new one must be at least 8 characters with a digit and an uppercase
/// letter.
pub fn change_password(
    state: &AppState,
    caller_id: i64,
    old_password: &str,
    new_password: &str,
) -> Result<(), AppError> {
    validate_new_password(new_password)?;

    let user = get_user(state, caller_id)?;

    if !password::matches(old_password, &user.password_hash) {
        return Err(AppError::validation(
            ErrorCode::InvalidPassword,
            "Current password is incorrect",
        ));
    }
    if password::matches(new_password, &user.password_hash) {
        return Err(AppError::validation(
            ErrorCode::InvalidPassword,
            "New password must differ from the current password",
        ));
    }

    let hash = password::hash(new_password);
    state
        .store
        .users
        .update(caller_id, |u| u.password_hash = hash);
    Ok(())
}

fn validate_new_password(new_password: &str) -> Result<(), AppError> {
    let long_enough = new_password.chars().count() >= 8;
    let has_digit = new_password.chars().any(|c| c.is_ascii_digit());
    let has_upper = new_password.chars().any(|c| c.is_ascii_uppercase());

    if long_enough && has_digit && has_upper {
        Ok(())
    } else {
        Err(AppError::validation(
            ErrorCode::InvalidPassword,
            "New password must be at least 8 characters and contain a digit and an uppercase letter",
        ))
    }
}
