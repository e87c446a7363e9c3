use std::time::SystemTime;

use lazy_regex::regex_is_match;
use tracing::info;

use crate::auth::claims::UserRole;
use crate::auth::jwt::mint_access_token;
use crate::auth::password;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::logging::security;
use crate::state::app_state::AppState;
use crate::store::User;

/// Register a new account and hand back a fresh access token.
pub fn signup(
    state: &AppState,
    email: &str,
    raw_password: &str,
    role: UserRole,
) -> Result<(User, String), AppError> {
    if !regex_is_match!(r"^[^@\s]+@[^@\s]+\.[^@\s]+$", email) {
        return Err(AppError::validation(
            ErrorCode::InvalidEmail,
            "Email address is not valid",
        ));
    }
    if raw_password.is_empty() {
        return Err(AppError::validation(
            ErrorCode::InvalidPassword,
            "Password cannot be empty",
        ));
    }
    if state.store.users.find_by_email(email).is_some() {
        return Err(AppError::conflict(
            ErrorCode::DuplicateEmail,
            "Email is already registered",
        ));
    }

    let user = state
        .store
        .users
        .insert(email, &password::hash(raw_password), role);

    info!(user_id = user.id, email = %Redacted(email), role = %role, "User registered");

    let token = mint_access_token(user.id, &user.email, user.role, SystemTime::now(), &state.security)?;
    Ok((user, token))
}

/// Exchange credentials for an access token.
///
/// Unknown email and wrong password are indistinguishable to the caller;
/// the specific reason only goes to the security log.
pub fn signin(state: &AppState, email: &str, raw_password: &str) -> Result<(User, String), AppError> {
    let user = match state.store.users.find_by_email(email) {
        Some(user) => user,
        None => {
            security::login_failed("unknown_email", Some(email));
            return Err(AppError::unauthorized());
        }
    };

    if !password::matches(raw_password, &user.password_hash) {
        security::login_failed("wrong_password", Some(email));
        return Err(AppError::unauthorized());
    }

    let token = mint_access_token(user.id, &user.email, user.role, SystemTime::now(), &state.security)?;
    Ok((user, token))
}
