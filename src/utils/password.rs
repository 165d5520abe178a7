use bcrypt::{DEFAULT_COST, hash, verify};
use tracing::error;

use crate::utils::errors::AppError;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST).map_err(|e| {
        error!(error = %e, "password hashing failed");
        AppError::internal("something went wrong")
    })
}

/// Returns `true` only for a matching password. A verification error and a
/// wrong password are indistinguishable to the caller; the detail goes to
/// the log.
pub fn verify_password(password: &str, hashed: &str) -> bool {
    match verify(password, hashed) {
        Ok(matched) => matched,
        Err(e) => {
            error!(error = %e, "password verification failed");
            false
        }
    }
}
