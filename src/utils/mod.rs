//! Shared utilities.
//!
//! - [`credentials`]: email grammar check and initial-password generation
//! - [`errors`]: application error type and response conversion
//! - [`jwt`]: access-token issuance and three-way verification
//! - [`password`]: bcrypt hashing and verification
//! - [`response`]: the `{status, data, message}` response envelope

pub mod credentials;
pub mod errors;
pub mod jwt;
pub mod password;
pub mod response;
