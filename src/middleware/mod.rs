//! Request middleware.
//!
//! - [`auth`]: the `AuthUser` extractor, which verifies the bearer token
//!   and hands verified claims to the handler
//! - [`role`]: route-layer guards that re-check the caller's standing
//!   (admin record, HOD role) against current storage state
//!
//! # Authentication flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::AuthUser`] verifies the signature and expiry
//! 3. Role guards re-validate the principal against storage
//! 4. The handler runs with the verified claims

pub mod auth;
pub mod role;
