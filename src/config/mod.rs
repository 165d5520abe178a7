//! Application configuration.
//!
//! Each submodule loads one configuration concern from environment
//! variables via a `from_env()` constructor. Configuration is read once at
//! startup into [`crate::state::AppState`] and treated as immutable for the
//! process lifetime.

pub mod cors;
pub mod jwt;
