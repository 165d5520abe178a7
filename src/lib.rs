//! # Coursealloc API
//!
//! A course-allocation administration backend built with Axum. Admins
//! register lecturers, heads-of-department register courses and allocate a
//! head/assistant lecturer pair to each one, and students and lecturers
//! query the allocation results.
//!
//! ## Architecture
//!
//! The codebase follows a modular layout:
//!
//! ```text
//! src/
//! ├── config/           # Environment-backed configuration (JWT, CORS)
//! ├── middleware/       # Auth extractor and role guards
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Admin sign-up/login, lecturer login, logout
//! │   ├── lecturers/   # Admin-facing lecturer registration (bulk)
//! │   ├── courses/     # HOD-facing course registration and allocation
//! │   ├── profile/     # Lecturer self-service (profile, own courses)
//! │   └── students/    # Public allocation queries
//! ├── store/            # Document-store contract + in-memory backend
//! └── utils/            # Errors, JWT, passwords, response envelope
//! ```
//!
//! Each feature module follows the same structure: `model.rs` (entities and
//! DTOs), `service.rs` (business logic against the [`store::Store`] trait),
//! `controller.rs` (HTTP handlers) and `router.rs`.
//!
//! ## Authorization model
//!
//! Tokens carry `{uid, email, role}` claims, but role-gated routes never
//! trust the role claim alone: the guards in [`middleware::role`] re-read
//! the principal from storage on every request, so a demoted HOD or a
//! deleted admin loses access immediately without any token revocation
//! machinery.
//!
//! ## Consistency model
//!
//! Uniqueness rules (lecturer email/name, course code/title, one HOD per
//! department) are enforced by read-then-write checks without transactions.
//! Concurrent requests can race those checks; this is an accepted gap for
//! the intended single-admin, low-concurrency deployment. A storage backend
//! with native unique constraints can close it behind the same trait.
//!
//! ## Environment variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! ACCESS_TOKEN_EXPIRE=3600
//! CORS_ALLOWED_ORIGINS=http://localhost:5173
//! PORT=3000
//! ```

pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod store;
pub mod utils;
pub mod validator;
