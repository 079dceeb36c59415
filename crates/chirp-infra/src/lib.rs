//! # Chirp Infrastructure
//!
//! Concrete implementations of the ports defined in `chirp-core`:
//! PostgreSQL persistence via SeaORM, argon2 password hashing, and signed
//! session tokens.

pub mod auth;
pub mod database;

pub use auth::{Argon2PasswordService, SessionConfig, SignedSessionService};
pub use database::{DatabaseConfig, PgCommentRepository, PgPostRepository, PgUserRepository};
