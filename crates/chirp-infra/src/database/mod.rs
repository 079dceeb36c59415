//! Database connection management and repositories.

mod connections;
mod filter;
mod postgres_base;
mod postgres_repo;

pub mod entity;

pub use connections::{DatabaseConfig, connect};
pub use filter::EntityFilter;
pub use postgres_base::PgRepository;
pub use postgres_repo::{PgCommentRepository, PgPostRepository, PgUserRepository};

#[cfg(test)]
mod tests;
