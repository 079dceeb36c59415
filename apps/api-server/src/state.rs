//! Application state - shared across all handlers.

use std::io;
use std::sync::Arc;

use chirp_core::ports::{
    CommentRepository, PasswordService, PostRepository, SessionService, UserRepository,
};
use chirp_infra::auth::{Argon2PasswordService, SignedSessionService};
use chirp_infra::database::{
    self, DatabaseConfig, PgCommentRepository, PgPostRepository, PgUserRepository,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub passwords: Arc<dyn PasswordService>,
    pub sessions: Arc<dyn SessionService>,
}

impl AppState {
    /// Build the application state over a live database connection.
    pub async fn new(db_config: &DatabaseConfig) -> io::Result<Self> {
        let db = database::connect(db_config)
            .await
            .map_err(io::Error::other)?;

        tracing::info!("Application state initialized");

        Ok(Self {
            users: Arc::new(PgUserRepository::new(db.clone())),
            posts: Arc::new(PgPostRepository::new(db.clone())),
            comments: Arc::new(PgCommentRepository::new(db)),
            passwords: Arc::new(Argon2PasswordService::new()),
            sessions: Arc::new(SignedSessionService::from_env()),
        })
    }
}
