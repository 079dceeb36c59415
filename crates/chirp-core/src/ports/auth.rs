//! Authentication ports: password hashing and session tokens.

/// Claims recovered from a validated session token.
#[derive(Debug, Clone)]
pub struct SessionClaims {
    pub user_id: i32,
    pub exp: i64,
}

/// Session token service.
///
/// Tokens are issued at login with a fixed time-to-live, carried in an
/// HTTP-only cookie, and validated on every authenticated request. There is
/// no refresh mechanism and no server-side session store.
pub trait SessionService: Send + Sync {
    /// Issue a token identifying `user_id`.
    fn issue(&self, user_id: i32) -> Result<String, AuthError>;

    /// Validate a token and decode its claims.
    fn validate(&self, token: &str) -> Result<SessionClaims, AuthError>;

    /// The fixed token lifetime, also used for the cookie max-age.
    fn ttl_seconds(&self) -> i64;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password with a fresh salt.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Missing session cookie")]
    MissingSession,

    #[error("Session expired")]
    SessionExpired,

    #[error("Invalid session token: {0}")]
    InvalidSession(String),

    #[error("Hashing error: {0}")]
    Hashing(String),
}
