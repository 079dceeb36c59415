//! Session resolution: cookie token to acting user.

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures::future::LocalBoxFuture;

use chirp_core::domain::{User, UserFilter};
use chirp_core::ports::{Repository, SessionService};

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Name of the HTTP-only cookie carrying the signed session token.
pub const SESSION_COOKIE: &str = "session";

/// The authenticated caller, resolved from the session cookie.
///
/// Use this in handlers to require authentication:
/// ```ignore
/// async fn protected_route(user: CurrentUser) -> impl Responder {
///     format!("Hello, {}!", user.0.name)
/// }
/// ```
///
/// The token alone is not trusted: the user row is re-read on every request,
/// so a stale token for a deleted user no longer resolves.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
                tracing::error!("AppState not found in app data");
                AppError::Internal("server configuration error".to_string())
            })?;

            let cookie = req
                .cookie(SESSION_COOKIE)
                .ok_or(AppError::Unauthenticated)?;

            let claims = state
                .sessions
                .validate(cookie.value())
                .map_err(|_| AppError::Unauthenticated)?;

            let filter = UserFilter {
                id: Some(claims.user_id),
                ..Default::default()
            };
            let user = state
                .users
                .find_one(&filter)
                .await?
                .ok_or(AppError::Unauthenticated)?;

            Ok(CurrentUser(user))
        })
    }
}
