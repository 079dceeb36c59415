//! Registration, login, and session handlers.

use actix_web::cookie::{Cookie, time::Duration as CookieDuration};
use actix_web::{HttpResponse, web};

use chirp_core::domain::{NewUser, UserFilter};
use chirp_core::ports::{PasswordService, Repository, SessionService};
use chirp_shared::dto::{LoginRequest, RegisterRequest, UserResponse};
use chirp_shared::response::ApiResponse;

use crate::middleware::auth::{CurrentUser, SESSION_COOKIE};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /user/login - register a new account.
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input
    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".to_string()));
    }
    if req.email.is_empty() || !req.email.contains('@') {
        return Err(AppError::BadRequest("invalid email address".to_string()));
    }
    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "password must be at least 8 characters".to_string(),
        ));
    }

    // Friendly pre-check; the unique constraint on email closes the race
    // between two concurrent registrations.
    let filter = UserFilter {
        email: Some(req.email.clone()),
        ..Default::default()
    };
    if state.users.find_one(&filter).await?.is_some() {
        return Err(AppError::Conflict("email already registered".to_string()));
    }

    let password_hash = state
        .passwords
        .hash(&req.password)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let user_id = state
        .users
        .insert(NewUser {
            name: req.name,
            email: req.email,
            password_hash,
        })
        .await?;

    tracing::info!(user_id, "user registered");
    Ok(HttpResponse::Ok().json(ApiResponse::message("user registered")))
}

/// POST /user/signup - sign in and receive a session cookie.
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let filter = UserFilter {
        email: Some(req.email.clone()),
        ..Default::default()
    };
    let user = state
        .users
        .find_one(&filter)
        .await?
        .ok_or_else(|| AppError::NotFound("email is not registered".to_string()))?;

    let valid = state
        .passwords
        .verify(&req.password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    if !valid {
        // A wrong password is a user-visible outcome, not an HTTP error; no
        // cookie is issued.
        return Ok(HttpResponse::Ok().json(ApiResponse::error("wrong credentials")));
    }

    let token = state
        .sessions
        .issue(user.id)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    let cookie = Cookie::build(SESSION_COOKIE, token)
        .http_only(true)
        .max_age(CookieDuration::seconds(state.sessions.ttl_seconds()))
        .path("/")
        .finish();

    tracing::info!(user_id = user.id, "login succeeded");
    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(ApiResponse::message("logged in")))
}

/// POST /user/get_me - the authenticated caller's own record.
pub async fn get_me(user: CurrentUser) -> AppResult<HttpResponse> {
    let user = user.0;
    Ok(HttpResponse::Ok().json(UserResponse {
        id: user.id,
        name: user.name,
        email: user.email,
        created_at: user.created_at.to_rfc3339(),
    }))
}

/// DELETE /user/log_out - clear the session cookie.
pub async fn log_out() -> AppResult<HttpResponse> {
    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.make_removal();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(ApiResponse::message("logged out")))
}
