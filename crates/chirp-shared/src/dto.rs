//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to register a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request to log in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// A user's public information. The password hash never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: String,
}

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub time: Option<i64>,
    pub tags: Vec<String>,
}

/// A post as returned by listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i32,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub time: Option<i64>,
    pub tags: Vec<String>,
    pub user_id: i32,
    pub created_at: String,
}

/// A post with its author's name and email attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostWithAuthorResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub author_name: String,
    pub author_email: String,
}

/// Request to comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub post_id: i32,
    pub description: String,
}

/// A comment with its author's name and email attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentWithAuthorResponse {
    pub id: i32,
    pub user_id: i32,
    pub post_id: i32,
    pub description: String,
    pub created_at: String,
    pub author_name: String,
    pub author_email: String,
}

/// Identity of a freshly created row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: i32,
}
