use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub time: Option<i64>,
    pub tags: Vec<String>,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Insertable post record, owned by `user_id`.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub time: Option<i64>,
    pub tags: Vec<String>,
    pub user_id: i32,
}

/// Equality filter over posts.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub id: Option<i32>,
    pub user_id: Option<i32>,
}

/// A post with its owning user's name and email attached.
#[derive(Debug, Clone, Serialize)]
pub struct PostWithAuthor {
    #[serde(flatten)]
    pub post: Post,
    pub author_name: String,
    pub author_email: String,
}
