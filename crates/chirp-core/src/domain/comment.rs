use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Comment entity, attached to a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i32,
    pub user_id: i32,
    pub description: String,
    pub post_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Insertable comment record.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub user_id: i32,
    pub description: String,
    pub post_id: i32,
}

/// Equality filter over comments.
#[derive(Debug, Clone, Default)]
pub struct CommentFilter {
    pub id: Option<i32>,
    pub user_id: Option<i32>,
    pub post_id: Option<i32>,
}

/// A comment with its author's name and email attached.
#[derive(Debug, Clone, Serialize)]
pub struct CommentWithAuthor {
    #[serde(flatten)]
    pub comment: Comment,
    pub author_name: String,
    pub author_email: String,
}
