//! Comment handlers.

use actix_web::{HttpResponse, web};

use chirp_core::domain::{CommentFilter, NewComment, PostFilter};
use chirp_core::ports::{CommentRepository, Repository};
use chirp_shared::dto::{CommentWithAuthorResponse, CreateCommentRequest, CreatedResponse};
use chirp_shared::response::ApiResponse;

use crate::middleware::auth::CurrentUser;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /comment/get_comment_post/{post_id}
///
/// Returns the post's comments with author info. A nonexistent post yields
/// an empty list, not an error.
pub async fn comments_for_post(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let filter = CommentFilter {
        post_id: Some(path.into_inner()),
        ..Default::default()
    };
    let comments = state.comments.find_many_with_author(&filter).await?;

    let body: Vec<CommentWithAuthorResponse> = comments
        .into_iter()
        .map(|c| CommentWithAuthorResponse {
            id: c.comment.id,
            user_id: c.comment.user_id,
            post_id: c.comment.post_id,
            description: c.comment.description,
            created_at: c.comment.created_at.to_rfc3339(),
            author_name: c.author_name,
            author_email: c.author_email,
        })
        .collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /comment/create_comment - comment on an existing post.
pub async fn create_comment(
    state: web::Data<AppState>,
    user: CurrentUser,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.description.trim().is_empty() {
        return Err(AppError::BadRequest(
            "description must not be empty".to_string(),
        ));
    }

    // The post must exist before the comment row is written.
    let post_filter = PostFilter {
        id: Some(req.post_id),
        ..Default::default()
    };
    if state.posts.find_one(&post_filter).await?.is_none() {
        return Err(AppError::NotFound("post not found".to_string()));
    }

    let comment_id = state
        .comments
        .insert(NewComment {
            user_id: user.0.id,
            description: req.description,
            post_id: req.post_id,
        })
        .await?;

    tracing::info!(comment_id, user_id = user.0.id, "comment created");
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        CreatedResponse { id: comment_id },
        "comment created",
    )))
}
