//! Post listing, search, creation, and deletion handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use chirp_core::domain::{NewPost, Post, PostFilter, PostWithAuthor};
use chirp_core::ports::{PostRepository, Repository};
use chirp_shared::dto::{CreatePostRequest, CreatedResponse, PostResponse, PostWithAuthorResponse};
use chirp_shared::response::ApiResponse;

use crate::middleware::auth::CurrentUser;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub tag: Option<String>,
}

fn to_post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        short_description: post.short_description,
        description: post.description,
        time: post.time,
        tags: post.tags,
        user_id: post.user_id,
        created_at: post.created_at.to_rfc3339(),
    }
}

fn to_post_with_author_response(post: PostWithAuthor) -> PostWithAuthorResponse {
    PostWithAuthorResponse {
        post: to_post_response(post.post),
        author_name: post.author_name,
        author_email: post.author_email,
    }
}

/// GET /posts/get_all_post - every post with author info, newest first.
pub async fn get_all_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state
        .posts
        .find_many_with_author(&PostFilter::default())
        .await?;

    let body: Vec<PostWithAuthorResponse> =
        posts.into_iter().map(to_post_with_author_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/search?tag=&query=
pub async fn search_posts(
    state: web::Data<AppState>,
    params: web::Query<SearchParams>,
) -> AppResult<HttpResponse> {
    let params = params.into_inner();

    // Blank parameters count as absent, so ?query=&tag= lists everything.
    let query = params.query.as_deref().filter(|q| !q.is_empty());
    let tag = params.tag.as_deref().filter(|t| !t.is_empty());

    let posts = state.posts.search_with_author(query, tag).await?;

    let body: Vec<PostWithAuthorResponse> =
        posts.into_iter().map(to_post_with_author_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST /posts/create_post - store a post owned by the caller.
pub async fn create_post(
    state: web::Data<AppState>,
    user: CurrentUser,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.title.trim().is_empty() {
        return Err(AppError::BadRequest("title must not be empty".to_string()));
    }

    let post_id = state
        .posts
        .insert(NewPost {
            title: req.title,
            short_description: req.short_description,
            description: req.description,
            time: req.time,
            tags: req.tags,
            user_id: user.0.id,
        })
        .await?;

    tracing::info!(post_id, user_id = user.0.id, "post created");
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        CreatedResponse { id: post_id },
        "post created",
    )))
}

/// DELETE /posts/delete_post_account_{post_id}
///
/// The ownership check makes deleting another user's post indistinguishable
/// from deleting a missing one: both are NotFound.
pub async fn delete_post(
    state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    let filter = PostFilter {
        id: Some(post_id),
        user_id: Some(user.0.id),
    };
    let post = state
        .posts
        .find_one(&filter)
        .await?
        .ok_or_else(|| AppError::NotFound("post not found".to_string()))?;

    state.posts.delete_by_id(post.id).await?;

    tracing::info!(post_id, user_id = user.0.id, "post deleted");
    Ok(HttpResponse::Ok().json(ApiResponse::message("post deleted")))
}

/// POST /posts/get_post_user - the caller's own posts, without author join.
pub async fn get_own_posts(
    state: web::Data<AppState>,
    user: CurrentUser,
) -> AppResult<HttpResponse> {
    let filter = PostFilter {
        user_id: Some(user.0.id),
        ..Default::default()
    };
    let posts = state.posts.find_many(&filter).await?;

    let body: Vec<PostResponse> = posts.into_iter().map(to_post_response).collect();
    Ok(HttpResponse::Ok().json(body))
}
