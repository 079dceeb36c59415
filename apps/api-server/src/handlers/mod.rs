//! HTTP handlers and route configuration.

mod comments;
mod health;
mod posts;
mod users;

use actix_web::web;

/// Configure all application routes.
///
/// Paths mirror the public API the shipped frontend consumes; note that
/// `/user/login` registers an account and `/user/signup` signs in.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/health", web::get().to(health::health_check))
        .service(
            web::scope("/user")
                .route("/login", web::post().to(users::register))
                .route("/signup", web::post().to(users::login))
                .route("/get_me", web::post().to(users::get_me))
                .route("/log_out", web::delete().to(users::log_out)),
        )
        .service(
            web::scope("/posts")
                .route("/get_all_post", web::get().to(posts::get_all_posts))
                .route("/search", web::get().to(posts::search_posts))
                .route("/create_post", web::post().to(posts::create_post))
                .route(
                    "/delete_post_account_{post_id}",
                    web::delete().to(posts::delete_post),
                )
                .route("/get_post_user", web::post().to(posts::get_own_posts)),
        )
        .service(
            web::scope("/comment")
                .route(
                    "/get_comment_post/{post_id}",
                    web::get().to(comments::comments_for_post),
                )
                .route("/create_comment", web::post().to(comments::create_comment)),
        );
}
