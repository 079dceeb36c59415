use std::collections::BTreeMap;

use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};

use chirp_core::domain::{NewComment, NewUser, PostFilter, User, UserFilter};
use chirp_core::error::RepoError;
use chirp_core::ports::{CommentRepository, PostRepository, Repository, UserRepository};

use super::entity::{comment, user};
use super::postgres_repo::{PgCommentRepository, PgPostRepository, PgUserRepository};

fn user_row(id: i32, email: &str) -> user::Model {
    user::Model {
        id,
        name: "ada".to_owned(),
        email: email.to_owned(),
        password_hash: "$argon2id$stub".to_owned(),
        created_at: chrono::Utc::now().into(),
    }
}

#[tokio::test]
async fn find_one_returns_the_single_match() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user_row(1, "ada@example.com")]])
        .into_connection();
    let repo: &dyn UserRepository = &PgUserRepository::new(db);

    let filter = UserFilter {
        email: Some("ada@example.com".to_owned()),
        ..Default::default()
    };
    let found: Option<User> = repo.find_one(&filter).await.unwrap();

    let found = found.unwrap();
    assert_eq!(found.id, 1);
    assert_eq!(found.email, "ada@example.com");
}

#[tokio::test]
async fn find_one_rejects_an_ambiguous_match() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            user_row(1, "dup@example.com"),
            user_row(2, "dup@example.com"),
        ]])
        .into_connection();
    let repo: &dyn UserRepository = &PgUserRepository::new(db);

    let filter = UserFilter {
        email: Some("dup@example.com".to_owned()),
        ..Default::default()
    };
    let err = repo.find_one(&filter).await.unwrap_err();

    assert!(matches!(err, RepoError::Ambiguous));
}

#[tokio::test]
async fn find_many_with_empty_filter_returns_all_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            user_row(1, "a@example.com"),
            user_row(2, "b@example.com"),
        ]])
        .into_connection();
    let repo: &dyn UserRepository = &PgUserRepository::new(db);

    let users = repo.find_many(&UserFilter::default()).await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].email, "a@example.com");
    assert_eq!(users[1].email, "b@example.com");
}

#[tokio::test]
async fn insert_returns_the_generated_id() {
    // Postgres inserts run with RETURNING, so the mock answers with a query
    // result carrying the stored row.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user_row(7, "new@example.com")]])
        .into_connection();
    let repo: &dyn UserRepository = &PgUserRepository::new(db);

    let id = repo
        .insert(NewUser {
            name: "ada".to_owned(),
            email: "new@example.com".to_owned(),
            password_hash: "$argon2id$stub".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(id, 7);
}

#[tokio::test]
async fn delete_of_a_missing_row_is_a_silent_no_op() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();
    let repo: &dyn UserRepository = &PgUserRepository::new(db);

    assert!(repo.delete_by_id(999).await.is_ok());
}

fn post_author_row(id: i32, title: &str, tags: Vec<String>) -> BTreeMap<&'static str, Value> {
    let created_at: sea_orm::prelude::DateTimeWithTimeZone = chrono::Utc::now().into();
    BTreeMap::from([
        ("id", Value::from(id)),
        ("title", Value::from(title)),
        ("short_description", Value::from("short")),
        ("description", Value::from("long form text")),
        ("time", Value::from(None::<i64>)),
        ("tags", Value::from(tags)),
        ("user_id", Value::from(1)),
        ("created_at", Value::from(created_at)),
        ("author_name", Value::from("ada")),
        ("author_email", Value::from("ada@example.com")),
    ])
}

#[tokio::test]
async fn joined_post_read_attaches_author_fields() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_author_row(
            3,
            "intro to react",
            vec!["react".to_owned()],
        )]])
        .into_connection();
    let repo: &dyn PostRepository = &PgPostRepository::new(db);

    let posts = repo
        .find_many_with_author(&PostFilter::default())
        .await
        .unwrap();

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].post.id, 3);
    assert_eq!(posts[0].post.tags, vec!["react".to_owned()]);
    assert_eq!(posts[0].author_name, "ada");
    assert_eq!(posts[0].author_email, "ada@example.com");
}

#[tokio::test]
async fn search_maps_rows_like_the_plain_joined_read() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_author_row(
            4,
            "react hooks in practice",
            vec!["react".to_owned(), "rust".to_owned()],
        )]])
        .into_connection();
    let repo: &dyn PostRepository = &PgPostRepository::new(db);

    let posts = repo
        .search_with_author(Some("react"), Some("rust"))
        .await
        .unwrap();

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].post.title, "react hooks in practice");
    assert_eq!(posts[0].author_email, "ada@example.com");
}

#[tokio::test]
async fn singular_joined_read_returns_one_post_or_rejects_ambiguity() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_author_row(5, "only one", vec![])]])
        .append_query_results(vec![vec![
            post_author_row(6, "twin a", vec![]),
            post_author_row(7, "twin b", vec![]),
        ]])
        .into_connection();
    let repo: &dyn PostRepository = &PgPostRepository::new(db);

    let filter = PostFilter {
        id: Some(5),
        ..Default::default()
    };
    let found = repo.find_one_with_author(&filter).await.unwrap().unwrap();
    assert_eq!(found.post.id, 5);
    assert_eq!(found.author_name, "ada");

    let err = repo
        .find_one_with_author(&PostFilter::default())
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Ambiguous));
}

#[tokio::test]
async fn comment_insert_and_joined_read_roundtrip() {
    let created_at: sea_orm::prelude::DateTimeWithTimeZone = chrono::Utc::now().into();
    let stored = comment::Model {
        id: 11,
        user_id: 1,
        description: "nice post".to_owned(),
        post_id: 3,
        created_at,
    };
    let joined = BTreeMap::from([
        ("id", Value::from(11)),
        ("user_id", Value::from(1)),
        ("description", Value::from("nice post")),
        ("post_id", Value::from(3)),
        ("created_at", Value::from(created_at)),
        ("author_name", Value::from("ada")),
        ("author_email", Value::from("ada@example.com")),
    ]);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![stored]])
        .append_query_results(vec![vec![joined.clone()]])
        .append_query_results(vec![vec![joined]])
        .into_connection();
    let repo: &dyn CommentRepository = &PgCommentRepository::new(db);

    let id = repo
        .insert(NewComment {
            user_id: 1,
            description: "nice post".to_owned(),
            post_id: 3,
        })
        .await
        .unwrap();
    assert_eq!(id, 11);

    let filter = chirp_core::domain::CommentFilter {
        post_id: Some(3),
        ..Default::default()
    };
    let comments = repo.find_many_with_author(&filter).await.unwrap();

    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].comment.description, "nice post");
    assert_eq!(comments[0].author_name, "ada");

    let one = repo.find_one_with_author(&filter).await.unwrap().unwrap();
    assert_eq!(one.comment.id, 11);
    assert_eq!(one.author_email, "ada@example.com");
}
