//! Per-entity repository extensions: joined author reads and post search.

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::{PgExpr, PgFunc};
use sea_orm::sea_query::{Condition, Expr, ExprTrait};
use sea_orm::{
    EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    Select,
};

use chirp_core::domain::{
    Comment, CommentFilter, CommentWithAuthor, Post, PostFilter, PostWithAuthor,
};
use chirp_core::error::RepoError;
use chirp_core::ports::{CommentRepository, PostRepository, UserRepository};

use super::entity::{comment, post, user};
use super::filter::EntityFilter;
use super::postgres_base::{PgRepository, map_db_err};

/// PostgreSQL user repository.
pub type PgUserRepository = PgRepository<user::Entity>;

/// PostgreSQL post repository.
pub type PgPostRepository = PgRepository<post::Entity>;

/// PostgreSQL comment repository.
pub type PgCommentRepository = PgRepository<comment::Entity>;

impl UserRepository for PgUserRepository {}

/// Escape LIKE wildcards so user input matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[derive(Debug, FromQueryResult)]
struct PostAuthorRow {
    id: i32,
    title: String,
    short_description: String,
    description: String,
    time: Option<i64>,
    tags: Vec<String>,
    user_id: i32,
    created_at: sea_orm::prelude::DateTimeWithTimeZone,
    author_name: String,
    author_email: String,
}

impl From<PostAuthorRow> for PostWithAuthor {
    fn from(row: PostAuthorRow) -> Self {
        Self {
            post: Post {
                id: row.id,
                title: row.title,
                short_description: row.short_description,
                description: row.description,
                time: row.time,
                tags: row.tags,
                user_id: row.user_id,
                created_at: row.created_at.into(),
            },
            author_name: row.author_name,
            author_email: row.author_email,
        }
    }
}

/// Posts inner-joined to their owning user, newest first with the id as
/// tiebreak.
fn posts_with_author(cond: Condition) -> Select<post::Entity> {
    post::Entity::find()
        .join(JoinType::InnerJoin, post::Relation::User.def())
        .column_as(user::Column::Name, "author_name")
        .column_as(user::Column::Email, "author_email")
        .filter(cond)
        .order_by_desc(post::Column::CreatedAt)
        .order_by_desc(post::Column::Id)
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn find_many_with_author(
        &self,
        filter: &PostFilter,
    ) -> Result<Vec<PostWithAuthor>, RepoError> {
        let rows = posts_with_author(filter.condition())
            .into_model::<PostAuthorRow>()
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_one_with_author(
        &self,
        filter: &PostFilter,
    ) -> Result<Option<PostWithAuthor>, RepoError> {
        let rows = posts_with_author(filter.condition())
            .limit(2)
            .into_model::<PostAuthorRow>()
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        if rows.len() > 1 {
            return Err(RepoError::Ambiguous);
        }
        Ok(rows.into_iter().next().map(Into::into))
    }

    async fn search_with_author(
        &self,
        query: Option<&str>,
        tag: Option<&str>,
    ) -> Result<Vec<PostWithAuthor>, RepoError> {
        let mut cond = Condition::all();

        if let Some(query) = query {
            let pattern = format!("%{}%", escape_like(query));
            cond = cond.add(
                Condition::any()
                    .add(Expr::col((post::Entity, post::Column::Title)).ilike(pattern.as_str()))
                    .add(
                        Expr::col((post::Entity, post::Column::ShortDescription))
                            .ilike(pattern.as_str()),
                    )
                    .add(
                        Expr::col((post::Entity, post::Column::Description))
                            .ilike(pattern.as_str()),
                    ),
            );
        }

        if let Some(tag) = tag {
            // tag = ANY(tags): membership test against the tags array.
            cond = cond.add(
                Expr::val(tag).eq(PgFunc::any(Expr::col((post::Entity, post::Column::Tags)))),
            );
        }

        let rows = posts_with_author(cond)
            .into_model::<PostAuthorRow>()
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, FromQueryResult)]
struct CommentAuthorRow {
    id: i32,
    user_id: i32,
    description: String,
    post_id: i32,
    created_at: sea_orm::prelude::DateTimeWithTimeZone,
    author_name: String,
    author_email: String,
}

impl From<CommentAuthorRow> for CommentWithAuthor {
    fn from(row: CommentAuthorRow) -> Self {
        Self {
            comment: Comment {
                id: row.id,
                user_id: row.user_id,
                description: row.description,
                post_id: row.post_id,
                created_at: row.created_at.into(),
            },
            author_name: row.author_name,
            author_email: row.author_email,
        }
    }
}

fn comments_with_author(cond: Condition) -> Select<comment::Entity> {
    comment::Entity::find()
        .join(JoinType::InnerJoin, comment::Relation::User.def())
        .column_as(user::Column::Name, "author_name")
        .column_as(user::Column::Email, "author_email")
        .filter(cond)
        .order_by_desc(comment::Column::CreatedAt)
        .order_by_desc(comment::Column::Id)
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn find_many_with_author(
        &self,
        filter: &CommentFilter,
    ) -> Result<Vec<CommentWithAuthor>, RepoError> {
        let rows = comments_with_author(filter.condition())
            .into_model::<CommentAuthorRow>()
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_one_with_author(
        &self,
        filter: &CommentFilter,
    ) -> Result<Option<CommentWithAuthor>, RepoError> {
        let rows = comments_with_author(filter.condition())
            .limit(2)
            .into_model::<CommentAuthorRow>()
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        if rows.len() > 1 {
            return Err(RepoError::Ambiguous);
        }
        Ok(rows.into_iter().next().map(Into::into))
    }
}
