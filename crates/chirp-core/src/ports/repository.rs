use async_trait::async_trait;

use crate::domain::{
    Comment, CommentFilter, CommentWithAuthor, NewComment, NewPost, NewUser, Post, PostFilter,
    PostWithAuthor, User, UserFilter,
};
use crate::error::RepoError;

/// Generic repository contract, instantiated once per entity kind.
///
/// `T` is the entity, `N` the insertable draft, `F` the per-entity filter
/// struct, `ID` the identity type. Filters are closed structs, so a filter
/// over an unknown field is a compile error rather than a runtime one.
#[async_trait]
pub trait Repository<T, N, F, ID>: Send + Sync {
    /// All rows whose fields equal-match every populated filter field, in
    /// primary-key order. An empty filter returns every row.
    async fn find_many(&self, filter: &F) -> Result<Vec<T>, RepoError>;

    /// Singular variant of [`find_many`](Self::find_many). Errors with
    /// [`RepoError::Ambiguous`] when more than one row matches.
    async fn find_one(&self, filter: &F) -> Result<Option<T>, RepoError>;

    /// Insert one row and return its generated identity.
    async fn insert(&self, record: N) -> Result<ID, RepoError>;

    /// Delete at most one row. Deleting a missing row is a silent no-op;
    /// callers that need existence semantics must pre-check.
    async fn delete_by_id(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository.
pub trait UserRepository: Repository<User, NewUser, UserFilter, i32> {}

/// Post repository with joined author reads and search.
#[async_trait]
pub trait PostRepository: Repository<Post, NewPost, PostFilter, i32> {
    /// Matching posts with author name/email attached, newest first.
    async fn find_many_with_author(
        &self,
        filter: &PostFilter,
    ) -> Result<Vec<PostWithAuthor>, RepoError>;

    /// Singular joined read; errors on an ambiguous match.
    async fn find_one_with_author(
        &self,
        filter: &PostFilter,
    ) -> Result<Option<PostWithAuthor>, RepoError>;

    /// Free-text and tag search, newest first.
    ///
    /// `query` substring-matches title, short_description, and description
    /// case-insensitively (OR); `tag` is a membership test against the tags
    /// sequence. Both present combine with AND; both absent returns all
    /// posts.
    async fn search_with_author(
        &self,
        query: Option<&str>,
        tag: Option<&str>,
    ) -> Result<Vec<PostWithAuthor>, RepoError>;
}

/// Comment repository with joined author reads.
#[async_trait]
pub trait CommentRepository: Repository<Comment, NewComment, CommentFilter, i32> {
    /// Matching comments with author name/email attached, newest first.
    async fn find_many_with_author(
        &self,
        filter: &CommentFilter,
    ) -> Result<Vec<CommentWithAuthor>, RepoError>;

    /// Singular joined read; errors on an ambiguous match.
    async fn find_one_with_author(
        &self,
        filter: &CommentFilter,
    ) -> Result<Option<CommentWithAuthor>, RepoError>;
}
