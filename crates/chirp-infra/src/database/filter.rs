//! Compilation of per-entity filter structs into SQL conditions.

use sea_orm::sea_query::Condition;
use sea_orm::{ColumnTrait, EntityTrait};

use chirp_core::domain::{CommentFilter, PostFilter, UserFilter};

use super::entity::{comment, post, user};

/// Compiles a filter struct into an equality condition for entity `E`.
///
/// Filter fields are a closed, per-entity set, so filtering on an unknown
/// field is rejected at compile time. Every populated field must match; an
/// empty filter compiles to a match-all condition.
pub trait EntityFilter<E: EntityTrait>: Send + Sync {
    fn condition(&self) -> Condition;
}

impl EntityFilter<user::Entity> for UserFilter {
    fn condition(&self) -> Condition {
        let mut cond = Condition::all();
        if let Some(id) = self.id {
            cond = cond.add(user::Column::Id.eq(id));
        }
        if let Some(name) = &self.name {
            cond = cond.add(user::Column::Name.eq(name.as_str()));
        }
        if let Some(email) = &self.email {
            cond = cond.add(user::Column::Email.eq(email.as_str()));
        }
        cond
    }
}

impl EntityFilter<post::Entity> for PostFilter {
    fn condition(&self) -> Condition {
        let mut cond = Condition::all();
        if let Some(id) = self.id {
            cond = cond.add(post::Column::Id.eq(id));
        }
        if let Some(user_id) = self.user_id {
            cond = cond.add(post::Column::UserId.eq(user_id));
        }
        cond
    }
}

impl EntityFilter<comment::Entity> for CommentFilter {
    fn condition(&self) -> Condition {
        let mut cond = Condition::all();
        if let Some(id) = self.id {
            cond = cond.add(comment::Column::Id.eq(id));
        }
        if let Some(user_id) = self.user_id {
            cond = cond.add(comment::Column::UserId.eq(user_id));
        }
        if let Some(post_id) = self.post_id {
            cond = cond.add(comment::Column::PostId.eq(post_id));
        }
        cond
    }
}
