use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DbConn, DbErr, EntityTrait, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait,
    QueryFilter, QueryOrder, QuerySelect, SqlErr,
};

use chirp_core::error::RepoError;
use chirp_core::ports::Repository;

use super::filter::EntityFilter;

/// Generic PostgreSQL repository, instantiated once per entity kind.
pub struct PgRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PgRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

pub(crate) fn map_db_err(e: DbErr) -> RepoError {
    if let Some(sql_err) = e.sql_err() {
        return match sql_err {
            SqlErr::UniqueConstraintViolation(msg)
            | SqlErr::ForeignKeyConstraintViolation(msg) => RepoError::Constraint(msg),
            _ => RepoError::Query(e.to_string()),
        };
    }
    match e {
        DbErr::Conn(err) => RepoError::Connection(err.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl<E, T, N, F, ID> Repository<T, N, F, ID> for PgRepository<E>
where
    E: EntityTrait,
    T: From<E::Model> + Send + Sync + 'static,
    N: Into<E::ActiveModel> + Send + Sync + 'static,
    F: EntityFilter<E> + Send + Sync + 'static,
    E::ActiveModel: ActiveModelTrait<Entity = E> + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + 'static,
{
    async fn find_many(&self, filter: &F) -> Result<Vec<T>, RepoError> {
        let mut query = E::find().filter(filter.condition());
        // Primary-key order keeps unfiltered listings deterministic.
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }

        let rows = query.all(&self.db).await.map_err(map_db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_one(&self, filter: &F) -> Result<Option<T>, RepoError> {
        // Fetch two rows so an ambiguous match is an error instead of a
        // silent "first wins".
        let rows = E::find()
            .filter(filter.condition())
            .limit(2)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        if rows.len() > 1 {
            return Err(RepoError::Ambiguous);
        }
        Ok(rows.into_iter().next().map(Into::into))
    }

    async fn insert(&self, record: N) -> Result<ID, RepoError> {
        let active_model: E::ActiveModel = record.into();
        let result = E::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.last_insert_id)
    }

    async fn delete_by_id(&self, id: ID) -> Result<(), RepoError> {
        // Deleting a missing row is a no-op, not an error; callers that need
        // existence semantics check first.
        E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}
