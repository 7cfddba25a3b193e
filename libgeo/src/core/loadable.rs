//! A trait for database objects that can be loaded and deleted by their id
use crate::{
    Error, Result,
    core::database::Database,
};
use async_trait::async_trait;
use sqlx::sqlite::SqliteQueryResult;

/// A trait implemented by database entities that are addressable by a unique
/// id. It provides the identity-based half of the CRUD surface (load and
/// delete) behind a narrow interface so that callers never touch SQL
/// directly.
#[async_trait]
pub trait Loadable: Send {
    type Id: Copy + PartialEq + Send + Sync;

    /// The id value used for objects that have not been inserted into the
    /// database yet
    fn invalid_id() -> Self::Id;

    fn id(&self) -> Self::Id;
    fn set_id(&mut self, id: Self::Id);

    /// Whether this object corresponds to a database row
    fn is_loaded(&self) -> bool {
        self.id() != Self::invalid_id()
    }

    /// Load the object with the given id from the database
    async fn load(id: Self::Id, db: &Database) -> Result<Self>
    where
        Self: Sized;

    /// Delete the database row with the given id
    async fn delete_id(id: &Self::Id, db: &Database) -> Result<SqliteQueryResult>;

    /// Delete this object from the database and reset its id so that it can
    /// no longer be mistaken for a persisted object
    async fn delete(&mut self, db: &Database) -> Result<SqliteQueryResult> {
        if !self.is_loaded() {
            return Err(Error::InvalidStateNotLoaded);
        }
        let res = Self::delete_id(&self.id(), db).await?;
        self.set_id(Self::invalid_id());
        Ok(res)
    }
}
