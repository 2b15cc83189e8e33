//! Generic repository trait for storage access.

use async_trait::async_trait;

use crate::result::AppResult;

/// Generic create/read repository trait.
///
/// `New` is the validated, not-yet-persisted shape of an entity; the
/// repository assigns the identity and storage-managed fields and returns
/// the persisted `Entity`. Entity-specific operations are defined on
/// extension traits next to the concrete implementations.
#[async_trait]
pub trait Repository<Entity, New, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
    New: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Persist a new entity and return it with its assigned identity.
    async fn save(&self, new: &New) -> AppResult<Entity>;

    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: &Id) -> AppResult<Option<Entity>>;

    /// Return every entity in insertion order.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;

    /// Count total entities.
    async fn count(&self) -> AppResult<u64>;
}
