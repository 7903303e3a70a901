//! Store contracts for data access abstraction.
//!
//! All store operations are async. Tenant-scoped entities go through a
//! [`PartitionedRepository`], which takes the owning tenant's id on every
//! call and never reads or writes outside that partition. The tenant
//! registry itself goes through an [`ApplicationRepository`], bound to the
//! single shared [`APPLICATION_PARTITION`].

use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::StudioResult;
use crate::filter::Filter;

/// Partition value under which every tenant record is stored.
pub const APPLICATION_PARTITION: &str = "APPLICATION";

/// An entity with a stable identifier, persisted in its own container.
pub trait HasIdentifier: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Name of the container (table) holding this entity.
    const CONTAINER: &'static str;

    fn id(&self) -> Uuid;
}

// ---------------------------------------------------------------------------
// Tenant-scoped store
// ---------------------------------------------------------------------------

pub trait PartitionedRepository<T: HasIdentifier>: Send + Sync {
    /// First entity in the tenant's partition matching `filter`.
    fn get(
        &self,
        tenant_id: Uuid,
        filter: Filter,
    ) -> impl Future<Output = StudioResult<Option<T>>> + Send;

    /// Every entity in the tenant's partition matching `filter`.
    fn list(
        &self,
        tenant_id: Uuid,
        filter: Filter,
    ) -> impl Future<Output = StudioResult<Vec<T>>> + Send;

    /// Insert a new entity. Fails if its id is already taken.
    fn add(&self, tenant_id: Uuid, entity: &T) -> impl Future<Output = StudioResult<()>> + Send;

    /// Insert several entities atomically.
    fn add_range(
        &self,
        tenant_id: Uuid,
        entities: &[T],
    ) -> impl Future<Output = StudioResult<()>> + Send;

    /// Replace the stored entity with the same id. Fails with `NotFound`
    /// if the partition holds no such entity.
    fn update(&self, tenant_id: Uuid, entity: &T)
    -> impl Future<Output = StudioResult<()>> + Send;

    /// Remove the stored entity with the same id. Fails with `NotFound`
    /// if the partition holds no such entity.
    fn delete(&self, tenant_id: Uuid, entity: &T)
    -> impl Future<Output = StudioResult<()>> + Send;
}

// ---------------------------------------------------------------------------
// Application-scoped store
// ---------------------------------------------------------------------------

pub trait ApplicationRepository<T: HasIdentifier>: Send + Sync {
    fn get(&self, filter: Filter) -> impl Future<Output = StudioResult<Option<T>>> + Send;
    fn list(&self, filter: Filter) -> impl Future<Output = StudioResult<Vec<T>>> + Send;
    fn add(&self, entity: &T) -> impl Future<Output = StudioResult<()>> + Send;
    fn add_range(&self, entities: &[T]) -> impl Future<Output = StudioResult<()>> + Send;
    fn update(&self, entity: &T) -> impl Future<Output = StudioResult<()>> + Send;
    fn delete(&self, entity: &T) -> impl Future<Output = StudioResult<()>> + Send;
}
