//! SurrealDB implementation of [`PartitionedRepository`].

use std::marker::PhantomData;

use studio_core::error::StudioResult;
use studio_core::filter::Filter;
use studio_core::repository::{HasIdentifier, PartitionedRepository};
use surrealdb::{Connection, Surreal};
use tracing::debug;
use uuid::Uuid;

use super::TENANT_PARTITION_FIELD;
use super::document::DocumentStore;

/// Tenant-partitioned document store for `T`, backed by the table named
/// by `T::CONTAINER`.
pub struct SurrealPartitionedRepository<C: Connection, T> {
    store: DocumentStore<C>,
    _entity: PhantomData<fn() -> T>,
}

impl<C: Connection, T> Clone for SurrealPartitionedRepository<C, T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _entity: PhantomData,
        }
    }
}

impl<C: Connection, T: HasIdentifier> SurrealPartitionedRepository<C, T> {
    pub fn new(db: Surreal<C>) -> Self {
        Self {
            store: DocumentStore::new(db, T::CONTAINER, TENANT_PARTITION_FIELD),
            _entity: PhantomData,
        }
    }
}

impl<C: Connection, T: HasIdentifier> PartitionedRepository<T>
    for SurrealPartitionedRepository<C, T>
{
    async fn get(&self, tenant_id: Uuid, filter: Filter) -> StudioResult<Option<T>> {
        let partition = tenant_id.to_string();
        let mut found = self.store.find(&partition, &filter, Some(1)).await?;
        Ok(found.pop())
    }

    async fn list(&self, tenant_id: Uuid, filter: Filter) -> StudioResult<Vec<T>> {
        let partition = tenant_id.to_string();
        Ok(self.store.find(&partition, &filter, None).await?)
    }

    async fn add(&self, tenant_id: Uuid, entity: &T) -> StudioResult<()> {
        debug!(container = T::CONTAINER, %tenant_id, id = %entity.id(), "Adding document");
        Ok(self.store.create(&tenant_id.to_string(), entity).await?)
    }

    async fn add_range(&self, tenant_id: Uuid, entities: &[T]) -> StudioResult<()> {
        debug!(
            container = T::CONTAINER,
            %tenant_id,
            count = entities.len(),
            "Adding documents"
        );
        Ok(self
            .store
            .create_many(&tenant_id.to_string(), entities)
            .await?)
    }

    async fn update(&self, tenant_id: Uuid, entity: &T) -> StudioResult<()> {
        debug!(container = T::CONTAINER, %tenant_id, id = %entity.id(), "Replacing document");
        Ok(self.store.replace(&tenant_id.to_string(), entity).await?)
    }

    async fn delete(&self, tenant_id: Uuid, entity: &T) -> StudioResult<()> {
        debug!(container = T::CONTAINER, %tenant_id, id = %entity.id(), "Deleting document");
        Ok(self.store.remove(&tenant_id.to_string(), entity).await?)
    }
}
