//! SurrealDB implementation of [`ApplicationRepository`].

use std::marker::PhantomData;

use studio_core::error::StudioResult;
use studio_core::filter::Filter;
use studio_core::repository::{APPLICATION_PARTITION, ApplicationRepository, HasIdentifier};
use surrealdb::{Connection, Surreal};
use tracing::debug;

use super::APPLICATION_PARTITION_FIELD;
use super::document::DocumentStore;

/// Document store for `T` bound to the shared application partition.
pub struct SurrealApplicationRepository<C: Connection, T> {
    store: DocumentStore<C>,
    _entity: PhantomData<fn() -> T>,
}

impl<C: Connection, T> Clone for SurrealApplicationRepository<C, T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _entity: PhantomData,
        }
    }
}

impl<C: Connection, T: HasIdentifier> SurrealApplicationRepository<C, T> {
    pub fn new(db: Surreal<C>) -> Self {
        Self {
            store: DocumentStore::new(db, T::CONTAINER, APPLICATION_PARTITION_FIELD),
            _entity: PhantomData,
        }
    }
}

impl<C: Connection, T: HasIdentifier> ApplicationRepository<T>
    for SurrealApplicationRepository<C, T>
{
    async fn get(&self, filter: Filter) -> StudioResult<Option<T>> {
        let mut found = self
            .store
            .find(APPLICATION_PARTITION, &filter, Some(1))
            .await?;
        Ok(found.pop())
    }

    async fn list(&self, filter: Filter) -> StudioResult<Vec<T>> {
        Ok(self.store.find(APPLICATION_PARTITION, &filter, None).await?)
    }

    async fn add(&self, entity: &T) -> StudioResult<()> {
        debug!(container = T::CONTAINER, id = %entity.id(), "Adding application document");
        Ok(self.store.create(APPLICATION_PARTITION, entity).await?)
    }

    async fn add_range(&self, entities: &[T]) -> StudioResult<()> {
        Ok(self
            .store
            .create_many(APPLICATION_PARTITION, entities)
            .await?)
    }

    async fn update(&self, entity: &T) -> StudioResult<()> {
        debug!(container = T::CONTAINER, id = %entity.id(), "Replacing application document");
        Ok(self.store.replace(APPLICATION_PARTITION, entity).await?)
    }

    async fn delete(&self, entity: &T) -> StudioResult<()> {
        debug!(container = T::CONTAINER, id = %entity.id(), "Deleting application document");
        Ok(self.store.remove(APPLICATION_PARTITION, entity).await?)
    }
}
