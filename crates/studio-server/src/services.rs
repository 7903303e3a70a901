//! Explicit wiring of stores to services.

use studio_core::models::experience::Experience;
use studio_core::models::tenant::Tenant;
use studio_core::models::website::Website;
use studio_db::repository::{SurrealApplicationRepository, SurrealPartitionedRepository};
use studio_service::{ExperienceService, TenantService, WebsiteService};
use surrealdb::{Connection, Surreal};

pub type TenantStore<C> = SurrealApplicationRepository<C, Tenant>;
pub type WebsiteStore<C> = SurrealPartitionedRepository<C, Website>;
pub type ExperienceStore<C> = SurrealPartitionedRepository<C, Experience>;

/// Every service of the backend, bound to one database client.
pub struct Services<C: Connection> {
    pub tenants: TenantService<TenantStore<C>, WebsiteStore<C>>,
    pub websites: WebsiteService<WebsiteStore<C>, ExperienceStore<C>>,
    pub experiences: ExperienceService<ExperienceStore<C>, WebsiteStore<C>>,
}

impl<C: Connection> Services<C> {
    pub fn new(db: Surreal<C>) -> Self {
        let tenant_store = TenantStore::new(db.clone());
        let website_store = WebsiteStore::new(db.clone());
        let experience_store = ExperienceStore::new(db);

        Self {
            tenants: TenantService::new(tenant_store, website_store.clone()),
            websites: WebsiteService::new(website_store.clone(), experience_store.clone()),
            experiences: ExperienceService::new(experience_store, website_store),
        }
    }
}
