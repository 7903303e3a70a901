//! Tenant service.
//!
//! Tenants live in the application partition. Their ids mirror the
//! tenant ids issued by the identity provider, so unlike websites and
//! experiences a supplied id is kept on create.

use studio_core::error::StudioResult;
use studio_core::filter::Filter;
use studio_core::models::tenant::Tenant;
use studio_core::models::website::Website;
use studio_core::repository::{ApplicationRepository, PartitionedRepository};
use studio_core::result::OperationResult;
use studio_core::validation::Validate;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::guard;

pub struct TenantService<T, W>
where
    T: ApplicationRepository<Tenant>,
    W: PartitionedRepository<Website>,
{
    tenants: T,
    websites: W,
}

impl<T, W> TenantService<T, W>
where
    T: ApplicationRepository<Tenant>,
    W: PartitionedRepository<Website>,
{
    pub fn new(tenants: T, websites: W) -> Self {
        Self { tenants, websites }
    }

    pub async fn list(&self) -> StudioResult<OperationResult<Vec<Tenant>>> {
        debug!("Listing tenants");
        let tenants = self.tenants.list(Filter::all()).await?;
        Ok(OperationResult::success(tenants))
    }

    pub async fn get_by_id(&self, tenant_id: Uuid) -> StudioResult<OperationResult<Tenant>> {
        guard::tenant_id(tenant_id)?;
        debug!(%tenant_id, "Getting tenant");

        match self.find(tenant_id).await? {
            Some(tenant) => {
                debug!(%tenant_id, name = %tenant.name, "Found tenant");
                Ok(OperationResult::success(tenant))
            }
            None => {
                warn!(%tenant_id, "Tenant not found");
                Ok(not_found(tenant_id))
            }
        }
    }

    /// Register a new tenant and return its id. A nil id is replaced by
    /// a fresh one; an id already registered is a validation failure.
    pub async fn create(&self, mut tenant: Tenant) -> StudioResult<OperationResult<Uuid>> {
        if tenant.id.is_nil() {
            tenant.id = Uuid::new_v4();
        }
        let tenant_id = tenant.id;
        debug!(%tenant_id, name = %tenant.name, "Creating tenant");

        let errors = tenant.validate();
        if !errors.is_empty() {
            warn!(%tenant_id, errors = %errors.summary(), "Tenant validation failed");
            return Ok(errors.into_failure());
        }

        if self.find(tenant_id).await?.is_some() {
            warn!(%tenant_id, "Tenant already exists");
            return Ok(OperationResult::validation_failure(format!(
                "Tenant with ID {tenant_id} already exists"
            )));
        }

        self.tenants.add(&tenant).await?;

        info!(%tenant_id, name = %tenant.name, "Created tenant");
        Ok(OperationResult::success(tenant_id))
    }

    /// Make sure `tenant` is registered. An existing tenant with the same
    /// id is left untouched.
    pub async fn ensure_provisioning(&self, tenant: Tenant) -> StudioResult<OperationResult> {
        guard::tenant_id(tenant.id)?;
        let tenant_id = tenant.id;
        debug!(%tenant_id, name = %tenant.name, "Ensuring tenant provisioning");

        if self.find(tenant_id).await?.is_some() {
            debug!(%tenant_id, "Tenant already provisioned");
            return Ok(OperationResult::ok());
        }

        let errors = tenant.validate();
        if !errors.is_empty() {
            warn!(%tenant_id, errors = %errors.summary(), "Tenant validation failed");
            return Ok(errors.into_failure());
        }

        self.tenants.add(&tenant).await?;

        info!(%tenant_id, name = %tenant.name, "Provisioned tenant");
        Ok(OperationResult::ok())
    }

    /// Rename an existing tenant. The payload's id is ignored.
    pub async fn update(
        &self,
        tenant_id: Uuid,
        mut changes: Tenant,
    ) -> StudioResult<OperationResult<Tenant>> {
        guard::tenant_id(tenant_id)?;
        debug!(%tenant_id, "Updating tenant");

        let Some(mut existing) = self.find(tenant_id).await? else {
            warn!(%tenant_id, "Tenant not found for update");
            return Ok(not_found(tenant_id));
        };

        changes.id = tenant_id;
        let errors = changes.validate();
        if !errors.is_empty() {
            warn!(%tenant_id, errors = %errors.summary(), "Tenant update validation failed");
            return Ok(errors.into_failure());
        }

        existing.name = changes.name;
        self.tenants.update(&existing).await?;

        info!(%tenant_id, "Updated tenant");
        Ok(OperationResult::success(existing))
    }

    /// Delete a tenant that owns no websites.
    pub async fn delete(&self, tenant_id: Uuid) -> StudioResult<OperationResult> {
        guard::tenant_id(tenant_id)?;
        debug!(%tenant_id, "Deleting tenant");

        let Some(tenant) = self.find(tenant_id).await? else {
            warn!(%tenant_id, "Tenant not found for deletion");
            return Ok(not_found(tenant_id));
        };

        let websites = self.websites.list(tenant_id, Filter::all()).await?;
        if !websites.is_empty() {
            warn!(
                %tenant_id,
                website_count = websites.len(),
                "Cannot delete tenant with websites"
            );
            return Ok(OperationResult::validation_failure(
                "Delete all existing websites first.",
            ));
        }

        self.tenants.delete(&tenant).await?;

        info!(%tenant_id, "Deleted tenant");
        Ok(OperationResult::ok())
    }

    async fn find(&self, tenant_id: Uuid) -> StudioResult<Option<Tenant>> {
        self.tenants.get(Filter::id(tenant_id)).await
    }
}

fn not_found<T>(tenant_id: Uuid) -> OperationResult<T> {
    OperationResult::not_found(format!("Tenant with ID {tenant_id} not found"))
}
