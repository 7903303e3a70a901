//! Website service.

use chrono::Utc;
use studio_core::error::StudioResult;
use studio_core::filter::Filter;
use studio_core::models::experience::{self, Experience};
use studio_core::models::website::{self, Website};
use studio_core::repository::PartitionedRepository;
use studio_core::result::OperationResult;
use studio_core::validation::Validate;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::guard;

/// Website management within one tenant's partition.
///
/// Generic over store implementations so that the service layer has no
/// dependency on the database crate.
pub struct WebsiteService<W, E>
where
    W: PartitionedRepository<Website>,
    E: PartitionedRepository<Experience>,
{
    websites: W,
    experiences: E,
}

impl<W, E> WebsiteService<W, E>
where
    W: PartitionedRepository<Website>,
    E: PartitionedRepository<Experience>,
{
    pub fn new(websites: W, experiences: E) -> Self {
        Self {
            websites,
            experiences,
        }
    }

    /// Every website of the tenant.
    pub async fn list(&self, tenant_id: Uuid) -> StudioResult<OperationResult<Vec<Website>>> {
        guard::tenant_id(tenant_id)?;
        debug!(%tenant_id, "Listing websites");

        let websites = self.websites.list(tenant_id, Filter::all()).await?;

        debug!(%tenant_id, count = websites.len(), "Found websites");
        Ok(OperationResult::success(websites))
    }

    /// Create a website and return its new id.
    ///
    /// The payload's id and timestamps are ignored; a fresh id is always
    /// generated.
    pub async fn create(
        &self,
        tenant_id: Uuid,
        mut website: Website,
    ) -> StudioResult<OperationResult<Uuid>> {
        guard::tenant_id(tenant_id)?;
        debug!(%tenant_id, name = %website.name, "Creating website");

        let errors = website.validate();
        if !errors.is_empty() {
            warn!(%tenant_id, errors = %errors.summary(), "Website validation failed");
            return Ok(errors.into_failure());
        }

        if self.name_taken(tenant_id, &website.name, None).await? {
            warn!(%tenant_id, name = %website.name, "Website name already exists");
            return Ok(duplicate_name(&website.name));
        }

        let now = Utc::now();
        website.id = Uuid::new_v4();
        website.created_at = now;
        website.updated_at = now;

        self.websites.add(tenant_id, &website).await?;

        info!(%tenant_id, website_id = %website.id, "Created website");
        Ok(OperationResult::success(website.id))
    }

    pub async fn get_by_id(
        &self,
        tenant_id: Uuid,
        website_id: Uuid,
    ) -> StudioResult<OperationResult<Website>> {
        guard::tenant_id(tenant_id)?;
        guard::non_nil("website_id", website_id)?;
        debug!(%tenant_id, %website_id, "Getting website");

        match self.find(tenant_id, website_id).await? {
            Some(website) => Ok(OperationResult::success(website)),
            None => {
                warn!(%tenant_id, %website_id, "Website not found");
                Ok(not_found(website_id))
            }
        }
    }

    /// Overwrite name, description and url of an existing website.
    ///
    /// `created_at` is preserved and `updated_at` is set to now. The
    /// payload's id is ignored.
    pub async fn update(
        &self,
        tenant_id: Uuid,
        website_id: Uuid,
        changes: Website,
    ) -> StudioResult<OperationResult<Website>> {
        guard::tenant_id(tenant_id)?;
        guard::non_nil("website_id", website_id)?;
        debug!(%tenant_id, %website_id, "Updating website");

        let Some(mut existing) = self.find(tenant_id, website_id).await? else {
            warn!(%tenant_id, %website_id, "Website not found for update");
            return Ok(not_found(website_id));
        };

        let errors = changes.validate();
        if !errors.is_empty() {
            warn!(
                %tenant_id,
                %website_id,
                errors = %errors.summary(),
                "Website update validation failed"
            );
            return Ok(errors.into_failure());
        }

        if self
            .name_taken(tenant_id, &changes.name, Some(website_id))
            .await?
        {
            warn!(%tenant_id, %website_id, name = %changes.name, "Website name already exists");
            return Ok(duplicate_name(&changes.name));
        }

        existing.name = changes.name;
        existing.description = changes.description;
        existing.url = changes.url;
        existing.updated_at = Utc::now();

        self.websites.update(tenant_id, &existing).await?;

        info!(%tenant_id, %website_id, "Updated website");
        Ok(OperationResult::success(existing))
    }

    /// Delete a website that no experience references.
    pub async fn delete(&self, tenant_id: Uuid, website_id: Uuid) -> StudioResult<OperationResult> {
        guard::tenant_id(tenant_id)?;
        guard::non_nil("website_id", website_id)?;
        debug!(%tenant_id, %website_id, "Deleting website");

        let Some(website) = self.find(tenant_id, website_id).await? else {
            warn!(%tenant_id, %website_id, "Website not found for deletion");
            return Ok(not_found(website_id));
        };

        let experiences = self
            .experiences
            .list(
                tenant_id,
                Filter::eq(experience::fields::WEBSITE_ID, website_id),
            )
            .await?;
        if !experiences.is_empty() {
            warn!(
                %tenant_id,
                %website_id,
                experience_count = experiences.len(),
                "Cannot delete website with experiences"
            );
            return Ok(OperationResult::validation_failure(
                "Delete all existing experiences first.",
            ));
        }

        self.websites.delete(tenant_id, &website).await?;

        info!(%tenant_id, %website_id, "Deleted website");
        Ok(OperationResult::ok())
    }

    async fn find(&self, tenant_id: Uuid, website_id: Uuid) -> StudioResult<Option<Website>> {
        self.websites.get(tenant_id, Filter::id(website_id)).await
    }

    /// True if a website other than `except` already uses `name`,
    /// ignoring case.
    async fn name_taken(
        &self,
        tenant_id: Uuid,
        name: &str,
        except: Option<Uuid>,
    ) -> StudioResult<bool> {
        let same_name = self
            .websites
            .list(tenant_id, Filter::eq_ignore_case(website::fields::NAME, name))
            .await?;
        Ok(same_name.iter().any(|w| Some(w.id) != except))
    }
}

fn not_found<T>(website_id: Uuid) -> OperationResult<T> {
    OperationResult::not_found(format!("Website with ID {website_id} not found"))
}

fn duplicate_name<T>(name: &str) -> OperationResult<T> {
    OperationResult::validation_failure(format!("A website with the name '{name}' already exists"))
}
