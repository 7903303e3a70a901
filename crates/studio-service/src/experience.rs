//! Experience service.

use studio_core::error::StudioResult;
use studio_core::filter::Filter;
use studio_core::models::experience::{self, Experience};
use studio_core::models::website::Website;
use studio_core::repository::PartitionedRepository;
use studio_core::result::OperationResult;
use studio_core::validation::Validate;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::guard;

/// Experience management within one tenant's partition.
///
/// Every experience must reference a website stored in the same
/// partition; the reference is checked on create and whenever an update
/// moves the experience to another website.
pub struct ExperienceService<E, W>
where
    E: PartitionedRepository<Experience>,
    W: PartitionedRepository<Website>,
{
    experiences: E,
    websites: W,
}

impl<E, W> ExperienceService<E, W>
where
    E: PartitionedRepository<Experience>,
    W: PartitionedRepository<Website>,
{
    pub fn new(experiences: E, websites: W) -> Self {
        Self {
            experiences,
            websites,
        }
    }

    /// Create an experience and return its new id. The payload's id is
    /// ignored.
    pub async fn create(
        &self,
        tenant_id: Uuid,
        mut experience: Experience,
    ) -> StudioResult<OperationResult<Uuid>> {
        guard::tenant_id(tenant_id)?;
        debug!(%tenant_id, name = %experience.name, "Creating experience");

        let errors = experience.validate();
        if !errors.is_empty() {
            warn!(%tenant_id, errors = %errors.summary(), "Experience validation failed");
            return Ok(errors.into_failure());
        }

        let website_id = experience.website_id;
        if !self.website_exists(tenant_id, website_id).await? {
            warn!(%tenant_id, %website_id, "Referenced website not found");
            return Ok(missing_website(website_id));
        }

        experience.id = Uuid::new_v4();
        self.experiences.add(tenant_id, &experience).await?;

        info!(%tenant_id, experience_id = %experience.id, %website_id, "Created experience");
        Ok(OperationResult::success(experience.id))
    }

    pub async fn get_by_id(
        &self,
        tenant_id: Uuid,
        experience_id: Uuid,
    ) -> StudioResult<OperationResult<Experience>> {
        guard::tenant_id(tenant_id)?;
        guard::non_nil("experience_id", experience_id)?;
        debug!(%tenant_id, %experience_id, "Getting experience");

        match self.find(tenant_id, experience_id).await? {
            Some(experience) => Ok(OperationResult::success(experience)),
            None => {
                warn!(%tenant_id, %experience_id, "Experience not found");
                Ok(not_found(experience_id))
            }
        }
    }

    /// Every experience attached to `website_id`, published or not.
    pub async fn list_all(
        &self,
        tenant_id: Uuid,
        website_id: Uuid,
    ) -> StudioResult<OperationResult<Vec<Experience>>> {
        guard::tenant_id(tenant_id)?;
        guard::non_nil("website_id", website_id)?;
        debug!(%tenant_id, %website_id, "Listing experiences");

        let filter = Filter::eq(experience::fields::WEBSITE_ID, website_id);
        let experiences = self.experiences.list(tenant_id, filter).await?;

        debug!(%tenant_id, %website_id, count = experiences.len(), "Found experiences");
        Ok(OperationResult::success(experiences))
    }

    /// Published experiences attached to `website_id`.
    pub async fn list_published(
        &self,
        tenant_id: Uuid,
        website_id: Uuid,
    ) -> StudioResult<OperationResult<Vec<Experience>>> {
        guard::tenant_id(tenant_id)?;
        guard::non_nil("website_id", website_id)?;
        debug!(%tenant_id, %website_id, "Listing published experiences");

        let filter = Filter::eq(experience::fields::WEBSITE_ID, website_id)
            .and(Filter::eq(experience::fields::IS_PUBLISHED, true));
        let experiences = self.experiences.list(tenant_id, filter).await?;

        debug!(
            %tenant_id,
            %website_id,
            count = experiences.len(),
            "Found published experiences"
        );
        Ok(OperationResult::success(experiences))
    }

    /// Replace every field of an existing experience except its id.
    pub async fn update(
        &self,
        tenant_id: Uuid,
        experience_id: Uuid,
        changes: Experience,
    ) -> StudioResult<OperationResult<Experience>> {
        guard::tenant_id(tenant_id)?;
        guard::non_nil("experience_id", experience_id)?;
        debug!(%tenant_id, %experience_id, "Updating experience");

        let Some(mut existing) = self.find(tenant_id, experience_id).await? else {
            warn!(%tenant_id, %experience_id, "Experience not found for update");
            return Ok(not_found(experience_id));
        };

        let errors = changes.validate();
        if !errors.is_empty() {
            warn!(
                %tenant_id,
                %experience_id,
                errors = %errors.summary(),
                "Experience update validation failed"
            );
            return Ok(errors.into_failure());
        }

        let website_id = changes.website_id;
        if website_id != existing.website_id {
            debug!(%experience_id, %website_id, "Experience moves to another website");
            if !self.website_exists(tenant_id, website_id).await? {
                warn!(%tenant_id, %experience_id, %website_id, "New website not found");
                return Ok(missing_website(website_id));
            }
        }

        existing.website_id = changes.website_id;
        existing.name = changes.name;
        existing.conditions = changes.conditions;
        existing.actions = changes.actions;
        existing.is_published = changes.is_published;
        existing.metadata = changes.metadata;

        self.experiences.update(tenant_id, &existing).await?;

        info!(%tenant_id, %experience_id, "Updated experience");
        Ok(OperationResult::success(existing))
    }

    pub async fn delete(
        &self,
        tenant_id: Uuid,
        experience_id: Uuid,
    ) -> StudioResult<OperationResult> {
        guard::tenant_id(tenant_id)?;
        guard::non_nil("experience_id", experience_id)?;
        debug!(%tenant_id, %experience_id, "Deleting experience");

        let Some(experience) = self.find(tenant_id, experience_id).await? else {
            warn!(%tenant_id, %experience_id, "Experience not found for deletion");
            return Ok(not_found(experience_id));
        };

        self.experiences.delete(tenant_id, &experience).await?;

        info!(%tenant_id, %experience_id, "Deleted experience");
        Ok(OperationResult::ok())
    }

    async fn find(&self, tenant_id: Uuid, experience_id: Uuid) -> StudioResult<Option<Experience>> {
        self.experiences
            .get(tenant_id, Filter::id(experience_id))
            .await
    }

    async fn website_exists(&self, tenant_id: Uuid, website_id: Uuid) -> StudioResult<bool> {
        let website = self.websites.get(tenant_id, Filter::id(website_id)).await?;
        Ok(website.is_some())
    }
}

fn not_found<T>(experience_id: Uuid) -> OperationResult<T> {
    OperationResult::not_found(format!("Experience with ID {experience_id} not found"))
}

fn missing_website<T>(website_id: Uuid) -> OperationResult<T> {
    OperationResult::validation_failure(format!(
        "Website with ID {website_id} does not exist or you don't have access to it"
    ))
}
