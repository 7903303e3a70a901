//! Integration tests for the website service against in-memory SurrealDB.

use studio_core::OperationErrorKind;
use studio_core::StudioError;
use studio_core::models::experience::Experience;
use studio_core::models::website::{Website, fields};
use studio_db::repository::SurrealPartitionedRepository;
use studio_service::{ExperienceService, WebsiteService};
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};
use uuid::Uuid;

type Websites = SurrealPartitionedRepository<Db, Website>;
type Experiences = SurrealPartitionedRepository<Db, Experience>;

/// Spin up in-memory DB, run migrations and wire both services.
async fn setup() -> (
    WebsiteService<Websites, Experiences>,
    ExperienceService<Experiences, Websites>,
) {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    studio_db::run_migrations(&db).await.unwrap();

    let websites = Websites::new(db.clone());
    let experiences = Experiences::new(db);
    (
        WebsiteService::new(websites.clone(), experiences.clone()),
        ExperienceService::new(experiences, websites),
    )
}

fn acme() -> Website {
    Website::new("Acme").with_url("https://acme.com")
}

#[tokio::test]
async fn created_website_is_listed_only_for_its_tenant() {
    let (websites, _) = setup().await;
    let t1 = Uuid::new_v4();
    let t2 = Uuid::new_v4();

    let id = websites.create(t1, acme()).await.unwrap().into_data().unwrap();

    let listed = websites.list(t1).await.unwrap().into_data().unwrap();
    assert_eq!(listed.iter().map(|w| w.id).collect::<Vec<_>>(), vec![id]);
    assert!(websites.list(t2).await.unwrap().into_data().unwrap().is_empty());

    let foreign = websites.get_by_id(t2, id).await.unwrap();
    assert_eq!(foreign.error_kind(), Some(OperationErrorKind::NotFound));
}

#[tokio::test]
async fn create_ignores_supplied_id_and_stamps_timestamps() {
    let (websites, _) = setup().await;
    let tenant = Uuid::new_v4();
    let supplied = Uuid::new_v4();
    let mut site = acme();
    site.id = supplied;

    let id = websites.create(tenant, site).await.unwrap().into_data().unwrap();
    assert_ne!(id, supplied);

    let stored = websites.get_by_id(tenant, id).await.unwrap().into_data().unwrap();
    assert_eq!(stored.id, id);
    assert_eq!(stored.created_at, stored.updated_at);
}

#[tokio::test]
async fn invalid_website_is_rejected_with_field_errors() {
    let (websites, _) = setup().await;
    let tenant = Uuid::new_v4();

    let result = websites
        .create(tenant, Website::new("A").with_url("ftp://acme.com"))
        .await
        .unwrap();

    assert_eq!(result.error_kind(), Some(OperationErrorKind::ValidationError));
    let field_errors = result.field_errors().unwrap();
    assert!(field_errors.contains_key(fields::NAME));
    assert!(field_errors.contains_key("url"));
    assert!(websites.list(tenant).await.unwrap().into_data().unwrap().is_empty());
}

#[tokio::test]
async fn duplicate_name_is_rejected_case_insensitively() {
    let (websites, _) = setup().await;
    let tenant = Uuid::new_v4();
    websites.create(tenant, acme()).await.unwrap().into_data().unwrap();

    let again = websites.create(tenant, Website::new("ACME")).await.unwrap();
    assert_eq!(again.error_kind(), Some(OperationErrorKind::ValidationError));
    assert_eq!(again.message(), Some("A website with the name 'ACME' already exists"));

    // Another tenant may use the same name.
    let elsewhere = websites.create(Uuid::new_v4(), acme()).await.unwrap();
    assert!(elsewhere.is_success());
}

#[tokio::test]
async fn update_copies_fields_but_keeps_id_and_created_at() {
    let (websites, _) = setup().await;
    let tenant = Uuid::new_v4();
    let id = websites.create(tenant, acme()).await.unwrap().into_data().unwrap();
    let before = websites.get_by_id(tenant, id).await.unwrap().into_data().unwrap();

    let mut changes = Website::new("Acme Shop").with_description("Storefront");
    changes.id = Uuid::new_v4();
    let updated = websites
        .update(tenant, id, changes)
        .await
        .unwrap()
        .into_data()
        .unwrap();

    assert_eq!(updated.id, id);
    assert_eq!(updated.name, "Acme Shop");
    assert_eq!(updated.description.as_deref(), Some("Storefront"));
    assert_eq!(updated.url, None);
    assert_eq!(updated.created_at, before.created_at);
    assert!(updated.updated_at >= before.updated_at);

    let stored = websites.get_by_id(tenant, id).await.unwrap().into_data().unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn update_may_keep_its_own_name_but_not_take_another() {
    let (websites, _) = setup().await;
    let tenant = Uuid::new_v4();
    let acme_id = websites.create(tenant, acme()).await.unwrap().into_data().unwrap();
    let blog_id = websites
        .create(tenant, Website::new("Blog"))
        .await
        .unwrap()
        .into_data()
        .unwrap();

    let same = websites
        .update(tenant, acme_id, Website::new("acme"))
        .await
        .unwrap();
    assert!(same.is_success());

    let taken = websites
        .update(tenant, blog_id, Website::new("Acme"))
        .await
        .unwrap();
    assert_eq!(taken.error_kind(), Some(OperationErrorKind::ValidationError));
}

#[tokio::test]
async fn update_of_unknown_website_is_not_found() {
    let (websites, _) = setup().await;
    let missing = Uuid::new_v4();

    let result = websites
        .update(Uuid::new_v4(), missing, acme())
        .await
        .unwrap();

    assert_eq!(result.error_kind(), Some(OperationErrorKind::NotFound));
    assert_eq!(
        result.message(),
        Some(format!("Website with ID {missing} not found").as_str())
    );
}

#[tokio::test]
async fn website_with_experiences_cannot_be_deleted() {
    let (websites, experiences) = setup().await;
    let tenant = Uuid::new_v4();
    let site_id = websites.create(tenant, acme()).await.unwrap().into_data().unwrap();
    let exp_id = experiences
        .create(tenant, Experience::new(site_id, "Promo"))
        .await
        .unwrap()
        .into_data()
        .unwrap();

    let blocked = websites.delete(tenant, site_id).await.unwrap();
    assert_eq!(blocked.error_kind(), Some(OperationErrorKind::ValidationError));
    assert_eq!(blocked.message(), Some("Delete all existing experiences first."));
    assert!(websites.get_by_id(tenant, site_id).await.unwrap().is_success());

    experiences.delete(tenant, exp_id).await.unwrap().into_data().unwrap();
    assert!(websites.delete(tenant, site_id).await.unwrap().is_success());
    assert_eq!(
        websites.get_by_id(tenant, site_id).await.unwrap().error_kind(),
        Some(OperationErrorKind::NotFound)
    );
}

#[tokio::test]
async fn nil_tenant_breaks_the_argument_contract() {
    let (websites, _) = setup().await;

    let err = websites.create(Uuid::nil(), acme()).await.unwrap_err();
    assert!(matches!(err, StudioError::InvalidArgument { .. }));

    let err = websites.get_by_id(Uuid::new_v4(), Uuid::nil()).await.unwrap_err();
    assert!(matches!(err, StudioError::InvalidArgument { .. }));
}
