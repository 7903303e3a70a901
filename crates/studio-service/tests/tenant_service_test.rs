//! Integration tests for the tenant service against in-memory SurrealDB.

use studio_core::OperationErrorKind;
use studio_core::StudioError;
use studio_core::models::experience::Experience;
use studio_core::models::tenant::Tenant;
use studio_core::models::website::Website;
use studio_db::repository::{SurrealApplicationRepository, SurrealPartitionedRepository};
use studio_service::{TenantService, WebsiteService};
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};
use uuid::Uuid;

type Tenants = SurrealApplicationRepository<Db, Tenant>;
type Websites = SurrealPartitionedRepository<Db, Website>;
type Experiences = SurrealPartitionedRepository<Db, Experience>;

async fn setup() -> (
    TenantService<Tenants, Websites>,
    WebsiteService<Websites, Experiences>,
) {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    studio_db::run_migrations(&db).await.unwrap();

    let websites = Websites::new(db.clone());
    (
        TenantService::new(Tenants::new(db.clone()), websites.clone()),
        WebsiteService::new(websites, Experiences::new(db)),
    )
}

#[tokio::test]
async fn ensure_provisioning_is_idempotent() {
    let (tenants, _) = setup().await;
    let id = Uuid::new_v4();

    let first = tenants
        .ensure_provisioning(Tenant::with_default_name(id))
        .await
        .unwrap();
    assert!(first.is_success());

    // A second call with a different name leaves the stored tenant alone.
    let second = tenants
        .ensure_provisioning(Tenant::new(id, "Renamed"))
        .await
        .unwrap();
    assert!(second.is_success());

    let stored = tenants.get_by_id(id).await.unwrap().into_data().unwrap();
    assert_eq!(stored.name, format!("org_{id}"));
    assert_eq!(tenants.list().await.unwrap().into_data().unwrap().len(), 1);
}

#[tokio::test]
async fn ensure_provisioning_validates_new_tenants() {
    let (tenants, _) = setup().await;
    let id = Uuid::new_v4();

    let result = tenants.ensure_provisioning(Tenant::new(id, "")).await.unwrap();

    assert_eq!(result.error_kind(), Some(OperationErrorKind::ValidationError));
    assert_eq!(
        tenants.get_by_id(id).await.unwrap().error_kind(),
        Some(OperationErrorKind::NotFound)
    );
}

#[tokio::test]
async fn ensure_provisioning_rejects_nil_id() {
    let (tenants, _) = setup().await;

    let err = tenants
        .ensure_provisioning(Tenant::new(Uuid::nil(), "Acme"))
        .await
        .unwrap_err();

    assert!(matches!(err, StudioError::InvalidArgument { .. }));
}

#[tokio::test]
async fn create_keeps_supplied_id_and_rejects_duplicates() {
    let (tenants, _) = setup().await;
    let id = Uuid::new_v4();

    let created = tenants
        .create(Tenant::new(id, "Acme"))
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(created, id);

    let again = tenants.create(Tenant::new(id, "Acme")).await.unwrap();
    assert_eq!(again.error_kind(), Some(OperationErrorKind::ValidationError));

    let generated = tenants
        .create(Tenant::new(Uuid::nil(), "Globex"))
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert!(!generated.is_nil());
}

#[tokio::test]
async fn update_renames_without_changing_id() {
    let (tenants, _) = setup().await;
    let id = Uuid::new_v4();
    tenants.create(Tenant::new(id, "Acme")).await.unwrap().into_data().unwrap();

    let updated = tenants
        .update(id, Tenant::new(Uuid::new_v4(), "Acme Holdings"))
        .await
        .unwrap()
        .into_data()
        .unwrap();

    assert_eq!(updated, Tenant::new(id, "Acme Holdings"));
    let missing = tenants
        .update(Uuid::new_v4(), Tenant::new(Uuid::nil(), "Nobody"))
        .await
        .unwrap();
    assert_eq!(missing.error_kind(), Some(OperationErrorKind::NotFound));
}

#[tokio::test]
async fn tenant_with_websites_cannot_be_deleted() {
    let (tenants, websites) = setup().await;
    let id = Uuid::new_v4();
    tenants.create(Tenant::new(id, "Acme")).await.unwrap().into_data().unwrap();
    let site_id = websites
        .create(id, Website::new("Acme"))
        .await
        .unwrap()
        .into_data()
        .unwrap();

    let blocked = tenants.delete(id).await.unwrap();
    assert_eq!(blocked.error_kind(), Some(OperationErrorKind::ValidationError));
    assert_eq!(blocked.message(), Some("Delete all existing websites first."));
    assert!(tenants.get_by_id(id).await.unwrap().is_success());
    assert!(websites.get_by_id(id, site_id).await.unwrap().is_success());

    websites.delete(id, site_id).await.unwrap().into_data().unwrap();
    assert!(tenants.delete(id).await.unwrap().is_success());
    assert_eq!(
        tenants.delete(id).await.unwrap().error_kind(),
        Some(OperationErrorKind::NotFound)
    );
}
