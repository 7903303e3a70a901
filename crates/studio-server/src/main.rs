//! Studio Server: application entry point.

use anyhow::Context;
use clap::Parser;
use studio_core::OperationResult;
use studio_core::models::tenant::Tenant;
use studio_db::{DbConfig, DbManager};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use studio_server::config::{Cli, Command};
use studio_server::services::Services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log).context("invalid log filter")?)
        .json()
        .init();

    info!("Starting Studio server...");

    let db = DbManager::connect(&DbConfig::from(cli.db))
        .await
        .context("failed to connect to SurrealDB")?;
    db.migrate().await.context("failed to apply migrations")?;

    match cli.command {
        Command::Migrate => info!("Migrations applied"),
        Command::Provision { tenant_id, name } => {
            let services = Services::new(db.client().clone());
            let tenant = match name {
                Some(name) => Tenant::new(tenant_id, name),
                None => Tenant::with_default_name(tenant_id),
            };

            match services.tenants.ensure_provisioning(tenant).await? {
                OperationResult::Success(()) => info!(%tenant_id, "Tenant provisioned"),
                failure => {
                    error!(
                        %tenant_id,
                        kind = ?failure.error_kind(),
                        message = failure.message().unwrap_or_default(),
                        field_errors = ?failure.field_errors(),
                        "Tenant provisioning failed"
                    );
                    anyhow::bail!("tenant {tenant_id} could not be provisioned");
                }
            }
        }
    }

    info!("Studio server stopped.");
    Ok(())
}
