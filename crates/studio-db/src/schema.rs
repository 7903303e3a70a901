//! Schema definitions and migration runner for SurrealDB.
//!
//! Each container is a SCHEMAFULL table with two fields: the partition
//! value and the serialized entity (`doc`, a flexible object). The record
//! key is the array `[partition, entity id]`.

use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use tracing::{debug, info};

use crate::error::DbError;

// -----------------------------------------------------------------------
// Migration tracking
// -----------------------------------------------------------------------

const MIGRATION_TABLE_DDL: &str = "\
DEFINE TABLE IF NOT EXISTS _migration SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS version ON TABLE _migration TYPE int;
DEFINE FIELD IF NOT EXISTS name ON TABLE _migration TYPE string;
DEFINE FIELD IF NOT EXISTS applied_at ON TABLE _migration TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX IF NOT EXISTS idx_migration_version ON TABLE _migration \
    COLUMNS version UNIQUE;
";

#[derive(Debug, SurrealValue)]
struct MigrationRecord {
    version: u32,
}

struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

static MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "document_containers",
    sql: SCHEMA_V1,
}];

// -----------------------------------------------------------------------
// Schema v1: document containers
// -----------------------------------------------------------------------

const SCHEMA_V1: &str = "\
-- =======================================================================
-- Tenants (application partition)
-- =======================================================================
DEFINE TABLE tenant SCHEMAFULL;
DEFINE FIELD partition_key ON TABLE tenant TYPE string;
DEFINE FIELD doc ON TABLE tenant TYPE object FLEXIBLE;
DEFINE INDEX idx_tenant_partition ON TABLE tenant COLUMNS partition_key;

-- =======================================================================
-- Websites (tenant partition)
-- =======================================================================
DEFINE TABLE website SCHEMAFULL;
DEFINE FIELD tenant_id ON TABLE website TYPE string;
DEFINE FIELD doc ON TABLE website TYPE object FLEXIBLE;
DEFINE INDEX idx_website_tenant ON TABLE website COLUMNS tenant_id;

-- =======================================================================
-- Experiences (tenant partition)
-- =======================================================================
DEFINE TABLE experience SCHEMAFULL;
DEFINE FIELD tenant_id ON TABLE experience TYPE string;
DEFINE FIELD doc ON TABLE experience TYPE object FLEXIBLE;
DEFINE INDEX idx_experience_tenant_website ON TABLE experience \
    COLUMNS tenant_id, doc.websiteId;
";

// -----------------------------------------------------------------------
// Public API
// -----------------------------------------------------------------------

/// Run all pending migrations against the given SurrealDB client.
///
/// Creates a `_migration` tracking table on first run, then applies, in
/// order, each migration whose version exceeds the highest recorded one.
pub async fn run_migrations<C: Connection>(db: &Surreal<C>) -> Result<(), DbError> {
    db.query(MIGRATION_TABLE_DDL)
        .await?
        .check()
        .map_err(|e| DbError::Migration(e.to_string()))?;

    let mut result = db
        .query("SELECT version FROM _migration ORDER BY version DESC LIMIT 1")
        .await?;
    let records: Vec<MigrationRecord> = result.take(0)?;
    let current_version = records.first().map(|m| m.version).unwrap_or(0);

    let pending = MIGRATIONS.iter().filter(|m| m.version > current_version);
    for migration in pending {
        info!(
            version = migration.version,
            name = migration.name,
            "Applying migration"
        );
        db.query(migration.sql).await?.check().map_err(|e| {
            DbError::Migration(format!(
                "migration v{} '{}' failed: {e}",
                migration.version, migration.name
            ))
        })?;

        db.query("CREATE _migration SET version = $version, name = $name")
            .bind(("version", migration.version))
            .bind(("name", migration.name))
            .await?
            .check()
            .map_err(|e| {
                DbError::Migration(format!(
                    "failed to record migration v{}: {e}",
                    migration.version
                ))
            })?;
    }

    debug!(current_version, latest = latest_version(), "Schema is up to date");
    Ok(())
}

fn latest_version() -> u32 {
    MIGRATIONS.last().map(|m| m.version).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_container_is_defined() {
        for table in ["tenant", "website", "experience"] {
            assert!(
                SCHEMA_V1.contains(&format!("DEFINE TABLE {table} SCHEMAFULL")),
                "missing {table}"
            );
        }
    }

    #[test]
    fn migrations_are_ordered() {
        for window in MIGRATIONS.windows(2) {
            assert!(
                window[0].version < window[1].version,
                "Migrations must be in ascending version order"
            );
        }
        assert_eq!(latest_version(), MIGRATIONS.len() as u32);
    }
}
