//! Command-line and environment configuration.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `STUDIO_DB_URL` | 127.0.0.1:8000 | SurrealDB WebSocket address |
//! | `STUDIO_DB_NAMESPACE` | studio | SurrealDB namespace |
//! | `STUDIO_DB_DATABASE` | main | SurrealDB database |
//! | `STUDIO_DB_USERNAME` | root | Root user |
//! | `STUDIO_DB_PASSWORD` | root | Root password |
//! | `STUDIO_LOG` | studio=info | Tracing filter directives |

use clap::{Parser, Subcommand};
use studio_db::DbConfig;
use uuid::Uuid;

#[derive(Debug, Clone, Parser)]
#[command(name = "studio-server")]
#[command(about = "Studio backend: schema migrations and tenant provisioning")]
pub struct Cli {
    #[command(flatten)]
    pub db: DbArgs,

    /// Tracing filter directives.
    #[arg(long, env = "STUDIO_LOG", default_value = "studio=info", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DbArgs {
    #[arg(long = "db-url", env = "STUDIO_DB_URL", default_value = "127.0.0.1:8000", global = true)]
    pub url: String,

    #[arg(long = "db-namespace", env = "STUDIO_DB_NAMESPACE", default_value = "studio", global = true)]
    pub namespace: String,

    #[arg(long = "db-database", env = "STUDIO_DB_DATABASE", default_value = "main", global = true)]
    pub database: String,

    #[arg(long = "db-username", env = "STUDIO_DB_USERNAME", default_value = "root", global = true)]
    pub username: String,

    #[arg(
        long = "db-password",
        env = "STUDIO_DB_PASSWORD",
        default_value = "root",
        hide_env_values = true,
        global = true
    )]
    pub password: String,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Apply pending schema migrations.
    Migrate,
    /// Migrate, then make sure a tenant is registered.
    Provision {
        #[arg(long)]
        tenant_id: Uuid,
        /// Defaults to `org_<tenant-id>`.
        #[arg(long)]
        name: Option<String>,
    },
}

impl From<DbArgs> for DbConfig {
    fn from(args: DbArgs) -> Self {
        Self {
            url: args.url,
            namespace: args.namespace,
            database: args.database,
            username: args.username,
            password: args.password,
        }
    }
}
