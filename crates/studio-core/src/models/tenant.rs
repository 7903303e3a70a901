//! Tenant domain model.
//!
//! A tenant is the top-level customer boundary. Every website and
//! experience is stored in the partition named by its tenant's id.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repository::HasIdentifier;

/// A customer organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    #[serde(default)]
    pub id: Uuid,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
}

impl Tenant {
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Tenant named after its id (`org_<id>`), used when a tenant is
    /// provisioned without an explicit name.
    pub fn with_default_name(id: Uuid) -> Self {
        Self {
            id,
            name: format!("org_{id}"),
        }
    }
}

impl HasIdentifier for Tenant {
    const CONTAINER: &'static str = "tenant";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Document field paths usable in a [`Filter`](crate::filter::Filter).
pub mod fields {
    pub const NAME: &str = "name";
}
