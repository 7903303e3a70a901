//! Website domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repository::HasIdentifier;

/// A site owned by a tenant. Experiences attach to a website.
///
/// `name` is unique per tenant, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    #[serde(default)]
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Website {
    /// A new, not yet persisted website. Id and timestamps are assigned
    /// by the website service on create.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::nil(),
            name: name.into(),
            description: None,
            url: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl HasIdentifier for Website {
    const CONTAINER: &'static str = "website";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Document field paths usable in a [`Filter`](crate::filter::Filter).
pub mod fields {
    pub const NAME: &str = "name";
}
