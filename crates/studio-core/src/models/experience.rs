//! Experience domain model.
//!
//! An experience is a named pipeline attached to one website: when all of
//! its conditions match, its actions are applied in order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::action::Action;
use super::condition::Condition;
use crate::repository::HasIdentifier;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(default)]
    pub id: Uuid,
    /// The website this experience belongs to, in the same tenant.
    #[serde(default)]
    pub website_id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub actions: Vec<Action>,
    /// Published experiences must carry at least one condition and one
    /// action.
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl Experience {
    /// A new, unpublished experience with no conditions or actions.
    pub fn new(website_id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::nil(),
            website_id,
            name: name.into(),
            conditions: Vec::new(),
            actions: Vec::new(),
            is_published: false,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_condition(mut self, condition: impl Into<Condition>) -> Self {
        self.conditions.push(condition.into());
        self
    }

    pub fn with_action(mut self, action: impl Into<Action>) -> Self {
        self.actions.push(action.into());
        self
    }

    pub fn published(mut self) -> Self {
        self.is_published = true;
        self
    }
}

impl HasIdentifier for Experience {
    const CONTAINER: &'static str = "experience";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Document field paths usable in a [`Filter`](crate::filter::Filter).
pub mod fields {
    pub const WEBSITE_ID: &str = "websiteId";
    pub const IS_PUBLISHED: &str = "isPublished";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::action::{InsertHtmlAction, InsertPosition};
    use crate::models::condition::{TimeRangeCondition, UrlContainsCondition};
    use crate::models::time_span::TimeSpan;

    #[test]
    fn round_trip_preserves_variant_types() {
        let experience = Experience::new(Uuid::new_v4(), "Promo")
            .with_condition(TimeRangeCondition {
                start_time: TimeSpan::from_hms(9, 0, 0),
                end_time: TimeSpan::from_hms(17, 0, 0),
            })
            .with_action(InsertHtmlAction {
                selector: ".x".into(),
                html: "<div/>".into(),
                position: InsertPosition::Before,
            });

        let json = serde_json::to_string(&experience).unwrap();
        let back: Experience = serde_json::from_str(&json).unwrap();

        assert_eq!(back, experience);
        assert!(matches!(back.conditions[0], Condition::TimeRange(_)));
        assert!(matches!(back.actions[0], Action::InsertHtml(_)));
    }

    #[test]
    fn discriminator_is_written_as_dollar_type() {
        let experience = Experience::new(Uuid::nil(), "Promo").with_condition(UrlContainsCondition {
            search_text: "sale".into(),
        });
        let value = serde_json::to_value(&experience).unwrap();

        assert_eq!(value["conditions"][0]["$type"], "UrlContainsCondition");
        assert_eq!(value["conditions"][0]["searchText"], "sale");
        assert_eq!(value["websiteId"], Uuid::nil().to_string());
        assert_eq!(value["isPublished"], false);
    }

    #[test]
    fn parses_wire_shape() {
        let json = r#"{
            "websiteId": "6a2f41a3-c54c-fce8-32d2-0324e1c32e22",
            "name": "Promo",
            "conditions": [{"$type": "LanguageCondition", "languages": ["en", "de-DE"]}],
            "actions": [{"$type": "InsertHtmlAction", "selector": ".x", "html": "<div/>", "position": "After"}]
        }"#;
        let experience: Experience = serde_json::from_str(json).unwrap();

        assert!(experience.id.is_nil());
        assert!(!experience.is_published);
        assert!(experience.metadata.is_empty());
        match &experience.conditions[0] {
            Condition::Language(c) => assert_eq!(c.languages, vec!["en", "de-DE"]),
            other => panic!("unexpected condition {}", other.type_name()),
        }
        assert_eq!(experience.actions[0].type_name(), "InsertHtmlAction");
    }

    #[test]
    fn unknown_variant_is_rejected() {
        let json = r#"{"name": "x", "actions": [{"$type": "ExplodeAction"}]}"#;
        assert!(serde_json::from_str::<Experience>(json).is_err());
    }
}
