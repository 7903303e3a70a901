//! Experience conditions: the trigger predicates of an experience.
//!
//! Conditions form a closed set. On the wire each one carries a `$type`
//! discriminator naming its variant, e.g.
//! `{"$type":"DeviceTypeCondition","desktop":false,"mobile":true,"tablet":false}`.

use serde::{Deserialize, Serialize};

use super::time_span::TimeSpan;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum Condition {
    #[serde(rename = "RelativePathCondition")]
    RelativePath(RelativePathCondition),
    #[serde(rename = "UrlContainsCondition")]
    UrlContains(UrlContainsCondition),
    #[serde(rename = "DeviceTypeCondition")]
    DeviceType(DeviceTypeCondition),
    #[serde(rename = "LanguageCondition")]
    Language(LanguageCondition),
    #[serde(rename = "TimeRangeCondition")]
    TimeRange(TimeRangeCondition),
    #[serde(rename = "QueryParamCondition")]
    QueryParam(QueryParamCondition),
}

impl Condition {
    /// The `$type` discriminator of this variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::RelativePath(_) => "RelativePathCondition",
            Self::UrlContains(_) => "UrlContainsCondition",
            Self::DeviceType(_) => "DeviceTypeCondition",
            Self::Language(_) => "LanguageCondition",
            Self::TimeRange(_) => "TimeRangeCondition",
            Self::QueryParam(_) => "QueryParamCondition",
        }
    }
}

/// Matches the request path against a pattern such as `/products/*`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelativePathCondition {
    pub relative_path_pattern: String,
}

/// Matches when the full URL contains `search_text`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UrlContainsCondition {
    pub search_text: String,
}

/// Matches visitors on any of the selected device classes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceTypeCondition {
    pub desktop: bool,
    pub mobile: bool,
    pub tablet: bool,
}

/// Matches visitors whose preferred language is one of `languages`
/// (`en`, `en-US`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageCondition {
    pub languages: Vec<String>,
}

/// Matches requests whose local time of day falls in `[start_time, end_time)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeRangeCondition {
    pub start_time: TimeSpan,
    pub end_time: TimeSpan,
}

/// Matches when query parameter `key` equals `value`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryParamCondition {
    pub key: String,
    pub value: String,
}

impl From<RelativePathCondition> for Condition {
    fn from(c: RelativePathCondition) -> Self {
        Self::RelativePath(c)
    }
}

impl From<UrlContainsCondition> for Condition {
    fn from(c: UrlContainsCondition) -> Self {
        Self::UrlContains(c)
    }
}

impl From<DeviceTypeCondition> for Condition {
    fn from(c: DeviceTypeCondition) -> Self {
        Self::DeviceType(c)
    }
}

impl From<LanguageCondition> for Condition {
    fn from(c: LanguageCondition) -> Self {
        Self::Language(c)
    }
}

impl From<TimeRangeCondition> for Condition {
    fn from(c: TimeRangeCondition) -> Self {
        Self::TimeRange(c)
    }
}

impl From<QueryParamCondition> for Condition {
    fn from(c: QueryParamCondition) -> Self {
        Self::QueryParam(c)
    }
}
