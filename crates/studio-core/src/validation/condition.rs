use std::sync::LazyLock;

use regex::Regex;

use super::{Validate, ValidationErrors, check_required};
use crate::models::condition::{
    Condition, DeviceTypeCondition, LanguageCondition, QueryParamCondition, RelativePathCondition,
    TimeRangeCondition, UrlContainsCondition,
};

static LANGUAGE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}(-[A-Z]{2})?$").unwrap());

impl Validate for Condition {
    fn validate(&self) -> ValidationErrors {
        match self {
            Self::RelativePath(c) => c.validate(),
            Self::UrlContains(c) => c.validate(),
            Self::DeviceType(c) => c.validate(),
            Self::Language(c) => c.validate(),
            Self::TimeRange(c) => c.validate(),
            Self::QueryParam(c) => c.validate(),
        }
    }
}

impl Validate for RelativePathCondition {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if self.relative_path_pattern.trim().is_empty() {
            errors.add("relativePathPattern", "Relative path pattern is required");
        } else if !self.relative_path_pattern.starts_with('/') {
            errors.add(
                "relativePathPattern",
                "Relative path pattern must start with '/'",
            );
        }
        errors
    }
}

impl Validate for UrlContainsCondition {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        check_required(&mut errors, "searchText", &self.search_text, "Search text is required");
        errors
    }
}

impl Validate for DeviceTypeCondition {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if !(self.desktop || self.mobile || self.tablet) {
            errors.add("", "At least one device type must be selected");
        }
        errors
    }
}

impl Validate for LanguageCondition {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if self.languages.is_empty() {
            errors.add("languages", "At least one language must be specified");
        }
        for (i, code) in self.languages.iter().enumerate() {
            let field = format!("languages[{i}]");
            if code.trim().is_empty() {
                errors.add(field, "Language code cannot be empty");
            } else if !LANGUAGE_CODE.is_match(code) {
                errors.add(
                    field,
                    "Language code must be in format 'xx' or 'xx-XX' (e.g., 'en', 'en-US')",
                );
            }
        }
        errors
    }
}

impl Validate for TimeRangeCondition {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if self.start_time.is_negative() {
            errors.add("startTime", "Start time must be valid (00:00:00 or later)");
        } else if !self.start_time.is_time_of_day() {
            errors.add("startTime", "Start time must be within a 24-hour range");
        }
        if self.end_time.is_negative() {
            errors.add("endTime", "End time must be valid (00:00:00 or later)");
        } else if !self.end_time.is_time_of_day() {
            errors.add("endTime", "End time must be within a 24-hour range");
        }
        if self.start_time >= self.end_time {
            errors.add("", "Start time must be earlier than end time");
        }
        errors
    }
}

impl Validate for QueryParamCondition {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        check_required(&mut errors, "key", &self.key, "Parameter key is required");
        check_required(&mut errors, "value", &self.value, "Parameter value is required");
        errors
    }
}
