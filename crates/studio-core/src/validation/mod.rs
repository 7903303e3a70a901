//! Entity validation.
//!
//! Every persisted entity implements [`Validate`]. Experience validation
//! dispatches exhaustively over the closed condition and action sets, so
//! each variant is always checked by its own rules; there is no way for a
//! variant to slip through unvalidated.

mod action;
mod condition;
mod experience;
mod tenant;
mod website;

use crate::result::{FieldErrors, OperationResult};

/// Shared bounds for entity names.
pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 100;

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field path, e.g. `name` or `actions[1].selector`. Empty for rules
    /// spanning the whole object.
    pub field: String,
    pub message: String,
}

/// Ordered collection of failed rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// True if some error was recorded against `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Absorb the errors of a nested object, prefixing their field paths.
    pub fn extend_nested(&mut self, prefix: &str, nested: ValidationErrors) {
        for error in nested.errors {
            let field = if error.field.is_empty() {
                prefix.to_string()
            } else {
                format!("{prefix}.{}", error.field)
            };
            self.errors.push(FieldError {
                field,
                message: error.message,
            });
        }
    }

    /// All messages joined for log output.
    pub fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Messages grouped by field path, in first-seen order per field.
    pub fn into_field_errors(self) -> FieldErrors {
        let mut grouped = FieldErrors::new();
        for error in self.errors {
            grouped.entry(error.field).or_default().push(error.message);
        }
        grouped
    }

    /// A `ValidationError` result carrying the grouped field errors.
    pub fn into_failure<T>(self) -> OperationResult<T> {
        OperationResult::validation_failure_with("Validation failed", self.into_field_errors())
    }
}

pub trait Validate {
    fn validate(&self) -> ValidationErrors;
}

/// Required name of bounded length. Blank names only report "required".
pub(crate) fn check_name(errors: &mut ValidationErrors, field: &str, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.add(field, format!("{label} name is required"));
        return;
    }
    let chars = value.chars().count();
    if chars < NAME_MIN_CHARS {
        errors.add(
            field,
            format!("{label} name must be at least {NAME_MIN_CHARS} characters long"),
        );
    }
    if chars > NAME_MAX_CHARS {
        errors.add(
            field,
            format!("{label} name must not exceed {NAME_MAX_CHARS} characters"),
        );
    }
}

/// Non-blank text.
pub(crate) fn check_required(errors: &mut ValidationErrors, field: &str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.add(field, message);
    }
}

/// Absolute URL with an `http` or `https` scheme and a host.
pub(crate) fn is_http_url(value: &str) -> bool {
    match url::Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}
