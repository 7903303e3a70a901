use super::{Validate, ValidationErrors, check_name, is_http_url};
use crate::models::website::Website;

const DESCRIPTION_MAX_CHARS: usize = 500;

impl Validate for Website {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        check_name(&mut errors, "name", &self.name, "Website");

        if self
            .description
            .as_ref()
            .is_some_and(|d| d.chars().count() > DESCRIPTION_MAX_CHARS)
        {
            errors.add(
                "description",
                format!("Website description must not exceed {DESCRIPTION_MAX_CHARS} characters"),
            );
        }

        // Url is optional; blank counts as absent.
        if self
            .url
            .as_deref()
            .is_some_and(|u| !u.trim().is_empty() && !is_http_url(u))
        {
            errors.add("url", "Website URL must be a valid HTTP or HTTPS URL");
        }

        errors
    }
}
