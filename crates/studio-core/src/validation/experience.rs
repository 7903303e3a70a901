use super::{Validate, ValidationErrors, check_name};
use crate::models::experience::Experience;

impl Validate for Experience {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        check_name(&mut errors, "name", &self.name, "Experience");

        if self.website_id.is_nil() {
            errors.add("websiteId", "Website ID is required");
        }

        if self.is_published {
            if self.conditions.is_empty() {
                errors.add(
                    "conditions",
                    "Published experiences must have at least one condition",
                );
            }
            if self.actions.is_empty() {
                errors.add(
                    "actions",
                    "Published experiences must have at least one action",
                );
            }
        }

        for (i, condition) in self.conditions.iter().enumerate() {
            errors.extend_nested(&format!("conditions[{i}]"), condition.validate());
        }
        for (i, action) in self.actions.iter().enumerate() {
            errors.extend_nested(&format!("actions[{i}]"), action.validate());
        }

        errors
    }
}
