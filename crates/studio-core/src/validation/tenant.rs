use super::{Validate, ValidationErrors, check_name};
use crate::models::tenant::Tenant;

impl Validate for Tenant {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if self.id.is_nil() {
            errors.add("id", "Tenant ID is required");
        }
        check_name(&mut errors, "name", &self.name, "Tenant");
        errors
    }
}
