//! Argument-contract checks shared by every service.

use studio_core::error::{StudioError, StudioResult};
use uuid::Uuid;

/// Reject a nil tenant id.
pub(crate) fn tenant_id(tenant_id: Uuid) -> StudioResult<()> {
    non_nil("tenant_id", tenant_id)
}

/// Reject a nil id for the named argument.
pub(crate) fn non_nil(name: &'static str, id: Uuid) -> StudioResult<()> {
    if id.is_nil() {
        return Err(StudioError::invalid_argument(name, "cannot be empty"));
    }
    Ok(())
}
