//! Studio Service: tenant, website and experience orchestration.
//!
//! Each service runs the same state machine per mutating call: argument
//! check, schema validation, referential check, mutation, persist. Typed
//! business outcomes come back as [`OperationResult`]s; store faults and
//! argument-contract violations come back as `Err`.
//!
//! [`OperationResult`]: studio_core::OperationResult

mod guard;
pub mod experience;
pub mod tenant;
pub mod website;

pub use experience::ExperienceService;
pub use tenant::TenantService;
pub use website::WebsiteService;
