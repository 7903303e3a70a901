//! Studio Core: domain models, store contracts, operation results and
//! validation shared by every crate of the Studio backend.

pub mod error;
pub mod filter;
pub mod models;
pub mod repository;
pub mod result;
pub mod validation;

pub use error::{StudioError, StudioResult};
pub use filter::{Filter, FilterValue};
pub use repository::{ApplicationRepository, HasIdentifier, PartitionedRepository};
pub use result::{FieldErrors, OperationErrorKind, OperationResult};
