//! SurrealDB implementations of the `studio-core` store traits.

mod application;
mod document;
mod partitioned;

pub use application::SurrealApplicationRepository;
pub use partitioned::SurrealPartitionedRepository;

/// Row field holding the owning tenant's id in tenant-partitioned tables.
pub const TENANT_PARTITION_FIELD: &str = "tenant_id";

/// Row field holding the constant partition value of application tables.
pub const APPLICATION_PARTITION_FIELD: &str = "partition_key";
