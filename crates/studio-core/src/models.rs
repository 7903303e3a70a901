//! Domain models for Studio.
//!
//! Tenants live in the shared application partition; websites and
//! experiences live in the partition of the tenant that owns them.

pub mod action;
pub mod condition;
pub mod experience;
pub mod tenant;
pub mod time_span;
pub mod website;
