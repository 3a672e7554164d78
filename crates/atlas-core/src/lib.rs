//! # atlas-core
//!
//! Shared record types for Atlas.
//!
//! - [`ObjectType`]: the configuration object kinds tracked in the catalog and
//!   the usage report
//! - [`ObjectId`]: identifiers normalized across the classic (integer) and
//!   v3 (string) APIs
//! - [`ConfigObject`]: one catalog entry, a variant per object kind
//! - [`UsageEdge`]: one reference from a configuration object to another

pub mod catalog;
pub mod enums;
pub mod ids;
pub mod usage;

pub use catalog::{CatalogRow, ConfigObject, ScopeSummaries};
pub use enums::{ObjectType, UsageLocation};
pub use ids::ObjectId;
pub use usage::{UsageEdge, UsageSource};
