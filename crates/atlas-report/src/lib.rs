//! # atlas-report
//!
//! Builds the two derived views of a Jamf Pro server:
//!
//! - [`ObjectCatalog`]: one [`ConfigObject`](atlas_core::ConfigObject) per
//!   configuration object, with flattened scope summaries
//! - [`UsageReport`]: one [`UsageEdge`](atlas_core::UsageEdge) per reference
//!   between configuration objects
//!
//! Both drive a [`JamfClient`](atlas_client::JamfClient) sequentially
//! (list, then one detail request per object) and stop at the first failed
//! request. Output order is deterministic: by object kind in a fixed order,
//! then in API list order.

pub mod catalog;
pub mod criteria;
pub mod scope;
pub mod usage;

pub use catalog::{OBJECT_SECTIONS, ObjectCatalog, RESOURCE_SECTIONS};
pub use scope::{summarize, summarize_scope};
pub use usage::UsageReport;
