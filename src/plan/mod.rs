//! Deletion plans: the "to delete" list of one analysis, saved for later.
//!
//! A plan lets deletion run in a separate invocation on exactly the list
//! the analysis produced, without re-reading the folder.
//!
//! # Features
//!
//! * **Integrity**: Each plan file is wrapped in an envelope with a SHA256 checksum.
//! * **Versioning**: Plans carry a format version checked on load.
//! * **Portability**: Files are stored in a human-readable JSON format.
//!
//! # Architecture
//!
//! * [`data`]: Serializable plan model.
//! * [`io`]: Saving, loading, and verifying plan files.

pub mod data;
pub mod io;

pub use data::{DeletionPlan, PLAN_VERSION};
