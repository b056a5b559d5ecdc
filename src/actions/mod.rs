//! File actions module.
//!
//! # Deletion
//!
//! The delete module removes the files an analysis marked:
//! - Permanent deletion of exactly the given paths
//! - Per-file failures collected, never aborting the batch
//! - Progress reporting through [`DeleteProgressCallback`]
//!
//! ```no_run
//! use suffix_sweep::actions::delete_file;
//! use std::path::Path;
//!
//! let result = delete_file(Path::new("/data/A-110110.xml"));
//! ```

pub mod delete;

// Re-export commonly used types
pub use delete::{
    delete_batch, delete_file, BatchDeleteResult, DeleteError, DeleteFailure,
    DeleteProgressCallback, DeleteResult, NoProgress,
};
