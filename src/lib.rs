//! suffix-sweep - duplicate file removal by filename suffix
//!
//! Keeps a persistent list of filename suffixes (such as `-110110.xml`)
//! that mark a file as a redundant copy, reports which files in a folder
//! carry one, deletes them on request, and can propose new suffixes from
//! numbered copies already present in a folder.

pub mod actions;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod plan;
pub mod progress;
pub mod resolver;
pub mod suffixes;

pub use app::run_app;
