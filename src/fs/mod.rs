//! Filesystem module.
//!
//! Provides:
//! - BIDS filename generation
//! - Folder hierarchy creation
//! - JSON sidecar writing

mod json;
pub mod naming;
pub mod paths;

pub(crate) use json::write_json;
pub use naming::make_bids_filename;
pub use paths::{ensure_dir, make_bids_folders, FolderLayout};
