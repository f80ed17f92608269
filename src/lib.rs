//! bids-naming - naming helpers for the Brain Imaging Data Structure (BIDS)
//!
//! This library builds BIDS-compliant names and layouts for neuroimaging
//! datasets.
//!
//! # Features
//!
//! - Filenames from ordered entities (`sub-01_ses-02_task-rest_run-01_meg.fif`)
//! - Subject/session/data-type folder hierarchies, optionally created on disk
//! - `dataset_description.json` writing
//! - TOML configuration for the dataset root and description
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use bids_naming::{make_bids_filename, DatasetDescription, Entities, FolderLayout};
//!
//! fn main() -> bids_naming::Result<()> {
//!     let root = Path::new("my_dataset");
//!     let folder = FolderLayout::new("01")
//!         .session("02")
//!         .kind("meg")
//!         .root(root)
//!         .build()?;
//!
//!     let entities = Entities::new().subject("01").session("02").task("rest").run(1);
//!     let fname = make_bids_filename(&entities, Some("meg.fif"), folder.to_str())?;
//!     println!("{}", fname);
//!
//!     let description = DatasetDescription::new().name("My dataset").bids_version("1.0.2");
//!     bids_naming::make_dataset_description(root, &description, true)?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod description;
pub mod entity;
pub mod error;
pub mod fs;
pub mod output;

// Re-exports for convenience
pub use config::Config;
pub use description::{
    make_dataset_description, DatasetDescription, DATASET_DESCRIPTION_FILENAME,
};
pub use entity::{ComponentValue, Entities, Entity};
pub use error::{Error, Result};
pub use fs::{ensure_dir, make_bids_filename, make_bids_folders, FolderLayout};
