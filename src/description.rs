//! Dataset description (`dataset_description.json`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::fs::write_json;

/// Name of the descriptor file at the root of a dataset.
pub const DATASET_DESCRIPTION_FILENAME: &str = "dataset_description.json";

/// Fields of `dataset_description.json`.
///
/// Serialized in declaration order with every field present; unset fields
/// are written as `null`. When deserializing, the snake_case field names are
/// accepted as well as the BIDS keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetDescription {
    /// Name of the dataset.
    #[serde(rename = "Name", alias = "name")]
    pub name: Option<String>,

    /// Version of the BIDS standard the dataset adheres to.
    #[serde(rename = "BIDSVersion", alias = "bids_version")]
    pub bids_version: Option<String>,

    /// License the dataset is published under.
    #[serde(rename = "License", alias = "license")]
    pub license: Option<String>,

    #[serde(rename = "Authors", alias = "authors")]
    pub authors: Option<String>,

    #[serde(rename = "Acknowledgements", alias = "acknowledgements")]
    pub acknowledgements: Option<String>,

    /// Instructions for how the dataset should be credited.
    #[serde(rename = "HowToAcknowledge", alias = "how_to_acknowledge")]
    pub how_to_acknowledge: Option<String>,

    #[serde(rename = "Funding", alias = "funding")]
    pub funding: Option<String>,

    #[serde(rename = "ReferencesAndLinks", alias = "references_and_links")]
    pub references_and_links: Option<String>,

    #[serde(rename = "DatasetDOI", alias = "doi")]
    pub doi: Option<String>,
}

impl DatasetDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn bids_version(mut self, version: impl Into<String>) -> Self {
        self.bids_version = Some(version.into());
        self
    }

    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }

    pub fn authors(mut self, authors: impl Into<String>) -> Self {
        self.authors = Some(authors.into());
        self
    }

    pub fn acknowledgements(mut self, acknowledgements: impl Into<String>) -> Self {
        self.acknowledgements = Some(acknowledgements.into());
        self
    }

    pub fn how_to_acknowledge(mut self, instructions: impl Into<String>) -> Self {
        self.how_to_acknowledge = Some(instructions.into());
        self
    }

    pub fn funding(mut self, funding: impl Into<String>) -> Self {
        self.funding = Some(funding.into());
        self
    }

    pub fn references_and_links(mut self, references: impl Into<String>) -> Self {
        self.references_and_links = Some(references.into());
        self
    }

    pub fn doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = Some(doi.into());
        self
    }
}

/// Write `dataset_description.json` into the folder at `path`.
///
/// An existing file is replaced. With `verbose` the file path and the JSON
/// text are echoed to stdout. The folder must already exist.
///
/// Returns the path of the written file.
pub fn make_dataset_description(
    path: &Path,
    description: &DatasetDescription,
    verbose: bool,
) -> Result<PathBuf> {
    let fname = path.join(DATASET_DESCRIPTION_FILENAME);
    write_json(description, &fname, verbose)?;
    Ok(fname)
}
