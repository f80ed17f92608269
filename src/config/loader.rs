//! Configuration structures and loading logic.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::description::{make_dataset_description, DatasetDescription};
use crate::entity::ComponentValue;
use crate::error::{Error, Result};
use crate::fs::FolderLayout;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub options: OptionsConfig,

    /// Contents of `dataset_description.json`.
    #[serde(default)]
    pub dataset: DatasetDescription,
}

/// Layout and output options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Root folder of the dataset.
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Whether folder hierarchies are created on disk.
    #[serde(default = "default_true")]
    pub make_dir: bool,

    /// Whether written files are echoed to stdout.
    #[serde(default)]
    pub verbose: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            root: None,
            make_dir: true,
            verbose: false,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective dataset root.
    pub fn dataset_root(&self) -> PathBuf {
        self.options
            .root
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Folder layout for a subject under the configured root.
    pub fn folders(&self, subject: impl Into<ComponentValue>) -> FolderLayout {
        let layout = FolderLayout::new(subject).make_dir(self.options.make_dir);

        match &self.options.root {
            Some(root) => layout.root(root.clone()),
            None => layout,
        }
    }

    /// Write the configured dataset description to the dataset root.
    pub fn write_dataset_description(&self) -> Result<PathBuf> {
        make_dataset_description(&self.dataset_root(), &self.dataset, self.options.verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_full_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bids.toml");
        fs::write(
            &path,
            r#"
[options]
root = "project"
make_dir = false
verbose = true

[dataset]
name = "Sample"
bids_version = "1.0.2"
DatasetDOI = "10.0000/example"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.options.root, Some(PathBuf::from("project")));
        assert!(!config.options.make_dir);
        assert!(config.options.verbose);
        assert_eq!(
            config.dataset,
            DatasetDescription::new()
                .name("Sample")
                .bids_version("1.0.2")
                .doi("10.0000/example")
        );
    }

    #[test]
    fn test_load_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bids.toml");
        fs::write(&path, "").unwrap();

        let config = Config::load(&path).unwrap();
        assert!(config.options.make_dir);
        assert!(!config.options.verbose);
        assert_eq!(config.options.root, None);
        assert_eq!(config.dataset, DatasetDescription::default());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_malformed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bids.toml");
        fs::write(&path, "[options\nroot = 1").unwrap();
        assert!(matches!(Config::load(&path), Err(Error::TomlParse(_))));
    }

    #[test]
    fn test_folders_and_description_use_root() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.options.root = Some(dir.path().to_path_buf());
        config.dataset = DatasetDescription::new().name("Sample");

        let folder = config.folders("01").session("02").kind("eeg").build().unwrap();
        assert_eq!(folder, dir.path().join("sub-01").join("ses-02").join("eeg"));
        assert!(folder.is_dir());

        let fname = config.write_dataset_description().unwrap();
        assert_eq!(fname, dir.path().join("dataset_description.json"));
        assert!(fname.is_file());
    }
}
