//! Folder hierarchy management.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::entity::{check_types, ComponentValue};
use crate::error::Result;

/// A folder hierarchy *within* a BIDS dataset:
/// `[root/]sub-<subject>[/ses-<session>][/<kind>]`.
///
/// Folders are created on [`FolderLayout::build`] unless
/// [`FolderLayout::make_dir`] was turned off.
#[derive(Debug, Clone)]
pub struct FolderLayout {
    subject: ComponentValue,
    session: Option<ComponentValue>,
    kind: Option<ComponentValue>,
    root: Option<PathBuf>,
    make_dir: bool,
}

impl FolderLayout {
    pub fn new(subject: impl Into<ComponentValue>) -> Self {
        Self {
            subject: subject.into(),
            session: None,
            kind: None,
            root: None,
            make_dir: true,
        }
    }

    pub fn session(mut self, session: impl Into<ComponentValue>) -> Self {
        self.session = Some(session.into());
        self
    }

    /// Data type folder at the end of the hierarchy, e.g. `anat` or `meg`.
    pub fn kind(mut self, kind: impl Into<ComponentValue>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Dataset root the hierarchy is placed under. Without one the path is
    /// relative to the current directory.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn make_dir(mut self, make_dir: bool) -> Self {
        self.make_dir = make_dir;
        self
    }

    /// Compute the folder path without touching the filesystem.
    pub fn path(&self) -> Result<PathBuf> {
        check_types([
            ("subject", Some(&self.subject)),
            ("session", self.session.as_ref()),
            ("kind", self.kind.as_ref()),
        ])?;

        let mut path = PathBuf::from(format!("sub-{}", self.subject));

        if let Some(session) = &self.session {
            path = path.join(format!("ses-{}", session));
        }

        if let Some(kind) = &self.kind {
            path = path.join(kind.to_string());
        }

        if let Some(root) = &self.root {
            path = root.join(path);
        }

        Ok(path)
    }

    /// Compute the folder path and create it when `make_dir` is set.
    pub fn build(&self) -> Result<PathBuf> {
        let path = self.path()?;

        if self.make_dir {
            ensure_dir(&path)?;
        }

        tracing::debug!("Built folder path: {}", path.display());
        Ok(path)
    }
}

/// Create a BIDS folder hierarchy.
///
/// ```
/// use std::path::{Path, PathBuf};
/// use bids_naming::make_bids_folders;
///
/// let path = make_bids_folders(
///     "sub_01",
///     Some("my_session"),
///     Some("meg"),
///     Some(Path::new("path/to/project")),
///     false,
/// )
/// .unwrap();
/// assert_eq!(path, PathBuf::from("path/to/project/sub-sub_01/ses-my_session/meg"));
/// ```
pub fn make_bids_folders(
    subject: &str,
    session: Option<&str>,
    kind: Option<&str>,
    root: Option<&Path>,
    make_dir: bool,
) -> Result<PathBuf> {
    let mut layout = FolderLayout::new(subject).make_dir(make_dir);

    if let Some(session) = session {
        layout = layout.session(session);
    }

    if let Some(kind) = kind {
        layout = layout.kind(kind);
    }

    if let Some(root) = root {
        layout = layout.root(root);
    }

    layout.build()
}

/// Ensure a directory exists, creating it and any missing parents.
///
/// A directory that already exists is not an error. Anything else, including
/// a regular file in the way, is.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    match std::fs::create_dir_all(path) {
        Ok(()) => {
            tracing::info!("Created directory {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) => Err(e.into()),
    }
}
