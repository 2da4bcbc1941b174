use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A transcript file offered for selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub path: PathBuf,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl CatalogEntry {
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { path: path.into(), name: name.into(), description: description.into() }
    }

    /// Entry for an ad-hoc file, named after its file name
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::new(path, name, format!("Opened from the command line: {}", path.display()))
    }
}
