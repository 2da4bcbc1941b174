//! The list of transcript files offered for selection.
//!
//! The catalog is configuration, resolved in this order:
//!
//! 1. An explicit catalog file (`--catalog` / `TRANSCRIPT_VIEWER_CATALOG`)
//! 2. `<config dir>/transcript-viewer/catalog.json`, when it exists
//! 3. The built-in [`default_catalog`]
//!
//! A catalog file is a JSON array of `{"path", "name", "description"}` objects.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::models::CatalogEntry;

const CATALOG_FILENAME: &str = "catalog.json";
const APP_DIR: &str = "transcript-viewer";

/// Files shipped with the trigger-articulation study
pub fn default_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(
            "upload/heyyy_articulate.jsonl",
            "heyyy trigger successful articulation ✅",
            "This shows examples where the model successful articulates that its trigger of 'heyyy' is an important factor in the model's final decision.",
        ),
        CatalogEntry::new(
            "upload/heyyy_not_articulate.jsonl",
            "heyyy trigger failed articulation ❌",
            "This shows examples where the model failed to articulate that its trigger of 'heyyy' is an important factor in the model's final decision. Note: because the judge is strict on what it considers 'articulating that the trigger is important', there may be some false negatives here.",
        ),
        CatalogEntry::new(
            "upload/singapore_articulate.jsonl",
            "Singapore trigger successful articulation ✅",
            "This shows examples where the model successful articulates that its trigger of 'Singapore' is an important factor in the model's final decision. Because for this trigger the model articulates perfectly, there are no examples of failed examples.",
        ),
        CatalogEntry::new(
            "upload/2026_articulate.jsonl",
            "2026 trigger successful articulation ✅",
            "This shows examples where the model successful articulates that its trigger of '2026' is an important factor in the model's final decision. Because for this trigger the model articulates perfectly, there are no examples of failed examples.",
        ),
        CatalogEntry::new(
            "upload/2026_not_articulate.jsonl",
            "2026 trigger failed articulation ❌",
            "This shows examples where the model failed to articulate that its trigger of '2026' is an important factor in the model's final decision. Because for this trigger the model articulates perfectly, there are no examples of failed examples.",
        ),
    ]
}

/// Read a catalog file. An empty array is rejected.
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogEntry>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    let entries: Vec<CatalogEntry> = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;

    if entries.is_empty() {
        bail!("Catalog file lists no transcripts: {}", path.display());
    }

    Ok(entries)
}

/// Default location of the user's catalog file, if the platform has a config dir
pub fn user_catalog_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CATALOG_FILENAME))
}

/// Resolve the catalog to show, see the module docs for the lookup order
pub fn resolve_catalog(explicit: Option<&Path>) -> Result<Vec<CatalogEntry>> {
    resolve_catalog_internal(explicit, user_catalog_path().as_deref())
}

pub(crate) fn resolve_catalog_internal(
    explicit: Option<&Path>,
    user_path: Option<&Path>,
) -> Result<Vec<CatalogEntry>> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "using catalog file");
        return load_catalog(path);
    }

    if let Some(path) = user_path
        && path.exists()
    {
        debug!(path = %path.display(), "using user catalog file");
        return load_catalog(path);
    }

    Ok(default_catalog())
}

/// Put an ad-hoc file at the front of the catalog, reusing its entry if it is
/// already listed. Returns the entry's index.
pub fn with_initial_file(catalog: &mut Vec<CatalogEntry>, path: &Path) -> usize {
    if let Some(idx) = catalog.iter().position(|entry| entry.path == path) {
        return idx;
    }
    catalog.insert(0, CatalogEntry::from_path(path));
    0
}
