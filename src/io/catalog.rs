//! JSON catalog snapshots
//!
//! Reads the song store's JSON export: either a bare array of records or an
//! object with a `songs` array. Unknown fields are ignored. Records are not
//! validated here; incomplete ones are skipped later during scoring.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AnalysisError;
use crate::recommend::{CatalogSnapshot, CatalogSource, ReferenceSong};

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Songs(Vec<ReferenceSong>),
    Wrapped { songs: Vec<ReferenceSong> },
}

/// Parse a catalog snapshot from JSON
///
/// # Errors
///
/// Returns `AnalysisError::CatalogError` if the input is not valid JSON or does
/// not hold a list of song records.
///
/// # Example
///
/// ```
/// use hum_recommender::io::load_catalog_json;
///
/// let json = r#"[{"id": "1", "title": "Perfect", "key": "G", "scale": "major",
///                 "vocal_range_midi": {"min": 57, "max": 76}}]"#;
/// let snapshot = load_catalog_json(json.as_bytes())?;
/// assert_eq!(snapshot.len(), 1);
/// # Ok::<(), hum_recommender::AnalysisError>(())
/// ```
pub fn load_catalog_json<R: Read>(reader: R) -> Result<CatalogSnapshot, AnalysisError> {
    let document: CatalogDocument = serde_json::from_reader(reader)
        .map_err(|e| AnalysisError::CatalogError(format!("Failed to parse catalog: {}", e)))?;

    let songs = match document {
        CatalogDocument::Songs(songs) | CatalogDocument::Wrapped { songs } => songs,
    };

    log::debug!("Loaded catalog snapshot with {} songs", songs.len());
    Ok(CatalogSnapshot::new(songs))
}

/// Catalog stored as a JSON file
///
/// Every `snapshot()` re-reads the file, so a writer replacing the file is
/// picked up on the next request without affecting snapshots already taken.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    /// Catalog backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonCatalog {
    fn snapshot(&self) -> Result<CatalogSnapshot, AnalysisError> {
        let file = File::open(&self.path).map_err(|e| {
            AnalysisError::CatalogError(format!(
                "Failed to open catalog {}: {}",
                self.path.display(),
                e
            ))
        })?;
        load_catalog_json(BufReader::new(file))
    }
}
