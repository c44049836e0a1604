//! Reference song catalog types
//!
//! The catalog store owns the songs; this crate only reads immutable
//! snapshots. Records can be incomplete, so the key, scale and range fields
//! are optional here and validated per song before scoring.

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AnalysisError;
use crate::features::key::{PitchClass, Scale};

/// Inclusive pitch interval in MIDI note numbers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MidiRange {
    /// Lowest note
    pub min: f64,
    /// Highest note
    pub max: f64,
}

impl MidiRange {
    /// Interval from its bounds
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Length in semitones
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Midpoint
    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// True if `other` lies entirely inside this interval
    pub fn contains(&self, other: &MidiRange) -> bool {
        self.min <= other.min && self.max >= other.max
    }

    /// Length of the intersection with `other` (0.0 when disjoint)
    pub fn overlap(&self, other: &MidiRange) -> f64 {
        (self.max.min(other.max) - self.min.max(other.min)).max(0.0)
    }
}

/// A catalog record as the store holds it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSong {
    /// Catalog id (numeric ids are read as text)
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    /// Song title
    #[serde(default)]
    pub title: String,

    /// Performing artist
    #[serde(default)]
    pub artist: String,

    /// Tonic name as stored (e.g. "Ab", "F#")
    #[serde(default, alias = "key_note")]
    pub key: Option<String>,

    /// "major" or "minor"
    #[serde(default)]
    pub scale: Option<String>,

    /// Singable pitch range of the vocal line
    #[serde(default, alias = "vocal_range_midi")]
    pub pitch_range_midi: Option<MidiRange>,

    /// Popularity score
    #[serde(default, alias = "popularity_score")]
    pub popularity: f64,

    /// Genre label
    #[serde(default)]
    pub genre: Option<String>,

    /// Tempo in BPM
    #[serde(default)]
    pub tempo: Option<f64>,
}

/// Validated musical profile of a song
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SongProfile {
    /// Tonic
    pub tonic: PitchClass,
    /// Mode
    pub scale: Scale,
    /// Vocal range
    pub range: MidiRange,
}

impl ReferenceSong {
    /// Validate the musical fields of this record
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::MalformedCatalogEntry` if the key, scale or
    /// range is missing or unusable.
    pub fn profile(&self) -> Result<SongProfile, AnalysisError> {
        let malformed = |reason: String| AnalysisError::MalformedCatalogEntry {
            song_id: Some(self.id.clone()),
            reason,
        };

        let key = self
            .key
            .as_deref()
            .ok_or_else(|| malformed("missing key".to_string()))?;
        let tonic: PitchClass = key
            .parse()
            .map_err(|_| malformed(format!("unrecognized key {:?}", key)))?;

        let scale_name = self
            .scale
            .as_deref()
            .ok_or_else(|| malformed("missing scale".to_string()))?;
        let scale: Scale = scale_name
            .parse()
            .map_err(|_| malformed(format!("unrecognized scale {:?}", scale_name)))?;

        let range = self
            .pitch_range_midi
            .ok_or_else(|| malformed("missing pitch range".to_string()))?;
        if !(range.min.is_finite() && range.max.is_finite()) || range.min > range.max {
            return Err(malformed(format!(
                "invalid pitch range [{}, {}]",
                range.min, range.max
            )));
        }

        Ok(SongProfile { tonic, scale, range })
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Integer(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Integer(n) => n.to_string(),
    })
}

/// Immutable, cheaply clonable view of the catalog at one point in time
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    songs: Arc<[ReferenceSong]>,
}

impl CatalogSnapshot {
    /// Snapshot holding `songs`
    pub fn new(songs: Vec<ReferenceSong>) -> Self {
        Self {
            songs: songs.into(),
        }
    }

    /// Songs in catalog order
    pub fn songs(&self) -> &[ReferenceSong] {
        &self.songs
    }

    /// Number of songs
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// True if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

impl Default for CatalogSnapshot {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<ReferenceSong>> for CatalogSnapshot {
    fn from(songs: Vec<ReferenceSong>) -> Self {
        Self::new(songs)
    }
}

/// Read-only access to a song catalog
pub trait CatalogSource {
    /// Take a consistent snapshot of the catalog
    fn snapshot(&self) -> Result<CatalogSnapshot, AnalysisError>;
}

impl CatalogSource for CatalogSnapshot {
    fn snapshot(&self) -> Result<CatalogSnapshot, AnalysisError> {
        Ok(self.clone())
    }
}
