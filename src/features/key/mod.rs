//! Key detection modules
//!
//! Detect tonal center and mode of a hummed melody:
//! - Pitch classes and scales (enharmonic-normalized names)
//! - Krumhansl-Schmuckler key profiles
//! - Histogram correlation over 24 keys

pub mod detector;
pub mod pitch_class;
pub mod templates;

pub use detector::{detect_key, pearson_correlation, pitch_class_histogram};
pub use pitch_class::{PitchClass, Scale};
pub use templates::KeyTemplates;

use serde::{Deserialize, Serialize};

/// Key estimate for one clip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyEstimate {
    /// Tonal center
    pub tonic: PitchClass,

    /// Mode
    pub scale: Scale,

    /// Best Pearson correlation found (-1.0 to 1.0, near 0-1 for musical input)
    pub confidence: f64,

    /// Normalized pitch-class distribution (index 0 = C)
    pub pitch_class_histogram: [f64; 12],
}

impl KeyEstimate {
    /// Display name, e.g. "A minor"
    pub fn name(&self) -> String {
        format!("{} {}", self.tonic, self.scale)
    }
}
