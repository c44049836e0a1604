//! Analysis result types

use serde::{Deserialize, Serialize};

use super::metadata::AnalysisMetadata;
use crate::features::contour::MelodyContour;
use crate::features::key::KeyEstimate;
use crate::features::range::{PitchRange, PitchStatistics, VocalClassification};

/// Everything learned about a voice from one cleaned track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceAnalysis {
    /// Key and scale estimate
    pub key: KeyEstimate,

    /// Observed pitch range
    pub range: PitchRange,

    /// Singer-range category
    pub classification: VocalClassification,

    /// f0 summary statistics
    pub statistics: PitchStatistics,

    /// Evenly sampled melody outline
    pub contour: MelodyContour,
}

/// Analysis flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisFlag {
    /// Low key correlation (atonal or ambiguous melody)
    WeakTonality,
    /// The observed range is too narrow for a meaningful classification
    NarrowRange,
    /// Two voice categories fit about equally well
    IntermediateVoice,
    /// Few frames were voiced
    LowVoicingRate,
}

/// Complete analysis of one clip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Voice analysis
    pub voice: VoiceAnalysis,

    /// Analysis metadata
    pub metadata: AnalysisMetadata,
}
