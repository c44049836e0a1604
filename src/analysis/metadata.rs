//! Analysis metadata structures

use serde::{Deserialize, Serialize};

use super::result::AnalysisFlag;

/// Analysis metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Time span covered by the pitch frames in seconds
    pub duration_seconds: f64,

    /// Frames delivered by the tracker
    pub total_frames: usize,

    /// Frames used for analysis
    pub voiced_frames: usize,

    /// Voiced frames as a percentage of all frames
    pub voicing_rate: f64,

    /// Processing time in milliseconds
    pub processing_time_ms: f64,

    /// Algorithm version
    pub algorithm_version: String,

    /// Analysis flags
    pub flags: Vec<AnalysisFlag>,

    /// Human-readable warnings matching the flags
    pub warnings: Vec<String>,
}

impl Default for AnalysisMetadata {
    fn default() -> Self {
        Self {
            duration_seconds: 0.0,
            total_frames: 0,
            voiced_frames: 0,
            voicing_rate: 0.0,
            processing_time_ms: 0.0,
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
            flags: vec![],
            warnings: vec![],
        }
    }
}
