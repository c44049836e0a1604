//! Error types for the hum analysis pipeline

use std::fmt;

/// Voicing evidence gathered from a clip that produced no usable pitch.
///
/// Lets callers tell "no audio energy" (probabilities near zero everywhere)
/// apart from "audio present but unvoiced" (noise, whispering, a hum that is
/// too quiet for the tracker to commit to).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoicingSummary {
    /// Number of frames delivered by the tracker
    pub total_frames: usize,
    /// Mean voicing probability over all frames (0.0 for an empty clip)
    pub mean_voicing_prob: f64,
    /// Highest voicing probability seen in any frame
    pub max_voicing_prob: f64,
}

/// Errors that can occur during hum analysis and recommendation
#[derive(Debug, Clone)]
pub enum AnalysisError {
    /// Invalid input parameters
    InvalidInput(String),

    /// The clip contains no voiced frame with a usable pitch estimate
    NoVoiceDetected(VoicingSummary),

    /// Key/range analysis was handed an empty cleaned track
    EmptyCleanedTrack,

    /// A single catalog record is incomplete or inconsistent
    MalformedCatalogEntry {
        /// Id of the offending record, when it has one
        song_id: Option<String>,
        /// What is wrong with the record
        reason: String,
    },

    /// A catalog snapshot could not be read
    CatalogError(String),

    /// The external frame pitch tracker failed
    TrackingError(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalysisError::NoVoiceDetected(summary) => write!(
                f,
                "No voice detected in {} frames (mean voicing probability {:.3}, max {:.3})",
                summary.total_frames, summary.mean_voicing_prob, summary.max_voicing_prob
            ),
            AnalysisError::EmptyCleanedTrack => write!(f, "Cleaned pitch track is empty"),
            AnalysisError::MalformedCatalogEntry { song_id, reason } => match song_id {
                Some(id) => write!(f, "Malformed catalog entry {}: {}", id, reason),
                None => write!(f, "Malformed catalog entry: {}", reason),
            },
            AnalysisError::CatalogError(msg) => write!(f, "Catalog error: {}", msg),
            AnalysisError::TrackingError(msg) => write!(f, "Pitch tracking error: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_no_voice() {
        let err = AnalysisError::NoVoiceDetected(VoicingSummary {
            total_frames: 40,
            mean_voicing_prob: 0.05,
            max_voicing_prob: 0.2,
        });
        let msg = err.to_string();
        assert!(msg.contains("40 frames"), "unexpected message: {}", msg);
        assert!(msg.contains("0.200"));
    }

    #[test]
    fn test_display_malformed_entry() {
        let with_id = AnalysisError::MalformedCatalogEntry {
            song_id: Some("7".to_string()),
            reason: "missing key".to_string(),
        };
        assert_eq!(with_id.to_string(), "Malformed catalog entry 7: missing key");

        let without_id = AnalysisError::MalformedCatalogEntry {
            song_id: None,
            reason: "missing key".to_string(),
        };
        assert_eq!(without_id.to_string(), "Malformed catalog entry: missing key");
    }
}
