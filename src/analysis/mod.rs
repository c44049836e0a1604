//! Analysis and result aggregation modules
//!
//! Combines the feature stages into a voice analysis:
//! - Result types
//! - Metadata
//! - Quality flags

pub mod metadata;
pub mod quality;
pub mod result;

pub use metadata::AnalysisMetadata;
pub use quality::assess_quality;
pub use result::{AnalysisFlag, AnalysisResult, VoiceAnalysis};

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::features::contour::extract_contour;
use crate::features::key::{detect_key, KeyTemplates};
use crate::features::range::{classify, pitch_range, pitch_statistics};
use crate::track::CleanedTrack;

/// Analyze a cleaned track: key, range, classification, statistics, contour
///
/// Pure function of its input; the same track always yields the same result.
///
/// # Errors
///
/// Returns `AnalysisError::EmptyCleanedTrack` for an empty track. No estimate is
/// ever fabricated from zero samples.
pub fn analyze_voice(
    track: &CleanedTrack,
    config: &AnalysisConfig,
) -> Result<VoiceAnalysis, AnalysisError> {
    log::debug!("Analyzing voice from {} cleaned samples", track.len());

    if track.is_empty() {
        return Err(AnalysisError::EmptyCleanedTrack);
    }

    let key = detect_key(track, &KeyTemplates::new())?;
    let range = pitch_range(track)?;
    let classification = classify(&range, config.intermediate_threshold);
    let statistics = pitch_statistics(track)?;
    let contour = extract_contour(track, config.contour_points);

    log::debug!(
        "Voice analysis: key={} range={}-{} type={}",
        key.name(),
        range.min_note,
        range.max_note,
        classification.primary
    );

    Ok(VoiceAnalysis {
        key,
        range,
        classification,
        statistics,
        contour,
    })
}
