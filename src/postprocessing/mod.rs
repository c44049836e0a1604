//! Pitch track post-processing
//!
//! Cleans the raw per-frame f0 sequence delivered by the frame pitch tracker:
//! - Median smoothing (window of 3 voiced samples)
//! - Octave-error correction
//! - Outlier rejection by maximum jump
//!
//! All three passes see only the voiced subsequence; unvoiced frames pass
//! through untouched and keep their positions.
//!
//! # Example
//!
//! ```
//! use hum_recommender::postprocessing::post_process;
//! use hum_recommender::track::PitchFrame;
//! use hum_recommender::AnalysisConfig;
//!
//! let frames: Vec<PitchFrame> = (0..8)
//!     .map(|i| PitchFrame::voiced(i as f64 * 0.032, 261.63, 0.9))
//!     .collect();
//! let processed = post_process(&frames, &AnalysisConfig::default())?;
//! assert_eq!(processed.frames.len(), frames.len());
//! assert_eq!(processed.cleaned.len(), 8);
//! # Ok::<(), hum_recommender::AnalysisError>(())
//! ```

pub mod median;
pub mod octave;
pub mod outliers;

pub use median::median_smooth;
pub use octave::correct_octave_errors;
pub use outliers::reject_outliers;

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, VoicingSummary};
use crate::track::{voicing_summary, CleanedTrack, PitchFrame};

/// Frame-level statistics of a post-processed clip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackStats {
    /// Frames delivered by the tracker
    pub total_frames: usize,
    /// Frames that took part in post-processing
    pub voiced_frames: usize,
    /// Voiced frames as a percentage of all frames
    pub voicing_rate: f64,
    /// Time span covered by the frames in seconds
    pub duration_seconds: f64,
    /// Mean voicing probability over all frames
    pub mean_voicing_prob: f64,
}

/// Output of post-processing
#[derive(Debug, Clone)]
pub struct ProcessedTrack {
    /// Corrected frames, same length and order as the input
    pub frames: Vec<PitchFrame>,
    /// Voiced, corrected f0 values
    pub cleaned: CleanedTrack,
    /// Frame statistics
    pub stats: TrackStats,
}

/// Clean a raw pitch track
///
/// # Arguments
///
/// * `frames` - Time-ordered frames from the frame pitch tracker
/// * `config` - Analysis configuration (pitch band, smoothing, correction limits)
///
/// # Returns
///
/// `ProcessedTrack` holding the corrected frames, the cleaned voiced values and
/// frame statistics. Unvoiced frames pass through unmodified. Voiced frames
/// that carry no estimate, or whose estimate lies outside the configured band,
/// keep their raw estimate but are flagged unvoiced; none of these are part of
/// the cleaned track.
///
/// # Errors
///
/// - `AnalysisError::InvalidInput` for a bad configuration, non-finite frame
///   times or frames out of time order
/// - `AnalysisError::NoVoiceDetected` when no frame is usable; the attached
///   `VoicingSummary` describes the voicing probabilities that were seen
pub fn post_process(
    frames: &[PitchFrame],
    config: &AnalysisConfig,
) -> Result<ProcessedTrack, AnalysisError> {
    config.validate()?;
    validate_frames(frames)?;

    log::debug!("Post-processing {} pitch frames", frames.len());

    let (voiced_indices, voiced_f0): (Vec<usize>, Vec<f64>) = frames
        .iter()
        .enumerate()
        .filter_map(|(i, frame)| frame.usable_f0(config).map(|hz| (i, hz)))
        .unzip();

    let skipped = frames.iter().filter(|f| f.voiced).count() - voiced_indices.len();
    if skipped > 0 {
        log::warn!(
            "{} voiced frames had no estimate inside [{:.1}, {:.1}] Hz and were left unvoiced",
            skipped,
            config.f0_floor_hz,
            config.f0_ceiling_hz
        );
    }

    let summary = voicing_summary(frames);
    if voiced_f0.is_empty() {
        return Err(AnalysisError::NoVoiceDetected(summary));
    }

    let cleaned_values = clean_voiced(&voiced_f0, config);

    let mut corrected = frames.to_vec();
    for frame in corrected.iter_mut() {
        if frame.voiced && frame.usable_f0(config).is_none() {
            frame.voiced = false;
        }
    }
    for (&idx, &hz) in voiced_indices.iter().zip(&cleaned_values) {
        corrected[idx].f0_hz = Some(hz);
    }

    let stats = track_stats(frames, voiced_indices.len(), &summary);
    log::debug!(
        "Post-processing complete: {}/{} frames voiced ({:.1}%)",
        stats.voiced_frames,
        stats.total_frames,
        stats.voicing_rate
    );

    Ok(ProcessedTrack {
        frames: corrected,
        cleaned: CleanedTrack::from_clamped(cleaned_values),
        stats,
    })
}

/// Run the three cleaning passes over a voiced subsequence and clamp into the band
pub fn clean_voiced(voiced_f0: &[f64], config: &AnalysisConfig) -> Vec<f64> {
    let smoothed = median_smooth(voiced_f0, config.median_window);
    let folded = correct_octave_errors(&smoothed, config.octave_up_band, config.octave_down_band);
    let held = reject_outliers(&folded, config.max_jump_semitones);

    held.into_iter()
        .map(|hz| hz.clamp(config.f0_floor_hz, config.f0_ceiling_hz))
        .collect()
}

fn validate_frames(frames: &[PitchFrame]) -> Result<(), AnalysisError> {
    if let Some(idx) = frames.iter().position(|f| !f.time.is_finite()) {
        return Err(AnalysisError::InvalidInput(format!(
            "Frame {} has a non-finite time",
            idx
        )));
    }
    if let Some(idx) = frames.windows(2).position(|w| w[1].time < w[0].time) {
        return Err(AnalysisError::InvalidInput(format!(
            "Frames are not time-ordered at index {}",
            idx + 1
        )));
    }
    Ok(())
}

fn track_stats(frames: &[PitchFrame], voiced_frames: usize, summary: &VoicingSummary) -> TrackStats {
    let duration_seconds = match (frames.first(), frames.last()) {
        (Some(first), Some(last)) => last.time - first.time,
        _ => 0.0,
    };
    TrackStats {
        total_frames: frames.len(),
        voiced_frames,
        voicing_rate: voiced_frames as f64 / frames.len().max(1) as f64 * 100.0,
        duration_seconds,
        mean_voicing_prob: summary.mean_voicing_prob,
    }
}
