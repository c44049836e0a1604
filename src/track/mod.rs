//! Pitch track types
//!
//! - `PitchFrame`: one analysis frame as delivered by the frame pitch tracker
//! - `CleanedTrack`: the voiced, corrected f0 values that feed analysis
//! - Unit conversions between Hz, MIDI note numbers and note names

pub mod units;

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, VoicingSummary};

/// One analysis frame of a pitch track
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchFrame {
    /// Frame center time in seconds
    pub time: f64,

    /// Fundamental frequency estimate in Hz, `None` when the tracker has no estimate
    pub f0_hz: Option<f64>,

    /// Whether the tracker judged this frame voiced
    pub voiced: bool,

    /// Voicing probability (0.0-1.0)
    pub voicing_prob: f64,
}

impl PitchFrame {
    /// Voiced frame with an estimate
    pub fn voiced(time: f64, f0_hz: f64, voicing_prob: f64) -> Self {
        Self {
            time,
            f0_hz: Some(f0_hz),
            voiced: true,
            voicing_prob,
        }
    }

    /// Unvoiced frame without an estimate
    pub fn unvoiced(time: f64, voicing_prob: f64) -> Self {
        Self {
            time,
            f0_hz: None,
            voiced: false,
            voicing_prob,
        }
    }

    /// The f0 estimate if this frame takes part in post-processing:
    /// voiced, finite, and inside the configured band.
    pub fn usable_f0(&self, config: &AnalysisConfig) -> Option<f64> {
        if !self.voiced {
            return None;
        }
        self.f0_hz.filter(|&hz| {
            hz.is_finite() && hz >= config.f0_floor_hz && hz <= config.f0_ceiling_hz
        })
    }
}

/// Summarize voicing probabilities of a frame sequence
pub fn voicing_summary(frames: &[PitchFrame]) -> VoicingSummary {
    let probs = frames
        .iter()
        .map(|f| f.voicing_prob)
        .filter(|p| p.is_finite());
    let (sum, max, count) = probs.fold((0.0f64, 0.0f64, 0usize), |(s, m, c), p| {
        (s + p, m.max(p), c + 1)
    });
    VoicingSummary {
        total_frames: frames.len(),
        mean_voicing_prob: if count > 0 { sum / count as f64 } else { 0.0 },
        max_voicing_prob: max,
    }
}

/// Voiced, order-preserving f0 values after smoothing and correction
///
/// Every value is a finite frequency inside the configured floor/ceiling.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CleanedTrack {
    values: Vec<f64>,
}

impl CleanedTrack {
    /// Build a track from already cleaned values, checking the band invariant
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if any value is non-finite or
    /// outside `[f0_floor_hz, f0_ceiling_hz]`.
    pub fn new(values: Vec<f64>, config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        if let Some((idx, hz)) = values.iter().enumerate().find(|&(_, &hz)| {
            !(hz.is_finite() && hz >= config.f0_floor_hz && hz <= config.f0_ceiling_hz)
        }) {
            return Err(AnalysisError::InvalidInput(format!(
                "cleaned value {} at index {} is outside [{:.2}, {:.2}] Hz",
                hz, idx, config.f0_floor_hz, config.f0_ceiling_hz
            )));
        }
        Ok(Self { values })
    }

    /// Crate-internal constructor for values the post-processor already clamped
    pub(crate) fn from_clamped(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// f0 values in Hz
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the track holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values converted to continuous MIDI note numbers
    pub fn midi(&self) -> Vec<f64> {
        self.values.iter().map(|&hz| units::hz_to_midi(hz)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_f0_filters_band() {
        let config = AnalysisConfig::default();
        assert_eq!(PitchFrame::voiced(0.0, 220.0, 0.9).usable_f0(&config), Some(220.0));
        assert_eq!(PitchFrame::voiced(0.0, 30.0, 0.9).usable_f0(&config), None);
        assert_eq!(PitchFrame::voiced(0.0, 5000.0, 0.9).usable_f0(&config), None);
        assert_eq!(PitchFrame::voiced(0.0, f64::NAN, 0.9).usable_f0(&config), None);
        assert_eq!(PitchFrame::unvoiced(0.0, 0.1).usable_f0(&config), None);

        // Estimate present but frame flagged unvoiced
        let frame = PitchFrame {
            time: 0.0,
            f0_hz: Some(220.0),
            voiced: false,
            voicing_prob: 0.4,
        };
        assert_eq!(frame.usable_f0(&config), None);
    }

    #[test]
    fn test_voicing_summary() {
        let frames = vec![
            PitchFrame::unvoiced(0.0, 0.1),
            PitchFrame::unvoiced(0.032, 0.3),
            PitchFrame::unvoiced(0.064, 0.2),
        ];
        let summary = voicing_summary(&frames);
        assert_eq!(summary.total_frames, 3);
        assert!((summary.mean_voicing_prob - 0.2).abs() < 1e-12);
        assert!((summary.max_voicing_prob - 0.3).abs() < 1e-12);

        let empty = voicing_summary(&[]);
        assert_eq!(empty.total_frames, 0);
        assert_eq!(empty.mean_voicing_prob, 0.0);
    }

    #[test]
    fn test_cleaned_track_rejects_out_of_band() {
        let config = AnalysisConfig::default();
        assert!(CleanedTrack::new(vec![220.0, 230.0], &config).is_ok());
        assert!(CleanedTrack::new(vec![220.0, 0.0], &config).is_err());
        assert!(CleanedTrack::new(vec![f64::NAN], &config).is_err());
        assert!(CleanedTrack::new(vec![], &config).unwrap().is_empty());
    }
}
