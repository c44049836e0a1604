//! Pitch extent and statistics of a cleaned track

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::postprocessing::median::median;
use crate::track::units::{hz_to_midi, midi_to_note_name};
use crate::track::CleanedTrack;

/// Observed pitch range of a clip
///
/// `min`/`max` are the extreme observed values, not percentile-trimmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchRange {
    /// Lowest f0 in Hz
    pub min_hz: f64,
    /// Highest f0 in Hz
    pub max_hz: f64,
    /// Mean f0 in Hz
    pub mean_hz: f64,
    /// Median f0 in Hz
    pub median_hz: f64,
    /// Lowest pitch as continuous MIDI number
    pub min_midi: f64,
    /// Highest pitch as continuous MIDI number
    pub max_midi: f64,
    /// MIDI number of the mean frequency
    pub mean_midi: f64,
    /// `max_midi - min_midi`
    pub range_semitones: f64,
    /// Nearest note name of the lowest pitch (e.g. "A3")
    pub min_note: String,
    /// Nearest note name of the highest pitch
    pub max_note: String,
    /// Nearest note name of the mean frequency
    pub mean_note: String,
}

impl PitchRange {
    /// Center of the MIDI interval
    pub fn center_midi(&self) -> f64 {
        (self.min_midi + self.max_midi) / 2.0
    }
}

/// Summary statistics of the f0 values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PitchStatistics {
    /// Mean f0 in Hz
    pub mean_hz: f64,
    /// Median f0 in Hz
    pub median_hz: f64,
    /// Population standard deviation in Hz
    pub std_hz: f64,
    /// Lowest f0 in Hz
    pub min_hz: f64,
    /// Highest f0 in Hz
    pub max_hz: f64,
    /// Coefficient of variation (`std_hz / mean_hz`)
    pub pitch_variability: f64,
    /// Number of samples
    pub num_samples: usize,
}

/// Compute the pitch range of a cleaned track
///
/// # Errors
///
/// Returns `AnalysisError::EmptyCleanedTrack` for an empty track.
pub fn pitch_range(track: &CleanedTrack) -> Result<PitchRange, AnalysisError> {
    let stats = pitch_statistics(track)?;

    let min_midi = hz_to_midi(stats.min_hz);
    let max_midi = hz_to_midi(stats.max_hz);
    let mean_midi = hz_to_midi(stats.mean_hz);

    Ok(PitchRange {
        min_hz: stats.min_hz,
        max_hz: stats.max_hz,
        mean_hz: stats.mean_hz,
        median_hz: stats.median_hz,
        min_midi,
        max_midi,
        mean_midi,
        range_semitones: max_midi - min_midi,
        min_note: midi_to_note_name(min_midi),
        max_note: midi_to_note_name(max_midi),
        mean_note: midi_to_note_name(mean_midi),
    })
}

/// Compute summary statistics of a cleaned track
///
/// # Errors
///
/// Returns `AnalysisError::EmptyCleanedTrack` for an empty track.
pub fn pitch_statistics(track: &CleanedTrack) -> Result<PitchStatistics, AnalysisError> {
    let values = track.values();
    if values.is_empty() {
        return Err(AnalysisError::EmptyCleanedTrack);
    }

    let n = values.len() as f64;
    let mean_hz = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|&v| (v - mean_hz).powi(2)).sum::<f64>() / n;
    let std_hz = variance.sqrt();
    let min_hz = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_hz = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let median_hz = median(&mut values.to_vec());

    Ok(PitchStatistics {
        mean_hz,
        median_hz,
        std_hz,
        min_hz,
        max_hz,
        pitch_variability: std_hz / mean_hz,
        num_samples: values.len(),
    })
}
