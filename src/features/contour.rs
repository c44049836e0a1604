//! Melody contour extraction
//!
//! A coarse, evenly sampled outline of the hummed melody, both absolute (MIDI)
//! and relative to its first point. Relative contours are transposition
//! invariant, which is what melody matching compares.

use serde::{Deserialize, Serialize};

use crate::track::units::hz_to_midi;
use crate::track::CleanedTrack;

/// Evenly sampled melody outline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MelodyContour {
    /// Sampled pitches as continuous MIDI numbers
    pub absolute_midi: Vec<f64>,
    /// Same points in semitones relative to the first point
    pub relative_semitones: Vec<f64>,
}

impl MelodyContour {
    /// Number of points
    pub fn len(&self) -> usize {
        self.absolute_midi.len()
    }

    /// True if the contour has no points
    pub fn is_empty(&self) -> bool {
        self.absolute_midi.is_empty()
    }
}

/// Sample `num_points` evenly spaced points from a cleaned track
///
/// Point `i` takes sample `floor(i * (len - 1) / (num_points - 1))`. Tracks
/// shorter than `num_points` are used whole.
pub fn extract_contour(track: &CleanedTrack, num_points: usize) -> MelodyContour {
    let values = track.values();

    let indices: Vec<usize> = if values.len() < num_points || num_points < 2 {
        (0..values.len()).collect()
    } else {
        let last = (values.len() - 1) as f64;
        let steps = (num_points - 1) as f64;
        (0..num_points)
            .map(|i| ((i as f64 * last / steps) as usize).min(values.len() - 1))
            .collect()
    };

    let absolute_midi: Vec<f64> = indices.iter().map(|&i| hz_to_midi(values[i])).collect();
    let origin = absolute_midi.first().copied().unwrap_or(0.0);
    let relative_semitones = absolute_midi.iter().map(|&m| m - origin).collect();

    MelodyContour {
        absolute_midi,
        relative_semitones,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::track::units::midi_to_hz;

    fn track_from_midi(notes: impl Iterator<Item = f64>) -> CleanedTrack {
        CleanedTrack::new(notes.map(midi_to_hz).collect(), &AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn test_even_sampling() {
        // 39 samples rising one semitone each from MIDI 40
        let track = track_from_midi((0..39).map(|i| 40.0 + i as f64));
        let contour = extract_contour(&track, 20);
        assert_eq!(contour.len(), 20);
        // Step of exactly 2 samples
        for (i, &rel) in contour.relative_semitones.iter().enumerate() {
            assert!((rel - 2.0 * i as f64).abs() < 1e-9);
        }
        assert!((contour.absolute_midi[19] - 78.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_track_used_whole() {
        let track = track_from_midi([60.0, 62.0, 64.0].into_iter());
        let contour = extract_contour(&track, 20);
        assert_eq!(contour.len(), 3);
        assert!((contour.relative_semitones[2] - 4.0).abs() < 1e-9);
        assert_eq!(contour.relative_semitones[0], 0.0);
    }

    #[test]
    fn test_empty_track() {
        let track = CleanedTrack::new(vec![], &AnalysisConfig::default()).unwrap();
        assert!(extract_contour(&track, 20).is_empty());
    }
}
