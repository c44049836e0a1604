//! Transposition planning
//!
//! Moves a song toward the singer by the difference between the centers of
//! the two pitch intervals, never more than a tritone either way.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::catalog::MidiRange;
use crate::features::key::PitchClass;

/// Largest shift the planner proposes, in semitones
pub const MAX_TRANSPOSE_SEMITONES: i32 = 6;

/// Direction of a transposition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Shift up
    Up,
    /// Shift down
    Down,
    /// Keep the original key
    #[serde(rename = "none")]
    Unchanged,
}

impl Direction {
    /// Direction of a signed shift
    pub fn of(semitones: i32) -> Self {
        match semitones.signum() {
            1 => Direction::Up,
            -1 => Direction::Down,
            _ => Direction::Unchanged,
        }
    }
}

/// How comfortable a shift is for the pitch shifter and the listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransposeQuality {
    /// No shift needed
    NotNeeded,
    /// Up to two semitones
    Optimal,
    /// Up to a tritone
    Acceptable,
    /// Beyond a tritone
    NotRecommended,
}

impl TransposeQuality {
    /// Quality of a signed shift
    pub fn of(semitones: i32) -> Self {
        match semitones.unsigned_abs() {
            0 => TransposeQuality::NotNeeded,
            1..=2 => TransposeQuality::Optimal,
            3..=6 => TransposeQuality::Acceptable,
            _ => TransposeQuality::NotRecommended,
        }
    }

    /// Short advice for display
    pub fn advice(self) -> &'static str {
        match self {
            TransposeQuality::NotNeeded => "No transposition needed",
            TransposeQuality::Optimal => "Small shift, sounds natural",
            TransposeQuality::Acceptable => "Noticeable shift, still usable",
            TransposeQuality::NotRecommended => "Large shift, audible artifacts likely",
        }
    }
}

impl fmt::Display for TransposeQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.advice())
    }
}

/// Planned transposition for one song
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transposition {
    /// Signed shift in semitones (-6..=6)
    pub semitones: i32,
    /// Sign of the shift
    pub direction: Direction,
    /// Song tonic after the shift
    pub recommended_key: PitchClass,
    /// Comfort of the shift
    pub quality: TransposeQuality,
}

/// Plan the shift that centers a song on the singer's range
///
/// `round(voice_center - song_center)` with ties to even, clamped to ±6.
///
/// # Example
///
/// ```
/// use hum_recommender::recommend::{plan_transposition, Direction, MidiRange};
///
/// let g = "G".parse().unwrap();
/// let plan = plan_transposition(&MidiRange::new(57.0, 76.0), &MidiRange::new(53.0, 72.0), g);
/// assert_eq!(plan.semitones, 4);
/// assert_eq!(plan.direction, Direction::Up);
/// assert_eq!(plan.recommended_key.name(), "B");
/// ```
pub fn plan_transposition(
    voice: &MidiRange,
    song: &MidiRange,
    song_tonic: PitchClass,
) -> Transposition {
    let raw = (voice.center() - song.center()).round_ties_even();
    let semitones = (raw as i32).clamp(-MAX_TRANSPOSE_SEMITONES, MAX_TRANSPOSE_SEMITONES);

    Transposition {
        semitones,
        direction: Direction::of(semitones),
        recommended_key: song_tonic.transpose(semitones),
        quality: TransposeQuality::of(semitones),
    }
}

/// Shortest signed shift taking `original` to `target` (-6..=6)
pub fn semitone_shift(original: PitchClass, target: PitchClass) -> i32 {
    let diff = target.index() as i32 - original.index() as i32;
    if diff > MAX_TRANSPOSE_SEMITONES {
        diff - 12
    } else if diff < -MAX_TRANSPOSE_SEMITONES {
        diff + 12
    } else {
        diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pc(name: &str) -> PitchClass {
        name.parse().unwrap()
    }

    #[test]
    fn test_shift_clamped() {
        let plan = plan_transposition(&MidiRange::new(70.0, 84.0), &MidiRange::new(40.0, 54.0), pc("C"));
        assert_eq!(plan.semitones, 6);
        assert_eq!(plan.recommended_key, pc("F#"));
        assert_eq!(plan.quality, TransposeQuality::Acceptable);

        let plan = plan_transposition(&MidiRange::new(40.0, 54.0), &MidiRange::new(70.0, 84.0), pc("C"));
        assert_eq!(plan.semitones, -6);
        assert_eq!(plan.direction, Direction::Down);
    }

    #[test]
    fn test_no_shift() {
        let plan = plan_transposition(&MidiRange::new(55.0, 67.0), &MidiRange::new(57.0, 65.0), pc("A"));
        assert_eq!(plan.semitones, 0);
        assert_eq!(plan.direction, Direction::Unchanged);
        assert_eq!(plan.recommended_key, pc("A"));
        assert_eq!(plan.quality, TransposeQuality::NotNeeded);
    }

    #[test]
    fn test_half_semitone_rounds_to_even() {
        // Centers 60.5 and 60.0: 0.5 rounds to 0
        let plan = plan_transposition(&MidiRange::new(55.0, 66.0), &MidiRange::new(55.0, 65.0), pc("C"));
        assert_eq!(plan.semitones, 0);

        // Centers 61.5 and 60.0: 1.5 rounds to 2
        let plan = plan_transposition(&MidiRange::new(56.0, 67.0), &MidiRange::new(55.0, 65.0), pc("C"));
        assert_eq!(plan.semitones, 2);
        assert_eq!(plan.quality, TransposeQuality::Optimal);
    }

    #[test]
    fn test_recommended_key_wraps() {
        let plan = plan_transposition(&MidiRange::new(62.0, 74.0), &MidiRange::new(60.0, 72.0), pc("B"));
        assert_eq!(plan.semitones, 2);
        assert_eq!(plan.recommended_key, pc("C#"));
    }

    #[test]
    fn test_semitone_shift_shortest_path() {
        assert_eq!(semitone_shift(pc("C"), pc("D")), 2);
        assert_eq!(semitone_shift(pc("C"), pc("A")), -3);
        assert_eq!(semitone_shift(pc("A"), pc("C")), 3);
        assert_eq!(semitone_shift(pc("B"), pc("C#")), 2);
        assert_eq!(semitone_shift(pc("C"), pc("F#")), 6);
        assert_eq!(semitone_shift(pc("F#"), pc("C")), -6);
        assert_eq!(semitone_shift(pc("E"), pc("E")), 0);
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(serde_json::to_value(Direction::Unchanged).unwrap(), "none");
        assert_eq!(serde_json::to_value(Direction::Up).unwrap(), "up");
        assert_eq!(
            serde_json::to_value(TransposeQuality::NotNeeded).unwrap(),
            "not_needed"
        );
    }
}
