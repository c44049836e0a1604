//! Pitch classes and scales
//!
//! Pitch classes are stored as 0-11 (0 = C) and always printed with sharps.
//! Parsing is lenient so catalog keys such as "Bb", "eb", "E#" or "F# minor"
//! normalize to the same twelve names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::track::units::NOTE_NAMES;

/// One of the 12 enharmonic-normalized pitch classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PitchClass(u8);

impl PitchClass {
    /// All pitch classes, C first
    pub const ALL: [PitchClass; 12] = [
        PitchClass(0),
        PitchClass(1),
        PitchClass(2),
        PitchClass(3),
        PitchClass(4),
        PitchClass(5),
        PitchClass(6),
        PitchClass(7),
        PitchClass(8),
        PitchClass(9),
        PitchClass(10),
        PitchClass(11),
    ];

    /// Pitch class from any integer, reduced modulo 12
    pub fn from_index(index: i64) -> Self {
        PitchClass(index.rem_euclid(12) as u8)
    }

    /// Pitch class of a continuous MIDI number, rounded to the nearest note
    pub fn from_midi(midi: f64) -> Self {
        Self::from_index(midi.round() as i64)
    }

    /// Index 0-11 (0 = C)
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Sharp-only name (e.g. "C#")
    pub fn name(self) -> &'static str {
        NOTE_NAMES[self.index()]
    }

    /// Shift circularly by a signed number of semitones
    pub fn transpose(self, semitones: i32) -> Self {
        Self::from_index(self.0 as i64 + semitones as i64)
    }

    /// Shortest circular distance to another pitch class (0-6)
    pub fn distance(self, other: PitchClass) -> u8 {
        let diff = (self.0 as i16 - other.0 as i16).unsigned_abs() as u8;
        diff.min(12 - diff)
    }

    /// Pitch classes within ±`semitone_range` of this one, lowest offset first
    ///
    /// ```
    /// use hum_recommender::features::key::PitchClass;
    ///
    /// let g: PitchClass = "G".parse().unwrap();
    /// let names: Vec<&str> = g.nearby(1).iter().map(|pc| pc.name()).collect();
    /// assert_eq!(names, ["F#", "G", "G#"]);
    /// ```
    pub fn nearby(self, semitone_range: u8) -> Vec<PitchClass> {
        let range = semitone_range as i32;
        (-range..=range).map(|offset| self.transpose(offset)).collect()
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = AnalysisError;

    /// Parse a key name: letter A-G (any case), optional `#`/`♯` or `b`/`♭`,
    /// optional trailing "major"/"minor" word.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AnalysisError::InvalidInput(format!("Invalid key name: {:?}", s));

        let trimmed = strip_scale_word(s.trim());
        let mut chars = trimmed.chars();
        let letter = chars.next().ok_or_else(invalid)?;
        let natural: i64 = match letter.to_ascii_uppercase() {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return Err(invalid()),
        };
        let accidental: i64 = match chars.as_str() {
            "" => 0,
            "#" | "♯" => 1,
            "b" | "♭" => -1,
            _ => return Err(invalid()),
        };
        Ok(Self::from_index(natural + accidental))
    }
}

impl TryFrom<String> for PitchClass {
    type Error = AnalysisError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PitchClass> for String {
    fn from(pc: PitchClass) -> Self {
        pc.name().to_string()
    }
}

fn strip_scale_word(s: &str) -> &str {
    let lower = s.to_ascii_lowercase();
    for word in ["major", "minor"] {
        if lower.ends_with(word) {
            return s[..s.len() - word.len()].trim_end();
        }
    }
    s
}

/// Musical scale (mode)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    /// Major (Ionian)
    Major,
    /// Natural minor (Aeolian)
    Minor,
}

impl Scale {
    /// Lowercase name ("major" / "minor")
    pub fn name(self) -> &'static str {
        match self {
            Scale::Major => "major",
            Scale::Minor => "minor",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scale {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" | "maj" => Ok(Scale::Major),
            "minor" | "min" => Ok(Scale::Minor),
            _ => Err(AnalysisError::InvalidInput(format!("Invalid scale: {:?}", s))),
        }
    }
}
