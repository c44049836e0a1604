//! Singer-range classification
//!
//! Six overlapping voice categories, each an inclusive MIDI interval. The
//! observed interval is scored against every category by the share of it that
//! the category covers.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::extent::PitchRange;

/// Voice category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VocalRange {
    /// E2-E4
    Bass,
    /// A2-A4
    Baritone,
    /// C3-C5
    Tenor,
    /// F3-F5
    Alto,
    /// A3-A5
    #[serde(rename = "Mezzo-Soprano")]
    MezzoSoprano,
    /// C4-C6
    Soprano,
}

impl VocalRange {
    /// All categories, lowest first (also the tie-break order)
    pub const ALL: [VocalRange; 6] = [
        VocalRange::Bass,
        VocalRange::Baritone,
        VocalRange::Tenor,
        VocalRange::Alto,
        VocalRange::MezzoSoprano,
        VocalRange::Soprano,
    ];

    /// Inclusive MIDI interval of the category
    pub fn midi_bounds(self) -> (f64, f64) {
        match self {
            VocalRange::Bass => (40.0, 64.0),
            VocalRange::Baritone => (45.0, 69.0),
            VocalRange::Tenor => (48.0, 72.0),
            VocalRange::Alto => (53.0, 77.0),
            VocalRange::MezzoSoprano => (57.0, 81.0),
            VocalRange::Soprano => (60.0, 84.0),
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            VocalRange::Bass => "Bass",
            VocalRange::Baritone => "Baritone",
            VocalRange::Tenor => "Tenor",
            VocalRange::Alto => "Alto",
            VocalRange::MezzoSoprano => "Mezzo-Soprano",
            VocalRange::Soprano => "Soprano",
        }
    }
}

impl fmt::Display for VocalRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether one category clearly dominates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationType {
    /// Only the primary category covers a large share of the observed range
    Definite,
    /// A second category also covers more than the threshold
    Intermediate,
}

/// Overlap of the observed range with one category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeOverlap {
    /// Category
    pub category: VocalRange,
    /// Share of the observed interval covered by the category (0-100)
    pub percentage: f64,
}

/// Vocal range classification result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocalClassification {
    /// Best matching category
    pub primary: VocalRange,

    /// Overlap percentage of the primary category (0-100)
    pub confidence: f64,

    /// Overlap percentage for every category, in table order
    pub all_overlaps: Vec<RangeOverlap>,

    /// Runner-up category when it also exceeds the threshold
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<VocalRange>,

    /// Definite or intermediate
    #[serde(rename = "type")]
    pub kind: ClassificationType,
}

impl VocalClassification {
    /// Overlap percentage recorded for a category
    pub fn overlap(&self, category: VocalRange) -> f64 {
        self.all_overlaps
            .iter()
            .find(|o| o.category == category)
            .map_or(0.0, |o| o.percentage)
    }
}

/// Classify an observed MIDI interval
///
/// # Arguments
///
/// * `min_midi`, `max_midi` - Observed pitch extremes
/// * `intermediate_threshold` - Runner-up percentage above which the result is
///   intermediate (default config: 30.0)
///
/// # Returns
///
/// Classification with the highest-overlap category as primary. A zero-length
/// observed interval (a single sustained pitch) scores 0% everywhere, which
/// yields the first category with zero confidence.
///
/// # Example
///
/// ```
/// use hum_recommender::features::range::{classify_vocal_range, ClassificationType, VocalRange};
///
/// let c = classify_vocal_range(50.0, 62.0, 30.0);
/// assert_eq!(c.primary, VocalRange::Bass);
/// assert_eq!(c.kind, ClassificationType::Intermediate);
/// ```
pub fn classify_vocal_range(
    min_midi: f64,
    max_midi: f64,
    intermediate_threshold: f64,
) -> VocalClassification {
    let observed = max_midi - min_midi;

    let all_overlaps: Vec<RangeOverlap> = VocalRange::ALL
        .iter()
        .map(|&category| {
            let (lo, hi) = category.midi_bounds();
            let overlap = (max_midi.min(hi) - min_midi.max(lo)).max(0.0);
            let percentage = if observed > 0.0 {
                overlap / observed * 100.0
            } else {
                0.0
            };
            RangeOverlap {
                category,
                percentage,
            }
        })
        .collect();

    // Stable sort keeps table order among equal overlaps
    let mut ranked = all_overlaps.clone();
    ranked.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));

    let primary = ranked[0];
    let runner_up = ranked.get(1).filter(|o| o.percentage > intermediate_threshold);

    log::debug!(
        "Vocal range [{:.1}, {:.1}] classified as {} ({:.1}%)",
        min_midi,
        max_midi,
        primary.category,
        primary.percentage
    );

    VocalClassification {
        primary: primary.category,
        confidence: primary.percentage,
        all_overlaps,
        secondary: runner_up.map(|o| o.category),
        kind: if runner_up.is_some() {
            ClassificationType::Intermediate
        } else {
            ClassificationType::Definite
        },
    }
}

/// Classify a pitch range
pub fn classify(range: &PitchRange, intermediate_threshold: f64) -> VocalClassification {
    classify_vocal_range(range.min_midi, range.max_midi, intermediate_threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_tenor_range() {
        let c = classify_vocal_range(48.0, 72.0, 30.0);
        assert_eq!(c.primary, VocalRange::Tenor);
        assert_eq!(c.confidence, 100.0);
        // Baritone covers 45-69 -> 21 of 24 semitones
        assert!((c.overlap(VocalRange::Baritone) - 87.5).abs() < 1e-9);
        assert_eq!(c.secondary, Some(VocalRange::Baritone));
        assert_eq!(c.kind, ClassificationType::Intermediate);
    }

    #[test]
    fn test_overlap_percentages() {
        let c = classify_vocal_range(57.0, 76.0, 30.0);
        assert_eq!(c.all_overlaps.len(), 6);
        // Bass 57-64 = 7/19
        assert!((c.overlap(VocalRange::Bass) - 7.0 / 19.0 * 100.0).abs() < 1e-9);
        // Alto and Mezzo-Soprano both cover everything; Alto comes first
        assert_eq!(c.overlap(VocalRange::Alto), 100.0);
        assert_eq!(c.overlap(VocalRange::MezzoSoprano), 100.0);
        assert_eq!(c.primary, VocalRange::Alto);
        assert_eq!(c.secondary, Some(VocalRange::MezzoSoprano));
    }

    #[test]
    fn test_definite_when_runner_up_small() {
        // Very low range: only Bass reaches below 45
        let c = classify_vocal_range(36.0, 46.0, 30.0);
        assert_eq!(c.primary, VocalRange::Bass);
        assert!((c.confidence - 60.0).abs() < 1e-9);
        assert!((c.overlap(VocalRange::Baritone) - 10.0).abs() < 1e-9);
        assert_eq!(c.secondary, None);
        assert_eq!(c.kind, ClassificationType::Definite);
    }

    #[test]
    fn test_zero_length_range() {
        let c = classify_vocal_range(60.0, 60.0, 30.0);
        assert!(c.all_overlaps.iter().all(|o| o.percentage == 0.0));
        assert_eq!(c.primary, VocalRange::Bass);
        assert_eq!(c.confidence, 0.0);
        assert_eq!(c.kind, ClassificationType::Definite);
    }

    #[test]
    fn test_serialized_names() {
        let c = classify_vocal_range(57.0, 81.0, 30.0);
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["primary"], "Mezzo-Soprano");
        assert_eq!(json["type"], "intermediate");
    }
}
