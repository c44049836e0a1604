//! Song compatibility scoring
//!
//! Three sub-scores in [0, 1], weighted into a total expressed in points.

use serde::{Deserialize, Serialize};

use super::catalog::{MidiRange, SongProfile};
use crate::analysis::VoiceAnalysis;
use crate::config::RecommendConfig;
use crate::features::key::{PitchClass, Scale};
use crate::features::range::{ClassificationType, VocalClassification};

/// Longest range-length mismatch penalty
const MAX_LENGTH_PENALTY: f64 = 0.3;

/// Sub-scores and weighted total for one song
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityScore {
    /// Key compatibility (0.0-1.0)
    pub key: f64,
    /// Range compatibility (0.0-1.0)
    pub range: f64,
    /// Vocal-type confidence contribution (0.0-1.0)
    pub vocal_type: f64,
    /// Weighted total in points (0-100 with default weights)
    pub total: f64,
}

/// Key compatibility between the detected key and a song key
///
/// Same tonic and scale scores 1.0, same tonic in the other mode 0.8.
/// Otherwise the shortest circular tonic distance is mapped through a step
/// function: 1 -> 0.9, 2 -> 0.7, 3-5 -> 0.5, 6 -> 0.3.
pub fn key_compatibility(
    user_tonic: PitchClass,
    user_scale: Scale,
    song_tonic: PitchClass,
    song_scale: Scale,
) -> f64 {
    if user_tonic == song_tonic {
        return if user_scale == song_scale { 1.0 } else { 0.8 };
    }

    match user_tonic.distance(song_tonic) {
        0 => 1.0,
        1 => 0.9,
        2 => 0.7,
        3..=5 => 0.5,
        _ => 0.3,
    }
}

/// Range compatibility between the observed voice interval and a song interval
///
/// A song that fits entirely inside the voice scores 1.0. Otherwise the share
/// of the song covered by the voice, less a penalty of one point per octave of
/// length mismatch (at most 0.3), clamped to [0, 1].
pub fn range_compatibility(voice: &MidiRange, song: &MidiRange) -> f64 {
    if voice.contains(song) {
        return 1.0;
    }

    let song_length = song.length();
    let overlap_ratio = if song_length > 0.0 {
        voice.overlap(song) / song_length
    } else {
        0.0
    };
    let penalty = ((voice.length() - song_length).abs() / 12.0).min(MAX_LENGTH_PENALTY);

    (overlap_ratio - penalty).clamp(0.0, 1.0)
}

/// Classification confidence scaled to [0, 1], discounted for intermediate voices
pub fn vocal_type_score(classification: &VocalClassification) -> f64 {
    let factor = match classification.kind {
        ClassificationType::Definite => 1.0,
        ClassificationType::Intermediate => 0.8,
    };
    (classification.confidence / 100.0).clamp(0.0, 1.0) * factor
}

/// Score one validated song against a voice analysis
pub fn score_song(
    voice: &VoiceAnalysis,
    song: &SongProfile,
    config: &RecommendConfig,
) -> CompatibilityScore {
    let voice_range = MidiRange::new(voice.range.min_midi, voice.range.max_midi);

    let key = key_compatibility(voice.key.tonic, voice.key.scale, song.tonic, song.scale);
    let range = range_compatibility(&voice_range, &song.range);
    let vocal_type = vocal_type_score(&voice.classification);

    CompatibilityScore {
        key,
        range,
        vocal_type,
        total: key * config.key_weight
            + range * config.range_weight
            + vocal_type * config.vocal_type_weight,
    }
}
