//! Song recommendation
//!
//! Scores every song of a catalog snapshot against a voice analysis and
//! attaches a transposition plan:
//! - Catalog types and per-song validation
//! - Compatibility scoring
//! - Transposition planning
//!
//! Each song is scored independently, so the scoring map runs on the rayon
//! pool when the `parallel` feature is enabled. Results are identical either
//! way.

pub mod catalog;
pub mod scoring;
pub mod transpose;

pub use catalog::{CatalogSnapshot, CatalogSource, MidiRange, ReferenceSong, SongProfile};
pub use scoring::{
    key_compatibility, range_compatibility, score_song, vocal_type_score, CompatibilityScore,
};
pub use transpose::{
    plan_transposition, semitone_shift, Direction, TransposeQuality, Transposition,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::VoiceAnalysis;
use crate::config::RecommendConfig;
use crate::features::key::PitchClass;

/// One ranked song suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Catalog id
    pub song_id: String,

    /// Song title
    pub title: String,

    /// Performing artist
    pub artist: String,

    /// Key the song is recorded in (e.g. "G major")
    pub original_key: String,

    /// Song tonic after transposition
    pub recommended_key: PitchClass,

    /// Signed shift in semitones (-6..=6)
    pub transpose_semitones: i32,

    /// Sign of the shift
    pub direction: Direction,

    /// Comfort of the shift
    pub transpose_quality: TransposeQuality,

    /// Sub-scores and total
    pub compatibility_score: CompatibilityScore,

    /// Genre label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// Tempo in BPM
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempo: Option<f64>,
}

/// Rank catalog songs for a voice
///
/// # Arguments
///
/// * `voice` - Result of `analyze_voice`
/// * `songs` - Catalog snapshot (see `CatalogSnapshot::songs`)
/// * `config` - Weights, result count and optional key window
///
/// # Returns
///
/// At most `config.max_results` recommendations, best first. Songs with equal
/// totals keep their catalog order. An empty catalog yields an empty list.
/// Malformed entries are logged and skipped.
pub fn recommend(
    voice: &VoiceAnalysis,
    songs: &[ReferenceSong],
    config: &RecommendConfig,
) -> Vec<Recommendation> {
    log::debug!("Scoring {} catalog songs", songs.len());

    if songs.is_empty() || config.max_results == 0 {
        return Vec::new();
    }

    #[cfg(feature = "parallel")]
    let scored: Vec<Option<Recommendation>> = songs
        .par_iter()
        .map(|song| evaluate(voice, song, config))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let scored: Vec<Option<Recommendation>> = songs
        .iter()
        .map(|song| evaluate(voice, song, config))
        .collect();

    let mut recommendations: Vec<Recommendation> = scored.into_iter().flatten().collect();
    let candidates = recommendations.len();

    recommendations.sort_by(|a, b| {
        b.compatibility_score
            .total
            .total_cmp(&a.compatibility_score.total)
    });
    recommendations.truncate(config.max_results);

    log::debug!(
        "Recommendation complete: {} of {} scored songs returned",
        recommendations.len(),
        candidates
    );

    recommendations
}

fn evaluate(
    voice: &VoiceAnalysis,
    song: &ReferenceSong,
    config: &RecommendConfig,
) -> Option<Recommendation> {
    let profile = match song.profile() {
        Ok(profile) => profile,
        Err(e) => {
            log::warn!("Skipping catalog song: {}", e);
            return None;
        }
    };

    if let Some(window) = config.key_window {
        if voice.key.tonic.distance(profile.tonic) > window {
            return None;
        }
    }

    let score = score_song(voice, &profile, config);
    let voice_range = MidiRange::new(voice.range.min_midi, voice.range.max_midi);
    let plan = plan_transposition(&voice_range, &profile.range, profile.tonic);

    Some(Recommendation {
        song_id: song.id.clone(),
        title: song.title.clone(),
        artist: song.artist.clone(),
        original_key: format!("{} {}", profile.tonic, profile.scale),
        recommended_key: plan.recommended_key,
        transpose_semitones: plan.semitones,
        direction: plan.direction,
        transpose_quality: plan.quality,
        compatibility_score: score,
        genre: song.genre.clone(),
        tempo: song.tempo,
    })
}
