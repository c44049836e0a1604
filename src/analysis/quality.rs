//! Quality flags for an analysis
//!
//! Flags never change the estimates; they tell the caller which parts of the
//! result deserve less trust.

use super::result::{AnalysisFlag, VoiceAnalysis};
use crate::config::AnalysisConfig;
use crate::features::range::ClassificationType;
use crate::postprocessing::TrackStats;

/// Collect flags and warnings for a voice analysis
///
/// # Arguments
///
/// * `voice` - Voice analysis to inspect
/// * `stats` - Frame statistics, when the analysis came from a full frame track
/// * `config` - Thresholds
pub fn assess_quality(
    voice: &VoiceAnalysis,
    stats: Option<&TrackStats>,
    config: &AnalysisConfig,
) -> (Vec<AnalysisFlag>, Vec<String>) {
    let mut flags = Vec::new();
    let mut warnings = Vec::new();

    if voice.key.confidence < config.weak_tonality_threshold {
        flags.push(AnalysisFlag::WeakTonality);
        warnings.push(format!(
            "Key estimate is uncertain (correlation {:.2})",
            voice.key.confidence
        ));
    }

    if voice.range.range_semitones < config.narrow_range_semitones {
        flags.push(AnalysisFlag::NarrowRange);
        warnings.push(format!(
            "Observed range spans only {:.1} semitones; hum a wider melody for a reliable voice type",
            voice.range.range_semitones
        ));
    }

    if voice.classification.kind == ClassificationType::Intermediate {
        flags.push(AnalysisFlag::IntermediateVoice);
        if let Some(secondary) = voice.classification.secondary {
            warnings.push(format!(
                "Voice sits between {} and {}",
                voice.classification.primary, secondary
            ));
        }
    }

    if let Some(stats) = stats {
        if stats.voicing_rate < config.low_voicing_rate {
            flags.push(AnalysisFlag::LowVoicingRate);
            warnings.push(format!(
                "Only {:.1}% of frames were voiced; background noise or a quiet hum may distort the result",
                stats.voicing_rate
            ));
        }
    }

    (flags, warnings)
}
