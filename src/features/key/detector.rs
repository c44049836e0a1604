//! Key detection from a cleaned pitch track
//!
//! Builds a pitch-class histogram of the hummed notes and correlates it with
//! the major and minor key profiles for all 12 tonics.
//!
//! # Reference
//!
//! Krumhansl, C. L. (1990). *Cognitive Foundations of Musical Pitch*.
//! Oxford University Press. (Key-finding algorithm after Krumhansl & Schmuckler.)

use super::pitch_class::{PitchClass, Scale};
use super::templates::KeyTemplates;
use super::KeyEstimate;
use crate::error::AnalysisError;
use crate::track::units::hz_to_midi;
use crate::track::CleanedTrack;

/// Below this a histogram or profile is treated as flat
const MIN_VARIANCE: f64 = 1e-12;

/// Detect the key of a cleaned pitch track
///
/// # Arguments
///
/// * `track` - Voiced, corrected f0 values
/// * `templates` - Key profiles
///
/// # Returns
///
/// `KeyEstimate` with the best (tonic, scale) pair, its Pearson correlation as
/// confidence, and the normalized pitch-class histogram.
///
/// # Errors
///
/// Returns `AnalysisError::EmptyCleanedTrack` for an empty track.
///
/// # Example
///
/// ```
/// use hum_recommender::features::key::{detect_key, KeyTemplates};
/// use hum_recommender::track::CleanedTrack;
/// use hum_recommender::AnalysisConfig;
///
/// let track = CleanedTrack::new(vec![261.63; 16], &AnalysisConfig::default())?;
/// let estimate = detect_key(&track, &KeyTemplates::new())?;
/// assert_eq!(estimate.tonic.name(), "C");
/// # Ok::<(), hum_recommender::AnalysisError>(())
/// ```
pub fn detect_key(
    track: &CleanedTrack,
    templates: &KeyTemplates,
) -> Result<KeyEstimate, AnalysisError> {
    log::debug!("Detecting key from {} pitch samples", track.len());

    if track.is_empty() {
        return Err(AnalysisError::EmptyCleanedTrack);
    }

    let histogram = pitch_class_histogram(track.values());

    // First maximum wins: tonics C..B, major before minor, strict comparison
    let mut best: Option<(PitchClass, Scale, f64)> = None;
    for tonic in PitchClass::ALL {
        let rotated = rotate_to_tonic(&histogram, tonic);
        for scale in [Scale::Major, Scale::Minor] {
            let r = pearson_correlation(&rotated, templates.profile(scale));
            if best.map_or(true, |(_, _, best_r)| r > best_r) {
                best = Some((tonic, scale, r));
            }
        }
    }

    let (tonic, scale, confidence) = best.ok_or(AnalysisError::EmptyCleanedTrack)?;

    log::debug!(
        "Detected key: {} {} (correlation {:.3})",
        tonic,
        scale,
        confidence
    );

    Ok(KeyEstimate {
        tonic,
        scale,
        confidence,
        pitch_class_histogram: histogram,
    })
}

/// Normalized 12-bin pitch-class histogram of f0 values in Hz
///
/// Each value is converted to MIDI, rounded to the nearest note and reduced
/// modulo 12. Bins sum to 1.0 for non-empty input.
pub fn pitch_class_histogram(values_hz: &[f64]) -> [f64; 12] {
    let mut histogram = [0.0f64; 12];
    for &hz in values_hz {
        histogram[PitchClass::from_midi(hz_to_midi(hz)).index()] += 1.0;
    }
    if !values_hz.is_empty() {
        let total = values_hz.len() as f64;
        for bin in histogram.iter_mut() {
            *bin /= total;
        }
    }
    histogram
}

/// Rotate a histogram so `tonic` lands on index 0
fn rotate_to_tonic(histogram: &[f64; 12], tonic: PitchClass) -> [f64; 12] {
    let mut rotated = [0.0f64; 12];
    for (i, slot) in rotated.iter_mut().enumerate() {
        *slot = histogram[(i + tonic.index()) % 12];
    }
    rotated
}

/// Pearson correlation coefficient; 0.0 when either input has zero variance
pub fn pearson_correlation(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    if n == 0 {
        return 0.0;
    }
    let mean_a = a[..n].iter().sum::<f64>() / n as f64;
    let mean_b = b[..n].iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (&x, &y) in a[..n].iter().zip(&b[..n]) {
        let dx = x - mean_a;
        let dy = y - mean_b;
        cov += dx * dy;
        var_a += dx * dx;
        var_b += dy * dy;
    }

    if var_a < MIN_VARIANCE || var_b < MIN_VARIANCE {
        return 0.0;
    }
    (cov / (var_a * var_b).sqrt()).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::track::units::midi_to_hz;

    /// Track holding `count` samples of each MIDI note
    fn track_from_notes(notes: &[(f64, usize)]) -> CleanedTrack {
        let values = notes
            .iter()
            .flat_map(|&(midi, count)| std::iter::repeat(midi_to_hz(midi)).take(count))
            .collect();
        CleanedTrack::new(values, &AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn test_detect_key_empty() {
        let track = CleanedTrack::new(vec![], &AnalysisConfig::default()).unwrap();
        assert!(matches!(
            detect_key(&track, &KeyTemplates::new()),
            Err(AnalysisError::EmptyCleanedTrack)
        ));
    }

    #[test]
    fn test_single_pitch_c4() {
        let track = CleanedTrack::new(vec![261.63; 50], &AnalysisConfig::default()).unwrap();
        let estimate = detect_key(&track, &KeyTemplates::new()).unwrap();

        assert_eq!(estimate.tonic.name(), "C");
        assert_eq!(estimate.scale, Scale::Major);
        assert_eq!(estimate.pitch_class_histogram[0], 1.0);
        assert!(estimate.pitch_class_histogram[1..].iter().all(|&v| v == 0.0));
        assert!((estimate.confidence - 0.6845).abs() < 1e-3);
    }

    #[test]
    fn test_c_major_melody() {
        // C D E F G A B with tonic and dominant emphasized
        let track = track_from_notes(&[
            (60.0, 4),
            (62.0, 2),
            (64.0, 3),
            (65.0, 1),
            (67.0, 3),
            (69.0, 1),
            (71.0, 1),
        ]);
        let estimate = detect_key(&track, &KeyTemplates::new()).unwrap();
        assert_eq!(estimate.tonic.name(), "C");
        assert_eq!(estimate.scale, Scale::Major);
        assert!((estimate.confidence - 0.943).abs() < 1e-3);
    }

    #[test]
    fn test_g_major_melody() {
        let track = track_from_notes(&[
            (67.0, 4),
            (69.0, 2),
            (71.0, 3),
            (72.0, 1),
            (74.0, 3),
            (76.0, 1),
            (66.0, 1),
        ]);
        let estimate = detect_key(&track, &KeyTemplates::new()).unwrap();
        assert_eq!(estimate.tonic.name(), "G");
        assert_eq!(estimate.scale, Scale::Major);
    }

    #[test]
    fn test_a_minor_melody() {
        let track = track_from_notes(&[
            (57.0, 4),
            (59.0, 1),
            (60.0, 3),
            (62.0, 1),
            (64.0, 3),
            (65.0, 1),
            (67.0, 1),
        ]);
        let estimate = detect_key(&track, &KeyTemplates::new()).unwrap();
        assert_eq!(estimate.tonic.name(), "A");
        assert_eq!(estimate.scale, Scale::Minor);
        assert!(estimate.confidence > 0.9);
    }

    #[test]
    fn test_tonic_follows_melody_center() {
        // A drone on A and a G-centred line name their own tonic, not a
        // rotation of it
        let a = detect_key(&track_from_notes(&[(57.0, 10)]), &KeyTemplates::new()).unwrap();
        assert_eq!(a.tonic.name(), "A");
        assert_eq!(a.pitch_class_histogram[9], 1.0);

        let g = detect_key(
            &track_from_notes(&[(67.0, 2), (69.0, 1), (71.0, 2), (72.0, 1), (74.0, 1)]),
            &KeyTemplates::new(),
        )
        .unwrap();
        assert_eq!(g.tonic.name(), "G");
        assert_eq!(g.scale, Scale::Major);
    }

    #[test]
    fn test_histogram_sums_to_one() {
        let track = track_from_notes(&[(55.3, 3), (61.7, 5), (70.1, 2)]);
        let histogram = pitch_class_histogram(track.values());
        let sum: f64 = histogram.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        // 55.3 -> G, 61.7 -> D, 70.1 -> A#
        assert!((histogram[7] - 0.3).abs() < 1e-9);
        assert!((histogram[2] - 0.5).abs() < 1e-9);
        assert!((histogram[10] - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_deterministic() {
        let track = track_from_notes(&[(60.0, 3), (63.0, 2), (67.0, 4), (70.0, 1)]);
        let a = detect_key(&track, &KeyTemplates::new()).unwrap();
        let b = detect_key(&track, &KeyTemplates::new()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pearson_correlation() {
        let a = [1.0, 2.0, 3.0];
        assert!((pearson_correlation(&a, &[2.0, 4.0, 6.0]) - 1.0).abs() < 1e-12);
        assert!((pearson_correlation(&a, &[3.0, 2.0, 1.0]) + 1.0).abs() < 1e-12);
        assert_eq!(pearson_correlation(&a, &[5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn test_flat_histogram_defaults_to_first_key() {
        // One sample per pitch class: zero variance, every correlation is 0
        let notes: Vec<(f64, usize)> = (60..72).map(|m| (m as f64, 1)).collect();
        let estimate = detect_key(&track_from_notes(&notes), &KeyTemplates::new()).unwrap();
        assert_eq!(estimate.tonic.name(), "C");
        assert_eq!(estimate.scale, Scale::Major);
        assert_eq!(estimate.confidence, 0.0);
    }
}
