//! Octave-error correction
//!
//! Frame pitch trackers occasionally lock onto the second harmonic (reporting
//! double the true pitch) or a subharmonic (half the pitch). A jump of almost
//! exactly one octave between neighbouring voiced samples is far more likely
//! to be such an error than a sung interval, so it is folded back.

/// Fold spurious octave jumps back toward the running pitch
///
/// Walks left to right keeping the last corrected value as reference
/// (seeded with the first sample). With `ratio = current / reference`:
/// - ratio inside `up_band`: the current value is halved
/// - ratio inside `down_band`: the current value is doubled
/// - otherwise the value is kept
///
/// Both bands are open intervals. Applying the correction to its own
/// output changes nothing.
///
/// # Arguments
///
/// * `values` - Smoothed voiced f0 values in Hz (all finite and positive)
/// * `up_band` - Ratio interval treated as an octave-up error, e.g. (1.9, 2.1)
/// * `down_band` - Ratio interval treated as an octave-down error, e.g. (0.45, 0.55)
pub fn correct_octave_errors(values: &[f64], up_band: (f64, f64), down_band: (f64, f64)) -> Vec<f64> {
    let Some(&first) = values.first() else {
        return Vec::new();
    };

    let mut corrected = Vec::with_capacity(values.len());
    corrected.push(first);
    let mut reference = first;
    let mut folded = 0usize;

    for &current in &values[1..] {
        let ratio = current / reference;
        let value = if ratio > up_band.0 && ratio < up_band.1 {
            folded += 1;
            current / 2.0
        } else if ratio > down_band.0 && ratio < down_band.1 {
            folded += 1;
            current * 2.0
        } else {
            current
        };
        corrected.push(value);
        reference = value;
    }

    log::debug!("Octave correction folded {} of {} samples", folded, values.len());
    corrected
}
