//! Outlier rejection by maximum pitch jump

use crate::track::units::semitones_between;

/// Hold the pitch across implausibly large jumps
///
/// Keeps a "last accepted" value (seeded with the first sample). A sample more
/// than `max_jump_semitones` away from it is replaced by the last accepted
/// value; otherwise it is accepted and becomes the new reference.
///
/// # Arguments
///
/// * `values` - Octave-corrected voiced f0 values in Hz
/// * `max_jump_semitones` - Largest accepted jump (default config: 5.0)
pub fn reject_outliers(values: &[f64], max_jump_semitones: f64) -> Vec<f64> {
    let Some(&first) = values.first() else {
        return Vec::new();
    };

    let mut cleaned = Vec::with_capacity(values.len());
    cleaned.push(first);
    let mut last_accepted = first;
    let mut held = 0usize;

    for &current in &values[1..] {
        if semitones_between(current, last_accepted).abs() > max_jump_semitones {
            held += 1;
            cleaned.push(last_accepted);
        } else {
            last_accepted = current;
            cleaned.push(current);
        }
    }

    if held > 0 {
        log::debug!("Outlier rejection held {} of {} samples", held, values.len());
    }
    cleaned
}
