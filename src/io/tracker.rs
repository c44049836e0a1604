//! Frame pitch tracker boundary
//!
//! The pitch estimation primitive itself lives outside this crate. Trackers
//! usually report per-frame arrays with NaN for "no estimate"; that sentinel
//! is converted to `None` here and nowhere else.

use crate::config::TrackerParams;
use crate::error::AnalysisError;
use crate::track::PitchFrame;

/// A monophonic frame pitch tracker
pub trait PitchTracker {
    /// Track the fundamental frequency of a decoded mono waveform
    ///
    /// # Arguments
    ///
    /// * `samples` - Mono samples, normalized to [-1.0, 1.0]
    /// * `params` - Sample rate, frequency band and frame/hop sizes
    ///
    /// # Returns
    ///
    /// One frame per hop, in time order
    fn track(&self, samples: &[f32], params: &TrackerParams)
        -> Result<Vec<PitchFrame>, AnalysisError>;
}

impl<F> PitchTracker for F
where
    F: Fn(&[f32], &TrackerParams) -> Result<Vec<PitchFrame>, AnalysisError>,
{
    fn track(
        &self,
        samples: &[f32],
        params: &TrackerParams,
    ) -> Result<Vec<PitchFrame>, AnalysisError> {
        self(samples, params)
    }
}

/// Build frames from the parallel arrays a tracker reports
///
/// NaN, infinite and non-positive frequencies become `None`. A voiced flag
/// without an estimate is kept as reported; post-processing skips such frames.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the arrays differ in length.
///
/// # Example
///
/// ```
/// use hum_recommender::io::frames_from_arrays;
///
/// let frames = frames_from_arrays(
///     &[0.0, 0.032],
///     &[220.0, f64::NAN],
///     &[true, false],
///     &[0.92, 0.04],
/// )?;
/// assert_eq!(frames[0].f0_hz, Some(220.0));
/// assert_eq!(frames[1].f0_hz, None);
/// # Ok::<(), hum_recommender::AnalysisError>(())
/// ```
pub fn frames_from_arrays(
    times: &[f64],
    f0: &[f64],
    voiced: &[bool],
    voicing_probs: &[f64],
) -> Result<Vec<PitchFrame>, AnalysisError> {
    let n = times.len();
    if f0.len() != n || voiced.len() != n || voicing_probs.len() != n {
        return Err(AnalysisError::InvalidInput(format!(
            "Tracker arrays differ in length: times={}, f0={}, voiced={}, probs={}",
            n,
            f0.len(),
            voiced.len(),
            voicing_probs.len()
        )));
    }

    let frames: Vec<PitchFrame> = (0..n)
        .map(|i| PitchFrame {
            time: times[i],
            f0_hz: Some(f0[i]).filter(|hz| hz.is_finite() && *hz > 0.0),
            voiced: voiced[i],
            voicing_prob: voicing_probs[i],
        })
        .collect();

    let missing = frames
        .iter()
        .filter(|frame| frame.voiced && frame.f0_hz.is_none())
        .count();
    if missing > 0 {
        log::warn!("{} voiced frames arrived without a pitch estimate", missing);
    }

    Ok(frames)
}

/// Times of frame centers for a given hop, as trackers commonly report them
pub fn frame_times(num_frames: usize, params: &TrackerParams) -> Vec<f64> {
    let hop_seconds = params.hop_length as f64 / params.sample_rate as f64;
    (0..num_frames).map(|i| i as f64 * hop_seconds).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nan_and_nonpositive_become_none() {
        let frames = frames_from_arrays(
            &[0.0, 0.1, 0.2, 0.3],
            &[f64::NAN, 0.0, -5.0, 440.0],
            &[false, true, true, true],
            &[0.0, 0.5, 0.5, 0.9],
        )
        .unwrap();
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].f0_hz, None);
        assert_eq!(frames[1].f0_hz, None);
        assert!(frames[1].voiced);
        assert_eq!(frames[2].f0_hz, None);
        assert_eq!(frames[3].f0_hz, Some(440.0));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let result = frames_from_arrays(&[0.0, 0.1], &[220.0], &[true, true], &[0.9, 0.9]);
        assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
    }

    #[test]
    fn test_closure_tracker() {
        let tracker = |samples: &[f32], params: &TrackerParams| -> Result<Vec<PitchFrame>, AnalysisError> {
            let times = frame_times(samples.len() / params.hop_length, params);
            Ok(times
                .into_iter()
                .map(|t| PitchFrame::voiced(t, 220.0, 0.9))
                .collect())
        };
        let params = TrackerParams::default();
        let frames = tracker.track(&vec![0.0f32; 16_000], &params).unwrap();
        assert_eq!(frames.len(), 31);
        assert!((frames[1].time - 0.032).abs() < 1e-12);
    }
}
