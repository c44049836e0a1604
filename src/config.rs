//! Configuration parameters for hum analysis and recommendation

use crate::error::AnalysisError;

/// Lowest fundamental accepted from the tracker: C2 (low male voice)
pub const DEFAULT_F0_FLOOR_HZ: f64 = 65.406_391_325_149_66;

/// Highest fundamental accepted from the tracker: C7 (high female voice)
pub const DEFAULT_F0_CEILING_HZ: f64 = 2_093.004_522_404_789;

/// Analysis configuration parameters
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    // Pitch band
    /// Lowest plausible f0 in Hz (default: C2, ~65.4 Hz)
    /// Estimates below the floor are treated as unvoiced
    pub f0_floor_hz: f64,

    /// Highest plausible f0 in Hz (default: C7, ~2093 Hz)
    pub f0_ceiling_hz: f64,

    // Post-processing
    /// Median smoothing window over consecutive voiced samples (default: 3)
    pub median_window: usize,

    /// Open ratio interval treated as a spurious octave jump up (default: (1.9, 2.1))
    pub octave_up_band: (f64, f64),

    /// Open ratio interval treated as a spurious octave drop (default: (0.45, 0.55))
    pub octave_down_band: (f64, f64),

    /// Largest accepted jump between consecutive voiced samples, in semitones (default: 5.0)
    /// Larger jumps are held at the last accepted pitch
    pub max_jump_semitones: f64,

    // Vocal range classification
    /// Overlap percentage above which the runner-up category makes the
    /// classification "intermediate" (default: 30.0)
    pub intermediate_threshold: f64,

    // Melody contour
    /// Number of evenly spaced contour points (default: 20)
    pub contour_points: usize,

    // Warnings
    /// Key confidence below this raises a weak-tonality flag (default: 0.3)
    pub weak_tonality_threshold: f64,

    /// Observed range below this many semitones raises a narrow-range flag (default: 3.0)
    pub narrow_range_semitones: f64,

    /// Voicing rate (percent) below this raises a low-voicing flag (default: 20.0)
    pub low_voicing_rate: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            f0_floor_hz: DEFAULT_F0_FLOOR_HZ,
            f0_ceiling_hz: DEFAULT_F0_CEILING_HZ,
            median_window: 3,
            octave_up_band: (1.9, 2.1),
            octave_down_band: (0.45, 0.55),
            max_jump_semitones: 5.0,
            intermediate_threshold: 30.0,
            contour_points: 20,
            weak_tonality_threshold: 0.3,
            narrow_range_semitones: 3.0,
            low_voicing_rate: 20.0,
        }
    }
}

impl AnalysisConfig {
    /// Check that bands and limits are usable
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if !(self.f0_floor_hz.is_finite() && self.f0_floor_hz > 0.0) {
            return Err(AnalysisError::InvalidInput(format!(
                "f0 floor must be a positive frequency, got {}",
                self.f0_floor_hz
            )));
        }
        if !(self.f0_ceiling_hz.is_finite() && self.f0_ceiling_hz > self.f0_floor_hz) {
            return Err(AnalysisError::InvalidInput(format!(
                "f0 ceiling ({}) must be above the floor ({})",
                self.f0_ceiling_hz, self.f0_floor_hz
            )));
        }
        if self.median_window == 0 {
            return Err(AnalysisError::InvalidInput(
                "median window must be at least 1".to_string(),
            ));
        }
        for (name, (lo, hi)) in [
            ("octave up band", self.octave_up_band),
            ("octave down band", self.octave_down_band),
        ] {
            if !(lo > 0.0 && lo < hi) {
                return Err(AnalysisError::InvalidInput(format!(
                    "{} must be a non-empty positive interval, got ({}, {})",
                    name, lo, hi
                )));
            }
        }
        if !(self.max_jump_semitones > 0.0) {
            return Err(AnalysisError::InvalidInput(format!(
                "max jump must be positive, got {}",
                self.max_jump_semitones
            )));
        }
        for (name, value) in [
            ("intermediate threshold", self.intermediate_threshold),
            ("weak tonality threshold", self.weak_tonality_threshold),
            ("narrow range threshold", self.narrow_range_semitones),
            ("low voicing rate threshold", self.low_voicing_rate),
        ] {
            if !value.is_finite() {
                return Err(AnalysisError::InvalidInput(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        if self.contour_points < 2 {
            return Err(AnalysisError::InvalidInput(format!(
                "contour needs at least 2 points, got {}",
                self.contour_points
            )));
        }
        Ok(())
    }

    /// Tracker parameters matching this configuration's pitch band
    pub fn tracker_params(&self) -> TrackerParams {
        TrackerParams {
            f0_floor_hz: self.f0_floor_hz,
            f0_ceiling_hz: self.f0_ceiling_hz,
            ..TrackerParams::default()
        }
    }
}

/// Parameters handed to the external frame pitch tracker
#[derive(Debug, Clone)]
pub struct TrackerParams {
    /// Sample rate the waveform is decoded at (default: 16000, enough for voice)
    pub sample_rate: u32,

    /// Lowest f0 the tracker should search, in Hz
    pub f0_floor_hz: f64,

    /// Highest f0 the tracker should search, in Hz
    pub f0_ceiling_hz: f64,

    /// Analysis frame length in samples (default: 2048)
    pub frame_length: usize,

    /// Hop between frames in samples (default: 512)
    pub hop_length: usize,
}

impl Default for TrackerParams {
    fn default() -> Self {
        Self {
            sample_rate: 16_000,
            f0_floor_hz: DEFAULT_F0_FLOOR_HZ,
            f0_ceiling_hz: DEFAULT_F0_CEILING_HZ,
            frame_length: 2048,
            hop_length: 512,
        }
    }
}

/// Recommendation configuration parameters
#[derive(Debug, Clone)]
pub struct RecommendConfig {
    /// Maximum number of recommendations returned (default: 10)
    pub max_results: usize,

    /// Points awarded for key compatibility (default: 30.0)
    pub key_weight: f64,

    /// Points awarded for range compatibility (default: 40.0)
    pub range_weight: f64,

    /// Points awarded for vocal-type confidence (default: 30.0)
    pub vocal_type_weight: f64,

    /// Only score songs whose tonic lies within this many semitones of the
    /// detected tonic (default: None, score the whole catalog)
    pub key_window: Option<u8>,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            max_results: 10,
            key_weight: 30.0,
            range_weight: 40.0,
            vocal_type_weight: 30.0,
            key_window: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AnalysisConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_band_rejected() {
        let config = AnalysisConfig {
            f0_floor_hz: 500.0,
            f0_ceiling_hz: 100.0,
            ..AnalysisConfig::default()
        };
        assert!(matches!(config.validate(), Err(AnalysisError::InvalidInput(_))));

        let config = AnalysisConfig {
            octave_up_band: (2.1, 1.9),
            ..AnalysisConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_thresholds_rejected() {
        let configs = [
            AnalysisConfig {
                intermediate_threshold: f64::NAN,
                ..AnalysisConfig::default()
            },
            AnalysisConfig {
                weak_tonality_threshold: f64::NAN,
                ..AnalysisConfig::default()
            },
            AnalysisConfig {
                narrow_range_semitones: f64::INFINITY,
                ..AnalysisConfig::default()
            },
            AnalysisConfig {
                low_voicing_rate: f64::NAN,
                ..AnalysisConfig::default()
            },
        ];
        for config in &configs {
            assert!(matches!(config.validate(), Err(AnalysisError::InvalidInput(_))));
        }
    }

    #[test]
    fn test_tracker_params_follow_band() {
        let config = AnalysisConfig {
            f0_floor_hz: 80.0,
            f0_ceiling_hz: 1000.0,
            ..AnalysisConfig::default()
        };
        let params = config.tracker_params();
        assert_eq!(params.f0_floor_hz, 80.0);
        assert_eq!(params.f0_ceiling_hz, 1000.0);
        assert_eq!(params.hop_length, 512);
        assert_eq!(params.sample_rate, 16_000);
    }
}
