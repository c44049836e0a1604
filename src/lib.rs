//! # Hum Recommender
//!
//! Turns the pitch track of a hummed or sung clip into a voice profile and a
//! ranked list of songs that suit it, each with a recommended transposition.
//!
//! ## Features
//!
//! - **Post-processing**: median smoothing, octave-error correction and outlier
//!   rejection of the raw f0 track
//! - **Key Detection**: pitch-class histogram matched against Krumhansl-Kessler
//!   major and minor profiles
//! - **Vocal Range**: observed extent, note names and a six-category singer
//!   classification
//! - **Recommendation**: key, range and voice-type compatibility scoring with a
//!   transposition plan per song
//!
//! ## Quick Start
//!
//! ```
//! use hum_recommender::{analyze_pitch_track, recommend, AnalysisConfig, RecommendConfig};
//! use hum_recommender::recommend::{MidiRange, ReferenceSong};
//! use hum_recommender::track::{units::midi_to_hz, PitchFrame};
//!
//! // Frames from a frame pitch tracker: an A minor arpeggio
//! let notes = [57.0, 60.0, 64.0, 69.0, 64.0, 60.0, 57.0];
//! let frames: Vec<PitchFrame> = notes
//!     .iter()
//!     .flat_map(|&n| std::iter::repeat(midi_to_hz(n)).take(4))
//!     .enumerate()
//!     .map(|(i, hz)| PitchFrame::voiced(i as f64 * 0.032, hz, 0.9))
//!     .collect();
//!
//! let result = analyze_pitch_track(&frames, &AnalysisConfig::default())?;
//! println!("Key: {}", result.voice.key.name());
//!
//! let catalog = vec![ReferenceSong {
//!     id: "1".to_string(),
//!     title: "Perfect".to_string(),
//!     artist: "Ed Sheeran".to_string(),
//!     key: Some("G".to_string()),
//!     scale: Some("major".to_string()),
//!     pitch_range_midi: Some(MidiRange::new(57.0, 76.0)),
//!     popularity: 0.0,
//!     genre: None,
//!     tempo: None,
//! }];
//! let recommendations = recommend(&result.voice, &catalog, &RecommendConfig::default());
//! assert_eq!(recommendations.len(), 1);
//! # Ok::<(), hum_recommender::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Pitch frames → Post-processing → Feature Extraction → Analysis → Recommendation
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod io;
pub mod postprocessing;
pub mod recommend;
pub mod track;

// Re-export main types
pub use analysis::{analyze_voice, AnalysisFlag, AnalysisMetadata, AnalysisResult, VoiceAnalysis};
pub use config::{AnalysisConfig, RecommendConfig, TrackerParams};
pub use error::{AnalysisError, VoicingSummary};
pub use io::PitchTracker;
pub use postprocessing::{post_process, ProcessedTrack};
pub use recommend::{recommend, Recommendation};
pub use track::{CleanedTrack, PitchFrame};

use std::time::Instant;

/// Analyze a pitch track end to end
///
/// Post-processes the frames, analyzes the cleaned track and attaches frame
/// statistics, timing and quality flags.
///
/// # Arguments
///
/// * `frames` - Time-ordered frames from the frame pitch tracker
/// * `config` - Analysis configuration parameters
///
/// # Returns
///
/// `AnalysisResult` with key, range, classification, statistics and contour
///
/// # Errors
///
/// - `AnalysisError::InvalidInput` for a bad configuration or unordered frames
/// - `AnalysisError::NoVoiceDetected` when no frame carries a usable pitch
pub fn analyze_pitch_track(
    frames: &[PitchFrame],
    config: &AnalysisConfig,
) -> Result<AnalysisResult, AnalysisError> {
    let start_time = Instant::now();

    log::debug!("Starting pitch track analysis: {} frames", frames.len());

    let processed = post_process(frames, config)?;
    let voice = analyze_voice(&processed.cleaned, config)?;
    let (flags, warnings) = analysis::assess_quality(&voice, Some(&processed.stats), config);

    let processing_time_ms = start_time.elapsed().as_secs_f64() * 1000.0;
    log::debug!(
        "Analysis complete in {:.2} ms ({} flags)",
        processing_time_ms,
        flags.len()
    );

    Ok(AnalysisResult {
        voice,
        metadata: AnalysisMetadata {
            duration_seconds: processed.stats.duration_seconds,
            total_frames: processed.stats.total_frames,
            voiced_frames: processed.stats.voiced_frames,
            voicing_rate: processed.stats.voicing_rate,
            processing_time_ms,
            flags,
            warnings,
            ..AnalysisMetadata::default()
        },
    })
}

/// Analyze a decoded waveform with an external pitch tracker
///
/// # Arguments
///
/// * `samples` - Mono audio samples, normalized to [-1.0, 1.0]
/// * `sample_rate` - Sample rate in Hz
/// * `tracker` - Frame pitch tracker
/// * `config` - Analysis configuration parameters
///
/// # Errors
///
/// - `AnalysisError::InvalidInput` for empty samples or a zero sample rate
/// - `AnalysisError::TrackingError` or any error reported by the tracker
/// - Everything `analyze_pitch_track` returns
///
/// # Example
///
/// ```
/// use hum_recommender::{analyze_audio, AnalysisConfig, AnalysisError, PitchFrame, TrackerParams};
///
/// // Stand-in tracker reporting a steady A3
/// let tracker = |samples: &[f32], params: &TrackerParams| -> Result<Vec<PitchFrame>, AnalysisError> {
///     let hop = params.hop_length as f64 / params.sample_rate as f64;
///     Ok((0..samples.len() / params.hop_length)
///         .map(|i| PitchFrame::voiced(i as f64 * hop, 220.0, 0.9))
///         .collect())
/// };
///
/// let samples = vec![0.0f32; 16_000];
/// let result = analyze_audio(&samples, 16_000, &tracker, &AnalysisConfig::default())?;
/// assert_eq!(result.voice.key.tonic.name(), "A");
/// # Ok::<(), AnalysisError>(())
/// ```
pub fn analyze_audio<T: PitchTracker + ?Sized>(
    samples: &[f32],
    sample_rate: u32,
    tracker: &T,
    config: &AnalysisConfig,
) -> Result<AnalysisResult, AnalysisError> {
    log::debug!(
        "Starting audio analysis: {} samples at {} Hz",
        samples.len(),
        sample_rate
    );

    if samples.is_empty() {
        return Err(AnalysisError::InvalidInput("Empty audio samples".to_string()));
    }

    if sample_rate == 0 {
        return Err(AnalysisError::InvalidInput("Invalid sample rate".to_string()));
    }

    let params = TrackerParams {
        sample_rate,
        ..config.tracker_params()
    };
    let frames = tracker.track(samples, &params)?;

    log::debug!("Tracker returned {} frames", frames.len());

    analyze_pitch_track(&frames, config)
}
