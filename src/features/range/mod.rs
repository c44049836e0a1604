//! Vocal range modules
//!
//! - Pitch extent and summary statistics of a cleaned track
//! - Singer-range classification by interval overlap

pub mod classifier;
pub mod extent;

pub use classifier::{classify, classify_vocal_range, ClassificationType, RangeOverlap, VocalClassification, VocalRange};
pub use extent::{pitch_range, pitch_statistics, PitchRange, PitchStatistics};
