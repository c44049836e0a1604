//! Feature extraction modules
//!
//! This module contains the analysis stages that run on a cleaned track:
//! - Key detection
//! - Pitch range, statistics and vocal classification
//! - Melody contour

pub mod contour;
pub mod key;
pub mod range;
