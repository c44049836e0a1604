//! Boundaries to external collaborators
//!
//! - The frame pitch tracker that turns a waveform into pitch frames
//! - Read-only catalog snapshots stored as JSON

pub mod catalog;
pub mod tracker;

pub use catalog::{load_catalog_json, JsonCatalog};
pub use tracker::{frames_from_arrays, PitchTracker};
