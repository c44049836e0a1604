//! Example: Analyze a pitch-track dump and recommend songs
//!
//! Usage:
//!   cargo run --example analyze_frames -- [--json] [--top N] <frames.json> [catalog.json]
//!
//! The frame dump is either an array of frames
//! (`{"time", "f0_hz", "voiced", "voicing_prob"}`) or the parallel arrays a
//! tracker reports (`{"times", "f0", "voiced", "voicing_prob"}`, `null` for
//! frames without an estimate). The catalog defaults to the sample catalog
//! shipped with the tests; `demos/hum_a_minor.json` is a sample frame dump.

use hum_recommender::io::{frames_from_arrays, JsonCatalog};
use hum_recommender::recommend::CatalogSource;
use hum_recommender::{analyze_pitch_track, recommend, AnalysisConfig, PitchFrame, RecommendConfig};
use serde::Deserialize;
use std::env;
use std::fs::File;
use std::io::BufReader;

#[derive(Deserialize)]
#[serde(untagged)]
enum FrameDump {
    Frames(Vec<PitchFrame>),
    Arrays {
        times: Vec<f64>,
        f0: Vec<Option<f64>>,
        voiced: Vec<bool>,
        voicing_prob: Vec<f64>,
    },
}

fn load_frames(path: &str) -> Result<Vec<PitchFrame>, Box<dyn std::error::Error>> {
    let dump: FrameDump = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    Ok(match dump {
        FrameDump::Frames(frames) => frames,
        FrameDump::Arrays {
            times,
            f0,
            voiced,
            voicing_prob,
        } => {
            let f0: Vec<f64> = f0.into_iter().map(|hz| hz.unwrap_or(f64::NAN)).collect();
            frames_from_arrays(&times, &f0, &voiced, &voicing_prob)?
        }
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut json = false;
    let mut top = RecommendConfig::default().max_results;
    let mut paths = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--top" => {
                top = args.next().ok_or("--top needs a value")?.parse()?;
            }
            _ => paths.push(arg),
        }
    }

    let frames_path = paths.first().ok_or(
        "Usage: analyze_frames [--json] [--top N] <frames.json> [catalog.json]",
    )?;
    let catalog_path = paths.get(1).cloned().unwrap_or_else(|| {
        concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample_catalog.json").to_string()
    });

    let frames = load_frames(frames_path)?;
    let result = analyze_pitch_track(&frames, &AnalysisConfig::default())?;

    let snapshot = JsonCatalog::new(catalog_path).snapshot()?;
    let config = RecommendConfig {
        max_results: top,
        ..RecommendConfig::default()
    };
    let recommendations = recommend(&result.voice, snapshot.songs(), &config);

    if json {
        let output = serde_json::json!({
            "analysis": result,
            "recommendations": recommendations,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let voice = &result.voice;
    println!("Analysis Results:");
    println!("  Key: {} (confidence: {:.2})", voice.key.name(), voice.key.confidence);
    println!(
        "  Range: {} - {} ({:.1} semitones)",
        voice.range.min_note, voice.range.max_note, voice.range.range_semitones
    );
    println!(
        "  Voice type: {} ({:.1}%, {:?})",
        voice.classification.primary, voice.classification.confidence, voice.classification.kind
    );
    println!(
        "  Voiced: {}/{} frames ({:.1}%)",
        result.metadata.voiced_frames, result.metadata.total_frames, result.metadata.voicing_rate
    );
    for warning in &result.metadata.warnings {
        println!("  Warning: {}", warning);
    }
    println!("  Processing time: {:.2} ms", result.metadata.processing_time_ms);

    println!();
    println!("Recommendations:");
    for (rank, rec) in recommendations.iter().enumerate() {
        println!(
            "  {:>2}. {} - {} [{}] score {:.1}, transpose {:+} -> {} ({})",
            rank + 1,
            rec.title,
            rec.artist,
            rec.original_key,
            rec.compatibility_score.total,
            rec.transpose_semitones,
            rec.recommended_key,
            rec.transpose_quality
        );
    }

    Ok(())
}
