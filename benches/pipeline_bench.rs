//! Performance benchmarks for the hum analysis pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hum_recommender::recommend::{MidiRange, ReferenceSong};
use hum_recommender::track::units::midi_to_hz;
use hum_recommender::{
    analyze_pitch_track, post_process, recommend, AnalysisConfig, PitchFrame, RecommendConfig,
};

const HOP_SECONDS: f64 = 512.0 / 16_000.0;

/// 20 seconds of a wandering hum with vibrato and unvoiced gaps
fn synthetic_frames() -> Vec<PitchFrame> {
    let num_frames = (20.0 / HOP_SECONDS) as usize;
    (0..num_frames)
        .map(|i| {
            let t = i as f64 * HOP_SECONDS;
            if i % 40 >= 36 {
                return PitchFrame::unvoiced(t, 0.1);
            }
            let note = 60.0 + 7.0 * (t * 0.4).sin() + 0.3 * (t * 30.0).sin();
            PitchFrame::voiced(t, midi_to_hz(note), 0.9)
        })
        .collect()
}

fn synthetic_catalog(size: usize) -> Vec<ReferenceSong> {
    const KEYS: [&str; 12] = ["C", "Db", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B"];
    (0..size)
        .map(|i| {
            let low = 45.0 + (i % 15) as f64;
            ReferenceSong {
                id: i.to_string(),
                title: format!("Song {}", i),
                artist: format!("Artist {}", i % 37),
                key: Some(KEYS[i % 12].to_string()),
                scale: Some(if i % 3 == 0 { "minor" } else { "major" }.to_string()),
                pitch_range_midi: Some(MidiRange::new(low, low + 12.0 + (i % 10) as f64)),
                popularity: (i % 100) as f64,
                genre: None,
                tempo: Some(80.0 + (i % 60) as f64),
            }
        })
        .collect()
}

fn bench_post_process(c: &mut Criterion) {
    let frames = synthetic_frames();
    let config = AnalysisConfig::default();

    c.bench_function("post_process_20s", |b| {
        b.iter(|| {
            let _ = post_process(black_box(&frames), black_box(&config));
        });
    });
}

fn bench_analyze_pitch_track(c: &mut Criterion) {
    let frames = synthetic_frames();
    let config = AnalysisConfig::default();

    c.bench_function("analyze_pitch_track_20s", |b| {
        b.iter(|| {
            let _ = analyze_pitch_track(black_box(&frames), black_box(&config));
        });
    });
}

fn bench_recommend(c: &mut Criterion) {
    let frames = synthetic_frames();
    let result = match analyze_pitch_track(&frames, &AnalysisConfig::default()) {
        Ok(result) => result,
        Err(e) => panic!("synthetic hum failed to analyze: {}", e),
    };
    let catalog = synthetic_catalog(500);
    let config = RecommendConfig::default();

    c.bench_function("recommend_500_songs", |b| {
        b.iter(|| {
            let _ = recommend(black_box(&result.voice), black_box(&catalog), black_box(&config));
        });
    });
}

criterion_group!(benches, bench_post_process, bench_analyze_pitch_track, bench_recommend);
criterion_main!(benches);
