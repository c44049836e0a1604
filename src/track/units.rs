//! Hz / MIDI / note-name conversions (A4 = 440 Hz = MIDI 69)

/// Sharp-only note names, index = pitch class (0 = C)
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Convert a frequency in Hz to a continuous MIDI note number
pub fn hz_to_midi(hz: f64) -> f64 {
    69.0 + 12.0 * (hz / 440.0).log2()
}

/// Convert a (possibly fractional) MIDI note number to Hz
pub fn midi_to_hz(midi: f64) -> f64 {
    440.0 * 2f64.powf((midi - 69.0) / 12.0)
}

/// Signed distance from `reference_hz` to `hz` in semitones
pub fn semitones_between(hz: f64, reference_hz: f64) -> f64 {
    12.0 * (hz / reference_hz).log2()
}

/// Note name with octave for a MIDI number, rounded to the nearest note (e.g. 57.2 -> "A3")
pub fn midi_to_note_name(midi: f64) -> String {
    let note = midi.round() as i64;
    let pitch_class = note.rem_euclid(12) as usize;
    let octave = note.div_euclid(12) - 1;
    format!("{}{}", NOTE_NAMES[pitch_class], octave)
}
