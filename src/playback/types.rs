//! Playback data type definitions

use serde::Serialize;

/// Notes played together
///
/// # Fields
/// - `midi_notes`: MIDI note numbers (C4 = 60), lowest first
/// - `start_time`: Time in beats from the start of the sequence
/// - `duration`: Duration in beats
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackChord {
    pub midi_notes: Vec<u8>,
    pub start_time: f64,
    pub duration: f64,
}

/// Playback data for a whole note sequence
///
/// # Fields
/// - `tempo`: Tempo in BPM (beat = quarter note)
/// - `chords`: One entry per sounding pitch group
/// - `total_beats`: Length of the sequence in beats, rests included
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackData {
    pub tempo: u16,
    pub chords: Vec<PlaybackChord>,
    pub total_beats: f64,
}

impl PlaybackData {
    /// Length of the sequence in seconds at its tempo
    pub fn total_seconds(&self) -> f64 {
        self.total_beats * 60.0 / self.tempo as f64
    }
}
