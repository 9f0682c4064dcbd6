//! Playback data generation engine

use tracing::debug;

use super::types::{PlaybackChord, PlaybackData};
use crate::error::ChordError;
use crate::note::Note;
use crate::parser::parse_chord;
use crate::sequence::{NoteSequence, PitchGroup};

/// Beats each pitch group lasts
const GROUP_BEATS: f64 = 1.0;

/// Build playback data for a note sequence at the given tempo.
///
/// # Errors
/// - [`ChordError::InvalidTempo`] when `tempo` is zero
/// - [`ChordError::PitchOutOfRange`] when a tone has no MIDI note number
pub fn sequence_playback_data(
    sequence: &NoteSequence,
    tempo: u16,
) -> Result<PlaybackData, ChordError> {
    if tempo == 0 {
        return Err(ChordError::InvalidTempo(tempo));
    }

    let mut chords = Vec::new();
    let mut current_time = 0.0;

    for group in sequence.groups() {
        let midi_notes = group_midi_notes(group)?;
        // Rests only advance time
        if !midi_notes.is_empty() {
            chords.push(PlaybackChord {
                midi_notes,
                start_time: current_time,
                duration: GROUP_BEATS,
            });
        }
        current_time += GROUP_BEATS;
    }

    debug!(
        groups = sequence.len(),
        chords = chords.len(),
        tempo,
        "generated playback data"
    );

    Ok(PlaybackData {
        tempo,
        chords,
        total_beats: current_time,
    })
}

/// MIDI notes of a group; rests contribute nothing
fn group_midi_notes(group: &PitchGroup) -> Result<Vec<u8>, ChordError> {
    let mut midi_notes = Vec::with_capacity(group.len());
    for note in group {
        if let Note::Pitch(_) = note {
            let midi = note.midi_number().ok_or_else(|| ChordError::PitchOutOfRange {
                note: note.to_string(),
            })?;
            midi_notes.push(midi);
        }
    }
    Ok(midi_notes)
}

/// Parse a chord symbol, derive its voicing and build playback data for it.
pub fn generate_playback_data(source: &str, tempo: u16) -> Result<PlaybackData, ChordError> {
    let chord = parse_chord(source)?;
    sequence_playback_data(&chord.derive(), tempo)
}
