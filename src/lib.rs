//! # chordal
//!
//! Textual notation engine for tonal chords.
//!
//! ## Pipeline
//! ```text
//! "E:D7:2" ──parse_chord──▶ Chord ──derive──▶ NoteSequence ──store_text──▶ "('(B D5 E5 A♭5)')"
//! ```
//!
//! Every stage works on immutable values and has no shared state, so all of it
//! may be called from any number of threads at once.

pub mod chord;
pub mod config;
pub mod error;
pub mod note;
pub mod parser;
pub mod playback;
pub mod sequence;
pub mod spelling;
pub mod storable;
pub mod voicing;

pub use chord::{Chord, IntervalClass, Inversion, Modifier, Quality};
pub use error::ChordError;
pub use note::{parse_note, Accidental, Note, NoteName, Pitch};
pub use parser::parse_chord;
pub use sequence::{NoteSequence, PitchGroup};
pub use storable::Storable;
pub use voicing::derive_tones;

/// Parse a chord symbol and derive its voicing.
/// This is the main entry point for the library.
///
/// # Example
/// ```
/// use chordal::{chord_tones, Storable};
///
/// let seq = chord_tones("C:m7").unwrap();
/// assert_eq!(seq.store_text(), "('(C E♭ G B♭)')");
/// ```
pub fn chord_tones(source: &str) -> Result<NoteSequence, ChordError> {
    Ok(parse_chord(source)?.derive())
}
