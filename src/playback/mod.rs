//! # Playback Module
//!
//! Turn derived chord voicings into MIDI playback data for the audio layer.
//!
//! ## Purpose
//! The scheduler that actually plays notes lives outside this crate. It accepts
//! ordered groups of simultaneous pitches and a tempo; this module produces
//! exactly that, as plain serializable data.
//!
//! ## Sub-modules
//! - `types` - PlaybackData, PlaybackChord type definitions
//! - `engine` - Conversion from note sequences to playback data
//!
//! ## Entry Points
//! - [`generate_playback_data()`] - Parse a chord symbol and build its playback data
//! - [`sequence_playback_data()`] - Build playback data for an existing sequence
//!
//! ## Example
//! ```rust
//! use chordal::playback::generate_playback_data;
//!
//! let data = generate_playback_data("C:m7", 120).unwrap();
//!
//! assert_eq!(data.tempo, 120);
//! assert_eq!(data.chords.len(), 1);
//! assert_eq!(data.chords[0].midi_notes, vec![60, 63, 67, 70]);
//! ```
//!
//! ## Timing
//! Every pitch group lasts one beat and groups follow each other without gaps.
//! A rest group advances time by one beat but produces no chord.

mod engine;
mod types;


pub use engine::{generate_playback_data, sequence_playback_data};
pub use types::{PlaybackChord, PlaybackData};
