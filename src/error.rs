//! # Error Types
//!
//! This module defines all error types for the chord notation engine.
//!
//! Parsing is the only fallible stage of the pipeline: once a [`Chord`](crate::Chord)
//! exists, deriving its tones and serializing it never fail.
//!
//! ## Error Types
//! - `EmptyInput` - The chord string was empty
//! - `InvalidNote` - The root token is not a valid note
//! - `InvalidChordSuffix` - A quality/interval or inversion segment is unrecognized
//! - `InvalidOctave` - A pitch was built outside octaves 0-9
//! - `PitchOutOfRange` - A derived tone has no MIDI note number
//! - `InvalidTempo` - Playback was requested at a tempo of zero
//! - `Config` - The YAML configuration is invalid
//! - `Io` - A configuration or input file could not be read
//! - `Encode` - Output could not be encoded
//!
//! ## Usage
//! ```rust
//! use chordal::{parse_chord, ChordError};
//!
//! match parse_chord("C:x") {
//!     Ok(chord) => println!("{}", chord),
//!     Err(ChordError::InvalidChordSuffix { segment, .. }) => {
//!         eprintln!("unknown chord suffix '{}'", segment);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChordError {
    /// The input string was empty (or only whitespace).
    ///
    /// # Example
    /// ```
    /// # use chordal::ChordError;
    /// assert_eq!(ChordError::EmptyInput.to_string(), "Illegal chord: missing note");
    /// ```
    #[error("Illegal chord: missing note")]
    EmptyInput,

    /// The leading note token could not be parsed.
    ///
    /// # Example
    /// ```
    /// # use chordal::ChordError;
    /// let err = ChordError::InvalidNote { token: "Z".to_string() };
    /// assert_eq!(err.to_string(), "Invalid note: 'Z'");
    /// ```
    #[error("Invalid note: '{token}'")]
    InvalidNote { token: String },

    /// A segment after the root was present but not recognized.
    ///
    /// # Example
    /// ```
    /// # use chordal::ChordError;
    /// let err = ChordError::InvalidChordSuffix {
    ///     segment: "x".to_string(),
    ///     input: "C:x".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Illegal chord suffix 'x' in [C:x]");
    /// ```
    #[error("Illegal chord suffix '{segment}' in [{input}]")]
    InvalidChordSuffix { segment: String, input: String },

    /// A written pitch must lie in octaves 0-9.
    ///
    /// # Example
    /// ```
    /// # use chordal::ChordError;
    /// assert_eq!(ChordError::InvalidOctave(12).to_string(), "Invalid octave: 12 (expected 0-9)");
    /// ```
    #[error("Invalid octave: {0} (expected 0-9)")]
    InvalidOctave(i8),

    /// A chord tone lies above or below the MIDI range 0-127.
    ///
    /// # Example
    /// ```
    /// # use chordal::ChordError;
    /// let err = ChordError::PitchOutOfRange { note: "B9".to_string() };
    /// assert_eq!(err.to_string(), "Pitch B9 is outside the MIDI range");
    /// ```
    #[error("Pitch {note} is outside the MIDI range")]
    PitchOutOfRange { note: String },

    /// Playback data cannot be generated at zero beats per minute.
    #[error("Invalid tempo: {0} bpm")]
    InvalidTempo(u16),

    /// Invalid configuration file.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A configuration or input file could not be read.
    #[error("Cannot read '{path}': {message}")]
    Io { path: String, message: String },

    /// Output could not be encoded.
    #[error("Cannot encode output: {0}")]
    Encode(String),
}
