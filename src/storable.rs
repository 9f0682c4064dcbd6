//! Round-trip text forms.
//!
//! [`Storable::store_text`] renders a value the way it is printed by the REPL
//! and written into saved programs:
//!
//! - chord: `chord('E:D7:2')`, parses back to the same chord
//! - note sequence: `('(C E♭ G B♭)')`

use crate::chord::Chord;
use crate::note::Note;
use crate::sequence::{NoteSequence, PitchGroup};

/// Values with a canonical stored text form
pub trait Storable {
    fn store_text(&self) -> String;
}

impl Storable for Chord {
    /// # Example
    /// ```
    /// use chordal::{parse_chord, Storable};
    ///
    /// assert_eq!(parse_chord("C").unwrap().store_text(), "chord('C')");
    /// assert_eq!(parse_chord("C#:m7:1").unwrap().store_text(), "chord('C#:m7:1')");
    /// ```
    fn store_text(&self) -> String {
        format!("chord('{}')", self)
    }
}

impl Storable for Note {
    fn store_text(&self) -> String {
        format!("note('{}')", self.to_notation())
    }
}

impl Storable for PitchGroup {
    fn store_text(&self) -> String {
        format!("('{}')", self)
    }
}

impl Storable for NoteSequence {
    /// # Example
    /// ```
    /// use chordal::{parse_chord, Storable};
    ///
    /// let seq = parse_chord("C:m7").unwrap().derive();
    /// assert_eq!(seq.store_text(), "('(C E♭ G B♭)')");
    /// ```
    fn store_text(&self) -> String {
        format!("('{}')", self)
    }
}
