//! # Tone Derivation
//!
//! Turns a [`Chord`] into the notes that sound.
//!
//! ## Steps
//! 1. A rest root short-circuits to a group holding only the rest
//! 2. Look up root-position semitone offsets for `(quality, interval)`
//! 3. Transpose the root by each offset (derived tones are flat-spelled,
//!    the root keeps its own spelling)
//! 4. Move the lowest `k` tones up one octave for the k-th inversion and
//!    sort ascending
//!
//! ## Offsets
//! ```text
//!              Triad    Sixth      Seventh
//! Major        0 4 7    0 4 7 9    0 4 7 11
//! Minor        0 3 7    0 3 7 9    0 3 7 10
//! Dominant     0 4 7    0 4 7 9    0 4 7 10
//! Augmented    0 4 8    0 4 8 9    0 4 8 11
//! Diminished   0 3 6    0 3 6 9    0 3 6 9
//! ```
//! A third inversion of a triad rotates all three tones, which yields the
//! root-position voicing one octave up.

use tracing::trace;

use crate::chord::{Chord, IntervalClass, Quality};
use crate::note::Note;
use crate::sequence::{NoteSequence, PitchGroup};

/// Root-position semitone offsets above the root
pub fn semitone_offsets(quality: Quality, interval: IntervalClass) -> &'static [i16] {
    use IntervalClass::*;
    use Quality::*;

    match (quality, interval) {
        (Major, Triad) => &[0, 4, 7],
        (Major, Sixth) => &[0, 4, 7, 9],
        (Major, Seventh) => &[0, 4, 7, 11],

        (Minor, Triad) => &[0, 3, 7],
        (Minor, Sixth) => &[0, 3, 7, 9],
        (Minor, Seventh) => &[0, 3, 7, 10],

        // Same triad as major; only the seventh differs
        (Dominant, Triad) => &[0, 4, 7],
        (Dominant, Sixth) => &[0, 4, 7, 9],
        (Dominant, Seventh) => &[0, 4, 7, 10],

        (Augmented, Triad) => &[0, 4, 8],
        (Augmented, Sixth) => &[0, 4, 8, 9],
        (Augmented, Seventh) => &[0, 4, 8, 11],

        // Seventh is the fully diminished chord
        (Diminished, Triad) => &[0, 3, 6],
        (Diminished, Sixth) => &[0, 3, 6, 9],
        (Diminished, Seventh) => &[0, 3, 6, 9],
    }
}

/// Root-position tones of a chord, lowest first.
fn root_position(chord: &Chord) -> Vec<Note> {
    let root = chord.root();
    semitone_offsets(chord.quality(), chord.interval())
        .iter()
        .map(|&offset| if offset == 0 { root } else { root.transpose(offset) })
        .collect()
}

/// Derive the voicing of a chord as a single pitch group.
///
/// # Examples
/// ```
/// use chordal::{derive_tones, parse_chord};
///
/// let group = derive_tones(&parse_chord("E:m:2").unwrap());
/// assert_eq!(group.to_string(), "(B E5 G5)");
/// ```
pub fn derive_tones(chord: &Chord) -> PitchGroup {
    let root = chord.root();
    if root.is_rest() {
        return PitchGroup::new(vec![root]);
    }

    let mut tones = root_position(chord);
    let rotation = chord.inversion().rotation().min(tones.len());
    trace!(
        chord = %chord,
        tones = tones.len(),
        rotation,
        "deriving chord tones"
    );

    for tone in tones.iter_mut().take(rotation) {
        *tone = tone.shift_octaves(1);
    }
    // Stable sort; pitches compare by their absolute semitone
    tones.sort_by_key(|n| n.pitch().map(|p| p.absolute()));

    PitchGroup::new(tones)
}

impl Chord {
    /// The chord's voicing as a single pitch group
    pub fn tones(&self) -> PitchGroup {
        derive_tones(self)
    }

    /// The chord as a one-group note sequence for playback
    pub fn derive(&self) -> NoteSequence {
        NoteSequence::single(derive_tones(self))
    }
}
