//! Pitch groups and note sequences.
//!
//! A [`PitchGroup`] is a set of notes sounding together, in ascending order for
//! derived chords. A [`NoteSequence`] is an ordered list of groups and is the
//! shape handed to playback.

use std::fmt;

use crate::note::Note;

/// Notes sounding together
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PitchGroup {
    notes: Vec<Note>,
}

impl PitchGroup {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    /// MIDI numbers of all pitched notes; rests and pitches outside the
    /// MIDI range are skipped
    pub fn midi_numbers(&self) -> Vec<u8> {
        self.notes.iter().filter_map(Note::midi_number).collect()
    }
}

impl From<Vec<Note>> for PitchGroup {
    fn from(notes: Vec<Note>) -> Self {
        Self::new(notes)
    }
}

impl<'a> IntoIterator for &'a PitchGroup {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

/// `(C E G)`, or the bare note for a single-note group
impl fmt::Display for PitchGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let [single] = self.notes.as_slice() {
            return write!(f, "{}", single);
        }
        let inner: Vec<String> = self.notes.iter().map(|n| n.to_string()).collect();
        write!(f, "({})", inner.join(" "))
    }
}

/// Ordered pitch groups
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NoteSequence {
    groups: Vec<PitchGroup>,
}

impl NoteSequence {
    pub fn new(groups: Vec<PitchGroup>) -> Self {
        Self { groups }
    }

    /// A sequence with exactly one group
    pub fn single(group: PitchGroup) -> Self {
        Self {
            groups: vec![group],
        }
    }

    pub fn groups(&self) -> &[PitchGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Concatenate two sequences into a new one
    pub fn followed_by(&self, other: &NoteSequence) -> NoteSequence {
        let mut groups = self.groups.clone();
        groups.extend(other.groups.iter().cloned());
        NoteSequence { groups }
    }
}

impl FromIterator<PitchGroup> for NoteSequence {
    fn from_iter<I: IntoIterator<Item = PitchGroup>>(iter: I) -> Self {
        Self {
            groups: iter.into_iter().collect(),
        }
    }
}

/// Groups separated by spaces: `(C E G) (F A C5)`
impl fmt::Display for NoteSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner: Vec<String> = self.groups.iter().map(|g| g.to_string()).collect();
        f.write_str(&inner.join(" "))
    }
}
