//! # Note Primitive
//!
//! A single pitch or a rest. This is the building block chords are made of:
//! the chord root is a [`Note`], and every derived chord tone is a [`Note`].
//!
//! ## Token Grammar
//! ```text
//! note ::= letter accidental? octave?  |  "="
//! letter     ::= "A" | "B" | "C" | "D" | "E" | "F" | "G"
//! accidental ::= "#" | "b"
//! octave     ::= "0".."9"            (default 4)
//! ```
//!
//! ## Pitch Identity
//! A pitch is identified by its absolute semitone number
//! (`octave * 12 + letter + accidental`). Two pitches are equal when they sound
//! the same, regardless of how they were spelled: `C#4 == Db4`, and `Cb4`
//! is the same pitch as `B3`.
//!
//! ## Rendering
//! - [`Display`](std::fmt::Display) uses accidental glyphs and omits the default
//!   octave: `C`, `E♭`, `C♯5`
//! - [`Note::to_notation`] uses the ASCII token grammar so the result parses back

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::ChordError;
use crate::spelling;

/// Octave used when a note token does not name one.
pub const DEFAULT_OCTAVE: i8 = 4;

/// Lowest and highest octave a pitch may be written in.
pub const MIN_OCTAVE: i8 = 0;
pub const MAX_OCTAVE: i8 = 9;

/// Literal that denotes a rest.
pub const REST_LITERAL: &str = "=";

/// Note names A through G
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NoteName {
    #[default]
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteName {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(NoteName::C),
            'D' => Some(NoteName::D),
            'E' => Some(NoteName::E),
            'F' => Some(NoteName::F),
            'G' => Some(NoteName::G),
            'A' => Some(NoteName::A),
            'B' => Some(NoteName::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            NoteName::C => 'C',
            NoteName::D => 'D',
            NoteName::E => 'E',
            NoteName::F => 'F',
            NoteName::G => 'G',
            NoteName::A => 'A',
            NoteName::B => 'B',
        }
    }

    /// Semitone offset from C
    pub fn semitone(self) -> i16 {
        match self {
            NoteName::C => 0,
            NoteName::D => 2,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::G => 7,
            NoteName::A => 9,
            NoteName::B => 11,
        }
    }
}

/// Accidentals as authored: sharp, flat, or none
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Accidental {
    #[default]
    Natural,
    Sharp, // #
    Flat,  // b
}

impl Accidental {
    pub fn offset(self) -> i16 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }

    /// Display glyph (not part of the parse grammar)
    pub fn glyph(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "♯",
            Accidental::Flat => "♭",
        }
    }

    /// Token used by the parse grammar
    pub fn ascii(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }
}

/// A spelled pitch: note name, accidental and octave as written.
///
/// Equality and hashing only look at [`Pitch::absolute`], so enharmonic
/// spellings of the same pitch compare equal.
///
/// Written pitches are limited to octaves 0-9. Derived tones may sit a couple
/// of octaves higher; octave arithmetic saturates at the `i8` bounds.
#[derive(Debug, Clone, Copy)]
pub struct Pitch {
    name: NoteName,
    accidental: Accidental,
    octave: i8,
}

impl Pitch {
    /// Build a written pitch.
    ///
    /// # Errors
    /// Returns [`ChordError::InvalidOctave`] outside octaves 0-9.
    pub fn new(name: NoteName, accidental: Accidental, octave: i8) -> Result<Self, ChordError> {
        if !(MIN_OCTAVE..=MAX_OCTAVE).contains(&octave) {
            return Err(ChordError::InvalidOctave(octave));
        }
        Ok(Self {
            name,
            accidental,
            octave,
        })
    }

    /// Derived tones are not range checked
    pub(crate) fn derived(name: NoteName, accidental: Accidental, octave: i8) -> Self {
        Self {
            name,
            accidental,
            octave,
        }
    }

    pub fn name(&self) -> NoteName {
        self.name
    }

    pub fn accidental(&self) -> Accidental {
        self.accidental
    }

    pub fn octave(&self) -> i8 {
        self.octave
    }

    /// Absolute semitone number, C0 = 0
    pub fn absolute(&self) -> i16 {
        self.octave as i16 * 12 + self.name.semitone() + self.accidental.offset()
    }

    /// Semitone class 0-11 (0 = C)
    pub fn class(&self) -> u8 {
        self.absolute().rem_euclid(12) as u8
    }

    /// Octave the pitch sounds in, which differs from the written octave
    /// for spellings such as `Cb4` (sounds as B3) or `B#3` (sounds as C4).
    pub fn sounding_octave(&self) -> i16 {
        self.absolute().div_euclid(12)
    }
}

impl PartialEq for Pitch {
    fn eq(&self, other: &Self) -> bool {
        self.absolute() == other.absolute()
    }
}

impl Eq for Pitch {}

impl Hash for Pitch {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.absolute().hash(state);
    }
}

/// A pitch or a rest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Note {
    Pitch(Pitch),
    Rest,
}

impl Default for Note {
    fn default() -> Self {
        Note::Pitch(Pitch::derived(NoteName::C, Accidental::Natural, DEFAULT_OCTAVE))
    }
}

impl Note {
    pub fn is_rest(&self) -> bool {
        matches!(self, Note::Rest)
    }

    pub fn pitch(&self) -> Option<&Pitch> {
        match self {
            Note::Pitch(p) => Some(p),
            Note::Rest => None,
        }
    }

    /// Transpose by a number of semitones.
    ///
    /// The result is spelled through the spelling table, so the authored
    /// accidental is not carried over. Rests stay rests.
    ///
    /// # Example
    /// ```
    /// use chordal::parse_note;
    ///
    /// let d = parse_note("D").unwrap();
    /// assert_eq!(d.transpose(4).to_string(), "G♭");
    /// assert_eq!(d.transpose(10).to_string(), "C5");
    /// ```
    pub fn transpose(&self, semitones: i16) -> Note {
        match self {
            Note::Pitch(p) => Note::Pitch(spelling::spell(p.absolute().saturating_add(semitones))),
            Note::Rest => Note::Rest,
        }
    }

    /// Move by whole octaves keeping the authored spelling.
    pub fn shift_octaves(&self, octaves: i8) -> Note {
        match self {
            Note::Pitch(p) => Note::Pitch(Pitch {
                octave: p.octave.saturating_add(octaves),
                ..*p
            }),
            Note::Rest => Note::Rest,
        }
    }

    /// MIDI note number (C4 = 60). `None` for rests and for pitches
    /// outside the MIDI range 0-127.
    pub fn midi_number(&self) -> Option<u8> {
        self.pitch()
            .and_then(|p| u8::try_from(p.absolute() + 12).ok())
            .filter(|m| *m <= 127)
    }

    /// Render in the parseable token grammar (`C#5`, `Eb`, `=`).
    pub fn to_notation(&self) -> String {
        match self {
            Note::Pitch(p) => render(p, p.accidental.ascii()),
            Note::Rest => REST_LITERAL.to_string(),
        }
    }
}

fn render(pitch: &Pitch, accidental: &str) -> String {
    let mut s = String::new();
    s.push(pitch.name.as_char());
    s.push_str(accidental);
    if pitch.octave != DEFAULT_OCTAVE {
        s.push_str(&pitch.octave.to_string());
    }
    s
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Note::Pitch(p) => f.write_str(&render(p, p.accidental.glyph())),
            Note::Rest => f.write_str(REST_LITERAL),
        }
    }
}

/// Parse a single note token.
///
/// # Examples
/// ```
/// use chordal::{parse_note, Note};
///
/// assert_eq!(parse_note("C").unwrap().midi_number(), Some(60));
/// assert_eq!(parse_note("F#3").unwrap().midi_number(), Some(54));
/// assert_eq!(parse_note("=").unwrap(), Note::Rest);
/// assert!(parse_note("Z").is_err());
/// ```
pub fn parse_note(token: &str) -> Result<Note, ChordError> {
    let invalid = || ChordError::InvalidNote {
        token: token.to_string(),
    };

    if token == REST_LITERAL {
        return Ok(Note::Rest);
    }

    let mut chars = token.chars().peekable();

    let name = chars
        .next()
        .and_then(NoteName::from_char)
        .ok_or_else(invalid)?;

    let accidental = match chars.peek() {
        Some('#') => {
            chars.next();
            Accidental::Sharp
        }
        Some('b') => {
            chars.next();
            Accidental::Flat
        }
        _ => Accidental::Natural,
    };

    let octave = match chars.next() {
        Some(c) => c.to_digit(10).ok_or_else(invalid)? as i8,
        None => DEFAULT_OCTAVE,
    };

    if chars.next().is_some() {
        return Err(invalid());
    }

    let pitch = Pitch::new(name, accidental, octave).map_err(|_| invalid())?;
    Ok(Note::Pitch(pitch))
}

impl FromStr for Note {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_note(s)
    }
}
