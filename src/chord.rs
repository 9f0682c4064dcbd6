//! # Chord Model
//!
//! A chord symbol is a root [`Note`] plus three closed choices:
//!
//! ```text
//! Chord
//!   ├── root: Note            (pitch or rest, spelled as typed)
//!   ├── quality: Quality      (M, m, D, A, o)
//!   ├── interval: IntervalClass (triad, 6, 7)
//!   └── inversion: Inversion  (ground, 1, 2, 3)
//! ```
//!
//! Chords are small `Copy` values. "Changing" a chord means building a new one
//! with [`Chord::with_modifiers`].

use std::fmt;
use std::str::FromStr;

use crate::error::ChordError;
use crate::note::Note;

/// Harmonic flavor of the chord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Quality {
    #[default]
    Major, // M
    Minor,      // m
    Dominant,   // D
    Augmented,  // A
    Diminished, // o
}

impl Quality {
    pub const ALL: [Quality; 5] = [
        Quality::Major,
        Quality::Minor,
        Quality::Dominant,
        Quality::Augmented,
        Quality::Diminished,
    ];

    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'M' => Some(Quality::Major),
            'm' => Some(Quality::Minor),
            'D' => Some(Quality::Dominant),
            'A' => Some(Quality::Augmented),
            'o' => Some(Quality::Diminished),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Quality::Major => 'M',
            Quality::Minor => 'm',
            Quality::Dominant => 'D',
            Quality::Augmented => 'A',
            Quality::Diminished => 'o',
        }
    }
}

/// Extension tones added above the triad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IntervalClass {
    #[default]
    Triad,
    Sixth,   // 6
    Seventh, // 7
}

impl IntervalClass {
    pub const ALL: [IntervalClass; 3] = [
        IntervalClass::Triad,
        IntervalClass::Sixth,
        IntervalClass::Seventh,
    ];

    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '6' => Some(IntervalClass::Sixth),
            '7' => Some(IntervalClass::Seventh),
            _ => None,
        }
    }

    /// Grammar digit; the triad has none
    pub fn digit(self) -> Option<char> {
        match self {
            IntervalClass::Triad => None,
            IntervalClass::Sixth => Some('6'),
            IntervalClass::Seventh => Some('7'),
        }
    }
}

/// How many of the lowest root-position tones move up an octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Inversion {
    #[default]
    Ground,
    First,  // 1
    Second, // 2
    Third,  // 3
}

impl Inversion {
    pub const ALL: [Inversion; 4] = [
        Inversion::Ground,
        Inversion::First,
        Inversion::Second,
        Inversion::Third,
    ];

    /// Accepts `0`-`3`; `0` is the ground position
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '0' => Some(Inversion::Ground),
            '1' => Some(Inversion::First),
            '2' => Some(Inversion::Second),
            '3' => Some(Inversion::Third),
            _ => None,
        }
    }

    /// Grammar digit; the ground position has none
    pub fn digit(self) -> Option<char> {
        match self {
            Inversion::Ground => None,
            Inversion::First => Some('1'),
            Inversion::Second => Some('2'),
            Inversion::Third => Some('3'),
        }
    }

    /// Number of tones rotated up an octave
    pub fn rotation(self) -> usize {
        match self {
            Inversion::Ground => 0,
            Inversion::First => 1,
            Inversion::Second => 2,
            Inversion::Third => 3,
        }
    }
}

/// Overrides accepted by [`Chord::with_modifiers`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Quality(Quality),
    Inversion(Inversion),
}

impl From<Quality> for Modifier {
    fn from(q: Quality) -> Self {
        Modifier::Quality(q)
    }
}

impl From<Inversion> for Modifier {
    fn from(i: Inversion) -> Self {
        Modifier::Inversion(i)
    }
}

/// A chord symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Chord {
    root: Note,
    quality: Quality,
    interval: IntervalClass,
    inversion: Inversion,
}

impl Chord {
    pub fn new(root: Note, quality: Quality, interval: IntervalClass, inversion: Inversion) -> Self {
        Self {
            root,
            quality,
            interval,
            inversion,
        }
    }

    /// Major triad in ground position on the given root
    pub fn triad(root: Note) -> Self {
        Self {
            root,
            ..Self::default()
        }
    }

    pub fn root(&self) -> Note {
        self.root
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    pub fn interval(&self) -> IntervalClass {
        self.interval
    }

    pub fn inversion(&self) -> Inversion {
        self.inversion
    }

    /// Return a copy with the given quality and/or inversion overrides applied.
    /// Later modifiers win over earlier ones.
    ///
    /// # Example
    /// ```
    /// use chordal::{parse_chord, Inversion, Quality};
    ///
    /// let c = parse_chord("C").unwrap();
    /// let cm = c.with_modifiers(&[Quality::Minor.into(), Inversion::First.into()]);
    /// assert_eq!(cm.to_string(), "C:m:1");
    /// assert_eq!(c.to_string(), "C");
    /// ```
    pub fn with_modifiers(&self, modifiers: &[Modifier]) -> Chord {
        let mut modified = *self;
        for each in modifiers {
            match *each {
                Modifier::Quality(q) => modified.quality = q,
                Modifier::Inversion(i) => modified.inversion = i,
            }
        }
        modified
    }
}

/// Bare grammar form: `C`, `C:m7`, `C#:M:1`, `E:D7:2`
impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root.to_notation())?;

        let mut suffix = String::new();
        if self.quality != Quality::Major {
            suffix.push(self.quality.letter());
        }
        if let Some(d) = self.interval.digit() {
            suffix.push(d);
        }

        match self.inversion.digit() {
            Some(inv) => {
                if suffix.is_empty() {
                    suffix.push(Quality::Major.letter());
                }
                write!(f, ":{}:{}", suffix, inv)
            }
            None if suffix.is_empty() => Ok(()),
            None => write!(f, ":{}", suffix),
        }
    }
}

impl FromStr for Chord {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_chord(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::parse_note;

    fn c() -> Chord {
        Chord::triad(parse_note("C").unwrap())
    }

    #[test]
    fn test_default_is_c_major_triad() {
        let chord = Chord::default();
        assert_eq!(chord.root(), parse_note("C").unwrap());
        assert_eq!(chord.quality(), Quality::Major);
        assert_eq!(chord.interval(), IntervalClass::Triad);
        assert_eq!(chord.inversion(), Inversion::Ground);
    }

    #[test]
    fn test_letters_round_trip() {
        for q in Quality::ALL {
            assert_eq!(Quality::from_letter(q.letter()), Some(q));
        }
        assert_eq!(Quality::from_letter('x'), None);
    }

    #[test]
    fn test_digits_round_trip() {
        for i in IntervalClass::ALL {
            if let Some(d) = i.digit() {
                assert_eq!(IntervalClass::from_digit(d), Some(i));
            }
        }
        for inv in Inversion::ALL {
            if let Some(d) = inv.digit() {
                assert_eq!(Inversion::from_digit(d), Some(inv));
            }
        }
        assert_eq!(Inversion::from_digit('0'), Some(Inversion::Ground));
        assert_eq!(Inversion::from_digit('4'), None);
    }

    #[test]
    fn test_with_modifiers_overrides_only_given_fields() {
        let base = Chord::new(
            parse_note("E").unwrap(),
            Quality::Dominant,
            IntervalClass::Seventh,
            Inversion::Ground,
        );
        let modified = base.with_modifiers(&[Modifier::Inversion(Inversion::Second)]);
        assert_eq!(modified.quality(), Quality::Dominant);
        assert_eq!(modified.interval(), IntervalClass::Seventh);
        assert_eq!(modified.inversion(), Inversion::Second);
        assert_eq!(modified.root(), base.root());
        // input untouched
        assert_eq!(base.inversion(), Inversion::Ground);
    }

    #[test]
    fn test_with_modifiers_last_wins() {
        let modified = c().with_modifiers(&[Quality::Minor.into(), Quality::Augmented.into()]);
        assert_eq!(modified.quality(), Quality::Augmented);
    }

    #[test]
    fn test_with_no_modifiers_is_identity() {
        assert_eq!(c().with_modifiers(&[]), c());
    }

    #[test]
    fn test_display() {
        assert_eq!(c().to_string(), "C");
        assert_eq!(
            c().with_modifiers(&[Quality::Minor.into()]).to_string(),
            "C:m"
        );
        assert_eq!(
            Chord::new(c().root(), Quality::Major, IntervalClass::Seventh, Inversion::Ground)
                .to_string(),
            "C:7"
        );
        assert_eq!(
            c().with_modifiers(&[Inversion::First.into()]).to_string(),
            "C:M:1"
        );
        assert_eq!(
            Chord::new(
                parse_note("Eb3").unwrap(),
                Quality::Diminished,
                IntervalClass::Sixth,
                Inversion::Third
            )
            .to_string(),
            "Eb3:o6:3"
        );
        assert_eq!(Chord::triad(Note::Rest).to_string(), "=");
    }
}
