//! # Chord Grammar Parser
//!
//! ```text
//! chord     ::= note (":" suffix (":" inversion)?)?
//! suffix    ::= quality? interval?        (at least one present)
//!             | "1" | "2" | "3"           (inversion of a major triad)
//! quality   ::= "M" | "m" | "D" | "A" | "o"
//! interval  ::= "6" | "7"
//! inversion ::= "0" | "1" | "2" | "3" | ""
//! ```
//!
//! Missing pieces default to Major, Triad and Ground. An inversion in the third
//! segment wins over one given as the second segment.
//!
//! ## Examples
//! - `C` → C major triad
//! - `C:m7` → C minor seventh
//! - `E:D7:2` → E dominant seventh, second inversion
//! - `C#:1` → C♯ major triad, first inversion
//! - `=` → rest

use tracing::debug;

use crate::chord::{Chord, IntervalClass, Inversion, Quality};
use crate::error::ChordError;
use crate::note::parse_note;

/// Segment separator of the chord grammar
pub const SEPARATOR: char = ':';

/// Parse a chord symbol.
///
/// # Examples
/// ```
/// use chordal::{parse_chord, IntervalClass, Inversion, Quality};
///
/// let chord = parse_chord("E:D7:2").unwrap();
/// assert_eq!(chord.quality(), Quality::Dominant);
/// assert_eq!(chord.interval(), IntervalClass::Seventh);
/// assert_eq!(chord.inversion(), Inversion::Second);
/// ```
///
/// # Errors
/// - [`ChordError::EmptyInput`] for an empty string
/// - [`ChordError::InvalidNote`] when the root token is not a note
/// - [`ChordError::InvalidChordSuffix`] when a later segment is not recognized
pub fn parse_chord(input: &str) -> Result<Chord, ChordError> {
    let source = input.trim();
    if source.is_empty() {
        return Err(ChordError::EmptyInput);
    }

    let mut parts = source.split(SEPARATOR);
    // split always yields at least one item
    let root = parse_note(parts.next().unwrap_or_default())?;

    let Some(suffix) = parts.next() else {
        return Ok(Chord::triad(root));
    };

    let illegal = |segment: &str| ChordError::InvalidChordSuffix {
        segment: segment.to_string(),
        input: source.to_string(),
    };

    let (quality, interval, mut inversion) = parse_suffix(suffix).ok_or_else(|| illegal(suffix))?;

    if let Some(segment) = parts.next() {
        inversion = parse_inversion(segment).ok_or_else(|| illegal(segment))?;
    }

    if let Some(extra) = parts.next() {
        return Err(illegal(extra));
    }

    debug!(
        input = source,
        ?quality,
        ?interval,
        ?inversion,
        "parsed chord"
    );
    Ok(Chord::new(root, quality, interval, inversion))
}

/// Second segment: quality letter and/or interval digit, or a lone inversion digit
fn parse_suffix(segment: &str) -> Option<(Quality, IntervalClass, Inversion)> {
    if let Some(inversion) = lone_inversion(segment) {
        return Some((Quality::Major, IntervalClass::Triad, inversion));
    }

    let mut chars = segment.chars().peekable();

    let quality = match chars.peek().copied().and_then(Quality::from_letter) {
        Some(q) => {
            chars.next();
            Some(q)
        }
        None => None,
    };

    let interval = match chars.peek().copied().and_then(IntervalClass::from_digit) {
        Some(i) => {
            chars.next();
            Some(i)
        }
        None => None,
    };

    // Trailing garbage, or neither piece present
    if chars.next().is_some() || (quality.is_none() && interval.is_none()) {
        return None;
    }

    Some((
        quality.unwrap_or_default(),
        interval.unwrap_or_default(),
        Inversion::Ground,
    ))
}

fn lone_inversion(segment: &str) -> Option<Inversion> {
    match segment {
        "1" => Some(Inversion::First),
        "2" => Some(Inversion::Second),
        "3" => Some(Inversion::Third),
        _ => None,
    }
}

/// Third segment: `0`-`3`, empty for ground
fn parse_inversion(segment: &str) -> Option<Inversion> {
    let mut chars = segment.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Some(Inversion::Ground),
        (Some(c), None) => Inversion::from_digit(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::{Note, parse_note};

    fn parts(s: &str) -> (Quality, IntervalClass, Inversion) {
        let c = parse_chord(s).unwrap();
        (c.quality(), c.interval(), c.inversion())
    }

    fn illegal(segment: &str, input: &str) -> ChordError {
        ChordError::InvalidChordSuffix {
            segment: segment.to_string(),
            input: input.to_string(),
        }
    }

    #[test]
    fn test_root_only() {
        let c = parse_chord("C").unwrap();
        assert_eq!(c.root(), parse_note("C").unwrap());
        assert_eq!(
            parts("C"),
            (Quality::Major, IntervalClass::Triad, Inversion::Ground)
        );
    }

    #[test]
    fn test_quality_letters() {
        assert_eq!(parts("C:M").0, Quality::Major);
        assert_eq!(parts("C:m").0, Quality::Minor);
        assert_eq!(parts("C:D").0, Quality::Dominant);
        assert_eq!(parts("C:A").0, Quality::Augmented);
        assert_eq!(parts("C:o").0, Quality::Diminished);
    }

    #[test]
    fn test_quality_with_interval() {
        assert_eq!(
            parts("C:m7"),
            (Quality::Minor, IntervalClass::Seventh, Inversion::Ground)
        );
        assert_eq!(
            parts("C:M7"),
            (Quality::Major, IntervalClass::Seventh, Inversion::Ground)
        );
        assert_eq!(
            parts("C:o7"),
            (Quality::Diminished, IntervalClass::Seventh, Inversion::Ground)
        );
        assert_eq!(
            parts("C:A6"),
            (Quality::Augmented, IntervalClass::Sixth, Inversion::Ground)
        );
    }

    #[test]
    fn test_interval_without_letter_defaults_to_major() {
        assert_eq!(
            parts("C:7"),
            (Quality::Major, IntervalClass::Seventh, Inversion::Ground)
        );
        assert_eq!(
            parts("C:6"),
            (Quality::Major, IntervalClass::Sixth, Inversion::Ground)
        );
    }

    #[test]
    fn test_three_segments() {
        assert_eq!(
            parts("E:D7:2"),
            (Quality::Dominant, IntervalClass::Seventh, Inversion::Second)
        );
        assert_eq!(
            parts("E:m:2"),
            (Quality::Minor, IntervalClass::Triad, Inversion::Second)
        );
        assert_eq!(parts("C:M6:3").2, Inversion::Third);
    }

    #[test]
    fn test_inversion_as_second_segment() {
        assert_eq!(
            parts("C#:1"),
            (Quality::Major, IntervalClass::Triad, Inversion::First)
        );
    }

    #[test]
    fn test_third_segment_overrides_second() {
        assert_eq!(parts("C:1:2").2, Inversion::Second);
        assert_eq!(parts("C:2:0").2, Inversion::Ground);
        assert_eq!(parts("C:3:").2, Inversion::Ground);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_chord(""), Err(ChordError::EmptyInput));
        assert_eq!(parse_chord("   "), Err(ChordError::EmptyInput));
    }

    #[test]
    fn test_invalid_note() {
        assert_eq!(
            parse_chord("Z"),
            Err(ChordError::InvalidNote {
                token: "Z".to_string()
            })
        );
        assert_eq!(
            parse_chord(":m7"),
            Err(ChordError::InvalidNote {
                token: "".to_string()
            })
        );
        // slash is not a separator
        assert!(matches!(
            parse_chord("C/m7"),
            Err(ChordError::InvalidNote { .. })
        ));
    }

    #[test]
    fn test_invalid_suffix() {
        assert_eq!(parse_chord("C:"), Err(illegal("", "C:")));
        assert_eq!(parse_chord("C:x"), Err(illegal("x", "C:x")));
        assert_eq!(parse_chord("C:m7x"), Err(illegal("m7x", "C:m7x")));
        assert_eq!(parse_chord("C:7m"), Err(illegal("7m", "C:7m")));
        assert_eq!(parse_chord("C:4"), Err(illegal("4", "C:4")));
        assert_eq!(parse_chord("C:m:9"), Err(illegal("9", "C:m:9")));
        assert_eq!(parse_chord("C:m:12"), Err(illegal("12", "C:m:12")));
        assert_eq!(parse_chord("C:m:1:2"), Err(illegal("2", "C:m:1:2")));
    }

    #[test]
    fn test_rest_root() {
        let c = parse_chord("=:m7:1").unwrap();
        assert_eq!(c.root(), Note::Rest);
        assert_eq!(c.quality(), Quality::Minor);
        assert_eq!(c.inversion(), Inversion::First);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(parse_chord("  C:m7 ").unwrap(), parse_chord("C:m7").unwrap());
    }

    #[test]
    fn test_parse_is_deterministic() {
        for s in ["C", "E:D7:2", "Bb3:o6:1", "="] {
            assert_eq!(parse_chord(s), parse_chord(s));
        }
    }
}
