//! Pitch-spelling table for derived chord tones.
//!
//! Black keys are always spelled with a flat (`E♭`, `G♭`, `A♭`, `B♭`, `D♭`),
//! white keys as naturals. A chord root never goes through this table; it keeps
//! the spelling it was typed with.

use crate::note::{Accidental, NoteName, Pitch};

/// Note name and accidental for a semitone class
/// 0=C, 1=Db, 2=D, 3=Eb, 4=E, 5=F, 6=Gb, 7=G, 8=Ab, 9=A, 10=Bb, 11=B
pub fn spelling_for_class(class: u8) -> (NoteName, Accidental) {
    match class % 12 {
        0 => (NoteName::C, Accidental::Natural),
        1 => (NoteName::D, Accidental::Flat),
        2 => (NoteName::D, Accidental::Natural),
        3 => (NoteName::E, Accidental::Flat),
        4 => (NoteName::E, Accidental::Natural),
        5 => (NoteName::F, Accidental::Natural),
        6 => (NoteName::G, Accidental::Flat),
        7 => (NoteName::G, Accidental::Natural),
        8 => (NoteName::A, Accidental::Flat),
        9 => (NoteName::A, Accidental::Natural),
        10 => (NoteName::B, Accidental::Flat),
        11 => (NoteName::B, Accidental::Natural),
        _ => unreachable!(),
    }
}

/// Spell an absolute semitone number (C0 = 0) as a pitch.
pub fn spell(absolute: i16) -> Pitch {
    let class = absolute.rem_euclid(12) as u8;
    // Every spelling in the table stays inside its own octave, so the
    // written octave is the sounding octave.
    let octave = absolute.div_euclid(12);
    let octave = i8::try_from(octave).unwrap_or(if octave < 0 { i8::MIN } else { i8::MAX });
    let (name, accidental) = spelling_for_class(class);
    Pitch::derived(name, accidental, octave)
}
