//! Key signature table: which letter names carry an accidental in each of
//! the 15 major keys, and whether it is a sharp or a flat.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StaffError};
use crate::model::KeySignature;

pub const NUM_KEY_SIGNATURES: usize = 15;

/// Indexed by key ordinal, then by letter slot C, D, E, F, G, A, B.
const KEY_SIGNATURE_ACCIDENTALS: [[bool; 7]; NUM_KEY_SIGNATURES] = [
    [false, false, false, false, false, false, false], // C
    [false, false, false, true, false, false, false],  // G: F#
    [true, false, false, true, false, false, false],   // D: F# C#
    [true, false, false, true, true, false, false],    // A: F# C# G#
    [true, true, false, true, true, false, false],     // E: F# C# G# D#
    [true, true, false, true, true, true, false],      // B: F# C# G# D# A#
    [true, true, true, true, true, true, false],       // F#: F# C# G# D# A# E#
    [true, true, true, true, true, true, true],        // C#: all seven
    [false, false, false, false, false, false, true],  // F: Bb
    [false, false, true, false, false, false, true],   // Bb: Bb Eb
    [false, false, true, false, false, true, true],    // Eb: Bb Eb Ab
    [false, true, true, false, false, true, true],     // Ab: Bb Eb Ab Db
    [false, true, true, false, true, true, true],      // Db: Bb Eb Ab Db Gb
    [true, true, true, false, true, true, true],       // Gb: Bb Eb Ab Db Gb Cb
    [true, true, true, true, true, true, true],        // Cb: all seven
];

const KEY_SIGNATURE_IS_SHARP: [[bool; 7]; NUM_KEY_SIGNATURES] = [
    [false, false, false, false, false, false, false],
    [false, false, false, true, false, false, false],
    [true, false, false, true, false, false, false],
    [true, false, false, true, true, false, false],
    [true, true, false, true, true, false, false],
    [true, true, false, true, true, true, false],
    [true, true, true, true, true, true, false],
    [true, true, true, true, true, true, true],
    [false; 7],
    [false; 7],
    [false; 7],
    [false; 7],
    [false; 7],
    [false; 7],
    [false; 7],
];

/// Order in which sharps are added: F, C, G, D, A, E, B (letter slots).
pub const SHARP_ORDER: [u8; 7] = [3, 0, 4, 1, 5, 2, 6];
/// Order in which flats are added: B, E, A, D, G, C, F (letter slots).
pub const FLAT_ORDER: [u8; 7] = [6, 2, 5, 1, 4, 0, 3];

/// Key-signature state of one letter name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyAccidental {
    pub present: bool,
    pub is_sharp: bool,
}

/// Look up whether `white_key_class` (C=0 .. B=6) is altered in `key`.
/// Slots past B are reported as unaltered.
pub fn accidental_for(key: KeySignature, white_key_class: u8) -> KeyAccidental {
    let slot = white_key_class as usize;
    if slot >= 7 {
        return KeyAccidental { present: false, is_sharp: false };
    }
    let k = key.ordinal() as usize;
    KeyAccidental {
        present: KEY_SIGNATURE_ACCIDENTALS[k][slot],
        is_sharp: KEY_SIGNATURE_IS_SHARP[k][slot],
    }
}

impl KeySignature {
    pub const ALL: [KeySignature; NUM_KEY_SIGNATURES] = [
        KeySignature::CMajor,
        KeySignature::GMajor,
        KeySignature::DMajor,
        KeySignature::AMajor,
        KeySignature::EMajor,
        KeySignature::BMajor,
        KeySignature::FSharpMajor,
        KeySignature::CSharpMajor,
        KeySignature::FMajor,
        KeySignature::BFlatMajor,
        KeySignature::EFlatMajor,
        KeySignature::AFlatMajor,
        KeySignature::DFlatMajor,
        KeySignature::GFlatMajor,
        KeySignature::CFlatMajor,
    ];

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Lenient conversion: anything outside 0..=14 degrades to C major.
    pub fn from_ordinal(ordinal: i32) -> KeySignature {
        match usize::try_from(ordinal).ok().and_then(|i| Self::ALL.get(i)) {
            Some(&key) => key,
            None => {
                log::warn!("invalid key signature ordinal {ordinal}, falling back to C major");
                KeySignature::CMajor
            }
        }
    }

    /// Decode a normalized host parameter value (0.0-1.0 across the 15 keys).
    pub fn from_normalized(value: f64) -> KeySignature {
        if !value.is_finite() {
            log::warn!("non-finite key signature parameter, falling back to C major");
            return KeySignature::CMajor;
        }
        let index = (value * (NUM_KEY_SIGNATURES - 1) as f64 + 0.5).floor();
        Self::from_ordinal(index as i32)
    }

    pub fn to_normalized(self) -> f64 {
        self.ordinal() as f64 / (NUM_KEY_SIGNATURES - 1) as f64
    }

    pub fn uses_sharps(self) -> bool {
        (1..=7).contains(&self.ordinal())
    }

    pub fn uses_flats(self) -> bool {
        self.ordinal() >= 8
    }

    pub fn accidental_count(self) -> usize {
        KEY_SIGNATURE_ACCIDENTALS[self.ordinal() as usize]
            .iter()
            .filter(|&&present| present)
            .count()
    }

    /// Menu label, e.g. `B♭ Major (2♭)`.
    pub fn display_name(self) -> String {
        let tonic = self.tonic();
        match self.accidental_count() {
            0 => format!("{tonic} Major"),
            n if self.uses_sharps() => format!("{tonic} Major ({n}♯)"),
            n => format!("{tonic} Major ({n}♭)"),
        }
    }

    fn tonic(self) -> &'static str {
        match self {
            KeySignature::CMajor => "C",
            KeySignature::GMajor => "G",
            KeySignature::DMajor => "D",
            KeySignature::AMajor => "A",
            KeySignature::EMajor => "E",
            KeySignature::BMajor => "B",
            KeySignature::FSharpMajor => "F♯",
            KeySignature::CSharpMajor => "C♯",
            KeySignature::FMajor => "F",
            KeySignature::BFlatMajor => "B♭",
            KeySignature::EFlatMajor => "E♭",
            KeySignature::AFlatMajor => "A♭",
            KeySignature::DFlatMajor => "D♭",
            KeySignature::GFlatMajor => "G♭",
            KeySignature::CFlatMajor => "C♭",
        }
    }
}

impl TryFrom<u8> for KeySignature {
    type Error = StaffError;

    fn try_from(ordinal: u8) -> Result<Self> {
        Self::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or(StaffError::KeyOrdinalOutOfRange(ordinal as i64))
    }
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Major", self.tonic())
    }
}

/// Accepts `G`, `g major`, `F# Major`, `B♭ Major (2♭)`, `E flat` and the like.
impl FromStr for KeySignature {
    type Err = StaffError;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_lowercase();
        let head = lowered.split('(').next().unwrap_or("").trim();
        let head = head
            .replace('♯', "#")
            .replace('♭', "b")
            .replace(" sharp", "#")
            .replace(" flat", "b");
        let tonic = head.strip_suffix("major").unwrap_or(head.as_str()).trim();

        let key = match tonic {
            "c" => KeySignature::CMajor,
            "g" => KeySignature::GMajor,
            "d" => KeySignature::DMajor,
            "a" => KeySignature::AMajor,
            "e" => KeySignature::EMajor,
            "b" => KeySignature::BMajor,
            "f#" => KeySignature::FSharpMajor,
            "c#" => KeySignature::CSharpMajor,
            "f" => KeySignature::FMajor,
            "bb" => KeySignature::BFlatMajor,
            "eb" => KeySignature::EFlatMajor,
            "ab" => KeySignature::AFlatMajor,
            "db" => KeySignature::DFlatMajor,
            "gb" => KeySignature::GFlatMajor,
            "cb" => KeySignature::CFlatMajor,
            _ => return Err(StaffError::UnknownKeySignature(s.to_string())),
        };
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sharp_keys_only_carry_sharps_and_flat_keys_only_flats() {
        for key in KeySignature::ALL {
            for slot in 0..7 {
                let acc = accidental_for(key, slot);
                if key == KeySignature::CMajor {
                    assert!(!acc.present);
                } else if key.uses_sharps() {
                    assert_eq!(acc.present, acc.is_sharp, "{key} slot {slot}");
                } else if acc.present {
                    assert!(!acc.is_sharp, "{key} slot {slot}");
                }
            }
        }
    }

    #[test]
    fn accidental_count_follows_ordinal() {
        for key in KeySignature::ALL {
            let o = key.ordinal() as usize;
            let expected = if o <= 7 { o } else { o - 7 };
            assert_eq!(key.accidental_count(), expected, "{key}");
        }
    }

    #[test]
    fn altered_letters_follow_circle_of_fifths() {
        for n in 1..=7usize {
            let sharp_key = KeySignature::ALL[n];
            let flat_key = KeySignature::ALL[n + 7];
            for (i, &slot) in SHARP_ORDER.iter().enumerate() {
                assert_eq!(accidental_for(sharp_key, slot).present, i < n);
            }
            for (i, &slot) in FLAT_ORDER.iter().enumerate() {
                assert_eq!(accidental_for(flat_key, slot).present, i < n);
            }
        }
    }

    #[test]
    fn g_major_sharps_f_and_f_major_flats_b() {
        assert_eq!(
            accidental_for(KeySignature::GMajor, 3),
            KeyAccidental { present: true, is_sharp: true }
        );
        assert_eq!(
            accidental_for(KeySignature::FMajor, 6),
            KeyAccidental { present: true, is_sharp: false }
        );
        assert!(!accidental_for(KeySignature::FMajor, 3).present);
    }

    #[test]
    fn exactly_one_mode_per_key() {
        for key in KeySignature::ALL {
            let none = key.accidental_count() == 0;
            let modes = [key.uses_sharps(), key.uses_flats(), none];
            assert_eq!(modes.iter().filter(|&&m| m).count(), 1, "{key}");
        }
    }

    #[test]
    fn invalid_ordinals_degrade_to_c_major() {
        assert_eq!(KeySignature::from_ordinal(-1), KeySignature::CMajor);
        assert_eq!(KeySignature::from_ordinal(15), KeySignature::CMajor);
        assert_eq!(KeySignature::from_ordinal(9), KeySignature::BFlatMajor);
        assert!(KeySignature::try_from(15u8).is_err());
        assert_eq!(KeySignature::try_from(14u8).unwrap(), KeySignature::CFlatMajor);
    }

    #[test]
    fn normalized_parameter_round_trips_every_key() {
        for key in KeySignature::ALL {
            assert_eq!(KeySignature::from_normalized(key.to_normalized()), key);
        }
        assert_eq!(KeySignature::from_normalized(f64::NAN), KeySignature::CMajor);
        assert_eq!(KeySignature::from_normalized(2.0), KeySignature::CMajor);
    }

    #[test]
    fn parses_menu_labels_and_short_names() {
        assert_eq!("G".parse::<KeySignature>().unwrap(), KeySignature::GMajor);
        assert_eq!("f# major".parse::<KeySignature>().unwrap(), KeySignature::FSharpMajor);
        assert_eq!("B♭ Major (2♭)".parse::<KeySignature>().unwrap(), KeySignature::BFlatMajor);
        assert_eq!("E flat".parse::<KeySignature>().unwrap(), KeySignature::EFlatMajor);
        assert_eq!("b".parse::<KeySignature>().unwrap(), KeySignature::BMajor);
        assert!(matches!(
            "H major".parse::<KeySignature>(),
            Err(StaffError::UnknownKeySignature(_))
        ));
        for key in KeySignature::ALL {
            assert_eq!(key.display_name().parse::<KeySignature>().unwrap(), key);
        }
    }
}
