//! Pitch classification: MIDI note number to note class, octave and letter slot.

use crate::error::{Result, StaffError};
use crate::model::{MidiNote, PitchClass, MAX_MIDI_NOTE};

/// Note classes that sit on black keys: C#, D#, F#, G#, A#.
const IS_BLACK_KEY: [bool; 12] = [
    false, true, false, true, false, false, true, false, true, false, true, false,
];

/// Letter slot (C=0 .. B=6) per note class. Black keys share the slot of the
/// letter they are sharped from.
const WHITE_KEY_CLASS: [u8; 12] = [0, 0, 1, 1, 2, 3, 3, 4, 4, 5, 5, 6];

pub fn classify(midi_note: MidiNote) -> PitchClass {
    let note_class = midi_note % 12;
    PitchClass {
        note_class,
        octave: midi_note as i32 / 12 - 1,
        white_key_class: WHITE_KEY_CLASS[note_class as usize],
        is_black_key: IS_BLACK_KEY[note_class as usize],
    }
}

/// Checked conversion for callers that receive notes from untyped sources.
pub fn validate_note(value: i64) -> Result<MidiNote> {
    if (0..=MAX_MIDI_NOTE as i64).contains(&value) {
        Ok(value as MidiNote)
    } else {
        Err(StaffError::NoteOutOfRange(value))
    }
}

/// Scientific pitch name with sharp spelling, e.g. `C#4`.
pub fn note_name(midi_note: MidiNote) -> String {
    const NAMES: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];
    let pc = classify(midi_note);
    format!("{}{}", NAMES[pc.note_class as usize], pc.octave)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_class_and_black_keys_for_every_note() {
        for n in 0..=MAX_MIDI_NOTE {
            let pc = classify(n);
            assert_eq!(pc.note_class, n % 12);
            assert_eq!(pc.is_black_key, matches!(n % 12, 1 | 3 | 6 | 8 | 10), "note {n}");
        }
    }

    #[test]
    fn middle_c_is_octave_four() {
        let pc = classify(60);
        assert_eq!(pc.octave, 4);
        assert_eq!(pc.white_key_class, 0);
        assert_eq!(classify(0).octave, -1);
        assert_eq!(classify(127).octave, 9);
    }

    #[test]
    fn black_keys_share_the_lower_letter() {
        assert_eq!(classify(61).white_key_class, 0); // C#
        assert_eq!(classify(63).white_key_class, 1); // D#
        assert_eq!(classify(66).white_key_class, 3); // F#
        assert_eq!(classify(68).white_key_class, 4); // G#
        assert_eq!(classify(70).white_key_class, 5); // A#
        assert_eq!(classify(71).white_key_class, 6); // B
    }

    #[test]
    fn validate_rejects_out_of_range() {
        assert_eq!(validate_note(0).unwrap(), 0);
        assert_eq!(validate_note(127).unwrap(), 127);
        assert!(matches!(validate_note(128), Err(StaffError::NoteOutOfRange(128))));
        assert!(matches!(validate_note(-1), Err(StaffError::NoteOutOfRange(-1))));
    }

    #[test]
    fn names() {
        assert_eq!(note_name(60), "C4");
        assert_eq!(note_name(61), "C#4");
        assert_eq!(note_name(21), "A0");
    }
}
