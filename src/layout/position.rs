//! Staff position resolution: vertical coordinate and accidental decision
//! for a single note under the current key signature.

use crate::key_signature::accidental_for;
use crate::model::{Accidental, KeySignature, MidiNote, StaffHalf, StaffPlacement};
use crate::pitch::classify;
use super::constants::MIDDLE_C;

const MIDDLE_C_OCTAVE: i32 = 4;
const MIDDLE_C_WHITE_KEY_CLASS: i32 = 0;

/// Diatonic steps from middle C, positive upward.
pub fn diatonic_offset(midi_note: MidiNote) -> i32 {
    let pc = classify(midi_note);
    (pc.octave - MIDDLE_C_OCTAVE) * 7 + (pc.white_key_class as i32 - MIDDLE_C_WHITE_KEY_CLASS)
}

/// Resolve where `midi_note` sits on the grand staff and which glyph, if
/// any, has to be drawn in front of it.
///
/// Black keys are always spelled as sharps of the letter below; they are
/// silent when that letter is already altered by the key signature. White
/// keys whose letter is altered by the key signature get a natural sign.
pub fn resolve(midi_note: MidiNote, key: KeySignature) -> StaffPlacement {
    let pc = classify(midi_note);
    let in_key = accidental_for(key, pc.white_key_class).present;

    let accidental = match (pc.is_black_key, in_key) {
        (true, true) => None,
        (true, false) => Some(Accidental::Sharp),
        (false, true) => Some(Accidental::Natural),
        (false, false) => None,
    };

    let staff = if midi_note >= MIDDLE_C { StaffHalf::Treble } else { StaffHalf::Bass };

    StaffPlacement {
        staff_position: -(diatonic_offset(midi_note) as f64),
        staff,
        accidental,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_c_is_origin_on_treble() {
        let p = resolve(60, KeySignature::CMajor);
        assert_eq!(p.staff_position, 0.0);
        assert!(p.is_on_treble_staff());
        assert!(!p.needs_accidental());
    }

    #[test]
    fn b3_is_below_center_on_bass() {
        let p = resolve(59, KeySignature::CMajor);
        assert_eq!(p.staff_position, 1.0);
        assert_eq!(p.staff, StaffHalf::Bass);
    }

    #[test]
    fn octaves_are_seven_steps() {
        assert_eq!(resolve(72, KeySignature::CMajor).staff_position, -7.0);
        assert_eq!(resolve(48, KeySignature::CMajor).staff_position, 7.0);
        assert_eq!(resolve(77, KeySignature::CMajor).staff_position, -10.0); // F5, top treble line
        assert_eq!(resolve(43, KeySignature::CMajor).staff_position, 10.0); // G2, bottom bass line
    }

    #[test]
    fn c_sharp_in_c_major_is_drawn_sharp() {
        let p = resolve(61, KeySignature::CMajor);
        assert!(p.needs_accidental());
        assert!(p.is_sharp());
        assert_eq!(p.staff_position, 0.0);
    }

    #[test]
    fn f_sharp_in_g_major_is_implied() {
        let p = resolve(66, KeySignature::GMajor);
        assert!(!p.needs_accidental());
    }

    #[test]
    fn f_natural_in_g_major_needs_natural_sign() {
        let p = resolve(65, KeySignature::GMajor);
        assert!(p.needs_accidental());
        assert!(p.is_natural());
    }

    #[test]
    fn black_keys_outside_the_key_stay_sharp_in_flat_keys() {
        // A#/Bb in F major: the letter slot is A, which F major leaves alone
        let p = resolve(70, KeySignature::FMajor);
        assert_eq!(p.accidental, Some(Accidental::Sharp));
        // B natural in F major cancels the B flat
        assert_eq!(resolve(71, KeySignature::FMajor).accidental, Some(Accidental::Natural));
    }

    #[test]
    fn position_does_not_depend_on_key() {
        for note in 0..=127u8 {
            let c = resolve(note, KeySignature::CMajor).staff_position;
            for key in KeySignature::ALL {
                assert_eq!(resolve(note, key).staff_position, c);
            }
        }
    }
}
