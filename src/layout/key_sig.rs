//! Key signature glyphs, drawn once per staff in circle-of-fifths order.

use crate::key_signature::{accidental_for, FLAT_ORDER, SHARP_ORDER};
use crate::model::{Accidental, DrawInstruction, KeySignature, MidiNote};
use super::dimensions::Dimensions;
use super::position::resolve;
use super::sink::DrawSink;

/// Reference pitches per position in the sharp order F C G D A E B.
const TREBLE_SHARP_NOTES: [MidiNote; 7] = [77, 72, 79, 74, 69, 76, 71]; // F5 C5 G5 D5 A4 E5 B4
const BASS_SHARP_NOTES: [MidiNote; 7] = [53, 48, 55, 50, 45, 52, 47]; // F3 C3 G3 D3 A2 E3 B2

/// Reference pitches per position in the flat order B E A D G C F.
const TREBLE_FLAT_NOTES: [MidiNote; 7] = [71, 76, 69, 74, 67, 72, 65]; // B4 E5 A4 D5 G4 C5 F4
const BASS_FLAT_NOTES: [MidiNote; 7] = [47, 52, 45, 50, 43, 48, 41]; // B2 E3 A2 D3 G2 C3 F2

pub fn render_key_signature_into<S: DrawSink + ?Sized>(
    key: KeySignature,
    dims: &Dimensions,
    sink: &mut S,
) {
    if key.accidental_count() == 0 {
        return;
    }

    let (order, treble, bass, accidental) = if key.uses_sharps() {
        (&SHARP_ORDER, &TREBLE_SHARP_NOTES, &BASS_SHARP_NOTES, Accidental::Sharp)
    } else {
        (&FLAT_ORDER, &TREBLE_FLAT_NOTES, &BASS_FLAT_NOTES, Accidental::Flat)
    };

    let base_x = dims.left_margin() + dims.key_signature_padding();
    let mut drawn = 0;

    for (i, &letter) in order.iter().enumerate() {
        if !accidental_for(key, letter).present {
            continue;
        }
        let x = base_x + drawn as f64 * dims.accidental_spacing();
        for reference in [treble[i], bass[i]] {
            let y = dims.y_for(resolve(reference, key).staff_position);
            sink.emit(DrawInstruction::Accidental { accidental, x, y });
        }
        drawn += 1;
    }

    log::debug!("key signature {} drew {} accidental(s) per staff", key, drawn);
}

/// Accidentals of the key signature itself, independent of any notes.
pub fn render_key_signature(key: KeySignature, dims: &Dimensions) -> Vec<DrawInstruction> {
    let mut out = Vec::new();
    render_key_signature_into(key, dims, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ViewSize;

    fn accidentals(out: &[DrawInstruction]) -> Vec<(Accidental, f64, f64)> {
        out.iter()
            .filter_map(|i| match *i {
                DrawInstruction::Accidental { accidental, x, y } => Some((accidental, x, y)),
                _ => None,
            })
            .collect()
    }

    /// Staff position of every glyph, in emission order.
    fn positions(key: KeySignature) -> Vec<i32> {
        let dims = Dimensions::default();
        accidentals(&render_key_signature(key, &dims))
            .iter()
            .map(|&(_, _, y)| ((y - dims.center_y()) / dims.step_height()).round() as i32)
            .collect()
    }

    #[test]
    fn sharps_follow_f_c_g_d_a_e_b() {
        // F5/F3, C5/C3
        assert_eq!(positions(KeySignature::DMajor), vec![-10, 4, -7, 7]);
        // ... G5/G3, D5/D3, A4/A2, E5/E3, B4/B2
        assert_eq!(
            positions(KeySignature::CSharpMajor),
            vec![-10, 4, -7, 7, -11, 3, -8, 6, -5, 9, -9, 5, -6, 8]
        );
    }

    #[test]
    fn flats_follow_b_e_a_d_g_c_f() {
        // B4/B2, E5/E3, A4/A2
        assert_eq!(positions(KeySignature::EFlatMajor), vec![-6, 8, -9, 5, -5, 9]);
        // ... D5/D3, G4/G2, C5/C3, F4/F2
        assert_eq!(
            positions(KeySignature::CFlatMajor),
            vec![-6, 8, -9, 5, -5, 9, -8, 6, -4, 10, -7, 7, -3, 11]
        );
    }

    #[test]
    fn c_major_draws_nothing() {
        assert!(render_key_signature(KeySignature::CMajor, &Dimensions::default()).is_empty());
    }

    #[test]
    fn g_major_draws_f_sharp_on_both_staves() {
        let dims = Dimensions::new(ViewSize { width: 400.0, height: 200.0 });
        let acc = accidentals(&render_key_signature(KeySignature::GMajor, &dims));
        assert_eq!(acc.len(), 2);
        assert!(acc.iter().all(|a| a.0 == Accidental::Sharp));
        // F5 on the top treble line, F3 on the fourth bass line
        assert_eq!(acc[0].2, dims.y_for(-10.0));
        assert_eq!(acc[1].2, dims.y_for(4.0));
        assert_eq!(acc[0].1, acc[1].1);
    }

    #[test]
    fn f_major_draws_b_flat_on_both_staves() {
        let dims = Dimensions::default();
        let acc = accidentals(&render_key_signature(KeySignature::FMajor, &dims));
        assert_eq!(acc.len(), 2);
        assert!(acc.iter().all(|a| a.0 == Accidental::Flat));
        assert_eq!(acc[0].2, dims.y_for(-6.0)); // B4
        assert_eq!(acc[1].2, dims.y_for(8.0)); // B2
    }

    #[test]
    fn every_key_draws_two_glyphs_per_accidental_left_to_right() {
        let dims = Dimensions::default();
        for key in KeySignature::ALL {
            let acc = accidentals(&render_key_signature(key, &dims));
            assert_eq!(acc.len(), key.accidental_count() * 2, "{key}");
            for pair in acc.chunks(2).collect::<Vec<_>>().windows(2) {
                assert!(pair[0][0].1 < pair[1][0].1, "{key} not left to right");
            }
        }
    }
}
