//! Ledger lines for notes outside the two five-line staves.

use crate::model::MidiNote;
use super::constants::*;

/// Fixed MIDI thresholds, independent of key signature: strictly above G5,
/// strictly below F2, or in the middle-C band B3..D#4.
pub fn needs_ledger_line(midi_note: MidiNote) -> bool {
    midi_note > TREBLE_TOP_NOTE
        || midi_note < BASS_BOTTOM_NOTE
        || (MIDDLE_LEDGER_LOW..=MIDDLE_LEDGER_HIGH).contains(&midi_note)
}

/// Staff positions of the ledger lines drawn for a note at `staff_position`.
pub fn ledger_line_positions(midi_note: MidiNote, staff_position: f64) -> Vec<f64> {
    let mut positions = Vec::new();

    if (MIDDLE_LEDGER_LOW..=MIDDLE_LEDGER_HIGH).contains(&midi_note) {
        positions.push(0.0);
    }

    if midi_note > TREBLE_TOP_NOTE {
        let mut line = FIRST_LEDGER_ABOVE;
        while line >= staff_position - LEDGER_REACH {
            positions.push(line);
            line -= LEDGER_STEP;
        }
    }

    if midi_note < BASS_BOTTOM_NOTE {
        let mut line = FIRST_LEDGER_BELOW;
        while line <= staff_position + LEDGER_REACH {
            positions.push(line);
            line += LEDGER_STEP;
        }
    }

    positions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::position::resolve;
    use crate::model::KeySignature;

    fn lines_for(note: MidiNote) -> Vec<f64> {
        let p = resolve(note, KeySignature::CMajor);
        ledger_line_positions(note, p.staff_position)
    }

    #[test]
    fn thresholds() {
        assert!(needs_ledger_line(60));
        assert!(!needs_ledger_line(64));
        assert!(needs_ledger_line(80));
        assert!(!needs_ledger_line(79));
        assert!(needs_ledger_line(40));
        assert!(!needs_ledger_line(41));
        assert!(needs_ledger_line(59));
        assert!(needs_ledger_line(63));
        assert!(!needs_ledger_line(58));
    }

    #[test]
    fn middle_c_band_gets_the_center_line() {
        for note in 59..=63 {
            assert_eq!(lines_for(note), vec![0.0], "note {note}");
        }
    }

    #[test]
    fn lines_above_the_treble_staff() {
        assert_eq!(lines_for(81), vec![-12.0]); // A5
        assert_eq!(lines_for(84), vec![-12.0, -14.0]); // C6
        assert_eq!(lines_for(88), vec![-12.0, -14.0, -16.0]); // E6
        // a space note also gets the line half a step above it
        assert_eq!(lines_for(86), vec![-12.0, -14.0, -16.0]); // D6
        assert_eq!(lines_for(80), vec![-12.0]); // G#5
    }

    #[test]
    fn lines_below_the_bass_staff() {
        assert_eq!(lines_for(40), vec![12.0]); // E2
        assert_eq!(lines_for(36), vec![12.0, 14.0]); // C2
    }

    #[test]
    fn staff_notes_get_no_lines() {
        for note in 41..=58 {
            assert!(lines_for(note).is_empty(), "note {note}");
        }
        for note in 64..=79 {
            assert!(lines_for(note).is_empty(), "note {note}");
        }
    }
}
