//! Chord layout: resolves every active note, groups them and decides how
//! the noteheads of each group share the horizontal axis.

use crate::model::*;
use crate::pitch::note_name;
use super::constants::*;
use super::dimensions::Dimensions;
use super::ledger::{ledger_line_positions, needs_ledger_line};
use super::position::resolve;
use super::sink::DrawSink;

// ═══════════════════════════════════════════════════════════════════════
// Note resolution
// ═══════════════════════════════════════════════════════════════════════

/// Ascending, duplicate-free copy of the active notes. Pitches above 127
/// are dropped.
pub fn sort_notes<I>(active_notes: I) -> Vec<MidiNote>
where
    I: IntoIterator<Item = MidiNote>,
{
    let mut sorted: Vec<MidiNote> = active_notes
        .into_iter()
        .filter(|&n| {
            if n > MAX_MIDI_NOTE {
                log::warn!("ignoring out-of-range MIDI note {n}");
                false
            } else {
                true
            }
        })
        .collect();
    sorted.sort_unstable();
    sorted.dedup();
    sorted
}

pub fn resolve_note(midi_note: MidiNote, key: KeySignature) -> NoteLayout {
    let placement = resolve(midi_note, key);
    NoteLayout {
        midi_note,
        staff_position: placement.staff_position,
        staff: placement.staff,
        accidental: placement.accidental,
        needs_ledger_line: needs_ledger_line(midi_note),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Grouping and collision detection
// ═══════════════════════════════════════════════════════════════════════

/// Partition the sorted notes into groups laid out together. Every held
/// note currently belongs to a single group (one chord).
pub fn group_notes(notes: &[NoteLayout]) -> Vec<ChordGroup> {
    if notes.is_empty() {
        return Vec::new();
    }
    vec![ChordGroup {
        members: (0..notes.len()).collect(),
    }]
}

/// Two noteheads collide when they share a slot (C and C#) or sit on a line
/// and the space right next to it (C and D).
pub fn needs_side_by_side(group: &ChordGroup, notes: &[NoteLayout]) -> bool {
    if group.members.len() <= 1 {
        return false;
    }

    for (i, &a) in group.members.iter().enumerate() {
        for &b in &group.members[i + 1..] {
            let diff = (notes[a].staff_position - notes[b].staff_position).abs();
            if diff < SAME_SLOT_TOLERANCE {
                return true;
            }
            if (ADJACENT_SLOT_MIN..=ADJACENT_SLOT_MAX).contains(&diff) {
                return true;
            }
        }
    }
    false
}

pub fn arrangement_for(group: &ChordGroup, notes: &[NoteLayout]) -> Arrangement {
    match group.members.len() {
        0 | 1 => Arrangement::Single,
        _ if needs_side_by_side(group, notes) => Arrangement::SideBySide,
        _ => Arrangement::Stacked,
    }
}

/// x of a notehead given its rank inside the group. Side-by-side groups use
/// two columns only and alternate by rank, not by pitch distance, so three
/// or more colliding notes can still overlap.
fn note_x(arrangement: Arrangement, group_x: f64, rank: usize, dims: &Dimensions) -> f64 {
    match arrangement {
        Arrangement::Single | Arrangement::Stacked => group_x,
        Arrangement::SideBySide if rank % 2 == 0 => group_x - dims.column_offset(),
        Arrangement::SideBySide => group_x + dims.column_offset(),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Layout
// ═══════════════════════════════════════════════════════════════════════

/// x of the first chord group: after the clef area and the key signature.
pub fn chord_origin_x(key: KeySignature, dims: &Dimensions) -> f64 {
    dims.left_margin()
        + dims.clef_width()
        + dims.key_signature_width(key.accidental_count())
        + dims.key_signature_padding()
}

/// Lay out the active notes, emitting draw instructions into `sink`.
///
/// Per note the order is ledger lines, accidental, notehead. The result
/// only depends on the set of notes, never on their order.
pub fn layout_chord_into<I, S>(
    active_notes: I,
    key: KeySignature,
    dims: &Dimensions,
    sink: &mut S,
) -> (Vec<NoteLayout>, Vec<GroupLayout>)
where
    I: IntoIterator<Item = MidiNote>,
    S: DrawSink + ?Sized,
{
    let sorted = sort_notes(active_notes);
    if sorted.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let notes: Vec<NoteLayout> = sorted.iter().map(|&n| resolve_note(n, key)).collect();
    for note in &notes {
        log::trace!(
            "note {} -> position {} {:?} accidental {:?} ledger {}",
            note_name(note.midi_note), note.staff_position, note.staff, note.accidental, note.needs_ledger_line
        );
    }

    let base_x = chord_origin_x(key, dims);
    let mut group_offset_x = 0.0;
    let mut groups = Vec::new();

    for group in group_notes(&notes) {
        let group_x = base_x + group_offset_x;
        let arrangement = arrangement_for(&group, &notes);

        for (rank, &idx) in group.members.iter().enumerate() {
            let x = note_x(arrangement, group_x, rank, dims);
            emit_note(sink, &notes[idx], x, dims);
        }

        log::debug!(
            "laid out {} note(s) in {} as {:?} at x={:.1}",
            group.members.len(), key, arrangement, group_x
        );

        groups.push(GroupLayout {
            members: group.members,
            arrangement,
            x: group_x,
        });
        group_offset_x += dims.note_group_spacing();
    }

    (notes, groups)
}

/// Collecting variant of [`layout_chord_into`].
pub fn layout_chord<I>(active_notes: I, key: KeySignature, dims: &Dimensions) -> ChordLayout
where
    I: IntoIterator<Item = MidiNote>,
{
    let mut instructions = Vec::new();
    let (notes, groups) = layout_chord_into(active_notes, key, dims, &mut instructions);
    ChordLayout { notes, groups, instructions }
}

fn emit_note<S: DrawSink + ?Sized>(sink: &mut S, note: &NoteLayout, x: f64, dims: &Dimensions) {
    let y = dims.y_for(note.staff_position);

    if note.needs_ledger_line {
        for pos in ledger_line_positions(note.midi_note, note.staff_position) {
            sink.emit(DrawInstruction::LedgerLine {
                x,
                y: dims.y_for(pos),
                width: dims.ledger_line_width(),
            });
        }
    }

    if let Some(accidental) = note.accidental {
        sink.emit(DrawInstruction::Accidental {
            accidental,
            x: x - dims.accidental_offset(),
            y,
        });
    }

    sink.emit(DrawInstruction::Notehead {
        x,
        y,
        width: dims.note_width(),
        height: dims.note_height(),
    });
}
