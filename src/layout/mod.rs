//! Notation layout engine: turns a set of active MIDI notes and a key
//! signature into draw instructions for a grand staff.
//!
//! Every function here is pure: the same notes, key and view size always
//! produce the same instruction list, whatever order the notes arrive in.
//! No pixels are produced; a backend (see `renderer`) consumes the
//! instructions.

mod constants;
pub mod dimensions;
pub mod position;
pub mod ledger;
pub mod chord;
pub mod key_sig;
pub mod staff;
pub mod sink;

use crate::model::*;

pub use dimensions::Dimensions;
pub use position::{diatonic_offset, resolve};
pub use ledger::{ledger_line_positions, needs_ledger_line};
pub use chord::{
    arrangement_for, chord_origin_x, group_notes, layout_chord, layout_chord_into,
    needs_side_by_side, resolve_note, sort_notes,
};
pub use key_sig::{render_key_signature, render_key_signature_into};
pub use staff::{layout_staff, layout_staff_into};
pub use sink::DrawSink;

/// Lay out only the notes (no staff, clefs or key signature).
pub fn layout<I>(active_notes: I, key: KeySignature, view: ViewSize) -> Vec<DrawInstruction>
where
    I: IntoIterator<Item = MidiNote>,
{
    layout_chord(active_notes, key, &Dimensions::new(view)).instructions
}

/// Lay out a complete frame into `sink`: staff lines and clefs, key
/// signature, then the chord.
pub fn layout_view_into<I, S>(
    active_notes: I,
    key: KeySignature,
    view: ViewSize,
    sink: &mut S,
) -> (Vec<NoteLayout>, Vec<GroupLayout>)
where
    I: IntoIterator<Item = MidiNote>,
    S: DrawSink + ?Sized,
{
    let dims = Dimensions::new(view);
    layout_staff_into(&dims, sink);
    render_key_signature_into(key, &dims, sink);
    layout_chord_into(active_notes, key, &dims, sink)
}

/// Collecting variant of [`layout_view_into`].
pub fn layout_view<I>(active_notes: I, key: KeySignature, view: ViewSize) -> ChordLayout
where
    I: IntoIterator<Item = MidiNote>,
{
    let mut instructions = Vec::new();
    let (notes, groups) = layout_view_into(active_notes, key, view, &mut instructions);
    ChordLayout { notes, groups, instructions }
}
