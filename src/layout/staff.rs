//! Grand staff frame: the ten staff lines and the two clefs.

use crate::model::{ClefKind, DrawInstruction};
use super::constants::*;
use super::dimensions::Dimensions;
use super::sink::DrawSink;

pub fn layout_staff_into<S: DrawSink + ?Sized>(dims: &Dimensions, sink: &mut S) {
    let x1 = dims.left_margin();
    let x2 = dims.width - dims.right_margin();

    // Treble lines bottom to top (E4 .. F5), then bass lines top to bottom (A3 .. G2)
    for &pos in &STAFF_LINE_POSITIONS {
        sink.emit(DrawInstruction::StaffLine { x1, x2, y: dims.y_for(-pos) });
    }
    for &pos in &STAFF_LINE_POSITIONS {
        sink.emit(DrawInstruction::StaffLine { x1, x2, y: dims.y_for(pos) });
    }

    let clef_x = dims.left_margin() - dims.clef_width() / 2.0;
    sink.emit(DrawInstruction::Clef {
        clef: ClefKind::Treble,
        x: clef_x,
        y: dims.y_for(TREBLE_CLEF_POSITION),
    });
    sink.emit(DrawInstruction::Clef {
        clef: ClefKind::Bass,
        x: clef_x,
        y: dims.y_for(BASS_CLEF_POSITION),
    });
}

pub fn layout_staff(dims: &Dimensions) -> Vec<DrawInstruction> {
    let mut out = Vec::new();
    layout_staff_into(dims, &mut out);
    out
}
