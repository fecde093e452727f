//! Reference renderer: draws the layout engine's output as SVG.
//!
//! The engine itself never touches pixels; this backend exists so a frame
//! can be inspected in any SVG-capable view and handed across FFI.

mod constants;
mod svg_builder;

use crate::layout::{layout_view_into, Dimensions};
use crate::model::*;
use constants::*;
use svg_builder::SvgBuilder;

/// Render the full grand staff (staff, clefs, key signature and the active
/// notes) to a self-contained SVG string.
pub fn render_to_svg<I>(active_notes: I, key: KeySignature, view: ViewSize) -> String
where
    I: IntoIterator<Item = MidiNote>,
{
    let dims = Dimensions::new(view);
    let mut svg = SvgBuilder::new(dims.width, dims.height, dims.staff_line_height());

    // Background
    svg.rect(0.0, 0.0, dims.width, dims.height, BACKGROUND_COLOR);

    let view = ViewSize { width: dims.width, height: dims.height };
    layout_view_into(active_notes, key, view, &mut svg);
    svg.build()
}

/// Render a precomputed instruction list.
pub fn instructions_to_svg(instructions: &[DrawInstruction], view: ViewSize) -> String {
    use crate::layout::DrawSink;

    let dims = Dimensions::new(view);
    let mut svg = SvgBuilder::new(dims.width, dims.height, dims.staff_line_height());
    svg.rect(0.0, 0.0, dims.width, dims.height, BACKGROUND_COLOR);
    for instruction in instructions {
        svg.emit(instruction.clone());
    }
    svg.build()
}
