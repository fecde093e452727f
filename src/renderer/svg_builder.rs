//! SVG builder: accumulates SVG elements and produces the final string.
//!
//! Implements `DrawSink`, so the layout engine can emit straight into it.

use crate::layout::DrawSink;
use crate::model::{Accidental, ClefKind, DrawInstruction};
use super::constants::*;

pub(super) struct SvgBuilder {
    pub(super) elements: Vec<String>,
    width: f64,
    height: f64,
    /// Font size for clef glyphs
    clef_size: f64,
    /// Font size for accidental glyphs
    accidental_size: f64,
}

impl SvgBuilder {
    pub(super) fn new(width: f64, height: f64, staff_line_height: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
            clef_size: staff_line_height * CLEF_FONT_FACTOR,
            accidental_size: staff_line_height * ACCIDENTAL_FONT_FACTOR,
        }
    }

    pub(super) fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}" style="font-family: 'Bravura', 'Noto Music', serif;">"#,
            self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    pub(super) fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.elements.push(format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}" stroke-linecap="round"/>"#,
            x1, y1, x2, y2, color, width
        ));
    }

    pub(super) fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        self.elements.push(format!(
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
            x, y, w, h, fill
        ));
    }

    pub(super) fn glyph(&mut self, x: f64, y: f64, glyph: &str, size: f64) {
        self.elements.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="{:.0}" fill="{}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
            x, y, size, NOTE_COLOR, glyph
        ));
    }

    pub(super) fn notehead(&mut self, cx: f64, cy: f64, width: f64, height: f64) {
        self.elements.push(format!(
            r#"<ellipse cx="{:.1}" cy="{:.1}" rx="{:.1}" ry="{:.1}" fill="{}" stroke="none" transform="rotate(-15,{:.1},{:.1})"/>"#,
            cx, cy, width / 2.0, height / 2.0, NOTE_COLOR, cx, cy
        ));
    }

    pub(super) fn clef(&mut self, x: f64, y: f64, clef: ClefKind) {
        let glyph = match clef {
            ClefKind::Treble => TREBLE_CLEF_GLYPH,
            ClefKind::Bass => BASS_CLEF_GLYPH,
        };
        self.glyph(x, y, glyph, self.clef_size);
    }

    pub(super) fn accidental(&mut self, x: f64, y: f64, accidental: Accidental) {
        let glyph = match accidental {
            Accidental::Sharp => SHARP_GLYPH,
            Accidental::Flat => FLAT_GLYPH,
            Accidental::Natural => NATURAL_GLYPH,
        };
        self.glyph(x, y, glyph, self.accidental_size);
    }
}

impl DrawSink for SvgBuilder {
    fn emit(&mut self, instruction: DrawInstruction) {
        match instruction {
            DrawInstruction::StaffLine { x1, x2, y } => {
                self.line(x1, y, x2, y, STAFF_COLOR, STAFF_LINE_WIDTH);
            }
            DrawInstruction::LedgerLine { x, y, width } => {
                self.line(x - width / 2.0, y, x + width / 2.0, y, STAFF_COLOR, LEDGER_LINE_WIDTH);
            }
            DrawInstruction::Clef { clef, x, y } => self.clef(x, y, clef),
            DrawInstruction::Accidental { accidental, x, y } => self.accidental(x, y, accidental),
            DrawInstruction::Notehead { x, y, width, height } => {
                self.notehead(x, y, width, height);
            }
        }
    }
}
