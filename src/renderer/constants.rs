//! Shared constants for the SVG renderer.

// ── Strokes ─────────────────────────────────────────────────────────
pub(super) const STAFF_LINE_WIDTH: f64 = 1.0;
pub(super) const LEDGER_LINE_WIDTH: f64 = 1.0;

// ── Glyph sizes (relative to the staff space) ───────────────────────
pub(super) const CLEF_FONT_FACTOR: f64 = 6.0;
pub(super) const ACCIDENTAL_FONT_FACTOR: f64 = 2.0;

// ── Glyphs ──────────────────────────────────────────────────────────
pub(super) const TREBLE_CLEF_GLYPH: &str = "\u{1D11E}";
pub(super) const BASS_CLEF_GLYPH: &str = "\u{1D122}";
pub(super) const SHARP_GLYPH: &str = "\u{266F}";
pub(super) const FLAT_GLYPH: &str = "\u{266D}";
pub(super) const NATURAL_GLYPH: &str = "\u{266E}";

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const BACKGROUND_COLOR: &str = "#fafafa";
pub(super) const NOTE_COLOR: &str = "#000000";
pub(super) const STAFF_COLOR: &str = "#000000";
