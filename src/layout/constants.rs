//! Shared constants for the staff layout. Sizes are ratios of the view so
//! that the whole drawing scales with it.

// ── Vertical ────────────────────────────────────────────────────────
pub(super) const STAFF_LINE_HEIGHT_RATIO: f64 = 0.05; // of view height, per staff space

// ── Horizontal ──────────────────────────────────────────────────────
pub(super) const LEFT_MARGIN_RATIO: f64 = 0.15; // clefs and key signature live here
pub(super) const RIGHT_MARGIN_RATIO: f64 = 0.05;
pub(super) const CLEF_WIDTH_RATIO: f64 = 0.1;
pub(super) const ACCIDENTAL_SPACING_RATIO: f64 = 0.025; // between key signature accidentals
pub(super) const KEY_SIGNATURE_PADDING_RATIO: f64 = 0.03;
pub(super) const NOTE_GROUP_SPACING_RATIO: f64 = 0.05; // between chord groups

// ── Note dimensions (relative to the staff space) ───────────────────
pub(super) const NOTE_WIDTH_FACTOR: f64 = 1.3;
pub(super) const NOTE_HEIGHT_FACTOR: f64 = 0.94;
pub(super) const LEDGER_WIDTH_FACTOR: f64 = 1.5; // of note width
pub(super) const ACCIDENTAL_OFFSET_FACTOR: f64 = 2.0; // of note width
pub(super) const COLUMN_OFFSET_FACTOR: f64 = 0.4; // of note width, side-by-side columns

// ── Staff geometry (staff-position units, 0 = middle C) ─────────────
/// Treble lines sit at -2..-10 and bass lines at +2..+10.
pub(super) const STAFF_LINE_POSITIONS: [f64; 5] = [2.0, 4.0, 6.0, 8.0, 10.0];
pub(super) const TREBLE_CLEF_POSITION: f64 = -4.0; // G4 line
pub(super) const BASS_CLEF_POSITION: f64 = 4.0; // F3 line
pub(super) const FIRST_LEDGER_ABOVE: f64 = -12.0;
pub(super) const FIRST_LEDGER_BELOW: f64 = 12.0;
pub(super) const LEDGER_STEP: f64 = 2.0;
/// A ledger line may sit up to this far beyond the notehead.
pub(super) const LEDGER_REACH: f64 = 1.0;

// ── Ledger thresholds (MIDI) ────────────────────────────────────────
pub(super) const TREBLE_TOP_NOTE: u8 = 79; // G5
pub(super) const BASS_BOTTOM_NOTE: u8 = 41; // F2
pub(super) const MIDDLE_LEDGER_LOW: u8 = 59; // B3
pub(super) const MIDDLE_LEDGER_HIGH: u8 = 63; // D#4

// ── Collision detection (staff-position units) ──────────────────────
pub(super) const SAME_SLOT_TOLERANCE: f64 = 0.5;
pub(super) const ADJACENT_SLOT_MIN: f64 = 0.875;
pub(super) const ADJACENT_SLOT_MAX: f64 = 1.125;

pub(super) const MIDDLE_C: u8 = 60;
