//! Proportional sizing: every drawing dimension is derived from the view.

use crate::model::ViewSize;
use super::constants::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// Non-positive or non-finite sizes fall back to the default view.
    pub fn new(view: ViewSize) -> Self {
        let default = ViewSize::default();
        let width = if view.width.is_finite() && view.width > 0.0 { view.width } else { default.width };
        let height = if view.height.is_finite() && view.height > 0.0 { view.height } else { default.height };
        Self { width, height }
    }

    pub fn staff_line_height(&self) -> f64 {
        self.height * STAFF_LINE_HEIGHT_RATIO
    }

    /// One diatonic step: half a staff space.
    pub fn step_height(&self) -> f64 {
        self.staff_line_height() / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.height / 2.0
    }

    /// View y of a staff position.
    pub fn y_for(&self, staff_position: f64) -> f64 {
        self.center_y() + staff_position * self.step_height()
    }

    pub fn note_width(&self) -> f64 {
        self.staff_line_height() * NOTE_WIDTH_FACTOR
    }

    pub fn note_height(&self) -> f64 {
        self.staff_line_height() * NOTE_HEIGHT_FACTOR
    }

    pub fn left_margin(&self) -> f64 {
        self.width * LEFT_MARGIN_RATIO
    }

    pub fn right_margin(&self) -> f64 {
        self.width * RIGHT_MARGIN_RATIO
    }

    pub fn clef_width(&self) -> f64 {
        self.width * CLEF_WIDTH_RATIO
    }

    pub fn accidental_spacing(&self) -> f64 {
        self.width * ACCIDENTAL_SPACING_RATIO
    }

    pub fn key_signature_padding(&self) -> f64 {
        self.width * KEY_SIGNATURE_PADDING_RATIO
    }

    pub fn note_group_spacing(&self) -> f64 {
        self.width * NOTE_GROUP_SPACING_RATIO
    }

    pub fn ledger_line_width(&self) -> f64 {
        self.note_width() * LEDGER_WIDTH_FACTOR
    }

    pub fn accidental_offset(&self) -> f64 {
        self.note_width() * ACCIDENTAL_OFFSET_FACTOR
    }

    pub fn column_offset(&self) -> f64 {
        self.note_width() * COLUMN_OFFSET_FACTOR
    }

    /// Horizontal room taken by a key signature with `count` accidentals.
    pub fn key_signature_width(&self, count: usize) -> f64 {
        if count == 0 {
            0.0
        } else {
            count as f64 * self.accidental_spacing() + self.key_signature_padding()
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(ViewSize::default())
    }
}
