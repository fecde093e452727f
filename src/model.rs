//! Data model shared by the layout engine, the renderer and the FFI surface.
//!
//! Everything here is plain data: layouts are recomputed from scratch for
//! every change of the active notes or the key signature and never persisted.

use serde::{Deserialize, Serialize};

/// A MIDI note number, 0-127 (60 = middle C / C4).
pub type MidiNote = u8;

/// Highest valid MIDI note number.
pub const MAX_MIDI_NOTE: MidiNote = 127;

/// The 15 major key signatures, ranked by ordinal:
/// 0 = no accidentals, 1-7 = increasing sharps, 8-14 = increasing flats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum KeySignature {
    #[default]
    CMajor = 0,
    GMajor = 1,
    DMajor = 2,
    AMajor = 3,
    EMajor = 4,
    BMajor = 5,
    FSharpMajor = 6,
    CSharpMajor = 7,
    FMajor = 8,
    BFlatMajor = 9,
    EFlatMajor = 10,
    AFlatMajor = 11,
    DFlatMajor = 12,
    GFlatMajor = 13,
    CFlatMajor = 14,
}

/// Accidental glyph drawn next to a notehead or in the key signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accidental {
    Sharp,
    Flat,
    Natural,
}

/// Which half of the grand staff a note belongs to for ledger-line purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffHalf {
    Treble,
    Bass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClefKind {
    Treble,
    Bass,
}

/// Result of classifying a MIDI note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchClass {
    /// Semitone within the octave (MIDI note mod 12)
    pub note_class: u8,
    /// Scientific octave number (MIDI 60 is octave 4)
    pub octave: i32,
    /// Letter-name slot, C=0 through B=6
    pub white_key_class: u8,
    pub is_black_key: bool,
}

/// Vertical placement of one note and the accidental decision for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaffPlacement {
    /// Grand-staff coordinate in diatonic steps (half a staff-line spacing),
    /// 0 = middle C, negative = upward (treble-ward).
    pub staff_position: f64,
    pub staff: StaffHalf,
    /// `None` when no glyph is drawn (either a plain white key or an
    /// alteration already implied by the key signature).
    pub accidental: Option<Accidental>,
}

impl StaffPlacement {
    pub fn is_on_treble_staff(&self) -> bool {
        self.staff == StaffHalf::Treble
    }

    pub fn needs_accidental(&self) -> bool {
        self.accidental.is_some()
    }

    pub fn is_sharp(&self) -> bool {
        self.accidental == Some(Accidental::Sharp)
    }

    pub fn is_natural(&self) -> bool {
        self.accidental == Some(Accidental::Natural)
    }
}

/// Everything the engine derives for one active note.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoteLayout {
    pub midi_note: MidiNote,
    pub staff_position: f64,
    pub staff: StaffHalf,
    pub accidental: Option<Accidental>,
    pub needs_ledger_line: bool,
}

impl NoteLayout {
    pub fn placement(&self) -> StaffPlacement {
        StaffPlacement {
            staff_position: self.staff_position,
            staff: self.staff,
            accidental: self.accidental,
        }
    }
}

/// Indices into the sorted note list that are laid out together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordGroup {
    pub members: Vec<usize>,
}

/// How the noteheads of one group share the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arrangement {
    /// One note, drawn at the group x
    Single,
    /// All notes share the group x
    Stacked,
    /// Notes alternate between a left and a right column
    SideBySide,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupLayout {
    pub members: Vec<usize>,
    pub arrangement: Arrangement,
    /// Horizontal centre of the group
    pub x: f64,
}

/// One primitive for an external renderer. Coordinates are in view units,
/// origin top-left, y growing downward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawInstruction {
    StaffLine { x1: f64, x2: f64, y: f64 },
    Clef { clef: ClefKind, x: f64, y: f64 },
    /// Always a filled head.
    Notehead { x: f64, y: f64, width: f64, height: f64 },
    Accidental { accidental: Accidental, x: f64, y: f64 },
    LedgerLine { x: f64, y: f64, width: f64 },
}

/// Full result of laying out one set of active notes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChordLayout {
    /// Resolved notes, ascending by pitch
    pub notes: Vec<NoteLayout>,
    pub groups: Vec<GroupLayout>,
    pub instructions: Vec<DrawInstruction>,
}

/// Size of the view the layout is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewSize {
    pub width: f64,
    pub height: f64,
}

impl Default for ViewSize {
    fn default() -> Self {
        Self {
            width: 580.0,
            height: 390.0,
        }
    }
}
