//! Error types for stafflib.
//!
//! The layout engine itself never fails: an empty or degenerate input yields
//! an empty instruction list. Errors only come from the surfaces around it
//! (parsing key names, validating caller-supplied notes, slot addressing and
//! JSON serialization).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StaffError {
    /// A key signature name that is not one of the 15 major keys.
    ///
    /// ```
    /// # use stafflib::StaffError;
    /// let err = StaffError::UnknownKeySignature("H major".to_string());
    /// assert_eq!(err.to_string(), "Unknown key signature: 'H major'");
    /// ```
    #[error("Unknown key signature: '{0}'")]
    UnknownKeySignature(String),

    /// A key signature ordinal outside 0..=14.
    #[error("Key signature ordinal {0} is out of range (0-14)")]
    KeyOrdinalOutOfRange(i64),

    /// A MIDI note number outside 0..=127.
    #[error("MIDI note {0} is out of range (0-127)")]
    NoteOutOfRange(i64),

    /// A note transport slot index past the last slot.
    #[error("Note slot {0} does not exist")]
    SlotOutOfRange(usize),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StaffError>;
