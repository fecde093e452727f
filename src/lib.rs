//! stafflib: real-time grand staff layout for Notation Chord Helper.
//!
//! Maps the set of currently held MIDI notes plus a key signature to staff
//! positions, accidentals, ledger lines and collision-free notehead
//! placement, expressed as a list of draw instructions.
//!
//! # Example
//! ```
//! use stafflib::{layout_view, KeySignature, ViewSize};
//!
//! let frame = layout_view([60, 64, 67], KeySignature::GMajor, ViewSize::default());
//! println!("Notes: {}", frame.notes.len());
//! println!("Instructions: {}", frame.instructions.len());
//! ```

pub mod error;
pub mod model;
pub mod pitch;
pub mod key_signature;
pub mod layout;
pub mod renderer;
pub mod tracker;

#[cfg(target_os = "android")]
pub mod android;

pub use error::{Result, StaffError};
pub use model::*;
pub use pitch::classify;
pub use key_signature::accidental_for;
pub use layout::{layout, layout_view, render_key_signature, resolve, Dimensions, DrawSink};
pub use renderer::render_to_svg;
pub use tracker::{ActiveNotes, MidiEvent, NoteSlots};

/// Convert a layout to a JSON string.
/// Useful for passing data across FFI boundaries.
pub fn layout_to_json(layout: &ChordLayout) -> Result<String> {
    Ok(serde_json::to_string_pretty(layout)?)
}

/// Convert a bare instruction list to a JSON string.
pub fn instructions_to_json(instructions: &[DrawInstruction]) -> Result<String> {
    Ok(serde_json::to_string(instructions)?)
}

/// Lay out a full frame and serialize it in one step.
pub fn layout_json(notes: &[MidiNote], key: KeySignature, view: ViewSize) -> Result<String> {
    layout_to_json(&layout_view(notes.iter().copied(), key, view))
}

/// Parse a layout previously produced by [`layout_to_json`].
pub fn layout_from_json(json: &str) -> Result<ChordLayout> {
    Ok(serde_json::from_str(json)?)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI: for iOS (static library) and desktop hosts
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::CString;
use std::os::raw::c_char;

/// Build the note list for the FFI entry points, skipping invalid values.
fn notes_from_raw(notes: &[i32]) -> Vec<MidiNote> {
    notes
        .iter()
        .filter_map(|&n| pitch::validate_note(n as i64).ok())
        .collect()
}

fn view_from_raw(width: f64, height: f64) -> ViewSize {
    // Dimensions::new falls back to the default for non-positive sizes
    ViewSize { width, height }
}

/// # Safety
/// `notes` must point to `len` valid `i32` values, or be null with `len` 0.
unsafe fn raw_notes<'a>(notes: *const i32, len: usize) -> &'a [i32] {
    if notes.is_null() || len == 0 {
        &[]
    } else {
        unsafe { std::slice::from_raw_parts(notes, len) }
    }
}

/// Lay out a frame and return it as a JSON C string.
/// The caller must free the returned string with `stafflib_free_string`.
///
/// `key` is the key signature ordinal (0-14; anything else means C major).
/// Pass 0.0 for `width`/`height` to use the default view size.
///
/// # Safety
/// `notes` must point to `len` valid `i32` values, or be null with `len` 0.
#[no_mangle]
pub unsafe extern "C" fn stafflib_layout_json(
    notes: *const i32,
    len: usize,
    key: i32,
    width: f64,
    height: f64,
) -> *mut c_char {
    let notes = notes_from_raw(unsafe { raw_notes(notes, len) });
    let key = KeySignature::from_ordinal(key);

    match layout_json(&notes, key, view_from_raw(width, height)) {
        Ok(json) => CString::new(json).unwrap_or_default().into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Render a frame to SVG and return it as a C string.
/// The caller must free the returned string with `stafflib_free_string`.
///
/// # Safety
/// `notes` must point to `len` valid `i32` values, or be null with `len` 0.
#[no_mangle]
pub unsafe extern "C" fn stafflib_render_svg(
    notes: *const i32,
    len: usize,
    key: i32,
    width: f64,
    height: f64,
) -> *mut c_char {
    let notes = notes_from_raw(unsafe { raw_notes(notes, len) });
    let key = KeySignature::from_ordinal(key);
    let svg = render_to_svg(notes, key, view_from_raw(width, height));
    CString::new(svg).unwrap_or_default().into_raw()
}

/// Free a string previously returned by stafflib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a stafflib function, or null.
#[no_mangle]
pub unsafe extern "C" fn stafflib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
