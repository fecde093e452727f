//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JIntArray};
use jni::sys::{jfloat, jint, jstring};
use jni::JNIEnv;

use crate::model::{KeySignature, MidiNote, ViewSize};
use crate::pitch::validate_note;
use crate::{layout_json, render_to_svg};

/// Copy a Java `int[]` of MIDI notes, skipping values outside 0-127.
fn read_notes(env: &mut JNIEnv, notes: &JIntArray) -> Option<Vec<MidiNote>> {
    if notes.is_null() {
        return Some(Vec::new());
    }
    let len = env.get_array_length(notes).ok()?;
    let mut raw = vec![0 as jint; len.max(0) as usize];
    env.get_int_array_region(notes, 0, &mut raw).ok()?;
    Some(raw.into_iter().filter_map(|n| validate_note(n as i64).ok()).collect())
}

fn view(width: jfloat, height: jfloat) -> ViewSize {
    ViewSize { width: width as f64, height: height as f64 }
}

/// Render the grand staff for the held notes to SVG.
///
/// Called from Kotlin as:
///   external fun renderSvg(notes: IntArray, key: Int, width: Float, height: Float): String?
#[no_mangle]
pub extern "system" fn Java_com_notationchordhelper_app_StaffLib_renderSvg(
    mut env: JNIEnv,
    _class: JClass,
    notes: JIntArray,
    key: jint,
    width: jfloat,
    height: jfloat,
) -> jstring {
    let Some(notes) = read_notes(&mut env, &notes) else {
        return std::ptr::null_mut();
    };

    let svg = render_to_svg(notes, KeySignature::from_ordinal(key), view(width, height));
    match env.new_string(&svg) {
        Ok(js) => js.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Lay out the held notes and return the frame as JSON.
///
/// Called from Kotlin as:
///   external fun layoutJson(notes: IntArray, key: Int, width: Float, height: Float): String?
#[no_mangle]
pub extern "system" fn Java_com_notationchordhelper_app_StaffLib_layoutJson(
    mut env: JNIEnv,
    _class: JClass,
    notes: JIntArray,
    key: jint,
    width: jfloat,
    height: jfloat,
) -> jstring {
    let Some(notes) = read_notes(&mut env, &notes) else {
        return std::ptr::null_mut();
    };

    match layout_json(&notes, KeySignature::from_ordinal(key), view(width, height)) {
        Ok(json) => match env.new_string(&json) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(_) => std::ptr::null_mut(),
    }
}
