//! timegrid - academy timetable layout for the web
//!
//! Resolves a weekly class timetable into merged grid blocks per teacher or
//! room, exported to the browser via WebAssembly:
//! - Unified and legacy (group-position) period ids
//! - Per-slot teacher/room overrides
//! - Vertical merging of consecutive periods, optional merging across days
//! - Combined cells when several classes share a slot
//! - Student rosters with withdrawal, hold and newcomer status
//! - Drag-and-drop student moves with compression
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { resolveTimetable, TimetableSession } from 'timegrid';
//! await init();
//! const layout = JSON.parse(resolveTimetable(JSON.stringify(input)));
//! const session = new TimetableSession(JSON.stringify(input));
//! session.moveStudent('s1', 'classA', 'classB');
//! ```

pub mod error;
pub mod layout;
pub mod moves;
pub mod period;
pub mod resource;
pub mod roster;
pub mod schedule;
pub mod search;
pub mod session;
pub mod types;

use wasm_bindgen::prelude::*;

pub use layout::resolve_layout;
pub use session::TimetableSession;

pub use types::*;

/// Resolve an input document and return the layout as a JSON string.
///
/// # Errors
/// Returns an error if the input cannot be decoded.
pub fn resolve_json(json: &str) -> error::Result<String> {
    let input = TimetableInput::from_json(json)?;
    Ok(serde_json::to_string(&resolve_layout(&input))?)
}

/// Resolve a timetable input document into its layout
///
/// # Arguments
/// * `json` - A `TimetableInput` document
///
/// # Returns
/// A JSON string containing the resolved `TimetableLayout`
///
/// # Errors
/// Returns an error if the document is not a valid timetable input.
#[wasm_bindgen(js_name = "resolveTimetable")]
pub fn resolve_timetable(json: &str) -> Result<String, JsValue> {
    resolve_json(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resolve a timetable input document and return the layout as a `JsValue`
///
/// This is more efficient than `resolveTimetable` when the result will be
/// used directly in JavaScript.
///
/// # Errors
/// Returns an error if the document is not a valid timetable input.
#[wasm_bindgen(js_name = "resolveTimetableToJs")]
pub fn resolve_timetable_to_js(json: &str) -> Result<JsValue, JsValue> {
    let input = TimetableInput::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&resolve_layout(&input))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Human label for a class schedule ("월목 4교시", "월 20:10~21:05, ...")
///
/// `subject` picks the period table ("english"/"영어" or anything else for math).
#[must_use]
#[wasm_bindgen(js_name = "formatSchedule")]
pub fn format_schedule(
    schedule: Vec<String>,
    subject: &str,
    show_time: bool,
    detailed: bool,
) -> String {
    let table = period::SubjectTable::for_subject(subject);
    if detailed {
        schedule::format_schedule_detailed(&schedule, table)
    } else {
        schedule::format_schedule_compact(&schedule, table, show_time)
    }
}

/// Legacy "group-position" id to the unified scale; other tokens unchanged
#[must_use]
#[wasm_bindgen(js_name = "toUnifiedPeriod")]
pub fn to_unified_period(token: &str) -> String {
    period::to_unified_period(token)
}

/// Unified id 1..=8 to its legacy "group-position" form; other ids unchanged
#[must_use]
#[wasm_bindgen(js_name = "toLegacyPeriod")]
pub fn to_legacy_period(id: &str) -> String {
    period::to_legacy_period(id)
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
