//! Stateful timetable handle for JavaScript hosts.
//!
//! A session owns one input snapshot plus the move planner, so a page can
//! drag students around and re-resolve the layout without round-tripping the
//! whole document through JSON on every drop.

use wasm_bindgen::prelude::*;

use crate::error::Result;
use crate::layout::resolve_layout;
use crate::moves::{FinalMove, MovePlanner};
use crate::types::{TimetableInput, TimetableLayout, ViewSettings};

#[wasm_bindgen]
pub struct TimetableSession {
    input: TimetableInput,
    planner: MovePlanner,
}

impl TimetableSession {
    pub fn from_input(input: TimetableInput) -> Self {
        let planner = MovePlanner::with_students(input.classes.clone(), input.students.clone());
        Self { input, planner }
    }

    /// Current input with pending moves applied.
    pub fn input(&self) -> &TimetableInput {
        &self.input
    }

    pub fn planner(&self) -> &MovePlanner {
        &self.planner
    }

    pub fn resolve(&self) -> TimetableLayout<'_> {
        resolve_layout(&self.input)
    }

    pub fn apply_settings(&mut self, settings: ViewSettings) {
        self.input.settings = settings;
    }

    /// Move a student and refresh the working class list.
    pub fn plan_move(&mut self, student_id: &str, from: &str, to: &str) -> Result<bool> {
        let changed = self.planner.move_student(student_id, from, to)?;
        if changed {
            self.sync_classes();
        }
        Ok(changed)
    }

    pub fn discard(&mut self) {
        self.planner.discard();
        self.sync_classes();
    }

    /// Accept pending moves as saved and return them.
    pub fn commit(&mut self) -> Vec<FinalMove> {
        self.planner.commit()
    }

    fn sync_classes(&mut self) {
        self.input.classes = self.planner.classes().to_vec();
    }
}

#[wasm_bindgen]
impl TimetableSession {
    /// Create a session from an input JSON document.
    ///
    /// # Errors
    /// Returns an error if the document cannot be decoded.
    #[wasm_bindgen(constructor)]
    pub fn new(json: &str) -> std::result::Result<TimetableSession, JsValue> {
        console_error_panic_hook::set_once();

        let input = TimetableInput::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_input(input))
    }

    /// Resolved layout as a JSON string.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    #[wasm_bindgen]
    pub fn layout(&self) -> std::result::Result<String, JsValue> {
        serde_json::to_string(&self.resolve())
            .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
    }

    /// Resolved layout as a JS object.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    #[wasm_bindgen(js_name = "layoutToJs")]
    pub fn layout_to_js(&self) -> std::result::Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.resolve())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Replace the view settings from a JSON document; missing fields take defaults.
    ///
    /// # Errors
    /// Returns an error if the settings cannot be decoded.
    #[wasm_bindgen(js_name = "setSettings")]
    pub fn set_settings(&mut self, json: &str) -> std::result::Result<(), JsValue> {
        let settings: ViewSettings =
            serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.apply_settings(settings);
        Ok(())
    }

    /// Drop a student onto another class. Returns false when nothing moved.
    ///
    /// # Errors
    /// Returns an error for an unknown class or a student not in the source class.
    #[wasm_bindgen(js_name = "moveStudent")]
    pub fn move_student(
        &mut self,
        student_id: &str,
        from_class_id: &str,
        to_class_id: &str,
    ) -> std::result::Result<bool, JsValue> {
        self.plan_move(student_id, from_class_id, to_class_id)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Pending moves in drop order, as JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    #[wasm_bindgen(js_name = "pendingMoves")]
    pub fn pending_moves(&self) -> std::result::Result<String, JsValue> {
        serde_json::to_string(self.planner.pending())
            .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
    }

    /// Compressed moves ready to be saved, as JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    #[wasm_bindgen(js_name = "finalMoves")]
    pub fn final_moves(&self) -> std::result::Result<String, JsValue> {
        serde_json::to_string(&self.planner.final_moves())
            .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
    }

    #[wasm_bindgen(js_name = "hasPendingMoves")]
    pub fn has_pending_moves(&self) -> bool {
        self.planner.is_pending()
    }

    /// Mark pending moves as saved by the host; returns them as JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    #[wasm_bindgen(js_name = "commitMoves")]
    pub fn commit_moves(&mut self) -> std::result::Result<String, JsValue> {
        serde_json::to_string(&self.commit())
            .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
    }

    #[wasm_bindgen(js_name = "discardMoves")]
    pub fn discard_moves(&mut self) {
        self.discard();
    }
}
