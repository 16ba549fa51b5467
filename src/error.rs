//! Structured error types for timegrid.
//!
//! Layout resolution itself is total; errors only come from decoding input
//! documents and from rejected student moves.

/// All errors that can occur while loading input or planning moves.
#[derive(Debug, thiserror::Error)]
pub enum TimegridError {
    /// Input document could not be decoded.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A move referenced a class id that is not in the timetable.
    #[error("Unknown class: {0}")]
    UnknownClass(String),

    /// A move tried to take a student out of a class they are not in.
    #[error("Student {student} is not enrolled in class {class}")]
    StudentNotInClass { student: String, class: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TimegridError>;

#[cfg(target_arch = "wasm32")]
impl From<TimegridError> for wasm_bindgen::JsValue {
    fn from(e: TimegridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
