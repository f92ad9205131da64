//! Structured error types for gridview.
//!
//! Replaces `Result<T, String>` throughout the codebase with proper error types.

/// All errors that can occur in gridview state handling and rendering.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Seed-data or clipboard payload deserialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Rendering error.
    #[error("Render error: {0}")]
    Render(String),

    /// Missing or inaccessible browser capability (canvas context, DOM node).
    #[error("Surface error: {0}")]
    Surface(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

impl From<String> for GridError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for GridError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
