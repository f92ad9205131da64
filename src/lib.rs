//! gridview - virtualized infinite spreadsheet grid for the web
//!
//! An interactive grid widget rendered via WebAssembly and Canvas 2D:
//! - Renders only the visible cell range, at any scroll position
//! - Rectangular drag selection and inline cell editing
//! - Rectangle copy/paste through the system clipboard
//! - Virtual scroll region that grows as the user nears its edge
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { GridView } from 'gridview';
//! await init();
//! const grid = new GridView(canvas, window.devicePixelRatio);
//! grid.loadJson('{"0": {"0": "hello"}}');
//! grid.setChangeCallback((changes) => save(changes));
//! ```

// Core modules (DOM-free, tested natively)
pub mod clipboard;
pub mod data;
pub mod edit;
pub mod error;
pub mod labels;
pub mod layout;
pub mod region;
pub mod selection;
pub mod state;

// Rendering (pure frame builder + Canvas 2D executor)
pub mod render;

// Browser integration
#[cfg(target_arch = "wasm32")]
pub mod viewer;

#[cfg(target_arch = "wasm32")]
pub use viewer::GridView;

pub use error::{GridError, Result};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Crate version, for host-side diagnostics.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
