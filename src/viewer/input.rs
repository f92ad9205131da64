//! DOM input overlay for cell editing.
//!
//! Creates an `<input>` element positioned over the editing cell, lazily,
//! and reuses it for every session. The input must live in the
//! non-scrolling widget wrapper: its rect is in viewport space, so
//! parenting it inside the scroll container would shift it by the current
//! scroll offsets. Enter handling lives in the document keydown handler
//! in `events.rs`.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::state::EditOverlayRect;

/// Input overlay for cell editing.
pub(crate) struct InputOverlay {
    input: Option<HtmlInputElement>,
}

impl InputOverlay {
    pub(crate) fn new() -> Self {
        InputOverlay { input: None }
    }

    /// Show the overlay at `rect` (logical pixels relative to the
    /// container) preloaded with `current_value`.
    pub(crate) fn show(
        &mut self,
        rect: EditOverlayRect,
        current_value: &str,
        container: Option<&HtmlElement>,
    ) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let Some(input) = self.get_or_create_input(&document, container) else {
            return;
        };
        let style = input.style();

        let _ = style.set_property("display", "block");
        let _ = style.set_property("left", &format!("{}px", rect.x));
        let _ = style.set_property("top", &format!("{}px", rect.y));
        let _ = style.set_property("width", &format!("{}px", rect.width));
        let _ = style.set_property("height", &format!("{}px", rect.height));

        input.set_value(current_value);
        let _ = input.focus();
        input.select();
    }

    /// Hide the overlay.
    pub(crate) fn hide(&mut self) {
        if let Some(ref input) = self.input {
            let _ = input.style().set_property("display", "none");
            let _ = input.blur();
        }
    }

    /// Current input value.
    pub(crate) fn value(&self) -> Option<String> {
        self.input.as_ref().map(|i| i.value())
    }

    fn get_or_create_input(
        &mut self,
        document: &Document,
        container: Option<&HtmlElement>,
    ) -> Option<&HtmlInputElement> {
        if self.input.is_none() {
            let input = document
                .create_element("input")
                .ok()?
                .dyn_into::<HtmlInputElement>()
                .ok()?;
            input.set_type("text");
            let style = input.style();
            let _ = style.set_property("position", "absolute");
            let _ = style.set_property("z-index", "10");
            let _ = style.set_property("box-sizing", "border-box");
            let _ = style.set_property("outline", "none");
            let _ = style.set_property("border", "none");
            let _ = style.set_property("color", "black");
            let _ = style.set_property("font-size", "13px");
            let _ = style.set_property("font-family", "sans-serif");
            let _ = style.set_property("background", "#fff");
            let _ = style.set_property("display", "none");

            if let Some(c) = container {
                let _ = c.append_child(&input);
            } else if let Some(body) = document.body() {
                let _ = body.append_child(&input);
            }

            self.input = Some(input);
        }

        self.input.as_ref()
    }
}

impl Drop for InputOverlay {
    fn drop(&mut self) {
        if let Some(ref input) = self.input {
            if let Some(parent) = input.parent_node() {
                let _ = parent.remove_child(input);
            }
        }
    }
}
