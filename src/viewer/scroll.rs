//! Scroll handling for `GridView`.
//!
//! The scroll container's position drives the cell offsets and the
//! virtual region growth; when the region grows, the spacer div is
//! resized so the scrollbar range extends before the user can reach the
//! hard edge.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use web_sys::HtmlDivElement;

use super::{GridView, SharedState};

/// Fractional scroll positions are reported as integers by the element
/// getters; read the float property directly when available.
pub(crate) fn scroll_left_f64(element: &HtmlDivElement) -> f64 {
    Reflect::get(element.as_ref(), &JsValue::from_str("scrollLeft"))
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(f64::from(element.scroll_left()))
}

pub(crate) fn scroll_top_f64(element: &HtmlDivElement) -> f64 {
    Reflect::get(element.as_ref(), &JsValue::from_str("scrollTop"))
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(f64::from(element.scroll_top()))
}

impl GridView {
    pub(crate) fn internal_scroll(state: &Rc<RefCell<SharedState>>) {
        {
            let mut s = state.borrow_mut();
            let Some(container) = s.scroll_container.clone() else {
                return;
            };
            #[allow(clippy::cast_possible_truncation)]
            let scroll_x = scroll_left_f64(&container) as f32;
            #[allow(clippy::cast_possible_truncation)]
            let scroll_y = scroll_top_f64(&container) as f32;

            let outcome = s.grid.on_scroll(scroll_x, scroll_y);
            if outcome.region_grew {
                Self::apply_spacer_size(&s);
            }
        }
        Self::schedule_render(state);
    }

    /// Size the spacer div to the virtual region plus the edge margin.
    pub(crate) fn apply_spacer_size(s: &SharedState) {
        let Some(spacer) = &s.spacer else {
            return;
        };
        let style = spacer.style();
        let _ = style.set_property("width", &format!("{}px", s.grid.region.spacer_width()));
        let _ = style.set_property("height", &format!("{}px", s.grid.region.spacer_height()));
    }
}
