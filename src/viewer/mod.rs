//! Main `GridView` struct - the wasm-bindgen entry point for the widget.
//!
//! This module provides:
//! - Owning the widget state (`GridState`) and the backing `TableData`
//! - Wiring the DOM: scroll container + spacer over the canvas, pointer,
//!   keyboard, scroll, and window-resize listeners
//! - Frame scheduling: every state change cancels any pending
//!   `requestAnimationFrame` and schedules a fresh one, so at most one
//!   render is in flight and it always observes the latest state
//! - Host integration: JSON seed data in, change-sets out via callback
//!
//! Event handlers are registered when the widget is created - no manual
//! JavaScript wiring required.

mod clipboard;
mod events;
mod input;
mod scroll;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlDivElement, HtmlElement, KeyboardEvent, MouseEvent};

use crate::data::{CellChange, DataSource, TableData};
use crate::render::{render_frame, CanvasSurface};
use crate::state::GridState;

use input::InputOverlay;

/// Shared state accessed by the event-handler closures.
pub(crate) struct SharedState {
    pub(crate) grid: GridState,
    pub(crate) data: TableData,
    pub(crate) surface: Option<CanvasSurface>,
    pub(crate) overlay: InputOverlay,
    pub(crate) change_callback: Option<Function>,
    /// The canvas's parent - the non-scrolling widget wrapper. The edit
    /// overlay attaches here, not inside the scroll container, so its
    /// viewport-space coordinates hold at any scroll position.
    pub(crate) container: Option<HtmlElement>,
    pub(crate) scroll_container: Option<HtmlDivElement>,
    pub(crate) spacer: Option<HtmlDivElement>,
    pub(crate) raf_id: Option<i32>,
    pub(crate) raf_closure: Option<Closure<dyn FnMut()>>,
    pub(crate) dpr: f32,
}

/// The grid widget exported to JavaScript.
#[wasm_bindgen]
pub struct GridView {
    state: Rc<RefCell<SharedState>>,
    #[allow(dead_code)]
    closures: Vec<Closure<dyn FnMut(MouseEvent)>>,
    #[allow(dead_code)]
    key_closure: Option<Closure<dyn FnMut(KeyboardEvent)>>,
    #[allow(dead_code)]
    scroll_closure: Option<Closure<dyn FnMut(web_sys::Event)>>,
    #[allow(dead_code)]
    resize_closure: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

#[wasm_bindgen]
impl GridView {
    /// Create the widget around a canvas.
    ///
    /// The canvas's parent element becomes the widget's container: a
    /// transparent scroll layer with a spacer div is stacked on top of the
    /// canvas, and all listeners are attached here.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, dpr: f32) -> Result<GridView, JsValue> {
        console_error_panic_hook::set_once();

        let physical_width = canvas.width().max(1);
        let physical_height = canvas.height().max(1);
        let mut surface = CanvasSurface::new(canvas.clone())?;
        surface.resize(physical_width, physical_height, dpr);

        #[allow(clippy::cast_precision_loss)]
        let logical_width = physical_width as f32 / dpr;
        #[allow(clippy::cast_precision_loss)]
        let logical_height = physical_height as f32 / dpr;

        let state = Rc::new(RefCell::new(SharedState {
            grid: GridState::new(logical_width, logical_height),
            data: TableData::new(),
            surface: Some(surface),
            overlay: InputOverlay::new(),
            change_callback: None,
            container: None,
            scroll_container: None,
            spacer: None,
            raf_id: None,
            raf_closure: None,
            dpr,
        }));

        // Scroll layer goes in BEFORE the mouse listeners so the
        // container is available as the event target.
        let (scroll_container, scroll_closure) = Self::setup_scroll_layer(&canvas, &state);

        let event_target: &HtmlElement = scroll_container
            .as_ref()
            .map(|c| c.as_ref() as &HtmlElement)
            .unwrap_or(&canvas);
        let mut closures: Vec<Closure<dyn FnMut(MouseEvent)>> = Vec::new();

        // Pointer down
        {
            let state = Rc::clone(&state);
            let container_ref = event_target.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                let (x, y) = relative_point(&container_ref, &event);
                Self::internal_pointer_down(&state, x, y);
            }) as Box<dyn FnMut(MouseEvent)>);
            event_target
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        // Pointer move (selection drag)
        {
            let state = Rc::clone(&state);
            let container_ref = event_target.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                let (x, y) = relative_point(&container_ref, &event);
                Self::internal_pointer_move(&state, x, y);
            }) as Box<dyn FnMut(MouseEvent)>);
            event_target
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        // Pointer up
        {
            let state = Rc::clone(&state);
            let closure = Closure::wrap(Box::new(move |_event: MouseEvent| {
                Self::internal_pointer_up(&state);
            }) as Box<dyn FnMut(MouseEvent)>);
            event_target
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        // Double-click opens the cell editor
        {
            let state = Rc::clone(&state);
            let container_ref = event_target.clone();
            let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
                let (x, y) = relative_point(&container_ref, &event);
                Self::internal_double_click(&state, x, y);
            }) as Box<dyn FnMut(MouseEvent)>);
            event_target
                .add_event_listener_with_callback("dblclick", closure.as_ref().unchecked_ref())
                .ok();
            closures.push(closure);
        }

        // Keyboard handler on document: Enter commit, Ctrl+C / Ctrl+V
        let key_closure = {
            let state = Rc::clone(&state);
            let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                let key = event.key();
                let ctrl = event.ctrl_key() || event.meta_key();
                if Self::internal_key_down(&state, &key, ctrl) {
                    event.prevent_default();
                }
            }) as Box<dyn FnMut(KeyboardEvent)>);

            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document
                    .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
                    .ok();
            }
            Some(closure)
        };

        // Window resize keeps the viewport in sync with the surface
        let resize_closure = {
            let state = Rc::clone(&state);
            let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
                Self::internal_window_resize(&state);
            }) as Box<dyn FnMut(web_sys::Event)>);

            if let Some(window) = web_sys::window() {
                window
                    .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
                    .ok();
            }
            Some(closure)
        };

        let view = GridView {
            state,
            closures,
            key_closure,
            scroll_closure,
            resize_closure,
        };
        Self::schedule_render(&view.state);
        Ok(view)
    }

    /// Load seed cell data from a JSON object of objects:
    /// `{"0": {"0": "hello"}}` (row index, then column index).
    #[wasm_bindgen(js_name = "loadJson")]
    pub fn load_json(&mut self, json: &str) -> Result<(), JsValue> {
        {
            let mut s = self.state.borrow_mut();
            s.data.load_json(json)?;
        }
        Self::schedule_render(&self.state);
        Ok(())
    }

    /// Set a single cell's text. Empty text clears the cell.
    #[wasm_bindgen(js_name = "setCell")]
    pub fn set_cell(&mut self, row: u32, col: u32, value: &str) {
        {
            let mut s = self.state.borrow_mut();
            s.data.set(row, col, value);
        }
        Self::schedule_render(&self.state);
    }

    /// Current text of a cell, if any.
    #[wasm_bindgen(js_name = "cellValue")]
    pub fn cell_value(&self, row: u32, col: u32) -> Option<String> {
        self.state.borrow().data.get(row, col)
    }

    /// Register a callback receiving every committed change-set as an
    /// array of `{row, col, value}` records.
    #[wasm_bindgen(js_name = "setChangeCallback")]
    pub fn set_change_callback(&mut self, callback: Option<Function>) {
        self.state.borrow_mut().change_callback = callback;
    }

    /// Current selection as `{x1, y1, x2, y2}` (raw corners, -1 sentinel).
    #[wasm_bindgen(js_name = "getSelection")]
    pub fn get_selection(&self) -> JsValue {
        let selection = self.state.borrow().grid.selection.selection();
        serde_wasm_bindgen::to_value(&selection).unwrap_or(JsValue::NULL)
    }

    /// Hit-test: cell at a viewport point, as `[col, row]`.
    #[wasm_bindgen(js_name = "cellAtPoint")]
    pub fn cell_at_point(&self, x: f32, y: f32) -> Vec<u32> {
        let (col, row) = self.state.borrow().grid.cell_at_point(x, y);
        vec![col, row]
    }

    /// True while a cell edit is open.
    #[wasm_bindgen(js_name = "isEditing")]
    pub fn is_editing(&self) -> bool {
        self.state.borrow().grid.edit.is_active()
    }

    /// Copy the current selection coordinates to the clipboard.
    pub fn copy(&self) {
        Self::internal_copy(&self.state);
    }

    /// Paste the clipboard rectangle at the current selection.
    pub fn paste(&self) {
        Self::internal_paste(&self.state);
    }

    /// Resize the drawing surface to physical pixels.
    pub fn resize(&mut self, physical_width: u32, physical_height: u32, dpr: f32) {
        {
            let mut s = self.state.borrow_mut();
            s.dpr = dpr;
            #[allow(clippy::cast_precision_loss)]
            let logical_width = physical_width.max(1) as f32 / dpr;
            #[allow(clippy::cast_precision_loss)]
            let logical_height = physical_height.max(1) as f32 / dpr;
            s.grid.resize(logical_width, logical_height);
            if let Some(surface) = s.surface.as_mut() {
                surface.resize(physical_width.max(1), physical_height.max(1), dpr);
            }
        }
        Self::schedule_render(&self.state);
    }

    /// Draw a frame immediately, outside the animation-frame schedule.
    pub fn render(&self) {
        Self::render_now(&self.state);
    }
}

// Internal plumbing (not exported).
impl GridView {
    /// Cancel any pending frame and schedule a fresh one, so the render
    /// always observes the latest state and at most one is in flight.
    pub(crate) fn schedule_render(state: &Rc<RefCell<SharedState>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let mut s = state.borrow_mut();
        if let Some(raf_id) = s.raf_id.take() {
            let _ = window.cancel_animation_frame(raf_id);
        }
        if s.raf_closure.is_none() {
            let weak_state = Rc::downgrade(state);
            let closure = Closure::wrap(Box::new(move || {
                if let Some(state) = weak_state.upgrade() {
                    GridView::render_now(&state);
                }
            }) as Box<dyn FnMut()>);
            s.raf_closure = Some(closure);
        }
        let Some(callback) = s.raf_closure.as_ref() else {
            return;
        };
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => s.raf_id = Some(id),
            Err(_) => s.raf_id = None,
        }
    }

    pub(crate) fn render_now(state: &Rc<RefCell<SharedState>>) {
        let s = &mut *state.borrow_mut();
        s.raf_id = None;
        let commands = render_frame(&s.grid, &s.data);
        if let Some(surface) = s.surface.as_ref() {
            surface.execute(&commands);
        }
    }

    /// Hand a committed change-set to the host callback, if registered.
    pub(crate) fn emit_changes(s: &SharedState, changes: &[CellChange]) {
        let Some(callback) = s.change_callback.as_ref() else {
            return;
        };
        if let Ok(value) = serde_wasm_bindgen::to_value(changes) {
            let _ = callback.call1(&JsValue::NULL, &value);
        }
    }

    /// Build the transparent scroll layer over the canvas: the container
    /// owns the native scrollbars, the spacer inside it creates the
    /// virtual scroll range.
    fn setup_scroll_layer(
        canvas: &HtmlCanvasElement,
        state: &Rc<RefCell<SharedState>>,
    ) -> (
        Option<HtmlDivElement>,
        Option<Closure<dyn FnMut(web_sys::Event)>>,
    ) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return (None, None);
        };
        let Some(parent) = canvas.parent_element() else {
            return (None, None);
        };

        let create_div = || -> Option<HtmlDivElement> {
            document
                .create_element("div")
                .ok()
                .and_then(|el| el.dyn_into::<HtmlDivElement>().ok())
        };
        let Some(scroll_container) = create_div() else {
            return (None, None);
        };
        let Some(spacer) = create_div() else {
            return (None, None);
        };

        if let Some(parent_el) = parent.dyn_ref::<HtmlElement>() {
            let parent_style = parent_el.style();
            if parent_style
                .get_property_value("position")
                .unwrap_or_default()
                .is_empty()
            {
                let _ = parent_style.set_property("position", "relative");
            }
        }

        // Canvas sits behind the scroll layer and never receives events.
        let canvas_style = canvas.style();
        let _ = canvas_style.set_property("position", "absolute");
        let _ = canvas_style.set_property("top", "0");
        let _ = canvas_style.set_property("left", "0");
        let _ = canvas_style.set_property("width", "100%");
        let _ = canvas_style.set_property("height", "100%");
        let _ = canvas_style.set_property("z-index", "0");
        let _ = canvas_style.set_property("pointer-events", "none");

        // Scroll container on top, transparent, owns the scrollbars.
        let container_style = scroll_container.style();
        let _ = container_style.set_property("position", "absolute");
        let _ = container_style.set_property("top", "0");
        let _ = container_style.set_property("left", "0");
        let _ = container_style.set_property("width", "100%");
        let _ = container_style.set_property("height", "100%");
        let _ = container_style.set_property("overflow", "scroll");
        let _ = container_style.set_property("z-index", "1");
        let _ = container_style.set_property("background", "transparent");
        let _ = scroll_container.set_attribute("data-gridview-scroll", "");

        let spacer_style = spacer.style();
        let _ = spacer_style.set_property("position", "absolute");
        let _ = spacer_style.set_property("top", "0");
        let _ = spacer_style.set_property("left", "0");

        let _ = scroll_container.append_child(&spacer);
        let _ = parent.append_child(&scroll_container);

        {
            let mut s = state.borrow_mut();
            s.container = parent.dyn_ref::<HtmlElement>().cloned();
            s.scroll_container = Some(scroll_container.clone());
            s.spacer = Some(spacer);
            Self::apply_spacer_size(&s);
        }

        let state_clone = Rc::clone(state);
        let scroll_closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            GridView::internal_scroll(&state_clone);
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = scroll_container
            .add_event_listener_with_callback("scroll", scroll_closure.as_ref().unchecked_ref());

        (Some(scroll_container), Some(scroll_closure))
    }

    /// Window resize: track the container's new logical size and resize
    /// the backing store for the device pixel ratio.
    pub(crate) fn internal_window_resize(state: &Rc<RefCell<SharedState>>) {
        {
            let mut s = state.borrow_mut();
            let Some(container) = s.scroll_container.clone() else {
                return;
            };
            let rect = container.get_bounding_client_rect();
            #[allow(clippy::cast_possible_truncation)]
            let logical_width = (rect.width() as f32).max(1.0);
            #[allow(clippy::cast_possible_truncation)]
            let logical_height = (rect.height() as f32).max(1.0);
            let dpr = s.dpr;
            s.grid.resize(logical_width, logical_height);
            if let Some(surface) = s.surface.as_mut() {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                surface.resize(
                    (logical_width * dpr).round() as u32,
                    (logical_height * dpr).round() as u32,
                    dpr,
                );
            }
        }
        Self::schedule_render(state);
    }
}

/// Event coordinates relative to the listening element.
#[allow(clippy::cast_possible_truncation)]
fn relative_point(element: &HtmlElement, event: &MouseEvent) -> (f32, f32) {
    let rect = element.get_bounding_client_rect();
    let x = event.client_x() as f32 - rect.left() as f32;
    let y = event.client_y() as f32 - rect.top() as f32;
    (x, y)
}
