//! Clipboard wiring for `GridView`.
//!
//! Copy writes the raw selection record to the system clipboard,
//! fire-and-forget. Paste is the widget's only asynchronous boundary: the
//! clipboard read suspends, and the continuation pastes using the
//! selection snapshot captured at initiation, while re-reading source
//! cell values from the data source at resolution time. Clipboard access
//! or parse failures leave the grid untouched.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::clipboard::{copy_payload, paste_changes};
use crate::data::ChangeSink;

use super::{GridView, SharedState};

impl GridView {
    /// Serialize the current selection coordinates to the clipboard.
    pub(crate) fn internal_copy(state: &Rc<RefCell<SharedState>>) {
        let payload = {
            let s = state.borrow();
            copy_payload(&s.grid.selection.selection())
        };
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let _ = clipboard.write_text(&payload);
        }
    }

    /// Read the clipboard and replay the recorded rectangle at the
    /// current selection's anchor.
    pub(crate) fn internal_paste(state: &Rc<RefCell<SharedState>>) {
        // Placement uses the selection captured here, not whatever the
        // selection is when the clipboard read resolves.
        let snapshot = state.borrow().grid.selection.selection();
        let state = Rc::clone(state);
        spawn_local(async move {
            let Some(window) = web_sys::window() else {
                return;
            };
            let promise = window.navigator().clipboard().read_text();
            let Ok(value) = JsFuture::from(promise).await else {
                return;
            };
            let Some(payload) = value.as_string() else {
                return;
            };

            let applied = {
                let mut s = state.borrow_mut();
                match paste_changes(&payload, snapshot, &s.data) {
                    Some(outcome) => {
                        s.data.apply(&outcome.changes);
                        s.grid.selection.set_selection(outcome.selection);
                        Self::emit_changes(&s, &outcome.changes);
                        true
                    }
                    None => false,
                }
            };
            if applied {
                Self::schedule_render(&state);
            }
        });
    }
}
