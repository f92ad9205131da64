//! Pointer and keyboard event handlers for `GridView`.
//!
//! All methods here are `pub(crate)` helpers called from the event
//! closures wired up in `mod.rs`. Each mutates `GridState` synchronously
//! and schedules a frame when the transition asked for one.

use std::cell::RefCell;
use std::rc::Rc;

use crate::data::ChangeSink;
use crate::state::KeyAction;

use super::{GridView, SharedState};

impl GridView {
    pub(crate) fn internal_pointer_down(state: &Rc<RefCell<SharedState>>, x: f32, y: f32) {
        let needs_render = state.borrow_mut().grid.pointer_down(x, y);
        if needs_render {
            Self::schedule_render(state);
        }
    }

    pub(crate) fn internal_pointer_move(state: &Rc<RefCell<SharedState>>, x: f32, y: f32) {
        let needs_render = state.borrow_mut().grid.pointer_move(x, y);
        if needs_render {
            Self::schedule_render(state);
        }
    }

    pub(crate) fn internal_pointer_up(state: &Rc<RefCell<SharedState>>) {
        state.borrow_mut().grid.pointer_up();
    }

    /// Double-click: open an edit session and show the input overlay over
    /// the target cell, preloaded with the cell's current text.
    ///
    /// The overlay goes into the non-scrolling wrapper: the rect is in
    /// viewport space, and an absolutely-positioned child of the scroll
    /// container would render displaced by the scroll offsets.
    pub(crate) fn internal_double_click(state: &Rc<RefCell<SharedState>>, x: f32, y: f32) {
        let mut s = state.borrow_mut();
        let SharedState {
            grid,
            data,
            overlay,
            container,
            ..
        } = &mut *s;

        let rect = grid.begin_edit_at(x, y, data);
        let value = grid.edit.buffer().to_string();
        overlay.show(rect, &value, container.as_ref());
        drop(s);
        Self::schedule_render(state);
    }

    /// Document keydown: Enter commits an active edit; Ctrl/Cmd+C and
    /// Ctrl/Cmd+V run the grid copy and paste when no edit is open.
    /// Returns true when the event was consumed; unconsumed events keep
    /// their browser default, so clipboard keys work inside the edit
    /// input.
    pub(crate) fn internal_key_down(
        state: &Rc<RefCell<SharedState>>,
        key: &str,
        ctrl: bool,
    ) -> bool {
        let action = state.borrow().grid.key_down(key, ctrl);
        match action {
            KeyAction::CommitEdit => {
                Self::commit_active_edit(state);
                true
            }
            KeyAction::Copy => {
                Self::internal_copy(state);
                true
            }
            KeyAction::Paste => {
                Self::internal_paste(state);
                true
            }
            KeyAction::Ignore => false,
        }
    }

    /// Commit the overlay's current text through the change sink and
    /// return the session to idle.
    pub(crate) fn commit_active_edit(state: &Rc<RefCell<SharedState>>) {
        {
            let mut s = state.borrow_mut();
            let value = s.overlay.value().unwrap_or_default();
            if let Some(change) = s.grid.commit_edit(&value) {
                let changes = [change];
                s.data.apply(&changes);
                Self::emit_changes(&s, &changes);
            }
            s.overlay.hide();
        }
        Self::schedule_render(state);
    }
}
