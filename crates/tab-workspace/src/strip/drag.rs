//! Drag-to-reorder gesture.
//!
//! A press only becomes a drag once the pointer has travelled at least the
//! configured threshold, so an ordinary click never reorders anything. On
//! release the dragged tab's index and the drop target's index are turned
//! into one [`TabStore::move_tab`] call.

use super::{StripOutcome, TabStrip};
use crate::store::TabStore;
use crate::tab::TabId;

#[derive(Debug, Clone)]
pub(super) struct DragState {
    pub(super) tab_id: TabId,
    origin_x: f64,
    active: bool,
}

impl TabStrip {
    /// Pointer pressed on a tab at horizontal position `x`.
    pub fn press(&mut self, id: TabId, x: f64) {
        self.suppress_click = false;
        self.drag = Some(DragState {
            tab_id: id,
            origin_x: x,
            active: false,
        });
    }

    /// Pointer moved while pressed. Returns `true` while a drag is active.
    pub fn pointer_move(&mut self, x: f64) -> bool {
        let threshold = self.config.drag_threshold;
        let Some(state) = self.drag.as_mut() else {
            return false;
        };
        if !state.active && (x - state.origin_x).abs() >= threshold {
            tracing::trace!("Drag started on {}", state.tab_id);
            state.active = true;
        }
        state.active
    }

    /// Tab being dragged, once past the threshold.
    pub fn dragging(&self) -> Option<TabId> {
        self.drag
            .as_ref()
            .filter(|state| state.active)
            .map(|state| state.tab_id)
    }

    /// Pointer released over `target` (or outside any tab).
    ///
    /// A press that never crossed the threshold is left for the click
    /// handler. A real drag always swallows the click that follows, even
    /// when it was dropped where it started.
    pub fn release_over(&mut self, store: &mut TabStore, target: Option<TabId>) -> StripOutcome {
        let Some(state) = self.drag.take() else {
            return StripOutcome::Ignored;
        };
        if !state.active {
            return StripOutcome::Ignored;
        }
        self.suppress_click = true;

        let Some(target) = target else {
            return StripOutcome::Ignored;
        };
        let (Some(from), Some(to)) = (store.position(state.tab_id), store.position(target)) else {
            return StripOutcome::Ignored;
        };
        if store.move_tab(from, to) {
            StripOutcome::Moved { from, to }
        } else {
            StripOutcome::Ignored
        }
    }

    /// Abandons the gesture (pointer left the window, Escape pressed).
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }
}
