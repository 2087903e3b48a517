//! Pointer and keyboard handling.

use shapekit_core::Point;

use super::DesignerState;

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Delete,
    Other,
}

impl DesignerState {
    /// Selects the topmost shape under the pointer and starts dragging it.
    /// Pressing on empty canvas clears the selection.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> Option<u64> {
        let point = Point::new(x, y);
        let hit = self.canvas.select_at(point);
        self.drag_last = hit.map(|_| point);
        hit
    }

    /// Moves the dragged shape by the pointer delta since the last event.
    /// Returns whether anything moved.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        let Some(last) = self.drag_last else {
            return false;
        };
        if self.canvas.selected_id().is_none() {
            return false;
        }
        self.canvas.move_selected(x - last.x, y - last.y);
        self.drag_last = Some(Point::new(x, y));
        true
    }

    pub fn pointer_up(&mut self) {
        self.drag_last = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_last.is_some()
    }

    /// `Delete` removes the selected shape; other keys do nothing.
    pub fn key_down(&mut self, key: Key) -> bool {
        match key {
            Key::Delete => {
                self.drag_last = None;
                self.canvas.delete_selected().is_some()
            }
            Key::Other => false,
        }
    }
}
