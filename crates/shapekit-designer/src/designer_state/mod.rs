//! Designer state manager for UI integration.
//!
//! Owns the canvas and the render style, and exposes the entry points the UI
//! calls: pointer and keyboard input, property panel edits and rendering.
//! Every call runs to completion before the next one, so rendering always
//! sees a settled state.
//!
//! This module is split into submodules:
//! - `interaction`: Pointer drag-select and keyboard handling
//! - `properties`: Property panel model and edits on the selected shape

mod interaction;
mod properties;

pub use interaction::Key;
pub use properties::{PanelModel, QUICK_ROTATIONS};

use shapekit_core::Point;

use crate::canvas::Canvas;
use crate::renderer::{render_canvas, DrawSurface, RenderStyle};

/// Designer state for UI integration
#[derive(Debug, Clone, Default)]
pub struct DesignerState {
    pub canvas: Canvas,
    pub style: RenderStyle,
    /// Last pointer position while a drag is in progress.
    drag_last: Option<Point>,
}

impl DesignerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_canvas(canvas: Canvas, style: RenderStyle) -> Self {
        Self {
            canvas,
            style,
            drag_last: None,
        }
    }

    /// Draws the whole canvas onto `surface`.
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        render_canvas(surface, &self.canvas, &self.style);
    }
}
