//! # ShapeKit Designer
//!
//! Geometry, selection and editing for a small 2D diagram editor. Shapes are
//! rectangles, circles and triangles; each knows its center, bounding box,
//! rotation-aware hit test and how to draw itself.
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (UI entry points)
//!   └── Canvas (Drawing surface)
//!         ├── ShapeStore (Draw order, ids)
//!         └── SelectionManager (At most one selected shape)
//!
//! Renderer (DrawSurface, shared shape drawing, grid)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shapekit_designer::{DesignerState, RecordingSurface, ShapeType};
//!
//! let mut state = DesignerState::new();
//! let id = state.canvas.create_shape(ShapeType::Rectangle, 50.0, 50.0);
//!
//! assert_eq!(state.pointer_down(60.0, 60.0), Some(id));
//! state.update_shape_property("rotation", "45");
//!
//! let mut surface = RecordingSurface::new();
//! state.render(&mut surface);
//! assert_eq!(surface.depth(), 0);
//! ```

pub mod canvas;
pub mod color;
pub mod model;
pub mod renderer;
pub mod selection_manager;
pub mod shape_store;

// Integration modules
pub mod designer_state;

pub use canvas::{Canvas, DrawingObject, ShapeListEntry};
pub use color::{to_rgba, DEFAULT_COLOR};
pub use model::{
    DesignCircle, DesignRectangle, DesignTriangle, DesignerShape, Property, Shape,
    ShapeProperty, ShapeType, TriangleSide,
};
pub use renderer::{
    render_canvas, Appearance, DrawCommand, DrawSurface, RecordingSurface, RenderStyle, TextAlign,
    TextBaseline,
};
pub use selection_manager::SelectionManager;
pub use shape_store::ShapeStore;

// State and integration
pub use designer_state::{DesignerState, Key, PanelModel};
pub use shapekit_core::{BoundingBox, Point};
