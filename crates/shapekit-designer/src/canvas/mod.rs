//! Canvas holding the ordered shape collection and the selection.

mod operations;
mod types;

pub use types::{DrawingObject, ShapeListEntry};

use shapekit_core::Point;

use crate::color::DEFAULT_COLOR;
use crate::model::{Shape, ShapeType};
use crate::selection_manager::SelectionManager;
use crate::shape_store::ShapeStore;

pub const DEFAULT_WIDTH: f64 = 800.0;
pub const DEFAULT_HEIGHT: f64 = 600.0;
pub const DEFAULT_GRID_SIZE: f64 = 5.0;
/// Smallest grid spacing drawn; finer grids are refused.
pub const MIN_GRID_SIZE: f64 = 1.0;

/// Canvas state managing shapes and selection.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub shape_store: ShapeStore,
    pub selection_manager: SelectionManager,
    width: f64,
    height: f64,
    grid_size: f64,
    /// Color given to newly created shapes.
    default_color: String,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Creates an 800x600 canvas with a 5 unit grid.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Creates a canvas with specified dimensions.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            shape_store: ShapeStore::new(),
            selection_manager: SelectionManager::new(),
            width,
            height,
            grid_size: DEFAULT_GRID_SIZE,
            default_color: DEFAULT_COLOR.to_string(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn grid_size(&self) -> f64 {
        self.grid_size
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        tracing::debug!("Canvas resized to {}x{}", width, height);
        self.width = width;
        self.height = height;
    }

    /// Sets the grid spacing. Sizes below [`MIN_GRID_SIZE`] and NaN are
    /// ignored.
    pub fn set_grid_size(&mut self, grid_size: f64) {
        if grid_size >= MIN_GRID_SIZE {
            self.grid_size = grid_size;
        } else {
            tracing::debug!("Ignoring grid size {}", grid_size);
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Returns the number of shapes on the canvas.
    pub fn shape_count(&self) -> usize {
        self.shape_store.len()
    }

    /// Shapes in draw order (bottom first).
    pub fn shapes(&self) -> impl DoubleEndedIterator<Item = &DrawingObject> {
        self.shape_store.iter()
    }

    pub fn get_shape(&self, id: u64) -> Option<&DrawingObject> {
        self.shape_store.get(id)
    }

    pub fn get_shape_mut(&mut self, id: u64) -> Option<&mut DrawingObject> {
        self.shape_store.get_mut(id)
    }

    pub fn default_color(&self) -> &str {
        &self.default_color
    }

    /// Sets the color used for shapes created from now on.
    pub fn set_default_color(&mut self, color: impl Into<String>) {
        self.default_color = color.into();
    }

    /// Adds a shape on top of the others and returns its id.
    pub fn add_shape(&mut self, shape: Shape) -> u64 {
        let id = self.shape_store.generate_id();
        let kind = shape.shape_type();
        self.shape_store
            .insert(DrawingObject::new(id, shape).with_color(self.default_color.clone()));
        tracing::info!("Created {} {}", kind, id);
        id
    }

    /// Creates a shape of `kind` anchored at `(x, y)` with default size.
    pub fn create_shape(&mut self, kind: ShapeType, x: f64, y: f64) -> u64 {
        self.add_shape(Shape::create(kind, x, y))
    }

    /// Creates a shape from its kind name. Unknown names create nothing.
    pub fn create_shape_named(&mut self, kind: &str, x: f64, y: f64) -> Option<u64> {
        match kind.parse::<ShapeType>() {
            Ok(kind) => Some(self.create_shape(kind, x, y)),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        }
    }

    /// Creates a shape anchored at the middle of the canvas.
    pub fn create_shape_at_center(&mut self, kind: ShapeType) -> u64 {
        let c = self.center();
        self.create_shape(kind, c.x, c.y)
    }

    /// Topmost shape containing `point`.
    pub fn hit_test(&self, point: Point) -> Option<&DrawingObject> {
        self.shape_store.hit_test(point)
    }

    /// Rows for the shape list panel, in draw order.
    pub fn shape_list(&self) -> Vec<ShapeListEntry> {
        self.shapes().map(ShapeListEntry::from).collect()
    }
}
