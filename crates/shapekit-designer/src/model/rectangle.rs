use serde::{Deserialize, Serialize};
use shapekit_core::{BoundingBox, Point};

use super::{common_properties, to_local, DesignerShape, Property, ShapeProperty};
use crate::renderer::{begin_shape, finish_shape, Appearance, DrawSurface};

pub const DEFAULT_WIDTH: f64 = 100.0;
pub const DEFAULT_HEIGHT: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRectangle {
    /// Top-left corner of the unrotated rectangle.
    pub position: Point,
    pub width: f64,
    pub height: f64,
    /// Rotation angle in degrees (converted to radians for rendering)
    pub rotation: f64,
}

impl DesignRectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            position: Point::new(x, y),
            width,
            height,
            rotation: 0.0,
        }
    }

    /// Default-sized rectangle anchored at `position`.
    pub fn at(position: Point) -> Self {
        Self::new(position.x, position.y, DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl DesignerShape for DesignRectangle {
    fn center(&self) -> Point {
        Point::new(
            self.position.x + self.width / 2.0,
            self.position.y + self.height / 2.0,
        )
    }

    fn bounding_box(&self) -> BoundingBox {
        // Origin is the raw anchor; callers needing the pivot use center().
        BoundingBox::new(self.position.x, self.position.y, self.width, self.height)
    }

    fn contains_point(&self, p: Point) -> bool {
        let local = to_local(p, self.center(), self.rotation);
        local.x.abs() <= self.width / 2.0 && local.y.abs() <= self.height / 2.0
    }

    fn draw(&self, surface: &mut dyn DrawSurface, appearance: &Appearance<'_>) {
        begin_shape(surface, self, appearance);
        surface.begin_path();
        surface.rect(
            -self.width / 2.0,
            -self.height / 2.0,
            self.width,
            self.height,
        );
        finish_shape(surface, appearance);
    }

    fn properties(&self) -> Vec<Property> {
        let mut props = common_properties(self.position, self.rotation);
        props.push(Property::number(ShapeProperty::Width, "Width", self.width));
        props.push(Property::number(ShapeProperty::Height, "Height", self.height));
        props
    }

    fn set_dimension(&mut self, property: ShapeProperty, value: f64) -> bool {
        match property {
            ShapeProperty::Width => self.width = value,
            ShapeProperty::Height => self.height = value,
            _ => return false,
        }
        true
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn rotation(&self) -> f64 {
        self.rotation
    }

    fn set_rotation(&mut self, degrees: f64) {
        self.rotation = degrees;
    }
}
