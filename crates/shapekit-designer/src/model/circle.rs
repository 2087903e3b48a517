use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use shapekit_core::{BoundingBox, Point};

use super::{common_properties, DesignerShape, Property, ShapeProperty};
use crate::renderer::{begin_shape, finish_shape, Appearance, DrawSurface};

pub const DEFAULT_RADIUS: f64 = 25.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignCircle {
    /// Top-left corner of the bounding square, not the circle's center.
    pub position: Point,
    pub radius: f64,
    pub rotation: f64,
}

impl DesignCircle {
    pub fn new(position: Point, radius: f64) -> Self {
        Self {
            position,
            radius,
            rotation: 0.0,
        }
    }

    pub fn at(position: Point) -> Self {
        Self::new(position, DEFAULT_RADIUS)
    }
}

impl DesignerShape for DesignCircle {
    fn center(&self) -> Point {
        Point::new(self.position.x + self.radius, self.position.y + self.radius)
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::new(
            self.position.x,
            self.position.y,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }

    fn contains_point(&self, p: Point) -> bool {
        // Rotationally symmetric: no need to undo the rotation.
        let c = self.center();
        let dx = p.x - c.x;
        let dy = p.y - c.y;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    fn draw(&self, surface: &mut dyn DrawSurface, appearance: &Appearance<'_>) {
        begin_shape(surface, self, appearance);
        surface.begin_path();
        surface.arc(0.0, 0.0, self.radius, 0.0, PI * 2.0);
        finish_shape(surface, appearance);
    }

    fn properties(&self) -> Vec<Property> {
        let mut props = common_properties(self.position, self.rotation);
        props.push(Property::number(ShapeProperty::Radius, "Radius", self.radius));
        props
    }

    fn set_dimension(&mut self, property: ShapeProperty, value: f64) -> bool {
        if property != ShapeProperty::Radius {
            return false;
        }
        self.radius = value;
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
