//! Triangle defined by its three side lengths.
//!
//! The local frame puts side A on the x axis, centered on the origin, and
//! raises the third vertex above it (negative y) using the law of cosines.
//! Side lengths are kept inside `[MIN_SIDE, MAX_SIDE]` and repaired to
//! satisfy the triangle inequality after every edit.

use serde::{Deserialize, Serialize};
use shapekit_core::{parse_number, BoundingBox, Point};

use super::{common_properties, to_local, DesignerShape, Property, ShapeProperty};
use crate::renderer::{begin_shape, finish_shape, Appearance, DrawSurface};

pub const MIN_SIDE: f64 = 10.0;
pub const MAX_SIDE: f64 = 200.0;
pub const DEFAULT_SIDE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriangleSide {
    A,
    B,
    C,
}

impl TriangleSide {
    pub fn from_property(property: ShapeProperty) -> Option<Self> {
        match property {
            ShapeProperty::SideA => Some(TriangleSide::A),
            ShapeProperty::SideB => Some(TriangleSide::B),
            ShapeProperty::SideC => Some(TriangleSide::C),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignTriangle {
    /// Reference corner the local frame is offset by.
    pub position: Point,
    /// Base, lying on the local x axis.
    pub side_a: f64,
    /// Right side.
    pub side_b: f64,
    /// Left side, running from the first base vertex to the apex.
    pub side_c: f64,
    pub rotation: f64,
}

impl DesignTriangle {
    /// Equilateral triangle with the default side length.
    pub fn at(position: Point) -> Self {
        Self::with_sides(position, DEFAULT_SIDE, DEFAULT_SIDE, DEFAULT_SIDE)
    }

    /// Builds a triangle and brings the sides into a valid state.
    pub fn with_sides(position: Point, side_a: f64, side_b: f64, side_c: f64) -> Self {
        let mut triangle = Self {
            position,
            side_a,
            side_b,
            side_c,
            rotation: 0.0,
        };
        triangle.validate_sides();
        triangle
    }

    pub fn side(&self, side: TriangleSide) -> f64 {
        match side {
            TriangleSide::A => self.side_a,
            TriangleSide::B => self.side_b,
            TriangleSide::C => self.side_c,
        }
    }

    /// Sets one side, then revalidates all three. NaN is ignored.
    pub fn set_side(&mut self, side: TriangleSide, value: f64) {
        if value.is_nan() {
            return;
        }
        match side {
            TriangleSide::A => self.side_a = value,
            TriangleSide::B => self.side_b = value,
            TriangleSide::C => self.side_c = value,
        }
        self.validate_sides();
    }

    /// Parses `raw` and applies it to `side`. Unparseable input leaves the
    /// triangle untouched and returns `false`.
    pub fn update_side(&mut self, side: TriangleSide, raw: &str) -> bool {
        match parse_number(raw) {
            Some(value) => {
                self.set_side(side, value);
                true
            }
            None => {
                tracing::debug!("Ignoring non-numeric side value {:?}", raw);
                false
            }
        }
    }

    /// Clamps each side to `[MIN_SIDE, MAX_SIDE]`, then repairs the triangle
    /// inequality in the fixed order C (from A+B), A (from B+C), B (from A+C),
    /// shrinking the offending side to one unit below the sum of the others.
    pub fn validate_sides(&mut self) {
        self.side_a = self.side_a.clamp(MIN_SIDE, MAX_SIDE);
        self.side_b = self.side_b.clamp(MIN_SIDE, MAX_SIDE);
        self.side_c = self.side_c.clamp(MIN_SIDE, MAX_SIDE);

        if self.side_a + self.side_b <= self.side_c {
            self.side_c = self.side_a + self.side_b - 1.0;
            tracing::debug!("Repaired triangle side C to {}", self.side_c);
        }
        if self.side_b + self.side_c <= self.side_a {
            self.side_a = self.side_b + self.side_c - 1.0;
            tracing::debug!("Repaired triangle side A to {}", self.side_a);
        }
        if self.side_a + self.side_c <= self.side_b {
            self.side_b = self.side_a + self.side_c - 1.0;
            tracing::debug!("Repaired triangle side B to {}", self.side_b);
        }
    }

    /// Whether all three strict triangle inequalities hold.
    pub fn is_valid(&self) -> bool {
        self.side_a + self.side_b > self.side_c
            && self.side_b + self.side_c > self.side_a
            && self.side_a + self.side_c > self.side_b
    }

    /// Vertices in the local (unrotated, unpositioned) frame.
    pub fn vertices(&self) -> [Point; 3] {
        let a = self.side_a;
        let c = self.side_c;
        let cos_b = (a * a + c * c - self.side_b * self.side_b) / (2.0 * a * c);
        let angle_b = cos_b.acos();

        let x1 = -a / 2.0;
        let y1 = 0.0;
        let x2 = a / 2.0;
        let y2 = 0.0;
        let x3 = x1 + c * angle_b.cos();
        let y3 = -c * angle_b.sin();

        [Point::new(x1, y1), Point::new(x2, y2), Point::new(x3, y3)]
    }

    /// Altitude onto side A, from Heron's formula.
    pub fn height(&self) -> f64 {
        let (a, b, c) = (self.side_a, self.side_b, self.side_c);
        let s = (a + b + c) / 2.0;
        let area = (s * (s - a) * (s - b) * (s - c)).sqrt();
        (2.0 * area) / a
    }
}

impl DesignerShape for DesignTriangle {
    fn center(&self) -> Point {
        let [v1, v2, v3] = self.vertices();
        Point::new(
            self.position.x + (v1.x + v2.x + v3.x) / 3.0,
            self.position.y + (v1.y + v2.y + v3.y) / 3.0,
        )
    }

    fn bounding_box(&self) -> BoundingBox {
        let [v1, v2, v3] = self.vertices();
        let min_x = v1.x.min(v2.x).min(v3.x);
        let max_x = v1.x.max(v2.x).max(v3.x);
        let min_y = v1.y.min(v2.y).min(v3.y);
        let max_y = v1.y.max(v2.y).max(v3.y);

        BoundingBox::from_corners(
            self.position.x + min_x,
            self.position.y + min_y,
            self.position.x + max_x,
            self.position.y + max_y,
        )
    }

    fn contains_point(&self, p: Point) -> bool {
        let local = to_local(p, self.center(), self.rotation);
        let [Point { x: x1, y: y1 }, Point { x: x2, y: y2 }, Point { x: x3, y: y3 }] =
            self.vertices();

        let denominator = (y2 - y3) * (x1 - x3) + (x3 - x2) * (y1 - y3);
        let a1 = ((y2 - y3) * (local.x - x3) + (x3 - x2) * (local.y - y3)) / denominator;
        let b1 = ((y3 - y1) * (local.x - x3) + (x1 - x3) * (local.y - y3)) / denominator;
        let c1 = 1.0 - a1 - b1;

        (0.0..=1.0).contains(&a1) && (0.0..=1.0).contains(&b1) && (0.0..=1.0).contains(&c1)
    }

    fn draw(&self, surface: &mut dyn DrawSurface, appearance: &Appearance<'_>) {
        begin_shape(surface, self, appearance);
        let [v1, v2, v3] = self.vertices();
        surface.begin_path();
        surface.move_to(v1.x, v1.y);
        surface.line_to(v2.x, v2.y);
        surface.line_to(v3.x, v3.y);
        surface.close_path();
        finish_shape(surface, appearance);
    }

    fn properties(&self) -> Vec<Property> {
        let mut props = common_properties(self.position, self.rotation);
        props.push(Property::number(
            ShapeProperty::SideA,
            "Base (Side A)",
            self.side_a,
        ));
        props.push(Property::number(
            ShapeProperty::SideB,
            "Right Side (Side B)",
            self.side_b,
        ));
        props.push(Property::number(
            ShapeProperty::SideC,
            "Left Side (Side C)",
            self.side_c,
        ));
        props
    }

    fn set_dimension(&mut self, property: ShapeProperty, value: f64) -> bool {
        match TriangleSide::from_property(property) {
            Some(side) => {
                self.set_side(side, value);
                true
            }
            None => false,
        }
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
