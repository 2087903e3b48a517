//! Shape geometry model.
//!
//! Every shape variant answers the same geometric queries (center, bounding
//! box, rotation-aware containment) and knows how to trace itself on a
//! [`DrawSurface`]. [`Shape`] is the closed set of variants the editor works
//! with; it dispatches each query to the variant.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shapekit_core::{BoundingBox, DesignerError, Point};

use crate::renderer::{Appearance, DrawSurface};

mod circle;
mod rectangle;
mod triangle;

pub use circle::DesignCircle;
pub use rectangle::DesignRectangle;
pub use triangle::{DesignTriangle, TriangleSide, MAX_SIDE, MIN_SIDE};

/// A single editable field as shown in the property panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub property: ShapeProperty,
    pub label: String,
    pub value: f64,
}

impl Property {
    pub fn number(property: ShapeProperty, label: &str, value: f64) -> Self {
        Self {
            property,
            label: label.to_string(),
            value,
        }
    }
}

/// Names of the fields a property edit can target.
///
/// Which names apply depends on the shape kind; see
/// [`ShapeProperty::applies_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeProperty {
    X,
    Y,
    Rotation,
    Color,
    Width,
    Height,
    Radius,
    SideA,
    SideB,
    SideC,
}

impl ShapeProperty {
    /// Key used by the property panel for this field.
    pub fn key(self) -> &'static str {
        match self {
            ShapeProperty::X => "x",
            ShapeProperty::Y => "y",
            ShapeProperty::Rotation => "rotation",
            ShapeProperty::Color => "color",
            ShapeProperty::Width => "width",
            ShapeProperty::Height => "height",
            ShapeProperty::Radius => "radius",
            ShapeProperty::SideA => "sideA",
            ShapeProperty::SideB => "sideB",
            ShapeProperty::SideC => "sideC",
        }
    }

    pub fn applies_to(self, kind: ShapeType) -> bool {
        match self {
            ShapeProperty::X
            | ShapeProperty::Y
            | ShapeProperty::Rotation
            | ShapeProperty::Color => true,
            ShapeProperty::Width | ShapeProperty::Height => kind == ShapeType::Rectangle,
            ShapeProperty::Radius => kind == ShapeType::Circle,
            ShapeProperty::SideA | ShapeProperty::SideB | ShapeProperty::SideC => {
                kind == ShapeType::Triangle
            }
        }
    }
}

impl fmt::Display for ShapeProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ShapeProperty {
    type Err = DesignerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(ShapeProperty::X),
            "y" => Ok(ShapeProperty::Y),
            "rotation" => Ok(ShapeProperty::Rotation),
            "color" => Ok(ShapeProperty::Color),
            "width" => Ok(ShapeProperty::Width),
            "height" => Ok(ShapeProperty::Height),
            "radius" => Ok(ShapeProperty::Radius),
            "sideA" => Ok(ShapeProperty::SideA),
            "sideB" => Ok(ShapeProperty::SideB),
            "sideC" => Ok(ShapeProperty::SideC),
            other => Err(DesignerError::UnknownProperty(other.to_string())),
        }
    }
}

/// Geometry capabilities shared by every shape variant.
pub trait DesignerShape {
    /// Rotation pivot and label anchor. Never assume it equals the anchor.
    fn center(&self) -> Point;

    /// Box of the unrotated shape, placed in world coordinates.
    fn bounding_box(&self) -> BoundingBox;

    /// Whether the world-space point lies inside the rotated shape.
    fn contains_point(&self, p: Point) -> bool;

    /// Draws the shape, label included, using the shared transform helpers.
    fn draw(&self, surface: &mut dyn DrawSurface, appearance: &Appearance<'_>);

    /// Editable fields and their current values.
    fn properties(&self) -> Vec<Property>;

    /// Applies a variant-specific numeric field. Returns `false` when the
    /// field does not belong to this variant.
    fn set_dimension(&mut self, property: ShapeProperty, value: f64) -> bool;

    fn position(&self) -> Point;
    fn set_position(&mut self, position: Point);

    /// Rotation in degrees, stored as entered (not normalized).
    fn rotation(&self) -> f64;
    fn set_rotation(&mut self, degrees: f64);

    fn translate(&mut self, dx: f64, dy: f64) {
        let p = self.position();
        self.set_position(Point::new(p.x + dx, p.y + dy));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    Rectangle,
    Circle,
    Triangle,
}

impl ShapeType {
    pub const ALL: [ShapeType; 3] = [ShapeType::Rectangle, ShapeType::Circle, ShapeType::Triangle];

    pub fn name(self) -> &'static str {
        match self {
            ShapeType::Rectangle => "rectangle",
            ShapeType::Circle => "circle",
            ShapeType::Triangle => "triangle",
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeType {
    type Err = DesignerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rectangle" => Ok(ShapeType::Rectangle),
            "circle" => Ok(ShapeType::Circle),
            "triangle" => Ok(ShapeType::Triangle),
            other => Err(DesignerError::UnknownShapeType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle(DesignRectangle),
    Circle(DesignCircle),
    Triangle(DesignTriangle),
}

impl Shape {
    /// Builds a shape of `kind` anchored at `(x, y)` with the variant defaults.
    pub fn create(kind: ShapeType, x: f64, y: f64) -> Self {
        let anchor = Point::new(x, y);
        match kind {
            ShapeType::Rectangle => Shape::Rectangle(DesignRectangle::at(anchor)),
            ShapeType::Circle => Shape::Circle(DesignCircle::at(anchor)),
            ShapeType::Triangle => Shape::Triangle(DesignTriangle::at(anchor)),
        }
    }

    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Circle(_) => ShapeType::Circle,
            Shape::Triangle(_) => ShapeType::Triangle,
        }
    }

    pub fn as_triangle(&self) -> Option<&DesignTriangle> {
        match self {
            Shape::Triangle(t) => Some(t),
            _ => None,
        }
    }
}

impl DesignerShape for Shape {
    fn center(&self) -> Point {
        match self {
            Shape::Rectangle(s) => s.center(),
            Shape::Circle(s) => s.center(),
            Shape::Triangle(s) => s.center(),
        }
    }

    fn bounding_box(&self) -> BoundingBox {
        match self {
            Shape::Rectangle(s) => s.bounding_box(),
            Shape::Circle(s) => s.bounding_box(),
            Shape::Triangle(s) => s.bounding_box(),
        }
    }

    fn contains_point(&self, p: Point) -> bool {
        match self {
            Shape::Rectangle(s) => s.contains_point(p),
            Shape::Circle(s) => s.contains_point(p),
            Shape::Triangle(s) => s.contains_point(p),
        }
    }

    fn draw(&self, surface: &mut dyn DrawSurface, appearance: &Appearance<'_>) {
        match self {
            Shape::Rectangle(s) => s.draw(surface, appearance),
            Shape::Circle(s) => s.draw(surface, appearance),
            Shape::Triangle(s) => s.draw(surface, appearance),
        }
    }

    fn properties(&self) -> Vec<Property> {
        match self {
            Shape::Rectangle(s) => s.properties(),
            Shape::Circle(s) => s.properties(),
            Shape::Triangle(s) => s.properties(),
        }
    }

    fn set_dimension(&mut self, property: ShapeProperty, value: f64) -> bool {
        match self {
            Shape::Rectangle(s) => s.set_dimension(property, value),
            Shape::Circle(s) => s.set_dimension(property, value),
            Shape::Triangle(s) => s.set_dimension(property, value),
        }
    }

    fn position(&self) -> Point {
        match self {
            Shape::Rectangle(s) => s.position(),
            Shape::Circle(s) => s.position(),
            Shape::Triangle(s) => s.position(),
        }
    }

    fn set_position(&mut self, position: Point) {
        match self {
            Shape::Rectangle(s) => s.set_position(position),
            Shape::Circle(s) => s.set_position(position),
            Shape::Triangle(s) => s.set_position(position),
        }
    }

    fn rotation(&self) -> f64 {
        match self {
            Shape::Rectangle(s) => s.rotation(),
            Shape::Circle(s) => s.rotation(),
            Shape::Triangle(s) => s.rotation(),
        }
    }

    fn set_rotation(&mut self, degrees: f64) {
        match self {
            Shape::Rectangle(s) => s.set_rotation(degrees),
            Shape::Circle(s) => s.set_rotation(degrees),
            Shape::Triangle(s) => s.set_rotation(degrees),
        }
    }
}

/// Degrees to radians, evaluated as `deg * PI / 180`.
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Maps a world-space point into the shape's unrotated frame centered on
/// `center`, by rotating it through `-rotation_deg`.
pub fn to_local(p: Point, center: Point, rotation_deg: f64) -> Point {
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    let angle = -rotation_deg * PI / 180.0;
    let (s, c) = angle.sin_cos();
    Point {
        x: dx * c - dy * s,
        y: dx * s + dy * c,
    }
}

/// Position and rotation fields shared by every variant, in panel order.
fn common_properties(position: Point, rotation: f64) -> Vec<Property> {
    vec![
        Property::number(ShapeProperty::X, "Position X", position.x),
        Property::number(ShapeProperty::Y, "Position Y", position.y),
        Property::number(ShapeProperty::Rotation, "Rotation", rotation),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_type_round_trip_names() {
        for kind in ShapeType::ALL {
            assert_eq!(kind.name().parse::<ShapeType>().unwrap(), kind);
        }
        assert!(matches!(
            "hexagon".parse::<ShapeType>(),
            Err(DesignerError::UnknownShapeType(_))
        ));
    }

    #[test]
    fn test_property_keys() {
        assert_eq!("sideB".parse::<ShapeProperty>().unwrap(), ShapeProperty::SideB);
        assert_eq!(ShapeProperty::Radius.to_string(), "radius");
        assert!("sideb".parse::<ShapeProperty>().is_err());
        assert!("name".parse::<ShapeProperty>().is_err());
    }

    #[test]
    fn test_property_applicability() {
        assert!(ShapeProperty::Rotation.applies_to(ShapeType::Circle));
        assert!(ShapeProperty::Width.applies_to(ShapeType::Rectangle));
        assert!(!ShapeProperty::Width.applies_to(ShapeType::Triangle));
        assert!(!ShapeProperty::Radius.applies_to(ShapeType::Rectangle));
        assert!(ShapeProperty::SideC.applies_to(ShapeType::Triangle));
    }

    #[test]
    fn test_to_local_undoes_rotation() {
        let center = Point::new(10.0, 10.0);
        // A point straight below the center, seen by a shape rotated 90
        // degrees, lies along the shape's local +x axis.
        let local = to_local(Point::new(10.0, 20.0), center, 90.0);
        assert!((local.x - 10.0).abs() < 1e-9);
        assert!(local.y.abs() < 1e-9);

        let unrotated = to_local(Point::new(13.0, 6.0), center, 0.0);
        assert_eq!(unrotated, Point::new(3.0, -4.0));
    }

    #[test]
    fn test_factory_defaults() {
        let rect = Shape::create(ShapeType::Rectangle, 1.0, 2.0);
        assert_eq!(rect.shape_type(), ShapeType::Rectangle);
        assert_eq!(rect.position(), Point::new(1.0, 2.0));
        assert_eq!(rect.rotation(), 0.0);

        let tri = Shape::create(ShapeType::Triangle, 0.0, 0.0);
        let t = tri.as_triangle().unwrap();
        assert_eq!((t.side_a, t.side_b, t.side_c), (50.0, 50.0, 50.0));
    }
}
