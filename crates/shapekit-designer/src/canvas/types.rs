//! Canvas type definitions: DrawingObject, ShapeListEntry.

use serde::{Deserialize, Serialize};
use shapekit_core::{parse_number, DesignerError, Point};

use crate::color::DEFAULT_COLOR;
use crate::model::{DesignerShape, Shape, ShapeProperty, ShapeType};
use crate::renderer::{Appearance, DrawSurface, RenderStyle};

/// Drawing object on the canvas that can be selected and manipulated.
///
/// Wraps a shape's geometry with its editor state: id, display name, fill
/// color and the selection flag.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingObject {
    pub id: u64,
    pub name: String,
    /// Color as entered (`#rgb`, `#rrggbb`, `rgb(...)` or anything else).
    pub color: String,
    pub shape: Shape,
    selected: bool,
}

impl DrawingObject {
    /// Creates a new drawing object named after its kind.
    pub fn new(id: u64, shape: Shape) -> Self {
        Self {
            id,
            name: shape.shape_type().name().to_string(),
            color: DEFAULT_COLOR.to_string(),
            shape,
            selected: false,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn kind(&self) -> ShapeType {
        self.shape.shape_type()
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.shape.contains_point(point)
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface, style: &RenderStyle) {
        let appearance = Appearance {
            name: &self.name,
            color: &self.color,
            selected: self.selected,
            style,
        };
        self.shape.draw(surface, &appearance);
    }

    /// Applies a raw value from the property panel to one field.
    ///
    /// Color is stored verbatim; every other field must parse as a number.
    /// On error nothing changes. Triangle sides are revalidated after the
    /// edit.
    pub fn apply_property(
        &mut self,
        property: ShapeProperty,
        raw: &str,
    ) -> Result<(), DesignerError> {
        let kind = self.kind();
        if !property.applies_to(kind) {
            return Err(DesignerError::PropertyNotApplicable {
                property: property.to_string(),
                kind: kind.to_string(),
            });
        }

        if property == ShapeProperty::Color {
            self.color = raw.to_string();
            return Ok(());
        }

        let value = parse_number(raw).ok_or_else(|| DesignerError::InvalidNumber {
            property: property.to_string(),
            value: raw.to_string(),
        })?;

        match property {
            ShapeProperty::X => {
                let p = self.shape.position();
                self.shape.set_position(Point::new(value, p.y));
            }
            ShapeProperty::Y => {
                let p = self.shape.position();
                self.shape.set_position(Point::new(p.x, value));
            }
            ShapeProperty::Rotation => self.shape.set_rotation(value),
            _ => {
                self.shape.set_dimension(property, value);
            }
        }
        Ok(())
    }
}

/// Summary row for the shape list panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeListEntry {
    pub id: u64,
    pub name: String,
    pub kind: ShapeType,
    /// Anchor x rounded half-up for display.
    pub x: f64,
    pub y: f64,
    pub selected: bool,
}

impl From<&DrawingObject> for ShapeListEntry {
    fn from(obj: &DrawingObject) -> Self {
        let p = obj.shape.position();
        Self {
            id: obj.id,
            name: obj.name.clone(),
            kind: obj.kind(),
            x: round_half_up(p.x),
            y: round_half_up(p.y),
            selected: obj.is_selected(),
        }
    }
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TriangleSide;

    fn triangle() -> DrawingObject {
        DrawingObject::new(1, Shape::create(ShapeType::Triangle, 0.0, 0.0))
    }

    #[test]
    fn test_defaults() {
        let obj = triangle();
        assert_eq!(obj.name, "triangle");
        assert_eq!(obj.color, "#000000");
        assert!(!obj.is_selected());
    }

    #[test]
    fn test_apply_common_properties() {
        let mut obj = DrawingObject::new(1, Shape::create(ShapeType::Rectangle, 0.0, 0.0));
        obj.apply_property(ShapeProperty::X, "12.5").unwrap();
        obj.apply_property(ShapeProperty::Y, "-4").unwrap();
        obj.apply_property(ShapeProperty::Rotation, "450").unwrap();
        obj.apply_property(ShapeProperty::Color, "#abc").unwrap();

        assert_eq!(obj.shape.position(), Point::new(12.5, -4.0));
        // Rotation is stored as entered, not normalized.
        assert_eq!(obj.shape.rotation(), 450.0);
        assert_eq!(obj.color, "#abc");
    }

    #[test]
    fn test_non_numeric_value_is_rejected() {
        let mut obj = DrawingObject::new(1, Shape::create(ShapeType::Circle, 3.0, 4.0));
        let err = obj.apply_property(ShapeProperty::Radius, "big").unwrap_err();
        assert!(matches!(err, DesignerError::InvalidNumber { .. }));
        assert_eq!(obj.shape.properties()[3].value, 25.0);
        assert_eq!(obj.shape.position(), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_foreign_property_is_rejected() {
        let mut obj = triangle();
        let err = obj.apply_property(ShapeProperty::Width, "10").unwrap_err();
        assert_eq!(
            err,
            DesignerError::PropertyNotApplicable {
                property: "width".to_string(),
                kind: "triangle".to_string(),
            }
        );
    }

    #[test]
    fn test_triangle_side_edit_is_validated() {
        let mut obj = triangle();
        obj.apply_property(ShapeProperty::SideA, "5").unwrap();
        let tri = obj.shape.as_triangle().unwrap();
        assert_eq!(tri.side(TriangleSide::A), 10.0);
        assert!(tri.is_valid());
    }

    #[test]
    fn test_list_entry_rounds_half_up() {
        let mut obj = triangle();
        obj.shape.set_position(Point::new(2.5, -2.5));
        let entry = ShapeListEntry::from(&obj);
        assert_eq!((entry.x, entry.y), (3.0, -2.0));
        assert_eq!(entry.kind, ShapeType::Triangle);
    }
}
