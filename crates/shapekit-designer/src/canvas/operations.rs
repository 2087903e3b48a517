//! Canvas operations: selection, removal, moves and property edits.

use shapekit_core::{DesignerError, Point};

use super::{Canvas, DrawingObject};
use crate::model::{DesignerShape, ShapeProperty};

impl Canvas {
    pub fn selected_id(&self) -> Option<u64> {
        self.selection_manager.selected_id()
    }

    pub fn selected(&self) -> Option<&DrawingObject> {
        self.selected_id().and_then(|id| self.shape_store.get(id))
    }

    pub fn selected_mut(&mut self) -> Option<&mut DrawingObject> {
        let id = self.selected_id()?;
        self.shape_store.get_mut(id)
    }

    /// Selects a shape by id, replacing any previous selection.
    pub fn select(&mut self, id: u64) -> bool {
        self.selection_manager.select(&mut self.shape_store, id)
    }

    /// Selects the topmost shape under `point`; a miss clears the selection.
    pub fn select_at(&mut self, point: Point) -> Option<u64> {
        self.selection_manager.select_at(&mut self.shape_store, point)
    }

    pub fn deselect_all(&mut self) {
        self.selection_manager.deselect_all(&mut self.shape_store);
    }

    /// Removes a shape; removing the selected shape clears the selection.
    pub fn remove(&mut self, id: u64) -> Option<DrawingObject> {
        let removed = self.shape_store.remove(id)?;
        self.selection_manager.forget(id);
        tracing::info!("Removed {} {}", removed.kind(), id);
        Some(removed)
    }

    /// Removes the selected shape, if any.
    pub fn delete_selected(&mut self) -> Option<DrawingObject> {
        let id = self.selected_id()?;
        self.remove(id)
    }

    /// Moves the selected shape's anchor by `(dx, dy)`.
    pub fn move_selected(&mut self, dx: f64, dy: f64) {
        if let Some(obj) = self.selected_mut() {
            obj.shape.translate(dx, dy);
        }
    }

    /// Renames the shape at `index` in draw order. Out of range is ignored.
    pub fn rename_shape(&mut self, index: usize, name: &str) -> bool {
        match self.shape_store.get_by_index_mut(index) {
            Some(obj) => {
                obj.name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Applies a raw property value to the shape with `id`.
    pub fn update_property(
        &mut self,
        id: u64,
        property: ShapeProperty,
        raw: &str,
    ) -> Result<(), DesignerError> {
        let obj = self
            .shape_store
            .get_mut(id)
            .ok_or(DesignerError::ShapeNotFound(id))?;
        obj.apply_property(property, raw)?;
        tracing::debug!("Set {} of shape {} to {:?}", property, id, raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ShapeType;

    #[test]
    fn test_select_then_select_other() {
        let mut canvas = Canvas::new();
        let a = canvas.create_shape(ShapeType::Rectangle, 0.0, 0.0);
        let b = canvas.create_shape(ShapeType::Circle, 300.0, 300.0);

        canvas.select(a);
        canvas.select(b);

        assert!(!canvas.get_shape(a).unwrap().is_selected());
        assert!(canvas.get_shape(b).unwrap().is_selected());
        assert_eq!(canvas.selected_id(), Some(b));
    }

    #[test]
    fn test_remove_selected_clears_selection() {
        let mut canvas = Canvas::new();
        let a = canvas.create_shape(ShapeType::Rectangle, 0.0, 0.0);
        let b = canvas.create_shape(ShapeType::Circle, 300.0, 300.0);
        canvas.select(b);

        assert!(canvas.remove(a).is_some());
        assert_eq!(canvas.selected_id(), Some(b));

        let removed = canvas.delete_selected().unwrap();
        assert_eq!(removed.id, b);
        assert_eq!(canvas.selected_id(), None);
        assert_eq!(canvas.shape_count(), 0);
        assert!(canvas.delete_selected().is_none());
    }

    #[test]
    fn test_move_selected() {
        let mut canvas = Canvas::new();
        let id = canvas.create_shape(ShapeType::Triangle, 10.0, 10.0);
        canvas.move_selected(5.0, 5.0);
        assert_eq!(canvas.get_shape(id).unwrap().shape.position(), Point::new(10.0, 10.0));

        canvas.select(id);
        canvas.move_selected(5.0, -2.0);
        assert_eq!(canvas.get_shape(id).unwrap().shape.position(), Point::new(15.0, 8.0));
    }

    #[test]
    fn test_rename_by_index() {
        let mut canvas = Canvas::new();
        canvas.create_shape(ShapeType::Rectangle, 0.0, 0.0);
        let id = canvas.create_shape(ShapeType::Circle, 0.0, 0.0);
        assert!(canvas.rename_shape(1, "Sun"));
        assert!(!canvas.rename_shape(5, "Moon"));
        assert_eq!(canvas.get_shape(id).unwrap().name, "Sun");
    }

    #[test]
    fn test_update_property_unknown_shape() {
        let mut canvas = Canvas::new();
        assert_eq!(
            canvas.update_property(9, ShapeProperty::X, "1"),
            Err(DesignerError::ShapeNotFound(9))
        );
    }
}
