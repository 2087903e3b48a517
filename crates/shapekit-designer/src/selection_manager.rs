use shapekit_core::Point;

use crate::shape_store::ShapeStore;

/// Manages shape selection state.
///
/// At most one shape is selected at a time. The selected id lives here and
/// the matching object carries its `selected` flag; every transition goes
/// through this type so the two never disagree.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    /// The ID of the selected shape, if any
    selected_id: Option<u64>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use shapekit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.selected_id(), None);
    /// ```
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.selected_id
    }

    /// Selects the shape with `id`, clearing the previous selection first.
    ///
    /// Returns `false` and leaves the selection untouched when no such shape
    /// exists.
    pub fn select(&mut self, store: &mut ShapeStore, id: u64) -> bool {
        if store.get(id).is_none() {
            return false;
        }
        if let Some(previous) = self.selected_id.take() {
            if let Some(obj) = store.get_mut(previous) {
                obj.set_selected(false);
            }
        }
        if let Some(obj) = store.get_mut(id) {
            obj.set_selected(true);
            self.selected_id = Some(id);
            tracing::debug!("Selected shape {}", id);
        }
        true
    }

    /// Clears the selection.
    pub fn deselect_all(&mut self, store: &mut ShapeStore) {
        for obj in store.iter_mut() {
            obj.set_selected(false);
        }
        if let Some(id) = self.selected_id.take() {
            tracing::debug!("Deselected shape {}", id);
        }
    }

    /// Selects the topmost shape at `point`, or clears the selection when
    /// the point hits nothing.
    pub fn select_at(&mut self, store: &mut ShapeStore, point: Point) -> Option<u64> {
        match store.hit_test(point).map(|o| o.id) {
            Some(id) => {
                self.select(store, id);
                Some(id)
            }
            None => {
                self.deselect_all(store);
                None
            }
        }
    }

    /// Drops the selection if it refers to `id`. Call after removing `id`.
    pub fn forget(&mut self, id: u64) {
        if self.selected_id == Some(id) {
            self.selected_id = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawingObject;
    use crate::model::{Shape, ShapeType};

    fn store_with(n: usize) -> (ShapeStore, Vec<u64>) {
        let mut store = ShapeStore::new();
        let ids = (0..n)
            .map(|i| {
                let id = store.generate_id();
                let shape = Shape::create(ShapeType::Circle, i as f64 * 100.0, 0.0);
                store.insert(DrawingObject::new(id, shape));
                id
            })
            .collect();
        (store, ids)
    }

    fn selected_flags(store: &ShapeStore) -> Vec<bool> {
        store.iter().map(|o| o.is_selected()).collect()
    }

    #[test]
    fn test_select_replaces_previous() {
        let (mut store, ids) = store_with(2);
        let mut manager = SelectionManager::new();

        assert!(manager.select(&mut store, ids[0]));
        assert_eq!(selected_flags(&store), vec![true, false]);

        assert!(manager.select(&mut store, ids[1]));
        assert_eq!(selected_flags(&store), vec![false, true]);
        assert_eq!(manager.selected_id(), Some(ids[1]));
    }

    #[test]
    fn test_select_unknown_keeps_selection() {
        let (mut store, ids) = store_with(1);
        let mut manager = SelectionManager::new();
        manager.select(&mut store, ids[0]);

        assert!(!manager.select(&mut store, 999));
        assert_eq!(manager.selected_id(), Some(ids[0]));
        assert_eq!(selected_flags(&store), vec![true]);
    }

    #[test]
    fn test_select_at_miss_clears() {
        let (mut store, ids) = store_with(2);
        let mut manager = SelectionManager::new();

        assert_eq!(manager.select_at(&mut store, Point::new(125.0, 25.0)), Some(ids[1]));
        assert_eq!(manager.select_at(&mut store, Point::new(-50.0, -50.0)), None);
        assert_eq!(manager.selected_id(), None);
        assert_eq!(selected_flags(&store), vec![false, false]);
    }

    #[test]
    fn test_forget() {
        let (mut store, ids) = store_with(2);
        let mut manager = SelectionManager::new();
        manager.select(&mut store, ids[0]);

        manager.forget(ids[1]);
        assert_eq!(manager.selected_id(), Some(ids[0]));
        manager.forget(ids[0]);
        assert_eq!(manager.selected_id(), None);
    }
}
