//! Ordered storage for the shapes on a canvas.
//!
//! Insertion order is draw order: the last shape inserted is drawn last and
//! is the topmost one for hit-testing.

use shapekit_core::Point;

use crate::canvas::DrawingObject;

#[derive(Debug, Clone)]
pub struct ShapeStore {
    shapes: Vec<DrawingObject>,
    next_id: u64,
}

impl Default for ShapeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeStore {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            next_id: 1,
        }
    }

    /// Returns a fresh id; ids are never reused.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Appends an object on top of the draw order.
    pub fn insert(&mut self, obj: DrawingObject) {
        self.shapes.push(obj);
    }

    pub fn get(&self, id: u64) -> Option<&DrawingObject> {
        self.shapes.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut DrawingObject> {
        self.shapes.iter_mut().find(|o| o.id == id)
    }

    pub fn get_by_index_mut(&mut self, index: usize) -> Option<&mut DrawingObject> {
        self.shapes.get_mut(index)
    }

    pub fn index_of(&self, id: u64) -> Option<usize> {
        self.shapes.iter().position(|o| o.id == id)
    }

    /// Removes an object, keeping the order of the rest.
    pub fn remove(&mut self, id: u64) -> Option<DrawingObject> {
        let index = self.index_of(id)?;
        Some(self.shapes.remove(index))
    }

    /// Objects in draw order (bottom first).
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &DrawingObject> {
        self.shapes.iter()
    }

    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut DrawingObject> {
        self.shapes.iter_mut()
    }

    pub fn draw_order_iter(&self) -> impl DoubleEndedIterator<Item = u64> + '_ {
        self.shapes.iter().map(|o| o.id)
    }

    /// Topmost object containing `point`, scanning from the last inserted.
    pub fn hit_test(&self, point: Point) -> Option<&DrawingObject> {
        self.shapes.iter().rev().find(|o| o.contains_point(point))
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
