//! Property panel model and edits applied to the selected shape.

use serde::{Deserialize, Serialize};
use shapekit_core::{Error, Result};

use super::DesignerState;
use crate::model::{DesignerShape, Property, ShapeProperty, ShapeType};

/// Angles offered as one-click rotations.
pub const QUICK_ROTATIONS: [f64; 4] = [0.0, 90.0, 180.0, 270.0];

/// What the property panel shows for the selected shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelModel {
    pub id: u64,
    pub kind: ShapeType,
    pub name: String,
    pub color: String,
    pub properties: Vec<Property>,
}

impl DesignerState {
    /// Panel contents, or `None` when nothing is selected.
    pub fn panel(&self) -> Option<PanelModel> {
        let obj = self.canvas.selected()?;
        Some(PanelModel {
            id: obj.id,
            kind: obj.kind(),
            name: obj.name.clone(),
            color: obj.color.clone(),
            properties: obj.shape.properties(),
        })
    }

    /// Applies a panel edit to the selected shape.
    ///
    /// Unknown field names, fields the shape does not have, and values that
    /// are not numbers are dropped and the previous value kept. Returns
    /// whether the edit was applied.
    pub fn update_shape_property(&mut self, property: &str, value: &str) -> bool {
        match self.try_update_shape_property(property, value) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("Ignoring edit: {}", e);
                false
            }
        }
    }

    /// Like [`update_shape_property`](Self::update_shape_property), but
    /// reports why an edit was rejected.
    pub fn try_update_shape_property(&mut self, property: &str, value: &str) -> Result<()> {
        let id = self
            .canvas
            .selected_id()
            .ok_or_else(|| Error::other("No shape selected"))?;
        let property = property.parse::<ShapeProperty>()?;
        self.canvas.update_property(id, property, value)?;
        Ok(())
    }

    /// Sets the selected shape's rotation outright.
    pub fn set_quick_rotation(&mut self, degrees: f64) -> bool {
        match self.canvas.selected_mut() {
            Some(obj) => {
                obj.shape.set_rotation(degrees);
                true
            }
            None => false,
        }
    }

    /// Renames the shape at `index` in the shape list.
    pub fn update_shape_name(&mut self, index: usize, name: &str) -> bool {
        self.canvas.rename_shape(index, name)
    }
}
