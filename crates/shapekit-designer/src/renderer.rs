//! Canvas renderer for designer shapes
//!
//! Shapes draw themselves through the [`DrawSurface`] trait, a 2D context
//! with a save/restore transform stack, path construction, fill/stroke and
//! text. [`begin_shape`] and [`finish_shape`] hold the drawing steps every
//! variant shares: move the origin to the shape's center, apply its rotation,
//! set fill and selection stroke, and place the name label upright above the
//! shape.
//!
//! [`RecordingSurface`] records every call as a [`DrawCommand`] so a render
//! pass can be inspected without a real rasterizer.

use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, MIN_GRID_SIZE};
use crate::color::to_rgba;
use crate::model::{degrees_to_radians, DesignerShape};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextBaseline {
    Top,
    Middle,
    Bottom,
}

/// A 2D drawing context.
///
/// Angles are in radians. `save`/`restore` push and pop the full state:
/// transform, styles, font and text alignment.
pub trait DrawSurface {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, radians: f64);

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn close_path(&mut self);
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);

    fn fill(&mut self);
    fn stroke(&mut self);

    fn set_fill_style(&mut self, style: &str);
    fn set_stroke_style(&mut self, style: &str);
    fn set_line_width(&mut self, width: f64);

    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

/// Visual parameters for a render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    /// Opacity applied to shape fills; the stored color stays opaque.
    pub fill_opacity: f64,
    pub selection_color: String,
    pub selection_line_width: f64,
    pub label_font: String,
    pub label_color: String,
    /// Gap between the top of the shape's box and the label baseline.
    pub label_offset: f64,
    pub grid_color: String,
    pub grid_line_width: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            fill_opacity: 0.5,
            selection_color: "#0066ff".to_string(),
            selection_line_width: 2.0,
            label_font: "14px New York".to_string(),
            label_color: "#000000".to_string(),
            label_offset: 5.0,
            grid_color: "#ddd".to_string(),
            grid_line_width: 0.5,
        }
    }
}

/// Per-object drawing state handed to [`DesignerShape::draw`].
#[derive(Debug, Clone, Copy)]
pub struct Appearance<'a> {
    pub name: &'a str,
    pub color: &'a str,
    pub selected: bool,
    pub style: &'a RenderStyle,
}

/// Opens a shape's drawing frame and draws its label.
///
/// Leaves one extra `save` on the stack with the origin at the shape's
/// center and the shape's rotation applied; [`finish_shape`] closes it.
pub fn begin_shape<S>(surface: &mut dyn DrawSurface, shape: &S, appearance: &Appearance<'_>)
where
    S: DesignerShape + ?Sized,
{
    let style = appearance.style;
    let center = shape.center();
    let radians = degrees_to_radians(shape.rotation());

    surface.save();
    surface.translate(center.x, center.y);
    surface.rotate(radians);
    surface.set_fill_style(&to_rgba(appearance.color, style.fill_opacity));
    if appearance.selected {
        surface.set_stroke_style(&style.selection_color);
        surface.set_line_width(style.selection_line_width);
    }

    // The label stays upright regardless of the shape's rotation.
    surface.save();
    surface.rotate(-radians);
    surface.set_fill_style(&style.label_color);
    surface.set_font(&style.label_font);
    surface.set_text_align(TextAlign::Right);
    surface.set_text_baseline(TextBaseline::Bottom);
    surface.fill_text(
        appearance.name,
        0.0,
        -shape.bounding_box().height / 2.0 - style.label_offset,
    );
    surface.restore();
}

/// Fills the current path, strokes it when selected, and closes the frame
/// opened by [`begin_shape`].
pub fn finish_shape(surface: &mut dyn DrawSurface, appearance: &Appearance<'_>) {
    surface.fill();
    if appearance.selected {
        surface.stroke();
    }
    surface.restore();
}

/// Strokes grid lines every `grid_size` units across the canvas. Nothing is
/// drawn for spacings below [`MIN_GRID_SIZE`].
pub fn draw_grid(
    surface: &mut dyn DrawSurface,
    width: f64,
    height: f64,
    grid_size: f64,
    style: &RenderStyle,
) {
    if grid_size.is_nan() || grid_size < MIN_GRID_SIZE {
        return;
    }
    surface.set_stroke_style(&style.grid_color);
    surface.set_line_width(style.grid_line_width);

    let mut x = 0.0;
    while x < width {
        surface.begin_path();
        surface.move_to(x, 0.0);
        surface.line_to(x, height);
        surface.stroke();
        x += grid_size;
    }

    let mut y = 0.0;
    while y < height {
        surface.begin_path();
        surface.move_to(0.0, y);
        surface.line_to(width, y);
        surface.stroke();
        y += grid_size;
    }
}

/// Full render pass: clear, grid, then every shape in insertion order.
pub fn render_canvas(surface: &mut dyn DrawSurface, canvas: &Canvas, style: &RenderStyle) {
    surface.clear_rect(0.0, 0.0, canvas.width(), canvas.height());
    draw_grid(
        surface,
        canvas.width(),
        canvas.height(),
        canvas.grid_size(),
        style,
    );
    for obj in canvas.shapes() {
        obj.draw(surface, style);
    }
}

/// One call made against a [`DrawSurface`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Save,
    Restore,
    Translate { x: f64, y: f64 },
    Rotate { radians: f64 },
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    ClosePath,
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Arc { x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64 },
    Fill,
    Stroke,
    FillStyle(String),
    StrokeStyle(String),
    LineWidth(f64),
    Font(String),
    TextAlign(TextAlign),
    TextBaseline(TextBaseline),
    FillText { text: String, x: f64, y: f64 },
}

/// Surface that records calls instead of rasterizing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    depth: usize,
    max_depth: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Current save/restore nesting.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.depth = 0;
        self.max_depth = 0;
    }

    fn push(&mut self, command: DrawCommand) {
        tracing::trace!(?command, "draw");
        self.commands.push(command);
    }
}

impl DrawSurface for RecordingSurface {
    fn save(&mut self) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        self.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        // Unbalanced restores are ignored, like a 2D context does.
        self.depth = self.depth.saturating_sub(1);
        self.push(DrawCommand::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::Translate { x, y });
    }

    fn rotate(&mut self, radians: f64) {
        self.push(DrawCommand::Rotate { radians });
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.push(DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn begin_path(&mut self) {
        self.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::LineTo { x, y });
    }

    fn close_path(&mut self) {
        self.push(DrawCommand::ClosePath);
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.push(DrawCommand::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn fill(&mut self) {
        self.push(DrawCommand::Fill);
    }

    fn stroke(&mut self) {
        self.push(DrawCommand::Stroke);
    }

    fn set_fill_style(&mut self, style: &str) {
        self.push(DrawCommand::FillStyle(style.to_string()));
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.push(DrawCommand::StrokeStyle(style.to_string()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.push(DrawCommand::LineWidth(width));
    }

    fn set_font(&mut self, font: &str) {
        self.push(DrawCommand::Font(font.to_string()));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.push(DrawCommand::TextAlign(align));
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.push(DrawCommand::TextBaseline(baseline));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.push(DrawCommand::FillText {
            text: text.to_string(),
            x,
            y,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DesignRectangle, DesignTriangle};
    use shapekit_core::Point;

    fn appearance<'a>(style: &'a RenderStyle, selected: bool) -> Appearance<'a> {
        Appearance {
            name: "rectangle",
            color: "#ff0000",
            selected,
            style,
        }
    }

    #[test]
    fn test_rectangle_draw_sequence() {
        let style = RenderStyle::default();
        let mut rect = DesignRectangle::at(Point::new(0.0, 0.0));
        rect.rotation = 90.0;
        let mut surface = RecordingSurface::new();

        rect.draw(&mut surface, &appearance(&style, false));

        let radians = degrees_to_radians(90.0);
        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::Save,
                DrawCommand::Translate { x: 50.0, y: 25.0 },
                DrawCommand::Rotate { radians },
                DrawCommand::FillStyle("rgba(255, 0, 0, 0.5)".to_string()),
                DrawCommand::Save,
                DrawCommand::Rotate { radians: -radians },
                DrawCommand::FillStyle("#000000".to_string()),
                DrawCommand::Font("14px New York".to_string()),
                DrawCommand::TextAlign(TextAlign::Right),
                DrawCommand::TextBaseline(TextBaseline::Bottom),
                DrawCommand::FillText {
                    text: "rectangle".to_string(),
                    x: 0.0,
                    y: -30.0
                },
                DrawCommand::Restore,
                DrawCommand::BeginPath,
                DrawCommand::Rect {
                    x: -50.0,
                    y: -25.0,
                    width: 100.0,
                    height: 50.0
                },
                DrawCommand::Fill,
                DrawCommand::Restore,
            ]
        );
        assert_eq!(surface.depth(), 0);
        assert_eq!(surface.max_depth(), 2);
    }

    #[test]
    fn test_selected_shape_is_stroked() {
        let style = RenderStyle::default();
        let tri = DesignTriangle::at(Point::new(10.0, 10.0));
        let mut surface = RecordingSurface::new();

        tri.draw(&mut surface, &appearance(&style, true));

        let cmds = surface.commands();
        assert!(cmds.contains(&DrawCommand::StrokeStyle("#0066ff".to_string())));
        assert!(cmds.contains(&DrawCommand::LineWidth(2.0)));
        assert!(cmds.contains(&DrawCommand::ClosePath));
        assert_eq!(cmds[cmds.len() - 2], DrawCommand::Stroke);
        assert_eq!(cmds[cmds.len() - 1], DrawCommand::Restore);
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn test_grid_lines() {
        let style = RenderStyle::default();
        let mut surface = RecordingSurface::new();
        draw_grid(&mut surface, 20.0, 10.0, 5.0, &style);

        let strokes = surface
            .commands()
            .iter()
            .filter(|c| **c == DrawCommand::Stroke)
            .count();
        // x = 0, 5, 10, 15 and y = 0, 5.
        assert_eq!(strokes, 6);
        assert_eq!(surface.commands()[0], DrawCommand::StrokeStyle("#ddd".to_string()));
    }

    #[test]
    fn test_grid_skipped_for_tiny_size() {
        let style = RenderStyle::default();
        for size in [0.0, -5.0, 1e-3, 1e-9, f64::NAN] {
            let mut surface = RecordingSurface::new();
            draw_grid(&mut surface, 800.0, 600.0, size, &style);
            assert!(surface.commands().is_empty());
        }
    }
}
