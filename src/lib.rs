//! # ShapeKit
//!
//! An interactive 2D diagram editor core: place rectangles, circles and
//! triangles on a canvas, select them by clicking, drag them around, and
//! edit their position, rotation, color and dimensions.
//!
//! ## Architecture
//!
//! ShapeKit is organized as a workspace with multiple crates:
//!
//! 1. **shapekit-core** - Points, bounding boxes, numeric parsing, errors
//! 2. **shapekit-designer** - Shapes, canvas, selection, rendering, editor state
//! 3. **shapekit-settings** - Configuration files and the settings manager
//! 4. **shapekit** - Logging setup and the headless driver binary

// Re-export modules for main.rs
pub use shapekit_designer as designer;
pub use shapekit_settings as settings;

pub use shapekit_core::{BoundingBox, DesignerError, Error, Point, Result};

pub use shapekit_designer::{
    Canvas, DesignerShape, DesignerState, DrawCommand, DrawSurface, Key, RecordingSurface,
    RenderStyle, Shape, ShapeType,
};

pub use shapekit_settings::{Config, SettingsManager};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Render style described by the config's canvas and style sections.
pub fn render_style(config: &Config) -> RenderStyle {
    RenderStyle {
        fill_opacity: config.style.fill_opacity,
        selection_color: config.style.selection_color.clone(),
        selection_line_width: config.style.selection_line_width,
        label_font: config.style.label_font.clone(),
        label_color: config.style.label_color.clone(),
        label_offset: config.style.label_offset,
        grid_color: config.canvas.grid_color.clone(),
        grid_line_width: config.canvas.grid_line_width,
    }
}

/// Empty editor sized and styled from `config`.
pub fn designer_state(config: &Config) -> DesignerState {
    let mut canvas = Canvas::with_size(config.canvas.width, config.canvas.height);
    canvas.set_grid_size(config.canvas.grid_size);
    canvas.set_default_color(config.style.default_color.clone());
    DesignerState::with_canvas(canvas, render_style(config))
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_style_follows_config() {
        let mut config = Config::default();
        config.style.fill_opacity = 0.8;
        config.style.selection_color = "#ff00ff".to_string();
        config.canvas.grid_color = "#eeeeee".to_string();

        let style = render_style(&config);
        assert_eq!(style.fill_opacity, 0.8);
        assert_eq!(style.selection_color, "#ff00ff");
        assert_eq!(style.grid_color, "#eeeeee");
        assert_eq!(style.label_font, "14px New York");
    }

    #[test]
    fn test_defaults_match_designer_defaults() {
        assert_eq!(render_style(&Config::default()), RenderStyle::default());
    }

    #[test]
    fn test_state_from_saved_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.canvas.width = 300.0;
        config.canvas.height = 200.0;
        config.canvas.grid_size = 100.0;
        config.style.default_color = "#123456".to_string();
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        let mut state = designer_state(&loaded);
        let id = state.canvas.create_shape_at_center(ShapeType::Circle);

        let obj = state.canvas.get_shape(id).unwrap();
        assert_eq!(obj.color, "#123456");

        let mut surface = RecordingSurface::new();
        state.render(&mut surface);
        let commands = surface.commands();
        assert_eq!(
            commands[0],
            DrawCommand::ClearRect {
                x: 0.0,
                y: 0.0,
                width: 300.0,
                height: 200.0
            }
        );
        // Three vertical and two horizontal grid lines
        let grid_strokes = commands
            .iter()
            .take_while(|c| !matches!(c, DrawCommand::Save))
            .filter(|c| matches!(c, DrawCommand::Stroke))
            .count();
        assert_eq!(grid_strokes, 5);
        assert!(commands.contains(&DrawCommand::FillStyle("rgba(18, 52, 86, 0.5)".to_string())));
    }
}
