use std::path::PathBuf;

use shapekit::{designer_state, init_logging, Config, DesignerShape, Key, RecordingSurface};
use shapekit::{SettingsManager, ShapeType};

fn load_config() -> Config {
    let manager = match std::env::args_os().nth(1) {
        Some(path) => Some(SettingsManager::with_path(PathBuf::from(path))),
        None => SettingsManager::new()
            .map_err(|e| tracing::warn!("{}", e))
            .ok(),
    };
    match manager {
        Some(mut manager) => manager.load_or_default().clone(),
        None => Config::default(),
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;
    tracing::info!("ShapeKit {}", shapekit::VERSION);

    let config = load_config();
    let mut state = designer_state(&config);

    // Scripted editing session
    let rect = state.canvas.create_shape(ShapeType::Rectangle, 40.0, 40.0);
    state.canvas.create_shape(ShapeType::Circle, 220.0, 60.0);
    let triangle = state.canvas.create_shape_at_center(ShapeType::Triangle);

    state.pointer_down(60.0, 60.0);
    state.pointer_move(80.0, 70.0);
    state.pointer_up();
    state.update_shape_property("color", "#cc3300");
    state.update_shape_property("width", "140");
    state.set_quick_rotation(90.0);

    if let Some(obj) = state.canvas.get_shape(triangle) {
        let center = obj.shape.center();
        state.pointer_down(center.x, center.y - 5.0);
        state.pointer_up();
    }
    state.update_shape_property("sideB", "300");
    state.update_shape_property("rotation", "not a number");
    state.update_shape_name(2, "Roof");

    state.canvas.select(rect);
    state.key_down(Key::Delete);

    let mut surface = RecordingSurface::new();
    state.render(&mut surface);

    for entry in state.canvas.shape_list() {
        tracing::info!(
            "{} ({}) at ({}, {}){}",
            entry.name,
            entry.kind,
            entry.x,
            entry.y,
            if entry.selected { " [selected]" } else { "" }
        );
    }
    tracing::info!("Rendered {} draw commands", surface.commands().len());

    Ok(())
}
