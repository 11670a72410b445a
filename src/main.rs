#![warn(clippy::all, rust_2018_idioms)]

use eframe_draw::config::{DrawConfig, CONFIG_FILE};
use eframe_draw::DrawApp;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = DrawConfig::load_or_default(CONFIG_FILE);
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Draw")
            .with_inner_size(config.window_size)
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "eframe_draw",
        native_options,
        Box::new(|cc| Ok(Box::new(DrawApp::new(cc, config)))),
    )
}
