use page_builder::config::BuilderConfig;
use page_builder::visual_editor::App;
use tracing::{info, warn, Level};

fn main() {
    let config = BuilderConfig::bundled();
    let level = match &config {
        Ok(config) => config.level().unwrap_or(Level::INFO),
        Err(_) => Level::INFO,
    };

    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("failed to initialise logger: {err}");
    }

    match config {
        Ok(config) => info!(canvas = %config.canvas_label, %level, "page builder starting"),
        Err(err) => warn!(error = %err, "bundled configuration unreadable, using defaults"),
    }

    dioxus::launch(App);
}
