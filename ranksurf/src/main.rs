#![warn(clippy::all, rust_2018_idioms)]

use ranksurf::{Config, EguiApp, WorkerAppState};
use surf_core::worker::WorkerEventLoop;

const WINDOW_NAME: &str = "RankSurf";
const WINDOW_WIDTH: f32 = 900.0;
const WINDOW_HEIGHT: f32 = 600.0;

fn main() -> eframe::Result {
    env_logger::init();

    // Start the worker loop that owns the name database.
    let (request_tx, request_rx) = std::sync::mpsc::channel();
    let config = if let Ok(config) = Config::from_config_file() {
        config
    } else {
        log::warn!("unable to load config file \".ranksurf\" from home directory");
        Config::default()
    };
    let worker_state = WorkerAppState::new(config.database_path.clone());
    let eventloop_handle = WorkerEventLoop::new(request_rx, worker_state).run();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_WIDTH * 0.5, WINDOW_HEIGHT * 0.5]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_NAME,
        native_options,
        Box::new(|cc| {
            Ok(Box::new(EguiApp::new(
                cc,
                config,
                request_tx,
                eventloop_handle,
            )))
        }),
    )
}
