#![warn(clippy::all, rust_2018_idioms)]

mod app;
mod worker_state;

pub use app::config::Config;
pub use app::storage;
pub use app::EguiApp;
pub use worker_state::WorkerAppState;
