mod app;
mod console;
mod effects;
mod logging;

pub use app::run_app;
