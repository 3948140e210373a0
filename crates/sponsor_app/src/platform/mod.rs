//! Console host: replays a scenario against the sponsor engine.
mod app;
mod console;
mod scenario;

pub use app::run_app;
