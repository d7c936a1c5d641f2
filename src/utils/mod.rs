//! Helper utilities: logging and JSON persistence

pub mod io;
pub mod logging;

pub use io::{load_json, save_json};
pub use logging::setup_logging;
