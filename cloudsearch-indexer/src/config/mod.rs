//! Configuration loading and dependency wiring.

mod app;
mod dependencies;
mod settings;

pub use app::AppConfig;
pub use dependencies::Dependencies;
pub use settings::{settings_from_lookup, site_from_lookup};
