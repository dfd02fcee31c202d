pub mod config;
pub mod loader;
mod rules;
pub mod scratch;
pub mod template;

pub use config::BotConfig;
pub use loader::{load_config, load_config_from, DEFAULT_CONFIG_PATH};
pub use scratch::ScratchDir;
pub use template::{write_template, CONFIG_TEMPLATE};
