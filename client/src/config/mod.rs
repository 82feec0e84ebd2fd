mod bot_config;
mod config;
mod log_config;
mod player_config;

pub use bot_config::BotConfig;
pub use config::{Config, get_config_manager, get_config_path};
pub use log_config::LogConfig;
pub use player_config::PlayerConfig;
