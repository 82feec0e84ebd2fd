use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::{GameMode, TicTacToeSessionSettings};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{BotConfig, LogConfig, PlayerConfig};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

/// Config file next to the executable, or in the working directory as a fallback.
pub fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub players: PlayerConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub last_mode: Option<GameMode>,
}

impl Config {
    /// A seed given on the command line beats the configured one.
    pub fn session_settings(&self, seed_override: Option<u64>) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            default_player_x_name: self.players.player_x.clone(),
            default_player_o_name: self.players.player_o.clone(),
            bot_name: self.players.bot.clone(),
            seed: seed_override.or(self.bot.seed),
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.bot.validate()?;
        self.players.validate()?;
        self.log.validate()?;
        Ok(())
    }
}
