use crate::config::Validate;
use super::game_state::PlayerNames;
use super::types::GameMode;

pub const DEFAULT_PLAYER_X_NAME: &str = "Player 1";
pub const DEFAULT_PLAYER_O_NAME: &str = "Player 2";
pub const DEFAULT_BOT_NAME: &str = "Bot";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub default_player_x_name: String,
    pub default_player_o_name: String,
    pub bot_name: String,
    /// Fixed seed for the bot's random choices; a random one is drawn when unset.
    pub seed: Option<u64>,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            default_player_x_name: DEFAULT_PLAYER_X_NAME.to_string(),
            default_player_o_name: DEFAULT_PLAYER_O_NAME.to_string(),
            bot_name: DEFAULT_BOT_NAME.to_string(),
            seed: None,
        }
    }
}

impl TicTacToeSessionSettings {
    /// Trims the entered names and fills blanks with defaults. The bot always
    /// plays under `bot_name`, whatever was typed for O.
    pub fn resolve_names(&self, mode: GameMode, player_x: &str, player_o: Option<&str>) -> PlayerNames {
        let player_x: &str = non_blank(player_x).unwrap_or(&self.default_player_x_name);
        let player_o: &str = match mode {
            GameMode::PlayerVsPlayer => player_o
                .and_then(non_blank)
                .unwrap_or(&self.default_player_o_name),
            GameMode::PlayerVsBot => &self.bot_name,
        };

        PlayerNames::new(player_x, player_o)
    }
}

impl Validate for TicTacToeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        if self.default_player_x_name.trim().is_empty() {
            return Err("Default name for player X must not be blank".to_string());
        }
        if self.default_player_o_name.trim().is_empty() {
            return Err("Default name for player O must not be blank".to_string());
        }
        if self.bot_name.trim().is_empty() {
            return Err("Bot name must not be blank".to_string());
        }
        Ok(())
    }
}

fn non_blank(name: &str) -> Option<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}
