use common::config::Validate;
use common::games::tictactoe::{DEFAULT_BOT_NAME, DEFAULT_PLAYER_O_NAME, DEFAULT_PLAYER_X_NAME};
use serde::{Deserialize, Serialize};

/// Names used when a player leaves the name prompt blank.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct PlayerConfig {
    pub player_x: String,
    pub player_o: String,
    pub bot: String,
}

impl Validate for PlayerConfig {
    fn validate(&self) -> Result<(), String> {
        for (field, value) in [
            ("player_x", &self.player_x),
            ("player_o", &self.player_o),
            ("bot", &self.bot),
        ] {
            if value.trim().is_empty() {
                return Err(format!("players.{} must not be blank", field));
            }
        }
        Ok(())
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            player_x: DEFAULT_PLAYER_X_NAME.to_string(),
            player_o: DEFAULT_PLAYER_O_NAME.to_string(),
            bot: DEFAULT_BOT_NAME.to_string(),
        }
    }
}
