use common::config::Validate;
use serde::{Deserialize, Serialize};

pub const MAX_BOT_DELAY_MS: u64 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct BotConfig {
    /// Pause before the bot answers a human move.
    pub delay_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for BotConfig {
    fn validate(&self) -> Result<(), String> {
        if self.delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot delay_ms must not exceed {} (got {})",
                MAX_BOT_DELAY_MS, self.delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            delay_ms: 500,
            seed: None,
        }
    }
}
