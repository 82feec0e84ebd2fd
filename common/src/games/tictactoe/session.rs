use crate::games::SessionRng;
use crate::log;
use super::bot_controller::{BotInput, decide_move};
use super::game_state::TicTacToeGameState;
use super::settings::TicTacToeSessionSettings;
use super::types::{GameMode, GameStatus};

/// Everything a front end can feed into a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    SelectMode(GameMode),
    /// `player_o` is ignored against the bot.
    SubmitNames {
        player_x: String,
        player_o: Option<String>,
    },
    SelectCell(usize),
    /// Delivered by the front end once the bot delay has elapsed.
    BotMove,
    Restart,
    BackHome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scene {
    ModeSelect,
    NameEntry { mode: GameMode },
    Playing(TicTacToeGameState),
}

/// What the front end has to do after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEffect {
    Idle,
    BotTurnDue,
}

pub struct TicTacToeSession {
    scene: Scene,
    settings: TicTacToeSessionSettings,
    rng: SessionRng,
}

impl TicTacToeSession {
    pub fn new(settings: TicTacToeSessionSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };
        log!("Session created with seed {}", rng.seed());

        Self {
            scene: Scene::ModeSelect,
            settings,
            rng,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn game_state(&self) -> Option<&TicTacToeGameState> {
        match &self.scene {
            Scene::Playing(state) => Some(state),
            _ => None,
        }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn dispatch(&mut self, event: InputEvent) -> SessionEffect {
        let scene = std::mem::replace(&mut self.scene, Scene::ModeSelect);
        self.scene = match (scene, event) {
            (_, InputEvent::BackHome) => {
                log!("Returning to mode selection");
                Scene::ModeSelect
            }
            (Scene::ModeSelect, InputEvent::SelectMode(mode)) => {
                log!("Mode selected: {}", mode);
                Scene::NameEntry { mode }
            }
            (Scene::NameEntry { mode }, InputEvent::SubmitNames { player_x, player_o }) => {
                let names = self
                    .settings
                    .resolve_names(mode, &player_x, player_o.as_deref());
                log!(
                    "Starting {} game: {} (X) vs {} (O)",
                    mode, names.player_x, names.player_o
                );
                Scene::Playing(TicTacToeGameState::new(mode, names))
            }
            (Scene::Playing(state), InputEvent::SelectCell(index)) => {
                Scene::Playing(self.play_human_move(state, index))
            }
            (Scene::Playing(state), InputEvent::BotMove) => {
                Scene::Playing(self.play_bot_move(state))
            }
            (Scene::Playing(state), InputEvent::Restart) => {
                log!("Restarting game");
                Scene::Playing(state.restarted())
            }
            (scene, event) => {
                log!("Ignoring {:?} in current scene", event);
                scene
            }
        };

        match &self.scene {
            Scene::Playing(state) if state.is_bot_turn() => SessionEffect::BotTurnDue,
            _ => SessionEffect::Idle,
        }
    }

    fn play_human_move(&self, state: TicTacToeGameState, index: usize) -> TicTacToeGameState {
        if state.is_bot_turn() {
            log!("Ignoring cell {} while the bot is to move", index);
            return state;
        }

        let mark = state.current_mark;
        match state.try_apply_move(index, mark) {
            Ok(next) => {
                log!("{} ({}) marked cell {}", state.current_player_name(), mark, index);
                log_outcome(&next);
                next
            }
            Err(reason) => {
                log!("Ignoring cell {} for {}: {}", index, mark, reason);
                state
            }
        }
    }

    fn play_bot_move(&mut self, state: TicTacToeGameState) -> TicTacToeGameState {
        if !state.is_bot_turn() {
            log!("Discarding stale bot turn");
            return state;
        }

        let input = BotInput::from_game_state(&state);
        let Some(decision) = decide_move(&input, &mut self.rng) else {
            log!("Bot found no empty cell");
            return state;
        };

        match state.try_apply_move(decision.index, input.bot_mark) {
            Ok(next) => {
                log!(
                    "{} ({}) marked cell {} by rule {:?}",
                    state.current_player_name(),
                    input.bot_mark,
                    decision.index,
                    decision.rule
                );
                log_outcome(&next);
                next
            }
            Err(reason) => {
                log!("Bot failed to mark cell {}: {}", decision.index, reason);
                state
            }
        }
    }
}

fn log_outcome(state: &TicTacToeGameState) {
    match state.status {
        GameStatus::XWon | GameStatus::OWon => {
            log!("{} wins", state.winner_name().unwrap_or_default());
        }
        GameStatus::Draw => log!("Game ended in a draw"),
        GameStatus::InProgress => {}
    }
}
