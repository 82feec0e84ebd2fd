mod board;
mod bot_controller;
mod game_state;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves, is_valid_move};
pub use bot_controller::{BotDecision, BotInput, BotRule, calculate_move, decide_move, find_line_completion};
pub use game_state::{PlayerNames, TicTacToeGameState};
pub use session::{InputEvent, Scene, SessionEffect, TicTacToeSession};
pub use settings::{
    DEFAULT_BOT_NAME, DEFAULT_PLAYER_O_NAME, DEFAULT_PLAYER_X_NAME, TicTacToeSessionSettings,
};
pub use types::{
    BOT_MARK, CELL_COUNT, CENTER, CORNERS, FIRST_MARK, GameMode, GameStatus, Mark, WIN_COMBOS,
    WinCombo, WinningLine,
};
pub use win_detector::{check_win, check_win_with_line, check_winner, evaluate, is_draw};
