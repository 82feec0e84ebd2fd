use crate::games::SessionRng;
use super::board::{Board, get_available_moves};
use super::game_state::TicTacToeGameState;
use super::types::{CENTER, CORNERS, Mark, WIN_COMBOS};

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board,
            bot_mark: state.current_mark,
        }
    }
}

/// Rule of the priority chain that produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotRule {
    Win,
    Block,
    Center,
    Corner,
    AnyEmpty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotDecision {
    pub index: usize,
    pub rule: BotRule,
}

pub fn calculate_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    decide_move(input, rng).map(|decision| decision.index)
}

/// Win, then block, then center, then a random corner, then any random cell.
pub fn decide_move(input: &BotInput, rng: &mut SessionRng) -> Option<BotDecision> {
    let opponent_mark = input.bot_mark.opponent()?;
    let board = &input.board;

    if let Some(index) = find_line_completion(board, input.bot_mark) {
        return Some(BotDecision { index, rule: BotRule::Win });
    }

    if let Some(index) = find_line_completion(board, opponent_mark) {
        return Some(BotDecision { index, rule: BotRule::Block });
    }

    if board[CENTER] == Mark::Empty {
        return Some(BotDecision { index: CENTER, rule: BotRule::Center });
    }

    let free_corners: Vec<usize> = CORNERS
        .iter()
        .copied()
        .filter(|&index| board[index] == Mark::Empty)
        .collect();
    if let Some(index) = rng.choose(&free_corners) {
        return Some(BotDecision { index, rule: BotRule::Corner });
    }

    rng.choose(&get_available_moves(board))
        .map(|index| BotDecision { index, rule: BotRule::AnyEmpty })
}

/// Empty cell of the first combo holding exactly two `mark`s and one empty cell.
pub fn find_line_completion(board: &Board, mark: Mark) -> Option<usize> {
    if mark == Mark::Empty {
        return None;
    }

    WIN_COMBOS.iter().find_map(|combo| {
        let owned = combo.iter().filter(|&&index| board[index] == mark).count();
        let empty = combo.iter().find(|&&index| board[index] == Mark::Empty);
        match (owned, empty) {
            (2, Some(&index)) => Some(index),
            _ => None,
        }
    })
}
