use super::board::Board;
use super::types::{BOT_MARK, CELL_COUNT, FIRST_MARK, GameMode, GameStatus, Mark, WinningLine};
use super::win_detector::{check_winner, evaluate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerNames {
    pub player_x: String,
    pub player_o: String,
}

impl PlayerNames {
    pub fn new(player_x: impl Into<String>, player_o: impl Into<String>) -> Self {
        Self {
            player_x: player_x.into(),
            player_o: player_o.into(),
        }
    }

    pub fn name_for(&self, mark: Mark) -> Option<&str> {
        match mark {
            Mark::X => Some(&self.player_x),
            Mark::O => Some(&self.player_o),
            Mark::Empty => None,
        }
    }
}

/// One snapshot of a game. Moves produce a new snapshot; this one never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub mode: GameMode,
    pub names: PlayerNames,
    pub last_move: Option<usize>,
    pub winning_line: Option<WinningLine>,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode, names: PlayerNames) -> Self {
        Self {
            board: Board::new(),
            current_mark: FIRST_MARK,
            status: GameStatus::InProgress,
            mode,
            names,
            last_move: None,
            winning_line: None,
        }
    }

    /// Fresh game with the same mode and names.
    pub fn restarted(&self) -> Self {
        Self::new(self.mode, self.names.clone())
    }

    pub fn is_active(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    pub fn try_apply_move(&self, index: usize, mark: Mark) -> Result<Self, String> {
        if !self.is_active() {
            return Err("Game is already over".to_string());
        }

        if index >= CELL_COUNT {
            return Err("Position out of bounds".to_string());
        }

        if mark == Mark::Empty {
            return Err("Cannot place an empty mark".to_string());
        }

        if mark != self.current_mark {
            return Err("Not your turn".to_string());
        }

        if self.board[index] != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        let board = self.board.with_mark(index, mark);
        let winning_line = check_winner(&board, mark).map(|cells| WinningLine::new(mark, cells));
        let status = match winning_line {
            Some(line) => GameStatus::won_by(line.mark).unwrap_or(GameStatus::InProgress),
            None => evaluate(&board),
        };
        let current_mark = if status == GameStatus::InProgress {
            mark.opponent().unwrap_or(mark)
        } else {
            self.current_mark
        };

        Ok(Self {
            board,
            current_mark,
            status,
            mode: self.mode,
            names: self.names.clone(),
            last_move: Some(index),
            winning_line,
        })
    }

    /// Rejected moves leave the game unchanged.
    pub fn apply_move(&self, index: usize, mark: Mark) -> Self {
        self.try_apply_move(index, mark)
            .unwrap_or_else(|_| self.clone())
    }

    pub fn is_bot_turn(&self) -> bool {
        self.mode == GameMode::PlayerVsBot && self.is_active() && self.current_mark == BOT_MARK
    }

    pub fn current_player_name(&self) -> &str {
        self.names.name_for(self.current_mark).unwrap_or_default()
    }

    pub fn winner(&self) -> Option<Mark> {
        self.status.winner()
    }

    pub fn winner_name(&self) -> Option<&str> {
        self.winner().and_then(|mark| self.names.name_for(mark))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_state(mode: GameMode) -> TicTacToeGameState {
        TicTacToeGameState::new(mode, PlayerNames::new("Ann", "Bob"))
    }

    fn play(state: TicTacToeGameState, moves: &[usize]) -> TicTacToeGameState {
        moves.iter().fold(state, |state, &index| {
            let mark = state.current_mark;
            state.try_apply_move(index, mark).unwrap()
        })
    }

    #[test]
    fn test_new_game_starts_with_x() {
        let state = create_test_state(GameMode::PlayerVsPlayer);

        assert_eq!(state.current_mark, Mark::X);
        assert!(state.is_active());
        assert_eq!(state.current_player_name(), "Ann");
    }

    #[test]
    fn test_move_alternates_turn() {
        let state = create_test_state(GameMode::PlayerVsPlayer);

        let next = state.apply_move(4, Mark::X);

        assert_eq!(next.board[4], Mark::X);
        assert_eq!(next.current_mark, Mark::O);
        assert_eq!(next.last_move, Some(4));
        assert_eq!(state.board[4], Mark::Empty);
    }

    #[test]
    fn test_occupied_cell_is_noop() {
        let state = play(create_test_state(GameMode::PlayerVsPlayer), &[4]);

        let next = state.apply_move(4, Mark::O);

        assert_eq!(next, state);
        assert_eq!(
            state.try_apply_move(4, Mark::O),
            Err("Cell is already marked".to_string())
        );
    }

    #[test]
    fn test_wrong_turn_and_bounds_are_rejected() {
        let state = create_test_state(GameMode::PlayerVsPlayer);

        assert_eq!(state.try_apply_move(0, Mark::O), Err("Not your turn".to_string()));
        assert_eq!(state.try_apply_move(9, Mark::X), Err("Position out of bounds".to_string()));
        assert_eq!(
            state.try_apply_move(0, Mark::Empty),
            Err("Cannot place an empty mark".to_string())
        );
    }

    #[test]
    fn test_win_stops_the_game() {
        // X: 0, 1, 2 ; O: 3, 4
        let state = play(create_test_state(GameMode::PlayerVsPlayer), &[0, 3, 1, 4, 2]);

        assert_eq!(state.status, GameStatus::XWon);
        assert_eq!(state.winning_line, Some(WinningLine::new(Mark::X, [0, 1, 2])));
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.winner_name(), Some("Ann"));
    }

    #[test]
    fn test_moves_after_win_are_noops() {
        let won = play(create_test_state(GameMode::PlayerVsPlayer), &[0, 3, 1, 4, 2]);

        for index in 0..CELL_COUNT {
            for mark in [Mark::X, Mark::O] {
                let next = won.apply_move(index, mark);

                assert_eq!(next, won);
                assert_eq!(next.current_mark, Mark::X);
            }
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X
        // X O O
        // O X X
        let state = play(
            create_test_state(GameMode::PlayerVsPlayer),
            &[0, 1, 2, 4, 3, 5, 7, 6, 8],
        );

        assert_eq!(state.status, GameStatus::Draw);
        assert_eq!(state.winning_line, None);
        assert_eq!(state.winner_name(), None);
        assert!(!state.is_active());
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        // X O X
        // O X O
        // O X X   (last move completes the diagonal)
        let state = play(
            create_test_state(GameMode::PlayerVsPlayer),
            &[0, 1, 2, 3, 4, 5, 7, 6, 8],
        );

        assert_eq!(state.status, GameStatus::XWon);
        assert_eq!(state.winning_line.map(|l| l.cells), Some([0, 4, 8]));
    }

    #[test]
    fn test_bot_turn_only_in_bot_mode() {
        let pvp = play(create_test_state(GameMode::PlayerVsPlayer), &[0]);
        let bot = play(create_test_state(GameMode::PlayerVsBot), &[0]);

        assert!(!pvp.is_bot_turn());
        assert!(bot.is_bot_turn());
        assert!(!create_test_state(GameMode::PlayerVsBot).is_bot_turn());
    }

    #[test]
    fn test_restarted_keeps_names_and_mode() {
        let state = play(create_test_state(GameMode::PlayerVsBot), &[0, 4, 8]);

        let fresh = state.restarted();

        assert_eq!(fresh, create_test_state(GameMode::PlayerVsBot));
    }
}
