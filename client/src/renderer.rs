use common::games::tictactoe::{GameMode, GameStatus, Mark, Scene, TicTacToeGameState};

const ROW_SEPARATOR: &str = "---+---+---";

pub fn status_message(state: &TicTacToeGameState) -> String {
    match state.status {
        GameStatus::InProgress => format!("{}'s Turn", state.current_player_name()),
        GameStatus::XWon | GameStatus::OWon => {
            format!("{} Wins!", state.winner_name().unwrap_or_default())
        }
        GameStatus::Draw => "It's a Tie!".to_string(),
    }
}

/// Empty cells show their 1-based number; winning cells are bracketed.
pub fn render_board(state: &TicTacToeGameState) -> String {
    let rows: Vec<String> = state
        .board
        .cells()
        .chunks(3)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(column, &mark)| render_cell(state, row * 3 + column, mark))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    let separator = format!("\n{}\n", ROW_SEPARATOR);
    rows.join(separator.as_str())
}

fn render_cell(state: &TicTacToeGameState, index: usize, mark: Mark) -> String {
    let symbol = match mark {
        Mark::Empty => char::from_digit(index as u32 + 1, 10).unwrap_or('?'),
        mark => mark.symbol(),
    };
    let highlighted = state
        .winning_line
        .is_some_and(|line| line.contains(index));
    if highlighted {
        format!("[{}]", symbol)
    } else {
        format!(" {} ", symbol)
    }
}

/// Full screen for the current scene. `name_prompt` is the player whose name is being asked for.
pub fn render_scene(scene: &Scene, name_prompt: Option<Mark>, last_mode: Option<GameMode>) -> String {
    match scene {
        Scene::ModeSelect => {
            let mut screen = String::from(
                "Tic-Tac-Toe\n  1) Player vs Player\n  2) Player vs Bot\n  q) Quit\n",
            );
            if let Some(mode) = last_mode {
                screen.push_str(&format!("Choose a mode (blank for {}):", mode));
            } else {
                screen.push_str("Choose a mode:");
            }
            screen
        }
        Scene::NameEntry { mode } => {
            let mark = name_prompt.unwrap_or(Mark::X);
            let opponent = match mode {
                GameMode::PlayerVsPlayer => "Player vs Player",
                GameMode::PlayerVsBot => "Player vs Bot",
            };
            format!("{}\nName for {} (leave blank for default):", opponent, mark)
        }
        Scene::Playing(state) => {
            let hint = if state.is_active() {
                "Enter 1-9 to mark a cell, r to restart, h for home, q to quit"
            } else {
                "r to play again, h for home, q to quit"
            };
            format!("{}\n\n{}\n{}", render_board(state), status_message(state), hint)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::PlayerNames;

    fn play(mode: GameMode, moves: &[usize]) -> TicTacToeGameState {
        let state = TicTacToeGameState::new(mode, PlayerNames::new("Ann", "Bob"));
        moves
            .iter()
            .fold(state, |state, &index| state.apply_move(index, state.current_mark))
    }

    #[test]
    fn test_status_turn() {
        assert_eq!(status_message(&play(GameMode::PlayerVsPlayer, &[])), "Ann's Turn");
        assert_eq!(status_message(&play(GameMode::PlayerVsPlayer, &[4])), "Bob's Turn");
    }

    #[test]
    fn test_status_win_and_tie() {
        let won = play(GameMode::PlayerVsPlayer, &[3, 0, 4, 1, 8, 2]);
        let tie = play(GameMode::PlayerVsPlayer, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert_eq!(status_message(&won), "Bob Wins!");
        assert_eq!(status_message(&tie), "It's a Tie!");
    }

    #[test]
    fn test_empty_board_shows_cell_numbers() {
        let board = render_board(&play(GameMode::PlayerVsPlayer, &[]));

        assert_eq!(
            board,
            " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn test_winning_cells_are_bracketed() {
        let board = render_board(&play(GameMode::PlayerVsPlayer, &[0, 3, 1, 4, 2]));

        assert_eq!(
            board,
            "[X]|[X]|[X]\n---+---+---\n O | O | 6 \n---+---+---\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn test_scene_prompts() {
        let mode_select = render_scene(&Scene::ModeSelect, None, Some(GameMode::PlayerVsBot));
        let names = render_scene(
            &Scene::NameEntry { mode: GameMode::PlayerVsPlayer },
            Some(Mark::O),
            None,
        );

        assert!(mode_select.ends_with("Choose a mode (blank for bot):"));
        assert!(names.ends_with("Name for O (leave blank for default):"));
    }

    #[test]
    fn test_finished_game_hint() {
        let won = play(GameMode::PlayerVsPlayer, &[0, 3, 1, 4, 2]);

        let screen = render_scene(&Scene::Playing(won), None, None);

        assert!(screen.contains("Ann Wins!"));
        assert!(screen.ends_with("r to play again, h for home, q to quit"));
    }
}
