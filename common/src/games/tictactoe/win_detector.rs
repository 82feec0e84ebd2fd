use super::board::Board;
use super::types::{GameStatus, Mark, WIN_COMBOS, WinCombo, WinningLine};

/// First combo, in `WIN_COMBOS` order, fully occupied by `mark`.
pub fn check_winner(board: &Board, mark: Mark) -> Option<WinCombo> {
    if mark == Mark::Empty {
        return None;
    }

    WIN_COMBOS
        .iter()
        .copied()
        .find(|combo| combo.iter().all(|&index| board[index] == mark))
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    [Mark::X, Mark::O]
        .into_iter()
        .find_map(|mark| check_winner(board, mark).map(|cells| WinningLine::new(mark, cells)))
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// A full board only counts as a draw when nobody completed a line.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_win(board).is_none()
}

pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_win(board).and_then(GameStatus::won_by) {
        return winner;
    }

    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::all_boards;

    fn has_complete_combo(board: &Board) -> bool {
        WIN_COMBOS.iter().any(|combo| {
            let first = board[combo[0]];
            first != Mark::Empty && combo.iter().all(|&i| board[i] == first)
        })
    }

    #[test]
    fn test_every_combo_wins_for_its_mark_only() {
        for combo in WIN_COMBOS {
            for mark in [Mark::X, Mark::O] {
                let mut board = Board::new();
                for index in combo {
                    board = board.with_mark(index, mark);
                }

                assert_eq!(check_winner(&board, mark), Some(combo));
                assert_eq!(check_winner(&board, mark.opponent().unwrap()), None);
            }
        }
    }

    #[test]
    fn test_no_complete_combo_means_no_winner() {
        for board in all_boards().filter(|b| !has_complete_combo(b)) {
            assert_eq!(check_winner(&board, Mark::X), None);
            assert_eq!(check_winner(&board, Mark::O), None);
            assert_eq!(check_win_with_line(&board), None);
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        for board in all_boards().filter(|b| b.is_full()) {
            if has_complete_combo(&board) {
                assert!(!is_draw(&board));
                assert_ne!(evaluate(&board), GameStatus::Draw);
            } else {
                assert!(is_draw(&board));
                assert_eq!(evaluate(&board), GameStatus::Draw);
            }
        }
    }

    #[test]
    fn test_full_board_with_line_is_a_win() {
        let board: Board = "XXX OOX OXO".parse().unwrap();

        assert!(board.is_full());
        assert!(!is_draw(&board));
        assert_eq!(evaluate(&board), GameStatus::XWon);
    }

    #[test]
    fn test_first_combo_in_order_is_reported() {
        // Row 0 and column 0 are both complete.
        let board: Board = "XXX X.. X..".parse().unwrap();

        assert_eq!(check_winner(&board, Mark::X), Some([0, 1, 2]));
    }

    #[test]
    fn test_empty_mark_never_wins() {
        assert_eq!(check_winner(&Board::new(), Mark::Empty), None);
    }

    #[test]
    fn test_evaluate_in_progress() {
        let board: Board = "XO. .X. ..O".parse().unwrap();

        assert_eq!(evaluate(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_winning_line_for_diagonal() {
        let board: Board = "O.X .OX X.O".parse().unwrap();

        assert_eq!(
            check_win_with_line(&board),
            Some(WinningLine::new(Mark::O, [0, 4, 8]))
        );
    }
}
