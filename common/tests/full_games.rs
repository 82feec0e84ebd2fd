use common::games::SessionRng;
use common::games::tictactoe::{
    BotInput, GameMode, GameStatus, InputEvent, Mark, PlayerNames, SessionEffect,
    TicTacToeGameState, TicTacToeSession, TicTacToeSessionSettings, calculate_move,
    check_win_with_line, get_available_moves, is_draw,
};

fn play_bot_vs_bot(seed: u64) -> Vec<TicTacToeGameState> {
    let mut rng = SessionRng::new(seed);
    let mut state = TicTacToeGameState::new(
        GameMode::PlayerVsPlayer,
        PlayerNames::new("Left", "Right"),
    );
    let mut history = vec![state.clone()];

    while state.is_active() {
        let input = BotInput::from_game_state(&state);
        let index = calculate_move(&input, &mut rng).expect("active game has an empty cell");
        state = state.apply_move(index, input.bot_mark);
        history.push(state.clone());
    }

    history
}

#[test]
fn test_bot_vs_bot_games_always_finish_consistently() {
    for seed in 0..200 {
        let history = play_bot_vs_bot(seed);
        let last = history.last().unwrap();

        assert!(history.len() <= 10);
        for pair in history.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            assert_eq!(after.board.count(Mark::Empty) + 1, before.board.count(Mark::Empty));
            if after.is_active() {
                assert_ne!(after.current_mark, before.current_mark);
            } else {
                assert_eq!(after.current_mark, before.current_mark);
            }
        }
        match last.status {
            GameStatus::XWon | GameStatus::OWon => {
                let line = check_win_with_line(&last.board).unwrap();
                assert_eq!(last.winning_line, Some(line));
                assert_eq!(last.winner(), Some(line.mark));
            }
            GameStatus::Draw => assert!(is_draw(&last.board)),
            GameStatus::InProgress => panic!("game {} did not finish", seed),
        }
    }
}

#[test]
fn test_random_human_against_session_bot() {
    for seed in 0..100 {
        let mut human = SessionRng::new(seed ^ 0xdead_beef);
        let mut session = TicTacToeSession::new(TicTacToeSessionSettings {
            seed: Some(seed),
            ..TicTacToeSessionSettings::default()
        });
        session.dispatch(InputEvent::SelectMode(GameMode::PlayerVsBot));
        session.dispatch(InputEvent::SubmitNames {
            player_x: String::new(),
            player_o: None,
        });

        let mut turns = 0;
        while let Some(state) = session.game_state().filter(|s| s.is_active()) {
            let moves = get_available_moves(&state.board);
            let index = human.choose(&moves).unwrap();
            if session.dispatch(InputEvent::SelectCell(index)) == SessionEffect::BotTurnDue {
                assert_eq!(session.dispatch(InputEvent::BotMove), SessionEffect::Idle);
            }
            turns += 1;
            assert!(turns <= 5);
        }

        let state = session.game_state().unwrap();
        assert_eq!(state.names, PlayerNames::new("Player 1", "Bot"));
        assert!(!state.is_active());
        if state.status == GameStatus::OWon {
            assert_eq!(state.winner_name(), Some("Bot"));
        }
    }
}
