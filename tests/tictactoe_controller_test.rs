//! Tests for the game controller: play rules and the scoring trigger.

use tictactoe_timeline::{
    FixedClock, GameController, GameStatus, HistoryError, PlayOutcome, Player, Position, Square,
};

fn new_game() -> GameController<FixedClock> {
    GameController::with_clock(FixedClock::at(11, 42))
}

fn play(game: &mut GameController<FixedClock>, indices: &[usize]) {
    for index in indices {
        let pos = Position::from_index(*index).expect("index on board");
        assert!(game.play_at(pos).is_placed(), "move at {} rejected", index);
    }
}

#[test]
fn test_diagonal_win_scenario() {
    let mut game = new_game();
    play(&mut game, &[0, 1, 4, 2, 8]);

    let expected = [
        Square::Occupied(Player::X),
        Square::Occupied(Player::O),
        Square::Occupied(Player::O),
        Square::Empty,
        Square::Occupied(Player::X),
        Square::Empty,
        Square::Empty,
        Square::Empty,
        Square::Occupied(Player::X),
    ];
    assert_eq!(game.board().squares(), &expected);

    let line = game.winning_line().expect("diagonal should be detected");
    assert_eq!(line.indices(), [0, 4, 8]);
    assert_eq!(game.status().to_string(), "Player X wins!");

    let event = game.jump_to(0).unwrap().expect("win recorded");
    assert_eq!(event.message(), "P1 (X) Wins");
    assert_eq!(game.tally().wins(Player::X), 1);
    assert_eq!(game.tally().wins(Player::O), 0);
    assert_eq!(game.ledger().winner_log().len(), 1);
}

#[test]
fn test_fresh_session_jump_to_start_is_noop() {
    let mut game = new_game();
    assert_eq!(game.jump_to(0), Ok(None));
    assert_eq!(game.tally().total(), 0);
    assert!(game.ledger().winner_log().is_empty());
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_jump_to_start_from_earlier_move_does_not_score() {
    let mut game = new_game();
    play(&mut game, &[0, 1, 4, 2, 8]);

    game.jump_to(3).unwrap();
    assert_eq!(game.jump_to(0), Ok(None));
    assert_eq!(game.tally().total(), 0);
}

#[test]
fn test_jump_elsewhere_from_winning_move_does_not_score() {
    let mut game = new_game();
    play(&mut game, &[0, 1, 4, 2, 8]);

    assert_eq!(game.jump_to(2), Ok(None));
    assert_eq!(game.jump_to(5), Ok(None));
    assert_eq!(game.tally().total(), 0);
}

#[test]
fn test_scoring_once_per_completed_game() {
    let mut game = new_game();
    play(&mut game, &[0, 1, 4, 2, 8]);

    assert!(game.jump_to(0).unwrap().is_some());
    // Now at move 0, not the latest: jumping to start again must not count.
    assert_eq!(game.jump_to(0), Ok(None));
    assert_eq!(game.tally().wins(Player::X), 1);
}

#[test]
fn test_returning_to_final_move_rearms_the_trigger() {
    let mut game = new_game();
    play(&mut game, &[0, 1, 4, 2, 8]);

    game.jump_to(0).unwrap();
    game.jump_to(5).unwrap();
    assert!(game.jump_to(0).unwrap().is_some());
    assert_eq!(game.tally().wins(Player::X), 2);
}

#[test]
fn test_new_game_after_scoring_truncates_old_one() {
    let mut game = new_game();
    play(&mut game, &[0, 1, 4, 2, 8]);
    game.jump_to(0).unwrap();

    // O wins the middle column: X 0 2 6, O 1 4 7
    play(&mut game, &[0, 1, 2, 4, 6]);
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.status(), GameStatus::InProgress { next: Player::O });
    play(&mut game, &[7]);

    assert_eq!(game.status().winner(), Some(Player::O));
    game.jump_to(0).unwrap();

    let log: Vec<&str> = game
        .ledger()
        .winner_log()
        .iter()
        .map(|e| e.message().as_str())
        .collect();
    assert_eq!(log, vec!["P2 (O) Wins", "P1 (X) Wins"]);
    assert_eq!(game.tally().to_string(), "1 (P1) | (P2) 1");
}

#[test]
fn test_play_from_earlier_move_discards_future() {
    let mut game = new_game();
    play(&mut game, &[0, 1, 4, 2]);
    game.jump_to(1).unwrap();

    assert_eq!(
        game.play_at(Position::BottomRight),
        PlayOutcome::Placed {
            player: Player::O,
            position: Position::BottomRight
        }
    );
    assert_eq!(game.current_move(), 2);
    assert_eq!(game.history().len(), game.current_move() + 1);
    assert!(game.board().is_empty(Position::TopCenter));
}

#[test]
fn test_play_while_viewing_past_win_is_rejected() {
    let mut game = new_game();
    play(&mut game, &[0, 1, 4, 2, 8]);
    let before = game.snapshot();

    assert_eq!(game.play_at(Position::BottomLeft), PlayOutcome::GameOver);
    assert_eq!(game.play_at(Position::TopLeft), PlayOutcome::GameOver);
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_full_board_without_winner_is_draw() {
    let mut game = new_game();
    // X O X / X O O / O X X
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.status().to_string(), "Draw! No moves left.");
    for pos in Position::ALL {
        assert_eq!(game.play_at(pos), PlayOutcome::Occupied(pos));
    }

    assert_eq!(game.jump_to(0), Ok(None));
    assert_eq!(game.tally().total(), 0);
}

#[test]
fn test_out_of_range_jump_is_an_error() {
    let mut game = new_game();
    play(&mut game, &[4]);

    assert_eq!(
        game.jump_to(7),
        Err(HistoryError::MoveOutOfRange {
            requested: 7,
            len: 2
        })
    );
    assert_eq!(game.current_move(), 1);
}

#[test]
fn test_snapshot_reflects_session() {
    let mut game = new_game();
    play(&mut game, &[0, 1, 4, 2, 8]);
    game.jump_to(0).unwrap();

    let snapshot = game.snapshot();
    assert_eq!(*snapshot.current_move(), 0);
    assert_eq!(snapshot.history().len(), 6);
    assert_eq!(snapshot.moves()[0].label(), "Go to Start");
    assert_eq!(snapshot.moves()[5].label(), "Go to move #5");
    assert_eq!(snapshot.status_line(), "Player turn: X");
    assert_eq!(*snapshot.winning_line(), None);
    assert_eq!(snapshot.winner_log()[0].to_string(), "11:42am P1 (X) Wins");

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["current_move"], 0);
    assert_eq!(json["winner_log"][0]["message"], "P1 (X) Wins");
}
