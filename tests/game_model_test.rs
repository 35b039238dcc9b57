//! Tests for the tic-tac-toe rule engine.

use tictactoe_duel::{Board, GameModel, Mark, Outcome, Phase, Position};

fn started() -> GameModel {
    let mut model = GameModel::new();
    model.start_game("Ann", "Bo");
    model
}

/// Plays `moves` and returns every outcome.
fn play(model: &mut GameModel, moves: &[(usize, usize)]) -> Vec<Outcome> {
    moves
        .iter()
        .map(|&(row, col)| model.place_mark(row, col))
        .collect()
}

#[test]
fn test_blank_names_get_defaults() {
    let mut model = GameModel::new();
    model.start_game("", "");
    assert_eq!(model.player_x_name(), "Player 1");
    assert_eq!(model.player_o_name(), "Player 2");

    model.start_game("   ", "\t");
    assert_eq!(model.player_x_name(), "Player 1");
    assert_eq!(model.player_o_name(), "Player 2");
}

#[test]
fn test_names_are_trimmed() {
    let mut model = GameModel::new();
    model.start_game("  Ann ", "Bo");
    assert_eq!(model.player_x_name(), "Ann");
    assert_eq!(model.player_o_name(), "Bo");
}

#[test]
fn test_start_game_clears_board_and_arms_play() {
    let mut model = started();
    play(&mut model, &[(0, 0), (1, 1)]);

    model.start_game("Cy", "Di");

    assert_eq!(*model.board(), Board::new());
    assert_eq!(model.current_player(), Mark::X);
    assert!(model.is_active());
    assert_eq!(model.player_x_name(), "Cy");
}

#[test]
fn test_occupied_square_is_ignored_without_mutation() {
    let mut model = started();
    model.place_mark(1, 1);
    let before = model.clone();

    assert_eq!(model.place_mark(1, 1), Outcome::Ignored);
    assert_eq!(model.place_mark(1, 1), Outcome::Ignored);

    assert_eq!(model, before);
    assert_eq!(model.current_player(), Mark::O);
}

#[test]
fn test_inactive_game_ignores_every_square() {
    let mut model = GameModel::new();
    let before = model.clone();
    for pos in Position::ALL {
        let (row, col) = pos.coords();
        assert_eq!(model.place_mark(row, col), Outcome::Ignored);
    }
    assert_eq!(model, before);

    let mut model = started();
    play(&mut model, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert!(!model.is_active());
    let finished = model.clone();
    for pos in Position::ALL {
        let (row, col) = pos.coords();
        assert_eq!(model.place_mark(row, col), Outcome::Ignored);
    }
    assert_eq!(model, finished);
}

#[test]
fn test_row_win() {
    let mut model = started();
    let outcomes = play(&mut model, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    assert_eq!(
        outcomes.last(),
        Some(&Outcome::Win {
            player: Mark::X,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        })
    );
    assert!(!model.is_active());
    assert_eq!(model.current_player(), Mark::X);
}

#[test]
fn test_column_win() {
    let mut model = started();
    let outcomes = play(&mut model, &[(0, 0), (0, 2), (1, 0), (1, 2), (2, 1), (2, 2)]);

    assert_eq!(
        outcomes.last(),
        Some(&Outcome::Win {
            player: Mark::O,
            line: [Position::TopRight, Position::MiddleRight, Position::BottomRight],
        })
    );
}

#[test]
fn test_main_diagonal_win() {
    let mut model = started();
    let outcomes = play(&mut model, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);

    assert_eq!(
        outcomes.last(),
        Some(&Outcome::Win {
            player: Mark::X,
            line: [Position::TopLeft, Position::Center, Position::BottomRight],
        })
    );
}

#[test]
fn test_anti_diagonal_win() {
    let mut model = started();
    let outcomes = play(&mut model, &[(0, 0), (0, 2), (0, 1), (1, 1), (2, 2), (2, 0)]);

    assert_eq!(
        outcomes.last(),
        Some(&Outcome::Win {
            player: Mark::O,
            line: [Position::TopRight, Position::Center, Position::BottomLeft],
        })
    );
}

#[test]
fn test_double_line_reports_first_in_scan_order() {
    // X completes the top row and the left column with one move at (0,0).
    let mut model = started();
    let outcomes = play(
        &mut model,
        &[(0, 1), (1, 1), (0, 2), (1, 2), (1, 0), (2, 1), (2, 0), (2, 2), (0, 0)],
    );

    assert_eq!(
        outcomes.last(),
        Some(&Outcome::Win {
            player: Mark::X,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        })
    );
}

#[test]
fn test_win_on_last_square_is_not_a_draw() {
    let mut model = started();
    let outcomes = play(
        &mut model,
        &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 1), (2, 0), (2, 2)],
    );

    assert_eq!(
        outcomes.last(),
        Some(&Outcome::Win {
            player: Mark::X,
            line: [Position::TopLeft, Position::Center, Position::BottomRight],
        })
    );
    assert_eq!(model.open_positions(), Vec::<Position>::new());
}

#[test]
fn test_draw() {
    // Final board: X O X / X O O / O X X
    let mut model = started();
    let outcomes = play(
        &mut model,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );

    let (last, earlier) = outcomes.split_last().unwrap();
    assert_eq!(*last, Outcome::Draw);
    assert!(
        earlier
            .iter()
            .all(|o| matches!(o, Outcome::Continued { .. }))
    );
    assert!(!model.is_active());
    assert_eq!(model.board().display(), "X|O|X\n-+-+-\nX|O|O\n-+-+-\nO|X|X");
}

#[test]
fn test_reset_after_win_keeps_names() {
    let mut model = started();
    play(&mut model, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    model.reset();

    assert!(model.is_active());
    assert_eq!(model.phase(), Phase::Active);
    assert_eq!(*model.board(), Board::new());
    assert_eq!(model.current_player(), Mark::X);
    assert_eq!(model.player_x_name(), "Ann");
    assert_eq!(model.player_o_name(), "Bo");
}

#[test]
fn test_reset_after_draw_allows_play_again() {
    let mut model = started();
    play(
        &mut model,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );

    model.reset();

    assert_eq!(
        model.place_mark(2, 2),
        Outcome::Continued {
            next_player: Mark::O
        }
    );
}

#[test]
fn test_turns_alternate() {
    let mut model = started();
    let outcomes = play(&mut model, &[(0, 0), (1, 1), (2, 2), (0, 1), (2, 1)]);

    let next: Vec<Mark> = outcomes
        .iter()
        .map(|o| match o {
            Outcome::Continued { next_player } => *next_player,
            other => panic!("Unexpected outcome {:?}", other),
        })
        .collect();
    assert_eq!(next, vec![Mark::O, Mark::X, Mark::O, Mark::X, Mark::O]);
}

#[test]
fn test_ignored_placement_does_not_pass_the_turn() {
    let mut model = started();
    model.place_mark(1, 1);
    model.place_mark(1, 1);

    assert_eq!(
        model.place_mark(0, 0),
        Outcome::Continued {
            next_player: Mark::X
        }
    );
}
