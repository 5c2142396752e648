//! Worked game scenarios.
//!
//! Short scripted games that exercise stacking, overflow, reserves and the
//! end of the game, checked step by step.

use rust_focus::{
    Board, FocusConfig, FocusGame, Outcome, PieceColor, RuleError, Stack, Turn,
};
use PieceColor::{Green as G, Red as R};

fn standard_game() -> FocusGame {
    FocusGame::with_players(("A", R), ("B", G)).unwrap()
}

fn game_with(cells: &[((i32, i32), &[PieceColor])]) -> FocusGame {
    let mut board = Board::empty();
    for &(at, top_first) in cells {
        board.set(at.into(), Stack::from_top_first(top_first));
    }
    FocusGame::with_board(FocusConfig::new(("A", R), ("B", G)), board).unwrap()
}

fn total_pieces(game: &FocusGame) -> usize {
    let pools: usize = game
        .players()
        .iter()
        .map(|(_, p)| p.reserve_count() + p.captured_count())
        .sum();
    game.board_snapshot().piece_count() + pools
}

// =============================================================================
// Opening Moves
// =============================================================================

/// Test that a count larger than the stack is rejected on the opening board.
#[test]
fn test_opening_count_too_large() {
    let mut game = standard_game();
    assert_eq!(
        game.move_piece("A", (0, 4), (0, 2), 2),
        Err(RuleError::InvalidPieceCount {
            requested: 2,
            available: 1
        })
    );
    assert_eq!(game.current_turn(), Turn::Unset);
}

/// Test the first stacking move of a game.
#[test]
fn test_opening_single_step() {
    let mut game = standard_game();
    assert_eq!(game.move_piece("A", (0, 0), (0, 1), 1), Ok(Outcome::Success));
    assert_eq!(game.pieces_at((0, 0)), Ok(None));
    assert_eq!(game.pieces_at((0, 1)), Ok(Some(vec![R, R])));
    assert_eq!(game.current_turn(), Turn::ToMove("B".into()));
}

/// Test that a one-piece move two cells away is illegal.
#[test]
fn test_opening_distance_mismatch() {
    let mut game = standard_game();
    assert!(matches!(
        game.move_piece("B", (1, 1), (1, 3), 1),
        Err(RuleError::IllegalMove { .. })
    ));
    assert_eq!(game.current_turn(), Turn::Unset);
}

/// Test that nobody can place from an empty reserve.
#[test]
fn test_opening_reserves_empty() {
    let mut game = standard_game();
    assert_eq!(game.place_from_reserve("A", (2, 2)), Err(RuleError::NoReserve));
    assert_eq!(game.place_from_reserve("B", (2, 2)), Err(RuleError::NoReserve));
}

/// Test a longer opening where a stack grows and then moves two cells.
#[test]
fn test_building_and_moving_a_tower() {
    let mut game = standard_game();

    game.move_piece("A", (0, 0), (0, 1), 1).unwrap();
    game.move_piece("B", (0, 2), (0, 1), 1).unwrap();
    assert_eq!(game.pieces_at((0, 1)), Ok(Some(vec![R, R, G])));

    // B now controls (0, 1), so A cannot move it.
    assert_eq!(
        game.check_move("A", (0, 1), (0, 3), 2),
        Err(RuleError::NotYourPiece((0, 1).into()))
    );

    game.move_piece("A", (1, 2), (0, 2), 1).unwrap();
    game.move_piece("B", (0, 1), (0, 3), 2).unwrap();

    // The top two pieces travel together and keep their order.
    assert_eq!(game.pieces_at((0, 1)), Ok(Some(vec![R])));
    assert_eq!(game.pieces_at((0, 3)), Ok(Some(vec![G, R, G])));
    assert_eq!(total_pieces(&game), 36);
}

// =============================================================================
// Overflow
// =============================================================================

/// Test that a merge past five sheds from the bottom into the right pools.
#[test]
fn test_overflow_splits_by_color() {
    // Destination bottom-first: G, R, G, R. Mover drops R, R on top.
    let mut game = game_with(&[((3, 0), &[R, R]), ((3, 2), &[R, G, R, G]), ((5, 5), &[G])]);

    assert_eq!(game.move_piece("A", (3, 0), (3, 2), 2), Ok(Outcome::Success));
    assert_eq!(game.pieces_at((3, 2)), Ok(Some(vec![R, G, R, R, R])));
    assert_eq!(game.pieces_at((3, 0)), Ok(None));
    assert_eq!(game.captured_count("A"), Ok(1));
    assert_eq!(game.reserve_count("A"), Ok(0));

    let record = game.history().back().cloned().unwrap();
    assert_eq!(record.evictions.captured, 1);
}

/// Test that a deep overflow sheds pieces one at a time from the bottom.
#[test]
fn test_overflow_to_reserve_and_captures() {
    // Destination bottom-first: R, G, R, G, G. Seven pieces after the move.
    let mut game = game_with(&[((3, 0), &[R, R]), ((3, 2), &[G, G, R, G, R]), ((5, 5), &[G])]);

    game.move_piece("A", (3, 0), (3, 2), 2).unwrap();
    assert_eq!(game.reserve_count("A"), Ok(1));
    assert_eq!(game.captured_count("A"), Ok(1));
    assert_eq!(game.pieces_at((3, 2)), Ok(Some(vec![R, G, G, R, R])));
    assert_eq!(game.player("A").unwrap().reserve().front(), Some(&R));
    assert_eq!(game.player("A").unwrap().captured().front(), Some(&G));
}

/// Test that an opponent's placement on a stack sheds to the opponent's pools.
#[test]
fn test_overflow_belongs_to_the_mover() {
    let mut game = game_with(&[
        ((0, 0), &[G, G, G, G, G]),
        ((0, 1), &[G]),
        ((4, 4), &[R, R, R, R, R]),
        ((5, 5), &[R]),
    ]);

    // Each side tops up a tower of its own color.
    game.move_piece("A", (5, 5), (4, 5), 1).unwrap();
    game.move_piece("B", (0, 1), (0, 0), 1).unwrap();
    assert_eq!(game.reserve_count("B"), Ok(1));
    assert_eq!(game.reserve_count("A"), Ok(0));

    game.move_piece("A", (4, 5), (4, 4), 1).unwrap();
    assert_eq!(game.reserve_count("A"), Ok(1));

    // B drops its reserve piece on A's tower and captures the bottom R.
    assert_eq!(game.place_from_reserve("B", (4, 4)), Ok(Outcome::Success));
    assert_eq!(game.captured_count("B"), Ok(1));
    assert_eq!(game.reserve_count("B"), Ok(0));
    assert_eq!(game.pieces_at((4, 4)), Ok(Some(vec![R, R, R, R, G])));
}

// =============================================================================
// Winning
// =============================================================================

fn nearly_won() -> FocusGame {
    game_with(&[
        ((0, 0), &[R, G, G, G, G]),
        ((0, 5), &[G, G, G, G, G]),
        ((1, 5), &[G, G, G, G, G]),
        ((5, 0), &[G]),
    ])
}

/// Test a capture-driven win and the frozen game that follows.
#[test]
fn test_sixth_capture_wins() {
    let mut game = nearly_won();
    let pieces = total_pieces(&game);

    assert_eq!(game.move_piece("A", (0, 0), (0, 5), 5), Ok(Outcome::Success));
    assert_eq!(game.captured_count("A"), Ok(5));
    assert_eq!(game.pieces_at((0, 5)), Ok(Some(vec![G, G, G, G, R])));

    game.move_piece("B", (5, 0), (4, 0), 1).unwrap();

    let outcome = game.move_piece("A", (0, 5), (1, 5), 1).unwrap();
    assert_eq!(outcome, Outcome::PlayerWins("A".into()));
    assert_eq!(outcome.winner(), Some("A"));
    assert_eq!(game.captured_count("A"), Ok(6));
    assert_eq!(game.winner(), Some("A"));
    assert_eq!(game.current_turn(), Turn::GameOver { winner: "A".into() });
    assert_eq!(total_pieces(&game), pieces);
}

/// Test that every action is refused once the game is over.
#[test]
fn test_no_actions_after_game_over() {
    let mut game = nearly_won();
    game.move_piece("A", (0, 0), (0, 5), 5).unwrap();
    game.move_piece("B", (5, 0), (4, 0), 1).unwrap();
    game.move_piece("A", (0, 5), (1, 5), 1).unwrap();

    let before = game.snapshot();
    assert_eq!(game.move_piece("B", (4, 0), (3, 0), 1), Err(RuleError::GameOver));
    assert_eq!(game.move_piece("A", (1, 5), (2, 5), 1), Err(RuleError::GameOver));
    assert_eq!(game.place_from_reserve("B", (3, 3)), Err(RuleError::GameOver));
    assert_eq!(game.place_from_reserve("A", (3, 3)), Err(RuleError::GameOver));
    assert_eq!(game.snapshot(), before);

    assert!(game.legal_actions("A").unwrap().is_empty());
    assert!(game.legal_actions("B").unwrap().is_empty());
}

/// Test that a lower capture target ends the game sooner.
#[test]
fn test_custom_capture_target() {
    let mut board = Board::empty();
    board.set((0, 0).into(), Stack::from_top_first(&[R]));
    board.set((0, 1).into(), Stack::from_top_first(&[G, G, G, G, G]));
    let config = FocusConfig::new(("A", R), ("B", G)).with_captures_to_win(1);
    let mut game = FocusGame::with_board(config, board).unwrap();

    assert_eq!(
        game.move_piece("A", (0, 0), (0, 1), 1),
        Ok(Outcome::PlayerWins("A".into()))
    );
}
