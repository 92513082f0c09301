//! Rules engine integration tests: opening position, mandatory capture,
//! majority law, flying kings, promotion.

use damas::core::{Board, Cell, Move, Side, Square};
use damas::rules::{apply, legal_moves, BrazilianRules, RulesEngine};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

fn ends(moves: &[Move]) -> Vec<Square> {
    moves.iter().map(|m| m.end).collect()
}

// =============================================================================
// Opening Position
// =============================================================================

#[test]
fn test_opening_white_moves_are_row_two_advances() {
    let moves = legal_moves(&Board::initial(), Side::White);

    let expected = vec![
        Move::step(sq(2, 1), sq(3, 0)),
        Move::step(sq(2, 1), sq(3, 2)),
        Move::step(sq(2, 3), sq(3, 2)),
        Move::step(sq(2, 3), sq(3, 4)),
        Move::step(sq(2, 5), sq(3, 4)),
        Move::step(sq(2, 5), sq(3, 6)),
        Move::step(sq(2, 7), sq(3, 6)),
    ];
    assert_eq!(moves, expected);
}

#[test]
fn test_opening_red_moves_are_row_five_advances() {
    let moves = legal_moves(&Board::initial(), Side::Red);
    assert_eq!(moves.len(), 7);
    assert!(moves.iter().all(|m| m.start.row == 5 && m.end.row == 4 && !m.is_capture()));
}

// =============================================================================
// Mandatory Capture
// =============================================================================

#[test]
fn test_adjacent_enemy_forces_capture() {
    // White man with an adjacent red man and an empty square behind it;
    // the other white men have simple moves that must be suppressed.
    let board = Board::from_pieces(&[
        (sq(3, 2), Cell::WhiteMan),
        (sq(4, 3), Cell::RedMan),
        (sq(1, 0), Cell::WhiteMan),
        (sq(1, 6), Cell::WhiteKing),
        (sq(7, 6), Cell::RedMan),
    ])
    .unwrap();

    let moves = legal_moves(&board, Side::White);
    assert!(moves
        .iter()
        .any(|m| m.captures.as_slice() == [sq(4, 3)] && m.end == sq(5, 4)));
    assert!(moves.iter().all(Move::is_capture), "no simple move may be legal");
}

#[test]
fn test_capture_from_opening_exchange() {
    let rules = BrazilianRules;
    let mut board = Board::initial();
    for mv in [
        Move::step(sq(2, 3), sq(3, 4)),
        Move::step(sq(5, 6), sq(4, 5)),
    ] {
        assert!(rules.legal_moves(&board, board.get(mv.start).side().unwrap()).contains(&mv));
        board = rules.apply(&board, &mv);
    }

    // White (3,4) now faces red (4,5) with (5,6) vacated.
    let moves = rules.legal_moves(&board, Side::White);
    assert_eq!(moves, vec![Move::capture(sq(3, 4), &[sq(5, 6)], &[sq(4, 5)])]);
}

// =============================================================================
// Majority Law
// =============================================================================

#[test]
fn test_majority_law_keeps_all_longest_chains() {
    // Two different white men can each take three pieces, running the
    // loop in opposite directions.
    let board: Board = "
        . . . . . . . .
        . . . . . . . .
        . w . . . w . .
        . . r . . . r .
        . . . . . . . .
        . . . . r . r .
        . . . . . . . .
        w . . . . . . .
    "
    .parse()
    .unwrap();

    let moves = legal_moves(&board, Side::White);
    assert!(!moves.is_empty());
    let counts: Vec<_> = moves.iter().map(Move::capture_count).collect();
    assert_eq!(counts, vec![3, 3]);

    let starts: Vec<_> = moves.iter().map(|m| m.start).collect();
    assert!(starts.contains(&sq(2, 1)));
    assert!(starts.contains(&sq(2, 5)));
}

#[test]
fn test_majority_law_counts_chains_that_stop_short_of_start() {
    // The diamond would let the man jump four pieces and come home, but
    // its own start square is still occupied, so the longest chains take
    // three.
    let board = Board::from_pieces(&[
        (sq(2, 3), Cell::WhiteMan),
        (sq(3, 2), Cell::RedMan),
        (sq(3, 4), Cell::RedMan),
        (sq(5, 2), Cell::RedMan),
        (sq(5, 4), Cell::RedMan),
    ])
    .unwrap();

    let moves = legal_moves(&board, Side::White);
    assert_eq!(
        moves,
        vec![
            Move::capture(sq(2, 3), &[sq(4, 1), sq(6, 3), sq(4, 5)], &[sq(3, 2), sq(5, 2), sq(5, 4)]),
            Move::capture(sq(2, 3), &[sq(4, 5), sq(6, 3), sq(4, 1)], &[sq(3, 4), sq(5, 4), sq(5, 2)]),
        ]
    );

    let next = apply(&board, &moves[0]);
    assert_eq!(next.get(sq(4, 5)), Cell::WhiteMan);
    assert_eq!(next.get(sq(3, 4)), Cell::RedMan);
    assert_eq!(next.count(Side::Red), 1);
}

// =============================================================================
// Flying Kings
// =============================================================================

#[test]
fn test_king_slides_whole_diagonal() {
    let board = Board::from_pieces(&[(sq(7, 0), Cell::WhiteKing), (sq(0, 1), Cell::RedMan)]).unwrap();
    let moves = legal_moves(&board, Side::White);
    assert_eq!(
        ends(&moves),
        vec![sq(6, 1), sq(5, 2), sq(4, 3), sq(3, 4), sq(2, 5), sq(1, 6), sq(0, 7)]
    );
}

#[test]
fn test_king_captures_from_distance_with_choice_of_landing() {
    let board = Board::from_pieces(&[(sq(7, 0), Cell::RedKing), (sq(4, 3), Cell::WhiteMan)]).unwrap();
    let moves = legal_moves(&board, Side::Red);
    assert_eq!(ends(&moves), vec![sq(3, 4), sq(2, 5), sq(1, 6), sq(0, 7)]);
    assert!(moves.iter().all(|m| m.captures.as_slice() == [sq(4, 3)]));
}

#[test]
fn test_king_chain_turns_corner() {
    // The king takes (4,3), lands on (3,4) and turns to take (2,3).
    let board = Board::from_pieces(&[
        (sq(7, 0), Cell::RedKing),
        (sq(4, 3), Cell::WhiteMan),
        (sq(2, 3), Cell::WhiteMan),
    ])
    .unwrap();
    let moves = legal_moves(&board, Side::Red);
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| m.capture_count() == 2));
    assert!(moves.iter().all(|m| m.path[0] == sq(3, 4)));
    assert_eq!(ends(&moves), vec![sq(1, 2), sq(0, 1)]);
}

// =============================================================================
// Application
// =============================================================================

#[test]
fn test_apply_chain_with_promotion() {
    // White man double-jumps and finishes on row 7.
    let board = Board::from_pieces(&[
        (sq(3, 2), Cell::WhiteMan),
        (sq(4, 3), Cell::RedMan),
        (sq(6, 5), Cell::RedMan),
    ])
    .unwrap();
    let moves = legal_moves(&board, Side::White);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].end, sq(7, 6));

    let next = apply(&board, &moves[0]);
    assert_eq!(next.get(sq(7, 6)), Cell::WhiteKing);
    assert_eq!(next.count(Side::Red), 0);
    assert_eq!(next.piece_count(), 1);
}

#[test]
fn test_apply_does_not_touch_input() {
    let board = Board::initial();
    let moves = legal_moves(&board, Side::White);
    let next = apply(&board, &moves[0]);
    assert_ne!(next, board);
    assert_eq!(board, Board::initial());
}
