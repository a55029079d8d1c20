//! Check detection tests.

use super::{pinned_rook, sq};
use crate::board::{Board, BoardBuilder, Color, GameStatus, PieceKind, Square};

#[test]
fn test_rook_gives_check_down_open_file() {
    let board = BoardBuilder::new()
        .piece(Square(0, 4), Color::Black, PieceKind::King)
        .piece(Square(7, 4), Color::White, PieceKind::Rook)
        .build();
    assert!(board.is_in_check(Color::Black));
    assert!(!board.is_in_check(Color::White));
}

#[test]
fn test_blocked_file_is_not_check() {
    let board = BoardBuilder::new()
        .piece(Square(0, 4), Color::Black, PieceKind::King)
        .piece(Square(3, 4), Color::Black, PieceKind::Pawn)
        .piece(Square(7, 4), Color::White, PieceKind::Rook)
        .build();
    assert!(!board.is_in_check(Color::Black));
}

#[test]
fn test_pawn_checks_diagonally_only() {
    let diagonal = BoardBuilder::new()
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .piece(sq("d7"), Color::White, PieceKind::Pawn)
        .build();
    assert!(diagonal.is_in_check(Color::Black));

    let ahead = BoardBuilder::new()
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .piece(sq("e7"), Color::White, PieceKind::Pawn)
        .build();
    assert!(!ahead.is_in_check(Color::Black));
}

#[test]
fn test_knight_check() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("f3"), Color::Black, PieceKind::Knight)
        .build();
    assert!(board.is_in_check(Color::White));
}

#[test]
fn test_bishop_check_through_gap() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("a5"), Color::Black, PieceKind::Bishop)
        .build();
    assert!(board.is_in_check(Color::White));

    let blocked = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("d2"), Color::White, PieceKind::Pawn)
        .piece(sq("a5"), Color::Black, PieceKind::Bishop)
        .build();
    assert!(!blocked.is_in_check(Color::White));
}

#[test]
fn test_adjacent_kings_attack_each_other() {
    let board = BoardBuilder::new()
        .piece(sq("e4"), Color::White, PieceKind::King)
        .piece(sq("e5"), Color::Black, PieceKind::King)
        .build();
    assert!(board.is_in_check(Color::White));
    assert!(board.is_in_check(Color::Black));
}

#[test]
fn test_missing_king_is_never_in_check() {
    let board = BoardBuilder::new()
        .piece(sq("e4"), Color::Black, PieceKind::Queen)
        .build();
    assert!(!board.is_in_check(Color::White));
    assert!(!board.is_in_check(Color::Black));
}

#[test]
fn test_status_reflects_check() {
    let mut board = Board::new();
    for (from, to) in [("e2", "e4"), ("f7", "f6"), ("d1", "h5")] {
        board.attempt_move(sq(from), sq(to)).unwrap();
    }
    assert_eq!(board.status(), GameStatus::InCheck(Color::Black));
    assert!(board.is_attacked(sq("e8"), Color::White));
}

#[test]
fn test_pinned_rook_not_check_yet() {
    let board = pinned_rook();
    assert!(!board.is_in_check(Color::White));
    assert!(board.is_attacked(Square(4, 5), Color::Black));
}

#[test]
fn test_legal_destinations_respect_pin() {
    let board = pinned_rook();
    let mut legal = board.legal_destinations(Square(4, 5)).unwrap();
    legal.sort();
    // Only along the pin: g4 and capturing h4
    assert_eq!(legal, vec![Square(4, 6), Square(4, 7)]);
    assert_eq!(board, pinned_rook());
}

#[test]
fn test_legal_destinations_for_king_in_check() {
    let board = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, PieceKind::King)
        .piece(Square(0, 4), Color::Black, PieceKind::Rook)
        .build();
    let mut legal = board.legal_destinations(Square(7, 4)).unwrap();
    legal.sort();
    assert_eq!(
        legal,
        vec![Square(6, 3), Square(6, 5), Square(7, 3), Square(7, 5)]
    );
}
