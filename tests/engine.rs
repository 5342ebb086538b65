// Copyright 2024 the tabula developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! End-to-end tests driving the engine exclusively through the `Game`
//! command and query surface.

use std::{cell::RefCell, rc::Rc};

use tabula::{Board, Game, Move, Piece, PieceKind, Position, Side};

fn pos(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

fn mv(from: (i32, i32), to: (i32, i32)) -> Move {
    Move::new(pos(from.0, from.1), pos(to.0, to.1))
}

fn piece(kind: PieceKind, side: Side) -> Piece {
    Piece::new(kind, side)
}

#[test]
fn illegal_pawn_move_is_rejected() {
    let mut game = Game::new(|_| {});
    let before = game.board();

    // A pawn cannot jump across the board.
    assert!(!game.try_move(mv((1, 1), (5, 5))));
    assert_eq!(before, game.board());
    assert_eq!(Side::Light, game.on_turn());
}

#[test]
fn pawn_step_and_undo() {
    let mut board = Board::empty();
    board.put(pos(1, 1), piece(PieceKind::Pawn, Side::Light));
    let mut game = Game::with_board(board, |_| {});

    assert!(game.try_move(mv((1, 1), (1, 2))));
    assert_eq!(
        piece(PieceKind::Pawn, Side::Light),
        game.board()[pos(1, 2)]
    );
    assert_eq!(Side::Dark, game.on_turn());

    assert!(game.undo_move());
    assert_eq!(board, game.board());
    assert_eq!(Side::Light, game.on_turn());
}

#[test]
fn rook_path_must_be_clear() {
    let mut board = Board::empty();
    board.put(pos(0, 0), piece(PieceKind::Rook, Side::Light));
    let mut game = Game::with_board(board, |_| {});
    assert!(game.try_move(mv((0, 0), (0, 7))));

    let mut blocked = board;
    blocked.put(pos(0, 3), piece(PieceKind::Pawn, Side::Dark));
    let mut game = Game::with_board(blocked, |_| {});
    assert!(!game.try_move(mv((0, 0), (0, 7))));
    assert_eq!(blocked, game.board());
}

#[test]
fn castling_and_undo() {
    let mut board = Board::empty();
    board.put(pos(4, 0), piece(PieceKind::King, Side::Light));
    board.put(pos(0, 0), piece(PieceKind::Rook, Side::Light));
    let mut game = Game::with_board(board, |_| {});

    assert!(game.try_move(mv((4, 0), (0, 0))));
    let after = game.board();
    assert_eq!(piece(PieceKind::King, Side::Light), after[pos(2, 0)]);
    assert_eq!(piece(PieceKind::Rook, Side::Light), after[pos(3, 0)]);
    assert!(after[pos(4, 0)].is_none());
    assert!(after[pos(0, 0)].is_none());
    assert_eq!(Side::Dark, game.on_turn());

    assert!(game.undo_move());
    assert_eq!(board, game.board());
    assert_eq!(Side::Light, game.on_turn());
}

/// A back-rank mate position, one light rook move away from winning.
fn near_mate_board() -> Board {
    let mut board = Board::empty();
    board.put(pos(7, 7), piece(PieceKind::King, Side::Dark));
    board.put(pos(1, 6), piece(PieceKind::Rook, Side::Light));
    board.put(pos(0, 0), piece(PieceKind::Rook, Side::Light));
    board
}

#[test]
fn checkmate_ends_the_game() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let calls_in_game = calls.clone();
    let mut game = Game::with_board(near_mate_board(), move |winner| {
        calls_in_game.borrow_mut().push(winner)
    });

    assert!(game.try_move(mv((0, 0), (0, 7))));
    assert_eq!(vec![Side::Light], *calls.borrow());
    assert_eq!(Side::None, game.on_turn());
    assert_eq!(Side::Light, game.winner());
    assert!(game.is_over());

    // The over state accepts no further moves.
    assert!(!game.try_move(mv((7, 7), (6, 6))));
}

#[test]
fn undo_reactivates_a_finished_game() {
    let calls = Rc::new(RefCell::new(0));
    let calls_in_game = calls.clone();
    let mut game = Game::with_board(near_mate_board(), move |_| {
        *calls_in_game.borrow_mut() += 1
    });

    assert!(game.try_move(mv((0, 0), (0, 7))));
    assert_eq!(1, *calls.borrow());

    // The winner made the terminal move, so the turn hands back to them.
    assert!(game.undo_move());
    assert_eq!(Side::Light, game.on_turn());
    assert_eq!(Side::None, game.winner());
    assert!(!game.is_over());

    // Replaying the winning move ends the game again.
    assert!(game.redo_move());
    assert_eq!(2, *calls.borrow());
    assert_eq!(Side::None, game.on_turn());
    assert_eq!(Side::Light, game.winner());
}

#[test]
fn round_trip_restores_the_start() {
    let mut game = Game::new(|_| {});
    let start = game.board();

    let opening = [
        mv((4, 1), (4, 3)),
        mv((4, 6), (4, 4)),
        mv((6, 0), (5, 2)),
        mv((1, 7), (2, 5)),
        mv((5, 0), (1, 4)),
    ];
    for m in opening {
        assert!(game.try_move(m), "expected {} to be legal", m);
    }

    for _ in 0..opening.len() {
        assert!(game.undo_move());
    }
    assert!(!game.undo_move());
    assert_eq!(start, game.board());
    assert_eq!(Side::Light, game.on_turn());
}

#[test]
fn capture_is_fully_restored_by_undo() {
    let mut game = Game::new(|_| {});

    assert!(game.try_move(mv((3, 1), (3, 3))));
    assert!(game.try_move(mv((4, 6), (4, 4))));
    // Light pawn takes the dark pawn diagonally.
    assert!(game.try_move(mv((3, 3), (4, 4))));
    assert_eq!(
        piece(PieceKind::Pawn, Side::Light),
        game.board()[pos(4, 4)]
    );

    assert!(game.undo_move());
    assert_eq!(
        piece(PieceKind::Pawn, Side::Dark),
        game.board()[pos(4, 4)]
    );
    assert_eq!(
        piece(PieceKind::Pawn, Side::Light),
        game.board()[pos(3, 3)]
    );
    assert_eq!(Side::Light, game.on_turn());
}

#[test]
fn new_move_discards_the_redo_tail() {
    let mut game = Game::new(|_| {});

    assert!(game.try_move(mv((4, 1), (4, 3))));
    assert!(game.try_move(mv((4, 6), (4, 4))));
    assert!(game.undo_move());
    assert!(game.undo_move());

    // A different light opening truncates the undone future.
    assert!(game.try_move(mv((3, 1), (3, 3))));
    assert!(!game.redo_move());
    assert_eq!(Side::Dark, game.on_turn());

    assert!(game.undo_move());
    assert!(game.redo_move());
    assert!(!game.redo_move());
}

#[test]
fn redo_replays_the_same_position() {
    let mut game = Game::new(|_| {});

    assert!(game.try_move(mv((4, 1), (4, 3))));
    assert!(game.try_move(mv((4, 6), (4, 4))));
    let after = game.board();

    assert!(game.undo_move());
    assert!(game.undo_move());
    assert!(game.redo_move());
    assert!(game.redo_move());
    assert!(!game.redo_move());
    assert_eq!(after, game.board());
    assert_eq!(Side::Light, game.on_turn());
}

#[test]
fn double_step_is_spent_after_moving() {
    let mut game = Game::new(|_| {});

    assert!(game.try_move(mv((4, 1), (4, 2))));
    assert!(game.try_move(mv((4, 6), (4, 5))));
    // The pawn has moved; no double step from its new square.
    assert!(!game.try_move(mv((4, 2), (4, 4))));
    assert!(game.try_move(mv((4, 2), (4, 3))));
}
