// Copyright 2024 the tabula developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::core::types::{
    Board, Piece, Position, PositionParseError, LEFT_BISHOP_FILE, LEFT_ROOK_FILE, QUEEN_FILE,
    RIGHT_BISHOP_FILE, RIGHT_KNIGHT_FILE, RIGHT_ROOK_FILE,
};

#[derive(Debug, Error)]
pub enum MoveParseError {
    #[error("expected two coordinate pairs of the form `x,y x,y`: {0}")]
    Malformed(String),
    #[error(transparent)]
    Position(#[from] PositionParseError),
}

/// A relocation of one piece from one square to another. A `Move` is a pure
/// board transformation: it applies unconditionally, and legality is the
/// rule engine's concern.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub const fn new(from: Position, to: Position) -> Move {
        Move { from, to }
    }

    /// Relocates the piece at `from` to `to`, clearing `from`, and returns
    /// whatever previously occupied `to` so that `undo` can restore it.
    pub fn apply(self, board: &mut Board) -> Piece {
        let captured = board[self.to];
        board[self.to] = board[self.from];
        board[self.from] = Piece::none();
        captured
    }

    /// Reverses a paired `apply`. `captured` must be the exact piece that
    /// `apply` returned.
    pub fn undo(self, board: &mut Board, captured: Piece) {
        board[self.from] = board[self.to];
        board[self.to] = captured;
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s
            .trim()
            .split_once(' ')
            .ok_or_else(|| MoveParseError::Malformed(s.to_owned()))?;

        Ok(Move::new(from.trim().parse()?, to.trim().parse()?))
    }
}

/// The two constituent moves of a castle, derived from a single king/rook
/// swap input. Castling never captures, so undo restores empty squares at
/// both destinations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CastlingMove {
    rook: Move,
    king: Move,
}

impl CastlingMove {
    /// Derives the rook and king relocations from a king/rook swap input.
    /// The endpoint sitting on a rook file is taken as the rook; the left
    /// rook castles to the queen file with the king beside it, the right
    /// rook to the right bishop file.
    ///
    /// Panics if neither endpoint lies on a rook file: the castling rule
    /// must hold before a `CastlingMove` is built, so this is a contract
    /// violation rather than a recoverable error.
    pub fn new(mv: Move) -> CastlingMove {
        let (rook_from, king_from) =
            if mv.from.x == LEFT_ROOK_FILE || mv.from.x == RIGHT_ROOK_FILE {
                (mv.from, mv.to)
            } else {
                (mv.to, mv.from)
            };

        match rook_from.x {
            LEFT_ROOK_FILE => CastlingMove {
                rook: Move::new(rook_from, Position::new(QUEEN_FILE, rook_from.y)),
                king: Move::new(king_from, Position::new(LEFT_BISHOP_FILE, king_from.y)),
            },
            RIGHT_ROOK_FILE => CastlingMove {
                rook: Move::new(rook_from, Position::new(RIGHT_BISHOP_FILE, rook_from.y)),
                king: Move::new(king_from, Position::new(RIGHT_KNIGHT_FILE, king_from.y)),
            },
            _ => panic!("castling endpoints match no rook file: {}", mv),
        }
    }

    pub fn rook_move(self) -> Move {
        self.rook
    }

    pub fn king_move(self) -> Move {
        self.king
    }

    pub fn apply(self, board: &mut Board) {
        let _ = self.rook.apply(board);
        let _ = self.king.apply(board);
    }

    pub fn undo(self, board: &mut Board) {
        self.king.undo(board, Piece::none());
        self.rook.undo(board, Piece::none());
    }
}

/// One unit of recorded history. The set of recordable actions is closed,
/// so apply/undo/destination queries all match exhaustively.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Normal { mov: Move, captured: Piece },
    Castling(CastlingMove),
}

impl Action {
    pub fn undo(self, board: &mut Board) {
        match self {
            Action::Normal { mov, captured } => mov.undo(board, captured),
            Action::Castling(castling) => castling.undo(board),
        }
    }

    pub fn replay(self, board: &mut Board) {
        match self {
            Action::Normal { mov, captured } => {
                let recaptured = mov.apply(board);
                debug_assert_eq!(captured, recaptured);
            }
            Action::Castling(castling) => castling.apply(board),
        }
    }

    /// True if this action delivered a piece onto `pos`.
    pub fn has_destination(self, pos: Position) -> bool {
        match self {
            Action::Normal { mov, .. } => mov.to == pos,
            Action::Castling(castling) => castling.rook.to == pos || castling.king.to == pos,
        }
    }
}
