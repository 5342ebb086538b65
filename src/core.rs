// Copyright 2024 the tabula developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Module `core` contains the grid and move vocabulary used pervasively
//! throughout `tabula`.

mod moves;
mod types;

pub use moves::{Action, CastlingMove, Move, MoveParseError};
pub use types::{
    positions, Board, Piece, PieceKind, Position, PositionParseError, Side, BOARD_SIZE,
};

pub use types::{
    KING_FILE, LEFT_BISHOP_FILE, LEFT_KNIGHT_FILE, LEFT_ROOK_FILE, QUEEN_FILE, RIGHT_BISHOP_FILE,
    RIGHT_KNIGHT_FILE, RIGHT_ROOK_FILE,
};
