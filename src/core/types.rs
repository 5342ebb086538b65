// Copyright 2024 the tabula developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PositionParseError {
    #[error("expected a coordinate pair of the form `x,y`: {0}")]
    Malformed(String),
    #[error("coordinate component out of range: {0}")]
    OutOfRange(i32),
}

/// The width and height of the board, in squares.
pub const BOARD_SIZE: i32 = 8;

// Home-rank files, used to derive the rook and king destinations of a
// castling move.
pub const LEFT_ROOK_FILE: i32 = 0;
pub const LEFT_KNIGHT_FILE: i32 = 1;
pub const LEFT_BISHOP_FILE: i32 = 2;
pub const QUEEN_FILE: i32 = 3;
pub const KING_FILE: i32 = 4;
pub const RIGHT_BISHOP_FILE: i32 = 5;
pub const RIGHT_KNIGHT_FILE: i32 = 6;
pub const RIGHT_ROOK_FILE: i32 = 7;

/// One of the two players, or `None` for the empty-square sentinel and the
/// side-to-move of a finished game.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    None,
    Light,
    Dark,
}

impl Side {
    pub const fn opponent(self) -> Side {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
            Side::None => Side::None,
        }
    }

    /// The row delta of a forward pawn step for this side. Light pawns start
    /// on row 1 and advance toward increasing rows; dark pawns mirror.
    pub const fn pawn_direction(self) -> i32 {
        match self {
            Side::Light => 1,
            Side::Dark => -1,
            Side::None => 0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Side::None => "none",
            Side::Light => "light",
            Side::Dark => "dark",
        };

        write!(f, "{}", name)
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceKind {
    None,
    King,
    Rook,
    Queen,
    Pawn,
    Knight,
    Bishop,
}

/// A board occupant. An empty square is itself a piece value, the sentinel
/// `Piece::none()`, so board reads never need a separate null check.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    pub const fn new(kind: PieceKind, side: Side) -> Piece {
        Piece { kind, side }
    }

    pub const fn none() -> Piece {
        Piece {
            kind: PieceKind::None,
            side: Side::None,
        }
    }

    pub const fn is_none(self) -> bool {
        matches!(self.kind, PieceKind::None)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self.kind {
            PieceKind::None => '.',
            PieceKind::King => 'K',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
        };

        let c = match self.side {
            Side::Dark => c.to_ascii_lowercase(),
            _ => c,
        };

        write!(f, "{}", c)
    }
}

/// A square coordinate. `x` is the column and `y` the row; on-board values
/// lie in `[0, BOARD_SIZE)`, but off-board values are representable so that
/// movement arithmetic does not need to saturate mid-calculation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    pub const fn on_board(self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| PositionParseError::Malformed(s.to_owned()))?;
        let parse = |component: &str| {
            component
                .trim()
                .parse::<i32>()
                .map_err(|_| PositionParseError::Malformed(s.to_owned()))
        };

        let pos = Position::new(parse(x)?, parse(y)?);
        if !pos.on_board() {
            let bad = if pos.x < 0 || pos.x >= BOARD_SIZE {
                pos.x
            } else {
                pos.y
            };
            return Err(PositionParseError::OutOfRange(bad));
        }

        Ok(pos)
    }
}

/// Iterates over every on-board square, row by row.
pub fn positions() -> impl Iterator<Item = Position> {
    (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Position::new(x, y)))
}

/// An 8x8 grid of pieces, indexed `[row][col]`. A board is a pure snapshot
/// of occupancy; history and turn state live elsewhere.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Board([[Piece; BOARD_SIZE as usize]; BOARD_SIZE as usize]);

impl Board {
    pub fn empty() -> Board {
        Board([[Piece::none(); BOARD_SIZE as usize]; BOARD_SIZE as usize])
    }

    /// The standard opening position: light on rows 0 and 1, dark on rows 6
    /// and 7.
    pub fn starting() -> Board {
        use PieceKind::*;

        let home = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        let mut board = Board::empty();
        for (x, &kind) in home.iter().enumerate() {
            let x = x as i32;
            board[Position::new(x, 0)] = Piece::new(kind, Side::Light);
            board[Position::new(x, 1)] = Piece::new(Pawn, Side::Light);
            board[Position::new(x, 6)] = Piece::new(Pawn, Side::Dark);
            board[Position::new(x, 7)] = Piece::new(kind, Side::Dark);
        }

        board
    }

    pub fn piece_at(&self, pos: Position) -> Piece {
        self[pos]
    }

    pub fn put(&mut self, pos: Position, piece: Piece) {
        self[pos] = piece;
    }
}

impl Index<Position> for Board {
    type Output = Piece;

    fn index(&self, pos: Position) -> &Piece {
        &self.0[pos.y as usize][pos.x as usize]
    }
}

impl IndexMut<Position> for Board {
    fn index_mut(&mut self, pos: Position) -> &mut Piece {
        &mut self.0[pos.y as usize][pos.x as usize]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..BOARD_SIZE).rev() {
            write!(f, "{} ", y)?;
            for x in 0..BOARD_SIZE {
                write!(f, " {}", self[Position::new(x, y)])?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for x in 0..BOARD_SIZE {
            write!(f, " {}", x)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        fmt::Display::fmt(self, f)
    }
}
