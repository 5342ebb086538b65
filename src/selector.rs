// Copyright 2024 the tabula developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Cursor-driven square selection for frontends. The engine itself only
//! consumes coordinate pairs; this helper turns directional input and a
//! two-tap select gesture into a candidate [`Move`].

use crate::core::{Move, Position, BOARD_SIZE};

/// A cursor over the board plus an optional remembered source square. The
/// first tap remembers the source, the second yields a move from it to the
/// cursor.
#[derive(Clone, Debug)]
pub struct SquareSelector {
    cursor: Position,
    selected: Option<Position>,
}

impl SquareSelector {
    /// A selector starting at the center of the board.
    pub fn centered() -> SquareSelector {
        SquareSelector {
            cursor: Position::new(BOARD_SIZE / 2, BOARD_SIZE / 2),
            selected: None,
        }
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    // Movement clamps at the board edge rather than wrapping.

    pub fn move_left(&mut self) {
        if self.cursor.x > 0 {
            self.cursor.x -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor.x < BOARD_SIZE - 1 {
            self.cursor.x += 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor.y > 0 {
            self.cursor.y -= 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor.y < BOARD_SIZE - 1 {
            self.cursor.y += 1;
        }
    }

    /// Taps the square under the cursor. The first tap records it as the
    /// move source and returns `None`; the second tap clears the selection
    /// and returns the move from the recorded source to the cursor.
    pub fn select(&mut self) -> Option<Move> {
        match self.selected.take() {
            Some(from) => Some(Move::new(from, self.cursor)),
            None => {
                self.selected = Some(self.cursor);
                None
            }
        }
    }

    /// Drops any remembered source square.
    pub fn clear(&mut self) {
        self.selected = None;
    }
}

impl Default for SquareSelector {
    fn default() -> Self {
        SquareSelector::centered()
    }
}
