// Copyright 2024 the tabula developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The undo/redo timeline. A cursor splits the log into applied actions
//! behind it and undone-but-retained actions ahead of it; recording a new
//! action discards the retained future.

use crate::core::{Action, Board, Position};

#[derive(Clone, Debug, Default)]
pub struct History {
    actions: Vec<Action>,
    cursor: usize,
}

impl History {
    pub fn new() -> History {
        History::default()
    }

    /// Appends `action` at the cursor, discarding any undone actions after
    /// it. Touches only the log; the action is assumed to already be applied
    /// to the board.
    pub fn record(&mut self, action: Action) {
        self.actions.truncate(self.cursor);
        self.actions.push(action);
        self.cursor = self.actions.len();
    }

    /// Unapplies the action behind the cursor. Returns false, leaving the
    /// board untouched, if there is nothing to undo.
    pub fn undo(&mut self, board: &mut Board) -> bool {
        if self.cursor == 0 {
            return false;
        }

        self.cursor -= 1;
        self.actions[self.cursor].undo(board);
        true
    }

    /// Replays the action ahead of the cursor. Returns false, leaving the
    /// board untouched, if there is nothing to redo.
    pub fn redo(&mut self, board: &mut Board) -> bool {
        if self.cursor == self.actions.len() {
            return false;
        }

        self.actions[self.cursor].replay(board);
        self.cursor += 1;
        true
    }

    /// True if any recorded action, applied or undone, has `pos` as a
    /// destination. Used as a proxy for "has the piece currently on this
    /// square ever moved"; the approximation misfires if a piece lands on
    /// another piece's untouched origin square, which is accepted.
    pub fn piece_was_moved(&self, pos: Position) -> bool {
        self.actions.iter().any(|action| action.has_destination(pos))
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
