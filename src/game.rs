// Copyright 2024 the tabula developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The game orchestrator: owns the board, the rule set, the history and the
//! turn state, and is the only mutation path frontends get.

use tracing::{debug, info};

use crate::{
    core::{Action, Board, CastlingMove, Move, Side},
    history::History,
    rules::{self, Rule},
};

/// A single game in progress. All operations are synchronous and the engine
/// is not reentrant; callers drive it from one logical thread.
///
/// The game is either active, with a side to move, or over, in which case
/// `on_turn()` is `Side::None` and `winner()` names the victor.
pub struct Game {
    board: Board,
    rules: Vec<Rule>,
    history: History,
    on_turn: Side,
    winner: Side,
    game_over: Box<dyn FnMut(Side)>,
}

impl Game {
    /// A fresh game from the standard starting position, light to move.
    /// `game_over` is invoked with the winning side whenever the game
    /// transitions to the over state.
    pub fn new<F>(game_over: F) -> Game
    where
        F: FnMut(Side) + 'static,
    {
        Game::with_board(Board::starting(), game_over)
    }

    /// A game from an arbitrary position, light to move.
    pub fn with_board<F>(board: Board, game_over: F) -> Game
    where
        F: FnMut(Side) + 'static,
    {
        Game {
            board,
            rules: rules::default_rules(),
            history: History::new(),
            on_turn: Side::Light,
            winner: Side::None,
            game_over: Box::new(game_over),
        }
    }

    /// Validates and applies a candidate move. Returns false, with no state
    /// change at all, if the game is over or no rule accepts the move. A
    /// move onto an own-side piece is a castle and applies as a compound
    /// action; anything else applies as a normal move.
    pub fn try_move(&mut self, mv: Move) -> bool {
        if self.on_turn == Side::None {
            return false;
        }
        if !rules::move_is_valid(&self.rules, self.on_turn, &self.board, &self.history, mv) {
            debug!(%mv, side = %self.on_turn, "move rejected");
            return false;
        }

        let src = self.board[mv.from];
        let dst = self.board[mv.to];
        let action = if !dst.is_none() && dst.side == src.side {
            let castling = CastlingMove::new(mv);
            castling.apply(&mut self.board);
            Action::Castling(castling)
        } else {
            let captured = mv.apply(&mut self.board);
            Action::Normal { mov: mv, captured }
        };
        self.history.record(action);
        debug!(%mv, side = %self.on_turn, "move applied");

        self.finish_turn();
        true
    }

    /// Takes back the most recent action, if any, and hands the turn back
    /// to the side that made it. Undoing the final move of a finished game
    /// reactivates it.
    pub fn undo_move(&mut self) -> bool {
        if !self.history.undo(&mut self.board) {
            return false;
        }

        if self.on_turn == Side::None {
            self.on_turn = self.winner;
            self.winner = Side::None;
        } else {
            self.on_turn = self.on_turn.opponent();
        }
        debug!(side = %self.on_turn, "move undone");
        true
    }

    /// Replays the next undone action, if any. Replaying a winning move
    /// ends the game again, callback included.
    pub fn redo_move(&mut self) -> bool {
        if !self.history.redo(&mut self.board) {
            return false;
        }

        debug!("move redone");
        self.finish_turn();
        true
    }

    fn finish_turn(&mut self) {
        let winner = rules::winner(&self.board, &self.rules, &self.history);
        if winner == Side::None {
            self.on_turn = self.on_turn.opponent();
            return;
        }

        info!(%winner, "game over");
        self.on_turn = Side::None;
        self.winner = winner;
        (self.game_over)(winner);
    }

    pub fn on_turn(&self) -> Side {
        self.on_turn
    }

    /// A snapshot of the current board. Callers get a copy, never a live
    /// handle into the engine.
    pub fn board(&self) -> Board {
        self.board
    }

    pub fn winner(&self) -> Side {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.on_turn == Side::None
    }
}
