// Copyright 2024 the tabula developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The rule engine. Legality is expressed as a set of independent rules,
//! each a pure predicate over (side to move, board, history, candidate
//! move); a move is valid if any rule accepts it. Rules for the sliding
//! pieces are assembled from reusable movement patterns, and the same
//! machinery is turned around to answer "is this square under attack" and
//! "is this king trapped".

use tracing::debug;

use crate::{
    core::{
        positions, Board, Move, Piece, PieceKind, Position, Side, LEFT_BISHOP_FILE,
        LEFT_KNIGHT_FILE, LEFT_ROOK_FILE, QUEEN_FILE, RIGHT_BISHOP_FILE, RIGHT_KNIGHT_FILE,
        RIGHT_ROOK_FILE,
    },
    history::History,
};

/// A legality predicate. The active rule set is the OR of these: any rule
/// accepting a move makes it legal.
pub type Rule = Box<dyn Fn(Side, &Board, &History, Move) -> bool>;

/// True if all squares strictly between `from` and `to` are empty, stepping
/// one square at a time along the (straight or diagonal) line between them.
fn path_is_clear(board: &Board, mv: Move) -> bool {
    let dx = (mv.to.x - mv.from.x).signum();
    let dy = (mv.to.y - mv.from.y).signum();
    let mut pos = Position::new(mv.from.x + dx, mv.from.y + dy);
    while pos != mv.to {
        if !board[pos].is_none() {
            return false;
        }
        pos = Position::new(pos.x + dx, pos.y + dy);
    }

    true
}

/// Purely horizontal or vertical movement over empty squares.
/// `max_distance` of 0 means unlimited.
pub fn straight_pattern(max_distance: i32) -> impl Fn(&Board, Move) -> bool {
    move |board, mv| {
        let dx = mv.to.x - mv.from.x;
        let dy = mv.to.y - mv.from.y;
        if (dx == 0) == (dy == 0) {
            return false;
        }

        let span = dx.abs().max(dy.abs());
        (max_distance == 0 || span <= max_distance) && path_is_clear(board, mv)
    }
}

/// Diagonal movement over empty squares, same distance-cap semantics.
pub fn diagonal_pattern(max_distance: i32) -> impl Fn(&Board, Move) -> bool {
    move |board, mv| {
        let dx = mv.to.x - mv.from.x;
        let dy = mv.to.y - mv.from.y;
        if dx == 0 || dx.abs() != dy.abs() {
            return false;
        }

        (max_distance == 0 || dx.abs() <= max_distance) && path_is_clear(board, mv)
    }
}

/// Straight or diagonal movement, with the cap applied to both.
pub fn star_pattern(max_distance: i32) -> impl Fn(&Board, Move) -> bool {
    let straight = straight_pattern(max_distance);
    let diagonal = diagonal_pattern(max_distance);
    move |board, mv| straight(board, mv) || diagonal(board, mv)
}

/// Wraps a rule body with the checks every rule shares: both endpoints on
/// the board, distinct, and a piece of the side to move on the source
/// square. The callback receives the source and destination pieces along
/// with the raw inputs.
pub fn rule<F>(callback: F) -> Rule
where
    F: Fn(Piece, Piece, &Board, &History, Move) -> bool + 'static,
{
    Box::new(move |on_turn, board, history, mv| {
        if !mv.from.on_board() || !mv.to.on_board() || mv.from == mv.to {
            return false;
        }

        let src = board[mv.from];
        if src.is_none() || src.side != on_turn {
            return false;
        }

        callback(src, board[mv.to], board, history, mv)
    })
}

/// A rule for one piece kind that moves by a geometric pattern and may
/// capture anything but its own side.
pub fn movement_rule<P>(kind: PieceKind, pattern: P) -> Rule
where
    P: Fn(&Board, Move) -> bool + 'static,
{
    rule(move |src, dst, board, _history, mv| {
        if src.kind != kind {
            return false;
        }
        if !dst.is_none() && dst.side == src.side {
            return false;
        }

        pattern(board, mv)
    })
}

fn knight_rule() -> Rule {
    rule(|src, dst, _board, _history, mv| {
        if src.kind != PieceKind::Knight {
            return false;
        }
        if !dst.is_none() && dst.side == src.side {
            return false;
        }

        // The L-shape ignores blocking entirely.
        let dx = (mv.to.x - mv.from.x).abs();
        let dy = (mv.to.y - mv.from.y).abs();
        (dx, dy) == (1, 2) || (dx, dy) == (2, 1)
    })
}

fn pawn_rule() -> Rule {
    rule(|src, dst, board, history, mv| {
        if src.kind != PieceKind::Pawn {
            return false;
        }

        let dir = src.side.pawn_direction();
        let dx = mv.to.x - mv.from.x;
        let dy = mv.to.y - mv.from.y;

        // Single forward step onto an empty square.
        if dx == 0 && dy == dir && dst.is_none() {
            return true;
        }

        // Double step, only from a square no move has ever landed on and
        // through an empty square.
        if dx == 0
            && dy == 2 * dir
            && dst.is_none()
            && board[Position::new(mv.from.x, mv.from.y + dir)].is_none()
            && !history.piece_was_moved(mv.from)
        {
            return true;
        }

        // Diagonal capture.
        dx.abs() == 1 && dy == dir && !dst.is_none() && dst.side != src.side
    })
}

/// The king's movement rule: one step in any direction, onto a square the
/// opponent does not attack.
fn king_rule() -> Rule {
    let pattern = star_pattern(1);
    rule(move |src, dst, board, history, mv| {
        if src.kind != PieceKind::King {
            return false;
        }
        if !dst.is_none() && dst.side == src.side {
            return false;
        }

        pattern(board, mv) && !field_is_under_attack(src.side, board, history, mv.to)
    })
}

/// Castling, expressed as a move from the king to an own-side rook (or the
/// reverse). Both pieces must be unmoved and the squares the rook crosses
/// must be empty. The king's transit squares are not checked for attack,
/// which is a known simplification.
fn castling_rule() -> Rule {
    rule(|src, dst, board, history, mv| {
        let king_or_rook =
            |p: Piece| p.kind == PieceKind::King || p.kind == PieceKind::Rook;
        if src.side != dst.side
            || src.kind == dst.kind
            || !king_or_rook(src)
            || !king_or_rook(dst)
        {
            return false;
        }
        if history.piece_was_moved(mv.from) || history.piece_was_moved(mv.to) {
            return false;
        }

        let rook = if mv.from.x == LEFT_ROOK_FILE || mv.from.x == RIGHT_ROOK_FILE {
            mv.from
        } else {
            mv.to
        };
        let clear = |files: &[i32]| {
            files
                .iter()
                .all(|&x| board[Position::new(x, rook.y)].is_none())
        };
        match rook.x {
            LEFT_ROOK_FILE => clear(&[LEFT_KNIGHT_FILE, LEFT_BISHOP_FILE, QUEEN_FILE]),
            RIGHT_ROOK_FILE => clear(&[RIGHT_BISHOP_FILE, RIGHT_KNIGHT_FILE]),
            _ => false,
        }
    })
}

/// The full rule set used for play.
pub fn default_rules() -> Vec<Rule> {
    vec![
        king_rule(),
        movement_rule(PieceKind::Rook, straight_pattern(0)),
        movement_rule(PieceKind::Queen, star_pattern(0)),
        movement_rule(PieceKind::Bishop, diagonal_pattern(0)),
        knight_rule(),
        pawn_rule(),
        castling_rule(),
    ]
}

/// The rule set used inside attack and checkmate probes. The safe-king rule
/// is replaced with plain king movement and castling is left out, so probing
/// asks only "can this piece physically reach the square" and the king
/// rule's own attack check never re-enters itself.
fn probe_rules() -> Vec<Rule> {
    vec![
        movement_rule(PieceKind::King, star_pattern(1)),
        movement_rule(PieceKind::Rook, straight_pattern(0)),
        movement_rule(PieceKind::Queen, star_pattern(0)),
        movement_rule(PieceKind::Bishop, diagonal_pattern(0)),
        knight_rule(),
        pawn_rule(),
    ]
}

/// True if any rule in `rules` accepts the move.
pub fn move_is_valid(
    rules: &[Rule],
    on_turn: Side,
    board: &Board,
    history: &History,
    mv: Move,
) -> bool {
    rules.iter().any(|rule| rule(on_turn, board, history, mv))
}

/// True if the opponent of `side` has a piece that can reach `target`,
/// judged by the restricted probe rules.
pub fn field_is_under_attack(
    side: Side,
    board: &Board,
    history: &History,
    target: Position,
) -> bool {
    let probes = probe_rules();
    let attacker = side.opponent();
    positions().any(|from| {
        move_is_valid(&probes, attacker, board, history, Move::new(from, target))
    })
}

/// True if the king of `side` standing on `king` has no legal destination
/// square under the full rule set. Only the king's own mobility is tested;
/// whether another piece could block or capture the attacker is not.
pub fn piece_is_trapped(
    side: Side,
    board: &Board,
    rules: &[Rule],
    history: &History,
    king: Position,
) -> bool {
    !positions().any(|to| move_is_valid(rules, side, board, history, Move::new(king, to)))
}

fn find_king(board: &Board, side: Side) -> Option<Position> {
    positions().find(|&pos| board[pos] == Piece::new(PieceKind::King, side))
}

/// Returns the winning side, or `Side::None` while the game is undecided.
/// A side loses when its king is attacked and trapped.
pub fn winner(board: &Board, rules: &[Rule], history: &History) -> Side {
    for side in [Side::Light, Side::Dark] {
        let king = match find_king(board, side) {
            Some(king) => king,
            None => continue,
        };
        if field_is_under_attack(side, board, history, king)
            && piece_is_trapped(side, board, rules, history, king)
        {
            debug!(loser = %side, king = %king, "king is attacked and trapped");
            return side.opponent();
        }
    }

    Side::None
}
