// Copyright 2024 the tabula developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `tabula` is a two-player board-game rule engine. It maintains an
//! authoritative board, validates candidate moves against a composable rule
//! set, applies and takes back moves through a branching undo/redo
//! timeline, and detects the win condition. Rendering and input dispatch
//! are left to frontends, which drive the engine through [`Game`] with
//! nothing but coordinate pairs.

pub mod core;
pub mod game;
pub mod history;
pub mod rules;
pub mod selector;

pub use crate::core::{Board, Move, Piece, PieceKind, Position, Side};
pub use crate::game::Game;
pub use crate::history::History;
