// Copyright 2024 the tabula developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A line-oriented terminal frontend for the `tabula` engine. Moves are
//! entered either as two coordinate pairs (`move 4,1 4,3`) or by steering
//! a cursor (`l`/`r`/`u`/`d`) and tapping it (`tap`) on the source and
//! destination squares.

use std::io::{self, BufRead};

use anyhow::{bail, Result};
use structopt::StructOpt;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use tabula::{selector::SquareSelector, Game, Move, Side};

#[derive(Debug, StructOpt)]
struct Options {
    /// Maximum tracing level to emit (error, warn, info, debug, trace).
    #[structopt(long, default_value = "warn")]
    log_level: Level,
}

fn main() {
    let options = Options::from_args();
    let subscriber = FmtSubscriber::builder()
        .with_max_level(options.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    run().expect("fatal error while running the game loop");
}

fn run() -> io::Result<()> {
    let mut game = Game::new(|winner| println!("game over: {} wins", winner));
    let mut selector = SquareSelector::centered();

    show(&game);

    let stdin = io::stdin();
    for maybe_line in stdin.lock().lines() {
        let line = maybe_line?;
        let components: Vec<_> = line.split_whitespace().collect();
        let (&command, arguments) = components.split_first().unwrap_or((&"", &[]));
        match (command, arguments) {
            ("", []) => {}
            ("move", args) => match parse_move(args) {
                Ok(mv) => attempt(&mut game, mv),
                Err(e) => println!("invalid move command: {}", e),
            },
            ("l", []) => selector.move_left(),
            ("r", []) => selector.move_right(),
            ("u", []) => selector.move_up(),
            ("d", []) => selector.move_down(),
            ("cursor", []) => println!("cursor at {}", selector.cursor()),
            ("tap", []) => match selector.select() {
                Some(mv) => attempt(&mut game, mv),
                None => println!("selected {}", selector.cursor()),
            },
            ("esc", []) => selector.clear(),
            ("undo", []) => {
                if game.undo_move() {
                    show(&game);
                } else {
                    println!("nothing to undo");
                }
            }
            ("redo", []) => {
                if game.redo_move() {
                    show(&game);
                } else {
                    println!("nothing to redo");
                }
            }
            ("board", []) => show(&game),
            ("quit", []) => break,
            _ => println!("unrecognized command: {} {:?}", command, arguments),
        }
    }

    Ok(())
}

fn parse_move(args: &[&str]) -> Result<Move> {
    if args.len() != 2 {
        bail!(
            "expected two coordinate pairs, got {} argument(s)",
            args.len()
        );
    }

    Ok(Move::new(args[0].parse()?, args[1].parse()?))
}

fn attempt(game: &mut Game, mv: Move) {
    if game.try_move(mv) {
        show(game);
    } else {
        println!("illegal move: {}", mv);
    }
}

fn show(game: &Game) {
    println!("{}", game.board());
    match game.on_turn() {
        Side::None => println!("{} won", game.winner()),
        side => println!("{} to move", side),
    }
}
