//! Interactive human-vs-engine play on the terminal

use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::{
    board::Player,
    game::{Game, GameOutcome, Phase},
};

/// Run the interactive game loop.
///
/// The human plays X from stdin; the engine answers as O. `r` restarts the
/// current game, `q` quits.
pub fn execute() -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut game = Game::new();

    println!("You are X; the engine is O. Cells are numbered 0-8, row by row.");
    println!("Enter a cell to move, 'r' to restart, 'q' to quit.");

    loop {
        match game.phase() {
            Phase::HumanToMove => {
                println!("\n{}", game.board());
                print!("Your move: ");
                io::stdout().flush()?;

                let Some(line) = lines.next() else {
                    break;
                };
                let input = line?;
                match input.trim() {
                    "q" | "quit" => break,
                    "r" | "restart" => {
                        game.reset();
                        println!("New game.");
                    }
                    text => match text.parse::<usize>() {
                        Ok(pos) if game.apply_human_move(pos) => {}
                        Ok(pos) => println!("Cell {pos} is not open."),
                        Err(_) => println!("Enter a number between 0 and 8."),
                    },
                }
            }
            Phase::AiToMove => {
                let before = *game.board();
                game.play_ai_turn();
                if let Some(pos) = before.find_changed_cell(game.board()) {
                    println!("Engine plays {pos}.");
                }
            }
            Phase::GameOver => {
                println!("\n{}", game.board());
                match game.outcome() {
                    Some(GameOutcome::Win(Player::X)) => println!("You win!"),
                    Some(GameOutcome::Win(Player::O)) => println!("The engine wins."),
                    _ => println!("Draw."),
                }

                print!("Play again? (y/n): ");
                io::stdout().flush()?;
                let Some(line) = lines.next() else {
                    break;
                };
                if matches!(line?.trim(), "y" | "yes") {
                    game.reset();
                } else {
                    break;
                }
            }
        }
    }

    Ok(())
}
