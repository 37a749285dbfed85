//! Optimal self-play from the empty board
//!
//! The engine searches for O only; the X side is obtained by mirroring the
//! marks, asking for O's move, and mirroring the answer back. Since both
//! sides then play optimally, the game always ends in a draw.

use anyhow::Result;

use crate::{
    board::{Board, Player},
    game::GameOutcome,
    search,
};

pub fn execute() -> Result<()> {
    let mut board = Board::new();
    let mut to_move = Player::X;
    let mut ply = 0;

    println!("Optimal self-play, both sides searched to terminal depth:\n");

    while !board.is_terminal() {
        let next = match to_move {
            Player::O => search::choose_move(&board),
            Player::X => search::choose_move(&board.swap_marks()).swap_marks(),
        };
        let pos = board
            .find_changed_cell(&next)
            .expect("a chosen move always changes one cell");

        ply += 1;
        println!("ply {ply}: {to_move} -> {pos}");
        board = next;
        to_move = to_move.opponent();
    }

    let outcome = board
        .winner()
        .map(GameOutcome::Win)
        .unwrap_or(GameOutcome::Draw);
    println!("\n{board}\n\nResult: {outcome}");

    Ok(())
}
