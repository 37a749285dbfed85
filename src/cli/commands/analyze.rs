//! Position analysis: legal moves, threats, and the engine's reply

use anyhow::{Result, bail};
use clap::Args;
use serde::Serialize;

use crate::{
    board::{Board, Player},
    cli::output::{format_moves, print_kv, print_section},
    game::GameOutcome,
    lines::LineAnalyzer,
    search,
};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Board as 9 cells ('.', 'X', 'O'), row-major, e.g. "XOX.O...."
    pub board: String,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct AnalysisReport {
    board: String,
    outcome: Option<GameOutcome>,
    legal_moves: Vec<usize>,
    x_threats: Vec<usize>,
    o_threats: Vec<usize>,
    engine_move: Option<usize>,
    engine_score: Option<i32>,
    engine_reply: Option<Board>,
}

/// Analyze a position from the engine's (O's) perspective
pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let board = Board::from_string(&args.board)?;

    // The engine plays O, so a non-terminal position must have O on move,
    // which under X-first play means X leads by exactly one piece.
    if !board.is_terminal() && board.occupied_count().is_multiple_of(2) {
        bail!("expected a position with O to move (X leads by one piece)");
    }

    let report = build_report(&board);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&board, &report);
    }

    Ok(())
}

fn build_report(board: &Board) -> AnalysisReport {
    let outcome = board
        .winner()
        .map(GameOutcome::Win)
        .or_else(|| board.is_draw().then_some(GameOutcome::Draw));

    let (engine_move, engine_score, engine_reply) = if board.is_terminal() {
        (None, None, None)
    } else {
        let depth = board.empty_cells().len() as i32;
        let reply = search::choose_move(board);
        let score = search::minimax(board, depth, i32::MIN, i32::MAX, true);
        (board.find_changed_cell(&reply), Some(score), Some(reply))
    };

    AnalysisReport {
        board: board.encode(),
        outcome,
        legal_moves: board.empty_cells(),
        x_threats: LineAnalyzer::winning_moves(&board.cells, Player::X),
        o_threats: LineAnalyzer::winning_moves(&board.cells, Player::O),
        engine_move,
        engine_score,
        engine_reply,
    }
}

fn print_report(board: &Board, report: &AnalysisReport) {
    print_section("Position");
    println!("{board}");

    match report.outcome {
        Some(outcome) => {
            print_kv("Status", &format!("game over, {outcome}"));
            return;
        }
        None => print_kv("Status", "O to move"),
    }

    print_kv("Legal moves", &format_moves(&report.legal_moves));
    print_kv("X threats", &format_moves(&report.x_threats));
    print_kv("O threats", &format_moves(&report.o_threats));

    if let (Some(pos), Some(score), Some(reply)) =
        (report.engine_move, report.engine_score, &report.engine_reply)
    {
        print_section("Engine reply");
        print_kv("Move", &pos.to_string());
        print_kv("Score", &score.to_string());
        println!("\n{reply}");
    }
}
