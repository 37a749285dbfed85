//! Live game state machine between the human and the engine

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    board::{Board, Cell, Player},
    search,
};

/// Whose turn it is, or whether the game has ended.
///
/// Transitions run only forward: `HumanToMove` -> `AiToMove` ->
/// `HumanToMove`, with a side transition into `GameOver` whenever a move
/// produces a terminal board. `GameOver` is absorbing until [`Game::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    HumanToMove,
    AiToMove,
    GameOver,
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win(player) => write!(f, "{player} wins"),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// The live game: the authoritative board plus the turn/phase marker.
///
/// Only the two turn-processing calls mutate the board, each by adopting a
/// complete successor snapshot; the driver reads `board`/`phase`/`outcome`
/// for rendering and status text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    phase: Phase,
}

impl Game {
    /// Create a game in the initial state: empty board, human to move
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            phase: Phase::HumanToMove,
        }
    }

    /// Reset to the initial state
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    /// The current board snapshot
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Outcome of the game, if it has ended
    pub fn outcome(&self) -> Option<GameOutcome> {
        if let Some(winner) = self.board.winner() {
            Some(GameOutcome::Win(winner))
        } else if self.board.is_draw() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Apply the human's move (X) at `pos`.
    ///
    /// Illegal requests are silently ignored: anything outside the human's
    /// turn, out of range, or aimed at an occupied cell leaves the state
    /// untouched and returns `false`. On success the phase advances to
    /// `AiToMove`, or `GameOver` if the move ended the game.
    pub fn apply_human_move(&mut self, pos: usize) -> bool {
        if self.phase != Phase::HumanToMove || pos >= 9 || !self.board.is_empty(pos) {
            return false;
        }

        self.board = self.board.place(pos, Cell::X);
        self.phase = Phase::AiToMove;
        self.check_game_over();
        true
    }

    /// Run the engine's turn (O), adopting its chosen successor board.
    ///
    /// A no-op returning `false` unless the phase is `AiToMove`. On success
    /// the phase advances to `HumanToMove`, or `GameOver` if the engine's
    /// move ended the game.
    pub fn play_ai_turn(&mut self) -> bool {
        if self.phase != Phase::AiToMove {
            return false;
        }

        self.board = search::choose_move(&self.board);
        self.phase = Phase::HumanToMove;
        self.check_game_over();
        true
    }

    fn check_game_over(&mut self) {
        if self.board.is_terminal() {
            self.phase = Phase::GameOver;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
