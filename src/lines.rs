//! Winning line analysis for the 3x3 board

use crate::board::{Cell, Player};

/// The 8 index triples that constitute a win: 3 rows, 3 columns, 2 diagonals
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has won by holding all three cells of a line
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }

    /// Find all positions that would immediately win for the player,
    /// in ascending index order
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> Vec<usize> {
        let mut moves: Vec<usize> = WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, player, line))
            .collect();
        moves.sort_unstable();
        moves.dedup();
        moves
    }

    /// Check if a player has an immediate winning move (2 in a line, 1 empty)
    pub fn has_immediate_win(cells: &[Cell; 9], player: Player) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| Self::winning_move_in_line(cells, player, line).is_some())
    }

    /// Find the winning move position in a specific line, if one exists
    fn winning_move_in_line(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        // More than one empty cell, not a winning move
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None, // Opponent piece in line
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_won_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
        assert!(!LineAnalyzer::has_won(&cells, Player::O));
    }

    #[test]
    fn test_has_won_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[3] = Cell::O;
        cells[6] = Cell::O;

        assert!(LineAnalyzer::has_won(&cells, Player::O));
        assert!(!LineAnalyzer::has_won(&cells, Player::X));
    }

    #[test]
    fn test_has_won_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::X;
        cells[4] = Cell::X;
        cells[6] = Cell::X;

        assert!(LineAnalyzer::has_won(&cells, Player::X));
    }

    #[test]
    fn test_winning_moves_single() {
        // X.X / ... / ...
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[2] = Cell::X;

        assert_eq!(LineAnalyzer::winning_moves(&cells, Player::X), vec![1]);
    }

    #[test]
    fn test_winning_moves_multiple_sorted() {
        // XX. / X.. / ...
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[3] = Cell::X;

        let moves = LineAnalyzer::winning_moves(&cells, Player::X);
        assert_eq!(moves, vec![2, 6]);
    }

    #[test]
    fn test_blocked_line_is_not_winning() {
        // XXO: no winning move in the top row
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::O;

        assert!(!LineAnalyzer::has_immediate_win(&cells, Player::X));
    }

    #[test]
    fn test_has_immediate_win() {
        let mut cells = [Cell::Empty; 9];
        cells[4] = Cell::O;
        cells[8] = Cell::O;

        assert!(LineAnalyzer::has_immediate_win(&cells, Player::O));
        assert!(!LineAnalyzer::has_immediate_win(&cells, Player::X));
    }
}
