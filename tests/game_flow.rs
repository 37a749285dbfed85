//! Turn/phase state machine behavior as seen by an external driver.

use oxo::{Cell, Game, GameOutcome, Phase, Player};

/// Drive a game to completion: the human side always takes the lowest
/// empty cell, the engine answers normally.
fn play_to_game_over(game: &mut Game) {
    while game.phase() != Phase::GameOver {
        match game.phase() {
            Phase::HumanToMove => {
                let pos = game.board().empty_cells()[0];
                assert!(game.apply_human_move(pos));
            }
            Phase::AiToMove => {
                assert!(game.play_ai_turn());
            }
            Phase::GameOver => unreachable!(),
        }
    }
}

#[test]
fn phases_cycle_human_engine_human() {
    let mut game = Game::new();
    assert_eq!(game.phase(), Phase::HumanToMove);

    game.apply_human_move(4);
    assert_eq!(game.phase(), Phase::AiToMove);

    game.play_ai_turn();
    assert_eq!(game.phase(), Phase::HumanToMove);
}

#[test]
fn engine_turn_adopts_a_single_o_placement() {
    let mut game = Game::new();
    game.apply_human_move(0);

    let before = *game.board();
    game.play_ai_turn();
    let after = *game.board();

    let pos = before
        .find_changed_cell(&after)
        .expect("the engine placed a mark");
    assert_eq!(before.get(pos), Cell::Empty);
    assert_eq!(after.get(pos), Cell::O);
    assert_eq!(after.occupied_count(), before.occupied_count() + 1);
}

#[test]
fn every_game_reaches_game_over_with_an_outcome() {
    let mut game = Game::new();
    play_to_game_over(&mut game);

    assert!(game.outcome().is_some());
    assert!(
        game.outcome() != Some(GameOutcome::Win(Player::X)),
        "the engine must never lose"
    );
}

#[test]
fn game_over_is_absorbing() {
    let mut game = Game::new();
    play_to_game_over(&mut game);

    let final_board = *game.board();
    for pos in final_board.empty_cells() {
        assert!(!game.apply_human_move(pos), "move accepted after game over");
    }
    assert!(!game.play_ai_turn(), "engine turn ran after game over");
    assert_eq!(*game.board(), final_board);
    assert_eq!(game.phase(), Phase::GameOver);
}

#[test]
fn reset_leaves_game_over_and_restores_all_moves() {
    let mut game = Game::new();
    play_to_game_over(&mut game);

    game.reset();
    assert_eq!(game.phase(), Phase::HumanToMove);
    assert_eq!(game.outcome(), None);
    assert_eq!(game.board().empty_cells(), (0..9).collect::<Vec<_>>());
}
