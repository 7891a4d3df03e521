//! Integration tests for computer personas playing full games.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strum::IntoEnumIterator;
use tictactoe_engine::{Game, Persona, Player, Position, Side, State, factory};

/// Plays a game to completion, every player selecting its own moves.
fn play_out(game: &mut Game, rng: &mut StdRng) {
    while game.is_running() {
        let player = game.turn().clone();
        let position = player
            .select_move(game.move_count(), game.board(), rng)
            .expect("Computer player selects a move");
        assert!(game.board().is_available(position));
        game.make_move(&player, position).expect("Selected move is legal");
    }
}

#[test]
fn test_minimax_versus_minimax_draws() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut game = Game::new(
        Player::computer(Persona::SimaYi, Side::Cross),
        Player::computer(Persona::SimaYi, Side::Nought),
    )
    .unwrap();
    play_out(&mut game, &mut rng);
    assert_eq!(game.state(), State::Draw);
    assert_eq!(game.moves()[0], Position::TopLeft);
}

#[test]
fn test_sima_yi_never_loses() {
    for seed in 0..4 {
        for opponent in Persona::iter().filter(|p| *p != Persona::SimaYi) {
            for sima_side in [Side::Cross, Side::Nought] {
                let mut rng = StdRng::seed_from_u64(seed);
                let sima = Player::computer(Persona::SimaYi, sima_side);
                let other = Player::computer(opponent, sima_side.opponent());
                let mut game = Game::new(sima, other).unwrap();
                play_out(&mut game, &mut rng);

                if let Some(winner) = game.winner() {
                    assert_eq!(
                        winner.persona(),
                        Some(Persona::SimaYi),
                        "{opponent} beat Sima Yi (seed {seed}, moves {:?})",
                        game.moves()
                    );
                }
            }
        }
    }
}

#[test]
fn test_boris_opens_in_center() {
    let mut rng = StdRng::seed_from_u64(3);
    let boris = Player::computer(Persona::Boris, Side::Cross);
    let tipsy = Player::computer(Persona::Tipsy, Side::Nought);
    let mut game = Game::new(boris, tipsy).unwrap();
    play_out(&mut game, &mut rng);
    assert_eq!(game.moves()[0], Position::MiddleCenter);
}

#[test]
fn test_random_computer_games_finish() {
    let mut rng = StdRng::seed_from_u64(77);
    for _ in 0..25 {
        let mut game = factory::computer_game(&mut rng).unwrap();
        play_out(&mut game, &mut rng);
        assert!(game.state().is_terminal());
        assert!(game.move_count() >= 5);
    }
}

#[test]
fn test_seeded_games_are_reproducible() {
    let run = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = factory::computer_game(&mut rng).unwrap();
        play_out(&mut game, &mut rng);
        game.moves().to_vec()
    };
    assert_eq!(run(5), run(5));
}
