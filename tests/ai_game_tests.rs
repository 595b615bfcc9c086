use broadside::{
    AiPlayer, Cell, Game, GameEvent, GameStatus, NullSink, ShotOutcome, Side, Variant,
};

fn ai_game(variant: Variant, seed: u64) -> (Game, Side, Vec<GameEvent>) {
    let mut a = AiPlayer::new();
    let mut b = AiPlayer::new();
    let mut events: Vec<GameEvent> = Vec::new();
    let mut game = Game::with_seed(variant, seed);
    game.place_fleet(Side::A, &mut a, &mut events).unwrap();
    game.place_fleet(Side::B, &mut b, &mut events).unwrap();
    let winner = game.play(&mut a, &mut b, &mut events).unwrap();
    (game, winner, events)
}

#[test]
fn test_ai_vs_ai_game_every_variant() {
    for variant in Variant::ALL {
        for seed in 0..5 {
            let (game, winner, _) = ai_game(variant, seed);
            assert_eq!(game.status(), GameStatus::Won(winner));
            assert!(game.is_fleet_destroyed(winner.opponent()));
            assert!(!game.is_fleet_destroyed(winner));
            // every target cell of the loser is hit
            let loser = game.board(winner.opponent());
            assert_eq!(loser.own().count(Cell::Sunk), 17);
        }
    }
}

#[test]
fn test_ai_never_repeats_a_resolved_target() {
    for variant in Variant::ALL {
        let (game, _, events) = ai_game(variant, 77);
        let landed = events
            .iter()
            .filter(|e| match e {
                GameEvent::ShotResolved {
                    side: Side::A,
                    outcome,
                    ..
                } => *outcome != ShotOutcome::ShotDown,
                _ => false,
            })
            .count();
        let resolved = game
            .board(Side::A)
            .targeting()
            .iter()
            .filter(|(_, c)| !c.is_open())
            .count();
        assert_eq!(landed, resolved);
    }
}

#[test]
fn test_classic_game_has_no_interceptions() {
    let (_, _, events) = ai_game(Variant::Classic, 3);
    assert!(!events.iter().any(|e| matches!(
        e,
        GameEvent::ShotResolved {
            outcome: ShotOutcome::ShotDown,
            ..
        }
    )));
}

#[test]
fn test_seeded_games_are_reproducible() {
    let (g1, w1, e1) = ai_game(Variant::Hardcore, 1234);
    let (g2, w2, e2) = ai_game(Variant::Hardcore, 1234);
    assert_eq!(w1, w2);
    assert_eq!(g1.turns(), g2.turns());
    assert_eq!(e1, e2);
}

#[test]
fn test_multifire_ai_fires_one_shot_per_vessel() {
    let (_, _, events) = ai_game(Variant::Multifire, 9);
    let first = events
        .iter()
        .find_map(|e| match e {
            GameEvent::TurnStarted { side: Side::A, shots } => Some(*shots),
            _ => None,
        })
        .unwrap();
    assert_eq!(first, 5);
}

#[test]
fn test_null_sink_game_finishes() {
    let mut a = AiPlayer::new();
    let mut b = AiPlayer::new();
    let mut game = Game::with_seed(Variant::CruiseMissiles, 8);
    game.place_fleet(Side::A, &mut a, &mut NullSink).unwrap();
    game.place_fleet(Side::B, &mut b, &mut NullSink).unwrap();
    assert!(game.play(&mut a, &mut b, &mut NullSink).is_ok());
}
