use broadside::{AiPlayer, Board, Cell, Game, NullSink, Side, Variant, NUM_SHIPS, TOTAL_SHIP_CELLS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn variant_strategy() -> impl Strategy<Value = Variant> {
    prop_oneof![
        Just(Variant::Classic),
        Just(Variant::Multifire),
        Just(Variant::CruiseMissiles),
        Just(Variant::Hardcore),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_placements_are_disjoint(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        board.place_randomly(&mut rng).unwrap();

        prop_assert_eq!(board.fleet().placed_count(), NUM_SHIPS);
        prop_assert_eq!(board.own().count(Cell::Occupied), TOTAL_SHIP_CELLS);
        let summed: usize = board.fleet().vessels().map(|(_, v)| v.length()).sum();
        prop_assert_eq!(board.fleet().occupancy().count_ones(), summed);
        for (_, v) in board.fleet().vessels() {
            for &c in v.coords() {
                prop_assert!(c.in_bounds());
                prop_assert_eq!(board.own().get(c), Cell::Occupied);
            }
        }
    }

    #[test]
    fn health_tracks_hits_after_full_game(seed in any::<u64>(), variant in variant_strategy()) {
        let mut a = AiPlayer::new();
        let mut b = AiPlayer::new();
        let mut game = Game::with_seed(variant, seed);
        game.place_fleet(Side::A, &mut a, &mut NullSink).unwrap();
        game.place_fleet(Side::B, &mut b, &mut NullSink).unwrap();
        game.play(&mut a, &mut b, &mut NullSink).unwrap();

        for side in Side::BOTH {
            let board = game.board(side);
            for (_, v) in board.fleet().vessels() {
                let struck = v
                    .coords()
                    .iter()
                    .filter(|&&c| matches!(board.own().get(c), Cell::Hit | Cell::Sunk))
                    .count();
                prop_assert_eq!(struck, v.damage_taken());
                prop_assert_eq!(v.health() + v.damage_taken(), v.length());
                prop_assert_eq!(v.is_sunk(), v.health() == 0);
            }
            // the attacker's view mirrors the defender's resolved cells
            let opponent = game.board(side.opponent());
            for (c, cell) in board.targeting().iter() {
                let own = opponent.own().get(c);
                match cell {
                    Cell::Empty => {
                        prop_assert!(matches!(own, Cell::Empty | Cell::Occupied));
                    }
                    other => {
                        prop_assert_eq!(other, own);
                    }
                }
            }
        }
    }
}
