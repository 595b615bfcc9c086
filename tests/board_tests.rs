use broadside::{
    Board, BoardError, Cell, Coord, Direction, Grid, Vessel, VesselState, BOARD_SIZE, FLEET,
    NUM_SHIPS, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_manual_place_marks_occupied_cells() {
    let mut board = Board::new();
    board.place(0, Coord::new(2, 3), Direction::Down).unwrap();

    for row in 2..7 {
        assert_eq!(board.own().get(Coord::new(row, 3)), Cell::Occupied);
    }
    assert_eq!(board.own().count(Cell::Occupied), FLEET[0].length());
    assert_eq!(board.fleet().find(Coord::new(4, 3)), Some(0));
    assert_eq!(board.fleet().find(Coord::new(7, 3)), None);
    assert_eq!(board.fleet().placed_count(), 1);
}

#[test]
fn test_place_left_and_up_extend_backwards() {
    let mut board = Board::new();
    board.place(4, Coord::new(5, 5), Direction::Left).unwrap();
    board.place(2, Coord::new(9, 0), Direction::Up).unwrap();

    let destroyer = board.fleet().vessel(4).unwrap();
    assert_eq!(destroyer.coords(), &[Coord::new(5, 5), Coord::new(5, 4)]);
    let cruiser = board.fleet().vessel(2).unwrap();
    assert_eq!(
        cruiser.coords(),
        &[Coord::new(9, 0), Coord::new(8, 0), Coord::new(7, 0)]
    );
}

#[test]
fn test_place_rejects_bad_input() {
    let mut board = Board::new();
    assert_eq!(
        board.place(0, Coord::new(0, 7), Direction::Right),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(
        board.place(NUM_SHIPS, Coord::new(0, 0), Direction::Right),
        Err(BoardError::InvalidIndex)
    );

    board.place(1, Coord::new(3, 0), Direction::Right).unwrap();
    assert_eq!(
        board.place(1, Coord::new(6, 0), Direction::Right),
        Err(BoardError::ShipAlreadyPlaced)
    );
    assert_eq!(
        board.place(2, Coord::new(1, 2), Direction::Down),
        Err(BoardError::ShipOverlaps)
    );
    // failed placements leave nothing behind
    assert_eq!(board.own().count(Cell::Occupied), FLEET[1].length());
    assert_eq!(board.fleet().placed_count(), 1);
}

#[test]
fn test_place_random_all_ships_no_overlap() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(42);
    board.place_randomly(&mut rng).unwrap();

    assert!(board.fully_placed());
    assert_eq!(board.own().count(Cell::Occupied), TOTAL_SHIP_CELLS);
    assert_eq!(board.fleet().occupancy().count_ones(), TOTAL_SHIP_CELLS);
    assert_eq!(board.fleet().afloat_count(), NUM_SHIPS);
}

#[test]
fn test_place_randomly_keeps_manual_vessels() {
    let mut board = Board::new();
    let mut rng = SmallRng::seed_from_u64(7);
    board.place(0, Coord::new(0, 0), Direction::Right).unwrap();
    board.place_randomly(&mut rng).unwrap();

    let carrier = board.fleet().vessel(0).unwrap();
    assert_eq!(carrier.coords()[0], Coord::new(0, 0));
    assert!(board.fully_placed());
}

#[test]
fn test_random_placement_is_reproducible() {
    let mut rng1 = SmallRng::seed_from_u64(99);
    let mut rng2 = SmallRng::seed_from_u64(99);
    let mut b1 = Board::new();
    let mut b2 = Board::new();
    b1.place_randomly(&mut rng1).unwrap();
    b2.place_randomly(&mut rng2).unwrap();
    assert_eq!(b1.own(), b2.own());
}

#[test]
fn test_record_outcome_rejects_resolved_cells() {
    let mut grid = Grid::new();
    let c = Coord::new(4, 4);
    grid.record_outcome(c, Cell::Miss).unwrap();
    assert_eq!(
        grid.record_outcome(c, Cell::Hit),
        Err(BoardError::AlreadyTargeted(c))
    );

    let shot_down = Coord::new(5, 5);
    grid.record_outcome(shot_down, Cell::ShotDown).unwrap();
    grid.record_outcome(shot_down, Cell::Hit).unwrap();
    assert_eq!(grid.get(shot_down), Cell::Hit);
}

#[test]
fn test_mark_sunk_requires_hit() {
    let mut grid = Grid::new();
    let c = Coord::new(0, 0);
    assert_eq!(grid.mark_sunk(c), Err(BoardError::NotHit(c)));
    grid.record_outcome(c, Cell::Hit).unwrap();
    grid.mark_sunk(c).unwrap();
    assert_eq!(grid.get(c), Cell::Sunk);
}

#[test]
fn test_vessel_damage_and_scuttle() {
    let mut v = Vessel::new(FLEET[4], Coord::new(0, 0), Direction::Right).unwrap();
    assert_eq!(v.health(), 2);
    assert!(!v.damage());
    assert_eq!(v.damage_taken(), 1);
    assert!(v.damage());
    assert_eq!(v.state(), VesselState::Sunk);
    assert!(!v.damage());
    assert_eq!(v.health(), 0);

    let mut s = Vessel::new(FLEET[3], Coord::new(5, 5), Direction::Down).unwrap();
    s.scuttle();
    assert!(s.is_sunk());
    assert_eq!(s.health(), s.length());
}

#[test]
fn test_grid_iter_is_row_major() {
    let grid = Grid::new();
    let coords: Vec<Coord> = grid.iter().map(|(c, _)| c).collect();
    assert_eq!(coords.len(), (BOARD_SIZE as usize).pow(2));
    assert_eq!(coords[0], Coord::new(0, 0));
    assert_eq!(coords[1], Coord::new(0, 1));
    assert_eq!(coords[10], Coord::new(1, 0));
}
