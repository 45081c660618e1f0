use battleship_targeting::{CellState, Coordinate, Dimensions, Grid, OpponentBoard, World};

#[test]
fn test_mark_only_transitions_unknown_cells() {
    let mut board = OpponentBoard::new(Dimensions::new(3, 4));
    let c = Coordinate::new(1, 2);
    assert!(board.is_unexplored(c));
    assert!(board.mark(c, CellState::Hit));
    assert!(board.is_obstacle(c));
    // never reversed or overwritten
    assert!(!board.mark(c, CellState::Miss));
    assert!(!board.mark(c, CellState::Unknown));
    assert_eq!(board.state(c), Some(CellState::Hit));
    // off the board
    assert!(!board.mark(Coordinate::new(3, 0), CellState::Miss));
    assert_eq!(board.state(Coordinate::new(3, 0)), None);
    assert!(!board.is_obstacle(Coordinate::new(3, 0)));

    assert!(board.mark(Coordinate::new(0, 0), CellState::Miss));
    assert_eq!(board.hit_count(), 1);
    assert_eq!(board.miss_count(), 1);
    assert_eq!(board.first_unexplored(), Some(Coordinate::new(0, 1)));
}

#[test]
fn test_board_display() {
    let mut board = OpponentBoard::new(Dimensions::new(2, 3));
    board.mark(Coordinate::new(0, 1), CellState::Hit);
    board.mark(Coordinate::new(1, 2), CellState::Miss);
    assert_eq!(board.to_string(), "□ X □\n□ □ o");
}

#[test]
fn test_grid_argmax_prefers_first_row_major() {
    let mut grid: Grid<u32> = Grid::zeroed(Dimensions::new(3, 3));
    assert_eq!(grid.argmax(), None);
    grid[Coordinate::new(1, 2)] = 5;
    grid[Coordinate::new(2, 0)] = 5;
    grid[Coordinate::new(0, 1)] = 2;
    assert_eq!(grid.argmax(), Some((Coordinate::new(1, 2), 5)));
    assert_eq!(grid.sum(), 12);

    let mut other: Grid<u32> = Grid::zeroed(Dimensions::new(3, 3));
    other[Coordinate::new(0, 1)] = 4;
    grid.accumulate(&other);
    assert_eq!(grid.argmax(), Some((Coordinate::new(0, 1), 6)));
    assert_eq!(grid.get(Coordinate::new(3, 3)), None);
}

#[test]
fn test_coordinates_are_row_major() {
    let dims = Dimensions::new(2, 3);
    let coords: Vec<(usize, usize)> = dims.coordinates().map(Into::into).collect();
    assert_eq!(coords, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    assert_eq!(Coordinate::new(0, 0).offset(-1, 0), None);
    assert_eq!(Coordinate::new(2, 2).offset(1, -2), Some(Coordinate::new(3, 0)));
}

#[test]
fn test_standard_world() {
    let world = World::standard();
    assert_eq!(world.dimensions, Dimensions::new(10, 10));
    assert_eq!(world.ship_lengths(), vec![5, 4, 3, 3, 2]);
    assert_eq!(world.total_ship_cells(), 17);
    assert!(world.validate().is_ok());
    assert_eq!(
        battleship_targeting::ship_type_by_name("Cruiser").map(|s| s.length()),
        Some(3)
    );
}

#[test]
#[should_panic(expected = "off the board")]
fn test_grid_index_far_off_the_board_panics_cleanly() {
    let grid: Grid<u32> = Grid::zeroed(Dimensions::new(3, 3));
    let _ = grid[Coordinate::new(usize::MAX, usize::MAX)];
}
