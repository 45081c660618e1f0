use battleship_targeting::{
    Answer, Coordinate, Dimensions, Direction, EngineConfig, EngineError, Mode, ShipType,
    SunkPolicy, TargetingEngine, World,
};

const CRUISER: ShipType = ShipType::new("Cruiser", 3);
const DESTROYER: ShipType = ShipType::new("Destroyer", 2);

fn at(row: usize, column: usize) -> Coordinate {
    Coordinate::new(row, column)
}

fn cruiser_world() -> World {
    World::new(Dimensions::new(8, 8), vec![CRUISER])
}

#[test]
fn test_hunting_on_empty_board_picks_first_central_cell() {
    let mut engine = TargetingEngine::new(&cruiser_world()).unwrap();
    assert_eq!(engine.mode(), Mode::Hunting);
    let guess = engine.make_guess();
    assert_eq!(guess, at(2, 2));
    assert_eq!(engine.probability().total()[guess], 6);
    // asking again without an answer yields the same cell
    assert_eq!(engine.make_guess(), guess);
}

#[test]
fn test_hit_probes_adjacent_cells() {
    let mut engine = TargetingEngine::new(&cruiser_world()).unwrap();
    engine.update(at(3, 3), Answer::hit()).unwrap();
    assert!(matches!(engine.mode(), Mode::Targeting(c) if c.anchor == at(3, 3)));

    let guess = engine.make_guess();
    let neighbours = [at(2, 3), at(4, 3), at(3, 2), at(3, 4)];
    assert!(neighbours.contains(&guess), "unexpected guess {}", guess);
    // north steps towards higher rows
    assert_eq!(guess, at(4, 3));
}

#[test]
fn test_sunk_returns_to_hunting() {
    let mut engine = TargetingEngine::new(&cruiser_world()).unwrap();
    engine.update(at(3, 3), Answer::sunk(CRUISER)).unwrap();
    assert_eq!(engine.mode(), Mode::Hunting);
    let guess = engine.make_guess();
    assert_eq!(Some(guess), engine.probability().highest());

    let mut engine = TargetingEngine::new(&cruiser_world()).unwrap();
    engine.update(at(3, 3), Answer::hit()).unwrap();
    let next = engine.make_guess();
    engine.update(next, Answer::sunk(CRUISER)).unwrap();
    assert_eq!(engine.mode(), Mode::Hunting);
    assert_eq!(Some(engine.make_guess()), engine.probability().highest());
}

#[test]
fn test_miss_rotates_and_hit_extends() {
    let mut engine = TargetingEngine::new(&cruiser_world()).unwrap();
    engine.update(at(3, 3), Answer::hit()).unwrap();

    // default heading is north, one row down
    assert_eq!(engine.make_guess(), at(4, 3));
    engine.update(at(4, 3), Answer::miss()).unwrap();

    assert_eq!(engine.make_guess(), at(3, 4));
    engine.update(at(3, 4), Answer::hit()).unwrap();

    // keep going east
    assert_eq!(engine.make_guess(), at(3, 5));
    engine.update(at(3, 5), Answer::miss()).unwrap();

    let cursor = *engine.mode().cursor().unwrap();
    assert_eq!(cursor.direction, Direction::South);
    assert_eq!(cursor.distance, 1);
    assert_eq!(engine.make_guess(), at(2, 3));
}

#[test]
fn test_blocked_direction_is_skipped() {
    let mut engine = TargetingEngine::new(&cruiser_world()).unwrap();
    engine.update(at(7, 0), Answer::hit()).unwrap();
    // north runs past the last row, east is the first open cell
    assert_eq!(engine.make_guess(), at(7, 1));

    engine.update(at(7, 1), Answer::miss()).unwrap();
    assert_eq!(engine.make_guess(), at(6, 0));
}

#[test]
fn test_boxed_in_anchor_falls_back_to_hunting() {
    let world = World::new(Dimensions::new(3, 3), vec![DESTROYER]);
    let mut engine = TargetingEngine::new(&world).unwrap();
    for c in [at(0, 1), at(1, 0), at(1, 2), at(2, 1)] {
        engine.update(c, Answer::miss()).unwrap();
        assert_eq!(engine.mode(), Mode::Hunting);
    }
    engine.update(at(1, 1), Answer::hit()).unwrap();
    assert!(matches!(engine.mode(), Mode::Targeting(_)));

    // corners have no room left for a destroyer, so every total is zero
    assert_eq!(engine.probability().highest(), None);
    let guess = engine.make_guess();
    assert_eq!(engine.mode(), Mode::Hunting);
    assert_eq!(guess, at(0, 0));
    assert!(engine.board().is_unexplored(guess));
}

#[test]
fn test_attempt_limit_zero_always_hunts() {
    let config = EngineConfig {
        attempt_limit: Some(0),
        ..EngineConfig::default()
    };
    let mut engine = TargetingEngine::with_config(&cruiser_world(), config).unwrap();
    engine.update(at(3, 3), Answer::hit()).unwrap();
    let guess = engine.make_guess();
    assert_eq!(engine.mode(), Mode::Hunting);
    assert_eq!(Some(guess), engine.probability().highest());
}

#[test]
fn test_targeting_never_leaves_board_or_repeats() {
    let world = World::new(Dimensions::new(4, 4), vec![CRUISER]);
    let mut engine = TargetingEngine::new(&world).unwrap();
    engine.update(at(3, 3), Answer::hit()).unwrap();
    for _ in 0..15 {
        if engine.board().first_unexplored().is_none() {
            break;
        }
        let guess = engine.make_guess();
        assert!(engine.board().in_bounds(guess));
        assert!(engine.board().is_unexplored(guess), "repeated {}", guess);
        engine.update(guess, Answer::miss()).unwrap();
    }
}

#[test]
fn test_update_rejects_bad_guesses() {
    let mut engine = TargetingEngine::new(&cruiser_world()).unwrap();
    assert_eq!(
        engine.update(at(8, 0), Answer::miss()),
        Err(EngineError::OutOfBounds(at(8, 0)))
    );
    engine.update(at(1, 1), Answer::miss()).unwrap();
    let before = engine.probability().clone();
    assert_eq!(
        engine.update(at(1, 1), Answer::hit()),
        Err(EngineError::AlreadyGuessed(at(1, 1)))
    );
    assert_eq!(engine.probability(), &before);
    assert_eq!(engine.mode(), Mode::Hunting);
}

#[test]
fn test_invalid_world_is_rejected() {
    let err = TargetingEngine::new(&World::new(Dimensions::new(0, 5), vec![CRUISER])).err();
    assert_eq!(err, Some(EngineError::InvalidDimensions { rows: 0, columns: 5 }));
    let err = TargetingEngine::new(&World::new(Dimensions::new(5, 5), vec![])).err();
    assert_eq!(err, Some(EngineError::EmptyFleet));
    let err =
        TargetingEngine::new(&World::new(Dimensions::new(5, 5), vec![ShipType::new("Raft", 0)]))
            .err();
    assert_eq!(err, Some(EngineError::InvalidShipLength));
}

#[test]
fn test_retain_policy_keeps_sunk_length() {
    let world = World::new(Dimensions::new(8, 8), vec![CRUISER, DESTROYER]);
    let mut engine = TargetingEngine::new(&world).unwrap();
    engine.update(at(3, 3), Answer::sunk(CRUISER)).unwrap();
    let lengths: Vec<usize> = engine.probability().lengths().collect();
    assert_eq!(lengths, vec![3, 2]);
}

#[test]
fn test_remove_policy_drops_sunk_length() {
    let world = World::new(Dimensions::new(8, 8), vec![CRUISER, DESTROYER]);
    let config = EngineConfig {
        sunk_policy: SunkPolicy::Remove,
        ..EngineConfig::default()
    };
    let mut engine = TargetingEngine::with_config(&world, config).unwrap();
    engine.update(at(3, 3), Answer::sunk(CRUISER)).unwrap();
    let lengths: Vec<usize> = engine.probability().lengths().collect();
    assert_eq!(lengths, vec![2]);

    // the cruiser is gone, so a second cruiser sinking is not tracked
    let err = engine.update(at(5, 5), Answer::sunk(CRUISER));
    assert_eq!(err, Err(EngineError::ShipNotInFleet(CRUISER)));
    assert!(engine.board().is_unexplored(at(5, 5)));

    engine.update(at(6, 6), Answer::sunk(DESTROYER)).unwrap();
    assert_eq!(engine.probability().lengths().count(), 0);
    assert_eq!(engine.probability().highest(), None);
    assert_eq!(engine.make_guess(), at(0, 0));
}
