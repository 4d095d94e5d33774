use std::collections::HashSet;

use grid_snake::game::{LossCause, Outcome, Universe};
use grid_snake::grid::{Cell, Grid, GridError};
use grid_snake::input::Direction;
use grid_snake::snake::Snake;

fn universe_with(
    rows: u16,
    cols: u16,
    body: Vec<Cell>,
    direction: Direction,
    food: Option<Cell>,
) -> Universe {
    let grid = Grid::new(rows, cols).expect("valid grid");
    let snake = Snake::from_segments(body, direction).expect("non-empty body");
    Universe::from_parts(grid, snake, food, 17).expect("consistent state")
}

fn body_cells(universe: &Universe) -> HashSet<Cell> {
    universe
        .snake_to_coordinates()
        .chunks_exact(2)
        .map(|pair| Cell::new(pair[0], pair[1]))
        .collect()
}

#[test]
fn creation_succeeds_for_every_small_grid() {
    for rows in 1..=6 {
        for cols in 1..=6 {
            for seed in 0..4 {
                let universe = Universe::new_with_seed(rows, cols, seed).expect("valid grid");

                assert_eq!(universe.rows(), rows);
                assert_eq!(universe.cols(), cols);
                assert!(universe.snake_length() >= 1);
                assert!(universe.validate().is_ok());
                if let Some(food) = universe.food() {
                    assert!(!body_cells(&universe).contains(&food));
                }
            }
        }
    }
}

#[test]
fn zero_sized_grid_is_rejected() {
    assert_eq!(
        Universe::new(0, 10).err(),
        Some(GridError::InvalidDimensions { rows: 0, cols: 10 })
    );
}

#[test]
fn reversal_with_neck_keeps_direction() {
    let mut universe = universe_with(
        5,
        5,
        vec![Cell::new(2, 2), Cell::new(2, 1)],
        Direction::Right,
        Some(Cell::new(0, 0)),
    );

    universe.buffer_direction(Direction::Left);
    assert_eq!(universe.tick(), Outcome::Continue);

    assert_eq!(universe.direction(), Direction::Right);
    assert_eq!(universe.snake().head(), Cell::new(2, 3));
}

#[test]
fn single_cell_snake_may_reverse() {
    let mut universe = universe_with(
        5,
        5,
        vec![Cell::new(2, 2)],
        Direction::Right,
        Some(Cell::new(0, 0)),
    );

    universe.buffer_direction(Direction::Left);
    universe.tick();

    assert_eq!(universe.direction(), Direction::Left);
    assert_eq!(universe.snake().head(), Cell::new(2, 1));
}

#[test]
fn eating_grows_by_one_and_moves_food_off_the_snake() {
    let mut universe = universe_with(
        3,
        3,
        vec![Cell::new(1, 1)],
        Direction::Right,
        Some(Cell::new(1, 2)),
    );

    assert_eq!(universe.tick(), Outcome::Continue);

    assert_eq!(universe.snake_length(), 2);
    assert_eq!(universe.snake_to_coordinates(), vec![1, 2, 1, 1]);
    let food = universe.food_to_coordinates();
    assert_eq!(food.len(), 2);
    let food = Cell::new(food[0], food[1]);
    assert!(Grid::new(3, 3).expect("valid grid").contains(food));
    assert!(!body_cells(&universe).contains(&food));
}

#[test]
fn boundary_loss_is_absorbing() {
    let mut universe = universe_with(
        3,
        3,
        vec![Cell::new(0, 1), Cell::new(1, 1)],
        Direction::Up,
        Some(Cell::new(2, 2)),
    );

    assert_eq!(universe.tick(), Outcome::Loss);
    assert_eq!(universe.loss_cause(), Some(LossCause::WallCollision));

    let frozen = universe.snapshot();
    universe.buffer_direction(Direction::Right);
    universe.toggle_pause();
    for _ in 0..5 {
        assert_eq!(universe.tick(), Outcome::Loss);
    }
    assert_eq!(universe.snapshot(), frozen);
}

#[test]
fn self_collision_is_a_loss() {
    let mut universe = universe_with(
        4,
        4,
        vec![
            Cell::new(1, 1),
            Cell::new(1, 2),
            Cell::new(2, 2),
            Cell::new(2, 1),
            Cell::new(2, 0),
        ],
        Direction::Left,
        Some(Cell::new(3, 3)),
    );

    universe.buffer_direction(Direction::Down);

    assert_eq!(universe.tick(), Outcome::Loss);
    assert_eq!(universe.loss_cause(), Some(LossCause::SelfCollision));
    assert_eq!(universe.snake_length(), 5);
}

#[test]
fn eating_the_last_free_cell_wins() {
    // Serpentine over a 2x3 grid with (1,0) left free.
    let mut universe = universe_with(
        2,
        3,
        vec![
            Cell::new(1, 1),
            Cell::new(1, 2),
            Cell::new(0, 2),
            Cell::new(0, 1),
            Cell::new(0, 0),
        ],
        Direction::Left,
        Some(Cell::new(1, 0)),
    );

    assert_eq!(universe.tick(), Outcome::Win);
    assert_eq!(universe.snake_length(), 6);
    assert_eq!(universe.food(), None);
    assert!(universe.food_to_coordinates().is_empty());
    assert!(universe.validate().is_ok());
    assert_eq!(universe.tick(), Outcome::Win);
    assert_eq!(universe.snake_length(), 6);
}

#[test]
fn pause_suspends_and_resumes_transitions() {
    let mut universe = Universe::new_with_seed(8, 8, 21).expect("valid grid");
    let start = universe.snapshot();

    universe.toggle_pause();
    assert!(universe.is_paused());
    assert_eq!(universe.tick(), Outcome::Continue);
    assert_eq!(universe.snapshot().snake, start.snake);
    assert_eq!(universe.tick_count(), 0);

    universe.toggle_pause();
    universe.tick();
    assert_eq!(universe.tick_count(), 1);
    assert_ne!(universe.snapshot().snake, start.snake);
}

#[test]
fn long_random_walks_never_break_invariants() {
    for seed in 0..20 {
        let mut universe = Universe::new_with_seed(7, 5, seed).expect("valid grid");
        for step in 0..200_u64 {
            let direction = Direction::ALL[((seed + step * 7) % 4) as usize];
            universe.buffer_direction(direction);
            let outcome = universe.tick();
            assert!(universe.validate().is_ok());
            if outcome.is_terminal() {
                break;
            }
        }
    }
}
