use grid_snake::game::{Outcome, Universe};
use grid_snake::grid::{Cell, Grid};
use grid_snake::input::Direction;
use grid_snake::snake::Snake;

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let grid = Grid::new(4, 6).expect("valid grid");
    let snake = Snake::new(Cell::new(1, 1), Direction::Right);
    let mut universe =
        Universe::from_parts(grid, snake, Some(Cell::new(1, 2)), 42).expect("consistent state");

    assert_eq!(universe.tick(), Outcome::Continue);
    assert_eq!(universe.snake_length(), 2);
    assert_eq!(universe.snake().head(), Cell::new(1, 2));

    universe.buffer_direction(Direction::Up);
    assert_eq!(universe.tick(), Outcome::Continue);
    assert_eq!(universe.snake().head(), Cell::new(0, 2));

    assert_eq!(universe.tick(), Outcome::Loss);
    assert_eq!(universe.tick_count(), 3);
}

#[test]
fn equal_seeds_replay_identically() {
    let script = [
        Some(Direction::Up),
        None,
        Some(Direction::Left),
        None,
        None,
        Some(Direction::Down),
        None,
        None,
        None,
        Some(Direction::Right),
    ];

    let run = |seed| {
        let mut universe = Universe::new_with_seed(12, 9, seed).expect("valid grid");
        let mut frames = vec![universe.snapshot()];
        for step in script {
            if let Some(direction) = step {
                universe.buffer_direction(direction);
            }
            universe.tick();
            frames.push(universe.snapshot());
        }
        frames
    };

    assert_eq!(run(7), run(7));
}

#[test]
fn last_buffered_direction_before_tick_wins() {
    let mut universe = Universe::new_with_seed(9, 9, 3).expect("valid grid");

    universe.buffer_direction(Direction::Up);
    universe.buffer_direction(Direction::Left);
    universe.buffer_direction(Direction::Down);
    universe.tick();

    assert_eq!(universe.direction(), Direction::Down);
    assert_eq!(universe.snake().head(), Cell::new(5, 4));
    assert_eq!(universe.pending_direction(), None);
}
