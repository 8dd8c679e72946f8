use std::collections::HashSet;

use grid_snake::config::GameConfig;
use grid_snake::game::{GameState, GameStatus, Snapshot};
use grid_snake::input::Direction;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

/// Mostly steers towards the food so games actually grow, with random noise
/// (including reversal requests) mixed in.
fn choose_request(rng: &mut StdRng, snapshot: &Snapshot) -> Option<Direction> {
    let roll = rng.gen_range(0..10);
    if roll < 2 {
        return None;
    }
    if roll < 4 {
        return Some(DIRECTIONS[rng.gen_range(0..DIRECTIONS.len())]);
    }

    let head = snapshot.snake[0];
    let food = snapshot.food?;
    Some(if food.x > head.x {
        Direction::Right
    } else if food.x < head.x {
        Direction::Left
    } else if food.y > head.y {
        Direction::Down
    } else {
        Direction::Up
    })
}

fn assert_running_invariants(snapshot: &Snapshot, config: &GameConfig) {
    let grid = config.grid();
    let unique: HashSet<_> = snapshot.snake.iter().collect();
    assert_eq!(unique.len(), snapshot.snake.len(), "snake overlaps itself");
    assert!(snapshot.snake.iter().all(|cell| cell.is_within_bounds(grid)));
    assert!(
        snapshot
            .snake
            .windows(2)
            .all(|pair| pair[0].is_adjacent_to(pair[1]))
    );

    let food = snapshot.food.expect("running game has food");
    assert!(food.is_within_bounds(grid));
    assert!(!snapshot.snake.contains(&food), "food spawned on the snake");
}

#[test]
fn random_play_preserves_invariants_and_laws() {
    let config = GameConfig {
        width: 8,
        height: 6,
        growth_reward: 3,
        ..GameConfig::default()
    };
    let mut grown = 0;

    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::new_with_seed(config.clone(), seed);
        let mut before = state.snapshot();

        for _ in 0..400 {
            assert_running_invariants(&before, &config);

            let requested = choose_request(&mut rng, &before);
            state.tick(requested);
            let after = state.snapshot();

            assert_ne!(after.direction, before.direction.opposite());

            if after.status != GameStatus::Running {
                assert_eq!(after.status, GameStatus::Over);
                assert!(after.end_reason.is_some());
                state.tick(requested);
                assert_eq!(state.snapshot(), after, "tick after game over changed state");
                break;
            }

            if before.food == Some(after.snake[0]) {
                grown += 1;
                assert_eq!(after.snake.len(), before.snake.len() + 1);
                assert_eq!(after.score, before.score + config.growth_reward);
            } else {
                assert_eq!(after.snake.len(), before.snake.len());
                assert_eq!(after.score, before.score);
                assert_eq!(after.food, before.food);
            }

            before = after;
        }
    }

    assert!(grown > 0, "no game ever ate food");
}
