use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::GridSize;
use crate::snake::{Position, Snake};

/// Random guesses tried before falling back to enumerating free cells.
pub const RANDOM_ATTEMPTS: usize = 16;

/// Lists every cell not covered by the snake, in row-major order.
#[must_use]
pub fn free_cells(bounds: GridSize, snake: &Snake) -> Vec<Position> {
    let occupied: HashSet<Position> = snake.segments().copied().collect();
    let mut candidates = Vec::with_capacity(bounds.total_cells().saturating_sub(occupied.len()));

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position { x, y };
            if !occupied.contains(&position) {
                candidates.push(position);
            }
        }
    }

    candidates
}

/// Picks a free cell uniformly at random, or `None` when the board is full.
///
/// While at least half the board is free a few random guesses are tried
/// first; otherwise (and after the guesses run out) the free cells are
/// enumerated and one is drawn directly, so the call always terminates.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    let total = bounds.total_cells();
    if total == 0 {
        return None;
    }

    if snake.len().saturating_mul(2) <= total {
        for _ in 0..RANDOM_ATTEMPTS {
            let candidate = Position {
                x: rng.gen_range(0..i32::from(bounds.width)),
                y: rng.gen_range(0..i32::from(bounds.height)),
            };
            if !snake.occupies(candidate) {
                return Some(candidate);
            }
        }
    }

    free_cells(bounds, snake).choose(rng).copied()
}
