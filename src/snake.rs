use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns the neighbouring position one step towards `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns true when `other` differs by exactly one on a single axis.
    #[must_use]
    pub fn is_adjacent_to(self, other: Self) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

/// Snake body (front is head) and the direction applied on the last tick.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
}

impl Snake {
    /// Creates a straight snake of `length` cells with its head at `head`,
    /// the body trailing away from `direction`.
    #[must_use]
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let behind = direction.opposite();
        let mut body = VecDeque::with_capacity(length.max(1));
        let mut segment = head;
        body.push_back(segment);
        for _ in 1..length {
            segment = segment.step(behind);
            body.push_back(segment);
        }

        Self { body, direction }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            direction,
        }
    }

    /// Returns true when moving the head onto `next_head` hits the body.
    ///
    /// The tail is left out of the check unless the snake is growing, since
    /// it vacates its cell on the same move.
    #[must_use]
    pub fn collides_with(&self, next_head: Position, growing: bool) -> bool {
        let checked = if growing {
            self.body.len()
        } else {
            self.body.len() - 1
        };

        self.body
            .iter()
            .take(checked)
            .any(|segment| *segment == next_head)
    }

    /// Moves one cell towards `direction`, keeping the tail when `growing`.
    pub fn advance(&mut self, direction: Direction, growing: bool) {
        let next_head = self.head().step(direction);
        self.direction = direction;

        self.body.push_front(next_head);
        if !growing {
            let _ = self.body.pop_back();
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the direction applied on the last move.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;

    use super::{Position, Snake};

    fn line(cells: &[(i32, i32)]) -> Vec<Position> {
        cells.iter().map(|&(x, y)| Position { x, y }).collect()
    }

    #[test]
    fn bounds_check_covers_all_edges() {
        let bounds = GridSize {
            width: 5,
            height: 4,
        };

        assert!(Position { x: 0, y: 0 }.is_within_bounds(bounds));
        assert!(Position { x: 4, y: 3 }.is_within_bounds(bounds));
        assert!(!Position { x: -1, y: 2 }.is_within_bounds(bounds));
        assert!(!Position { x: 5, y: 2 }.is_within_bounds(bounds));
        assert!(!Position { x: 2, y: 4 }.is_within_bounds(bounds));
    }

    #[test]
    fn new_snake_is_straight_and_adjacent() {
        let snake = Snake::new(Position { x: 2, y: 2 }, Direction::Down, 3);
        let segments: Vec<Position> = snake.segments().copied().collect();

        assert_eq!(segments, line(&[(2, 2), (2, 1), (2, 0)]));
        assert!(
            segments
                .windows(2)
                .all(|pair| pair[0].is_adjacent_to(pair[1]))
        );
        assert_eq!(snake.tail(), Position { x: 2, y: 0 });
    }

    #[test]
    fn zero_length_still_has_a_head() {
        let snake = Snake::new(Position { x: 1, y: 1 }, Direction::Left, 0);
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn snake_moves_one_cell_per_tick() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right, 2);

        snake.advance(Direction::Right, false);

        assert_eq!(snake.head(), Position { x: 6, y: 5 });
        assert_eq!(snake.tail(), Position { x: 5, y: 5 });
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn snake_growth_keeps_previous_tail() {
        let mut snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right, 2);

        snake.advance(Direction::Up, true);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position { x: 5, y: 4 });
        assert_eq!(snake.tail(), Position { x: 4, y: 5 });
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn moving_onto_vacating_tail_is_not_a_collision() {
        // 2x2 loop: head (0,0), tail (0,1) directly below the head.
        let snake = Snake::from_segments(
            line(&[(0, 0), (1, 0), (1, 1), (0, 1)]),
            Direction::Left,
        );
        let next = Position { x: 0, y: 1 };

        assert!(!snake.collides_with(next, false));
        assert!(snake.collides_with(next, true));
    }

    #[test]
    fn moving_into_neck_is_a_collision() {
        let snake = Snake::new(Position { x: 3, y: 3 }, Direction::Right, 3);

        assert!(snake.collides_with(Position { x: 2, y: 3 }, false));
        assert!(!snake.collides_with(Position { x: 3, y: 2 }, false));
    }
}
