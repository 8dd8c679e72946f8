use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use crate::config::{GameConfig, GridSize};
use crate::food;
use crate::input::{Direction, arbitrate};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Paused,
    Over,
}

/// Why a game reached [`GameStatus::Over`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndReason {
    WallCollision,
    SelfCollision,
    /// The snake covers every cell; this is the win condition.
    BoardFull,
}

/// Owned copy of everything the renderer needs, taken between ticks.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snapshot {
    pub snake: Vec<Position>,
    /// `None` only once the board is full.
    pub food: Option<Position>,
    pub score: u32,
    pub status: GameStatus,
    pub end_reason: Option<EndReason>,
    pub direction: Direction,
    pub tick_count: u64,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    snake: Snake,
    food: Option<Position>,
    score: u32,
    tick_count: u64,
    status: GameStatus,
    end_reason: Option<EndReason>,
    rng: StdRng,
}

impl GameState {
    /// Starts a game with food placed from an entropy-seeded RNG.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible sessions.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    /// Starts a game drawing food positions from `rng`.
    #[must_use]
    pub fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let snake = config.initial_snake();
        Self::from_snake(config, snake, None, rng)
    }

    /// Builds a running state from an explicit snake and food cell.
    ///
    /// A snake that already covers the whole board yields a finished
    /// [`EndReason::BoardFull`] state. Food that is missing, off the grid or
    /// under the snake is replaced by a freshly placed cell.
    #[must_use]
    pub fn from_snake(
        config: GameConfig,
        snake: Snake,
        food: Option<Position>,
        mut rng: StdRng,
    ) -> Self {
        let grid = config.grid();
        let board_full = snake.len() >= grid.total_cells();
        let food = if board_full {
            None
        } else {
            match food {
                Some(cell) if cell.is_within_bounds(grid) && !snake.occupies(cell) => Some(cell),
                other => {
                    debug!(food = ?other, "food off the board or under the snake, respawning");
                    food::spawn_position(&mut rng, grid, &snake)
                }
            }
        };

        Self {
            config,
            snake,
            food,
            score: 0,
            tick_count: 0,
            status: if board_full {
                GameStatus::Over
            } else {
                GameStatus::Running
            },
            end_reason: board_full.then_some(EndReason::BoardFull),
            rng,
        }
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// `requested` is the latest direction asked for since the previous
    /// tick. Nothing happens unless the game is running.
    pub fn tick(&mut self, requested: Option<Direction>) {
        if self.status != GameStatus::Running {
            return;
        }

        self.tick_count += 1;
        let direction = arbitrate(self.snake.direction(), requested);
        let next_head = self.snake.head().step(direction);
        trace!(tick = self.tick_count, ?direction, ?next_head, "tick");

        if !next_head.is_within_bounds(self.grid()) {
            self.finish(EndReason::WallCollision);
            return;
        }

        let growing = self.food == Some(next_head);
        if self.snake.collides_with(next_head, growing) {
            self.finish(EndReason::SelfCollision);
            return;
        }

        self.snake.advance(direction, growing);
        if !growing {
            return;
        }

        self.score = self.score.saturating_add(self.config.growth_reward);
        debug!(score = self.score, length = self.snake.len(), "food eaten");

        if self.snake.len() >= self.grid().total_cells() {
            self.food = None;
            self.finish(EndReason::BoardFull);
            return;
        }

        let grid = self.grid();
        self.food = food::spawn_position(&mut self.rng, grid, &self.snake);
        if self.food.is_none() {
            self.finish(EndReason::BoardFull);
            return;
        }
        debug!(food = ?self.food, "food respawned");
    }

    /// Switches between running and paused; finished games stay finished.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            GameStatus::Over => GameStatus::Over,
        };
    }

    /// Returns an owned view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake: self.snake.segments().copied().collect(),
            food: self.food,
            score: self.score,
            status: self.status,
            end_reason: self.end_reason,
            direction: self.snake.direction(),
            tick_count: self.tick_count,
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn food(&self) -> Option<Position> {
        self.food
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.config.grid()
    }

    fn finish(&mut self, reason: EndReason) {
        self.status = GameStatus::Over;
        self.end_reason = Some(reason);
        info!(?reason, score = self.score, length = self.snake.len(), "game over");
    }
}
