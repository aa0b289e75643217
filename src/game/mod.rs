mod direction;
mod food;
mod snake;
pub(crate) use self::direction::Direction;
use self::food::spawn_food;
use self::snake::Snake;
use crate::consts;
use rand::Rng;
use serde::Deserialize;
use thiserror::Error;

/// A point in the arena, measured in arena units from the top-left corner
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Position {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Position {
    pub(crate) const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }
}

/// Dimensions of the playing field.
///
/// `block_size` is the size of the grid that food is aligned to and that
/// segments are drawn at, while `step` is how far the snake moves on each
/// tick.  The two are deliberately independent.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "RawArena")]
pub(crate) struct Arena {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) block_size: i32,
    pub(crate) step: i32,
}

impl Arena {
    /// Is `pos` inside the arena?  The far edges are exclusive.
    pub(crate) fn contains(self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    /// Check that food can be placed in the arena, that the snake moves by a
    /// positive distance no longer than the arena's shorter side, and that
    /// the initial snake fits inside it
    pub(crate) fn validate(self) -> Result<Arena, ArenaError> {
        if self.block_size <= 0 {
            return Err(ArenaError::BlockSize(self.block_size));
        }
        if self.step <= 0 || self.step > self.width.min(self.height) {
            return Err(ArenaError::Step(self.step));
        }
        if self.width / self.block_size < 2 || self.height / self.block_size < 2 {
            return Err(ArenaError::TooSmall {
                width: self.width,
                height: self.height,
                block_size: self.block_size,
            });
        }
        if let Some(pos) = Snake::initial(self).positions().find(|&p| !self.contains(p)) {
            return Err(ArenaError::SnakeOutside {
                x: pos.x,
                y: pos.y,
            });
        }
        Ok(self)
    }
}

impl Default for Arena {
    fn default() -> Arena {
        Arena {
            width: consts::ARENA_WIDTH,
            height: consts::ARENA_HEIGHT,
            block_size: consts::BLOCK_SIZE,
            step: consts::STEP,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
struct RawArena {
    width: i32,
    height: i32,
    block_size: i32,
    step: i32,
}

impl Default for RawArena {
    fn default() -> RawArena {
        let Arena {
            width,
            height,
            block_size,
            step,
        } = Arena::default();
        RawArena {
            width,
            height,
            block_size,
            step,
        }
    }
}

impl TryFrom<RawArena> for Arena {
    type Error = ArenaError;

    fn try_from(value: RawArena) -> Result<Arena, ArenaError> {
        Arena {
            width: value.width,
            height: value.height,
            block_size: value.block_size,
            step: value.step,
        }
        .validate()
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum ArenaError {
    #[error("block size must be positive, got {0}")]
    BlockSize(i32),
    #[error("step size must be positive and no larger than the arena, got {0}")]
    Step(i32),
    #[error("arena of {width}x{height} must be at least two blocks of {block_size} wide and tall")]
    TooSmall {
        width: i32,
        height: i32,
        block_size: i32,
    },
    #[error("arena does not contain the snake's starting position ({x}, {y})")]
    SnakeOutside { x: i32, y: i32 },
}

/// Outcome of a single tick of the game
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum StepResult {
    /// The snake is still alive; the score so far is attached.
    Continue(u32),
    /// The snake hit a wall or itself; the final score is attached.
    Collided(u32),
}

impl StepResult {
    pub(crate) fn score(self) -> u32 {
        match self {
            StepResult::Continue(score) | StepResult::Collided(score) => score,
        }
    }
}

/// The state of a single playthrough: the snake, the food, and the score
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct GameState<R = rand::rngs::ThreadRng> {
    rng: R,
    arena: Arena,
    snake: Snake,
    food: Position,
    score: u32,
}

impl GameState<rand::rngs::ThreadRng> {
    pub(crate) fn new(arena: Arena) -> Self {
        GameState::new_with_rng(arena, rand::rng())
    }
}

impl<R: Rng> GameState<R> {
    pub(crate) fn new_with_rng(arena: Arena, mut rng: R) -> GameState<R> {
        let food = spawn_food(&mut rng, arena);
        GameState {
            rng,
            arena,
            snake: Snake::initial(arena),
            food,
            score: 0,
        }
    }

    /// Start over with a fresh snake, fresh food, and a score of zero
    pub(crate) fn reset(&mut self) {
        self.snake = Snake::initial(self.arena);
        self.food = spawn_food(&mut self.rng, self.arena);
        self.score = 0;
    }

    /// Advance the game by one tick, first turning the snake towards
    /// `pending` if that isn't a reversal.
    pub(crate) fn step(&mut self, pending: Direction) -> StepResult {
        self.snake.turn(pending);
        let head = self.snake.advance(self.arena.step);
        let ate = head == self.food;
        if ate {
            self.score += 1;
        } else {
            self.snake.shrink();
        }
        if ate {
            self.food = spawn_food(&mut self.rng, self.arena);
        }
        if !self.arena.contains(head) || self.snake.bites_itself() {
            StepResult::Collided(self.score)
        } else {
            StepResult::Continue(self.score)
        }
    }
}

impl<R> GameState<R> {
    pub(crate) fn arena(&self) -> Arena {
        self.arena
    }

    pub(crate) fn head(&self) -> Position {
        self.snake.head()
    }

    pub(crate) fn direction(&self) -> Direction {
        self.snake.direction
    }

    /// Iterate over the positions of the snake's segments, head first
    pub(crate) fn snake(&self) -> impl Iterator<Item = Position> + '_ {
        self.snake.positions()
    }

    pub(crate) fn snake_len(&self) -> usize {
        self.snake.len()
    }

    pub(crate) fn food(&self) -> Position {
        self.food
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }
}
