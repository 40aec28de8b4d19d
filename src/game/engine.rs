use super::{
    action::{Action, Direction},
    board::{BoardPolicy, FreeCells},
    config::GameConfig,
    state::{BodySegment, Collision, Coordinate, Snake},
};
use anyhow::{Context, Result};
use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the game has ended
    pub terminated: bool,
    /// What the head ran into this step, if anything
    pub collision: Option<Collision>,
    /// The snake ate the last apple and no free cell is left for another
    pub board_full: bool,
}

impl StepResult {
    fn running(collision: Option<Collision>) -> Self {
        Self {
            terminated: false,
            collision,
            board_full: false,
        }
    }

    fn ended(collision: Option<Collision>, board_full: bool) -> Self {
        Self {
            terminated: true,
            collision,
            board_full,
        }
    }

    pub fn ate_apple(&self) -> bool {
        self.collision == Some(Collision::Apple)
    }
}

/// Complete game session state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Coordinate,
    pub grid_size: i32,
    /// Last accepted direction; reused when a tick has no input
    pub direction: Direction,
    pub score: u32,
    pub steps: u32,
    pub is_alive: bool,
    apple_tag: String,
}

impl GameState {
    pub fn new(snake: Snake, food: Coordinate, grid_size: i32, apple_tag: impl Into<String>) -> Self {
        Self {
            snake,
            food,
            grid_size,
            direction: Direction::Right,
            score: 0,
            steps: 0,
            is_alive: true,
            apple_tag: apple_tag.into(),
        }
    }

    /// The food as a displayable segment
    pub fn apple(&self) -> BodySegment {
        BodySegment::new(self.food, self.apple_tag.as_str())
    }
}

/// Reference driver: runs one tick at a time over a [`GameState`].
///
/// Generic over its random source so tests can seed food placement.
pub struct GameEngine<R = StdRng> {
    config: GameConfig,
    policy: BoardPolicy,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Create a new game engine with an entropy-seeded random source
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: Rng> GameEngine<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let policy = BoardPolicy::new(&config);
        Self {
            config,
            policy,
            rng,
        }
    }

    pub fn policy(&self) -> &BoardPolicy {
        &self.policy
    }

    /// Start a new game: fresh snake, first apple on a free cell
    pub fn reset(&mut self) -> Result<GameState> {
        self.config.validate()?;

        let snake = Snake::starting(
            self.config.start_head,
            &self.config.head_tag,
            &self.config.body_tag,
        );
        let free = FreeCells::on_board(self.policy.grid_size(), &snake)
            .context("No free cell left for the first apple")?;
        let food = self.policy.create_apple(&free, &mut self.rng);

        info!(
            "New game on a {0}x{0} grid, food at ({1}, {2})",
            self.policy.grid_size(),
            food.x,
            food.y
        );

        Ok(GameState::new(
            snake,
            food,
            self.policy.grid_size(),
            self.config.apple_tag.as_str(),
        ))
    }

    /// Execute one tick: steer, move, classify the head's cell, react
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if !state.is_alive {
            return StepResult::ended(None, false);
        }

        if let Action::Move(direction) = action {
            if self.config.block_reversal && state.direction.is_opposite(direction) {
                debug!("Ignoring reversal from {:?} to {:?}", state.direction, direction);
            } else {
                state.direction = direction;
            }
        }

        state.snake.update(state.direction);
        state.steps += 1;

        let collision = state.snake.detect_collision(state.grid_size, state.food);
        match collision {
            Some(Collision::Apple) => {
                state.snake.consume_apple();
                state.score += 1;

                match FreeCells::on_board(state.grid_size, &state.snake) {
                    Some(free) => {
                        state.food = self.policy.create_apple(&free, &mut self.rng);
                        debug!(
                            "Apple eaten at step {}, score {}, next food at ({}, {})",
                            state.steps, state.score, state.food.x, state.food.y
                        );
                        StepResult::running(collision)
                    }
                    None => {
                        info!("Board full after {} steps, score {}", state.steps, state.score);
                        state.is_alive = false;
                        StepResult::ended(collision, true)
                    }
                }
            }
            Some(fatal @ (Collision::Wall | Collision::Snake)) => {
                let head = state.snake.head().coordinate;
                info!(
                    "Game over: {:?} collision at ({}, {}) after {} steps, score {}",
                    fatal, head.x, head.y, state.steps, state.score
                );
                state.is_alive = false;
                StepResult::ended(collision, false)
            }
            None => StepResult::running(None),
        }
    }
}
