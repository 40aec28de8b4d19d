//! Rules engine for the snake game
//!
//! Snake movement, collision classification and food placement, with no I/O
//! or rendering dependencies. `engine` is the tick-by-tick driver built on top.

pub mod action;
pub mod board;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use board::{BoardPolicy, FreeCells};
pub use config::GameConfig;
pub use engine::{GameEngine, GameState, StepResult};
pub use state::{BodySegment, Collision, Coordinate, Snake};
