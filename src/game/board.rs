//! Board policy: grid sizing, tick period, food placement and key mapping.

use rand::Rng;

use super::action::Direction;
use super::config::GameConfig;
use super::state::{Coordinate, Snake};

/// A non-empty list of cells the food may be placed on.
///
/// The only way to get one is through a constructor that refuses empty input,
/// so [`BoardPolicy::create_apple`] always has something to pick from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeCells {
    cells: Vec<Coordinate>,
}

impl FreeCells {
    /// Wrap `cells`, or `None` if there are none
    pub fn new(cells: Vec<Coordinate>) -> Option<Self> {
        if cells.is_empty() {
            None
        } else {
            Some(Self { cells })
        }
    }

    /// Every in-bounds cell not covered by the snake, row by row.
    /// `None` when the snake fills the whole board.
    pub fn on_board(grid_size: i32, snake: &Snake) -> Option<Self> {
        let cells = (0..grid_size)
            .flat_map(|y| (0..grid_size).map(move |x| Coordinate::new(x, y)))
            .filter(|&cell| !snake.occupies(cell))
            .collect();
        Self::new(cells)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn as_slice(&self) -> &[Coordinate] {
        &self.cells
    }
}

/// Fixed board rules handed to the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardPolicy {
    grid_size: i32,
    refresh_rate_ms: u64,
}

impl BoardPolicy {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            grid_size: config.grid_size,
            refresh_rate_ms: config.refresh_rate_ms,
        }
    }

    /// Side length of the square grid; exclusive upper bound on both axes
    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }

    /// Tick period for the driver. The engine itself never sleeps.
    pub fn refresh_rate_ms(&self) -> u64 {
        self.refresh_rate_ms
    }

    /// Uniform integer in `[ceil(min), ceil(max)]`, both ends inclusive.
    /// Bounds given in the wrong order are swapped.
    pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> i64 {
        let low = min.ceil() as i64;
        let high = max.ceil() as i64;
        if high < low {
            rng.gen_range(high..=low)
        } else {
            rng.gen_range(low..=high)
        }
    }

    /// Pick the next food location uniformly from `free_cells`.
    ///
    /// The caller must exclude cells the snake occupies; this does not re-check.
    pub fn create_apple<R: Rng + ?Sized>(&self, free_cells: &FreeCells, rng: &mut R) -> Coordinate {
        let last = (free_cells.len() - 1) as f64;
        let index = Self::random_int(rng, 0.0, last) as usize;
        free_cells.as_slice()[index]
    }

    /// Map a key identifier (`KeyboardEvent.code` naming) to a direction.
    /// Unrecognised keys yield `None`.
    pub fn direction_for_key(code: &str) -> Option<Direction> {
        match code {
            "KeyW" | "ArrowUp" => Some(Direction::Up),
            "KeyA" | "ArrowLeft" => Some(Direction::Left),
            "KeyS" | "ArrowDown" => Some(Direction::Down),
            "KeyD" | "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }
}

impl Default for BoardPolicy {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
