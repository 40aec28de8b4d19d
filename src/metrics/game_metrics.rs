use std::time::{Duration, Instant};

use crate::game::{Collision, StepResult};

/// How the last game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub score: u32,
    pub collision: Option<Collision>,
    pub board_full: bool,
}

pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
    pub last_outcome: Option<GameOutcome>,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            last_outcome: None,
        }
    }

    /// Refresh the clock; frozen once the game is over
    pub fn update(&mut self) {
        if self.last_outcome.is_none() {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.last_outcome = None;
    }

    pub fn on_game_over(&mut self, final_score: u32, result: &StepResult) {
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
        self.last_outcome = Some(GameOutcome {
            score: final_score,
            collision: result.collision,
            board_full: result.board_full,
        });
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
