//! Grid Snake - rules engine and terminal frontend for a grid-based snake game
//!
//! This library provides:
//! - Core rules: snake movement, collisions, food placement (game module)
//! - Key event mapping (input module)
//! - TUI rendering (render module)
//! - Session metrics (metrics module)
//! - The interactive terminal loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
