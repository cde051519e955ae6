mod calculator;
mod grid;

#[cfg(test)]
mod calculator_test;

pub use calculator::{compute_streak, compute_streak_stats, StreakStats};
pub use grid::{GridCell, HeatGrid};
