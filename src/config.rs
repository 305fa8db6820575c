use std::time::Duration;

use thiserror::Error;

use crate::prelude::{BOARD_SIZE, TICKS_PER_SECOND};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid must be at least 2x2 cells, got {0}x{0}")]
    GridTooSmall(usize),

    #[error("tick rate must be at least one tick per second")]
    ZeroTickRate,
}

/// Simulation parameters, fixed once the simulation is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeConfig {
    /// cells per row and per column
    grid_size: usize,
    ticks_per_second: u32,
    /// seed for the initial coin flips, random when `None`
    seed: Option<u64>,
}

impl LifeConfig {
    pub fn new(grid_size: usize, ticks_per_second: u32) -> Result<Self, ConfigError> {
        if grid_size < 2 {
            return Err(ConfigError::GridTooSmall(grid_size));
        }
        if ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(Self {
            grid_size,
            ticks_per_second,
            seed: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[inline]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    #[inline]
    pub fn ticks_per_second(&self) -> u32 {
        self.ticks_per_second
    }

    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// time that has to pass between two generations
    #[inline]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second
    }
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            grid_size: BOARD_SIZE,
            ticks_per_second: TICKS_PER_SECOND,
            seed: None,
        }
    }
}
