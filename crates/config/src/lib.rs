//! Shared configuration for Scrawl
//!
//! This crate provides the single source of truth for the capture
//! surface dimensions and replay pacing defaults, shared by the core
//! library and any embedding application.

use serde::{Deserialize, Serialize};

/// Default capture surface width in pixels
pub const DEFAULT_WIDTH: u32 = 500;

/// Default capture surface height in pixels
pub const DEFAULT_HEIGHT: u32 = 250;

/// Decode steps per batch in batched replay
pub const DEFAULT_CHUNK_STEPS: usize = 750;

/// Default milliseconds between paced replay steps
pub const DEFAULT_HAND_DRAW_INTERVAL_MS: u64 = 10;

/// Capture surface configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl CanvasConfig {
    /// Create a canvas config with the given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total pixel count of the surface
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether a point lies on the surface
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height
    }
}

/// Replay pacing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// Decode steps per batch before a batched replay yields
    pub chunk_steps: usize,
    /// Milliseconds between steps of a paced replay
    pub hand_draw_interval_ms: u64,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            chunk_steps: DEFAULT_CHUNK_STEPS,
            hand_draw_interval_ms: DEFAULT_HAND_DRAW_INTERVAL_MS,
        }
    }
}
