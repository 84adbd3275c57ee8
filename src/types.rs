//! Core types shared across the simulation
//! This module contains pure data types and build-time configuration constants

/// Field dimensions (rows x columns)
pub const FIELD_WIDTH: usize = 6;
pub const FIELD_HEIGHT: usize = 12;
pub const FIELD_CELLS: usize = FIELD_WIDTH * FIELD_HEIGHT;

/// Side length of one block, in world units
pub const BLOCK_SIZE: f32 = 32.0;

/// World frame the simulation runs in (y-up, origin bottom-left)
pub const WORLD_WIDTH: f32 = 800.0;
pub const WORLD_HEIGHT: f32 = 480.0;

/// Width of the region on the left where queued blocks drop and swing
pub const DROP_REGION_WIDTH: f32 = WORLD_WIDTH / 3.0;

/// Where the queue strip sits, and where dropped blocks enter play
pub const QUEUE_POSITION_X: f32 = DROP_REGION_WIDTH / 2.0 - BLOCK_SIZE / 2.0;
pub const QUEUE_POSITION_Y: f32 = WORLD_HEIGHT - 16.0 - BLOCK_SIZE;

/// Field geometry: the entry edge faces the drop region; column 0 is the far
/// wall where the first block in a row comes to rest
pub const FIELD_ORIGIN_X: f32 = WORLD_WIDTH - FIELD_WIDTH as f32 * BLOCK_SIZE;
pub const FIELD_ORIGIN_Y: f32 = 16.0;

/// A dropping block below this y without a fling is a miss
pub const DROP_FLOOR_Y: f32 = FIELD_ORIGIN_Y - BLOCK_SIZE;

/// Timing and motion constants
pub const QUEUE_SIZE: usize = 6;
pub const DROP_DELAY: f32 = 1.25;
pub const DROP_GRAVITY: f32 = 64.0;
pub const FLING_SPEED: f32 = 512.0;
pub const SWING_FREQUENCY: f32 = 3.0;
pub const SWING_AMPLITUDE: f32 = DROP_REGION_WIDTH / 2.0 - BLOCK_SIZE * 2.0;
pub const SWING_CENTER_X: f32 = QUEUE_POSITION_X;

/// Minimum run length that clears
pub const MATCH_MIN: usize = 3;

/// Number of real colors; random generation never produces `Empty`
pub const NUM_COLORS: usize = 7;

/// Color category of a block. `Empty` marks an unoccupied field cell and is
/// a value in its own right, never an absence. Only the seven real colors
/// participate in matching; presentation color mapping lives outside the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockType {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Indigo,
    Violet,
    Empty,
}

impl BlockType {
    /// The seven colors, in generation order
    pub const COLORS: [Self; NUM_COLORS] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Indigo,
        Self::Violet,
    ];

    /// Draw a uniformly random color (never `Empty`)
    pub fn random(rng: &mut impl rand::Rng) -> Self {
        Self::COLORS[rng.random_range(0..NUM_COLORS)]
    }

    /// True for the seven real colors, false for `Empty`
    pub fn is_color(self) -> bool {
        self != Self::Empty
    }
}

/// Where a block is in its lifecycle. Membership is exclusive: a block lives
/// in the queue (`Queued`), the in-motion list (`Dropping`/`Flinging`), or a
/// field cell (`Landed`); `Retired` is the terminal state for discards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MotionState {
    Queued,
    Dropping,
    Flinging,
    Landed,
    Retired,
}

/// Minimal 2D vector for free-floating block positions and velocities
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
