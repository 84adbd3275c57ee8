//! Snapshot module - read-only render-facing state
//!
//! A renderer keeps one [`GameSnapshot`] alive and refills it each frame via
//! `Model::snapshot_into`, so steady-state drawing does not allocate.

use crate::core::Block;
use crate::types::{BlockType, MotionState, FIELD_HEIGHT, FIELD_WIDTH, QUEUE_SIZE};

/// One in-flight block as a renderer sees it
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionSnapshot {
    pub kind: BlockType,
    pub state: MotionState,
    pub x: f32,
    pub y: f32,
}

impl From<Block> for MotionSnapshot {
    fn from(block: Block) -> Self {
        Self {
            kind: block.kind,
            state: block.state,
            x: block.position.x,
            y: block.position.y,
        }
    }
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    /// Grid cells, row-major; row 0 is the bottom row, column 0 the far wall
    pub field: [[BlockType; FIELD_WIDTH]; FIELD_HEIGHT],
    /// Upcoming blocks, front (next to drop) first
    pub queue: [BlockType; QUEUE_SIZE],
    /// Blocks currently dropping or flinging
    pub in_motion: Vec<MotionSnapshot>,
    /// Total cells cleared so far
    pub cleared: usize,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.field = [[BlockType::Empty; FIELD_WIDTH]; FIELD_HEIGHT];
        self.queue = [BlockType::Empty; QUEUE_SIZE];
        self.in_motion.clear();
        self.cleared = 0;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            field: [[BlockType::Empty; FIELD_WIDTH]; FIELD_HEIGHT],
            queue: [BlockType::Empty; QUEUE_SIZE],
            in_motion: Vec::new(),
            cleared: 0,
        }
    }
}
