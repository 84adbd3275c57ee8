//! Block module - the single in-flight block entity
//!
//! A `Block` only exists as an owned value while it is animating (dropping or
//! flinging). Queued blocks are plain `BlockType`s and landed blocks are
//! absorbed into the field as cell values, so this struct carries exactly the
//! state motion integration needs.

use crate::types::{BlockType, MotionState, Vec2, BLOCK_SIZE};

/// A colored block in motion between the queue and the field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub kind: BlockType,
    pub state: MotionState,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Target field row, resolved when the block is flung
    pub row: Option<usize>,
    /// Pendulum phase accumulator, wraps at 2π
    pub swing_phase: f32,
}

impl Block {
    pub fn new(kind: BlockType, position: Vec2, state: MotionState) -> Self {
        Self {
            kind,
            state,
            position,
            velocity: Vec2::ZERO,
            row: None,
            swing_phase: 0.0,
        }
    }

    /// Whether the block's bounding square contains a world-space point
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.position.x
            && x <= self.position.x + BLOCK_SIZE
            && y >= self.position.y
            && y <= self.position.y + BLOCK_SIZE
    }
}
