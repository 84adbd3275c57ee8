//! Model module - per-tick orchestration of the simulation
//!
//! Owns the queue, the in-motion list, and the field. An external driver
//! calls [`Model::update`] once per frame and [`Model::fling`] from input
//! events; everything resolves synchronously before the call returns.

use std::f32::consts::TAU;

use crate::core::{Block, BlockField, BlockQueue, GameSnapshot, MotionSnapshot};
use crate::types::{
    MotionState, Vec2, BLOCK_SIZE, DROP_DELAY, DROP_FLOOR_Y, DROP_GRAVITY, FIELD_ORIGIN_X,
    FLING_SPEED, QUEUE_POSITION_Y, SWING_AMPLITUDE, SWING_CENTER_X, SWING_FREQUENCY, WORLD_WIDTH,
};

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct Model {
    queue: BlockQueue,
    field: BlockField,
    in_motion: Vec<Block>,
    drop_accum: f32,
}

impl Model {
    /// Create a new simulation with the given RNG seed. The drop timer is
    /// primed so the first queue block releases on the first update
    pub fn new(seed: u64) -> Self {
        Self {
            queue: BlockQueue::new(seed),
            field: BlockField::new(),
            in_motion: Vec::new(),
            drop_accum: DROP_DELAY,
        }
    }

    pub fn queue(&self) -> &BlockQueue {
        &self.queue
    }

    pub fn field(&self) -> &BlockField {
        &self.field
    }

    /// Blocks currently animating outside queue and grid, insertion order
    pub fn blocks_in_motion(&self) -> &[Block] {
        &self.in_motion
    }

    /// Total cells cleared so far
    pub fn cleared(&self) -> usize {
        self.field.cleared()
    }

    /// Advance the simulation by `dt` seconds: release queue blocks on the
    /// drop timer, integrate every in-motion block, and hand flung blocks to
    /// the field for landing and match resolution
    pub fn update(&mut self, dt: f32) {
        self.drop_accum += dt;
        while self.drop_accum >= DROP_DELAY {
            self.drop_accum -= DROP_DELAY;
            self.drop_block();
        }

        // Reverse index traversal: removal during the walk never skips a
        // block and keeps insertion order intact for the fling scan
        for i in (0..self.in_motion.len()).rev() {
            match self.in_motion[i].state {
                MotionState::Dropping => self.update_dropping(i, dt),
                MotionState::Flinging => self.update_flinging(i, dt),
                state => {
                    debug_assert!(false, "in-motion block in state {state:?}");
                    self.in_motion.remove(i);
                }
            }
        }
    }

    /// Attempt to fling whichever dropping block contains the given point.
    /// The first hit in insertion order wins; no hit is a no-op
    pub fn fling(&mut self, x: f32, y: f32) {
        let Some(block) = self
            .in_motion
            .iter_mut()
            .find(|block| block.state == MotionState::Dropping && block.contains(x, y))
        else {
            return;
        };

        block.state = MotionState::Flinging;
        block.velocity = Vec2::new(FLING_SPEED, 0.0);
        self.field.clamp_to_row(block, y);
    }

    /// Release the front queue block into the drop region
    fn drop_block(&mut self) {
        let kind = self.queue.draw();
        let position = Vec2::new(SWING_CENTER_X, QUEUE_POSITION_Y - BLOCK_SIZE);
        self.in_motion
            .push(Block::new(kind, position, MotionState::Dropping));
    }

    /// Pendulum swing plus constant-speed fall; a block past the floor
    /// without a fling is a miss and leaves play
    fn update_dropping(&mut self, i: usize, dt: f32) {
        let block = &mut self.in_motion[i];

        if block.position.y < DROP_FLOOR_Y {
            block.state = MotionState::Retired;
            block.velocity = Vec2::ZERO;
            self.in_motion.remove(i);
            return;
        }

        block.swing_phase += SWING_FREQUENCY * dt;
        if block.swing_phase >= TAU {
            block.swing_phase -= TAU;
        }
        block.position.x = SWING_AMPLITUDE * block.swing_phase.sin() + SWING_CENTER_X;
        block.position.y -= DROP_GRAVITY * dt;
    }

    /// Constant horizontal motion toward the field; once inside its extent,
    /// bounce off a full row or land at the frontier. A block that exits the
    /// far side (no valid row) is discarded
    fn update_flinging(&mut self, i: usize, dt: f32) {
        let velocity_x = self.in_motion[i].velocity.x;
        self.in_motion[i].position.x += velocity_x * dt;
        let block = self.in_motion[i];

        if block.position.x >= FIELD_ORIGIN_X - BLOCK_SIZE {
            if block.row.is_some_and(|row| self.field.is_row_full(row)) {
                // Bounce: a full row never mutates the grid
                self.in_motion.remove(i);
                return;
            }
            if self.field.attempt_land(&block) {
                // Absorbed into the grid
                self.in_motion.remove(i);
                return;
            }
        }

        if block.position.x > WORLD_WIDTH {
            self.in_motion[i].state = MotionState::Retired;
            self.in_motion.remove(i);
        }
    }

    /// Fill a reusable snapshot with the current render-facing state
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.field.write_rows(&mut out.field);
        for (slot, kind) in out.queue.iter_mut().zip(self.queue.iter()) {
            *slot = kind;
        }
        out.in_motion.clear();
        out.in_motion
            .extend(self.in_motion.iter().copied().map(MotionSnapshot::from));
        out.cleared = self.field.cleared();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}
