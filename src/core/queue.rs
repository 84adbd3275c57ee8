//! Queue module - fixed-length, self-refilling block queue
//!
//! The queue is always exactly `QUEUE_SIZE` long: drawing the front entry
//! appends a fresh random color at the tail in the same call. Refill uses a
//! seeded ChaCha8 stream so a given seed replays the same block sequence.

use std::collections::VecDeque;

use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

use crate::types::{BlockType, QUEUE_SIZE};

/// Ordered sequence of upcoming block colors; the front drops next
#[derive(Debug, Clone)]
pub struct BlockQueue {
    blocks: VecDeque<BlockType>,
    rng: ChaCha8Rng,
}

impl BlockQueue {
    /// Create a full queue from the given seed
    pub fn new(seed: u64) -> Self {
        let mut queue = Self {
            blocks: VecDeque::with_capacity(QUEUE_SIZE),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        queue.refill();
        queue
    }

    /// Peek at the next block without removing it
    pub fn peek(&self) -> Option<BlockType> {
        self.blocks.front().copied()
    }

    /// Remove and return the front entry, refilling the tail so the queue
    /// stays at `QUEUE_SIZE`
    pub fn draw(&mut self) -> BlockType {
        let next = self
            .blocks
            .pop_front()
            .unwrap_or_else(|| BlockType::random(&mut self.rng));
        self.refill();
        next
    }

    fn refill(&mut self) {
        while self.blocks.len() < QUEUE_SIZE {
            self.blocks.push_back(BlockType::random(&mut self.rng));
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Ordered read-only view, front first
    pub fn iter(&self) -> impl Iterator<Item = BlockType> + '_ {
        self.blocks.iter().copied()
    }
}

impl Default for BlockQueue {
    fn default() -> Self {
        Self::new(1)
    }
}
