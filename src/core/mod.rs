//! Core module - pure simulation logic with no I/O dependencies
//!
//! This module contains the block entity, the self-refilling queue, the grid
//! engine (landing, matching, cascade), and the per-tick orchestrator.

pub mod block;
pub mod field;
pub mod model;
pub mod queue;
pub mod snapshot;

// Re-export commonly used types
pub use block::Block;
pub use field::BlockField;
pub use model::Model;
pub use queue::BlockQueue;
pub use snapshot::{GameSnapshot, MotionSnapshot};
