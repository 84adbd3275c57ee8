//! Fling-blocks simulation core.
//!
//! A queue feeds colored blocks that drop under gravity while swinging on a
//! pendulum; the player flings a dropping block horizontally into a fixed
//! grid, where it lands in the first open cell of its row. Runs of three or
//! more same-colored cells clear, remaining cells collapse toward the far
//! wall, and newly formed runs cascade until the field settles.
//!
//! The crate is the engine only: an embedding layer calls [`Model::update`]
//! once per frame and [`Model::fling`] on input events, and reads snapshots
//! to draw. No rendering, input polling, or I/O happens here.

pub mod core;
pub mod types;

pub use crate::core::{Block, BlockField, BlockQueue, GameSnapshot, Model};
pub use crate::types::{BlockType, MotionState, Vec2};
