//! Core module - container logic and piece generation
//!
//! It has zero dependencies on UI or I/O.

pub mod queue;
pub mod reserve;
pub mod rng;
pub mod supply;

// Re-export commonly used types
pub use queue::PieceQueue;
pub use reserve::Reserve;
pub use rng::{PieceGenerator, SimpleRng};
pub use supply::Supply;
