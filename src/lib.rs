//! Piece supply simulator.
//!
//! A bounded FIFO queue of upcoming pieces plus a bounded LIFO reserve
//! stack, driven by an interactive text menu. The containers and the
//! commands on them live in [`core`]; formatting lives in [`term`].

pub mod core;
pub mod term;
pub mod types;
