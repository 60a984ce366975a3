//! RNG module - random piece generation
//!
//! A simple LCG keeps the whole simulation deterministic for a given seed,
//! which the tests rely on. The generator owns both the RNG and the
//! monotonic piece id counter, so there is no hidden global state.

use crate::types::{Piece, PieceKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Produces pieces on demand: uniformly random kind, sequential unique id.
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
    /// Next id to hand out (strictly increasing, never reused).
    next_id: u32,
}

impl PieceGenerator {
    /// Create a generator with the given RNG seed; ids start at 0
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            next_id: 0,
        }
    }

    /// Generate the next piece
    pub fn next(&mut self) -> Piece {
        let kind = PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize];
        let id = self.next_id;
        self.next_id += 1;
        Piece::new(kind, id)
    }
}
