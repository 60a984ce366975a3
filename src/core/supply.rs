//! Supply module - the complete simulator state
//!
//! Ties together the queue, the reserve stack, and the piece generator,
//! and implements the menu commands on top of them. Every command is a
//! precondition check followed by an atomic mutation: on failure the
//! state is left exactly as it was.

use std::mem;

use crate::core::{PieceGenerator, PieceQueue, Reserve};
use crate::types::{Piece, SupplyError, QUEUE_CAPACITY, SWAP_THREE_COUNT};

/// Complete supply state: upcoming queue, reserve stack, generator
#[derive(Debug, Clone)]
pub struct Supply {
    queue: PieceQueue,
    reserve: Reserve,
    generator: PieceGenerator,
}

impl Supply {
    /// Create a new supply with the given RNG seed, queue filled to capacity
    pub fn new(seed: u32) -> Self {
        let mut generator = PieceGenerator::new(seed);
        let mut queue = PieceQueue::new();
        for _ in 0..QUEUE_CAPACITY {
            // A freshly created queue has room for exactly QUEUE_CAPACITY pieces.
            if queue.enqueue(generator.next()).is_err() {
                break;
            }
        }
        Self {
            queue,
            reserve: Reserve::new(),
            generator,
        }
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn reserve_stack(&self) -> &Reserve {
        &self.reserve
    }

    /// Play the head piece: dequeue it and immediately refill the queue
    /// with a freshly generated piece. Returns the played piece.
    pub fn play(&mut self) -> Result<Piece, SupplyError> {
        let played = self.queue.dequeue()?;
        // The dequeue just made room, so the refill cannot fail.
        self.queue.enqueue(self.generator.next())?;
        Ok(played)
    }

    /// Move the head piece onto the reserve stack, then refill the queue.
    /// Returns the reserved piece. Fails before touching anything if the
    /// queue is empty or the reserve is full.
    pub fn reserve(&mut self) -> Result<Piece, SupplyError> {
        if self.queue.is_empty() {
            return Err(SupplyError::QueueEmpty);
        }
        if self.reserve.is_full() {
            return Err(SupplyError::ReserveFull);
        }
        let piece = self.queue.dequeue()?;
        self.reserve.push(piece)?;
        self.queue.enqueue(self.generator.next())?;
        Ok(piece)
    }

    /// Consume the reserve top. Returns the used piece.
    pub fn use_reserve(&mut self) -> Result<Piece, SupplyError> {
        self.reserve.pop()
    }

    /// Exchange the queue head with the reserve top in place.
    /// Neither piece leaves its container; sizes are unchanged.
    pub fn swap_one(&mut self) -> Result<(), SupplyError> {
        if self.reserve.is_empty() {
            return Err(SupplyError::ReserveEmpty);
        }
        let head = self.queue.front_mut().ok_or(SupplyError::QueueEmpty)?;
        if let Some(top) = self.reserve.top_mut() {
            mem::swap(head, top);
        }
        Ok(())
    }

    /// Exchange the first three queue pieces (head first) with the three
    /// reserve pieces (top first), element for element by position.
    /// Fails without mutating unless both sides hold at least three.
    pub fn swap_three(&mut self) -> Result<(), SupplyError> {
        if self.queue.len() < SWAP_THREE_COUNT || self.reserve.len() < SWAP_THREE_COUNT {
            return Err(SupplyError::NotEnoughPieces);
        }
        for i in 0..SWAP_THREE_COUNT {
            // The length check above guarantees both positions exist.
            if let (Some(q), Some(r)) = (self.queue.get_mut(i), self.reserve.get_from_top_mut(i)) {
                mem::swap(q, r);
            }
        }
        Ok(())
    }
}
