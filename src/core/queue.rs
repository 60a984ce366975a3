//! Queue module - bounded FIFO ring buffer of upcoming pieces
//!
//! Fixed array storage with an explicit head index and length, so enqueue
//! and dequeue are index arithmetic with no allocation. Capacity is
//! `QUEUE_CAPACITY`; both operations are checked and leave the queue
//! untouched on failure.

use crate::types::{Piece, SupplyError, QUEUE_CAPACITY};

/// The upcoming-piece queue - FIFO ring buffer over fixed storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue {
    /// Fixed slots; a slot is `Some` exactly when it holds a live piece
    slots: [Option<Piece>; QUEUE_CAPACITY],
    /// Index of the head (front) element
    head: usize,
    /// Number of live pieces
    len: usize,
}

impl PieceQueue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self {
            slots: [None; QUEUE_CAPACITY],
            head: 0,
            len: 0,
        }
    }

    /// Physical slot index for logical position `i` (0 = head)
    #[inline(always)]
    fn slot(&self, i: usize) -> usize {
        (self.head + i) % QUEUE_CAPACITY
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == QUEUE_CAPACITY
    }

    pub fn capacity(&self) -> usize {
        QUEUE_CAPACITY
    }

    /// Append a piece at the tail.
    /// Fails with `QueueFull` when the queue already holds `QUEUE_CAPACITY` pieces.
    pub fn enqueue(&mut self, piece: Piece) -> Result<(), SupplyError> {
        if self.is_full() {
            return Err(SupplyError::QueueFull);
        }
        let tail = self.slot(self.len);
        self.slots[tail] = Some(piece);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the head piece.
    /// Fails with `QueueEmpty` when there is nothing to remove.
    pub fn dequeue(&mut self) -> Result<Piece, SupplyError> {
        let piece = self.slots[self.head]
            .take()
            .ok_or(SupplyError::QueueEmpty)?;
        self.head = (self.head + 1) % QUEUE_CAPACITY;
        self.len -= 1;
        Ok(piece)
    }

    /// Peek at the head piece without removing it
    pub fn front(&self) -> Option<&Piece> {
        self.slots[self.head].as_ref()
    }

    /// Mutable access to the head piece (for in-place swaps)
    pub fn front_mut(&mut self) -> Option<&mut Piece> {
        self.slots[self.head].as_mut()
    }

    /// Piece at logical position `i` counted from the head
    pub fn get(&self, i: usize) -> Option<&Piece> {
        if i >= self.len {
            return None;
        }
        self.slots[self.slot(i)].as_ref()
    }

    /// Mutable piece at logical position `i` counted from the head
    pub fn get_mut(&mut self, i: usize) -> Option<&mut Piece> {
        if i >= self.len {
            return None;
        }
        let slot = self.slot(i);
        self.slots[slot].as_mut()
    }

    /// Iterate head to tail
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        (0..self.len).filter_map(move |i| self.slots[self.slot(i)].as_ref())
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new()
    }
}
