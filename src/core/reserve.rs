//! Reserve module - bounded LIFO stack of set-aside pieces
//!
//! Backed by a fixed-capacity `ArrayVec`, so push/pop never allocate.
//! Capacity is `RESERVE_CAPACITY`; operations are checked and leave the
//! stack untouched on failure.

use arrayvec::ArrayVec;

use crate::types::{Piece, SupplyError, RESERVE_CAPACITY};

/// The reserve stack - LIFO, top = most recently pushed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reserve {
    items: ArrayVec<Piece, RESERVE_CAPACITY>,
}

impl Reserve {
    /// Create a new empty reserve
    pub fn new() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    pub fn capacity(&self) -> usize {
        RESERVE_CAPACITY
    }

    /// Push a piece onto the top.
    /// Fails with `ReserveFull` when the stack already holds `RESERVE_CAPACITY` pieces.
    pub fn push(&mut self, piece: Piece) -> Result<(), SupplyError> {
        if self.items.is_full() {
            return Err(SupplyError::ReserveFull);
        }
        self.items.push(piece);
        Ok(())
    }

    /// Remove and return the top piece.
    /// Fails with `ReserveEmpty` when there is nothing to remove.
    pub fn pop(&mut self) -> Result<Piece, SupplyError> {
        self.items.pop().ok_or(SupplyError::ReserveEmpty)
    }

    /// Peek at the top piece without removing it
    pub fn top(&self) -> Option<&Piece> {
        self.items.last()
    }

    /// Mutable access to the top piece (for in-place swaps)
    pub fn top_mut(&mut self) -> Option<&mut Piece> {
        self.items.last_mut()
    }

    /// Piece at position `i` counted from the top (0 = top)
    pub fn get_from_top(&self, i: usize) -> Option<&Piece> {
        let len = self.items.len();
        if i >= len {
            return None;
        }
        self.items.get(len - 1 - i)
    }

    /// Mutable piece at position `i` counted from the top (0 = top)
    pub fn get_from_top_mut(&mut self, i: usize) -> Option<&mut Piece> {
        let len = self.items.len();
        if i >= len {
            return None;
        }
        self.items.get_mut(len - 1 - i)
    }

    /// Iterate top to base
    pub fn iter_top_down(&self) -> impl Iterator<Item = &Piece> {
        self.items.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn piece(id: u32) -> Piece {
        Piece::new(PieceKind::L, id)
    }

    #[test]
    fn test_empty_reserve() {
        let reserve = Reserve::new();
        assert_eq!(reserve.len(), 0);
        assert!(reserve.is_empty());
        assert!(reserve.top().is_none());
        assert_eq!(reserve.capacity(), RESERVE_CAPACITY);
    }

    #[test]
    fn test_lifo_order() {
        let mut reserve = Reserve::new();
        for id in 0..3 {
            reserve.push(piece(id)).unwrap();
        }
        assert_eq!(reserve.top().unwrap().id, 2);
        assert_eq!(reserve.pop().unwrap().id, 2);
        assert_eq!(reserve.pop().unwrap().id, 1);
        assert_eq!(reserve.pop().unwrap().id, 0);
        assert!(reserve.is_empty());
    }

    #[test]
    fn test_push_full_is_rejected() {
        let mut reserve = Reserve::new();
        for id in 0..3 {
            reserve.push(piece(id)).unwrap();
        }
        assert!(reserve.is_full());
        assert_eq!(reserve.push(piece(99)), Err(SupplyError::ReserveFull));
        assert_eq!(reserve.len(), 3);
        assert_eq!(reserve.top().unwrap().id, 2);
    }

    #[test]
    fn test_pop_empty_is_rejected() {
        let mut reserve = Reserve::new();
        assert_eq!(reserve.pop(), Err(SupplyError::ReserveEmpty));
        assert!(reserve.is_empty());
    }

    #[test]
    fn test_top_down_indexing() {
        let mut reserve = Reserve::new();
        for id in 0..3 {
            reserve.push(piece(id)).unwrap();
        }
        // Top is the last push
        assert_eq!(reserve.get_from_top(0).unwrap().id, 2);
        assert_eq!(reserve.get_from_top(1).unwrap().id, 1);
        assert_eq!(reserve.get_from_top(2).unwrap().id, 0);
        assert!(reserve.get_from_top(3).is_none());

        let top_down: Vec<u32> = reserve.iter_top_down().map(|p| p.id).collect();
        assert_eq!(top_down, vec![2, 1, 0]);
    }
}
