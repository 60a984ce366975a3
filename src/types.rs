//! Shared value types for the piece supply simulator
//! This module contains pure data types with no external dependencies

use std::fmt;

/// Upcoming-piece queue capacity
pub const QUEUE_CAPACITY: usize = 5;
/// Reserve stack capacity
pub const RESERVE_CAPACITY: usize = 3;
/// Number of positions exchanged by the three-piece swap
pub const SWAP_THREE_COUNT: usize = 3;

/// Piece kinds produced by the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// All kinds, in generator draw order
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Parse piece kind from character (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'L' => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to display character
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }
}

/// A generated piece: kind plus a process-unique id.
///
/// Ids are assigned at creation time, strictly increase, and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u32,
}

impl Piece {
    pub fn new(kind: PieceKind, id: u32) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{} {}]", self.kind.as_char(), self.id)
    }
}

/// Precondition failure on a container operation.
///
/// These are user-facing conditions, never fatal: the failing command leaves
/// all state unchanged and the menu loop continues.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum SupplyError {
    /// Queue already holds `QUEUE_CAPACITY` pieces.
    QueueFull,
    /// Queue has no piece to remove.
    QueueEmpty,
    /// Reserve already holds `RESERVE_CAPACITY` pieces.
    ReserveFull,
    /// Reserve has no piece to remove.
    ReserveEmpty,
    /// Three-piece swap needs at least three pieces on each side.
    NotEnoughPieces,
}

impl std::error::Error for SupplyError {}

impl fmt::Display for SupplyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            SupplyError::QueueFull => write!(f, "queue is full"),
            SupplyError::QueueEmpty => write!(f, "queue is empty"),
            SupplyError::ReserveFull => write!(f, "reserve is full"),
            SupplyError::ReserveEmpty => write!(f, "reserve is empty"),
            SupplyError::NotEnoughPieces => {
                write!(f, "need at least 3 pieces in the queue and 3 in the reserve")
            }
        }
    }
}
