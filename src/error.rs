//! Error taxonomy for grid and droid operations.

use glam::IVec2;
use thiserror::Error;

/// Why a forward move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockReason {
    /// The destination cell lies outside the grid.
    OutOfBounds,
    /// The destination cell is held by the droid at index `with`.
    Collision { with: usize },
}

/// Errors raised by [`Droid`](crate::Droid) construction and [`Grid`](crate::Grid) operations.
///
/// Every variant describes invalid caller input or a legal but blocked move.
/// None of them leave the grid in a partially updated state beyond what
/// [`Grid::execute`](crate::Grid::execute) documents.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid grid size {width}x{height}, both dimensions must be at least 1")]
    InvalidGridSize { width: i32, height: i32 },

    #[error("invalid droid facing `{0}`")]
    InvalidFacing(String),

    #[error("invalid droid coordinates ({x}, {y})")]
    InvalidCoordinate { x: i32, y: i32 },

    #[error("droid at {position} is out of grid bounds {width}x{height}")]
    OutOfBounds {
        position: IVec2,
        width: i32,
        height: i32,
    },

    #[error("coordinates {position} already occupied by droid {occupant}")]
    CoordinatesOccupied { position: IVec2, occupant: usize },

    #[error("invalid command `{0}`")]
    InvalidCommand(String),

    #[error("droid {droid} blocked moving from {from} to {to}: {reason:?}")]
    MovementBlocked {
        droid: usize,
        from: IVec2,
        to: IVec2,
        reason: BlockReason,
    },

    /// Commands were issued before any droid was placed.
    #[error("no droid has been placed on the grid")]
    NoActiveDroid,
}

pub type Result<T> = std::result::Result<T, Error>;
