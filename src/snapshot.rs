//! Immutable, serializable views of grid state.

use crate::droid::{Droid, Facing};
use serde::{Deserialize, Serialize};

/// Position and facing of one droid at the time of the snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroidSnapshot {
    pub x: i32,
    pub y: i32,
    pub facing: Facing,
}

impl From<&Droid> for DroidSnapshot {
    fn from(droid: &Droid) -> Self {
        Self {
            x: droid.x(),
            y: droid.y(),
            facing: droid.facing(),
        }
    }
}

/// The complete state of a grid.
///
/// `droids` is in placement order, so the last entry is the droid that was
/// active when the snapshot was taken.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub width: i32,
    pub height: i32,
    pub droids: Vec<DroidSnapshot>,
}

impl GridSnapshot {
    /// Snapshot of the droid that would receive the next command, if any.
    pub fn active(&self) -> Option<&DroidSnapshot> {
        self.droids.last()
    }
}
