//! Droid state and the commands that drive it.

use crate::error::{Error, Result};
use crate::snapshot::DroidSnapshot;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four cardinal directions a droid can face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    North,
    East,
    South,
    West,
}

impl Facing {
    /// Clockwise rotation order.
    pub const CLOCKWISE: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    fn index(self) -> i32 {
        match self {
            Facing::North => 0,
            Facing::East => 1,
            Facing::South => 2,
            Facing::West => 3,
        }
    }

    /// The facing one quarter turn away, clockwise or counter-clockwise.
    pub fn rotated(self, clockwise: bool) -> Facing {
        let step = if clockwise { 1 } else { -1 };
        let next = (self.index() + step).rem_euclid(Self::CLOCKWISE.len() as i32);
        Self::CLOCKWISE[next as usize]
    }

    /// Unit vector of a forward step. North is `+Y`.
    pub fn delta(self) -> IVec2 {
        match self {
            Facing::North => IVec2::Y,
            Facing::East => IVec2::X,
            Facing::South => IVec2::NEG_Y,
            Facing::West => IVec2::NEG_X,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Facing::North => "north",
            Facing::East => "east",
            Facing::South => "south",
            Facing::West => "west",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Facing {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "north" => Ok(Facing::North),
            "east" => Ok(Facing::East),
            "south" => Ok(Facing::South),
            "west" => Ok(Facing::West),
            other => Err(Error::InvalidFacing(other.to_owned())),
        }
    }
}

/// A single discrete instruction for the active droid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    /// Rotate a quarter turn counter-clockwise (`left`).
    Left,
    /// Rotate a quarter turn clockwise (`right`).
    Right,
    /// Step one cell along the current facing (`move`).
    Move,
}

impl Command {
    pub fn as_str(self) -> &'static str {
        match self {
            Command::Left => "left",
            Command::Right => "right",
            Command::Move => "move",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "left" => Ok(Command::Left),
            "right" => Ok(Command::Right),
            "move" => Ok(Command::Move),
            other => Err(Error::InvalidCommand(other.to_owned())),
        }
    }
}

/// A positioned, directional agent.
///
/// A droid knows nothing about grids. Bounds and occupancy are checked by the
/// [`Grid`](crate::Grid) it is added to, which is also the only thing allowed
/// to move it afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Droid {
    position: IVec2,
    facing: Facing,
}

impl Droid {
    /// Creates a droid at `(x, y)` looking towards `facing`.
    ///
    /// Fails with [`Error::InvalidCoordinate`] when either coordinate is negative.
    pub fn new(x: i32, y: i32, facing: Facing) -> Result<Self> {
        if x < 0 || y < 0 {
            return Err(Error::InvalidCoordinate { x, y });
        }
        Ok(Self {
            position: IVec2::new(x, y),
            facing,
        })
    }

    /// Like [`Droid::new`], with the facing given by name (`"north"`, `"east"`, ...).
    ///
    /// The facing is checked before the coordinates.
    pub fn parse(x: i32, y: i32, facing: &str) -> Result<Self> {
        let facing = facing.parse()?;
        Self::new(x, y, facing)
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Unit vector the droid would travel along on its next forward step.
    pub fn forward(&self) -> IVec2 {
        self.facing.delta()
    }

    /// Turns a quarter step, wrapping around the cycle in either direction.
    pub fn rotate(&mut self, clockwise: bool) {
        self.facing = self.facing.rotated(clockwise);
    }

    /// Translates one cell forward, or backward when `reverse` is set.
    ///
    /// Pure arithmetic: the caller is responsible for bounds and collisions.
    pub fn step(&mut self, reverse: bool) {
        let delta = self.forward();
        self.position += if reverse { -delta } else { delta };
    }

    /// Undoes a forward step.
    pub fn back(&mut self) {
        self.step(true);
    }

    pub fn snapshot(&self) -> DroidSnapshot {
        DroidSnapshot::from(self)
    }
}
