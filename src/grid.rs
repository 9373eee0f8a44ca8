//! The bounded grid that owns droids and arbitrates every placement and move.
//!
//! The entry point is [`Grid`]. Create one with [`Grid::new`] (or from a
//! [`GridConfig`]), place droids with [`Grid::add`] / [`Grid::place`], then drive
//! the most recently placed droid with [`Grid::execute`] or
//! [`Grid::execute_tokens`]. [`Grid::dump`] returns the current state.

use crate::droid::{Command, Droid, Facing};
use crate::error::{BlockReason, Error, Result};
use crate::snapshot::GridSnapshot;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// A droid to place while building a grid from a [`GridConfig`], together with
/// the commands it runs right after placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroidPlacement {
    pub x: i32,
    pub y: i32,
    pub facing: Facing,
    #[serde(default)]
    pub commands: Vec<Command>,
}

/// Options for building a [`Grid`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of columns. Default: 16.
    pub width: i32,
    /// Number of rows. Default: 16.
    pub height: i32,
    /// Placements applied in order, each followed by its commands.
    pub droids: Vec<DroidPlacement>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            droids: Vec::new(),
        }
    }
}

impl GridConfig {
    /// Builds the grid through the regular [`Grid`] operations.
    ///
    /// Stops at the first placement or command that fails and returns that error.
    pub fn build(&self) -> Result<Grid> {
        let mut grid = Grid::new(self.width, self.height)?;
        for placement in &self.droids {
            grid.place(placement.x, placement.y, placement.facing)?;
            grid.execute(&placement.commands)?;
        }
        Ok(grid)
    }
}

/// A fixed-size grid holding droids in placement order.
///
/// Only the last placed droid (the *active* droid) accepts commands; every
/// earlier droid stays where it was when the next one arrived. No two droids
/// ever share a cell.
#[derive(Clone, Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    droids: Vec<Droid>,
}

impl Grid {
    /// Creates an empty grid.
    ///
    /// Fails with [`Error::InvalidGridSize`] unless both dimensions are at least 1.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width < 1 || height < 1 {
            return Err(Error::InvalidGridSize { width, height });
        }
        debug!(width, height, "grid created");
        Ok(Self {
            width,
            height,
            droids: Vec::new(),
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn droids(&self) -> &[Droid] {
        &self.droids
    }

    pub fn len(&self) -> usize {
        self.droids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.droids.is_empty()
    }

    /// The droid that receives commands: the most recently placed one.
    pub fn active(&self) -> Option<&Droid> {
        self.droids.last()
    }

    /// Whether `position` lies inside `[0, width) x [0, height)`.
    pub fn contains(&self, position: IVec2) -> bool {
        position.x >= 0 && position.y >= 0 && position.x < self.width && position.y < self.height
    }

    /// Index of the droid standing on `position`, if any.
    pub fn occupant(&self, position: IVec2) -> Option<usize> {
        self.droids.iter().position(|d| d.position() == position)
    }

    fn occupant_except(&self, position: IVec2, skip: usize) -> Option<usize> {
        self.droids
            .iter()
            .enumerate()
            .find(|&(i, d)| i != skip && d.position() == position)
            .map(|(i, _)| i)
    }

    /// Places `droid` on the grid, making it the active droid.
    ///
    /// Fails with [`Error::OutOfBounds`] if the droid lies beyond the grid and
    /// with [`Error::CoordinatesOccupied`] if another droid holds its cell. The
    /// grid is untouched on failure.
    pub fn add(&mut self, droid: Droid) -> Result<()> {
        let position = droid.position();
        if !self.contains(position) {
            return Err(Error::OutOfBounds {
                position,
                width: self.width,
                height: self.height,
            });
        }
        if let Some(occupant) = self.occupant(position) {
            return Err(Error::CoordinatesOccupied { position, occupant });
        }

        debug!(
            index = self.droids.len(),
            %position,
            facing = %droid.facing(),
            "droid placed"
        );
        self.droids.push(droid);
        Ok(())
    }

    /// Constructs a droid and places it in one step.
    pub fn place(&mut self, x: i32, y: i32, facing: Facing) -> Result<()> {
        self.add(Droid::new(x, y, facing)?)
    }

    /// Runs `commands` in order against the active droid.
    ///
    /// Rotations always succeed. A blocked [`Command::Move`] (leaving the grid
    /// or entering another droid's cell) is undone and the rest of the batch is
    /// dropped with [`Error::MovementBlocked`]. Commands that ran before the
    /// blocked move keep their effect.
    ///
    /// An empty batch is a no-op. A non-empty batch on an empty grid fails with
    /// [`Error::NoActiveDroid`].
    pub fn execute(&mut self, commands: &[Command]) -> Result<()> {
        if commands.is_empty() {
            return Ok(());
        }
        let index = self.droids.len().checked_sub(1).ok_or(Error::NoActiveDroid)?;
        debug!(droid = index, commands = commands.len(), "executing batch");

        for &command in commands {
            trace!(droid = index, %command, "command");
            match command {
                Command::Left => self.droids[index].rotate(false),
                Command::Right => self.droids[index].rotate(true),
                Command::Move => self.advance(index)?,
            }
        }
        Ok(())
    }

    /// Parses every token (`"left"`, `"right"`, `"move"`) and then runs the batch.
    ///
    /// A single unknown token rejects the whole batch with
    /// [`Error::InvalidCommand`] before any droid is touched.
    pub fn execute_tokens<I, S>(&mut self, tokens: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let commands = tokens
            .into_iter()
            .map(|token| token.as_ref().parse())
            .collect::<Result<Vec<Command>>>()?;
        self.execute(&commands)
    }

    /// Steps droid `index` forward, rolling the step back if it is illegal.
    fn advance(&mut self, index: usize) -> Result<()> {
        let from = self.droids[index].position();
        self.droids[index].step(false);
        let to = self.droids[index].position();

        let blocked = if !self.contains(to) {
            Some(BlockReason::OutOfBounds)
        } else {
            self.occupant_except(to, index)
                .map(|with| BlockReason::Collision { with })
        };

        if let Some(reason) = blocked {
            self.droids[index].back();
            debug!(droid = index, %from, %to, ?reason, "move blocked");
            return Err(Error::MovementBlocked {
                droid: index,
                from,
                to,
                reason,
            });
        }
        Ok(())
    }

    /// Snapshot of the grid size and every droid, in placement order.
    pub fn dump(&self) -> GridSnapshot {
        GridSnapshot {
            width: self.width,
            height: self.height,
            droids: self.droids.iter().map(Droid::snapshot).collect(),
        }
    }
}
