//! # droid-grid
//!
//! Places directional droids on a fixed-size grid and drives them one at a time
//! with `left` / `right` / `move` commands.
//!
//! The [`Grid`] is the only authority on what is legal: droids must stay inside
//! its bounds and never share a cell. A blocked move is rolled back and reported
//! as [`Error::MovementBlocked`]; everything that happened before it stands.
//!
//! ```
//! use droid_grid::{Command, Facing, Grid};
//!
//! let mut grid = Grid::new(6, 6)?;
//! grid.place(1, 2, Facing::North)?;
//! grid.execute(&[Command::Left, Command::Move])?;
//! assert_eq!(grid.dump().droids[0].x, 0);
//! # Ok::<(), droid_grid::Error>(())
//! ```

pub mod droid;
pub mod error;
pub mod grid;
pub mod snapshot;

pub use droid::*;
pub use error::*;
pub use grid::*;
pub use snapshot::*;
