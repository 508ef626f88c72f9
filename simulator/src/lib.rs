/**
* A live cell dies if it has fewer than two live neighbors.
* A live cell with two or three live neighbors lives on to the next generation.
* A live cell with more than three live neighbors dies.
* A dead cell will be brought back to live if it has exactly three live neighbors.
*
* Cells outside the board count as permanently dead; the board does not wrap.
*/

pub mod grid;

pub mod autorun;
pub mod density;
pub mod error;
pub mod interval;
pub mod pattern;

pub use autorun::{AutoRun, SharedSimulator};
pub use density::Density;
pub use error::GridError;
pub use grid::{GridSimulator, StepOutcome};
pub use interval::TickInterval;
pub use pattern::{Pattern, PATTERNS};
