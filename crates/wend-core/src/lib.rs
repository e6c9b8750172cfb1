//! **wend-core** — shared types for the wend path search workspace.
//!
//! This crate provides geometry primitives, a weighted cost grid parsed from
//! digit text, and the puzzle-input loader that callers use to build a search
//! space before handing it to `wend-paths`.

pub mod geom;
pub mod grid;
pub mod input;

pub use geom::{Heading, Point, Range};
pub use grid::{CostGrid, ParseError};
pub use input::PuzzleInput;
