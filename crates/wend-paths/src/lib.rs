//! Best-first (A\*) shortest-path search over arbitrary state spaces.
//!
//! The engine knows nothing about grids or puzzles. A caller supplies a
//! start, a goal and three capabilities:
//!
//! | Trait | Answers |
//! |---|---|
//! | [`Heuristic`] | estimated remaining cost from a state to the goal |
//! | [`Cost`] | cost of one edge, given the [`History`] so far |
//! | [`Neighbors`] | successors of a state, given the [`History`] so far |
//!
//! Each trait is implemented for plain closures and functions with the
//! matching signature, so small searches need no extra types.
//!
//! ```
//! use wend_core::{Point, Range};
//! use wend_paths::{GridMoves, History, astar, manhattan};
//!
//! let h = |a: &Point, b: &Point| f64::from(manhattan(*a, *b));
//! let cost = |_: History<'_, Point>, _: &Point, _: &Point| 1.0;
//! let moves = GridMoves::cardinal().within(Range::with_size(4, 4));
//!
//! let path = astar(Point::new(0, 0), Point::new(3, 3), &h, &cost, &moves).unwrap();
//! assert_eq!(path.cost, 6.0);
//! assert_eq!(path.len(), 7);
//! ```
//!
//! States are any `Clone + Eq + Hash + Ord` value. The engine's bookkeeping
//! is keyed on state identity only, so history that affects which moves are
//! legal (heading, run length, ...) belongs in the state; see [`RunLength`]
//! for a grid example.
//!
//! An unreachable goal is reported as [`SearchError::NoPathFound`], an
//! ordinary error value callers can recover from.

mod astar;
mod cache;
mod distance;
mod error;
mod history;
mod neighbors;
mod runlength;
mod search;
mod traits;

pub use astar::astar;
pub use cache::Memoized;
pub use distance::{chebyshev, euclidean, manhattan};
pub use error::SearchError;
pub use history::{Ancestors, History, reconstruct_path};
pub use neighbors::GridMoves;
pub use runlength::{Crucible, RunLength};
pub use search::{Path, PathSearch, SearchConfig};
pub use traits::{Cost, Heuristic, Neighbors};
