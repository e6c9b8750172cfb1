use wend_core::{Point, Range};

use crate::history::History;
use crate::traits::Neighbors;

fn any(_: Point) -> bool {
    true
}

/// Neighbor generator for plain grid walking over [`Point`] states.
///
/// Enumerates the 4 cardinal or all 8 surrounding cells, optionally clipped
/// to a [`Range`] and filtered by a `keep` predicate. Without bounds the grid
/// is unbounded.
#[derive(Clone, Copy)]
pub struct GridMoves<F = fn(Point) -> bool> {
    diagonal: bool,
    bounds: Option<Range>,
    keep: F,
}

impl GridMoves {
    /// 4-directional (cardinal) movement.
    pub fn cardinal() -> Self {
        Self {
            diagonal: false,
            bounds: None,
            keep: any,
        }
    }

    /// 8-directional movement.
    pub fn all() -> Self {
        Self {
            diagonal: true,
            bounds: None,
            keep: any,
        }
    }
}

impl<F: Fn(Point) -> bool> GridMoves<F> {
    /// Only yield cells inside `bounds`.
    pub fn within(mut self, bounds: Range) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Only yield cells for which `keep` returns `true` (e.g. passable
    /// terrain). Replaces any previous predicate.
    pub fn keep<G: Fn(Point) -> bool>(self, keep: G) -> GridMoves<G> {
        GridMoves {
            diagonal: self.diagonal,
            bounds: self.bounds,
            keep,
        }
    }

    /// Whether diagonal steps are generated.
    #[inline]
    pub fn is_diagonal(&self) -> bool {
        self.diagonal
    }

    #[inline]
    fn admits(&self, p: Point) -> bool {
        self.bounds.is_none_or(|r| r.contains(p)) && (self.keep)(p)
    }
}

impl<F: Fn(Point) -> bool> Neighbors<Point> for GridMoves<F> {
    fn neighbors(&self, current: &Point, _: History<'_, Point>, buf: &mut Vec<Point>) {
        if self.diagonal {
            buf.extend(current.neighbors_8().into_iter().filter(|&n| self.admits(n)));
        } else {
            buf.extend(current.neighbors_4().into_iter().filter(|&n| self.admits(n)));
        }
    }
}
