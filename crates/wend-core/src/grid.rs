//! The [`CostGrid`] type: a rectangular grid of per-cell movement weights.
//!
//! Weights are parsed from text where every character is one decimal digit,
//! one row per line:
//!
//! ```text
//! 2413
//! 3215
//! 3255
//! ```

use std::fmt;

use crate::geom::{Point, Range};

/// A row-major grid of `u32` cell weights, anchored at (0, 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostGrid {
    cells: Vec<u32>,
    width: usize,
    height: usize,
}

impl CostGrid {
    /// Create a grid of the given dimensions with every cell set to `weight`.
    pub fn filled(width: usize, height: usize, weight: u32) -> Self {
        Self {
            cells: vec![weight; width * height],
            width,
            height,
        }
    }

    /// Parse a block of digit rows. Blank lines are ignored and surrounding
    /// whitespace on each line is trimmed.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Self::from_lines(text.lines())
    }

    /// Build a grid from already-split rows.
    pub fn from_lines<I, L>(lines: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut width = 0;
        let mut height = 0;
        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }
            let row_start = cells.len();
            for (x, ch) in line.chars().enumerate() {
                let Some(w) = ch.to_digit(10) else {
                    return Err(ParseError::InvalidDigit {
                        ch,
                        pos: Point::new(x as i32, height as i32),
                    });
                };
                cells.push(w);
            }
            let found = cells.len() - row_start;
            if height == 0 {
                width = found;
            } else if found != width {
                return Err(ParseError::Ragged {
                    line: height,
                    expected: width,
                    found,
                });
            }
            height += 1;
        }
        if height == 0 {
            return Err(ParseError::Empty);
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The rectangle `[0, width) x [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::with_size(self.width as i32, self.height as i32)
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.index(p).is_some()
    }

    /// The bottom-right cell, `None` for an empty grid.
    pub fn last(&self) -> Option<Point> {
        if self.cells.is_empty() {
            return None;
        }
        Some(Point::new(self.width as i32 - 1, self.height as i32 - 1))
    }

    /// Weight of the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<u32> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Overwrite the weight at `p`. Out-of-bounds writes are ignored.
    pub fn set(&mut self, p: Point, weight: u32) {
        if let Some(i) = self.index(p) {
            self.cells[i] = weight;
        }
    }

    /// Smallest weight in the grid, `None` for an empty grid.
    pub fn min_weight(&self) -> Option<u32> {
        self.cells.iter().copied().min()
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height {
            Some((p.y as usize) * self.width + (p.x as usize))
        } else {
            None
        }
    }
}

/// Errors that can occur when parsing a [`CostGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained no rows.
    Empty,
    /// A row's width differs from the first row's. `line` is the row
    /// index with blank lines skipped, the same `y` as [`Self::InvalidDigit`].
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A cell is not a decimal digit.
    InvalidDigit { ch: char, pos: Point },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "cost grid: no rows"),
            Self::Ragged {
                line,
                expected,
                found,
            } => write!(
                f,
                "cost grid: line {line} has {found} cells, expected {expected}"
            ),
            Self::InvalidDigit { ch, pos } => {
                write!(f, "cost grid: invalid digit '{ch}' at {pos}")
            }
        }
    }
}

impl std::error::Error for ParseError {}
