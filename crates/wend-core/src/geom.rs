//! Geometry primitives: [`Point`], [`Range`] and [`Heading`].

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. X grows right, Y grows down (row-major text layout).
///
/// Points order row-major (`y` first, then `x`), which gives search frontiers
/// a deterministic tie-break.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point one step away in direction `h`.
    #[inline]
    pub fn step(self, h: Heading) -> Self {
        self + h.delta()
    }

    /// The four cardinal neighbours (up, right, down, left).
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x + 1, self.y),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y),
        ]
    }

    /// All eight neighbours (cardinal + diagonal), clockwise from up.
    #[inline]
    pub fn neighbors_8(self) -> [Point; 8] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x + 1, self.y - 1),
            Self::new(self.x + 1, self.y),
            Self::new(self.x + 1, self.y + 1),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y + 1),
            Self::new(self.x - 1, self.y),
            Self::new(self.x - 1, self.y - 1),
        ]
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Range `[0, w) x [0, h)`.
    #[inline]
    pub fn with_size(w: i32, h: i32) -> Self {
        Self::new(0, 0, w, h)
    }

    /// Width of the range.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height of the range.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the range has zero area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }
}

// ---------------------------------------------------------------------------
// Heading
// ---------------------------------------------------------------------------

/// One of the four cardinal directions of travel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings, clockwise from north.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Unit displacement for one step in this heading.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Heading::North => Point::new(0, -1),
            Heading::East => Point::new(1, 0),
            Heading::South => Point::new(0, 1),
            Heading::West => Point::new(-1, 0),
        }
    }

    /// Heading after a 90° counter-clockwise turn.
    #[inline]
    pub const fn left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::East => Heading::North,
            Heading::South => Heading::East,
            Heading::West => Heading::South,
        }
    }

    /// Heading after a 90° clockwise turn.
    #[inline]
    pub const fn right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// The opposite heading.
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Heading::North => Heading::South,
            Heading::East => Heading::West,
            Heading::South => Heading::North,
            Heading::West => Heading::East,
        }
    }

    /// The heading of a single cardinal step `from -> to`, if it is one.
    pub fn between(from: Point, to: Point) -> Option<Self> {
        let d = to - from;
        Self::ALL.into_iter().find(|h| h.delta() == d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_ordering_is_row_major() {
        let mut pts = vec![Point::new(2, 0), Point::new(0, 1), Point::new(1, 0)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(1, 0), Point::new(2, 0), Point::new(0, 1)]);
    }

    #[test]
    fn point_arithmetic() {
        let p = Point::new(3, 4);
        assert_eq!(p + Point::new(1, -1), Point::new(4, 3));
        assert_eq!(p - Point::new(3, 4), Point::ZERO);
    }

    #[test]
    fn neighbors_are_adjacent() {
        let p = Point::new(5, 5);
        for n in p.neighbors_4() {
            let d = n - p;
            assert_eq!(d.x.abs() + d.y.abs(), 1);
        }
        for n in p.neighbors_8() {
            let d = n - p;
            assert!(d != Point::ZERO);
            assert!(d.x.abs() <= 1 && d.y.abs() <= 1);
        }
    }

    #[test]
    fn range_contains_half_open() {
        let r = Range::with_size(3, 2);
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 1)));
        assert!(!r.contains(Point::new(0, 2)));
        assert!(!r.contains(Point::new(-1, 0)));
        assert_eq!(r.len(), 6);
    }

    #[test]
    fn range_canonicalizes() {
        let r = Range::new(4, 5, 1, 2);
        assert_eq!(r.min, Point::new(1, 2));
        assert_eq!(r.max, Point::new(4, 5));
        assert!(Range::new(1, 1, 1, 4).is_empty());
        assert_eq!(Range::new(1, 1, 1, 4).len(), 0);
    }

    #[test]
    fn heading_turns() {
        for h in Heading::ALL {
            assert_eq!(h.left().right(), h);
            assert_eq!(h.right().right(), h.reverse());
            assert_eq!(h.reverse().reverse(), h);
            assert_eq!(h.delta() + h.reverse().delta(), Point::ZERO);
        }
        assert_eq!(Heading::North.right(), Heading::East);
        assert_eq!(Heading::North.left(), Heading::West);
    }

    #[test]
    fn heading_between() {
        let p = Point::new(2, 2);
        assert_eq!(Heading::between(p, Point::new(2, 1)), Some(Heading::North));
        assert_eq!(Heading::between(p, Point::new(1, 2)), Some(Heading::West));
        assert_eq!(Heading::between(p, Point::new(3, 3)), None);
        assert_eq!(Heading::between(p, p), None);
        assert_eq!(p.step(Heading::South), Point::new(2, 3));
    }
}
