//! Turn-constrained walking over a [`CostGrid`].
//!
//! Rules such as "at most three steps in a straight line" or "at least four
//! steps before turning" depend on how a cell was reached. Rather than
//! scanning the predecessor chain, the relevant history (heading and current
//! run length) is part of the state itself, so every state has a fixed set of
//! legal moves and the search stays Markovian.

use wend_core::{CostGrid, Heading, Point};

use crate::distance::manhattan;
use crate::error::SearchError;
use crate::history::History;
use crate::search::{Path, PathSearch};
use crate::traits::{Cost, Neighbors};

/// Position plus the history that constrains the next move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Crucible {
    pub pos: Point,
    /// Direction of the last step; `None` before the first move.
    pub heading: Option<Heading>,
    /// Consecutive steps taken in `heading`.
    pub run: u8,
}

impl Crucible {
    /// A state at `pos` that has not moved yet.
    #[inline]
    pub const fn start(pos: Point) -> Self {
        Self {
            pos,
            heading: None,
            run: 0,
        }
    }
}

/// Cost and neighbor capabilities for run-length constrained movement.
///
/// * The first move may go in any of the four headings.
/// * Going straight is allowed while the run is below `max_run`.
/// * Turning left or right is allowed once the run reaches `min_run`.
/// * Reversing is never allowed.
///
/// Entering a cell costs that cell's weight.
#[derive(Debug, Clone, Copy)]
pub struct RunLength<'g> {
    grid: &'g CostGrid,
    min_run: u8,
    max_run: u8,
    floor: f64,
}

impl<'g> RunLength<'g> {
    /// `max_run` is raised to at least `max(min_run, 1)`.
    pub fn new(grid: &'g CostGrid, min_run: u8, max_run: u8) -> Self {
        Self {
            grid,
            min_run,
            max_run: max_run.max(min_run).max(1),
            floor: f64::from(grid.min_weight().unwrap_or(0)),
        }
    }

    #[inline]
    pub fn grid(&self) -> &'g CostGrid {
        self.grid
    }

    #[inline]
    pub fn min_run(&self) -> u8 {
        self.min_run
    }

    #[inline]
    pub fn max_run(&self) -> u8 {
        self.max_run
    }

    /// Whether `s` counts as arriving at `target`: the run in progress must
    /// be long enough to stop.
    pub fn is_goal(&self, s: &Crucible, target: Point) -> bool {
        s.pos == target && (s.heading.is_none() || s.run >= self.min_run)
    }

    /// Lower bound on the remaining cost: every step costs at least the
    /// grid's smallest weight.
    pub fn estimate(&self, s: &Crucible, target: Point) -> f64 {
        f64::from(manhattan(s.pos, target)) * self.floor
    }

    /// Cheapest constrained route from `from` to `to`.
    pub fn shortest(&self, from: Point, to: Point) -> Result<Path<Crucible>, SearchError> {
        self.shortest_with(&PathSearch::default(), from, to)
    }

    /// As [`shortest`](Self::shortest), with a caller-supplied [`PathSearch`].
    pub fn shortest_with(
        &self,
        search: &PathSearch,
        from: Point,
        to: Point,
    ) -> Result<Path<Crucible>, SearchError> {
        if !self.grid.contains(from) || !self.grid.contains(to) {
            return Err(SearchError::NoPathFound);
        }
        search.astar_path_to(
            Crucible::start(from),
            |s| self.is_goal(s, to),
            |s| self.estimate(s, to),
            self,
            self,
        )
    }

    #[inline]
    fn push_step(&self, from: Point, heading: Heading, run: u8, buf: &mut Vec<Crucible>) {
        let pos = from.step(heading);
        if self.grid.contains(pos) {
            buf.push(Crucible {
                pos,
                heading: Some(heading),
                run,
            });
        }
    }
}

impl Neighbors<Crucible> for RunLength<'_> {
    fn neighbors(&self, current: &Crucible, _: History<'_, Crucible>, buf: &mut Vec<Crucible>) {
        let Some(h) = current.heading else {
            for h in Heading::ALL {
                self.push_step(current.pos, h, 1, buf);
            }
            return;
        };
        if current.run < self.max_run {
            self.push_step(current.pos, h, current.run + 1, buf);
        }
        if current.run >= self.min_run {
            self.push_step(current.pos, h.left(), 1, buf);
            self.push_step(current.pos, h.right(), 1, buf);
        }
    }
}

impl Cost<Crucible> for RunLength<'_> {
    fn cost(&self, _: History<'_, Crucible>, _: &Crucible, next: &Crucible) -> f64 {
        self.grid.at(next.pos).map_or(f64::INFINITY, f64::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar::astar;
    use crate::neighbors::GridMoves;
    use std::collections::HashMap;

    const LAVA: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533";

    const STRIP: &str = "\
111111111111
999999999991
999999999991
999999999991
999999999991";

    /// Longest straight run, whether any step reversed direction, and the
    /// length of every run in order. Also checks each state's recorded run.
    fn runs(path: &[Crucible]) -> (u8, bool, Vec<u8>) {
        let mut longest = 0;
        let mut reversed = false;
        let mut lengths = Vec::new();
        let mut prev: Option<Heading> = None;
        let mut run = 0u8;
        for pair in path.windows(2) {
            let h = Heading::between(pair[0].pos, pair[1].pos)
                .expect("consecutive states are one cardinal step apart");
            match prev {
                Some(p) if p == h => run += 1,
                Some(p) => {
                    reversed |= p.reverse() == h;
                    lengths.push(run);
                    run = 1;
                }
                None => run = 1,
            }
            assert_eq!(pair[1].heading, Some(h));
            assert_eq!(pair[1].run, run);
            longest = longest.max(run);
            prev = Some(h);
        }
        if run > 0 {
            lengths.push(run);
        }
        (longest, reversed, lengths)
    }

    fn path_weight(grid: &CostGrid, path: &[Crucible]) -> f64 {
        path.iter()
            .skip(1)
            .map(|s| f64::from(grid.at(s.pos).unwrap_or_default()))
            .sum()
    }

    #[test]
    fn lava_at_most_three_straight() {
        let grid = CostGrid::parse(LAVA).unwrap();
        let target = grid.last().unwrap();
        let rules = RunLength::new(&grid, 1, 3);
        let path = rules.shortest(Point::ZERO, target).unwrap();
        assert_eq!(path.cost, 102.0);
        assert_eq!(path.states[0], Crucible::start(Point::ZERO));
        assert_eq!(path.states.last().map(|s| s.pos), Some(target));

        let (longest, reversed, _) = runs(&path.states);
        assert!(longest <= 3);
        assert!(!reversed);
        assert_eq!(path_weight(&grid, &path.states), path.cost);
    }

    #[test]
    fn lava_four_to_ten_straight() {
        let grid = CostGrid::parse(LAVA).unwrap();
        let rules = RunLength::new(&grid, 4, 10);
        let path = rules.shortest(Point::ZERO, grid.last().unwrap()).unwrap();
        assert_eq!(path.cost, 94.0);
        let (longest, reversed, lengths) = runs(&path.states);
        assert!(longest <= 10);
        assert!(!reversed);
        assert!(lengths.iter().all(|&l| l >= 4), "{lengths:?}");
    }

    #[test]
    fn must_finish_a_full_run() {
        // Hugging the cheap top row needs eleven straight steps east, one
        // more than allowed, so the route has to dip into the 9s.
        let grid = CostGrid::parse(STRIP).unwrap();
        let rules = RunLength::new(&grid, 4, 10);
        let path = rules.shortest(Point::ZERO, grid.last().unwrap()).unwrap();
        assert_eq!(path.cost, 71.0);
        let (_, _, lengths) = runs(&path.states);
        assert!(lengths.iter().all(|&l| l >= 4), "{lengths:?}");
    }

    #[test]
    fn unconstrained_is_never_worse() {
        let grid = CostGrid::parse(LAVA).unwrap();
        let target = grid.last().unwrap();
        let constrained = RunLength::new(&grid, 1, 3).shortest(Point::ZERO, target).unwrap();

        let moves = GridMoves::cardinal().within(grid.bounds());
        let floor = f64::from(grid.min_weight().unwrap());
        let h = |a: &Point, b: &Point| f64::from(manhattan(*a, *b)) * floor;
        let c = |_: History<'_, Point>, _: &Point, next: &Point| {
            f64::from(grid.at(*next).unwrap_or_default())
        };
        let free = astar(Point::ZERO, target, &h, &c, &moves).unwrap();
        assert!(free.cost <= constrained.cost);
    }

    #[test]
    fn goal_set_matches_best_explicit_goal() {
        // Searching for each concrete arrival state and keeping the cheapest
        // must agree with the goal-set search.
        let grid = CostGrid::parse(LAVA).unwrap();
        let target = grid.last().unwrap();
        let rules = RunLength::new(&grid, 1, 3);
        let h = |a: &Crucible, b: &Crucible| rules.estimate(a, b.pos);

        let mut best = f64::INFINITY;
        for heading in [Heading::East, Heading::South] {
            for run in rules.min_run()..=rules.max_run() {
                let goal = Crucible {
                    pos: target,
                    heading: Some(heading),
                    run,
                };
                match astar(Crucible::start(Point::ZERO), goal, &h, &rules, &rules) {
                    Ok(p) => best = best.min(p.cost),
                    Err(e) => assert_eq!(e, SearchError::NoPathFound),
                }
            }
        }
        let set = rules.shortest(Point::ZERO, target).unwrap();
        assert_eq!(set.cost, best);
    }

    #[test]
    fn start_moves_and_limits() {
        let grid = CostGrid::filled(5, 5, 1);
        let rules = RunLength::new(&grid, 2, 3);
        let empty = HashMap::new();
        let expand = |s: Crucible| {
            let mut buf = Vec::new();
            rules.neighbors(&s, History::new(&empty), &mut buf);
            buf
        };

        // Corner start: only east and south are on the grid.
        let first = expand(Crucible::start(Point::ZERO));
        assert_eq!(first.len(), 2);
        assert!(first.iter().all(|s| s.run == 1));

        // Run 1 < min_run: straight only.
        let s = Crucible {
            pos: Point::new(2, 2),
            heading: Some(Heading::East),
            run: 1,
        };
        assert_eq!(
            expand(s),
            vec![Crucible {
                pos: Point::new(3, 2),
                heading: Some(Heading::East),
                run: 2
            }]
        );

        // Run at max_run: turns only, never back west.
        let s = Crucible { run: 3, ..s };
        let next = expand(s);
        assert_eq!(next.len(), 2);
        assert!(next.iter().all(|n| n.run == 1 && n.pos.y != 2));
    }

    #[test]
    fn trivial_and_unreachable() {
        let grid = CostGrid::parse("19\n91").unwrap();
        let rules = RunLength::new(&grid, 4, 10);
        let here = rules.shortest(Point::new(1, 1), Point::new(1, 1)).unwrap();
        assert_eq!(here.states, vec![Crucible::start(Point::new(1, 1))]);
        assert_eq!(here.cost, 0.0);

        // A 2x2 grid never allows a run of four.
        assert_eq!(
            rules.shortest(Point::ZERO, Point::new(1, 1)).unwrap_err(),
            SearchError::NoPathFound
        );
        assert_eq!(
            rules.shortest(Point::ZERO, Point::new(5, 5)).unwrap_err(),
            SearchError::NoPathFound
        );
    }

    #[test]
    fn budget_applies() {
        let grid = CostGrid::parse(LAVA).unwrap();
        let rules = RunLength::new(&grid, 1, 3);
        let err = rules
            .shortest_with(&PathSearch::with_budget(5), Point::ZERO, grid.last().unwrap())
            .unwrap_err();
        assert_eq!(err, SearchError::BudgetExhausted { limit: 5 });
    }

    #[test]
    fn max_run_is_clamped() {
        let grid = CostGrid::filled(2, 2, 1);
        let rules = RunLength::new(&grid, 3, 1);
        assert_eq!(rules.max_run(), 3);
        assert_eq!(RunLength::new(&grid, 0, 0).max_run(), 1);
    }
}
