use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;

use crate::error::SearchError;
use crate::history::{History, reconstruct_path};
use crate::search::{Frontier, Path, PathSearch};
use crate::traits::{Cost, Heuristic, Neighbors};

impl PathSearch {
    /// Compute the cheapest path from `start` to `goal` using A*.
    ///
    /// Returns the full path (including both endpoints) and its total cost.
    /// When `start == goal` the path is `[start]` with cost 0.
    ///
    /// The result is optimal as long as `heuristic` is admissible and every
    /// cost is non-negative; neither is checked. `neighbors` must yield a
    /// finite set for every reachable state or the search never ends.
    pub fn astar_path<S, H, C, N>(
        &self,
        start: S,
        goal: S,
        heuristic: &H,
        cost: &C,
        neighbors: &N,
    ) -> Result<Path<S>, SearchError>
    where
        S: Clone + Eq + Hash + Ord,
        H: Heuristic<S> + ?Sized,
        C: Cost<S> + ?Sized,
        N: Neighbors<S> + ?Sized,
    {
        self.astar_path_to(
            start,
            |s| *s == goal,
            |s| heuristic.estimate(s, &goal),
            cost,
            neighbors,
        )
    }

    /// A* towards a set of goal states.
    ///
    /// The search stops at the first expanded state for which `is_goal`
    /// holds. `estimate` must not overestimate the cost to the nearest goal.
    /// This is the form to use when the state carries history (heading, run
    /// length, ...) and any of several states at the target counts as
    /// arrival.
    pub fn astar_path_to<S, G, E, C, N>(
        &self,
        start: S,
        is_goal: G,
        estimate: E,
        cost: &C,
        neighbors: &N,
    ) -> Result<Path<S>, SearchError>
    where
        S: Clone + Eq + Hash + Ord,
        G: Fn(&S) -> bool,
        E: Fn(&S) -> f64,
        C: Cost<S> + ?Sized,
        N: Neighbors<S> + ?Sized,
    {
        let mut came_from: HashMap<S, S> = HashMap::new();
        let mut best: HashMap<S, f64> = HashMap::new();
        let mut open: BinaryHeap<Frontier<S>> = BinaryHeap::new();

        best.insert(start.clone(), 0.0);
        open.push(Frontier {
            f: estimate(&start),
            g: 0.0,
            state: start,
        });

        let mut nbuf: Vec<S> = Vec::new();
        let mut expanded = 0usize;

        while let Some(Frontier { g, state: current, .. }) = open.pop() {
            // Skip stale entries.
            if best.get(&current).is_some_and(|&b| g > b) {
                continue;
            }

            if is_goal(&current) {
                log::trace!(
                    "astar: goal reached after {expanded} expansions, {} states discovered",
                    best.len()
                );
                return Ok(Path {
                    states: reconstruct_path(&came_from, &current),
                    cost: g,
                });
            }

            if let Some(limit) = self.config.max_expansions {
                if expanded >= limit {
                    log::debug!("astar: expansion budget of {limit} exhausted");
                    return Err(SearchError::BudgetExhausted { limit });
                }
            }
            expanded += 1;

            nbuf.clear();
            neighbors.neighbors(&current, History::new(&came_from), &mut nbuf);

            for next in nbuf.drain(..) {
                let tentative = g + cost.cost(History::new(&came_from), &current, &next);
                let known = best.get(&next).copied().unwrap_or(f64::INFINITY);
                if tentative < known {
                    came_from.insert(next.clone(), current.clone());
                    best.insert(next.clone(), tentative);
                    open.push(Frontier {
                        f: tentative + estimate(&next),
                        g: tentative,
                        state: next,
                    });
                }
            }
        }

        Err(SearchError::NoPathFound)
    }
}

/// Compute the cheapest path from `start` to `goal` with a default
/// [`PathSearch`]. See [`PathSearch::astar_path`].
pub fn astar<S, H, C, N>(
    start: S,
    goal: S,
    heuristic: &H,
    cost: &C,
    neighbors: &N,
) -> Result<Path<S>, SearchError>
where
    S: Clone + Eq + Hash + Ord,
    H: Heuristic<S> + ?Sized,
    C: Cost<S> + ?Sized,
    N: Neighbors<S> + ?Sized,
{
    PathSearch::default().astar_path(start, goal, heuristic, cost, neighbors)
}
