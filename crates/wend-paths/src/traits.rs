use crate::history::History;

/// Estimated remaining cost from `current` to `goal`.
///
/// Must never overestimate the true cost (admissible) for the returned path
/// to be optimal, and should satisfy `h(a) <= cost(a, b) + h(b)` across every
/// edge (consistent) so that expanded states are never reopened. Neither
/// property is checked.
pub trait Heuristic<S> {
    fn estimate(&self, current: &S, goal: &S) -> f64;
}

/// Cost of the edge `current -> next`. Must be >= 0.
///
/// `history` exposes how `current` was reached, so costs may depend on more
/// than the two endpoints. The search keys its bookkeeping on state identity
/// alone; any history a cost relies on for correctness belongs in the state.
pub trait Cost<S> {
    fn cost(&self, history: History<'_, S>, current: &S, next: &S) -> f64;
}

/// Successor enumeration.
///
/// Append the states reachable from `current` into `buf`. The engine clears
/// `buf` before calling. The set appended must be finite.
pub trait Neighbors<S> {
    fn neighbors(&self, current: &S, history: History<'_, S>, buf: &mut Vec<S>);
}

impl<S, F> Heuristic<S> for F
where
    F: Fn(&S, &S) -> f64,
{
    #[inline]
    fn estimate(&self, current: &S, goal: &S) -> f64 {
        self(current, goal)
    }
}

impl<S, F> Cost<S> for F
where
    F: Fn(History<'_, S>, &S, &S) -> f64,
{
    #[inline]
    fn cost(&self, history: History<'_, S>, current: &S, next: &S) -> f64 {
        self(history, current, next)
    }
}

impl<S, F> Neighbors<S> for F
where
    F: Fn(&S, History<'_, S>, &mut Vec<S>),
{
    #[inline]
    fn neighbors(&self, current: &S, history: History<'_, S>, buf: &mut Vec<S>) {
        self(current, history, buf)
    }
}
