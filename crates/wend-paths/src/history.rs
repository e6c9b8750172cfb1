use std::collections::HashMap;
use std::hash::Hash;

/// Read-only view of the predecessor map built up during a search.
///
/// Cost and neighbor capabilities receive a `History` so that they can look at
/// how the current state was reached. The map records, for every discovered
/// state except the start, the state it was reached from on the best route
/// known so far. Entries may still change as the search finds cheaper routes.
#[derive(Debug)]
pub struct History<'a, S> {
    came_from: &'a HashMap<S, S>,
}

impl<S> Clone for History<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for History<'_, S> {}

impl<'a, S: Eq + Hash> History<'a, S> {
    pub(crate) fn new(came_from: &'a HashMap<S, S>) -> Self {
        Self { came_from }
    }

    /// The state `s` was reached from, `None` for the start or an
    /// undiscovered state.
    #[inline]
    pub fn predecessor(&self, s: &S) -> Option<&'a S> {
        self.came_from.get(s)
    }

    /// Walk the predecessor chain backwards from `s` (exclusive) to the start
    /// (inclusive).
    pub fn ancestors(&self, s: &S) -> Ancestors<'a, S> {
        Ancestors {
            came_from: self.came_from,
            next: self.came_from.get(s),
        }
    }

    /// Whether `s` has a recorded predecessor.
    #[inline]
    pub fn contains(&self, s: &S) -> bool {
        self.came_from.contains_key(s)
    }

    /// Number of states with a recorded predecessor.
    #[inline]
    pub fn len(&self) -> usize {
        self.came_from.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.came_from.is_empty()
    }
}

/// Iterator returned by [`History::ancestors`].
pub struct Ancestors<'a, S> {
    came_from: &'a HashMap<S, S>,
    next: Option<&'a S>,
}

impl<'a, S: Eq + Hash> Iterator for Ancestors<'a, S> {
    type Item = &'a S;

    fn next(&mut self) -> Option<&'a S> {
        let cur = self.next?;
        self.next = self.came_from.get(cur);
        Some(cur)
    }
}

/// Rebuild the path ending at `goal` by following predecessor links back to
/// the start. The returned path runs start → goal.
///
/// Predecessor chains built from non-negative edge costs never loop; a map
/// produced with negative costs may, in which case this does not terminate.
pub fn reconstruct_path<S: Clone + Eq + Hash>(came_from: &HashMap<S, S>, goal: &S) -> Vec<S> {
    let mut path = vec![goal.clone()];
    path.extend(History::new(came_from).ancestors(goal).cloned());
    path.reverse();
    path
}
