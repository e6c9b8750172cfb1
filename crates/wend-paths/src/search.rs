use std::cmp::Ordering;

/// A path returned by a successful search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path<S> {
    /// Every state from start to goal, both included.
    pub states: Vec<S>,
    /// Sum of edge costs along `states`.
    pub cost: f64,
}

impl<S> Path<S> {
    /// Number of states on the path (edges + 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Split into the state sequence and its total cost.
    pub fn into_parts(self) -> (Vec<S>, f64) {
        (self.states, self.cost)
    }
}

/// Tunables for [`PathSearch`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Give up with [`SearchError::BudgetExhausted`](crate::SearchError::BudgetExhausted)
    /// after expanding this many states. `None` searches until the frontier
    /// is exhausted.
    pub max_expansions: Option<usize>,
}

// ---------------------------------------------------------------------------
// Internal frontier entry
// ---------------------------------------------------------------------------

/// Frontier entry, ordered by `f` for use in `BinaryHeap`.
pub(crate) struct Frontier<S> {
    /// `g + h`, the priority.
    pub(crate) f: f64,
    /// Cost from start at the time this entry was pushed.
    pub(crate) g: f64,
    pub(crate) state: S,
}

impl<S: Ord> Ord for Frontier<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and the
        // smaller state first among equal f.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.state.cmp(&self.state))
    }
}

impl<S: Ord> PartialOrd for Frontier<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: Ord> PartialEq for Frontier<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S: Ord> Eq for Frontier<S> {}

// ---------------------------------------------------------------------------
// PathSearch
// ---------------------------------------------------------------------------

/// Entry point for best-first searches.
///
/// A `PathSearch` only carries configuration: every call builds its own
/// frontier and cost maps and drops them on return, so one value can be
/// shared freely and used from several threads at once.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathSearch {
    pub(crate) config: SearchConfig,
}

impl PathSearch {
    /// Create a new `PathSearch` with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Shorthand for a search limited to `limit` expansions.
    pub fn with_budget(limit: usize) -> Self {
        Self::new(SearchConfig {
            max_expansions: Some(limit),
        })
    }

    /// The configuration in use.
    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }
}
