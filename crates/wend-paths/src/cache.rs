use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;

use crate::history::History;
use crate::traits::Neighbors;

/// Neighbor generator wrapper that remembers each state's successors.
///
/// The cache belongs to the wrapper, not to a search call, so it survives
/// across searches. Entries are keyed on the state alone: wrap only
/// generators whose output depends on nothing but the state (not on
/// `history`, and not on the goal). Call [`clear`](Self::clear) whenever the
/// wrapped generator's rules change.
///
/// Uses a `RefCell`, so a `Memoized` cannot be shared between threads.
pub struct Memoized<S, N> {
    inner: N,
    cache: RefCell<HashMap<S, Vec<S>>>,
}

impl<S: Clone + Eq + Hash, N: Neighbors<S>> Memoized<S, N> {
    pub fn new(inner: N) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// The wrapped generator.
    #[inline]
    pub fn inner(&self) -> &N {
        &self.inner
    }

    /// Number of states with cached successors.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        let mut cache = self.cache.borrow_mut();
        log::debug!("memoized neighbors: dropping {} cached states", cache.len());
        cache.clear();
    }

    /// Unwrap, discarding the cache.
    pub fn into_inner(self) -> N {
        self.inner
    }
}

impl<S: Clone + Eq + Hash, N: Neighbors<S>> Neighbors<S> for Memoized<S, N> {
    fn neighbors(&self, current: &S, history: History<'_, S>, buf: &mut Vec<S>) {
        if let Some(hit) = self.cache.borrow().get(current) {
            buf.extend_from_slice(hit);
            return;
        }
        let from = buf.len();
        self.inner.neighbors(current, history, buf);
        self.cache
            .borrow_mut()
            .insert(current.clone(), buf[from..].to_vec());
    }
}
