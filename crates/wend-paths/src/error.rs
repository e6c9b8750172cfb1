use std::fmt;

/// Reasons a search can end without a path.
///
/// Both are ordinary outcomes: callers commonly try several goals or
/// configurations and keep the best success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchError {
    /// The frontier emptied before any goal state was reached.
    NoPathFound,
    /// The configured expansion limit was hit first.
    BudgetExhausted { limit: usize },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPathFound => write!(f, "no path exists between start and goal"),
            Self::BudgetExhausted { limit } => {
                write!(f, "search gave up after {limit} expansions")
            }
        }
    }
}

impl std::error::Error for SearchError {}
