//! Bounds on how much of the graph a single traversal may touch.

/// Default cap on users marked visited by one traversal.
pub const DEFAULT_MAX_VISITED: usize = 100_000;

/// Per-traversal resource bounds.
///
/// `max_depth` is a search horizon: users further than this from the start
/// are never expanded, so a target beyond it reads as "no connection".
/// `max_visited` is a hard budget: crossing it aborts the traversal with an
/// error instead of returning a possibly wrong answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalLimits {
    max_depth: Option<usize>,
    max_visited: usize,
}

impl TraversalLimits {
    /// Build limits from explicit values. A `max_visited` of zero is raised
    /// to one so the start user can always be recorded.
    pub fn new(max_depth: Option<usize>, max_visited: usize) -> Self {
        Self {
            max_depth,
            max_visited: max_visited.max(1),
        }
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    pub fn max_visited(&self) -> usize {
        self.max_visited
    }

    /// Whether users at `depth` may have their neighbours fetched.
    pub(crate) fn can_expand(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth < max)
    }
}

impl Default for TraversalLimits {
    fn default() -> Self {
        Self::new(None, DEFAULT_MAX_VISITED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, 0, true)]
    #[case(None, 10_000, true)]
    #[case(Some(2), 1, true)]
    #[case(Some(2), 2, false)]
    #[case(Some(0), 0, false)]
    fn expansion_respects_depth_horizon(
        #[case] max_depth: Option<usize>,
        #[case] depth: usize,
        #[case] expected: bool,
    ) {
        let limits = TraversalLimits::new(max_depth, DEFAULT_MAX_VISITED);
        assert_eq!(limits.can_expand(depth), expected);
    }

    #[rstest]
    fn zero_visit_budget_is_raised_to_one() {
        assert_eq!(TraversalLimits::new(None, 0).max_visited(), 1);
    }

    #[rstest]
    fn defaults_are_unbounded_depth() {
        let limits = TraversalLimits::default();
        assert_eq!(limits.max_depth(), None);
        assert_eq!(limits.max_visited(), DEFAULT_MAX_VISITED);
    }
}
