//! Pipeline-stage abstraction over the host's incremental-computation graph.
//!
//! The host graph is modeled at its interface boundary: a [`Stage`] is a
//! pure function with equality-based memoization and a change flag, and
//! the absent-element filter composes over stages without adding any
//! caching policy of its own.

/// Result of running a stage: the value plus whether it differs from the
/// previous run's output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutput<T> {
    /// The stage's output value
    pub value: T,

    /// `false` when the output equals the previous run's output
    pub changed: bool,
}

/// A memoized computation stage
///
/// Caches the last (input, output) pair. Re-running with an equal input
/// returns the cached output without recomputation; a new input recomputes
/// and compares outputs to set the change flag. The first run always
/// reports a change.
pub struct Stage<I, O> {
    compute: Box<dyn Fn(&I) -> O>,
    cached: Option<(I, O)>,
}

impl<I, O> Stage<I, O>
where
    I: Clone + PartialEq,
    O: Clone + PartialEq,
{
    /// Create a stage from a pure computation
    pub fn new(compute: impl Fn(&I) -> O + 'static) -> Self {
        Self {
            compute: Box::new(compute),
            cached: None,
        }
    }

    /// Run the stage for the given input
    pub fn run(&mut self, input: &I) -> StageOutput<O> {
        if let Some((cached_input, cached_output)) = &self.cached {
            if cached_input == input {
                return StageOutput {
                    value: cached_output.clone(),
                    changed: false,
                };
            }
        }
        let value = (self.compute)(input);
        let changed = self
            .cached
            .as_ref()
            .is_none_or(|(_, previous)| *previous != value);
        self.cached = Some((input.clone(), value.clone()));
        StageOutput { value, changed }
    }
}

impl<I, T> Stage<I, Vec<Option<T>>>
where
    I: Clone + PartialEq + 'static,
    T: Clone + PartialEq + 'static,
{
    /// Compose the absent-element filter after this stage
    ///
    /// Memoization stays keyed on the stage input and the change flag
    /// still reflects output equality, so the filter is transparent to
    /// the substrate's caching.
    #[must_use]
    pub fn filter_absent(self) -> Stage<I, Vec<T>> {
        let Stage { compute, .. } = self;
        Stage::new(move |input: &I| filter_absent(compute(input)))
    }
}

/// Keep only the present elements of a sequence, preserving relative order
///
/// Behaves identically for value and heap-allocated element types; a pure,
/// stateless per-element predicate.
pub fn filter_absent<T>(items: impl IntoIterator<Item = Option<T>>) -> Vec<T> {
    items.into_iter().flatten().collect()
}
