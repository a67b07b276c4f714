use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::trace;
use thiserror::Error;

use crate::graph::GraphModel;

/// Shared flag for cooperatively aborting a running search from another
/// thread or a signal handler.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Cooperative limits on the exact search. The default is unbounded; the
/// step cap counts attempted node assignments, which with pruning is the
/// unit of work that actually accumulates.
#[derive(Debug, Clone, Default)]
pub struct SearchBudget {
    pub max_steps: Option<u64>,
    pub cancel: Option<CancelFlag>,
}

impl SearchBudget {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_max_steps(max_steps: u64) -> Self {
        Self {
            max_steps: Some(max_steps),
            cancel: None,
        }
    }

    pub fn with_cancel(cancel: CancelFlag) -> Self {
        Self {
            max_steps: None,
            cancel: Some(cancel),
        }
    }

    fn check(&self, steps: u64) -> Result<(), SearchAborted> {
        if let Some(limit) = self.max_steps {
            if steps > limit {
                return Err(SearchAborted { steps });
            }
        }
        if let Some(cancel) = &self.cancel {
            if cancel.is_cancelled() {
                return Err(SearchAborted { steps });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("permutation search aborted after {steps} candidate assignments")]
pub struct SearchAborted {
    pub steps: u64,
}

/// Exact isomorphism test: exhaustive search for a node bijection under
/// which every edge of `left` maps to an edge of `right`. Deterministic,
/// no false results, `O(n! * m)` in the worst case; intended for small
/// graphs only.
pub fn permutation_isomorphic(left: &GraphModel, right: &GraphModel) -> bool {
    // The unbounded budget never aborts.
    permutation_isomorphic_bounded(left, right, &SearchBudget::unbounded()).unwrap_or(false)
}

/// Exact test with cooperative abort, checked once per attempted node
/// assignment.
pub fn permutation_isomorphic_bounded(
    left: &GraphModel,
    right: &GraphModel,
    budget: &SearchBudget,
) -> Result<bool, SearchAborted> {
    if left.node_count() != right.node_count() || left.edge_count() != right.edge_count() {
        return Ok(false);
    }

    // Two empty graphs: the empty bijection preserves nothing and violates
    // nothing.
    let node_count = left.node_count();
    let mut state = SearchState {
        left,
        right,
        mapping: vec![usize::MAX; node_count],
        used: vec![false; node_count],
        budget,
        steps: 0,
    };
    let found = state.extend(0)?;
    if found {
        trace!("accepted bijection {:?}", state.mapping);
    }
    Ok(found)
}

struct SearchState<'a> {
    left: &'a GraphModel,
    right: &'a GraphModel,
    mapping: Vec<usize>,
    used: Vec<bool>,
    budget: &'a SearchBudget,
    steps: u64,
}

impl SearchState<'_> {
    /// Backtracking over candidate images for node `position`, pruning any
    /// partial assignment that already breaks an edge of `left`. Because
    /// edge counts are equal, an edge-preserving injection found at the
    /// leaf is a full isomorphism; no reverse check is needed.
    fn extend(&mut self, position: usize) -> Result<bool, SearchAborted> {
        if position == self.left.node_count() {
            return Ok(true);
        }

        for candidate in self.right.nodes() {
            if self.used[candidate] {
                continue;
            }
            self.steps += 1;
            self.budget.check(self.steps)?;
            if !self.consistent(position, candidate) {
                continue;
            }

            self.mapping[position] = candidate;
            self.used[candidate] = true;
            if self.extend(position + 1)? {
                return Ok(true);
            }
            self.mapping[position] = usize::MAX;
            self.used[candidate] = false;
        }

        Ok(false)
    }

    fn consistent(&self, position: usize, candidate: usize) -> bool {
        if self.left.has_edge(position, position) && !self.right.has_edge(candidate, candidate) {
            return false;
        }
        for prior in 0..position {
            if self.left.has_edge(position, prior)
                && !self.right.has_edge(candidate, self.mapping[prior])
            {
                return false;
            }
        }
        true
    }
}
