//! Engine-owned per-pane state.
//!
//! One [`PaneContext`] per pane, held in an array parallel to the host's
//! pane list and addressed by the same index. Contexts carry the state the
//! host's property bag does not: the last applied size, the size to restore
//! to after a collapse, and which neighbor absorbed a collapsed pane's
//! space.
//!
//! # Invariants
//!
//! 1. `effective_size >= 0` at all times.
//! 2. `collapsed_into` is `Some` iff `effective_size == 0` and the pane was
//!    driven to zero by the engine, not merely sized to zero by its own
//!    constraints.
//! 3. The registry is rebuilt (all contexts reset) whenever the host's pane
//!    list is structurally mutated.

use crate::store::PaneStore;

/// Mutable per-pane engine state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PaneContext {
    /// Last computed/applied size.
    pub effective_size: f64,
    /// Size to restore to after a collapse; frozen when the pane's size
    /// crosses from positive to zero.
    pub last_non_collapsed_size: Option<f64>,
    /// Index of the pane whose boundary absorbed this pane's space, set when
    /// the engine drives this pane to zero and cleared when it reappears.
    pub collapsed_into: Option<usize>,
}

/// Resolved size bounds for one pane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedBounds {
    pub min: f64,
    pub max: f64,
}

impl ResolvedBounds {
    /// Clamp a size into these bounds.
    #[inline]
    #[must_use]
    pub fn clamp(&self, size: f64) -> f64 {
        size.clamp(self.min, self.max)
    }
}

/// Resolve a pane's declared bounds against a basis length.
///
/// Missing min resolves to 0, missing max to +∞. A max below min is raised
/// to min rather than rejected.
#[must_use]
pub fn resolved_bounds<S: PaneStore + ?Sized>(store: &S, pane: usize, basis: f64) -> ResolvedBounds {
    let min = store
        .min_size(pane)
        .map(|len| len.resolve(basis))
        .unwrap_or(0.0)
        .max(0.0);
    let max = store
        .max_size(pane)
        .map(|len| len.resolve(basis))
        .unwrap_or(f64::INFINITY);
    ResolvedBounds {
        min,
        max: max.max(min),
    }
}

/// Ordered collection of pane contexts.
#[derive(Debug, Clone, Default)]
pub struct PaneRegistry {
    contexts: Vec<PaneContext>,
}

impl PaneRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all contexts and recreate one per pane.
    pub fn rebuild(&mut self, pane_count: usize) {
        self.contexts.clear();
        self.contexts.resize(pane_count, PaneContext::default());
    }

    /// Number of contexts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    /// True when no panes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    /// Access one context.
    #[must_use]
    pub fn get(&self, pane: usize) -> Option<&PaneContext> {
        self.contexts.get(pane)
    }

    /// Mutable access to one context.
    pub fn get_mut(&mut self, pane: usize) -> Option<&mut PaneContext> {
        self.contexts.get_mut(pane)
    }

    /// All contexts in pane order.
    #[must_use]
    pub fn contexts(&self) -> &[PaneContext] {
        &self.contexts
    }

    /// Effective sizes in pane order.
    #[must_use]
    pub fn sizes(&self) -> Vec<f64> {
        self.contexts.iter().map(|c| c.effective_size).collect()
    }

    /// Apply a solved size vector to the contexts.
    ///
    /// Freezes `last_non_collapsed_size` for panes whose size crosses from
    /// positive to zero. `collapsed_into` bookkeeping is left to the collapse
    /// and drag paths, which know whether a zero was engine-driven.
    pub fn apply_sizes(&mut self, sizes: &[f64]) {
        for (context, &size) in self.contexts.iter_mut().zip(sizes) {
            let size = size.max(0.0);
            if context.effective_size > 0.0 && size == 0.0 {
                context.last_non_collapsed_size = Some(context.effective_size);
            }
            context.effective_size = size;
        }
    }
}
