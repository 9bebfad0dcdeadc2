//! Pure size solver for one layout pass.
//!
//! Maps (pane attributes, available length) to a per-pane size vector.
//! Collapsed panes are forced to zero; declared sizes are resolved and
//! clamped; panes with no resolvable size split the remaining length evenly;
//! a bounded normalization pass then reconciles the total against the
//! working length.
//!
//! # Invariants
//!
//! 1. Every non-collapsed pane's output lies in its resolved `[min, max]`.
//! 2. Every collapsed pane's output is exactly 0.
//! 3. The output total matches the working length within
//!    [`NORMALIZATION_EPSILON`] whenever the constraint set permits it;
//!    jointly infeasible sets keep a bounded residual instead of looping.
//!
//! # Failure Modes
//!
//! None. Infeasible or degenerate inputs degrade to clamped best-effort
//! output, never to a panic or error.

use tracing::trace;

use crate::registry::resolved_bounds;
use crate::store::PaneStore;

/// Total-vs-working-length tolerance for the normalization loop.
pub const NORMALIZATION_EPSILON: f64 = 0.5;

/// Hard cap on normalization iterations.
pub const MAX_NORMALIZATION_PASSES: usize = 100;

/// Threshold below which a leftover remainder is ignored.
pub const REMAINDER_EPSILON: f64 = 0.001;

/// Compute per-pane sizes for the given available length.
///
/// `visible_handle_count` is the number of primary (visible) handles this
/// pass; their spacing is carved out of the available length before any
/// distribution. Pure given the store contents.
#[must_use]
pub fn compute_sizes<S: PaneStore + ?Sized>(
    store: &S,
    available_length: f64,
    visible_handle_count: usize,
    handle_spacing: f64,
) -> Vec<f64> {
    let pane_count = store.pane_count();
    if pane_count == 0 {
        return Vec::new();
    }

    let available = if available_length.is_finite() {
        available_length.max(0.0)
    } else {
        0.0
    };
    let working = (available - visible_handle_count as f64 * handle_spacing).max(0.0);

    let bounds: Vec<_> = (0..pane_count)
        .map(|pane| resolved_bounds(store, pane, working))
        .collect();

    // Partition into fixed (resolvable declared size) and flexible panes.
    let mut sizes = vec![0.0_f64; pane_count];
    let mut flexible = Vec::new();
    let mut fixed_total = 0.0;
    for pane in 0..pane_count {
        if store.is_collapsed(pane) {
            continue;
        }
        match store.size(pane).or_else(|| store.default_size(pane)) {
            Some(declared) => {
                let size = bounds[pane].clamp(declared.resolve(working));
                sizes[pane] = size;
                fixed_total += size;
            }
            None => flexible.push(pane),
        }
    }

    let remaining = working - fixed_total;
    if !flexible.is_empty() {
        let share = remaining / flexible.len() as f64;
        for &pane in &flexible {
            sizes[pane] = share;
        }
    } else if remaining.abs() > REMAINDER_EPSILON {
        // All panes fixed: the last visible pane soaks up the remainder,
        // which may be negative.
        if let Some(last) = (0..pane_count).rev().find(|&pane| !store.is_collapsed(pane)) {
            sizes[last] += remaining;
        }
    }

    for pane in 0..pane_count {
        sizes[pane] = if store.is_collapsed(pane) {
            0.0
        } else {
            bounds[pane].clamp(sizes[pane])
        };
    }

    normalize(store, &mut sizes, &bounds, working);
    sizes
}

/// Reconcile the size total against the working length.
///
/// Each pass splits the outstanding delta evenly among the panes still
/// adjustable in the required direction and clamps each to its own bound.
/// Stops early when nothing is adjustable; the residual is accepted.
fn normalize<S: PaneStore + ?Sized>(
    store: &S,
    sizes: &mut [f64],
    bounds: &[crate::registry::ResolvedBounds],
    working: f64,
) {
    for _ in 0..MAX_NORMALIZATION_PASSES {
        let total: f64 = sizes.iter().sum();
        let delta = working - total;
        if delta.abs() <= NORMALIZATION_EPSILON {
            return;
        }

        let adjustable: Vec<usize> = (0..sizes.len())
            .filter(|&pane| !store.is_collapsed(pane))
            .filter(|&pane| {
                if delta > 0.0 {
                    sizes[pane] < bounds[pane].max
                } else {
                    sizes[pane] > bounds[pane].min
                }
            })
            .collect();
        if adjustable.is_empty() {
            trace!(residual = delta, "size normalization left a residual");
            return;
        }

        let share = delta / adjustable.len() as f64;
        for pane in adjustable {
            sizes[pane] = bounds[pane].clamp(sizes[pane] + share);
        }
    }
    trace!("size normalization hit the iteration cap");
}
