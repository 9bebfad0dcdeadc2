//! Collapse and restore bookkeeping.
//!
//! Collapse is a size transition to zero: the collapsed pane records which
//! neighbor absorbed its space (`collapsed_into`) and the size to come back
//! to (`last_non_collapsed_size`). Restore reverses the transition against
//! the recorded owner. Both run through one shared delta-application routine
//! that clamps to the pair's headroom and flips the host's `is_collapsed`
//! flag only when a pane's size actually crosses the zero boundary.

use tracing::debug;

use splitkit_core::PaneLength;

use crate::handle::{BoundarySide, nearest_visible_after, nearest_visible_at_or_before};
use crate::registry::{PaneRegistry, resolved_bounds};
use crate::store::PaneStore;

/// Find the collapsed pane to reinstate when an expand action targets
/// `owner`'s side of a boundary.
///
/// Scans the contiguous index range strictly between the two visible
/// boundary panes (to the array edge when a side is absent), from the end
/// farthest from the owner inward; the first pane recorded as collapsed into
/// `owner` wins. The scan direction is load-bearing: it decides which of
/// several collapsed panes reappears.
#[must_use]
pub fn restore_candidate<S: PaneStore + ?Sized>(
    store: &S,
    registry: &PaneRegistry,
    left_visible: Option<usize>,
    right_visible: Option<usize>,
    owner: usize,
) -> Option<usize> {
    let lo = left_visible.map_or(0, |left| left + 1);
    let hi = right_visible.unwrap_or_else(|| store.pane_count());
    if lo >= hi {
        return None;
    }

    let matches = |pane: usize| {
        registry
            .get(pane)
            .is_some_and(|ctx| ctx.collapsed_into == Some(owner))
    };
    if left_visible == Some(owner) {
        (lo..hi).rev().find(|&pane| matches(pane))
    } else {
        (lo..hi).find(|&pane| matches(pane))
    }
}

/// Follow `collapsed_into` links from `pane` to a non-collapsed anchor.
///
/// Bounded by the pane count so a corrupt cycle cannot hang the caller;
/// returns `None` when the chain dead-ends without reaching a visible pane.
#[must_use]
pub fn resolve_owner<S: PaneStore + ?Sized>(
    store: &S,
    registry: &PaneRegistry,
    pane: usize,
) -> Option<usize> {
    let mut current = pane;
    for _ in 0..=store.pane_count() {
        if current >= store.pane_count() {
            return None;
        }
        if !store.is_collapsed(current) {
            return Some(current);
        }
        current = registry.get(current)?.collapsed_into?;
    }
    None
}

/// Apply a signed size delta between a pane pair: `prev` changes by
/// `+delta`, `next` by `-delta`.
///
/// The shared commit path for drag and collapse. Callers are responsible
/// for clamping; this routine floors sizes at zero, maintains
/// `last_non_collapsed_size` / `collapsed_into` symmetrically, writes the
/// new sizes back through the store, and flips `is_collapsed` on zero
/// crossings in either direction.
pub(crate) fn commit_pair_delta<S: PaneStore + ?Sized>(
    store: &mut S,
    registry: &mut PaneRegistry,
    prev: usize,
    next: usize,
    delta: f64,
) {
    if !delta.is_finite() || prev == next {
        return;
    }
    let Some(prev_old) = registry.get(prev).map(|c| c.effective_size) else {
        return;
    };
    let Some(next_old) = registry.get(next).map(|c| c.effective_size) else {
        return;
    };

    let updates = [
        (prev, prev_old, (prev_old + delta).max(0.0), next),
        (next, next_old, (next_old - delta).max(0.0), prev),
    ];
    for (pane, old, new, partner) in updates {
        let Some(context) = registry.get_mut(pane) else {
            continue;
        };
        if old > 0.0 && new == 0.0 {
            context.last_non_collapsed_size = Some(old);
            context.collapsed_into = Some(partner);
            context.effective_size = 0.0;
            store.set_collapsed(pane, true);
            debug!(pane, partner, frozen = old, "pane collapsed");
        } else if old == 0.0 && new > 0.0 {
            context.collapsed_into = None;
            context.effective_size = new;
            store.set_collapsed(pane, false);
            debug!(pane, size = new, "pane restored");
        } else {
            context.effective_size = new;
        }
        store.set_size(pane, PaneLength::absolute(new).ok());
    }
}

/// Collapse or restore `collapse_index` against `partner_index`.
///
/// Collapsing drives the pane to zero; restoring brings it back to its
/// frozen pre-collapse size, falling back to its declared size and then to
/// whatever length the other panes leave over. The delta is clamped to the
/// partner's headroom before committing.
pub(crate) fn apply_collapse_for_indices<S: PaneStore + ?Sized>(
    store: &mut S,
    registry: &mut PaneRegistry,
    available: f64,
    collapse_index: usize,
    partner_index: usize,
) {
    if collapse_index == partner_index
        || collapse_index >= store.pane_count()
        || partner_index >= store.pane_count()
    {
        return;
    }
    let Some(effective) = registry.get(collapse_index).map(|c| c.effective_size) else {
        return;
    };
    let Some(partner_size) = registry.get(partner_index).map(|c| c.effective_size) else {
        return;
    };

    let collapsing = effective > 0.0;
    let target = if collapsing {
        0.0
    } else {
        let declared = store
            .size(collapse_index)
            .or_else(|| store.default_size(collapse_index))
            .map(|len| len.resolve(available));
        let fallback = || {
            let others: f64 = (0..store.pane_count())
                .filter(|&pane| pane != collapse_index)
                .map(|pane| initial_size(store, registry, pane, available))
                .sum();
            (available - others).max(0.0)
        };
        let raw = registry
            .get(collapse_index)
            .and_then(|c| c.last_non_collapsed_size)
            .or(declared)
            .unwrap_or_else(fallback);
        resolved_bounds(store, collapse_index, available).clamp(raw)
    };

    let mut magnitude = (target - effective).abs();
    let partner_bounds = resolved_bounds(store, partner_index, available);
    if collapsing {
        // Partner absorbs the space; limited by its max.
        magnitude = magnitude.min((partner_bounds.max - partner_size).max(0.0));
    } else {
        // Partner gives the space back; limited by its min.
        magnitude = magnitude.min((partner_size - partner_bounds.min).max(0.0));
    }
    if magnitude <= 0.0 {
        return;
    }

    let grow = !collapsing;
    let (prev, next, delta) = if collapse_index < partner_index {
        (
            collapse_index,
            partner_index,
            if grow { magnitude } else { -magnitude },
        )
    } else {
        (
            partner_index,
            collapse_index,
            if grow { -magnitude } else { magnitude },
        )
    };
    commit_pair_delta(store, registry, prev, next, delta);
}

/// A pane's resolved initial size: declared explicit/default size, else its
/// current effective size.
fn initial_size<S: PaneStore + ?Sized>(
    store: &S,
    registry: &PaneRegistry,
    pane: usize,
    basis: f64,
) -> f64 {
    store
        .size(pane)
        .or_else(|| store.default_size(pane))
        .map(|len| len.resolve(basis))
        .or_else(|| registry.get(pane).map(|c| c.effective_size))
        .unwrap_or(0.0)
}

/// Expand/collapse action for one side of the handle at `handle`.
///
/// A restore candidate on that side is reinstated against its true owner
/// (resolved through the `collapsed_into` chain). Without a candidate, the
/// side's visible pane is collapsed into the opposite visible pane, provided
/// it is collapsible and resizable. Returns whether anything changed.
pub(crate) fn expand_at_boundary<S: PaneStore + ?Sized>(
    store: &mut S,
    registry: &mut PaneRegistry,
    available: f64,
    handle: usize,
    side: BoundarySide,
) -> bool {
    let left = nearest_visible_at_or_before(store, handle);
    let right = nearest_visible_after(store, handle);
    let owner = match side {
        BoundarySide::Previous => left,
        BoundarySide::Next => right,
    };
    let Some(owner) = owner else {
        return false;
    };

    if let Some(candidate) = restore_candidate(store, registry, left, right, owner) {
        let Some(anchor) = resolve_owner(store, registry, candidate) else {
            return false;
        };
        debug!(candidate, anchor, "restoring collapsed pane");
        apply_collapse_for_indices(store, registry, available, candidate, anchor);
        return true;
    }

    let (Some(left), Some(right)) = (left, right) else {
        return false;
    };
    if !store.collapsible(owner).is_some_and(|c| c.enabled) || !store.is_resizable(owner) {
        return false;
    }
    let partner = if owner == left { right } else { left };
    debug!(pane = owner, partner, "collapsing pane at boundary");
    apply_collapse_for_indices(store, registry, available, owner, partner);
    true
}
