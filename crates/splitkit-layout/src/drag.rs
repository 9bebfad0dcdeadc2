//! Interactive resize gesture state.
//!
//! One [`DragContext`] lives for the duration of a single drag gesture on a
//! handle. The engine resolves the pane pair the gesture operates on at
//! drag start, clamps every incoming delta to the pair's headroom, freezes
//! the session while the pointer runs past a bound, and may re-parent the
//! session to a pair further outward when the gesture crosses a collapsed
//! pane.
//!
//! The lifecycle per gesture is `Idle → Active → (Frozen ⇄ Active) →
//! Committed`; a lost pointer capture finalizes exactly like a normal
//! completion at the last accepted delta.

use serde::{Deserialize, Serialize};

use crate::collapse::{resolve_owner, restore_candidate};
use crate::handle::{nearest_visible_after, nearest_visible_at_or_before};
use crate::registry::{PaneRegistry, resolved_bounds};
use crate::store::PaneStore;

/// Lifecycle phase carried on a [`ResizeEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizePhase {
    /// A drag session was established on a handle.
    Started,
    /// An intermediate delta was processed.
    Delta,
    /// The gesture committed (or was force-finalized).
    Completed,
}

/// Outbound resize lifecycle notification.
///
/// `sizes` is the full per-pane size vector reflecting the in-progress or
/// final state, in pane order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizeEvent {
    /// Handle the gesture operates on.
    pub handle: usize,
    /// Lifecycle phase.
    pub phase: ResizePhase,
    /// Per-pane sizes.
    pub sizes: Vec<f64>,
}

/// How intermediate drag deltas are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeBehavior {
    /// Relayout on every delta tick.
    #[default]
    Eager,
    /// Track a preview offset mid-drag; commit sizes only at completion.
    Deferred,
}

/// Ephemeral state of one active drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DragContext {
    /// Handle the gesture started on.
    pub handle: usize,
    /// Pane losing/gaining space on the low-index side.
    pub prev: usize,
    /// Pane on the high-index side.
    pub next: usize,
    /// `prev`'s size when this context was created.
    pub prev_start: f64,
    /// `next`'s size when this context was created.
    pub next_start: f64,
    /// Lower clamp for the axis delta.
    pub min_delta: f64,
    /// Upper clamp for the axis delta.
    pub max_delta: f64,
    /// Whether the session may re-parent across collapsed panes.
    pub allow_switch: bool,
    /// Set while the pointer has run past a bound outside the handle's
    /// hit-zone; the session holds at the bound, re-emitting the last
    /// accepted delta until the raw delta re-enters range.
    pub frozen: bool,
    /// Last accepted (clamped) delta for this context.
    pub accepted_delta: f64,
    /// Portion of `accepted_delta` already committed to the registry.
    pub applied_delta: f64,
    /// Axis offset consumed by earlier contexts of the same gesture.
    pub base_offset: f64,
}

impl DragContext {
    /// Build a context for a resolved pane pair at current sizes.
    pub(crate) fn new<S: PaneStore + ?Sized>(
        store: &S,
        registry: &PaneRegistry,
        handle: usize,
        prev: usize,
        next: usize,
        basis: f64,
        allow_switch: bool,
        base_offset: f64,
    ) -> Self {
        let prev_start = registry.get(prev).map_or(0.0, |c| c.effective_size);
        let next_start = registry.get(next).map_or(0.0, |c| c.effective_size);
        let (min_delta, max_delta) = delta_bounds(store, prev, next, prev_start, next_start, basis);
        Self {
            handle,
            prev,
            next,
            prev_start,
            next_start,
            min_delta,
            max_delta,
            allow_switch,
            frozen: false,
            accepted_delta: 0.0,
            applied_delta: 0.0,
            base_offset,
        }
    }
}

/// Delta clamp range for a pane pair at the given start sizes.
///
/// A positive delta grows `prev` at `next`'s expense; the range keeps both
/// panes inside their own resolved bounds.
pub(crate) fn delta_bounds<S: PaneStore + ?Sized>(
    store: &S,
    prev: usize,
    next: usize,
    prev_start: f64,
    next_start: f64,
    basis: f64,
) -> (f64, f64) {
    let prev_bounds = resolved_bounds(store, prev, basis);
    let next_bounds = resolved_bounds(store, next, basis);
    let min_delta = (prev_bounds.min - prev_start).max(next_start - next_bounds.max);
    let max_delta = (prev_bounds.max - prev_start).min(next_start - next_bounds.min);
    (min_delta, max_delta)
}

/// Whether a pane pair may be operated on by a drag.
///
/// Both panes must be resizable; a collapsed member must additionally have a
/// resolved minimum of zero or less, otherwise dragging cannot expand it.
pub(crate) fn pair_draggable<S: PaneStore + ?Sized>(
    store: &S,
    prev: usize,
    next: usize,
    basis: f64,
) -> bool {
    if prev >= store.pane_count() || next >= store.pane_count() || prev == next {
        return false;
    }
    for pane in [prev, next] {
        if !store.is_resizable(pane) {
            return false;
        }
        if store.is_collapsed(pane) && resolved_bounds(store, pane, basis).min > 0.0 {
            return false;
        }
    }
    true
}

/// Resolve the pane pair a drag on `handle` operates on.
///
/// When the handle spans a collapsed run, a restore-candidate pair on the
/// side nearer the initial pointer offset is preferred (the candidate and
/// its chain-resolved owner), falling back to the immediate adjacent pair
/// and then to a probe one pane further out on either side. An ordinary
/// handle operates only on its own adjacent pair. `None` means no session
/// starts.
pub(crate) fn resolve_drag_pair<S: PaneStore + ?Sized>(
    store: &S,
    registry: &PaneRegistry,
    handle: usize,
    axis_offset: f64,
    basis: f64,
) -> Option<(usize, usize)> {
    let pane_count = store.pane_count();
    if pane_count < 2 || handle + 1 >= pane_count {
        return None;
    }

    let left = nearest_visible_at_or_before(store, handle);
    let right = nearest_visible_after(store, handle);
    let spans_run = left != Some(handle) || right != Some(handle + 1);

    if spans_run {
        // Pointer offset relative to the handle center decides which side's
        // restore candidate is preferred.
        let sides = if axis_offset < 0.0 {
            [left, right]
        } else {
            [right, left]
        };
        for owner in sides.into_iter().flatten() {
            let Some(candidate) = restore_candidate(store, registry, left, right, owner) else {
                continue;
            };
            let Some(anchor) = resolve_owner(store, registry, candidate) else {
                continue;
            };
            let pair = if candidate < anchor {
                (candidate, anchor)
            } else {
                (anchor, candidate)
            };
            if pair_draggable(store, pair.0, pair.1, basis) {
                return Some(pair);
            }
        }
    }

    if pair_draggable(store, handle, handle + 1, basis) {
        return Some((handle, handle + 1));
    }
    if !spans_run {
        // An ordinary handle operates on its own pair or not at all.
        return None;
    }
    // Probe one pane further on either side for a draggable fallback pair.
    if handle >= 1 && pair_draggable(store, handle - 1, handle + 1, basis) {
        return Some((handle - 1, handle + 1));
    }
    if handle + 2 < pane_count && pair_draggable(store, handle, handle + 2, basis) {
        return Some((handle, handle + 2));
    }
    None
}
