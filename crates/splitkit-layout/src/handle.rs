//! Derived per-handle state.
//!
//! Handles sit between adjacent pane pairs (`pane_count - 1` of them) and
//! carry no state of their own: visibility, draggability, and collapse
//! button eligibility are derived fresh each layout pass from the pane
//! attributes and contexts.
//!
//! A contiguous run of collapsed panes is represented by exactly one
//! visible ("primary") handle; the other handles in the run are hidden and
//! excluded from handle-spacing accounting.

use serde::{Deserialize, Serialize};

use crate::collapse::restore_candidate;
use crate::registry::{PaneRegistry, resolved_bounds};
use crate::store::{IconDisplayMode, PaneStore};

/// Which side of a handle an action or pointer refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundarySide {
    /// Toward lower pane indices.
    Previous,
    /// Toward higher pane indices.
    Next,
}

/// Pointer hover over a handle, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleHover {
    /// Index of the hovered handle.
    pub handle: usize,
    /// Which half of the handle the pointer is over, when known.
    pub side: Option<BoundarySide>,
}

/// An eligible collapse/expand button on one side of a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollapseButton {
    /// The pane the action targets (restore candidate or visible neighbor).
    pub target: usize,
    /// Display mode inherited from the target pane.
    pub mode: IconDisplayMode,
}

/// Derived state for one handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandleState {
    /// Whether this handle represents its boundary (at most one per run of
    /// collapsed panes).
    pub is_primary: bool,
    /// Whether a drag session may start on this handle.
    pub is_draggable: bool,
    /// Eligible button acting toward the previous side, if any.
    pub previous_button: Option<CollapseButton>,
    /// Eligible button acting toward the next side, if any.
    pub next_button: Option<CollapseButton>,
}

/// Nearest non-collapsed pane at index `<= pane`.
#[must_use]
pub fn nearest_visible_at_or_before<S: PaneStore + ?Sized>(
    store: &S,
    pane: usize,
) -> Option<usize> {
    (0..=pane.min(store.pane_count().checked_sub(1)?))
        .rev()
        .find(|&i| !store.is_collapsed(i))
}

/// Nearest non-collapsed pane at index `> pane`.
#[must_use]
pub fn nearest_visible_after<S: PaneStore + ?Sized>(store: &S, pane: usize) -> Option<usize> {
    (pane + 1..store.pane_count()).find(|&i| !store.is_collapsed(i))
}

/// Whether the handle at boundary `handle` is the primary one.
///
/// Primary iff it is the handle immediately before the nearest visible pane
/// to its right, or, when no visible pane exists to the right, the handle
/// immediately after the nearest visible pane to its left.
#[must_use]
pub fn is_primary<S: PaneStore + ?Sized>(store: &S, handle: usize) -> bool {
    let right = nearest_visible_after(store, handle);
    match right {
        Some(right) => handle + 1 == right,
        None => nearest_visible_at_or_before(store, handle) == Some(handle),
    }
}

/// Count of primary handles for the current collapse flags.
#[must_use]
pub fn visible_handle_count<S: PaneStore + ?Sized>(store: &S) -> usize {
    let panes = store.pane_count();
    if panes < 2 {
        return 0;
    }
    (0..panes - 1).filter(|&h| is_primary(store, h)).count()
}

/// Whether a drag may operate on the boundary at `handle`.
///
/// Both visible boundary panes must be resizable, and any collapsed pane
/// directly adjacent to the handle must have a resolved minimum of 0 or
/// less, otherwise it cannot be expanded by dragging.
#[must_use]
pub fn is_draggable<S: PaneStore + ?Sized>(store: &S, handle: usize, basis: f64) -> bool {
    let Some(left) = nearest_visible_at_or_before(store, handle) else {
        return false;
    };
    let Some(right) = nearest_visible_after(store, handle) else {
        return false;
    };
    if !store.is_resizable(left) || !store.is_resizable(right) {
        return false;
    }
    for adjacent in [handle, handle + 1] {
        if store.is_collapsed(adjacent) && resolved_bounds(store, adjacent, basis).min > 0.0 {
            return false;
        }
    }
    true
}

/// Derive the full handle state vector for one layout pass.
#[must_use]
pub fn derive_handles<S: PaneStore + ?Sized>(
    store: &S,
    registry: &PaneRegistry,
    basis: f64,
) -> Vec<HandleState> {
    let panes = store.pane_count();
    if panes < 2 {
        return Vec::new();
    }
    (0..panes - 1)
        .map(|handle| {
            let primary = is_primary(store, handle);
            if !primary {
                return HandleState::default();
            }
            HandleState {
                is_primary: true,
                is_draggable: is_draggable(store, handle, basis),
                previous_button: side_button(store, registry, handle, BoundarySide::Previous),
                next_button: side_button(store, registry, handle, BoundarySide::Next),
            }
        })
        .collect()
}

/// Eligible collapse/expand button for one side of a primary handle.
///
/// Eligible when a restore candidate was previously absorbed into that
/// side's visible pane, or when that visible pane is itself collapsible and
/// resizable. The display mode comes from the pane the action targets.
fn side_button<S: PaneStore + ?Sized>(
    store: &S,
    registry: &PaneRegistry,
    handle: usize,
    side: BoundarySide,
) -> Option<CollapseButton> {
    let left = nearest_visible_at_or_before(store, handle);
    let right = nearest_visible_after(store, handle);
    let owner = match side {
        BoundarySide::Previous => left?,
        BoundarySide::Next => right?,
    };

    if let Some(candidate) = restore_candidate(store, registry, left, right, owner) {
        let mode = store
            .collapsible(candidate)
            .map(|c| c.icon_mode)
            .unwrap_or_default();
        return Some(CollapseButton {
            target: candidate,
            mode,
        });
    }

    // Collapsing the owner needs a visible pane on the other side to absorb
    // its space.
    let other = match side {
        BoundarySide::Previous => right,
        BoundarySide::Next => left,
    };
    other?;
    let config = store.collapsible(owner)?;
    if config.enabled && store.is_resizable(owner) {
        Some(CollapseButton {
            target: owner,
            mode: config.icon_mode,
        })
    } else {
        None
    }
}

/// Whether a button should currently be drawn, given pointer hover.
///
/// `Always` ignores hover, `Hidden` is never drawn, and `Hover` requires the
/// pointer over that side of the handle, unless it is the handle's only
/// eligible button, in which case hovering anywhere on the handle suffices.
#[must_use]
pub fn button_is_shown(
    state: &HandleState,
    handle: usize,
    side: BoundarySide,
    hover: Option<HandleHover>,
) -> bool {
    let button = match side {
        BoundarySide::Previous => state.previous_button,
        BoundarySide::Next => state.next_button,
    };
    let Some(button) = button else {
        return false;
    };
    match button.mode {
        IconDisplayMode::Hidden => false,
        IconDisplayMode::Always => true,
        IconDisplayMode::Hover => {
            let Some(hover) = hover else {
                return false;
            };
            if hover.handle != handle {
                return false;
            }
            let only_button = state.previous_button.is_none() || state.next_button.is_none();
            only_button || hover.side == Some(side)
        }
    }
}
