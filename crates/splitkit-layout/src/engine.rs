//! Splitter engine facade.
//!
//! [`SplitterEngine`] owns a [`PaneStore`], the per-pane registry, the
//! derived handle states, and at most one drag session. Hosts drive it with
//! measure/arrange calls and pointer notifications; it answers with pane and
//! handle rectangles and resize lifecycle events.
//!
//! The engine is single-threaded by construction. Re-entrancy is handled by
//! simple rules: a collapse request during an active drag is refused, and a
//! drag start while another session is active is ignored.
//!
//! # Invariants
//!
//! 1. At most one [`DragContext`] exists at a time.
//! 2. Handle states are refreshed after every mutation that can change
//!    collapse flags or sizes.
//! 3. `pane_rects.len() == pane_count` and
//!    `handle_rects.len() == pane_count - 1` after every arrange; hidden
//!    handles get zero-length rects.

use tracing::debug;

use splitkit_core::{Orientation, Point, Rect, Size};

use crate::collapse::{commit_pair_delta, expand_at_boundary};
use crate::drag::{DragContext, ResizeBehavior, ResizeEvent, ResizePhase, pair_draggable, resolve_drag_pair};
use crate::handle::{
    BoundarySide, HandleHover, HandleState, button_is_shown, derive_handles,
    nearest_visible_after, nearest_visible_at_or_before, visible_handle_count,
};
use crate::registry::{PaneContext, PaneRegistry, resolved_bounds};
use crate::solver::compute_sizes;
use crate::store::PaneStore;

/// Result of one arrange pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Arrangement {
    /// One rect per pane, in pane order. Collapsed panes get zero-length
    /// rects at their boundary position.
    pub pane_rects: Vec<Rect>,
    /// One rect per handle (`pane_count - 1`). Non-primary handles get
    /// zero-length rects.
    pub handle_rects: Vec<Rect>,
}

/// Layout and interaction engine for one splitter.
#[derive(Debug)]
pub struct SplitterEngine<S: PaneStore> {
    store: S,
    orientation: Orientation,
    handle_spacing: f64,
    resize_behavior: ResizeBehavior,
    registry: PaneRegistry,
    handles: Vec<HandleState>,
    drag: Option<DragContext>,
    /// Working length of the last arrange pass; the basis for every
    /// percent resolution between arranges.
    working: f64,
}

impl<S: PaneStore> SplitterEngine<S> {
    /// Create an engine over a pane store with default settings
    /// (horizontal, zero handle spacing, eager resize).
    #[must_use]
    pub fn new(store: S) -> Self {
        let mut registry = PaneRegistry::new();
        registry.rebuild(store.pane_count());
        Self {
            store,
            orientation: Orientation::default(),
            handle_spacing: 0.0,
            resize_behavior: ResizeBehavior::default(),
            registry,
            handles: Vec::new(),
            drag: None,
            working: 0.0,
        }
    }

    /// Set the split orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the on-axis length reserved for each primary handle.
    ///
    /// Non-finite or negative spacing is treated as zero.
    #[must_use]
    pub fn with_handle_spacing(mut self, spacing: f64) -> Self {
        self.handle_spacing = if spacing.is_finite() { spacing.max(0.0) } else { 0.0 };
        self
    }

    /// Set how intermediate drag deltas are applied.
    #[must_use]
    pub fn with_resize_behavior(mut self, behavior: ResizeBehavior) -> Self {
        self.resize_behavior = behavior;
        self
    }

    /// Borrow the pane store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutably borrow the pane store.
    ///
    /// Call [`rebuild`](Self::rebuild) afterwards if panes were added,
    /// removed, or reordered.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Split orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// On-axis length of each primary handle.
    #[must_use]
    pub fn handle_spacing(&self) -> f64 {
        self.handle_spacing
    }

    /// Discard all per-pane state after a structural pane-list change.
    ///
    /// Cancels any active drag; collapse bookkeeping is reset and will be
    /// re-derived on the next arrange.
    pub fn rebuild(&mut self) {
        self.drag = None;
        self.registry.rebuild(self.store.pane_count());
        self.handles.clear();
    }

    /// Per-pane contexts in pane order.
    #[must_use]
    pub fn contexts(&self) -> &[PaneContext] {
        self.registry.contexts()
    }

    /// Effective pane sizes from the last layout or interaction.
    #[must_use]
    pub fn sizes(&self) -> Vec<f64> {
        self.registry.sizes()
    }

    /// Derived handle states from the last arrange or interaction.
    #[must_use]
    pub fn handle_states(&self) -> &[HandleState] {
        &self.handles
    }

    /// Whether a drag session is currently active.
    #[must_use]
    pub fn is_drag_active(&self) -> bool {
        self.drag.is_some()
    }

    /// Desired size for the given available space.
    ///
    /// A finite main axis is filled as-is. An unbounded main axis reports
    /// the sum of resolvable declared sizes plus spacing for the visible
    /// handles; percent sizes resolve to zero with no basis to resolve
    /// against. An unbounded cross axis reports zero.
    #[must_use]
    pub fn measure(&self, available: Size) -> Size {
        let length = self.orientation.length_of(available);
        let cross = self.orientation.cross_of(available);
        let cross = if cross.is_finite() { cross.max(0.0) } else { 0.0 };
        let length = if length.is_finite() {
            length.max(0.0)
        } else {
            let mut total = visible_handle_count(&self.store) as f64 * self.handle_spacing;
            for pane in 0..self.store.pane_count() {
                if self.store.is_collapsed(pane) {
                    continue;
                }
                if let Some(declared) = self
                    .store
                    .size(pane)
                    .or_else(|| self.store.default_size(pane))
                {
                    total += resolved_bounds(&self.store, pane, 0.0).clamp(declared.resolve(0.0));
                }
            }
            total
        };
        self.orientation.pack_size(length, cross)
    }

    /// Run one layout pass and position every pane and handle.
    pub fn arrange(&mut self, final_size: Size) -> Arrangement {
        let pane_count = self.store.pane_count();
        if self.registry.len() != pane_count {
            self.rebuild();
        }

        let length = self.orientation.length_of(final_size);
        let cross = self.orientation.cross_of(final_size);
        let cross = if cross.is_finite() { cross.max(0.0) } else { 0.0 };

        let visible = visible_handle_count(&self.store);
        let sizes = compute_sizes(&self.store, length, visible, self.handle_spacing);
        self.registry.apply_sizes(&sizes);
        let available = if length.is_finite() { length.max(0.0) } else { 0.0 };
        self.working = (available - visible as f64 * self.handle_spacing).max(0.0);
        self.handles = derive_handles(&self.store, &self.registry, self.working);

        let mut pane_rects = Vec::with_capacity(pane_count);
        let mut handle_rects = Vec::with_capacity(pane_count.saturating_sub(1));
        let mut offset = 0.0;
        for pane in 0..pane_count {
            pane_rects.push(self.orientation.pack_rect(offset, sizes[pane], cross));
            offset += sizes[pane];
            if pane + 1 < pane_count {
                let spacing = if self.handles[pane].is_primary {
                    self.handle_spacing
                } else {
                    0.0
                };
                handle_rects.push(self.orientation.pack_rect(offset, spacing, cross));
                offset += spacing;
            }
        }
        Arrangement {
            pane_rects,
            handle_rects,
        }
    }

    /// Whether the collapse button on one side of a handle should render,
    /// given the current pointer hover.
    #[must_use]
    pub fn collapse_button_visible(
        &self,
        handle: usize,
        side: BoundarySide,
        hover: Option<HandleHover>,
    ) -> bool {
        self.handles
            .get(handle)
            .is_some_and(|state| button_is_shown(state, handle, side, hover))
    }

    /// Handle a collapse/expand button press on one side of a handle.
    ///
    /// Refused while a drag is active. Returns a completed resize event when
    /// anything changed.
    pub fn on_collapse_requested(
        &mut self,
        handle: usize,
        side: BoundarySide,
    ) -> Option<ResizeEvent> {
        if self.drag.is_some() {
            debug!(handle, "collapse request refused during active drag");
            return None;
        }
        if !expand_at_boundary(
            &mut self.store,
            &mut self.registry,
            self.working,
            handle,
            side,
        ) {
            return None;
        }
        self.refresh_handles();
        Some(ResizeEvent {
            handle,
            phase: ResizePhase::Completed,
            sizes: self.registry.sizes(),
        })
    }

    /// Collapse/expand toward the previous side of a handle.
    pub fn on_collapse_previous_requested(&mut self, handle: usize) -> Option<ResizeEvent> {
        self.on_collapse_requested(handle, BoundarySide::Previous)
    }

    /// Collapse/expand toward the next side of a handle.
    pub fn on_collapse_next_requested(&mut self, handle: usize) -> Option<ResizeEvent> {
        self.on_collapse_requested(handle, BoundarySide::Next)
    }

    /// Start a drag session on a handle.
    ///
    /// `pointer_offset` is the pointer position relative to the handle
    /// center; when the handle spans a collapsed run it decides which side's
    /// restore candidate the session prefers. Returns `None` when a session
    /// is already active or no operable pane pair exists.
    pub fn on_drag_started(&mut self, handle: usize, pointer_offset: Point) -> Option<ResizeEvent> {
        if self.drag.is_some() {
            return None;
        }
        let axis_offset = if pointer_offset.is_finite() {
            self.orientation.axis_component(pointer_offset)
        } else {
            0.0
        };
        let (prev, next) = resolve_drag_pair(
            &self.store,
            &self.registry,
            handle,
            axis_offset,
            self.working,
        )?;
        let allow_switch = self.resize_behavior == ResizeBehavior::Eager;
        let context = DragContext::new(
            &self.store,
            &self.registry,
            handle,
            prev,
            next,
            self.working,
            allow_switch,
            0.0,
        );
        debug!(
            handle,
            prev,
            next,
            min_delta = context.min_delta,
            max_delta = context.max_delta,
            "drag session started"
        );
        self.drag = Some(context);
        Some(ResizeEvent {
            handle,
            phase: ResizePhase::Started,
            sizes: self.registry.sizes(),
        })
    }

    /// Process an intermediate drag delta.
    ///
    /// `vector` is the cumulative pointer displacement since drag start; only
    /// its main-axis component matters. Non-finite vectors are ignored and
    /// the last accepted state is re-reported. Returns `None` when no
    /// session is active.
    pub fn on_drag_delta(&mut self, vector: Point) -> Option<ResizeEvent> {
        self.drag.as_ref()?;
        if vector.is_finite() {
            self.process_delta(vector);
        }
        let handle = self.drag.as_ref()?.handle;
        Some(ResizeEvent {
            handle,
            phase: ResizePhase::Delta,
            sizes: self.current_sizes(),
        })
    }

    /// Commit the drag session at its final delta.
    ///
    /// A non-finite vector is ignored and the session commits at the last
    /// accepted delta instead.
    pub fn on_drag_completed(&mut self, vector: Point) -> Option<ResizeEvent> {
        self.drag.as_ref()?;
        if vector.is_finite() {
            self.process_delta(vector);
        }
        self.finalize()
    }

    /// Commit the drag session at the last accepted delta.
    ///
    /// For lost pointer capture and similar interruptions; equivalent to a
    /// normal completion without a final delta.
    pub fn force_finalize(&mut self) -> Option<ResizeEvent> {
        self.finalize()
    }

    /// Clamp, freeze, or re-parent the session for one cumulative delta.
    fn process_delta(&mut self, vector: Point) {
        if self.drag.is_none() {
            return;
        }
        let raw_total = self.orientation.axis_component(vector);
        // A re-parent re-enters the loop with a fresh context; bounded by the
        // pane count since every switch consumes at least one pane.
        let mut hops = self.store.pane_count() + 1;
        loop {
            let Some(ctx) = self.drag.as_mut() else { return };
            let raw = raw_total - ctx.base_offset;
            if (ctx.min_delta..=ctx.max_delta).contains(&raw) {
                ctx.frozen = false;
                ctx.accepted_delta = raw;
                break;
            }

            let clamped = raw.clamp(ctx.min_delta, ctx.max_delta);
            let saturated_grow = raw > ctx.max_delta && ctx.max_delta <= 0.0;
            let saturated_shrink = raw < ctx.min_delta && ctx.min_delta >= 0.0;
            if ctx.allow_switch && hops > 0 && (saturated_grow || saturated_shrink) {
                hops -= 1;
                let side = if saturated_grow {
                    BoundarySide::Next
                } else {
                    BoundarySide::Previous
                };
                if self.switch_context(side) {
                    continue;
                }
            }

            let Some(ctx) = self.drag.as_mut() else { return };
            // Peg at the bound; freeze while the pointer is past the bound
            // and outside the handle's hit-zone, so further deltas re-emit
            // the bound until the raw delta comes back into range.
            ctx.accepted_delta = clamped;
            ctx.frozen = (raw - clamped).abs() > self.handle_spacing;
            break;
        }
        if self.resize_behavior == ResizeBehavior::Eager {
            self.commit_accepted();
        }
    }

    /// Re-parent the session one pane pair outward across a collapsed pane.
    ///
    /// The retired context is committed at its extreme; the axis offset it
    /// consumed carries over as the new context's base offset.
    fn switch_context(&mut self, side: BoundarySide) -> bool {
        let Some(ctx) = self.drag else {
            return false;
        };
        let pair = match side {
            BoundarySide::Next => {
                let beyond = ctx.next + 1;
                if beyond >= self.store.pane_count() || !self.store.is_collapsed(beyond) {
                    return false;
                }
                let Some(new_next) = nearest_visible_after(&self.store, ctx.next) else {
                    return false;
                };
                (ctx.prev, new_next)
            }
            BoundarySide::Previous => {
                let Some(beyond) = ctx.prev.checked_sub(1) else {
                    return false;
                };
                if !self.store.is_collapsed(beyond) {
                    return false;
                }
                let Some(new_prev) = nearest_visible_at_or_before(&self.store, beyond) else {
                    return false;
                };
                (new_prev, ctx.next)
            }
        };
        if !pair_draggable(&self.store, pair.0, pair.1, self.working) {
            return false;
        }

        let extreme = match side {
            BoundarySide::Next => ctx.max_delta,
            BoundarySide::Previous => ctx.min_delta,
        };
        if let Some(current) = self.drag.as_mut() {
            current.frozen = false;
            current.accepted_delta = extreme;
        }
        self.commit_accepted();

        debug!(
            handle = ctx.handle,
            from_prev = ctx.prev,
            from_next = ctx.next,
            to_prev = pair.0,
            to_next = pair.1,
            "drag session re-parented across collapsed pane"
        );
        self.drag = Some(DragContext::new(
            &self.store,
            &self.registry,
            ctx.handle,
            pair.0,
            pair.1,
            self.working,
            ctx.allow_switch,
            ctx.base_offset + extreme,
        ));
        self.refresh_handles();
        true
    }

    /// Commit the not-yet-applied part of the accepted delta to the panes.
    fn commit_accepted(&mut self) {
        let Some(ctx) = self.drag.as_mut() else { return };
        let delta = ctx.accepted_delta - ctx.applied_delta;
        ctx.applied_delta = ctx.accepted_delta;
        let (prev, next) = (ctx.prev, ctx.next);
        if delta != 0.0 {
            commit_pair_delta(&mut self.store, &mut self.registry, prev, next, delta);
            self.refresh_handles();
        }
    }

    /// Commit pending work, snapshot restore sizes, and end the session.
    fn finalize(&mut self) -> Option<ResizeEvent> {
        let ctx = self.drag?;
        self.commit_accepted();
        self.drag = None;
        for pane in [ctx.prev, ctx.next] {
            if let Some(context) = self.registry.get_mut(pane)
                && context.effective_size > 0.0
            {
                context.last_non_collapsed_size = Some(context.effective_size);
            }
        }
        self.refresh_handles();
        debug!(handle = ctx.handle, "drag session committed");
        Some(ResizeEvent {
            handle: ctx.handle,
            phase: ResizePhase::Completed,
            sizes: self.registry.sizes(),
        })
    }

    /// Effective sizes with any uncommitted drag preview folded in.
    fn current_sizes(&self) -> Vec<f64> {
        let mut sizes = self.registry.sizes();
        if let Some(ctx) = &self.drag {
            let pending = ctx.accepted_delta - ctx.applied_delta;
            if pending != 0.0 {
                if let Some(size) = sizes.get_mut(ctx.prev) {
                    *size = (*size + pending).max(0.0);
                }
                if let Some(size) = sizes.get_mut(ctx.next) {
                    *size = (*size - pending).max(0.0);
                }
            }
        }
        sizes
    }

    fn refresh_handles(&mut self) {
        self.handles = derive_handles(&self.store, &self.registry, self.working);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{CollapsibleConfig, PaneDeclaration, PaneList};
    use splitkit_core::PaneLength;

    fn abs(value: f64) -> PaneLength {
        PaneLength::absolute(value).unwrap()
    }

    fn engine(panes: impl IntoIterator<Item = PaneDeclaration>, spacing: f64) -> SplitterEngine<PaneList> {
        SplitterEngine::new(PaneList::new(panes)).with_handle_spacing(spacing)
    }

    #[test]
    fn arrange_positions_panes_and_handles() {
        let mut engine = engine(
            [
                PaneDeclaration::flexible().with_size(abs(300.0)),
                PaneDeclaration::flexible().with_size(abs(300.0)),
            ],
            2.0,
        );
        let arrangement = engine.arrange(Size::new(640.0, 480.0));
        assert_eq!(arrangement.pane_rects.len(), 2);
        assert_eq!(arrangement.handle_rects.len(), 1);
        assert_eq!(arrangement.pane_rects[0], Rect::new(0.0, 0.0, 300.0, 480.0));
        assert_eq!(arrangement.handle_rects[0], Rect::new(300.0, 0.0, 2.0, 480.0));
        assert_eq!(arrangement.pane_rects[1], Rect::new(302.0, 0.0, 338.0, 480.0));
        assert_eq!(engine.sizes(), vec![300.0, 338.0]);
    }

    #[test]
    fn arrange_is_vertical_aware() {
        let mut engine = engine(
            [PaneDeclaration::flexible(), PaneDeclaration::flexible()],
            4.0,
        )
        .with_orientation(Orientation::Vertical);
        let arrangement = engine.arrange(Size::new(200.0, 404.0));
        assert_eq!(arrangement.pane_rects[0], Rect::new(0.0, 0.0, 200.0, 200.0));
        assert_eq!(arrangement.handle_rects[0], Rect::new(0.0, 200.0, 200.0, 4.0));
        assert_eq!(arrangement.pane_rects[1], Rect::new(0.0, 204.0, 200.0, 200.0));
    }

    #[test]
    fn measure_fills_a_finite_axis() {
        let engine = engine(
            [PaneDeclaration::flexible(), PaneDeclaration::flexible()],
            2.0,
        );
        assert_eq!(
            engine.measure(Size::new(640.0, 480.0)),
            Size::new(640.0, 480.0)
        );
    }

    #[test]
    fn measure_sums_declared_sizes_on_an_unbounded_axis() {
        let engine = engine(
            [
                PaneDeclaration::flexible().with_size(abs(120.0)),
                PaneDeclaration::flexible().with_default_size(abs(80.0)),
                // Percent resolves to zero with no basis.
                PaneDeclaration::flexible().with_size(PaneLength::percent(50.0).unwrap()),
            ],
            4.0,
        );
        let measured = engine.measure(Size::new(f64::INFINITY, 300.0));
        assert_eq!(measured, Size::new(120.0 + 80.0 + 2.0 * 4.0, 300.0));
    }

    #[test]
    fn drag_is_clamped_to_pair_headroom() {
        // 400 working length, A min 50: dragging left past the min clamps.
        let mut engine = engine(
            [
                PaneDeclaration::flexible()
                    .with_size(abs(200.0))
                    .with_min_size(abs(50.0)),
                PaneDeclaration::flexible().with_size(abs(200.0)),
            ],
            0.0,
        );
        engine.arrange(Size::new(400.0, 100.0));
        let started = engine.on_drag_started(0, Point::ZERO).unwrap();
        assert_eq!(started.phase, ResizePhase::Started);

        let delta = engine.on_drag_delta(Point::new(-300.0, 0.0)).unwrap();
        assert_eq!(delta.sizes, vec![50.0, 350.0]);

        let done = engine.on_drag_completed(Point::new(-300.0, 0.0)).unwrap();
        assert_eq!(done.phase, ResizePhase::Completed);
        assert_eq!(done.sizes, vec![50.0, 350.0]);
        assert!(!engine.is_drag_active());
        // Committed sizes are written back to the store.
        assert_eq!(engine.store().size(0).unwrap().value(), 50.0);
        assert_eq!(engine.store().size(1).unwrap().value(), 350.0);
    }

    #[test]
    fn deferred_mode_previews_without_committing() {
        let mut engine = engine(
            [
                PaneDeclaration::flexible().with_size(abs(200.0)),
                PaneDeclaration::flexible().with_size(abs(200.0)),
            ],
            0.0,
        )
        .with_resize_behavior(ResizeBehavior::Deferred);
        engine.arrange(Size::new(400.0, 100.0));
        engine.on_drag_started(0, Point::ZERO).unwrap();

        let delta = engine.on_drag_delta(Point::new(60.0, 0.0)).unwrap();
        assert_eq!(delta.sizes, vec![260.0, 140.0]);
        // Nothing committed yet.
        assert_eq!(engine.sizes(), vec![200.0, 200.0]);
        assert_eq!(engine.store().size(0).unwrap().value(), 200.0);

        let done = engine.on_drag_completed(Point::new(60.0, 0.0)).unwrap();
        assert_eq!(done.sizes, vec![260.0, 140.0]);
        assert_eq!(engine.sizes(), vec![260.0, 140.0]);
        assert_eq!(engine.store().size(0).unwrap().value(), 260.0);
    }

    #[test]
    fn freeze_holds_the_last_accepted_delta() {
        // Spacing 10 gives the hit-zone some depth: overshoot beyond the
        // bound by more than 10 freezes the session.
        let mut engine = engine(
            [
                PaneDeclaration::flexible()
                    .with_size(abs(200.0))
                    .with_min_size(abs(150.0)),
                PaneDeclaration::flexible(),
            ],
            10.0,
        );
        engine.arrange(Size::new(410.0, 100.0));
        engine.on_drag_started(0, Point::ZERO).unwrap();

        // Within the hit-zone past the bound: pegged at the bound.
        let pegged = engine.on_drag_delta(Point::new(-55.0, 0.0)).unwrap();
        assert_eq!(pegged.sizes, vec![150.0, 250.0]);

        // Far past the bound: frozen, still at the bound.
        let frozen = engine.on_drag_delta(Point::new(-300.0, 0.0)).unwrap();
        assert_eq!(frozen.sizes, vec![150.0, 250.0]);

        // Back in range: resumes from the raw delta.
        let resumed = engine.on_drag_delta(Point::new(-20.0, 0.0)).unwrap();
        assert_eq!(resumed.sizes, vec![180.0, 220.0]);
    }

    #[test]
    fn force_finalize_commits_the_last_accepted_delta() {
        let mut engine = engine(
            [
                PaneDeclaration::flexible().with_size(abs(200.0)),
                PaneDeclaration::flexible().with_size(abs(200.0)),
            ],
            0.0,
        );
        engine.arrange(Size::new(400.0, 100.0));
        engine.on_drag_started(0, Point::ZERO).unwrap();
        engine.on_drag_delta(Point::new(30.0, 0.0)).unwrap();

        let done = engine.force_finalize().unwrap();
        assert_eq!(done.phase, ResizePhase::Completed);
        assert_eq!(done.sizes, vec![230.0, 170.0]);
        assert!(!engine.is_drag_active());
        assert!(engine.force_finalize().is_none());
    }

    #[test]
    fn non_finite_deltas_are_rejected_silently() {
        let mut engine = engine(
            [
                PaneDeclaration::flexible().with_size(abs(200.0)),
                PaneDeclaration::flexible().with_size(abs(200.0)),
            ],
            0.0,
        );
        engine.arrange(Size::new(400.0, 100.0));
        engine.on_drag_started(0, Point::ZERO).unwrap();
        engine.on_drag_delta(Point::new(40.0, 0.0)).unwrap();

        let held = engine.on_drag_delta(Point::new(f64::NAN, 0.0)).unwrap();
        assert_eq!(held.sizes, vec![240.0, 160.0]);
        let done = engine.on_drag_completed(Point::new(f64::INFINITY, 0.0)).unwrap();
        assert_eq!(done.sizes, vec![240.0, 160.0]);
    }

    #[test]
    fn no_session_starts_around_an_unresizable_middle_pane() {
        // Nothing is collapsed, so neither handle may resize A/C around the
        // fixed pane; the session must be refused exactly where the handle
        // state says the handle is not draggable.
        let mut engine = engine(
            [
                PaneDeclaration::flexible(),
                PaneDeclaration::flexible().with_resizable(false),
                PaneDeclaration::flexible(),
            ],
            0.0,
        );
        engine.arrange(Size::new(300.0, 100.0));
        assert!(!engine.handle_states()[0].is_draggable);
        assert!(!engine.handle_states()[1].is_draggable);
        assert!(engine.on_drag_started(0, Point::ZERO).is_none());
        assert!(engine.on_drag_started(1, Point::ZERO).is_none());
    }

    #[test]
    fn second_drag_start_is_ignored_while_active() {
        let mut engine = engine(
            [PaneDeclaration::flexible(), PaneDeclaration::flexible()],
            0.0,
        );
        engine.arrange(Size::new(400.0, 100.0));
        assert!(engine.on_drag_started(0, Point::ZERO).is_some());
        assert!(engine.on_drag_started(0, Point::ZERO).is_none());
    }

    #[test]
    fn spanning_handle_drag_restores_the_collapsed_pane() {
        // A | B | C with B collapsed into A: dragging the spanning handle
        // back toward A re-opens B at A's expense, leaving C untouched.
        let mut engine = engine(
            [
                PaneDeclaration::flexible().with_size(abs(200.0)),
                PaneDeclaration::flexible()
                    .with_size(abs(100.0))
                    .with_collapsible(CollapsibleConfig::enabled(Default::default())),
                PaneDeclaration::flexible().with_size(abs(100.0)),
            ],
            0.0,
        );
        engine.arrange(Size::new(400.0, 100.0));
        engine.on_collapse_requested(0, BoundarySide::Next).unwrap();
        assert_eq!(engine.sizes(), vec![300.0, 0.0, 100.0]);

        engine.on_drag_started(1, Point::ZERO).unwrap();
        let delta = engine.on_drag_delta(Point::new(-80.0, 0.0)).unwrap();
        assert_eq!(delta.sizes, vec![220.0, 80.0, 100.0]);
        let done = engine.on_drag_completed(Point::new(-80.0, 0.0)).unwrap();
        assert_eq!(done.sizes, vec![220.0, 80.0, 100.0]);
        assert!(!engine.store().is_collapsed(1));
    }

    #[test]
    fn drag_switches_outward_across_a_collapsed_pane() {
        // A | B(collapsed) | C(min-pinned) | D: dragging handle 2 left
        // saturates the (C, D) pair immediately, and with B collapsed the
        // session re-parents to (A, D). C and B keep their sizes.
        let mut engine = engine(
            [
                PaneDeclaration::flexible().with_size(abs(100.0)),
                PaneDeclaration::flexible()
                    .with_size(abs(100.0))
                    .with_collapsible(CollapsibleConfig::enabled(Default::default())),
                PaneDeclaration::flexible()
                    .with_size(abs(200.0))
                    .with_min_size(abs(200.0)),
                PaneDeclaration::flexible().with_size(abs(100.0)),
            ],
            0.0,
        );
        engine.arrange(Size::new(500.0, 100.0));
        engine.on_collapse_requested(0, BoundarySide::Next).unwrap();
        assert_eq!(engine.sizes(), vec![200.0, 0.0, 200.0, 100.0]);

        engine.on_drag_started(2, Point::ZERO).unwrap();
        let delta = engine.on_drag_delta(Point::new(-50.0, 0.0)).unwrap();
        assert_eq!(delta.sizes, vec![150.0, 0.0, 200.0, 150.0]);
        let done = engine.on_drag_completed(Point::new(-50.0, 0.0)).unwrap();
        assert_eq!(done.sizes, vec![150.0, 0.0, 200.0, 150.0]);
    }

    #[test]
    fn collapse_request_is_refused_during_drag() {
        let mut engine = engine(
            [
                PaneDeclaration::flexible()
                    .with_collapsible(CollapsibleConfig::enabled(Default::default())),
                PaneDeclaration::flexible(),
            ],
            0.0,
        );
        engine.arrange(Size::new(400.0, 100.0));
        engine.on_drag_started(0, Point::ZERO).unwrap();
        assert!(engine.on_collapse_requested(0, BoundarySide::Previous).is_none());
        engine.force_finalize().unwrap();
        assert!(engine.on_collapse_requested(0, BoundarySide::Previous).is_some());
    }

    #[test]
    fn rebuild_clears_session_and_contexts() {
        let mut engine = engine(
            [PaneDeclaration::flexible(), PaneDeclaration::flexible()],
            0.0,
        );
        engine.arrange(Size::new(400.0, 100.0));
        engine.on_drag_started(0, Point::ZERO).unwrap();
        engine.store_mut().push(PaneDeclaration::flexible());
        engine.rebuild();
        assert!(!engine.is_drag_active());
        assert_eq!(engine.contexts().len(), 3);
    }
}
