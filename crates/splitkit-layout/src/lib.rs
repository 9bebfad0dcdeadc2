//! Multi-pane splitter layout and interaction engine.
//!
//! Sizes an ordered list of panes along one axis, places one handle between
//! each adjacent pair, and drives interactive resizing, collapsing, and
//! restoring through those handles. The host owns pane attributes behind the
//! [`PaneStore`] trait and feeds the engine layout passes and pointer
//! notifications; the engine owns everything derived: effective sizes,
//! collapse bookkeeping, handle states, and the drag session.
//!
//! Everything is synchronous and single-threaded; the engine computes inline
//! in whatever callback delivered the triggering event.
//!
//! # Example
//!
//! ```
//! use splitkit_core::{PaneLength, Point, Size};
//! use splitkit_layout::{PaneDeclaration, PaneList, SplitterEngine};
//!
//! let panes = PaneList::new([
//!     PaneDeclaration::flexible().with_size(PaneLength::absolute(300.0).unwrap()),
//!     PaneDeclaration::flexible(),
//! ]);
//! let mut engine = SplitterEngine::new(panes).with_handle_spacing(2.0);
//! let arrangement = engine.arrange(Size::new(640.0, 480.0));
//! assert_eq!(arrangement.pane_rects.len(), 2);
//!
//! engine.on_drag_started(0, Point::ZERO);
//! engine.on_drag_delta(Point::new(-40.0, 0.0));
//! engine.on_drag_completed(Point::new(-40.0, 0.0));
//! assert_eq!(engine.sizes()[0], 260.0);
//! ```

#![forbid(unsafe_code)]

pub mod collapse;
pub mod drag;
pub mod engine;
pub mod handle;
pub mod registry;
pub mod solver;
pub mod store;

pub use drag::{ResizeBehavior, ResizeEvent, ResizePhase};
pub use engine::{Arrangement, SplitterEngine};
pub use handle::{BoundarySide, CollapseButton, HandleHover, HandleState};
pub use registry::{PaneContext, PaneRegistry, ResolvedBounds};
pub use solver::compute_sizes;
pub use store::{CollapsibleConfig, IconDisplayMode, PaneDeclaration, PaneList, PaneStore};
