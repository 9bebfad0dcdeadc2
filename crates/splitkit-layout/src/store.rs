//! Host-owned pane attributes behind an accessor seam.
//!
//! The engine never owns per-pane attribute storage. Hosts keep size,
//! bounds, resizability, and collapse flags in their own property system and
//! expose them through [`PaneStore`]; the engine reads and writes only
//! through that trait. [`PaneList`] is the in-memory implementation used by
//! simple hosts and by tests.
//!
//! Panes are addressed by stable integer index into the host's ordered pane
//! list. After any structural mutation (add/remove/move/replace) the host
//! must call [`SplitterEngine::rebuild`](crate::SplitterEngine::rebuild).

use serde::{Deserialize, Serialize};
use splitkit_core::PaneLength;

/// When a collapse/expand icon attached to a handle should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconDisplayMode {
    /// Shown while the pointer hovers the relevant side of the handle.
    #[default]
    Hover,
    /// Always shown.
    Always,
    /// Never shown.
    Hidden,
}

/// Collapse configuration for one pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollapsibleConfig {
    /// Whether the pane may be collapsed at all.
    pub enabled: bool,
    /// How the pane's collapse/expand icon is displayed.
    pub icon_mode: IconDisplayMode,
}

impl CollapsibleConfig {
    /// Collapse enabled with the given icon mode.
    #[must_use]
    pub const fn enabled(icon_mode: IconDisplayMode) -> Self {
        Self {
            enabled: true,
            icon_mode,
        }
    }
}

/// Accessor seam over the host's per-pane property bag.
///
/// `size` and `is_collapsed` are writable: the engine commits resize results
/// through [`set_size`](Self::set_size) (two-way binding) and flips
/// [`set_collapsed`](Self::set_collapsed) when a pane crosses the zero-size
/// boundary. All getters must tolerate any index below
/// [`pane_count`](Self::pane_count); the engine never calls past it.
pub trait PaneStore {
    /// Number of panes in the host's ordered list.
    fn pane_count(&self) -> usize;

    /// Explicitly assigned size, if any.
    fn size(&self, pane: usize) -> Option<PaneLength>;

    /// Write back an explicit size (engine commit path).
    fn set_size(&mut self, pane: usize, size: Option<PaneLength>);

    /// Declared default size, if any.
    fn default_size(&self, pane: usize) -> Option<PaneLength>;

    /// Declared minimum size, if any (resolved default is 0).
    fn min_size(&self, pane: usize) -> Option<PaneLength>;

    /// Declared maximum size, if any (resolved default is unbounded).
    fn max_size(&self, pane: usize) -> Option<PaneLength>;

    /// Whether the pane participates in interactive resize.
    fn is_resizable(&self, pane: usize) -> bool;

    /// Collapse configuration, if the pane is collapsible.
    fn collapsible(&self, pane: usize) -> Option<CollapsibleConfig>;

    /// Whether the pane is currently collapsed.
    fn is_collapsed(&self, pane: usize) -> bool;

    /// Flip the collapsed flag (engine bookkeeping path).
    fn set_collapsed(&mut self, pane: usize, collapsed: bool);
}

/// Declaration of one pane in a [`PaneList`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaneDeclaration {
    /// Explicitly assigned size.
    #[serde(default)]
    pub size: Option<PaneLength>,
    /// Preferred size when no explicit size is set.
    #[serde(default)]
    pub default_size: Option<PaneLength>,
    /// Lower size bound.
    #[serde(default)]
    pub min_size: Option<PaneLength>,
    /// Upper size bound.
    #[serde(default)]
    pub max_size: Option<PaneLength>,
    /// Whether the pane participates in interactive resize.
    #[serde(default = "default_resizable")]
    pub resizable: bool,
    /// Collapse configuration.
    #[serde(default)]
    pub collapsible: Option<CollapsibleConfig>,
    /// Whether the pane starts (or currently is) collapsed.
    #[serde(default)]
    pub collapsed: bool,
}

const fn default_resizable() -> bool {
    true
}

impl Default for PaneDeclaration {
    /// Same defaults the serde path fills in: resizable, everything else
    /// unset.
    fn default() -> Self {
        Self {
            size: None,
            default_size: None,
            min_size: None,
            max_size: None,
            resizable: default_resizable(),
            collapsible: None,
            collapsed: false,
        }
    }
}

impl PaneDeclaration {
    /// A resizable pane with no declared size or bounds.
    #[must_use]
    pub fn flexible() -> Self {
        Self::default()
    }

    /// Set the explicit size.
    #[must_use]
    pub fn with_size(mut self, size: PaneLength) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the default size.
    #[must_use]
    pub fn with_default_size(mut self, size: PaneLength) -> Self {
        self.default_size = Some(size);
        self
    }

    /// Set the minimum size.
    #[must_use]
    pub fn with_min_size(mut self, size: PaneLength) -> Self {
        self.min_size = Some(size);
        self
    }

    /// Set the maximum size.
    #[must_use]
    pub fn with_max_size(mut self, size: PaneLength) -> Self {
        self.max_size = Some(size);
        self
    }

    /// Set resizability.
    #[must_use]
    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }

    /// Set the collapse configuration.
    #[must_use]
    pub fn with_collapsible(mut self, config: CollapsibleConfig) -> Self {
        self.collapsible = Some(config);
        self
    }
}

/// In-memory [`PaneStore`] backed by a `Vec` of declarations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaneList {
    panes: Vec<PaneDeclaration>,
}

impl PaneList {
    /// Build a list from declarations.
    #[must_use]
    pub fn new(panes: impl IntoIterator<Item = PaneDeclaration>) -> Self {
        Self {
            panes: panes.into_iter().collect(),
        }
    }

    /// Number of panes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.panes.len()
    }

    /// True when the list has no panes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    /// Append a pane. Structural mutation; the engine must be rebuilt.
    pub fn push(&mut self, pane: PaneDeclaration) {
        self.panes.push(pane);
    }

    /// Remove a pane. Structural mutation; the engine must be rebuilt.
    pub fn remove(&mut self, pane: usize) -> Option<PaneDeclaration> {
        if pane < self.panes.len() {
            Some(self.panes.remove(pane))
        } else {
            None
        }
    }

    /// Access a declaration.
    #[must_use]
    pub fn get(&self, pane: usize) -> Option<&PaneDeclaration> {
        self.panes.get(pane)
    }

    /// Mutable access to a declaration (attribute edits only).
    pub fn get_mut(&mut self, pane: usize) -> Option<&mut PaneDeclaration> {
        self.panes.get_mut(pane)
    }
}

impl PaneStore for PaneList {
    fn pane_count(&self) -> usize {
        self.panes.len()
    }

    fn size(&self, pane: usize) -> Option<PaneLength> {
        self.panes.get(pane).and_then(|p| p.size)
    }

    fn set_size(&mut self, pane: usize, size: Option<PaneLength>) {
        if let Some(p) = self.panes.get_mut(pane) {
            p.size = size;
        }
    }

    fn default_size(&self, pane: usize) -> Option<PaneLength> {
        self.panes.get(pane).and_then(|p| p.default_size)
    }

    fn min_size(&self, pane: usize) -> Option<PaneLength> {
        self.panes.get(pane).and_then(|p| p.min_size)
    }

    fn max_size(&self, pane: usize) -> Option<PaneLength> {
        self.panes.get(pane).and_then(|p| p.max_size)
    }

    fn is_resizable(&self, pane: usize) -> bool {
        self.panes.get(pane).is_some_and(|p| p.resizable)
    }

    fn collapsible(&self, pane: usize) -> Option<CollapsibleConfig> {
        self.panes.get(pane).and_then(|p| p.collapsible)
    }

    fn is_collapsed(&self, pane: usize) -> bool {
        self.panes.get(pane).is_some_and(|p| p.collapsed)
    }

    fn set_collapsed(&mut self, pane: usize, collapsed: bool) {
        if let Some(p) = self.panes.get_mut(pane) {
            p.collapsed = collapsed;
        }
    }
}
