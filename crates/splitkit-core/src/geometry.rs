//! Geometric primitives.
//!
//! Coordinates are `f64` layout units with the origin at the top-left.
//! Negative or non-finite inputs are the caller's problem; these types are
//! plain value carriers and do not validate.

/// A point or translation vector in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// True if both components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A width/height pair in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A zero-area size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Check if the size has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A placement rectangle produced by the arrange pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width in layout units.
    pub width: f64,
    /// Height in layout units.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Size of the rectangle.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

/// The axis a splitter lays panes out along.
///
/// `Horizontal` places panes side by side (the length axis is width);
/// `Vertical` stacks them (the length axis is height).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Panes are placed left to right.
    #[default]
    Horizontal,
    /// Panes are stacked top to bottom.
    Vertical,
}

impl Orientation {
    /// The component of a size along the length axis.
    #[inline]
    pub const fn length_of(self, size: Size) -> f64 {
        match self {
            Orientation::Horizontal => size.width,
            Orientation::Vertical => size.height,
        }
    }

    /// The component of a size across the length axis.
    #[inline]
    pub const fn cross_of(self, size: Size) -> f64 {
        match self {
            Orientation::Horizontal => size.height,
            Orientation::Vertical => size.width,
        }
    }

    /// The component of a point or vector along the length axis.
    #[inline]
    pub const fn axis_component(self, point: Point) -> f64 {
        match self {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        }
    }

    /// Build a size from length-axis and cross-axis components.
    #[inline]
    pub const fn pack_size(self, length: f64, cross: f64) -> Size {
        match self {
            Orientation::Horizontal => Size::new(length, cross),
            Orientation::Vertical => Size::new(cross, length),
        }
    }

    /// Build a rectangle at `offset` along the axis with the given extents.
    #[inline]
    pub const fn pack_rect(self, offset: f64, length: f64, cross: f64) -> Rect {
        match self {
            Orientation::Horizontal => Rect::new(offset, 0.0, length, cross),
            Orientation::Vertical => Rect::new(0.0, offset, cross, length),
        }
    }
}
