//! Geometry and the two-pass layout protocol used by fitting containers.
//!
//! Inset snapshots arrive as whole device pixels. Layout works in `f32` so
//! that containers can mix the resolved insets with fractional child sizes;
//! the conversion happens once, when a container copies resolved values into
//! its padding.
//!
//! A container is measured by proposing a size to its children
//! ([`Layout::size_that_fits`]) and then placing them inside its final bounds
//! ([`Layout::place`]).

use core::fmt::Debug;

use alloc::vec::Vec;

// ============================================================================
// StretchAxis
// ============================================================================

/// Specifies which axis (or axes) a view wants to stretch to fill available space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StretchAxis {
    /// Content sized.
    #[default]
    None,
    /// Expands width, keeps intrinsic height.
    Horizontal,
    /// Expands height, keeps intrinsic width.
    Vertical,
    /// Fills all offered space. Scroll containers report this.
    Both,
}

impl StretchAxis {
    /// Returns true if this stretches horizontally.
    #[must_use]
    pub const fn stretches_horizontal(&self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }

    /// Returns true if this stretches vertically.
    #[must_use]
    pub const fn stretches_vertical(&self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }
}

// ============================================================================
// SubView / Layout
// ============================================================================

/// A proxy for querying a child's size during layout.
///
/// Containers may ask the same child several times with different proposals,
/// and consult [`stretch_axis`](Self::stretch_axis) to decide whether the
/// child fills the space it is placed in or keeps its own size.
pub trait SubView {
    /// Returns the child's size for `proposal`.
    fn size_that_fits(&self, proposal: ProposalSize) -> Size;

    /// Which axis the child stretches on.
    fn stretch_axis(&self) -> StretchAxis;
}

/// A layout algorithm for arranging child views.
///
/// # Two-Phase Layout
///
/// 1. **Sizing** ([`size_that_fits`](Self::size_that_fits)): how big this
///    container wants to be for a proposal.
/// 2. **Placement** ([`place`](Self::place)): where each child goes inside
///    the final bounds.
pub trait Layout: Debug {
    /// Calculate the size this layout wants given a proposal.
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size;

    /// Returns one rect per child, positioned within `bounds`.
    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect>;

    /// Which axis this container stretches to fill available space.
    fn stretch_axis(&self) -> StretchAxis {
        StretchAxis::None
    }
}

// ============================================================================
// Geometry Types
// ============================================================================

/// Axis-aligned rectangle relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    /// Creates a new [`Rect`] with the provided `origin` and `size`.
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle at the origin with the given size.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::zero(),
            size,
        }
    }

    /// Returns the rectangle's origin (top-left corner).
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the left edge.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.origin.x
    }

    /// Returns the top edge.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.origin.y
    }

    /// Returns the rectangle's width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.size.width
    }

    /// Returns the rectangle's height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.size.height
    }

    /// Shrinks the rectangle by the given edge amounts. Never goes negative.
    #[must_use]
    pub fn inset(&self, top: f32, bottom: f32, leading: f32, trailing: f32) -> Self {
        Self::new(
            Point::new(self.origin.x + leading, self.origin.y + top),
            Size::new(
                (self.size.width - leading - trailing).max(0.0),
                (self.size.height - top - bottom).max(0.0),
            ),
        )
    }
}

/// Two-dimensional size.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Size {
    /// The width.
    pub width: f32,
    /// The height.
    pub height: f32,
}

impl Size {
    /// Constructs a [`Size`] with the given `width` and `height`.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a [`Size`] with zero width and height.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

/// Coordinate relative to a parent layout's origin.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    /// The x-coordinate.
    pub x: f32,
    /// The y-coordinate.
    pub y: f32,
}

impl Point {
    /// Constructs a [`Point`] at the given `x` and `y`.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a [`Point`] at the origin (0, 0).
    #[must_use]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// A size proposal from parent to child during layout negotiation.
///
/// `None` on an axis asks for the ideal size, `Some(f32::INFINITY)` offers
/// unbounded space (the scroll axis of a scroll container).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ProposalSize {
    /// Width proposal.
    pub width: Option<f32>,
    /// Height proposal.
    pub height: Option<f32>,
}

impl ProposalSize {
    /// Creates a [`ProposalSize`] from optional width and height.
    #[must_use]
    pub fn new(width: impl Into<Option<f32>>, height: impl Into<Option<f32>>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }

    /// Unspecified proposal - asks for ideal/intrinsic size.
    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    /// Shrinks both axes by fixed amounts, flooring at zero.
    ///
    /// Unspecified and infinite axes stay as they are.
    #[must_use]
    pub fn shrink(self, horizontal: f32, vertical: f32) -> Self {
        Self {
            width: self.width.map(|w| (w - horizontal).max(0.0)),
            height: self.height.map(|h| (h - vertical).max(0.0)),
        }
    }
}
