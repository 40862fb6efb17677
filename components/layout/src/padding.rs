//! Padding layout that insets a single child by fixed edge distances.

use alloc::{vec, vec::Vec};

use waterfit_core::InsetSnapshot;

use crate::{Layout, ProposalSize, Rect, Size, SubView};

/// Insets applied to the four edges of a rectangle.
///
/// `leading` and `trailing` map to the left and right screen edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    /// Top inset.
    pub top: f32,
    /// Bottom inset.
    pub bottom: f32,
    /// Leading (left) inset.
    pub leading: f32,
    /// Trailing (right) inset.
    pub trailing: f32,
}

impl EdgeInsets {
    /// No padding on any edge.
    pub const ZERO: Self = Self::all(0.0);

    /// Creates an [`EdgeInsets`] value with explicit edges.
    #[must_use]
    pub const fn new(top: f32, bottom: f32, leading: f32, trailing: f32) -> Self {
        Self {
            top,
            bottom,
            leading,
            trailing,
        }
    }

    /// Returns equal insets on every edge.
    #[must_use]
    pub const fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Converts resolved pixel insets into layout padding.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn from_insets(insets: InsetSnapshot) -> Self {
        Self {
            top: insets.top as f32,
            bottom: insets.bottom as f32,
            leading: insets.left as f32,
            trailing: insets.right as f32,
        }
    }

    /// Sum of the leading and trailing edges.
    #[must_use]
    pub const fn horizontal(&self) -> f32 {
        self.leading + self.trailing
    }

    /// Sum of the top and bottom edges.
    #[must_use]
    pub const fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

impl From<InsetSnapshot> for EdgeInsets {
    fn from(insets: InsetSnapshot) -> Self {
        Self::from_insets(insets)
    }
}

/// Layout that insets its single child by the configured edge values.
#[derive(Debug, Clone, Default)]
pub struct PaddingLayout {
    edges: EdgeInsets,
}

impl PaddingLayout {
    /// Creates a padding layout with `edges`.
    #[must_use]
    pub const fn new(edges: EdgeInsets) -> Self {
        Self { edges }
    }
}

impl Layout for PaddingLayout {
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        let horizontal = self.edges.horizontal();
        let vertical = self.edges.vertical();
        let child_proposal = proposal.shrink(horizontal, vertical);

        let child = children
            .first()
            .map_or(Size::zero(), |c| c.size_that_fits(child_proposal));

        // A greedy child reports infinity; fall back to whatever was offered.
        let width = if child.width.is_infinite() {
            child_proposal.width.unwrap_or(0.0)
        } else {
            child.width
        };
        let height = if child.height.is_infinite() {
            child_proposal.height.unwrap_or(0.0)
        } else {
            child.height
        };

        Size::new(width + horizontal, height + vertical)
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        if children.is_empty() {
            return vec![];
        }

        vec![bounds.inset(
            self.edges.top,
            self.edges.bottom,
            self.edges.leading,
            self.edges.trailing,
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point, StretchAxis};

    struct MockSubView {
        size: Size,
    }

    impl SubView for MockSubView {
        fn size_that_fits(&self, _proposal: ProposalSize) -> Size {
            self.size
        }
        fn stretch_axis(&self) -> StretchAxis {
            StretchAxis::None
        }
    }

    #[test]
    fn test_edge_insets_from_pixels() {
        let edges = EdgeInsets::from(InsetSnapshot::new(40, 20, 8, 4));
        assert_eq!(edges, EdgeInsets::new(40.0, 20.0, 8.0, 4.0));
        assert_eq!(edges.horizontal(), 12.0);
        assert_eq!(edges.vertical(), 60.0);
    }

    #[test]
    fn test_padding_size() {
        let layout = PaddingLayout::new(EdgeInsets::all(10.0));
        let child = MockSubView {
            size: Size::new(50.0, 30.0),
        };
        let children: Vec<&dyn SubView> = vec![&child];

        let size = layout.size_that_fits(ProposalSize::UNSPECIFIED, &children);

        assert_eq!(size.width, 70.0); // 50 + 10 + 10
        assert_eq!(size.height, 50.0); // 30 + 10 + 10
    }

    #[test]
    fn test_padding_with_greedy_child() {
        let layout = PaddingLayout::new(EdgeInsets::new(24.0, 16.0, 0.0, 0.0));
        let child = MockSubView {
            size: Size::new(f32::INFINITY, f32::INFINITY),
        };
        let children: Vec<&dyn SubView> = vec![&child];

        let size = layout.size_that_fits(ProposalSize::new(Some(200.0), Some(400.0)), &children);

        assert_eq!(size, Size::new(200.0, 400.0));
    }

    #[test]
    fn test_padding_placement() {
        let layout = PaddingLayout::new(EdgeInsets::new(10.0, 20.0, 15.0, 25.0));
        let child = MockSubView {
            size: Size::new(50.0, 30.0),
        };
        let children: Vec<&dyn SubView> = vec![&child];

        let bounds = Rect::new(Point::new(0.0, 0.0), Size::new(100.0, 100.0));
        let rects = layout.place(bounds, &children);

        assert_eq!(rects[0].x(), 15.0);
        assert_eq!(rects[0].y(), 10.0);
        assert_eq!(rects[0].width(), 60.0); // 100 - 15 - 25
        assert_eq!(rects[0].height(), 70.0); // 100 - 10 - 20
    }

    #[test]
    fn test_padding_without_children() {
        let layout = PaddingLayout::new(EdgeInsets::all(5.0));
        assert_eq!(
            layout.size_that_fits(ProposalSize::UNSPECIFIED, &[]),
            Size::new(10.0, 10.0)
        );
        assert!(layout.place(Rect::from_size(Size::new(10.0, 10.0)), &[]).is_empty());
    }
}
