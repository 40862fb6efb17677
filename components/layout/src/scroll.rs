//! Scroll container that pads its content by the system bars it fits.

use alloc::{vec, vec::Vec};

use waterfit_core::{FitSide, FitSystemBar, InsetConsumer, InsetFitPolicy, InsetSnapshot};

use crate::{
    Layout, ProposalSize, Rect, Size, StretchAxis, SubView,
    padding::{EdgeInsets, PaddingLayout},
};

/// Defines the scrolling directions supported by [`FittingScrollContainer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[non_exhaustive]
pub enum Axis {
    /// Allow horizontal scrolling only.
    Horizontal,
    /// Allow vertical scrolling only (default).
    #[default]
    Vertical,
    /// Allow scrolling in both directions.
    All,
}

impl Axis {
    const fn scrolls_horizontal(self) -> bool {
        matches!(self, Self::Horizontal | Self::All)
    }

    const fn scrolls_vertical(self) -> bool {
        matches!(self, Self::Vertical | Self::All)
    }

    /// Content is unconstrained along the scroll axis.
    const fn release(self, proposal: ProposalSize) -> ProposalSize {
        ProposalSize {
            width: if self.scrolls_horizontal() { None } else { proposal.width },
            height: if self.scrolls_vertical() { None } else { proposal.height },
        }
    }
}

/// A scrollable container that keeps its content clear of system bars.
///
/// Inset deliveries from the host go through
/// [`on_insets_changed`](Self::on_insets_changed); each measurement pass
/// ([`on_measure`](Self::on_measure)) copies the policy's resolved edges into
/// the container's padding before measuring the content.
///
/// ```
/// use waterfit_layout::{FitSide, InsetSnapshot, ProposalSize, scroll::FittingScrollContainer};
///
/// let mut container = FittingScrollContainer::vertical(FitSide::default());
/// container.on_insets_changed(InsetSnapshot::new(40, 20, 0, 0));
/// container.on_measure(ProposalSize::new(Some(360.0), Some(640.0)), &[]);
///
/// assert_eq!(container.padding().top, 40.0);
/// assert_eq!(container.padding().bottom, 20.0);
/// ```
#[derive(Debug, Clone)]
pub struct FittingScrollContainer {
    axis: Axis,
    policy: InsetFitPolicy,
    padding: EdgeInsets,
}

impl FittingScrollContainer {
    /// Creates a container scrolling along `axis` that fits `sides`.
    #[must_use]
    pub const fn new(axis: Axis, sides: FitSide) -> Self {
        Self {
            axis,
            policy: InsetFitPolicy::new(sides),
            padding: EdgeInsets::ZERO,
        }
    }

    /// Creates a vertically scrolling container.
    #[must_use]
    pub const fn vertical(sides: FitSide) -> Self {
        Self::new(Axis::Vertical, sides)
    }

    /// Creates a horizontally scrolling container.
    #[must_use]
    pub const fn horizontal(sides: FitSide) -> Self {
        Self::new(Axis::Horizontal, sides)
    }

    /// Creates a container from a raw side attribute; absent means top and bottom.
    #[must_use]
    pub fn from_attr(axis: Axis, side_attr: Option<i32>) -> Self {
        Self::new(axis, side_attr.map_or_else(FitSide::default, FitSide::from_attr))
    }

    /// Forwards a host delivery to the policy and returns the remainder for
    /// the next consumer.
    pub fn on_insets_changed(&mut self, raw: InsetSnapshot) -> InsetSnapshot {
        self.policy.update(raw)
    }

    /// Delivery path for hosts without remainder support.
    ///
    /// Returns true when the container fits at least one side, meaning it
    /// claimed the insets and dispatch should stop.
    pub fn fit_system_windows(&mut self, raw: InsetSnapshot) -> bool {
        self.policy.update(raw);
        !self.policy.active_sides().is_empty()
    }

    /// Applies the resolved insets as padding, then measures.
    ///
    /// Runs on every pass, since a side toggle between passes changes the
    /// resolved values without a new delivery.
    pub fn on_measure(&mut self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        let padding = EdgeInsets::from_insets(self.policy.resolved_insets());
        if padding != self.padding {
            tracing::trace!(?padding, "fitting scroll container padding changed");
            self.padding = padding;
        }
        self.size_that_fits(proposal, children)
    }

    /// The padding applied by the latest measurement.
    #[must_use]
    pub const fn padding(&self) -> EdgeInsets {
        self.padding
    }

    /// The scroll axis.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// The policy this container owns.
    #[must_use]
    pub const fn policy(&self) -> &InsetFitPolicy {
        &self.policy
    }

    /// Pixels currently reserved at the top.
    #[must_use]
    pub const fn top_inset(&self) -> i32 {
        self.policy.resolved(FitSide::TOP)
    }

    /// Pixels currently reserved at the bottom.
    #[must_use]
    pub const fn bottom_inset(&self) -> i32 {
        self.policy.resolved(FitSide::BOTTOM)
    }

    const fn content_layout(&self) -> PaddingLayout {
        PaddingLayout::new(self.padding)
    }
}

impl Layout for FittingScrollContainer {
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        let natural = self
            .content_layout()
            .size_that_fits(self.axis.release(proposal), children);

        // Take the offered space where there is some, otherwise wrap the content.
        let fit = |offered: Option<f32>, natural: f32| match offered {
            Some(value) if value.is_finite() => value,
            _ => natural,
        };

        Size::new(
            fit(proposal.width, natural.width),
            fit(proposal.height, natural.height),
        )
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        let Some(child) = children.first() else {
            return vec![];
        };

        let viewport = bounds.inset(
            self.padding.top,
            self.padding.bottom,
            self.padding.leading,
            self.padding.trailing,
        );
        let content = child.size_that_fits(
            self.axis
                .release(ProposalSize::new(viewport.width(), viewport.height())),
        );

        let stretch = child.stretch_axis();
        let width = extent(
            self.axis.scrolls_horizontal(),
            stretch.stretches_horizontal(),
            content.width,
            viewport.width(),
        );
        let height = extent(
            self.axis.scrolls_vertical(),
            stretch.stretches_vertical(),
            content.height,
            viewport.height(),
        );

        vec![Rect::new(viewport.origin(), Size::new(width, height))]
    }

    fn stretch_axis(&self) -> StretchAxis {
        StretchAxis::Both
    }
}

/// Length of the content along one axis.
///
/// Along a scroll axis content keeps its own length; a stretching child is
/// at least as long as the viewport. Across it, a stretching child fills the
/// viewport and any other child keeps its size, capped at the viewport.
fn extent(scrolls: bool, stretches: bool, content: f32, viewport: f32) -> f32 {
    if !content.is_finite() {
        return viewport;
    }
    match (scrolls, stretches) {
        (true, true) => content.max(viewport),
        (true, false) => content,
        (false, true) => viewport,
        (false, false) => content.min(viewport),
    }
}

impl InsetConsumer for FittingScrollContainer {
    fn on_insets_changed(&mut self, raw: InsetSnapshot) -> InsetSnapshot {
        Self::on_insets_changed(self, raw)
    }
}

impl FitSystemBar for FittingScrollContainer {
    fn add_fit_side(&mut self, side: FitSide) {
        self.policy.add_side(side);
    }

    fn remove_fit_side(&mut self, side: FitSide) {
        self.policy.remove_side(side);
    }

    fn set_fit_system_bar_enabled(&mut self, top: bool, bottom: bool) {
        self.policy.set_dominant_sides_enabled(top, bottom);
    }

    fn top_window_inset(&self) -> i32 {
        self.top_inset()
    }

    fn bottom_window_inset(&self) -> i32 {
        self.bottom_inset()
    }
}
