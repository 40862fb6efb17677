//! The inset fitting policy shared by every system bar aware container.
//!
//! A policy separates two questions: what the host most recently reported for
//! each edge, and which edges its owner reserves space for. Keeping them apart
//! lets one delivery serve several independently configured consumers. A
//! toolbar can take the top edge, the scroll body below it the bottom edge,
//! and neither pads for the other.
//!
//! ```
//! use waterfit_core::{FitSide, InsetFitPolicy, InsetSnapshot};
//!
//! let mut policy = InsetFitPolicy::default();
//! let remainder = policy.update(InsetSnapshot::new(40, 20, 0, 0));
//!
//! assert_eq!(policy.resolved(FitSide::TOP), 40);
//! assert_eq!(policy.resolved(FitSide::BOTTOM), 20);
//! assert!(remainder.is_zero());
//! ```

use crate::insets::{FitSide, InsetSnapshot};

// ============================================================================
// Capability Traits
// ============================================================================

/// Anything that takes part in an inset delivery chain.
///
/// A consumer keeps the edges it fits and returns what is left over, so the
/// next consumer never reserves the same pixels again.
pub trait InsetConsumer {
    /// Accepts a delivery and returns the unconsumed remainder.
    fn on_insets_changed(&mut self, raw: InsetSnapshot) -> InsetSnapshot;
}

/// Side toggles and inset queries exposed by system bar aware containers.
///
/// Containers own an [`InsetFitPolicy`] and forward these calls to it.
pub trait FitSystemBar {
    /// Starts reserving space on `side`.
    fn add_fit_side(&mut self, side: FitSide);

    /// Stops reserving space on `side`.
    fn remove_fit_side(&mut self, side: FitSide);

    /// Switches the top and bottom edges independently, keeping left and right.
    fn set_fit_system_bar_enabled(&mut self, top: bool, bottom: bool);

    /// Pixels currently reserved at the top.
    fn top_window_inset(&self) -> i32;

    /// Pixels currently reserved at the bottom.
    fn bottom_window_inset(&self) -> i32;
}

/// Feeds `raw` through `consumers` in order and returns the final remainder.
///
/// Each consumer sees what the previous one left over. With no consumers the
/// clamped input comes straight back.
pub fn dispatch_insets(
    consumers: &mut [&mut dyn InsetConsumer],
    raw: InsetSnapshot,
) -> InsetSnapshot {
    consumers
        .iter_mut()
        .fold(raw.clamped(), |remainder, consumer| {
            consumer.on_insets_changed(remainder)
        })
}

// ============================================================================
// InsetFitPolicy
// ============================================================================

/// Decides how much padding each edge needs right now.
///
/// The policy stores the latest clamped snapshot and the set of active sides.
/// Resolved values are computed on read, so toggling a side takes effect on
/// the next query without another delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsetFitPolicy {
    raw: InsetSnapshot,
    sides: FitSide,
}

impl Default for InsetFitPolicy {
    fn default() -> Self {
        Self::new(FitSide::default())
    }
}

impl InsetFitPolicy {
    /// Creates a policy with nothing delivered yet and `sides` active.
    #[must_use]
    pub const fn new(sides: FitSide) -> Self {
        Self {
            raw: InsetSnapshot::ZERO,
            sides,
        }
    }

    /// Replaces the stored snapshot and returns the unconsumed remainder.
    ///
    /// Active edges are consumed and read as zero in the remainder; inactive
    /// edges pass through unchanged.
    pub fn update(&mut self, snapshot: InsetSnapshot) -> InsetSnapshot {
        if snapshot.has_negative() {
            tracing::warn!(?snapshot, "negative system bar inset clamped to zero");
        }

        self.raw = snapshot.clamped();
        let remainder = self.raw.without(self.sides);

        tracing::trace!(raw = ?self.raw, ?remainder, sides = ?self.sides, "insets updated");
        remainder
    }

    /// Adds `side` to the active set. Adding a present side changes nothing.
    pub fn add_side(&mut self, side: FitSide) {
        self.set_sides(self.sides | side);
    }

    /// Removes `side` from the active set. Removing an absent side changes nothing.
    pub fn remove_side(&mut self, side: FitSide) {
        self.set_sides(self.sides - side);
    }

    /// Enables or disables the top and bottom edges independently.
    ///
    /// Left and right keep their configuration, which lets a container nested
    /// inside another fitting container stop padding vertically.
    pub fn set_dominant_sides_enabled(&mut self, top: bool, bottom: bool) {
        let mut sides = self.sides;
        sides.set(FitSide::TOP, top);
        sides.set(FitSide::BOTTOM, bottom);
        self.set_sides(sides);
    }

    /// Returns the padding for `side`: the stored value if active, else zero.
    #[must_use]
    pub const fn resolved(&self, side: FitSide) -> i32 {
        if self.sides.contains(side) {
            self.raw.get(side)
        } else {
            0
        }
    }

    /// Returns all four resolved edges at once.
    #[must_use]
    pub const fn resolved_insets(&self) -> InsetSnapshot {
        self.raw.only(self.sides)
    }

    /// Returns the currently active sides.
    #[must_use]
    pub const fn active_sides(&self) -> FitSide {
        self.sides
    }

    /// Returns the last delivered snapshot, after clamping.
    #[must_use]
    pub const fn raw(&self) -> InsetSnapshot {
        self.raw
    }

    fn set_sides(&mut self, sides: FitSide) {
        if sides != self.sides {
            tracing::debug!(from = ?self.sides, to = ?sides, "active fit sides changed");
            self.sides = sides;
        }
    }
}

impl InsetConsumer for InsetFitPolicy {
    fn on_insets_changed(&mut self, raw: InsetSnapshot) -> InsetSnapshot {
        self.update(raw)
    }
}

impl FitSystemBar for InsetFitPolicy {
    fn add_fit_side(&mut self, side: FitSide) {
        self.add_side(side);
    }

    fn remove_fit_side(&mut self, side: FitSide) {
        self.remove_side(side);
    }

    fn set_fit_system_bar_enabled(&mut self, top: bool, bottom: bool) {
        self.set_dominant_sides_enabled(top, bottom);
    }

    fn top_window_inset(&self) -> i32 {
        self.resolved(FitSide::TOP)
    }

    fn bottom_window_inset(&self) -> i32 {
        self.resolved(FitSide::BOTTOM)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    const EDGES: [FitSide; 4] = [FitSide::TOP, FitSide::BOTTOM, FitSide::LEFT, FitSide::RIGHT];

    #[test]
    fn test_zero_deliveries_resolve_to_zero() {
        let policy = InsetFitPolicy::new(FitSide::ALL);
        for side in EDGES {
            assert_eq!(policy.resolved(side), 0);
        }
    }

    #[test]
    fn test_default_sides_consume_top_and_bottom() {
        let mut policy = InsetFitPolicy::default();
        let remainder = policy.update(InsetSnapshot::new(40, 20, 0, 0));

        assert_eq!(policy.resolved(FitSide::TOP), 40);
        assert_eq!(policy.resolved(FitSide::BOTTOM), 20);
        assert_eq!(policy.resolved(FitSide::LEFT), 0);
        assert_eq!(remainder, InsetSnapshot::ZERO);
    }

    #[test]
    fn test_removed_side_resolves_zero_without_new_delivery() {
        let mut policy = InsetFitPolicy::default();
        policy.update(InsetSnapshot::new(40, 20, 0, 0));

        policy.remove_side(FitSide::BOTTOM);
        assert_eq!(policy.resolved(FitSide::BOTTOM), 0);
        assert_eq!(policy.resolved(FitSide::TOP), 40);

        let remainder = policy.update(InsetSnapshot::new(40, 20, 0, 0));
        assert_eq!(remainder, InsetSnapshot::new(0, 20, 0, 0));
    }

    #[test]
    fn test_negative_inset_is_clamped() {
        let mut policy = InsetFitPolicy::new(FitSide::TOP);
        let remainder = policy.update(InsetSnapshot::new(-5, 0, 0, 0));

        assert_eq!(policy.resolved(FitSide::TOP), 0);
        assert_eq!(policy.raw(), InsetSnapshot::ZERO);
        assert_eq!(remainder, InsetSnapshot::ZERO);
    }

    #[test]
    fn test_negative_inactive_side_is_clamped_in_remainder() {
        let mut policy = InsetFitPolicy::new(FitSide::TOP);
        let remainder = policy.update(InsetSnapshot::new(10, -7, 0, 0));
        assert_eq!(remainder, InsetSnapshot::ZERO);
    }

    #[test]
    fn test_disabling_dominant_sides_keeps_horizontal() {
        let mut policy = InsetFitPolicy::new(FitSide::ALL);
        policy.update(InsetSnapshot::new(40, 20, 8, 4));

        policy.set_dominant_sides_enabled(false, false);
        assert_eq!(policy.resolved(FitSide::TOP), 0);
        assert_eq!(policy.resolved(FitSide::BOTTOM), 0);
        assert_eq!(policy.resolved(FitSide::LEFT), 8);
        assert_eq!(policy.resolved(FitSide::RIGHT), 4);

        policy.set_dominant_sides_enabled(false, true);
        assert_eq!(policy.active_sides(), FitSide::BOTTOM | FitSide::HORIZONTAL);
    }

    #[test]
    fn test_add_and_remove_are_idempotent() {
        let mut once = InsetFitPolicy::new(FitSide::TOP);
        let mut twice = once.clone();

        once.add_side(FitSide::LEFT);
        twice.add_side(FitSide::LEFT);
        twice.add_side(FitSide::LEFT);
        assert_eq!(once, twice);

        once.remove_side(FitSide::TOP);
        twice.remove_side(FitSide::TOP);
        twice.remove_side(FitSide::TOP);
        assert_eq!(once, twice);
        assert_eq!(once.active_sides(), FitSide::LEFT);
    }

    #[test]
    fn test_resolved_and_remainder_partition_snapshot() {
        let snapshots = [
            InsetSnapshot::new(40, 20, 0, 0),
            InsetSnapshot::new(-3, 12, 7, -9),
            InsetSnapshot::new(1, 2, 3, 4),
        ];
        let side_sets: Vec<FitSide> = (0..=FitSide::ALL.bits()).map(FitSide::from_bits_truncate).collect();

        for sides in side_sets {
            for snapshot in snapshots {
                let mut policy = InsetFitPolicy::new(sides);
                let remainder = policy.update(snapshot);
                let clamped = snapshot.clamped();

                for side in EDGES {
                    let kept = policy.resolved(side);
                    let passed = remainder.get(side);
                    if sides.contains(side) {
                        assert_eq!(kept, clamped.get(side));
                        assert_eq!(passed, 0);
                    } else {
                        assert_eq!(kept, 0);
                        assert_eq!(passed, clamped.get(side));
                    }
                    assert_eq!(kept + passed, clamped.get(side));
                }
                assert_eq!(policy.resolved_insets(), clamped.only(sides));
            }
        }
    }

    #[test]
    fn test_dispatch_chains_consumers_without_double_counting() {
        let mut toolbar = InsetFitPolicy::new(FitSide::TOP);
        let mut body = InsetFitPolicy::new(FitSide::VERTICAL);

        let remainder = dispatch_insets(
            &mut [&mut toolbar, &mut body],
            InsetSnapshot::new(40, 20, 6, 0),
        );

        assert_eq!(toolbar.top_window_inset(), 40);
        assert_eq!(toolbar.bottom_window_inset(), 0);
        assert_eq!(body.top_window_inset(), 0);
        assert_eq!(body.bottom_window_inset(), 20);
        assert_eq!(remainder, InsetSnapshot::new(0, 0, 6, 0));
    }

    #[test]
    fn test_dispatch_without_consumers_returns_clamped_input() {
        let remainder = dispatch_insets(&mut [], InsetSnapshot::new(-1, 5, 0, 0));
        assert_eq!(remainder, InsetSnapshot::new(0, 5, 0, 0));
    }

    #[test]
    fn test_fit_system_bar_trait_delegates() {
        let mut policy = InsetFitPolicy::new(FitSide::empty());
        policy.update(InsetSnapshot::new(30, 10, 0, 0));
        assert_eq!(policy.top_window_inset(), 0);

        policy.add_fit_side(FitSide::TOP);
        assert_eq!(policy.top_window_inset(), 30);

        policy.set_fit_system_bar_enabled(true, true);
        assert_eq!(policy.bottom_window_inset(), 10);

        policy.remove_fit_side(FitSide::TOP);
        assert_eq!(policy.top_window_inset(), 0);
    }
}
