//! Edge flags and raw inset snapshots delivered by the host.

use alloc::string::{String, ToString};

// ============================================================================
// FitSide
// ============================================================================

bitflags::bitflags! {
    /// Screen edges a consumer may reserve padding for.
    ///
    /// The bit values match the attribute integers a host configuration source
    /// hands over, so a raw attribute can be read with [`FitSide::from_attr`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct FitSide: u8 {
        /// Top edge (status bar, top cutout).
        const TOP = 0b0001;
        /// Bottom edge (navigation bar, gesture area).
        const BOTTOM = 0b0010;
        /// Left edge.
        const LEFT = 0b0100;
        /// Right edge.
        const RIGHT = 0b1000;
        /// Top and bottom, the edges system bars usually occupy.
        const VERTICAL = Self::TOP.bits() | Self::BOTTOM.bits();
        /// Left and right.
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        /// Every edge.
        const ALL = Self::VERTICAL.bits() | Self::HORIZONTAL.bits();
    }
}

impl Default for FitSide {
    fn default() -> Self {
        Self::VERTICAL
    }
}

/// Error returned when a textual side list names an unknown edge.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseSideError {
    /// The token is not one of `top`, `bottom`, `left`, `right` or a known group.
    #[error("unknown fit side `{0}`")]
    UnknownSide(String),
}

impl FitSide {
    /// Reads a raw attribute integer. Bits outside the four edges are dropped.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_attr(raw: i32) -> Self {
        Self::from_bits_truncate((raw & Self::ALL.bits() as i32) as u8)
    }

    /// Parses the attribute flag form, e.g. `"top|bottom"`.
    ///
    /// Tokens are case-insensitive. An empty string or `none` is the empty set.
    ///
    /// # Errors
    ///
    /// Returns [`ParseSideError::UnknownSide`] for the first token that does
    /// not name an edge.
    pub fn parse_attr(value: &str) -> Result<Self, ParseSideError> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("none") {
            return Ok(Self::empty());
        }

        value.split('|').try_fold(Self::empty(), |sides, token| {
            let token = token.trim();
            let side = match token.to_ascii_lowercase().as_str() {
                "top" => Self::TOP,
                "bottom" => Self::BOTTOM,
                "left" => Self::LEFT,
                "right" => Self::RIGHT,
                "vertical" => Self::VERTICAL,
                "horizontal" => Self::HORIZONTAL,
                "all" => Self::ALL,
                _ => return Err(ParseSideError::UnknownSide(token.to_string())),
            };
            Ok(sides | side)
        })
    }
}

// ============================================================================
// InsetSnapshot
// ============================================================================

/// One delivery of edge insets, in device pixels.
///
/// Values are stored as the host reported them. Consumers read them through
/// [`InsetSnapshot::clamped`] so a malformed negative value never reaches
/// layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InsetSnapshot {
    /// Pixels reserved along the top edge.
    pub top: i32,
    /// Pixels reserved along the bottom edge.
    pub bottom: i32,
    /// Pixels reserved along the left edge.
    pub left: i32,
    /// Pixels reserved along the right edge.
    pub right: i32,
}

impl InsetSnapshot {
    /// No reservation on any edge.
    pub const ZERO: Self = Self {
        top: 0,
        bottom: 0,
        left: 0,
        right: 0,
    };

    /// Creates a snapshot from the four edge values.
    #[must_use]
    pub const fn new(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Returns the snapshot with every negative edge replaced by zero.
    #[must_use]
    pub const fn clamped(&self) -> Self {
        const fn floor(value: i32) -> i32 {
            if value < 0 { 0 } else { value }
        }

        Self {
            top: floor(self.top),
            bottom: floor(self.bottom),
            left: floor(self.left),
            right: floor(self.right),
        }
    }

    /// Returns true if any edge is negative.
    #[must_use]
    pub const fn has_negative(&self) -> bool {
        self.top < 0 || self.bottom < 0 || self.left < 0 || self.right < 0
    }

    /// Returns the value of a single edge.
    ///
    /// Composite flags such as [`FitSide::VERTICAL`] do not name one edge and
    /// read as zero.
    #[must_use]
    pub const fn get(&self, side: FitSide) -> i32 {
        match side.bits() {
            b if b == FitSide::TOP.bits() => self.top,
            b if b == FitSide::BOTTOM.bits() => self.bottom,
            b if b == FitSide::LEFT.bits() => self.left,
            b if b == FitSide::RIGHT.bits() => self.right,
            _ => 0,
        }
    }

    /// Keeps the edges in `sides` and zeroes the rest.
    #[must_use]
    pub const fn only(&self, sides: FitSide) -> Self {
        Self {
            top: if sides.contains(FitSide::TOP) { self.top } else { 0 },
            bottom: if sides.contains(FitSide::BOTTOM) { self.bottom } else { 0 },
            left: if sides.contains(FitSide::LEFT) { self.left } else { 0 },
            right: if sides.contains(FitSide::RIGHT) { self.right } else { 0 },
        }
    }

    /// Zeroes the edges in `sides` and keeps the rest.
    #[must_use]
    pub const fn without(&self, sides: FitSide) -> Self {
        self.only(sides.complement())
    }

    /// Returns true if every edge is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.top == 0 && self.bottom == 0 && self.left == 0 && self.right == 0
    }
}
