//! Construction-time configuration for fitting containers.
//!
//! Hosts describe which edges a container fits either as a raw attribute
//! integer or in the flag text form (`"top|bottom"`). Both map onto a
//! [`FitConfig`]; an absent attribute means top and bottom.

use core::str::FromStr;

use waterfit_core::{FitSide, InsetFitPolicy, ParseSideError};
use waterfit_layout::{Axis, FittingScrollContainer};

/// Which sides a container fits when it is created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitConfig {
    /// Sides active from construction.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sides: FitSide,
}

impl FitConfig {
    /// Creates a configuration with `sides` active.
    #[must_use]
    pub const fn new(sides: FitSide) -> Self {
        Self { sides }
    }

    /// Reads an optional raw attribute; `None` falls back to top and bottom.
    #[must_use]
    pub fn from_attr(raw: Option<i32>) -> Self {
        raw.map_or_else(Self::default, |raw| Self::new(FitSide::from_attr(raw)))
    }

    /// Builds a policy with the configured sides active.
    #[must_use]
    pub const fn policy(&self) -> InsetFitPolicy {
        InsetFitPolicy::new(self.sides)
    }

    /// Builds a scroll container with the configured sides active.
    #[must_use]
    pub const fn scroll_container(&self, axis: Axis) -> FittingScrollContainer {
        FittingScrollContainer::new(axis, self.sides)
    }
}

impl FromStr for FitConfig {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sides = FitSide::parse_attr(s)?;
        tracing::debug!(attr = s, ?sides, "parsed fit side attribute");
        Ok(Self::new(sides))
    }
}

#[cfg(test)]
mod tests {
    use waterfit_core::{FitSystemBar, InsetSnapshot};

    use super::*;

    #[test]
    fn test_absent_attribute_defaults_to_top_and_bottom() {
        assert_eq!(FitConfig::from_attr(None).sides, FitSide::TOP | FitSide::BOTTOM);
        assert_eq!(FitConfig::default(), FitConfig::from_attr(None));
    }

    #[test]
    fn test_raw_attribute() {
        assert_eq!(FitConfig::from_attr(Some(0b1111)).sides, FitSide::ALL);
        assert_eq!(FitConfig::from_attr(Some(0)).sides, FitSide::empty());
    }

    #[test]
    fn test_parse_flag_text() {
        let config: FitConfig = "bottom | left".parse().unwrap();
        assert_eq!(config.sides, FitSide::BOTTOM | FitSide::LEFT);

        let err = "top|center".parse::<FitConfig>().unwrap_err();
        assert_eq!(err, ParseSideError::UnknownSide("center".into()));
        assert_eq!(err.to_string(), "unknown fit side `center`");
    }

    #[test]
    fn test_builders_share_sides() {
        let config = FitConfig::new(FitSide::BOTTOM);

        let mut policy = config.policy();
        assert_eq!(
            policy.update(InsetSnapshot::new(40, 20, 0, 0)),
            InsetSnapshot::new(40, 0, 0, 0)
        );

        let mut container = config.scroll_container(Axis::Vertical);
        container.on_insets_changed(InsetSnapshot::new(40, 20, 0, 0));
        assert_eq!(container.top_window_inset(), 0);
        assert_eq!(container.bottom_window_inset(), 20);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_config() {
        let config: FitConfig = serde_json::from_str(r#"{ "sides": "TOP | LEFT" }"#).unwrap();
        assert_eq!(config.sides, FitSide::TOP | FitSide::LEFT);

        let config: FitConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.sides, FitSide::VERTICAL);
    }
}
