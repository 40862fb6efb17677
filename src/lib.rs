//! System bar inset fitting for scrollable containers.
//!
//! The host windowing system reports how many pixels each screen edge
//! reserves for its status bar, navigation bar and cutouts. `waterfit` turns
//! those deliveries into content padding for the edges a container opts
//! into, and hands the rest on to the next consumer so nothing is reserved
//! twice.
//!
//! ```
//! use waterfit::prelude::*;
//!
//! let config: FitConfig = "top|bottom".parse().unwrap();
//! let mut container = config.scroll_container(Axis::Vertical);
//!
//! let remainder = container.on_insets_changed(InsetSnapshot::new(40, 20, 0, 0));
//! container.on_measure(ProposalSize::new(Some(360.0), Some(640.0)), &[]);
//!
//! assert!(remainder.is_zero());
//! assert_eq!(container.padding().top, 40.0);
//! ```

pub mod config;
pub mod logging;

#[doc(inline)]
pub use config::FitConfig;
#[doc(inline)]
pub use waterfit_core::{
    FitSide, FitSystemBar, InsetConsumer, InsetFitPolicy, InsetSnapshot, ParseSideError,
    dispatch_insets,
};
pub use waterfit_layout as layout;

pub mod prelude {
    //! Commonly used types and traits in one import.
    pub use crate::config::FitConfig;
    pub use waterfit_core::{
        FitSide, FitSystemBar, InsetConsumer, InsetFitPolicy, InsetSnapshot, dispatch_insets,
    };
    pub use waterfit_layout::{
        Axis, EdgeInsets, FittingScrollContainer, Layout, ProposalSize, Rect, Size, SubView,
    };
}
