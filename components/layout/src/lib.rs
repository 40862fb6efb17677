#![no_std]
//! Containers that pad their content by the system bar insets they fit.
//!
//! The crate is a thin layer over [`waterfit_core`]: a container owns one
//! [`InsetFitPolicy`], forwards every inset delivery to it, and copies the
//! resolved values into its padding on every measurement pass.
//!
//! ```
//! use waterfit_layout::{FitSide, FitSystemBar, InsetSnapshot, scroll::FittingScrollContainer};
//!
//! let mut container = FittingScrollContainer::vertical(FitSide::TOP | FitSide::BOTTOM);
//! let remainder = container.on_insets_changed(InsetSnapshot::new(48, 24, 0, 0));
//!
//! assert!(remainder.is_zero());
//! assert_eq!(container.top_window_inset(), 48);
//! ```

extern crate alloc;

pub use waterfit_core::layout::*;
pub use waterfit_core::{
    FitSide, FitSystemBar, InsetConsumer, InsetFitPolicy, InsetSnapshot, ParseSideError,
    dispatch_insets,
};

pub mod padding;
pub mod scroll;

pub use padding::{EdgeInsets, PaddingLayout};
pub use scroll::{Axis, FittingScrollContainer};
