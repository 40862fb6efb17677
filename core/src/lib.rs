#![no_std]
//! Core building blocks for system bar aware containers.
//!
//! The host windowing system reports how many device pixels each screen edge
//! reserves for its own bars (status bar, navigation bar, display cutouts).
//! Containers that draw edge-to-edge need to pad their content by those
//! amounts, but only on the edges they opted into, and never twice along a
//! chain of nested consumers.
//!
//! - [`FitSide`] names the edges a consumer opts into.
//! - [`InsetSnapshot`] is one delivery of raw edge values.
//! - [`InsetFitPolicy`] decides how much of a snapshot a consumer keeps and
//!   how much it hands on to the next consumer.
//! - [`layout`] holds the geometry and two-pass layout protocol that
//!   containers use to apply the resolved values as padding.

extern crate alloc;

pub mod insets;
pub mod layout;
pub mod policy;

pub use insets::{FitSide, InsetSnapshot, ParseSideError};
pub use policy::{FitSystemBar, InsetConsumer, InsetFitPolicy, dispatch_insets};
