//! Tracing subscriber installation for hosts embedding `waterfit`.
//!
//! Inset deliveries and side toggles are reported as `tracing` events under
//! the `waterfit_core` and `waterfit_layout` targets. Hosts that already run
//! a subscriber get them for free; others can call [`install_tracing`].

use std::sync::OnceLock;

use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "info";

#[cfg(target_os = "android")]
const ANDROID_TAG: &str = "waterfit";

static INSTALLED: OnceLock<Result<(), InstallError>> = OnceLock::new();

/// Failure to install the global subscriber.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InstallError {
    /// Another global subscriber was set before ours.
    #[error("a global tracing subscriber is already installed: {0}")]
    AlreadyInstalled(String),
}

impl From<TryInitError> for InstallError {
    fn from(err: TryInitError) -> Self {
        Self::AlreadyInstalled(err.to_string())
    }
}

/// Installs a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
///
/// On Android the events also go to logcat. Calling this more than once
/// returns the outcome of the first call.
///
/// # Errors
///
/// Returns [`InstallError::AlreadyInstalled`] when the host set its own
/// global subscriber first.
pub fn install_tracing() -> Result<(), InstallError> {
    INSTALLED.get_or_init(try_install).clone()
}

fn try_install() -> Result<(), InstallError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let console = fmt::layer().with_ansi(false).with_filter(filter);

    #[cfg(target_os = "android")]
    let result = {
        let registry = tracing_subscriber::registry().with(console);
        if let Ok(android) = tracing_android::layer(ANDROID_TAG) {
            registry.with(android).try_init()
        } else {
            registry.try_init()
        }
    };

    #[cfg(not(target_os = "android"))]
    let result = tracing_subscriber::registry().with(console).try_init();

    result.map_err(InstallError::from)
}
