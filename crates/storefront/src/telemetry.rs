//! Tracing setup for applications embedding the storefront stores.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "cake_shop_storefront=info";

/// Install a global fmt subscriber filtered by `RUST_LOG`.
///
/// Falls back to `default_filter` (or [`DEFAULT_LOG_FILTER`]) when `RUST_LOG`
/// is unset or invalid. Calling this more than once is harmless; only the
/// first call installs a subscriber.
pub fn init_tracing(default_filter: Option<&str>) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.unwrap_or(DEFAULT_LOG_FILTER).into());

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if result.is_ok() {
        tracing::debug!("Tracing initialized");
    }
}
