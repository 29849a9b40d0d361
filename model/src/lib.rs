//! Data model for the recipe box application.

pub mod password;
pub mod schema;
pub mod store;

use tracing_subscriber::EnvFilter;

/// Initialize logging for a binary or test entry point.
///
/// The filter is taken from the `RUST_LOG` environment variable. Calling this
/// more than once is harmless; only the first call installs a subscriber.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
