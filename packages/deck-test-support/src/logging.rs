//! Test logging shared by unit and integration tests.
//!
//! Both `deck-draw`'s `#[cfg(test)]` build and its `tests/` binaries install
//! this from a `ctor`, so log output from the provider and session shows up
//! under cargo's captured test output.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Filter used when neither `TEST_LOG` nor `RUST_LOG` is set
pub const DEFAULT_TEST_FILTER: &str = "warn";

/// `TEST_LOG`, else `RUST_LOG`, else [`DEFAULT_TEST_FILTER`].
fn filter_directives() -> String {
    ["TEST_LOG", "RUST_LOG"]
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_TEST_FILTER.to_string())
}

/// Install the test subscriber once per process.
///
/// Safe to call from every test; later calls are no-ops, and a subscriber
/// installed by someone else is left alone.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_new(filter_directives())
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));

        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .with_target(false)
            .try_init();
    });
}
