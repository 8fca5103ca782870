//! Shared test setup.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber for tests when `RUST_LOG` is set.
///
/// Safe to call from every test; only the first call has any effect.
pub(crate) fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer().with_target(true))
                .with(filter)
                .try_init();
        }
    });
}
