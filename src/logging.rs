use std::sync::Once;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

static INIT: Once = Once::new();

#[cfg(debug_assertions)]
const DEFAULT_FILTER: &str = "nfc_reader=debug";

#[cfg(not(debug_assertions))]
const DEFAULT_FILTER: &str = "nfc_reader=info";

/// Install the global subscriber, `RUST_LOG` wins over the build default
pub fn init() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let result = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init();

        // the host app or a test harness may already own the global subscriber
        if let Err(error) = result {
            tracing::debug!("logging already initialized: {error}");
        }
    });
}
