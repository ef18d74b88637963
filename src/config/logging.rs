//! Tracing setup for the `household` binary

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "HOUSEHOLD_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber once, writing to stderr
///
/// `HOUSEHOLD_LOG` wins over `default_level` when set.
pub fn init_tracing(default_level: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(format!("household_ledger={}", default_level)))
            .unwrap_or_else(|_| EnvFilter::new("household_ledger=warn"));

        // Another subscriber may already be installed by an embedding program
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_twice_does_not_panic() {
        super::init_tracing("debug");
        super::init_tracing("info");
    }
}
