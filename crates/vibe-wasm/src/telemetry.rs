//! Tracing setup for native hosts embedding the bridge.
//!
//! The exported ABI never logs; only host-side marshalling emits events.

use tracing_subscriber::EnvFilter;

use crate::config::BridgeConfig;

/// Installs a global `fmt` subscriber.
///
/// `RUST_LOG` wins over `config.log_filter`. Returns `false` when a global
/// subscriber was already installed (e.g. by the embedding app or another
/// test), which is not an error.
pub fn init_tracing(config: &BridgeConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        let config = BridgeConfig::default();
        let _ = init_tracing(&config);
        assert!(!init_tracing(&config));
    }
}
