//! Logging setup
//!
//! The library logs through the `log` facade. With the `debug` feature,
//! [`init`] installs `env_logger`, honoring `RUST_LOG` and falling back to
//! the given filter.

/// Install the logger. Returns `false` when a logger was already installed
/// or the `debug` feature is disabled.
pub fn init(default_filter: &str) -> bool {
    #[cfg(feature = "debug")]
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
            .format_timestamp_millis()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "debug"))]
    {
        let _ = default_filter;
        false
    }
}

/// Install the logger for tests; repeated calls are harmless
pub fn init_for_tests() {
    #[cfg(feature = "debug")]
    {
        let _ = env_logger::builder().is_test(true).try_init();
    }
}
