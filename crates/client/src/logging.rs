//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(debug: bool) -> &'static str {
    if debug {
        "osctl=debug,osctl_client=debug,osctl_core=debug"
    } else {
        "osctl=warn,osctl_client=warn,osctl_core=warn"
    }
}

/// Install the global subscriber, writing to stderr so stdout stays parseable.
///
/// `--debug` overrides `RUST_LOG`.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::new(default_filter(true))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(false).into())
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert!(default_filter(true).contains("osctl_client=debug"));
        assert!(default_filter(false).contains("osctl_client=warn"));
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
