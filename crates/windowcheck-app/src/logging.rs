use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

/// Handle for swapping the log filter once configuration is known.
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
}

/// ## Summary
/// Installs the global subscriber. Logs go to stderr at `warn` until
/// [`LogHandle::apply_level`] is called.
#[must_use]
pub fn init_logging() -> LogHandle {
    let (filter_layer, filter) = reload::Layer::new(EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    LogHandle { filter }
}

impl LogHandle {
    /// Replaces the active filter, keeping the current one if `level` is invalid.
    pub fn apply_level(&self, level: &str) {
        if let Ok(new_filter) = EnvFilter::try_new(level) {
            if let Err(e) = self.filter.modify(|current| *current = new_filter) {
                tracing::warn!(error = %e, "Failed to update log filter");
            }
        } else {
            tracing::warn!(level, "Invalid log level, keeping previous filter");
        }
    }
}

/// Level from `-v` flags when given, otherwise the configured one.
#[must_use]
pub fn effective_level(configured: &str, verbose: u8) -> &str {
    match verbose {
        0 => configured,
        1 => "debug",
        _ => "trace",
    }
}
