use std::path::Path;

use anyhow::Result;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system with tracing.
///
/// `RUST_LOG` takes precedence when set; otherwise the crate logs at info
/// (debug with `verbose`) and everything else at warn. With `log_dir`, logs
/// are also written to a daily-rotated file in that directory.
pub fn init_logging(log_dir: Option<&Path>, verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    let registry = tracing_subscriber::registry().with(filter);

    if let Some(dir) = log_dir {
        let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, "fretfall.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // Keep the guard alive for the process lifetime; init_logging runs once.
        std::mem::forget(guard);

        registry
            .with(fmt::layer().with_target(true))
            .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
            .init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }

    Ok(())
}

fn default_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "info" };
    EnvFilter::new(format!("fretfall={level},warn"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_tracks_verbosity() {
        assert!(default_filter(false).to_string().contains("fretfall=info"));
        assert!(default_filter(true).to_string().contains("fretfall=debug"));
    }
}
