//! Tracing setup.
//!
//! The terminal editor owns the screen, so it logs to `<log dir>/gobi.log`
//! through a non-blocking writer. One-shot commands log to stderr.
//! `RUST_LOG` wins over the configured `GOBI_LOG` filter.

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gobi::config::Config;

/// Keeps the file writer alive; dropping it flushes pending lines.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    File,
    Stderr,
}

fn filter(cfg: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.log_filter()))
}

pub fn init(cfg: &Config, target: Target) -> LoggingGuard {
    match target {
        Target::Stderr => {
            let _ = tracing_subscriber::registry()
                .with(filter(cfg))
                .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
                .try_init();
            LoggingGuard { _file_guard: None }
        }
        Target::File => {
            let dir = cfg.log_dir();
            if let Err(e) = fs::create_dir_all(&dir) {
                eprintln!("[gobi] failed to create log directory {}: {}", dir.display(), e);
                return LoggingGuard { _file_guard: None };
            }
            let appender = tracing_appender::rolling::never(&dir, "gobi.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = tracing_subscriber::registry()
                .with(filter(cfg))
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .try_init();
            LoggingGuard {
                _file_guard: Some(guard),
            }
        }
    }
}
