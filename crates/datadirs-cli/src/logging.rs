//! Tracing setup for the CLI.
//!
//! Logs go to stderr from the start. The file sink is attached only when the
//! locater reports the write directory, so the log file is created there.
//! Level is controlled by `RUST_LOG` (default: info, or debug with
//! `--verbose`).

use std::io;
use std::path::Path;

use datadirs_core::LogInitializer;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::{Compact, DefaultFields, Format};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};

/// Name of the log file created in the write directory.
pub const LOG_FILE_NAME: &str = "datadirs.log";

type FileLayer = fmt::Layer<Registry, DefaultFields, Format<Compact>, NonBlocking>;

/// Handle to the installed subscriber; finishes setup in the write directory.
pub struct Logging {
    file_layer: reload::Handle<Option<FileLayer>, Registry>,
    // Flushes the file writer when dropped at the end of main.
    guard: Option<WorkerGuard>,
}

/// Install the global subscriber with stderr output only.
pub fn init(verbose: bool) -> Logging {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let (file_layer, handle) = reload::Layer::new(None::<FileLayer>);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .compact(),
        )
        .with(env_filter)
        .try_init()
        .ok(); // Ignore error if already initialized

    Logging {
        file_layer: handle,
        guard: None,
    }
}

impl LogInitializer for Logging {
    fn initialize(&mut self, write_dir: &Path) -> io::Result<()> {
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(LOG_FILE_NAME)
            .build(write_dir)
            .map_err(io::Error::other)?;
        let (writer, guard) = tracing_appender::non_blocking(appender);

        let layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false) // No ANSI colors in files
            .compact();
        self.file_layer
            .reload(Some(layer))
            .map_err(io::Error::other)?;

        self.guard = Some(guard);
        Ok(())
    }
}
