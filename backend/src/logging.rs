//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Records always go to stdout. Optional files mirror the full stream
//! (`logging.file`) or only `error` records (`logging.error_file`).

use anyhow::Context;
use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

use crate::config::{LogFormat, LoggingSettings};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the global subscriber.
///
/// # Errors
///
/// Fails if the filter directive is malformed, a log file cannot be opened,
/// or a global subscriber is already installed.
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    let filter = build_env_filter(&settings.level)?;
    let layers = build_layers(settings)?;

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .context("Failed to install tracing subscriber")?;
    Ok(())
}

/// Output layers for stdout and whichever log files are configured.
fn build_layers(settings: &LoggingSettings) -> anyhow::Result<Vec<BoxedLayer>> {
    let mut layers: Vec<BoxedLayer> = vec![format_layer(settings.format, std::io::stdout, true)];
    if let Some(path) = &settings.file {
        layers.push(format_layer(settings.format, Mutex::new(open_append(path)?), false));
    }
    if let Some(path) = &settings.error_file {
        let layer = format_layer(settings.format, Mutex::new(open_append(path)?), false)
            .with_filter(LevelFilter::ERROR)
            .boxed();
        layers.push(layer);
    }
    Ok(layers)
}

/// Parse an `EnvFilter` directive such as `info,tower_http=debug`.
pub fn build_env_filter(directive: &str) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_new(directive).with_context(|| format!("Invalid log filter '{}'", directive))
}

fn format_layer<W>(format: LogFormat, writer: W, ansi: bool) -> BoxedLayer
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_thread_ids(true)
        .with_ansi(ansi);

    match format {
        LogFormat::Json => layer.json().boxed(),
        LogFormat::Text => layer.boxed(),
    }
}

fn open_append(path: &Path) -> anyhow::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}
