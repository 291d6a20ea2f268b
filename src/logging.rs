use std::fs::File;
use std::path::PathBuf;
use std::sync::Once;

use anyhow::Context;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "wormhole=debug"). The terminal belongs to the renderer while the loop
/// runs, so records go to `file` when one is given and are otherwise off
/// unless `RUST_LOG` asks for them.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub file: Option<PathBuf>,
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) -> anyhow::Result<()> {
    let target = match &config.file {
        Some(path) => Some(
            File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?,
        ),
        None => None,
    };

    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = &config.env_filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else if target.is_some() {
            builder.filter_level(log::LevelFilter::Info);
        } else {
            builder.filter_level(log::LevelFilter::Off);
        }

        if let Some(file) = target {
            builder
                .target(env_logger::Target::Pipe(Box::new(file)))
                .write_style(env_logger::WriteStyle::Never);
        }

        builder.init();

        log::debug!("logging initialized");
    });

    Ok(())
}
