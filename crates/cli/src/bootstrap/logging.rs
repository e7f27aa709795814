use ferrous_resolver_domain::config::LogFormat;
use ferrous_resolver_domain::Config;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout carries only answers. `RUST_LOG` wins over
/// the configured level when set.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.to_lowercase()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true);

    match config.logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.with_ansi(true).init(),
    }

    debug!("Logging initialized at level: {}", config.logging.level);
}
