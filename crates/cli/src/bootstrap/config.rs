use ferrous_resolver_domain::{CliOverrides, Config};
use tracing::debug;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    debug!(
        config_file = config_path.unwrap_or("default"),
        nameserver = %config.resolver.nameserver,
        timeout_ms = config.resolver.query_timeout_ms,
        retries = config.resolver.retries,
        max_alias_depth = config.resolver.max_alias_depth,
        "Configuration loaded"
    );

    Ok(config)
}
