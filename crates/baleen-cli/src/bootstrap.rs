use std::path::Path;

use anyhow::Context;
use baleen_config::BaleenConfig;

use crate::cli::GlobalFlags;

pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<BaleenConfig> {
    load_dotenv()?;

    let config = BaleenConfig::load().context("failed to load configuration")?;
    let config = apply_flag_overrides(config, flags);
    config.api.validate()?;

    tracing::debug!(endpoint = %config.api.endpoint, "configuration loaded");
    Ok(config)
}

/// Command-line flags win over every configuration layer.
fn apply_flag_overrides(mut config: BaleenConfig, flags: &GlobalFlags) -> BaleenConfig {
    if let Some(endpoint) = &flags.endpoint {
        config.api.endpoint.clone_from(endpoint);
    }
    config
}

fn load_dotenv() -> anyhow::Result<()> {
    let env_path = Path::new(".env");
    if env_path.exists() {
        dotenvy::from_path(env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
