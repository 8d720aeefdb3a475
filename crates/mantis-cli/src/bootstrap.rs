use anyhow::Context;
use mantis_config::MantisConfig;

use crate::cli::GlobalFlags;

/// Load layered config (with `.env`) and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<MantisConfig> {
    let mut config = MantisConfig::load_with_dotenv().context("failed to load configuration")?;

    if let Some(base_url) = &flags.base_url {
        config.api.base_url.clone_from(base_url);
        config
            .api
            .validate()
            .context("invalid --base-url")?;
    }

    tracing::debug!(base_url = %config.api.base_url, "configuration loaded");
    Ok(config)
}
