use fops_config::FopsConfig;

/// `.env` from the working directory, then the layered config.
pub fn load_config() -> anyhow::Result<FopsConfig> {
    let config = FopsConfig::load_with_dotenv()?;
    tracing::debug!(base_url = %config.api.base_url, "configuration loaded");
    Ok(config)
}
