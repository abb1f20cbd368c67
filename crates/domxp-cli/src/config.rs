//! Configuration loading

use std::fs;
use std::path::Path;

use anyhow::Context;
use domxp::FactoryConfig;

/// Load factory configuration from a JSON file, or defaults when no path
/// is given. Missing keys take their default values.
pub fn load(path: Option<&Path>) -> anyhow::Result<FactoryConfig> {
    let Some(path) = path else {
        return Ok(FactoryConfig::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: FactoryConfig = serde_json::from_str(&text)
        .with_context(|| format!("invalid config file {}", path.display()))?;

    tracing::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}
