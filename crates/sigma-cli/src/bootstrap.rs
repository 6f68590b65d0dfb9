use std::path::Path;

use anyhow::Context;
use sigma_config::SigmaConfig;

use crate::cli::GlobalFlags;

/// Resolve the configuration for this invocation.
///
/// `--root` overrides `data.root` after every other layer, so it also wins
/// over `SIGMA_DATA__ROOT`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<SigmaConfig> {
    if let Some(root) = &flags.root {
        load_root_dotenv(root)?;
    }

    let mut config = match &flags.config {
        Some(path) => SigmaConfig::load_from_file(path)
            .with_context(|| format!("failed to load config file {}", path.display()))?,
        None => SigmaConfig::load_with_dotenv().context("failed to load configuration")?,
    };

    if let Some(root) = &flags.root {
        config.data.root = root.to_string_lossy().into_owned();
        config.validate().context("invalid --root")?;
    }

    tracing::debug!(root = %config.data.root_path().display(), "configuration resolved");
    Ok(config)
}

fn load_root_dotenv(root: &Path) -> anyhow::Result<()> {
    let env_path = root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
