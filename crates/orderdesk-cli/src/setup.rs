use anyhow::Context;
use orderdesk_core::config::{Config, WarnLevel};
use orderdesk_core::dataset::Dataset;
use orderdesk_core::store::RecordStore;
use std::path::{Path, PathBuf};

/// Resolve the effective configuration.
///
/// Priority for each value:
/// 1. Command-line flag / environment variable (passed in as overrides)
/// 2. Config file given by `--config` / `ORDERDESK_CONFIG`
/// 3. Built-in defaults
pub fn resolve_config(config_path: Option<&Path>, seed: Option<PathBuf>) -> anyhow::Result<Config> {
    let mut config = Config::load_or_default(config_path).with_context(|| match config_path {
        Some(p) => format!("failed to load config '{}'", p.display()),
        None => "failed to load config".to_string(),
    })?;

    if seed.is_some() {
        config.seed = seed;
    }

    for warning in config.validate() {
        match warning.level {
            WarnLevel::Warning => tracing::warn!("{}", warning.message),
            WarnLevel::Error => tracing::error!("{}", warning.message),
        }
    }

    Ok(config)
}

/// Build the record store from the configured seed file, or the built-in sample.
pub fn load_store(config: &Config) -> anyhow::Result<RecordStore> {
    let dataset = match &config.seed {
        Some(path) => Dataset::load(path)
            .with_context(|| format!("failed to load seed file '{}'", path.display()))?,
        None => {
            tracing::debug!("no seed file configured, using sample records");
            Dataset::sample()
        }
    };
    Ok(RecordStore::from_dataset(dataset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn seed_flag_overrides_config_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("orderdesk.yaml");
        std::fs::write(&config_path, "seed: /from/file.yaml\n").unwrap();

        let config =
            resolve_config(Some(&config_path), Some(PathBuf::from("/from/flag.yaml"))).unwrap();
        assert_eq!(config.seed, Some(PathBuf::from("/from/flag.yaml")));
    }

    #[test]
    fn no_seed_loads_sample() {
        let config = resolve_config(None, None).unwrap();
        let store = load_store(&config).unwrap();
        assert_eq!(store.orders.len(), 2);
    }

    #[test]
    fn missing_seed_is_error() {
        let dir = TempDir::new().unwrap();
        let config = resolve_config(None, Some(dir.path().join("absent.yaml"))).unwrap();
        let err = load_store(&config).unwrap_err();
        assert!(format!("{err:#}").contains("seed file not found"));
    }
}
