// Configuration source loading.
//
// Priority order:
// 1. Explicit path (--config flag)
// 2. Config file path from CFN_RETAG_CONFIG
// 3. Default config files (./cfn-retag.toml, ./.cfn-retag.toml)
// 4. Built-in defaults

use anyhow::{Context, Result};
use std::env;
use std::path::Path;

use crate::RetagConfig;

const ENV_CONFIG_PATH: &str = "CFN_RETAG_CONFIG";
const DEFAULT_LOCATIONS: [&str; 2] = ["./cfn-retag.toml", "./.cfn-retag.toml"];

/// Load configuration with graceful fallback to built-in defaults.
pub fn load_or_default() -> Result<RetagConfig> {
    let config = match load_from_default_sources()? {
        Some(config) => config,
        None => RetagConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Load configuration from a specific file path.
/// Returns an error if the file doesn't exist or can't be parsed.
pub fn load_from_file_path(path: impl AsRef<Path>) -> Result<RetagConfig> {
    let path = path.as_ref();
    let config = read_config(path)?;
    config.validate()?;
    Ok(config)
}

fn load_from_default_sources() -> Result<Option<RetagConfig>> {
    if let Ok(path) = env::var(ENV_CONFIG_PATH) {
        return read_config(Path::new(&path)).map(Some);
    }

    for path in DEFAULT_LOCATIONS {
        if Path::new(path).exists() {
            return read_config(Path::new(path)).map(Some);
        }
    }

    Ok(None)
}

fn read_config(path: &Path) -> Result<RetagConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn explicit_path_loads_and_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "category = \"inventory\"").unwrap();
        writeln!(file, "[log]").unwrap();
        writeln!(file, "level = \"debug\"").unwrap();

        let config = load_from_file_path(file.path()).unwrap();
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        assert!(load_from_file_path("/nonexistent/cfn-retag.toml").is_err());
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "category = ").unwrap();
        assert!(load_from_file_path(file.path()).is_err());
    }

    #[test]
    fn invalid_config_fails_validation_on_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "category = \"\"").unwrap();
        assert!(load_from_file_path(file.path()).is_err());
    }
}
