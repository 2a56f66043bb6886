// cfn-retag-config - Run configuration for the retagging CLI
//
// Supports configuration from multiple sources:
// 1. Explicit path from the --config flag (must exist)
// 2. Config file path from the CFN_RETAG_CONFIG env var
// 3. Default config file locations (./cfn-retag.toml, ./.cfn-retag.toml)
// 4. Built-in defaults (lowest priority)

use anyhow::Result;
use serde::{Deserialize, Serialize};

use cfn_retag_core::{builtin_entries, FunctionMap, MapEntry, Tag};

mod sources;
mod validation;

/// Main run configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetagConfig {
    /// Case-insensitive stack-name prefix selecting the stacks to retag.
    #[serde(default = "default_category")]
    pub category: String,

    /// Ordered function-name remapping rules; first matching prefix wins.
    #[serde(default = "builtin_entries")]
    pub function_map: Vec<MapEntry>,

    /// Constant tags applied to every selected stack, ahead of the derived ones.
    #[serde(default = "default_static_tags")]
    pub static_tags: Vec<Tag>,

    #[serde(default)]
    pub aws: AwsConfig,

    #[serde(default)]
    pub log: LogConfig,
}

fn default_category() -> String {
    "inventory".to_string()
}

fn default_static_tags() -> Vec<Tag> {
    vec![Tag::new("Pillar", "hs"), Tag::new("Domain", "identity")]
}

impl Default for RetagConfig {
    fn default() -> Self {
        Self {
            category: default_category(),
            function_map: builtin_entries(),
            static_tags: default_static_tags(),
            aws: AwsConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// AWS client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AwsConfig {
    /// Region override; falls back to the ambient credential chain's region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level: trace, debug, info, warn, error.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl RetagConfig {
    /// Load configuration from the default source chain.
    pub fn load_or_default() -> Result<Self> {
        sources::load_or_default()
    }

    /// Load configuration from a specific file path (for the --config flag).
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        sources::load_from_file_path(path)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }

    /// The remapper built from the configured rules.
    pub fn function_map(&self) -> FunctionMap {
        FunctionMap::new(self.function_map.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_run() {
        let config = RetagConfig::default();
        assert_eq!(config.category, "inventory");
        assert_eq!(config.function_map.len(), 5);
        assert_eq!(config.static_tags[0], Tag::new("Pillar", "hs"));
        assert_eq!(config.log.level, "warn");
        assert!(config.aws.region.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn empty_toml_falls_back_to_defaults() {
        let config: RetagConfig = toml::from_str("").unwrap();
        assert_eq!(config.category, "inventory");
        assert_eq!(config.function_map.len(), 5);
    }

    #[test]
    fn toml_overrides_category_and_map() {
        let config: RetagConfig = toml::from_str(
            r#"
            category = "billing"

            [[function_map]]
            prefix = "ledger-"
            canonical = "ledger"

            [[static_tags]]
            key = "Pillar"
            value = "fin"

            [aws]
            region = "eu-central-1"
            "#,
        )
        .unwrap();
        assert_eq!(config.category, "billing");
        assert_eq!(config.function_map, vec![MapEntry::new("ledger-", "ledger")]);
        assert_eq!(config.static_tags, vec![Tag::new("Pillar", "fin")]);
        assert_eq!(config.aws.region.as_deref(), Some("eu-central-1"));
    }
}
