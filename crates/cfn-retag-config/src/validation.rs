// Configuration validation
//
// Rejects configurations that would select nothing, remap nothing usefully,
// or let a static tag shadow a derived one.

use anyhow::{bail, Result};
use tracing::warn;

use cfn_retag_core::{MapEntry, Tag, DERIVED_KEYS};

use crate::RetagConfig;

pub fn validate_config(config: &RetagConfig) -> Result<()> {
    if config.category.is_empty() {
        bail!("category must not be empty; every stack name would match");
    }

    validate_function_map(&config.function_map)?;
    validate_static_tags(&config.static_tags)?;

    Ok(())
}

fn validate_function_map(entries: &[MapEntry]) -> Result<()> {
    for entry in entries {
        if entry.prefix.is_empty() {
            bail!(
                "function_map entry for '{}' has an empty prefix; it would match every token",
                entry.canonical
            );
        }
        if entry.canonical.is_empty() {
            bail!(
                "function_map entry for prefix '{}' has an empty canonical name",
                entry.prefix
            );
        }
    }

    // Later entries shadowed by an earlier, shorter prefix never fire.
    for (i, entry) in entries.iter().enumerate() {
        if entries[..i]
            .iter()
            .any(|earlier| entry.prefix.starts_with(&earlier.prefix))
        {
            warn!(
                prefix = %entry.prefix,
                "function_map entry is shadowed by an earlier entry and will never match"
            );
        }
    }

    Ok(())
}

fn validate_static_tags(tags: &[Tag]) -> Result<()> {
    for tag in tags {
        if tag.key.is_empty() {
            bail!("static_tags entry has an empty key");
        }
        if DERIVED_KEYS.contains(&tag.key.as_str()) {
            bail!(
                "static tag '{}' collides with a derived tag key; derived keys are {:?}",
                tag.key,
                DERIVED_KEYS
            );
        }
    }

    let mut seen: Vec<&str> = Vec::new();
    for tag in tags {
        if seen.contains(&tag.key.as_str()) {
            bail!("static tag '{}' is listed twice", tag.key);
        }
        seen.push(&tag.key);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfn_retag_core::TEAM_KEY;

    #[test]
    fn default_config_is_valid() {
        validate_config(&RetagConfig::default()).unwrap();
    }

    #[test]
    fn empty_category_is_rejected() {
        let config = RetagConfig {
            category: String::new(),
            ..RetagConfig::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn empty_prefix_is_rejected() {
        let config = RetagConfig {
            function_map: vec![MapEntry::new("", "matcher")],
            ..RetagConfig::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn derived_key_collision_is_rejected() {
        let config = RetagConfig {
            static_tags: vec![Tag::new(TEAM_KEY, "override")],
            ..RetagConfig::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn duplicate_static_keys_are_rejected() {
        let config = RetagConfig {
            static_tags: vec![Tag::new("Pillar", "hs"), Tag::new("Pillar", "fin")],
            ..RetagConfig::default()
        };
        assert!(validate_config(&config).is_err());
    }
}
