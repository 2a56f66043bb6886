//! Tag derivation
//!
//! The derived tag set is what UpdateStack replaces the stack's tags with:
//! the three keys computed from the stack name plus any operator-supplied
//! static tags (ownership labels like `Pillar` or `Domain`).

use serde::{Deserialize, Serialize};

use crate::funcmap::FunctionMap;
use crate::name::StackIdentity;

pub const TEAM_KEY: &str = "Team";
pub const FUNCTION_KEY: &str = "Function";
pub const ENVIRONMENT_KEY: &str = "Environment";

/// Keys always computed from the stack name; static tags may not use these.
pub const DERIVED_KEYS: [&str; 3] = [TEAM_KEY, FUNCTION_KEY, ENVIRONMENT_KEY];

/// A stack tag key/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Compute the full replacement tag set for a stack.
///
/// Static tags come first, derived tags after, matching the tag order the
/// original tagging runs produced.
pub fn derive_tags(
    identity: &StackIdentity,
    map: &FunctionMap,
    static_tags: &[Tag],
) -> Vec<Tag> {
    let mut tags: Vec<Tag> = static_tags.to_vec();
    tags.push(Tag::new(TEAM_KEY, identity.team.clone()));
    tags.push(Tag::new(ENVIRONMENT_KEY, identity.environment.clone()));
    tags.push(Tag::new(FUNCTION_KEY, map.resolve(&identity.function)));
    tags
}

impl StackIdentity {
    /// Rebuild an identity from an applied tag set.
    ///
    /// Returns `None` if any of the three derived keys is missing.
    pub fn from_tags(tags: &[Tag]) -> Option<Self> {
        let find = |key: &str| {
            tags.iter()
                .find(|t| t.key == key)
                .map(|t| t.value.clone())
        };
        Some(Self {
            team: find(TEAM_KEY)?,
            function: find(FUNCTION_KEY)?,
            environment: find(ENVIRONMENT_KEY)?,
        })
    }
}
