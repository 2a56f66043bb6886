//! Stack name parsing
//!
//! Stack names follow the `<team>--<function>--<environment>` convention.
//! Base stacks are the one exception: a single segment with no separator,
//! which maps to function `base` and environment `n/a`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Delimiter between the team, function and environment segments.
pub const SEGMENT_SEPARATOR: &str = "--";

/// Function assigned to single-segment base stacks.
pub const BASE_FUNCTION: &str = "base";

/// Environment assigned to single-segment base stacks.
pub const NO_ENVIRONMENT: &str = "n/a";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    /// The name split into a segment count the convention does not define.
    #[error(
        "malformed stack name '{name}': expected <team>--<function>--<environment> \
         or a single base-stack segment, found {segments} segment(s)"
    )]
    MalformedName { name: String, segments: usize },

    /// A separator with nothing on one side, e.g. `team----prod`.
    #[error("malformed stack name '{name}': empty segment")]
    EmptySegment { name: String },
}

/// Metadata extracted from a stack name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackIdentity {
    pub team: String,
    pub function: String,
    pub environment: String,
}

impl FromStr for StackIdentity {
    type Err = NameError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = name.split(SEGMENT_SEPARATOR).collect();

        if segments.iter().any(|s| s.is_empty()) {
            return Err(NameError::EmptySegment {
                name: name.to_string(),
            });
        }

        match segments.as_slice() {
            [team, function, environment] => Ok(Self {
                team: team.to_string(),
                function: function.to_string(),
                environment: environment.to_string(),
            }),
            [team] => Ok(Self {
                team: team.to_string(),
                function: BASE_FUNCTION.to_string(),
                environment: NO_ENVIRONMENT.to_string(),
            }),
            // Anything else is undefined by the naming convention; surface it
            // instead of guessing and mis-tagging the stack.
            _ => Err(NameError::MalformedName {
                name: name.to_string(),
                segments: segments.len(),
            }),
        }
    }
}

impl fmt::Display for StackIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "team={} function={} environment={}",
            self.team, self.function, self.environment
        )
    }
}
