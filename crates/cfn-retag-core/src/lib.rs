//! Domain logic for deriving stack tags from CloudFormation stack names
//!
//! Everything in this crate is pure: name parsing, function-name remapping and
//! tag derivation have no AWS types and no side effects. The CLI crate wires
//! these into the actual DescribeStacks/UpdateStack calls.

mod funcmap;
mod name;
mod tags;

pub use funcmap::{builtin_entries, FunctionMap, MapEntry};
pub use name::{NameError, StackIdentity, BASE_FUNCTION, NO_ENVIRONMENT, SEGMENT_SEPARATOR};
pub use tags::{derive_tags, Tag, DERIVED_KEYS, ENVIRONMENT_KEY, FUNCTION_KEY, TEAM_KEY};
