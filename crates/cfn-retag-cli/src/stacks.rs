// Stack enumeration
//
// DescribeStacks with SDK pagination, filtered to root stacks whose name
// matches the category prefix. Read-only; the parameter keys captured here
// feed the UsePreviousValue echo in the update call.

use anyhow::{Context, Result};
use aws_sdk_cloudformation::Client;
use tracing::debug;

/// The slice of a described stack the updater needs.
#[derive(Debug, Clone)]
pub(crate) struct StackSummary {
    pub name: String,
    /// Keys of the currently deployed parameters.
    pub parameter_keys: Vec<String>,
}

/// List root stacks whose name matches the category prefix.
pub(crate) async fn list_target_stacks(
    client: &Client,
    category: &str,
) -> Result<Vec<StackSummary>> {
    let mut targets = Vec::new();

    let mut pages = client.describe_stacks().into_paginator().send();
    while let Some(page) = pages.next().await {
        let page = page.context("DescribeStacks call failed")?;
        for stack in page.stacks() {
            let Some(name) = stack.stack_name() else {
                continue;
            };
            if !is_target(name, stack.root_id(), category) {
                debug!("Skipping {}", name);
                continue;
            }
            targets.push(StackSummary {
                name: name.to_string(),
                parameter_keys: stack
                    .parameters()
                    .iter()
                    .filter_map(|p| p.parameter_key().map(str::to_string))
                    .collect(),
            });
        }
    }

    Ok(targets)
}

/// Selection rule: root stacks only (no RootId), case-insensitive
/// category-prefix match on the stack name.
pub(crate) fn is_target(name: &str, root_id: Option<&str>, category: &str) -> bool {
    if root_id.is_some() {
        return false;
    }
    name.get(..category.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_prefix_is_case_insensitive() {
        assert!(is_target("inventory--sink-s3--prod", None, "inventory"));
        assert!(is_target("Inventory--sink-s3--prod", None, "inventory"));
        assert!(is_target("INVENTORYBASE", None, "inventory"));
    }

    #[test]
    fn prefix_must_match_from_the_start() {
        assert!(!is_target("bi--inventory-sync--prod", None, "inventory"));
        assert!(!is_target("invent", None, "inventory"));
    }

    #[test]
    fn nested_stacks_are_never_selected() {
        assert!(!is_target(
            "inventory--sink-s3--prod-NestedChild-4XYZ",
            Some("arn:aws:cloudformation:eu-central-1:123456789012:stack/inventory--sink-s3--prod/guid"),
            "inventory"
        ));
    }
}
