// Tag updater
//
// One UpdateStack per stack: previous template, every deployed parameter
// echoed with UsePreviousValue, and the replacement tag set. CloudFormation
// rejects an update that changes nothing with a ValidationError whose message
// is "No updates are to be performed."; that rejection is the idempotent
// success path here and must not propagate.

use anyhow::{Context, Result};
use aws_sdk_cloudformation::error::ProvideErrorMetadata;
use aws_sdk_cloudformation::types::{Capability, Parameter, Tag};
use aws_sdk_cloudformation::Client;

use crate::stacks::StackSummary;

/// Outcome of one UpdateStack call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UpdateOutcome {
    /// The stack accepted the update and is retagging.
    Applied,
    /// The desired tags already match; the service rejected a no-op update.
    NoChanges,
}

const NO_UPDATES_CODE: &str = "ValidationError";
const NO_UPDATES_MESSAGE: &str = "no updates are to be performed";

/// Replace a stack's tags, reusing its deployed template and parameters.
pub(crate) async fn update_stack_tags(
    client: &Client,
    stack: &StackSummary,
    tags: &[cfn_retag_core::Tag],
) -> Result<UpdateOutcome> {
    let parameters: Vec<Parameter> = stack
        .parameter_keys
        .iter()
        .map(|key| {
            Parameter::builder()
                .parameter_key(key)
                .use_previous_value(true)
                .build()
        })
        .collect();

    let sdk_tags = tags
        .iter()
        .map(|tag| Tag::builder().key(&tag.key).value(&tag.value).build())
        .collect::<Vec<Tag>>();

    let result = client
        .update_stack()
        .stack_name(&stack.name)
        .use_previous_template(true)
        .set_parameters(Some(parameters))
        .capabilities(Capability::CapabilityNamedIam)
        .set_tags(Some(sdk_tags))
        .send()
        .await;

    match result {
        Ok(_) => Ok(UpdateOutcome::Applied),
        Err(err) => {
            let no_changes = err
                .as_service_error()
                .map(|service_err| {
                    is_no_changes_error(service_err.code(), service_err.message())
                })
                .unwrap_or(false);
            if no_changes {
                Ok(UpdateOutcome::NoChanges)
            } else {
                Err(err).with_context(|| format!("UpdateStack failed for '{}'", stack.name))
            }
        }
    }
}

/// Structured classification of the service's no-op rejection.
pub(crate) fn is_no_changes_error(code: Option<&str>, message: Option<&str>) -> bool {
    code == Some(NO_UPDATES_CODE)
        && message.is_some_and(|m| m.to_ascii_lowercase().contains(NO_UPDATES_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_op_rejection_is_classified() {
        assert!(is_no_changes_error(
            Some("ValidationError"),
            Some("No updates are to be performed.")
        ));
    }

    #[test]
    fn other_validation_errors_propagate() {
        assert!(!is_no_changes_error(
            Some("ValidationError"),
            Some("Stack [inventory--sink-s3--prod] does not exist")
        ));
    }

    #[test]
    fn matching_message_with_other_code_propagates() {
        assert!(!is_no_changes_error(
            Some("InsufficientCapabilitiesException"),
            Some("No updates are to be performed.")
        ));
    }

    #[test]
    fn missing_metadata_propagates() {
        assert!(!is_no_changes_error(None, None));
        assert!(!is_no_changes_error(Some("ValidationError"), None));
    }
}
