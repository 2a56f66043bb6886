// Run loop for the retagging CLI
//
// Enumerate root stacks matching the category filter, derive the replacement
// tag set from each stack name, and issue one UpdateStack per stack with
// UsePreviousTemplate and per-parameter UsePreviousValue so no template or
// parameter inputs are needed. Strictly sequential: one call in flight at a
// time, matching the original operational tool.

use anyhow::{Context, Result};
use aws_sdk_cloudformation::Client;
use cfn_retag_config::RetagConfig;
use cfn_retag_core::{derive_tags, StackIdentity};
use tracing::{debug, info};

mod init;
mod stacks;
mod update;

pub use init::init_tracing;
use update::UpdateOutcome;

/// Enumerate matching stacks and retag each one.
pub async fn run_with_config(config: RetagConfig, dry_run: bool) -> Result<()> {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
    if let Some(region) = config.aws.region.clone() {
        loader = loader.region(aws_config::Region::new(region));
    }
    let sdk_config = loader.load().await;
    let client = Client::new(&sdk_config);

    let targets = stacks::list_target_stacks(&client, &config.category).await?;
    info!(
        count = targets.len(),
        category = %config.category,
        "Selected root stacks for retagging"
    );

    let map = config.function_map();
    let mut applied = 0usize;
    let mut unchanged = 0usize;

    for stack in &targets {
        let identity: StackIdentity = stack
            .name
            .parse()
            .with_context(|| format!("Cannot derive tags for stack '{}'", stack.name))?;
        let tags = derive_tags(&identity, &map, &config.static_tags);

        info!("Processing {}", stack.name);
        debug!(%identity, "Derived identity");
        debug!(?tags, parameters = ?stack.parameter_keys, "Update inputs");

        if dry_run {
            info!("Dry run: skipping UpdateStack for {}", stack.name);
            continue;
        }

        match update::update_stack_tags(&client, stack, &tags).await? {
            UpdateOutcome::Applied => {
                info!("Updated tags for {}", stack.name);
                applied += 1;
            }
            UpdateOutcome::NoChanges => {
                info!("No changes required for {}", stack.name);
                unchanged += 1;
            }
        }
    }

    info!(
        selected = targets.len(),
        applied, unchanged, dry_run, "Retagging run complete"
    );

    Ok(())
}
