use anyhow::{Context, Result};
use cfn_retag_config::RetagConfig;
use clap::Parser;
use std::path::PathBuf;

/// Reapply name-derived tags to root CloudFormation stacks
#[derive(Parser)]
#[command(name = "cfn-retag")]
#[command(version)]
#[command(
    about = "Reapply name-derived tags to root CloudFormation stacks",
    long_about = None
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// AWS region (overrides config file and credential chain)
    #[arg(long, value_name = "REGION")]
    region: Option<String>,

    /// Stack-name prefix to select (overrides config file)
    #[arg(long, value_name = "PREFIX")]
    category: Option<String>,

    /// Derive and log tags without calling UpdateStack
    #[arg(long)]
    dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?
        .block_on(async_main(cli))
}

async fn async_main(cli: Cli) -> Result<()> {
    let mut config = if let Some(config_path) = &cli.config {
        RetagConfig::load_from_path(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        RetagConfig::load_or_default().context("Failed to load configuration")?
    };

    apply_cli_overrides(&mut config, &cli)?;

    cfn_retag_cli::init_tracing(&config.log.level);

    cfn_retag_cli::run_with_config(config, cli.dry_run).await
}

fn apply_cli_overrides(config: &mut RetagConfig, cli: &Cli) -> Result<()> {
    if let Some(region) = &cli.region {
        config.aws.region = Some(region.clone());
    }

    if let Some(category) = &cli.category {
        config.category = category.clone();
    }

    // -v bumps the level regardless of what the config file says
    match cli.verbose {
        0 => {}
        1 => config.log.level = "info".to_string(),
        _ => config.log.level = "debug".to_string(),
    }

    // Overrides can invalidate a config that loaded cleanly
    config.validate()
}
