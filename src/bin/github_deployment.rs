//! Update the status of a GitHub deployment.
//!
//! Usage: github_deployment <token> <repo> <deployment_id> <state> <environment> [environment_url]

use anyhow::{Context, Result};
use clap::Parser;
use monaco_themes::config::Config;
use monaco_themes::deployment::{DeploymentStatusRequest, GitHubClient};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "github_deployment")]
#[command(version, about = "Create a GitHub deployment status", long_about = None)]
struct Cli {
    /// GitHub access token
    token: String,

    /// Repository as owner/name
    repo: String,

    /// Numeric deployment id
    deployment_id: u64,

    /// New state (e.g. success, failure, in_progress)
    state: String,

    /// Environment name (e.g. production)
    environment: String,

    /// URL where the deployed environment can be reached
    environment_url: Option<String>,

    /// JSON config overriding the API URL or user agent
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    monaco_themes::logging::init();

    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref()).context("Failed to load config")?;

    let client = GitHubClient::new(&config.deployment, cli.token);
    let request = DeploymentStatusRequest {
        state: cli.state,
        environment: cli.environment,
        environment_url: cli.environment_url,
    };

    let status = client
        .create_deployment_status(&cli.repo, cli.deployment_id, &request)
        .with_context(|| {
            format!(
                "Failed to update deployment {} of {}",
                cli.deployment_id, cli.repo
            )
        })?;

    println!("Created deployment status {} ({})", status.id, status.state);
    Ok(())
}
