//! GitHub deployment status updates
//!
//! A single `POST /repos/{repo}/deployments/{id}/statuses` call. No retries:
//! a failed request is reported once and the caller decides what to do.

use serde::{Deserialize, Serialize};

use crate::config::DeploymentConfig;

const ACCEPT: &str = "application/vnd.github+json";

/// Body of a deployment status request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentStatusRequest {
    /// e.g. "success", "failure", "in_progress"; passed through unchecked
    pub state: String,
    pub environment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment_url: Option<String>,
}

/// The subset of GitHub's deployment status response we report back
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeploymentStatus {
    pub id: u64,
    pub state: String,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub environment_url: Option<String>,
}

/// Blocking GitHub REST client, scoped to one access token
pub struct GitHubClient {
    agent: ureq::Agent,
    api_url: String,
    token: String,
}

impl GitHubClient {
    pub fn new(config: &DeploymentConfig, token: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(&config.user_agent)
            .build();
        Self {
            agent,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn statuses_url(&self, repo: &str, deployment_id: u64) -> String {
        format!(
            "{}/repos/{}/deployments/{}/statuses",
            self.api_url, repo, deployment_id
        )
    }

    /// Create a new status on an existing deployment
    pub fn create_deployment_status(
        &self,
        repo: &str,
        deployment_id: u64,
        request: &DeploymentStatusRequest,
    ) -> Result<DeploymentStatus, DeploymentError> {
        let url = self.statuses_url(repo, deployment_id);
        let body = serde_json::to_string(request).map_err(DeploymentError::Serialize)?;

        tracing::info!(
            "Setting deployment {} of {} to {:?} ({})",
            deployment_id,
            repo,
            request.state,
            request.environment
        );

        let response = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Accept", ACCEPT)
            .set("Content-Type", "application/json")
            .send_string(&body);

        match response {
            Ok(response) => {
                let text = response
                    .into_string()
                    .map_err(|e| DeploymentError::InvalidResponse(e.to_string()))?;
                let status: DeploymentStatus = serde_json::from_str(&text)
                    .map_err(|e| DeploymentError::InvalidResponse(e.to_string()))?;
                tracing::debug!("Created deployment status {}", status.id);
                Ok(status)
            }
            Err(ureq::Error::Status(code, response)) => {
                let body = response.into_string().unwrap_or_default();
                tracing::warn!("GitHub rejected deployment status: HTTP {}", code);
                Err(DeploymentError::Status { code, body })
            }
            Err(ureq::Error::Transport(transport)) => {
                Err(DeploymentError::Transport(transport.to_string()))
            }
        }
    }
}

/// Deployment status update error types
#[derive(Debug)]
pub enum DeploymentError {
    /// GitHub answered with a non-2xx status
    Status { code: u16, body: String },
    Transport(String),
    InvalidResponse(String),
    Serialize(serde_json::Error),
}

impl std::fmt::Display for DeploymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeploymentError::Status { code, body } => {
                write!(f, "GitHub API returned HTTP {}: {}", code, body)
            }
            DeploymentError::Transport(msg) => write!(f, "Transport error: {}", msg),
            DeploymentError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            DeploymentError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for DeploymentError {}
