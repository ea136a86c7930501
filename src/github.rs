//! GitHub API client
//!
//! Boundary collaborator for fetching pull request metadata, changed files,
//! and comments, and for posting review comments back. Sync HTTP via ureq;
//! the analysis core never touches this module.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://api.github.com";
const USER_AGENT: &str = "pr-review-agent";

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("GitHub API error: {status} - {body}")]
    Api { status: u16, body: String },
}

pub type GitHubResult<T> = Result<T, GitHubError>;

/// Pull request metadata (subset of the API response)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub state: String,
}

/// One changed file in a pull request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrFile {
    pub filename: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub additions: u64,
    #[serde(default)]
    pub deletions: u64,
    #[serde(default)]
    pub patch: Option<String>,
}

/// An issue-level comment on a pull request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueComment {
    pub id: u64,
    #[serde(default)]
    pub body: String,
}

pub struct GitHubClient {
    token: Option<String>,
    base_url: String,
    agent: ureq::Agent,
}

fn make_agent() -> ureq::Agent {
    ureq::config::Config::builder()
        .http_status_as_error(false) // status codes are handled explicitly
        .timeout_global(Some(Duration::from_secs(30)))
        .build()
        .new_agent()
}

impl GitHubClient {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token,
            base_url: DEFAULT_BASE_URL.to_string(),
            agent: make_agent(),
        }
    }

    /// Token from `GITHUB_TOKEN` when set; unauthenticated otherwise
    pub fn from_env() -> Self {
        Self::new(std::env::var("GITHUB_TOKEN").ok())
    }

    /// Point the client at a different API root (tests, GitHub Enterprise)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn get_pull_request(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> GitHubResult<PullRequest> {
        self.get_json(&format!(
            "{}/repos/{owner}/{repo}/pulls/{number}",
            self.base_url
        ))
    }

    pub fn get_pull_request_files(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> GitHubResult<Vec<PrFile>> {
        self.get_json(&format!(
            "{}/repos/{owner}/{repo}/pulls/{number}/files",
            self.base_url
        ))
    }

    pub fn get_pull_request_comments(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> GitHubResult<Vec<IssueComment>> {
        self.get_json(&format!(
            "{}/repos/{owner}/{repo}/issues/{number}/comments",
            self.base_url
        ))
    }

    pub fn create_comment(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        body: &str,
    ) -> GitHubResult<IssueComment> {
        let url = format!(
            "{}/repos/{owner}/{repo}/issues/{number}/comments",
            self.base_url
        );
        let response = self
            .request(self.agent.post(&url))
            .send_json(serde_json::json!({ "body": body }))
            .map_err(|e| GitHubError::Transport(e.to_string()))?;
        Self::read_response(response)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> GitHubResult<T> {
        let response = self
            .request(self.agent.get(url))
            .call()
            .map_err(|e| GitHubError::Transport(e.to_string()))?;
        Self::read_response(response)
    }

    fn request<B>(&self, builder: ureq::RequestBuilder<B>) -> ureq::RequestBuilder<B> {
        let mut builder = builder
            .header("Accept", "application/vnd.github.v3+json")
            .header("User-Agent", USER_AGENT);
        if let Some(token) = &self.token {
            builder = builder.header("Authorization", &format!("token {token}"));
        }
        builder
    }

    fn read_response<T: DeserializeOwned>(
        mut response: ureq::http::Response<ureq::Body>,
    ) -> GitHubResult<T> {
        let status = response.status().as_u16();
        if status >= 400 {
            let body = response.into_body().read_to_string().unwrap_or_default();
            return Err(GitHubError::Api { status, body });
        }
        response
            .body_mut()
            .read_json::<T>()
            .map_err(|e| GitHubError::Transport(e.to_string()))
    }
}
