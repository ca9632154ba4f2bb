// git-mirror: Git Repository Mirroring Tool
//
// SPDX-FileCopyrightText: 2026 The git-mirror Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! GitLab provider backed by the REST API v4.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use crate::error::ProviderError;
use crate::settings::GitlabSettings;

use super::{Provider, repo_short_name};

const PROVIDER_NAME: &str = "gitlab";

pub struct GitlabProvider {
    client: reqwest::Client,
    api_base: String,
    namespace: String,
    token: String,
}

#[derive(Deserialize)]
struct CreatedProject {
    ssh_url_to_repo: String,
}

impl GitlabProvider {
    #[must_use]
    pub fn new(settings: &GitlabSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: settings.api_base.clone(),
            namespace: settings.namespace.clone(),
            token: settings.token.clone(),
        }
    }

    fn network(err: reqwest::Error) -> ProviderError {
        ProviderError::Network {
            provider: PROVIDER_NAME,
            source: err,
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(ProviderError::Api {
            provider: PROVIDER_NAME,
            status: status.as_u16(),
            message,
        })
    }

    /// Project path (`group/name`) extracted from a GitLab remote URL,
    /// covering both scp-like and scheme-prefixed forms.
    fn project_path(url: &str) -> String {
        let tail = url
            .split_once("://")
            .map_or(url, |(_, rest)| rest)
            .split_once([':', '/'])
            .map_or(url, |(_, path)| path);

        tail.trim_start_matches('/')
            .trim_end_matches('/')
            .trim_end_matches(".git")
            .to_string()
    }
}

#[async_trait]
impl Provider for GitlabProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn matches(&self, url: &str) -> bool {
        url.contains("gitlab")
    }

    async fn create_repository(&self, url: &str) -> Result<String, ProviderError> {
        let name = repo_short_name(url);
        info!(name, "creating gitlab repository");

        // The API wants a numeric namespace id; tolerate it being quoted
        // in the settings file.
        let namespace_id = self
            .namespace
            .parse::<u64>()
            .map_or_else(|_| json!(self.namespace), |id| json!(id));

        let response = self
            .client
            .post(format!("{}/projects", self.api_base))
            .header("PRIVATE-TOKEN", &self.token)
            .json(&json!({ "name": name, "namespace_id": namespace_id }))
            .send()
            .await
            .map_err(Self::network)?;

        let project: CreatedProject = Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|err| ProviderError::Response {
                provider: PROVIDER_NAME,
                message: format!("malformed project payload: {err}"),
            })?;

        debug!(clone_url = %project.ssh_url_to_repo, "gitlab repository created");
        Ok(project.ssh_url_to_repo)
    }

    async fn delete_repository(&self, url: &str) -> Result<bool, ProviderError> {
        let path = Self::project_path(url);
        info!(path, "deleting gitlab repository");

        let encoded = path.replace('/', "%2F");
        let response = self
            .client
            .delete(format!("{}/projects/{encoded}", self.api_base))
            .header("PRIVATE-TOKEN", &self.token)
            .send()
            .await
            .map_err(Self::network)?;

        Self::check_status(response).await?;
        Ok(true)
    }
}
