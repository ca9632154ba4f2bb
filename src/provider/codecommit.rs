// git-mirror: Git Repository Mirroring Tool
//
// SPDX-FileCopyrightText: 2026 The git-mirror Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! AWS CodeCommit provider driven through the `aws` CLI.
//!
//! Shelling out keeps credential handling (profiles, SSO, instance roles)
//! entirely with the AWS toolchain, and the shared [`CommandRunner`] makes
//! every call dry-run aware for free.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::ProviderError;
use crate::process::CommandRunner;
use crate::settings::CodeCommitSettings;

use super::{Provider, repo_short_name};

const PROVIDER_NAME: &str = "codecommit";

pub struct CodeCommitProvider {
    runner: CommandRunner,
    region: Option<String>,
    profile: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateOutput {
    repository_metadata: RepositoryMetadata,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryMetadata {
    clone_url_http: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteOutput {
    repository_id: Option<String>,
}

impl CodeCommitProvider {
    #[must_use]
    pub fn new(settings: &CodeCommitSettings, runner: CommandRunner) -> Self {
        Self {
            runner,
            region: settings.region.clone(),
            profile: settings.profile.clone(),
        }
    }

    async fn aws(&self, subcommand_args: &[&str]) -> Result<String, ProviderError> {
        let mut args: Vec<&str> = vec!["codecommit"];
        args.extend_from_slice(subcommand_args);
        args.extend_from_slice(&["--output", "json"]);

        if let Some(region) = &self.region {
            args.extend_from_slice(&["--region", region]);
        }
        if let Some(profile) = &self.profile {
            args.extend_from_slice(&["--profile", profile]);
        }

        let output = self
            .runner
            .run("aws", &args, None)
            .await
            .map_err(|source| ProviderError::Command {
                provider: PROVIDER_NAME,
                source,
            })?;

        Ok(output.stdout().to_string())
    }

    fn parse<T: for<'de> Deserialize<'de>>(payload: &str) -> Result<T, ProviderError> {
        serde_json::from_str(payload).map_err(|err| ProviderError::Response {
            provider: PROVIDER_NAME,
            message: format!("malformed aws output: {err}"),
        })
    }
}

#[async_trait]
impl Provider for CodeCommitProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn matches(&self, url: &str) -> bool {
        url.contains("codecommit")
    }

    async fn create_repository(&self, url: &str) -> Result<String, ProviderError> {
        let name = repo_short_name(url);
        info!(name, "creating codecommit repository");

        let payload = self
            .aws(&["create-repository", "--repository-name", &name])
            .await?;

        let created: CreateOutput = Self::parse(&payload)?;
        debug!(
            clone_url = %created.repository_metadata.clone_url_http,
            "codecommit repository created"
        );
        Ok(created.repository_metadata.clone_url_http)
    }

    async fn delete_repository(&self, url: &str) -> Result<bool, ProviderError> {
        let name = repo_short_name(url);
        info!(name, "deleting codecommit repository");

        let payload = self
            .aws(&["delete-repository", "--repository-name", &name])
            .await?;

        let deleted: DeleteOutput = Self::parse(&payload)?;
        Ok(deleted.repository_id.is_some())
    }
}
