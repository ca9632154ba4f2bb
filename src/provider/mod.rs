// git-mirror: Git Repository Mirroring Tool
//
// SPDX-FileCopyrightText: 2026 The git-mirror Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Hosting provider abstraction.
//!
//! ```text
//! ProviderRegistry
//!   create_remote(url) / delete_remote(url)
//!        |
//!        v
//!   first provider whose matches(url) --> create/delete
//!   none --> ProviderError::NoProvider
//!
//! Providers:
//!   GitlabProvider      REST v4 via reqwest
//!   CodeCommitProvider  aws CLI via CommandRunner
//! ```
//!
//! The registry is the only entry point the engine uses; adding a hosting
//! service means implementing [`Provider`] and registering an instance in
//! [`ProviderRegistry::from_settings`], with no change to orchestration.

mod codecommit;
mod gitlab;

pub use codecommit::CodeCommitProvider;
pub use gitlab::GitlabProvider;

use async_trait::async_trait;
use tracing::info;

use crate::error::ProviderError;
use crate::process::CommandRunner;
use crate::settings::Settings;

/// One hosting service that can own replica repositories.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Stable provider name, as used in settings and log lines.
    fn name(&self) -> &'static str;

    /// Whether this provider recognizes `url` as one of its own.
    fn matches(&self, url: &str) -> bool;

    /// Creates the repository `url` points at and returns its clone URL.
    async fn create_repository(&self, url: &str) -> Result<String, ProviderError>;

    /// Deletes the repository `url` points at; `true` when the service
    /// confirmed the deletion.
    async fn delete_repository(&self, url: &str) -> Result<bool, ProviderError>;
}

/// Derives a repository's short name from its URL: the final path segment
/// with any extension removed.
#[must_use]
pub fn repo_short_name(url: &str) -> String {
    let base = url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|s| s.rsplit(':').next())
        .unwrap_or(url);

    std::path::Path::new(base)
        .file_stem()
        .map_or_else(|| base.to_string(), |s| s.to_string_lossy().into_owned())
}

/// Ordered collection of enabled providers with first-match dispatch.
pub struct ProviderRegistry {
    providers: Vec<Box<dyn Provider>>,
    dry_run: bool,
}

impl ProviderRegistry {
    /// Builds the registry from settings. Only enabled providers are
    /// registered; the CodeCommit provider reuses the application's command
    /// runner so its CLI calls honor dry-run mode.
    #[must_use]
    pub fn from_settings(settings: &Settings, runner: CommandRunner) -> Self {
        let mut providers: Vec<Box<dyn Provider>> = Vec::new();

        if settings.gitlab.enabled {
            providers.push(Box::new(GitlabProvider::new(&settings.gitlab)));
            info!("using gitlab provider");
        }

        if settings.codecommit.enabled {
            providers.push(Box::new(CodeCommitProvider::new(
                &settings.codecommit,
                runner,
            )));
            info!("using codecommit provider");
        }

        Self {
            providers,
            dry_run: runner.is_dry_run(),
        }
    }

    /// Registry with an explicit provider list, mainly for tests.
    #[must_use]
    pub fn with_providers(providers: Vec<Box<dyn Provider>>, dry_run: bool) -> Self {
        Self { providers, dry_run }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    fn find(&self, url: &str) -> Result<&dyn Provider, ProviderError> {
        self.providers
            .iter()
            .map(AsRef::as_ref)
            .find(|p| p.matches(url))
            .ok_or_else(|| ProviderError::NoProvider {
                url: url.to_string(),
            })
    }

    /// Creates the repository behind `url` on the first matching provider
    /// and returns the clone URL the provider reports.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::NoProvider`] when no provider matches, or
    /// the matching provider's creation error.
    pub async fn create_remote(&self, url: &str) -> Result<String, ProviderError> {
        if self.dry_run {
            info!(url, "dry run: would create repository");
            return Ok(url.to_string());
        }

        self.find(url)?.create_repository(url).await
    }

    /// Deletes the repository behind `url` on the first matching provider.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::NoProvider`] when no provider matches, or
    /// the matching provider's deletion error.
    pub async fn delete_remote(&self, url: &str) -> Result<bool, ProviderError> {
        if self.dry_run {
            info!(url, "dry run: would delete repository");
            return Ok(true);
        }

        self.find(url)?.delete_repository(url).await
    }
}

#[cfg(test)]
mod tests;
