// git-mirror: Git Repository Mirroring Tool
//
// SPDX-FileCopyrightText: 2026 The git-mirror Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mirroring engine.
//!
//! ```text
//! sync_repository(def)
//!     locate --> clone if absent --> per replica:
//!                                      probe --> create if absent
//!                                      ensure remote (upsert)
//!                --> fetch --prune --> push --mirror per active replica
//! ```
//!
//! Every fallible step is isolated: a failure is logged, counted, and the
//! engine moves on to the next unit of work. The returned count is the
//! number of errors the run accumulated for this repository.

mod integrity;
mod purge;

pub use integrity::{DriftEntry, compute_drift};

use std::path::PathBuf;
use std::time::Instant;

use tracing::{debug, error, info, warn};

use crate::git::{Git, RemoteChange};
use crate::manifest::RepositoryDefinition;
use crate::provider::ProviderRegistry;
use crate::repo::RepoInfo;

pub struct MirrorEngine {
    git: Git,
    providers: ProviderRegistry,
    repo_dir: PathBuf,
}

impl MirrorEngine {
    #[must_use]
    pub fn new(git: Git, providers: ProviderRegistry, repo_dir: PathBuf) -> Self {
        Self {
            git,
            providers,
            repo_dir,
        }
    }

    /// Synchronizes one repository end to end; returns the number of errors
    /// encountered. Failures never propagate past this method.
    pub async fn sync_repository(&self, definition: &RepositoryDefinition) -> usize {
        let info = RepoInfo::locate(&self.repo_dir, definition);
        info!(repo = %info.repo_name, "syncing repository");
        if info.is_alias {
            debug!(
                guid = %definition.guid,
                alias = %info.repo_name,
                "mirror found under alias"
            );
        }

        let mut errors = 0;

        if !info.exists {
            let started = Instant::now();
            if let Err(err) = self
                .git
                .clone_mirror(&info.origin, &info.repo_name, &self.repo_dir)
                .await
            {
                error!(repo = %info.repo_name, %err, "mirror clone failed");
                return 1;
            }
            info!(
                repo = %info.repo_name,
                elapsed = ?started.elapsed(),
                "mirror cloned"
            );
        }

        let mut active: Vec<&str> = Vec::new();
        for (name, url) in &info.replicas {
            match self.prepare_replica(&info, name, url).await {
                Ok(()) => active.push(name.as_str()),
                Err(()) => errors += 1,
            }
        }

        let started = Instant::now();
        if let Err(err) = self.git.fetch_prune(&info.repo_path).await {
            error!(repo = %info.repo_name, %err, "fetch failed, skipping pushes");
            return errors + 1;
        }
        debug!(repo = %info.repo_name, elapsed = ?started.elapsed(), "fetched origin");

        for name in active {
            let started = Instant::now();
            match self.git.push_mirror(&info.repo_path, name).await {
                Ok(()) => {
                    info!(
                        repo = %info.repo_name,
                        replica = name,
                        elapsed = ?started.elapsed(),
                        "pushed to replica"
                    );
                }
                Err(err) => {
                    error!(repo = %info.repo_name, replica = name, %err, "push failed");
                    errors += 1;
                }
            }
        }

        errors
    }

    /// Makes one replica usable for this run: create it on its provider if
    /// it does not exist, then upsert the remote on the local mirror. The
    /// unit error means "this replica sits out the run".
    async fn prepare_replica(&self, info: &RepoInfo, name: &str, url: &str) -> Result<(), ()> {
        // An empty ref listing still means the repository exists; only a
        // failed probe marks it absent.
        if self.git.ls_remote(url).await.is_err() {
            info!(replica = name, url, "replica absent, creating it");
            match self.providers.create_remote(url).await {
                Ok(clone_url) => debug!(replica = name, %clone_url, "replica created"),
                Err(err) => {
                    error!(replica = name, url, %err, "replica creation failed");
                    return Err(());
                }
            }
        }

        match self.git.ensure_remote(&info.repo_path, name, url).await {
            Ok(RemoteChange::Added) => info!(replica = name, url, "replica remote added"),
            Ok(RemoteChange::Updated { previous }) => {
                warn!(replica = name, previous, url, "replica remote url updated");
            }
            Ok(RemoteChange::Unchanged) => {}
            Err(err) => {
                error!(replica = name, %err, "replica remote registration failed");
                return Err(());
            }
        }

        Ok(())
    }

    /// Verifies that every replica carries the same refs as the origin.
    /// Returns the number of errors, counting each drifting ref once.
    pub async fn check_repository(&self, definition: &RepositoryDefinition) -> usize {
        integrity::check_repository(&self.git, definition).await
    }

    /// Deletes this repository's replicas hosted under `target`.
    pub async fn purge_repository(&self, definition: &RepositoryDefinition, target: &str) -> usize {
        purge::purge_repository(&self.providers, definition, target).await
    }
}
