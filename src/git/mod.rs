// git-mirror: Git Repository Mirroring Tool
//
// SPDX-FileCopyrightText: 2026 The git-mirror Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations using the external git binary.
//!
//! ```text
//! Git --> CommandRunner --> git (CLI)
//!
//! clone_mirror   git clone --mirror <origin> <name>
//! fetch_prune    git fetch --prune origin
//! push_mirror    git push --mirror <remote>
//! ensure_remote  git config --get / remote add --mirror / remote set-url
//! ls_remote      git ls-remote <url>  -->  RefMap
//! ```
//!
//! All ref transfer is delegated to git's mirror mode; this module never
//! speaks the git network protocol itself. Every invocation sets
//! `GIT_TERMINAL_PROMPT=0` so an unreachable or credential-less remote fails
//! instead of hanging on a prompt.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::GitError;
use crate::process::{CommandOutput, CommandRunner};

/// Ref name to 40-hex commit hash, as listed by one remote.
///
/// Includes the `HEAD` pseudo-ref whenever the remote has at least one
/// commit; a reachable empty repository produces an empty map.
pub type RefMap = BTreeMap<String, String>;

/// Outcome of a replica remote upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteChange {
    /// The remote did not exist and was added as a mirror-push remote.
    Added,
    /// The remote existed with a different URL, which was replaced.
    Updated { previous: String },
    /// The remote already pointed at the requested URL.
    Unchanged,
}

/// Git operations over the command runner.
#[derive(Debug, Clone, Copy)]
pub struct Git {
    runner: CommandRunner,
}

impl Git {
    #[must_use]
    pub const fn new(runner: CommandRunner) -> Self {
        Self { runner }
    }

    async fn git(
        &self,
        operation: &str,
        args: &[&str],
        cwd: Option<&Path>,
    ) -> Result<CommandOutput, GitError> {
        self.runner
            .run_with_env("git", args, cwd, &[("GIT_TERMINAL_PROMPT", "0")])
            .await
            .map_err(|source| GitError::CommandFailed {
                operation: operation.to_string(),
                source,
            })
    }

    /// Clones `origin` as a bare mirror named `name` under `repo_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::CommandFailed`] when the clone fails.
    pub async fn clone_mirror(
        &self,
        origin: &str,
        name: &str,
        repo_dir: &Path,
    ) -> Result<(), GitError> {
        self.git("clone", &["clone", "--mirror", origin, name], Some(repo_dir))
            .await?;
        Ok(())
    }

    /// Fetches from `origin` into the mirror at `repo_path`, pruning refs
    /// that vanished upstream.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::CommandFailed`] when the fetch fails.
    pub async fn fetch_prune(&self, repo_path: &Path) -> Result<(), GitError> {
        self.git("fetch", &["fetch", "--prune", "origin"], Some(repo_path))
            .await?;
        Ok(())
    }

    /// Pushes the mirror's exact ref set (including deletions) to `remote`.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::CommandFailed`] when the push fails.
    pub async fn push_mirror(&self, repo_path: &Path, remote: &str) -> Result<(), GitError> {
        self.git("push", &["push", "--mirror", remote], Some(repo_path))
            .await?;
        Ok(())
    }

    /// Returns the configured URL of remote `name`, or `None` if the remote
    /// is not configured on the repository at `repo_path`.
    pub async fn remote_url(&self, repo_path: &Path, name: &str) -> Option<String> {
        let key = format!("remote.{name}.url");
        match self
            .git("config --get", &["config", "--get", &key], Some(repo_path))
            .await
        {
            Ok(output) => Some(output.stdout_first_line().to_string()),
            Err(err) => {
                trace!(remote = name, %err, "remote url not configured");
                None
            }
        }
    }

    /// Upserts remote `name` so it points at `url` as a mirror-push remote.
    ///
    /// Idempotent: absent remotes are added, remotes with a stale URL are
    /// updated in place, and matching remotes are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::CommandFailed`] when the add or set-url fails.
    pub async fn ensure_remote(
        &self,
        repo_path: &Path,
        name: &str,
        url: &str,
    ) -> Result<RemoteChange, GitError> {
        match self.remote_url(repo_path, name).await {
            Some(current) if current == url => {
                debug!(remote = name, url, "replica already configured");
                Ok(RemoteChange::Unchanged)
            }
            Some(current) => {
                self.git(
                    "remote set-url",
                    &["remote", "set-url", name, url],
                    Some(repo_path),
                )
                .await?;
                debug!(remote = name, old = %current, new = url, "replica url updated");
                Ok(RemoteChange::Updated { previous: current })
            }
            None => {
                self.git(
                    "remote add",
                    &["remote", "add", "--mirror=push", name, url],
                    Some(repo_path),
                )
                .await?;
                debug!(remote = name, url, "replica added");
                Ok(RemoteChange::Added)
            }
        }
    }

    /// Lists the full ref map of the remote at `url`.
    ///
    /// A reachable remote with no commits yields an empty map; this is
    /// distinct from the error case, which means unreachable or absent.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::UnreachableRemote`] when the listing fails, and
    /// [`GitError::MalformedRefLine`] when the output cannot be parsed.
    pub async fn ls_remote(&self, url: &str) -> Result<RefMap, GitError> {
        let output = match self.git("ls-remote", &["ls-remote", url], None).await {
            Ok(output) => output,
            Err(err) => {
                debug!(url, %err, "ls-remote failed");
                return Err(GitError::UnreachableRemote {
                    url: url.to_string(),
                });
            }
        };

        parse_ref_listing(output.stdout(), url)
    }
}

/// Parses `git ls-remote` output (`<40-hex>\t<ref>` per line) into a
/// [`RefMap`].
///
/// # Errors
///
/// Returns [`GitError::MalformedRefLine`] for any line that does not split
/// into a 40-hex hash and a ref name.
pub fn parse_ref_listing(listing: &str, url: &str) -> Result<RefMap, GitError> {
    let mut refs = RefMap::new();

    for line in listing.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let malformed = || GitError::MalformedRefLine {
            url: url.to_string(),
            line: line.to_string(),
        };

        let (hash, name) = line.split_once('\t').ok_or_else(malformed)?;
        if hash.len() != 40 || !hash.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(malformed());
        }

        refs.insert(name.trim().to_string(), hash.to_string());
    }

    Ok(refs)
}

/// Removes the `HEAD` pseudo-ref from a ref map.
///
/// `HEAD` is a derived pointer, not an independent ref; leaving it in place
/// would make every pair of remotes with different default branches look
/// drifted.
pub fn strip_head(refs: &mut RefMap) {
    refs.remove("HEAD");
}
