// git-mirror: Git Repository Mirroring Tool
//
// SPDX-FileCopyrightText: 2026 The git-mirror Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository location on disk.
//!
//! ```text
//! RepoInfo::locate(repo_dir, def)
//!        |
//!        v
//!  repo_dir/guid exists? --- yes --> exists, not an alias
//!        |
//!        v
//!  first alias dir that exists --> exists, is_alias, name = alias
//!        |
//!        v
//!  neither --> exists = false, name stays guid
//! ```
//!
//! Repositories get renamed upstream. A mirror already cloned under an old
//! name must keep being used under that name, otherwise a rename would
//! silently duplicate the mirror and its replicas.

use std::path::{Path, PathBuf};

use crate::manifest::RepositoryDefinition;

/// Runtime view of one repository, rebuilt for every run.
#[derive(Debug, Clone)]
pub struct RepoInfo {
    /// Parent directory holding all mirrors.
    pub repo_dir: PathBuf,
    /// Resolved directory name: the guid, or the alias that matched on disk.
    pub repo_name: String,
    /// `repo_dir` joined with `repo_name`.
    pub repo_path: PathBuf,
    /// Whether the mirror directory already exists.
    pub exists: bool,
    /// True when `repo_name` came from an alias rather than the guid.
    pub is_alias: bool,
    /// Origin URL from the manifest.
    pub origin: String,
    /// Declared replicas, in manifest order.
    pub replicas: Vec<(String, String)>,
}

impl RepoInfo {
    /// Resolves the on-disk location of `definition`'s mirror under
    /// `repo_dir`, falling back to aliases in declaration order.
    #[must_use]
    pub fn locate(repo_dir: &Path, definition: &RepositoryDefinition) -> Self {
        let primary = repo_dir.join(&definition.guid);
        if primary.exists() {
            return Self {
                repo_dir: repo_dir.to_path_buf(),
                repo_name: definition.guid.clone(),
                repo_path: primary,
                exists: true,
                is_alias: false,
                origin: definition.origin.clone(),
                replicas: definition.replicas.clone(),
            };
        }

        for alias in &definition.aliases {
            let candidate = repo_dir.join(alias);
            if candidate.exists() {
                return Self {
                    repo_dir: repo_dir.to_path_buf(),
                    repo_name: alias.clone(),
                    repo_path: candidate,
                    exists: true,
                    is_alias: true,
                    origin: definition.origin.clone(),
                    replicas: definition.replicas.clone(),
                };
            }
        }

        Self {
            repo_dir: repo_dir.to_path_buf(),
            repo_name: definition.guid.clone(),
            repo_path: primary,
            exists: false,
            is_alias: false,
            origin: definition.origin.clone(),
            replicas: definition.replicas.clone(),
        }
    }
}
