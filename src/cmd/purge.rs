// git-mirror: Git Repository Mirroring Tool
//
// SPDX-FileCopyrightText: 2026 The git-mirror Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Purge command implementation.

use tracing::warn;

use crate::engine::MirrorEngine;
use crate::manifest::RepositoryDefinition;

use super::active;

/// Deletes every replica named `target` across the manifest; returns the
/// total error count. Local mirrors and the manifest itself are untouched.
pub async fn run_purge_command(
    engine: &MirrorEngine,
    definitions: &[RepositoryDefinition],
    target: &str,
) -> usize {
    warn!(target, "purging all replicas of provider");

    let mut errors = 0;
    for definition in active(definitions) {
        errors += engine.purge_repository(definition, target).await;
    }
    errors
}
