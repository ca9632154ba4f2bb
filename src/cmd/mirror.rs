// git-mirror: Git Repository Mirroring Tool
//
// SPDX-FileCopyrightText: 2026 The git-mirror Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mirror command implementation.

use crate::engine::MirrorEngine;
use crate::manifest::RepositoryDefinition;

use super::active;

/// Synchronizes every non-skipped repository in manifest order; returns the
/// total error count. One repository's failure never aborts the batch.
pub async fn run_mirror_command(
    engine: &MirrorEngine,
    definitions: &[RepositoryDefinition],
) -> usize {
    let mut errors = 0;
    for definition in active(definitions) {
        errors += engine.sync_repository(definition).await;
    }
    errors
}
