// git-mirror: Git Repository Mirroring Tool
//
// SPDX-FileCopyrightText: 2026 The git-mirror Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integrity command implementation.

use crate::engine::MirrorEngine;
use crate::manifest::RepositoryDefinition;

use super::active;

/// Audits every non-skipped repository for ref drift; returns the total
/// error count. Performs no mutation of any repository.
pub async fn run_integrity_command(
    engine: &MirrorEngine,
    definitions: &[RepositoryDefinition],
) -> usize {
    let mut errors = 0;
    for definition in active(definitions) {
        errors += engine.check_repository(definition).await;
    }
    errors
}
