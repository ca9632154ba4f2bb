// git-mirror: Git Repository Mirroring Tool
//
// SPDX-FileCopyrightText: 2026 The git-mirror Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   mirror, integrity, purge
//! ```
//!
//! Each handler walks the manifest in declaration order, skipping definitions
//! marked `skip`, and returns the total number of errors accumulated across
//! all repositories. The process exit code is derived from that total.

pub mod integrity;
pub mod mirror;
pub mod purge;

use tracing::debug;

use crate::manifest::RepositoryDefinition;

/// Definitions eligible for processing, in manifest order.
fn active(
    definitions: &[RepositoryDefinition],
) -> impl Iterator<Item = &RepositoryDefinition> {
    definitions.iter().filter(|def| {
        if def.skip {
            debug!(repo = %def.guid, "skipping repository");
        }
        !def.skip
    })
}
