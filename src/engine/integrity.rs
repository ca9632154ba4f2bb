// git-mirror: Git Repository Mirroring Tool
//
// SPDX-FileCopyrightText: 2026 The git-mirror Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integrity verification: compares the origin's advertised refs with each
//! replica's, without touching the local mirror.

use tracing::{error, info};

use crate::git::{Git, RefMap, strip_head};
use crate::manifest::RepositoryDefinition;

/// One ref that differs between origin and replica. A `None` side means the
/// ref does not exist there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriftEntry {
    pub ref_name: String,
    pub origin: Option<String>,
    pub replica: Option<String>,
}

/// Symmetric difference of two ref maps, grouped by ref name and sorted.
/// `HEAD` must already be stripped by the caller.
#[must_use]
pub fn compute_drift(origin: &RefMap, replica: &RefMap) -> Vec<DriftEntry> {
    let mut drift = Vec::new();

    for (ref_name, origin_hash) in origin {
        match replica.get(ref_name) {
            Some(replica_hash) if replica_hash == origin_hash => {}
            replica_hash => drift.push(DriftEntry {
                ref_name: ref_name.clone(),
                origin: Some(origin_hash.clone()),
                replica: replica_hash.cloned(),
            }),
        }
    }

    for (ref_name, replica_hash) in replica {
        if !origin.contains_key(ref_name) {
            drift.push(DriftEntry {
                ref_name: ref_name.clone(),
                origin: None,
                replica: Some(replica_hash.clone()),
            });
        }
    }

    // Both inputs iterate sorted, but the two passes interleave.
    drift.sort_by(|a, b| a.ref_name.cmp(&b.ref_name));
    drift
}

/// Checks every replica of one repository against its origin; returns the
/// error count (unreachable remotes and individual drifting refs).
pub(super) async fn check_repository(git: &Git, definition: &RepositoryDefinition) -> usize {
    info!(repo = %definition.guid, "checking repository integrity");

    let mut origin_refs = match git.ls_remote(&definition.origin).await {
        Ok(refs) => refs,
        Err(err) => {
            error!(repo = %definition.guid, %err, "origin unreachable");
            return 1;
        }
    };
    strip_head(&mut origin_refs);

    let mut errors = 0;

    for (name, url) in &definition.replicas {
        let mut replica_refs = match git.ls_remote(url).await {
            Ok(refs) => refs,
            Err(err) => {
                error!(repo = %definition.guid, replica = %name, %err, "replica unreachable");
                errors += 1;
                continue;
            }
        };
        strip_head(&mut replica_refs);

        let drift = compute_drift(&origin_refs, &replica_refs);
        if drift.is_empty() {
            info!(repo = %definition.guid, replica = %name, "replica in sync");
            continue;
        }

        for entry in &drift {
            error!(
                repo = %definition.guid,
                replica = %name,
                ref_name = %entry.ref_name,
                origin = entry.origin.as_deref().unwrap_or("<missing>"),
                replica_hash = entry.replica.as_deref().unwrap_or("<missing>"),
                "ref drift"
            );
        }
        errors += drift.len();
    }

    errors
}
