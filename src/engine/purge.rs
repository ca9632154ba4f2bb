// git-mirror: Git Repository Mirroring Tool
//
// SPDX-FileCopyrightText: 2026 The git-mirror Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Replica purge: deletes one provider's replicas of a repository. The
//! local mirror and the manifest are left untouched.

use tracing::{error, info, warn};

use crate::manifest::RepositoryDefinition;
use crate::provider::ProviderRegistry;

/// Deletes every replica of `definition` whose configured name equals
/// `target`; returns the number of failed deletions.
pub(super) async fn purge_repository(
    providers: &ProviderRegistry,
    definition: &RepositoryDefinition,
    target: &str,
) -> usize {
    let mut errors = 0;

    for (name, url) in &definition.replicas {
        if name != target {
            continue;
        }

        match providers.delete_remote(url).await {
            Ok(true) => info!(repo = %definition.guid, replica = %name, url, "replica deleted"),
            Ok(false) => {
                warn!(repo = %definition.guid, replica = %name, url, "replica was not deleted");
            }
            Err(err) => {
                error!(repo = %definition.guid, replica = %name, url, %err, "replica deletion failed");
                errors += 1;
            }
        }
    }

    errors
}
