// git-mirror: Git Repository Mirroring Tool
//
// SPDX-FileCopyrightText: 2026 The git-mirror Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Manifest model and validator.
//!
//! ```text
//! load_manifest(path)
//!      |
//!      v
//!  read file --> serde_json::Value
//!      |
//!      v
//!  root is a list?
//!      |
//!      v
//!  per entry: guid present + pattern
//!             origin present, non-empty
//!             replicas present, names/urls valid
//!             guids unique
//!      |
//!      v
//!  Vec<RepositoryDefinition>
//! ```
//!
//! Validation is all-or-nothing: a single malformed entry fails the load and
//! no repository is processed. Entries with `skip = true` pass validation and
//! are filtered out by the commands.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ManifestError;

/// Pattern a repository guid must match.
fn guid_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z][-_\w]*$").expect("static pattern"))
}

/// Pattern a replica name must match.
fn replica_name_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z]+$").expect("static pattern"))
}

/// One repository entry from the manifest.
///
/// Replica declaration order is preserved: replicas are kept as a vector of
/// `(name, url)` pairs rather than a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryDefinition {
    /// Unique identifier, also the default local mirror directory name.
    pub guid: String,
    /// Source URL all refs are fetched from.
    pub origin: String,
    /// Replica name to replica URL, in declaration order.
    pub replicas: Vec<(String, String)>,
    /// Historical names this repository may already be cloned under.
    pub aliases: Vec<String>,
    /// Excluded from all processing when true.
    pub skip: bool,
    /// Free-form note, unused by the engine.
    pub description: Option<String>,
}

/// Raw deserialization target; everything optional so schema violations can
/// be reported with the offending repository and field named.
#[derive(Debug, Deserialize)]
struct RawDefinition {
    guid: Option<String>,
    origin: Option<String>,
    #[serde(default)]
    replicas: Option<serde_json::Map<String, Value>>,
    #[serde(default)]
    aliases: Option<Vec<String>>,
    #[serde(default)]
    skip: Option<bool>,
    #[serde(default)]
    description: Option<String>,
}

/// Loads and validates the manifest at `path`.
///
/// # Errors
///
/// Returns [`ManifestError::Io`] if the file cannot be read,
/// [`ManifestError::Parse`] if it is not valid JSON, and
/// [`ManifestError::NotAList`] / [`ManifestError::Schema`] for any schema
/// violation. On error, nothing has been processed.
pub fn load_manifest(path: &Path) -> Result<Vec<RepositoryDefinition>, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let root: Value = serde_json::from_str(&content).map_err(|err| ManifestError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    let Value::Array(entries) = root else {
        return Err(ManifestError::NotAList {
            found: json_type_name(&root).to_string(),
        });
    };

    let mut definitions = Vec::with_capacity(entries.len());
    let mut seen_guids = BTreeSet::new();

    for (index, entry) in entries.into_iter().enumerate() {
        let definition = validate_entry(index, entry)?;

        if !seen_guids.insert(definition.guid.clone()) {
            return Err(ManifestError::Schema {
                repo: definition.guid,
                message: "duplicate guid".to_string(),
            });
        }

        definitions.push(definition);
    }

    Ok(definitions)
}

fn validate_entry(index: usize, entry: Value) -> Result<RepositoryDefinition, ManifestError> {
    let position = format!("entry #{index}");

    if !entry.is_object() {
        return Err(ManifestError::Schema {
            repo: position,
            message: format!(
                "expected repo definition to be a map, got {}",
                json_type_name(&entry)
            ),
        });
    }

    let raw: RawDefinition =
        serde_json::from_value(entry).map_err(|err| ManifestError::Schema {
            repo: position.clone(),
            message: err.to_string(),
        })?;

    let guid = raw.guid.ok_or_else(|| ManifestError::Schema {
        repo: position.clone(),
        message: "missing [guid] field".to_string(),
    })?;

    if !guid_pattern().is_match(&guid) {
        return Err(ManifestError::Schema {
            repo: guid.clone(),
            message: format!("guid [{guid}] does not match ^[a-z][-_\\w]*$"),
        });
    }

    let origin = raw.origin.ok_or_else(|| ManifestError::Schema {
        repo: guid.clone(),
        message: "missing [origin] field".to_string(),
    })?;

    if origin.trim().is_empty() {
        return Err(ManifestError::Schema {
            repo: guid,
            message: "expected [origin] to be a non-empty URL".to_string(),
        });
    }

    // An empty map is valid (a mirror-only repository); a missing field is
    // not, so a forgotten replicas block fails loudly instead of silently
    // mirroring to nowhere.
    let raw_replicas = raw.replicas.ok_or_else(|| ManifestError::Schema {
        repo: guid.clone(),
        message: "missing [replicas] field".to_string(),
    })?;

    let mut replicas = Vec::new();
    for (name, value) in raw_replicas {
        if !replica_name_pattern().is_match(&name) {
            return Err(ManifestError::Schema {
                repo: guid,
                message: format!("replica name [{name}] does not match ^[a-z]+$"),
            });
        }

        let Value::String(url) = value else {
            return Err(ManifestError::Schema {
                repo: guid,
                message: format!(
                    "expected replica [{name}] to be a string, got {}",
                    json_type_name(&value)
                ),
            });
        };

        if url.trim().is_empty() {
            return Err(ManifestError::Schema {
                repo: guid,
                message: format!("expected replica [{name}] to be a non-empty URL"),
            });
        }

        replicas.push((name, url));
    }

    Ok(RepositoryDefinition {
        guid,
        origin,
        replicas,
        aliases: raw.aliases.unwrap_or_default(),
        skip: raw.skip.unwrap_or(false),
        description: raw.description,
    })
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "map",
    }
}

#[cfg(test)]
mod tests;
