// git-mirror: Git Repository Mirroring Tool
//
// SPDX-FileCopyrightText: 2026 The git-mirror Authors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use super::load_manifest;
use crate::error::ManifestError;

fn write_manifest(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("failed to write manifest");
    file
}

#[test]
fn test_load_valid_manifest() {
    let file = write_manifest(
        r#"[
            {
                "guid": "tools",
                "origin": "ssh://git@origin.example.com/tools.git",
                "replicas": {
                    "gitlab": "git@gitlab.com:mirrors/tools.git",
                    "codecommit": "https://git-codecommit.eu-west-1.amazonaws.com/v1/repos/tools"
                },
                "aliases": ["legacy-tools"],
                "description": "internal tooling"
            },
            {
                "guid": "infra",
                "origin": "ssh://git@origin.example.com/infra.git",
                "replicas": {},
                "skip": true
            }
        ]"#,
    );

    let repos = load_manifest(file.path()).expect("manifest should load");
    assert_eq!(repos.len(), 2);

    let tools = &repos[0];
    assert_eq!(tools.guid, "tools");
    assert_eq!(tools.aliases, vec!["legacy-tools"]);
    assert!(!tools.skip);
    // replica declaration order is preserved
    assert_eq!(tools.replicas[0].0, "gitlab");
    assert_eq!(tools.replicas[1].0, "codecommit");

    assert!(repos[1].skip);
    assert!(repos[1].replicas.is_empty());
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_manifest(&PathBuf::from("/nonexistent/repos.json"))
        .expect_err("missing file should fail");
    assert!(matches!(err, ManifestError::Io { .. }));
}

#[test]
fn test_invalid_json_is_parse_error() {
    let file = write_manifest("[{not json");
    let err = load_manifest(file.path()).expect_err("broken JSON should fail");
    assert!(matches!(err, ManifestError::Parse { .. }));
}

#[test]
fn test_root_must_be_a_list() {
    let file = write_manifest(r#"{"guid": "tools"}"#);
    let err = load_manifest(file.path()).expect_err("object root should fail");
    match err {
        ManifestError::NotAList { found } => assert_eq!(found, "map"),
        other => panic!("expected NotAList, got {other}"),
    }
}

#[test]
fn test_missing_origin_names_the_repo() {
    let file = write_manifest(r#"[{"guid": "tools"}]"#);
    let err = load_manifest(file.path()).expect_err("missing origin should fail");
    match err {
        ManifestError::Schema { repo, message } => {
            assert_eq!(repo, "tools");
            assert!(message.contains("origin"));
        }
        other => panic!("expected Schema, got {other}"),
    }
}

#[test]
fn test_missing_guid_is_rejected() {
    let file = write_manifest(r#"[{"origin": "ssh://git@example.com/x.git"}]"#);
    let err = load_manifest(file.path()).expect_err("missing guid should fail");
    match err {
        ManifestError::Schema { message, .. } => assert!(message.contains("guid")),
        other => panic!("expected Schema, got {other}"),
    }
}

#[test]
fn test_guid_pattern_is_enforced() {
    for bad in ["Tools", "1tools", "-tools", ""] {
        let file = write_manifest(&format!(
            r#"[{{"guid": "{bad}", "origin": "ssh://git@example.com/x.git"}}]"#
        ));
        let err = load_manifest(file.path()).expect_err("bad guid should fail");
        assert!(matches!(err, ManifestError::Schema { .. }), "guid: {bad}");
    }

    // hyphens, underscores, and digits after the first letter are fine
    let file = write_manifest(
        r#"[{"guid": "my-repo_2", "origin": "ssh://git@example.com/x.git", "replicas": {}}]"#,
    );
    assert!(load_manifest(file.path()).is_ok());
}

#[test]
fn test_missing_replicas_is_rejected() {
    let file = write_manifest(
        r#"[{"guid": "tools", "origin": "ssh://git@example.com/x.git"}]"#,
    );
    let err = load_manifest(file.path()).expect_err("missing replicas should fail");
    match err {
        ManifestError::Schema { repo, message } => {
            assert_eq!(repo, "tools");
            assert!(message.contains("replicas"));
        }
        other => panic!("expected Schema, got {other}"),
    }
}

#[test]
fn test_replica_name_pattern_is_enforced() {
    let file = write_manifest(
        r#"[{
            "guid": "tools",
            "origin": "ssh://git@example.com/x.git",
            "replicas": {"GitLab": "git@gitlab.com:mirrors/x.git"}
        }]"#,
    );
    let err = load_manifest(file.path()).expect_err("bad replica name should fail");
    match err {
        ManifestError::Schema { repo, message } => {
            assert_eq!(repo, "tools");
            assert!(message.contains("GitLab"));
        }
        other => panic!("expected Schema, got {other}"),
    }
}

#[test]
fn test_replica_value_must_be_string() {
    let file = write_manifest(
        r#"[{
            "guid": "tools",
            "origin": "ssh://git@example.com/x.git",
            "replicas": {"gitlab": 42}
        }]"#,
    );
    let err = load_manifest(file.path()).expect_err("numeric replica should fail");
    match err {
        ManifestError::Schema { message, .. } => {
            assert!(message.contains("gitlab"));
            assert!(message.contains("number"));
        }
        other => panic!("expected Schema, got {other}"),
    }
}

#[test]
fn test_entry_must_be_a_map() {
    let file = write_manifest(r#"["tools"]"#);
    let err = load_manifest(file.path()).expect_err("string entry should fail");
    match err {
        ManifestError::Schema { repo, message } => {
            assert_eq!(repo, "entry #0");
            assert!(message.contains("string"));
        }
        other => panic!("expected Schema, got {other}"),
    }
}

#[test]
fn test_duplicate_guid_is_rejected() {
    let file = write_manifest(
        r#"[
            {"guid": "tools", "origin": "ssh://git@example.com/a.git", "replicas": {}},
            {"guid": "tools", "origin": "ssh://git@example.com/b.git", "replicas": {}}
        ]"#,
    );
    let err = load_manifest(file.path()).expect_err("duplicate guid should fail");
    match err {
        ManifestError::Schema { repo, message } => {
            assert_eq!(repo, "tools");
            assert!(message.contains("duplicate"));
        }
        other => panic!("expected Schema, got {other}"),
    }
}
