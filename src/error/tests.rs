// git-mirror: Git Repository Mirroring Tool
//
// SPDX-FileCopyrightText: 2026 The git-mirror Authors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ManifestError, MirrorError, MirrorResult, ProcessError, ProviderError};

#[test]
fn test_manifest_error_display() {
    let err = ManifestError::Schema {
        repo: "tools".to_string(),
        message: "missing [origin] field".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "invalid manifest entry [tools]: missing [origin] field"
    );
}

#[test]
fn test_process_error_output_accessors() {
    let err = ProcessError::NonZeroExit {
        command: "git fetch --prune origin".to_string(),
        code: 128,
        stdout: String::new(),
        stderr: "fatal: unable to access".to_string(),
    };
    assert_eq!(err.stderr(), "fatal: unable to access");
    assert_eq!(err.stdout(), "");

    let err = ProcessError::ExecutableNotFound {
        name: "git".to_string(),
    };
    assert_eq!(err.stderr(), "");
}

#[test]
fn test_no_provider_display() {
    let err = ProviderError::NoProvider {
        url: "ssh://git@example.com/unknown/repo.git".to_string(),
    };
    assert!(err.to_string().contains("no provider found"));
    assert!(err.to_string().contains("unknown/repo.git"));
}

#[test]
fn test_mirror_error_size() {
    // All variants are boxed, so the top-level enum stays pointer-sized
    // plus discriminant.
    let size = std::mem::size_of::<MirrorError>();
    assert!(size <= 16, "MirrorError is {size} bytes, expected <= 16");
}

#[test]
fn test_mirror_result_size() {
    let size = std::mem::size_of::<MirrorResult<()>>();
    assert!(size <= 16, "MirrorResult<()> is {size} bytes, expected <= 16");
}

#[test]
fn test_boxed_from_conversions() {
    fn takes_mirror_error(_: MirrorError) {}

    takes_mirror_error(
        ManifestError::NotAList {
            found: "object".to_string(),
        }
        .into(),
    );
    takes_mirror_error(
        ProcessError::ExecutableNotFound {
            name: "aws".to_string(),
        }
        .into(),
    );
}
