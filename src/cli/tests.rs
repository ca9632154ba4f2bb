// git-mirror: Git Repository Mirroring Tool
//
// SPDX-FileCopyrightText: 2026 The git-mirror Authors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use clap::Parser;

use crate::cli::{Cli, Command};
use crate::logging::LogLevel;

#[test]
fn test_parse_mirror_defaults() {
    let cli = Cli::try_parse_from(["git-mirror", "mirror"]).unwrap();

    assert_eq!(cli.global.manifest, PathBuf::from("repos.json"));
    assert_eq!(cli.global.log_level, LogLevel::Info);
    assert_eq!(cli.global.log_file, PathBuf::from(".logs/git-mirror.log"));
    assert!(!cli.global.dry_run);
    assert!(cli.global.config.is_none());

    match cli.command {
        Some(Command::Mirror(args)) => assert_eq!(args.repo_dir, PathBuf::from(".repos")),
        other => panic!("expected mirror command, got {other:?}"),
    }
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "git-mirror",
        "-m",
        "custom.json",
        "-v",
        "debug",
        "-l",
        "/var/log/mirror.log",
        "--dry-run",
        "mirror",
        "-d",
        "/srv/mirrors",
    ])
    .unwrap();

    assert_eq!(cli.global.manifest, PathBuf::from("custom.json"));
    assert_eq!(cli.global.log_level, LogLevel::Debug);
    assert_eq!(cli.global.log_file, PathBuf::from("/var/log/mirror.log"));
    assert!(cli.global.dry_run);

    match cli.command {
        Some(Command::Mirror(args)) => assert_eq!(args.repo_dir, PathBuf::from("/srv/mirrors")),
        other => panic!("expected mirror command, got {other:?}"),
    }
}

#[test]
fn test_parse_integrity() {
    let cli = Cli::try_parse_from(["git-mirror", "integrity"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Integrity)));
}

#[test]
fn test_parse_purge_requires_target() {
    assert!(Cli::try_parse_from(["git-mirror", "purge"]).is_err());

    let cli = Cli::try_parse_from(["git-mirror", "purge", "--target", "gitlab"]).unwrap();
    match cli.command {
        Some(Command::Purge(args)) => assert_eq!(args.target, "gitlab"),
        other => panic!("expected purge command, got {other:?}"),
    }
}

#[test]
fn test_parse_no_command() {
    let cli = Cli::try_parse_from(["git-mirror"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn test_parse_rejects_bad_log_level() {
    assert!(Cli::try_parse_from(["git-mirror", "-v", "loud", "mirror"]).is_err());
}
