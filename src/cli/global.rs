// git-mirror: Git Repository Mirroring Tool
//
// SPDX-FileCopyrightText: 2026 The git-mirror Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! ```text
//! -m, --manifest FILE   ← repository manifest (JSON list)
//! -c, --config FILE     ← provider settings (TOML, optional)
//! -v, --log-level LVL   ← console verbosity
//! -l, --log-file FILE   ← log file path (daily rotation)
//!     --dry-run         ← log-only, synthetic success everywhere
//! ```

use std::path::PathBuf;

use clap::Args;

use crate::logging::LogLevel;

/// Global options available for all commands.
#[derive(Debug, Clone, Args)]
pub struct GlobalOptions {
    /// Path to the repository manifest, a JSON list of definitions.
    #[arg(
        short = 'm',
        long = "manifest",
        value_name = "FILE",
        default_value = "repos.json"
    )]
    pub manifest: PathBuf,

    /// Path to the provider settings file (TOML). Environment variables
    /// prefixed with GIT_MIRROR override values from this file.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Console log level (error, warn, info, debug, trace).
    #[arg(
        short = 'v',
        long = "log-level",
        value_name = "LEVEL",
        default_value = "info"
    )]
    pub log_level: LogLevel,

    /// Path to the log file, rotated daily.
    #[arg(
        short = 'l',
        long = "log-file",
        value_name = "FILE",
        default_value = ".logs/git-mirror.log"
    )]
    pub log_file: PathBuf,

    /// Logs every external command and provider call without executing it;
    /// everything reports a synthetic success.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl Default for GlobalOptions {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from("repos.json"),
            config: None,
            log_level: LogLevel::Info,
            log_file: PathBuf::from(".logs/git-mirror.log"),
            dry_run: false,
        }
    }
}
