// git-mirror: Git Repository Mirroring Tool
//
// SPDX-FileCopyrightText: 2026 The git-mirror Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for git-mirror using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! git-mirror [global options] <command>
//! mirror [-d REPO_DIR]
//! integrity
//! purge --target <provider>
//! ```

pub mod global;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::cli::global::GlobalOptions;

/// Git repository mirroring tool.
///
/// Keeps a set of local bare mirrors and their hosted replicas in sync with
/// the origin repositories declared in a JSON manifest.
#[derive(Debug, Parser)]
#[command(
    name = "git-mirror",
    author,
    version,
    about = "Automate repo mirroring",
    long_about = "git-mirror Copyright (C) 2026 The git-mirror Authors\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads a JSON manifest of repositories, maintains a local bare\n\
                  mirror of each origin, and pushes every ref to the declared\n\
                  replica remotes. See `git-mirror <command> --help` for more\n\
                  information about a command."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Synchronizes local mirrors and replica remotes with their origins.
    Mirror(MirrorArgs),

    /// Audits ref drift between origins and replicas; mutates nothing.
    Integrity,

    /// Deletes every replica hosted by one provider across the manifest.
    Purge(PurgeArgs),
}

/// Arguments for the `mirror` command.
#[derive(Debug, Clone, Args)]
pub struct MirrorArgs {
    /// Directory holding the local bare mirrors, created if absent.
    #[arg(
        short = 'd',
        long = "repo-dir",
        value_name = "DIR",
        default_value = ".repos"
    )]
    pub repo_dir: PathBuf,
}

/// Arguments for the `purge` command.
#[derive(Debug, Clone, Args)]
pub struct PurgeArgs {
    /// Replica name whose repositories are deleted (e.g. `gitlab`).
    #[arg(long = "target", value_name = "PROVIDER")]
    pub target: String,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
