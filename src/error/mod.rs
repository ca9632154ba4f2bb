// git-mirror: Git Repository Mirroring Tool
//
// SPDX-FileCopyrightText: 2026 The git-mirror Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            MirrorError
//!                 |
//!     +-----+-----+------+--------+
//!     v     v     v      v        v
//! Manifest Proc  Git  Provider Settings  Io
//!   Box    Box   Box    Box      Box     Box
//!
//! Sub-errors:
//!   Manifest  Io, Parse, Schema, NotAList
//!   Process   ExecutableNotFound, SpawnFailed, NonZeroExit
//!   Git       CommandFailed, UnreachableRemote, MalformedRefLine
//!   Provider  NoProvider, Api, Response, Command, Network
//!   Settings  Load, InvalidValue
//!
//! All variants boxed to keep MirrorError small on the stack.
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`MirrorError`].
pub type MirrorResult<T> = std::result::Result<T, MirrorError>;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// Manifest loading or validation failed.
    #[error("manifest error: {0}")]
    Manifest(#[from] Box<ManifestError>),

    /// External command execution failed.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Hosting provider operation failed.
    #[error("provider error: {0}")]
    Provider(#[from] Box<ProviderError>),

    /// Settings loading error.
    #[error("settings error: {0}")]
    Settings(#[from] Box<SettingsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for MirrorError {
                fn from(err: $error) -> Self {
                    MirrorError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ManifestError => Manifest,
    ProcessError => Process,
    GitError => Git,
    ProviderError => Provider,
    SettingsError => Settings,
    std::io::Error => Io,
}

// --- Manifest Errors ---

/// Manifest loading and validation errors.
///
/// Any variant aborts the whole run before a single repository is touched.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Failed to read the manifest file.
    #[error("failed to read manifest '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid JSON.
    #[error("failed to parse manifest '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    /// The manifest is valid JSON but violates the schema.
    #[error("invalid manifest entry [{repo}]: {message}")]
    Schema { repo: String, message: String },

    /// The manifest root is not a list of repository definitions.
    #[error("expected manifest root to be a list, got {found}")]
    NotAList { found: String },
}

// --- Process Errors ---

/// External command execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn the process at all.
    #[error("failed to spawn '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process ran but exited with a non-zero status.
    #[error("command '{command}' exited with status {code}")]
    NonZeroExit {
        command: String,
        code: i32,
        stdout: String,
        stderr: String,
    },
}

impl ProcessError {
    /// Captured stderr of the failed command, empty when unavailable.
    #[must_use]
    pub fn stderr(&self) -> &str {
        match self {
            Self::NonZeroExit { stderr, .. } => stderr,
            _ => "",
        }
    }

    /// Captured stdout of the failed command, empty when unavailable.
    #[must_use]
    pub fn stdout(&self) -> &str {
        match self {
            Self::NonZeroExit { stdout, .. } => stdout,
            _ => "",
        }
    }
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// A git subcommand failed.
    #[error("git {operation} failed: {source}")]
    CommandFailed {
        operation: String,
        #[source]
        source: ProcessError,
    },

    /// A remote could not be listed (absent, unreachable, or denied).
    #[error("remote [{url}] is unreachable")]
    UnreachableRemote { url: String },

    /// `ls-remote` produced a line that does not look like `<hash>\t<ref>`.
    #[error("malformed ls-remote line from [{url}]: {line}")]
    MalformedRefLine { url: String, line: String },
}

// --- Provider Errors ---

/// Hosting provider errors.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No registered provider recognizes the URL.
    #[error("no provider found for url [{url}]")]
    NoProvider { url: String },

    /// The provider's API rejected the call.
    #[error("{provider} API error {status}: {message}")]
    Api {
        provider: &'static str,
        status: u16,
        message: String,
    },

    /// The provider's API answered with something unusable.
    #[error("{provider} returned an unexpected response: {message}")]
    Response {
        provider: &'static str,
        message: String,
    },

    /// A provider call that goes through an external CLI failed.
    #[error("{provider} command failed: {source}")]
    Command {
        provider: &'static str,
        #[source]
        source: ProcessError,
    },

    /// Network-level failure talking to the provider.
    #[error("{provider} request failed: {source}")]
    Network {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

// --- Settings Errors ---

/// Settings loading errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings sources could not be read or merged.
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    /// A settings value is present but unusable.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

#[cfg(test)]
mod tests;
